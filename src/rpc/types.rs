use serde::{Deserialize, Serialize};

/// Result of `getblockchaininfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockchainInfo {
    pub chain: String,
    pub blocks: u64,
    pub headers: u64,
    #[serde(rename = "bestblockhash")]
    pub best_block_hash: String,
    pub difficulty: f64,
    #[serde(rename = "mediantime", default)]
    pub median_time: u64,
    #[serde(rename = "verificationprogress")]
    pub verification_progress: f64,
    #[serde(rename = "initialblockdownload", default)]
    pub initial_block_download: bool,
    #[serde(rename = "chainwork", default)]
    pub chain_work: String,
    #[serde(default)]
    pub size_on_disk: u64,
    #[serde(default)]
    pub pruned: bool,
}

/// Result of `getnetworkinfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInfo {
    pub version: u64,
    pub subversion: String,
    #[serde(rename = "protocolversion")]
    pub protocol_version: u64,
    #[serde(rename = "localrelay", default)]
    pub local_relay: bool,
    #[serde(rename = "timeoffset", default)]
    pub time_offset: i64,
    pub connections: u64,
    #[serde(default)]
    pub connections_in: Option<u64>,
    #[serde(default)]
    pub connections_out: Option<u64>,
    #[serde(rename = "networkactive", default)]
    pub network_active: bool,
    #[serde(rename = "relayfee", default)]
    pub relay_fee: f64,
}

/// Result of `getmempoolinfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MempoolInfo {
    #[serde(default)]
    pub loaded: bool,
    pub size: u64,
    pub bytes: u64,
    pub usage: u64,
    #[serde(rename = "maxmempool", default)]
    pub max_mempool: u64,
    #[serde(rename = "mempoolminfee", default)]
    pub mempool_min_fee: f64,
    #[serde(rename = "minrelaytxfee", default)]
    pub min_relay_tx_fee: f64,
}
