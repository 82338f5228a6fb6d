//! Typed wrappers for common daemon methods.
//!
//! Any method can be reached through the generic entry points
//! [`RpcApi::call`] and [`AsyncRpcApi::call_async`]; the provided methods
//! only fix the method name, the positional parameters and the result type.
//! Import one of the two traits per scope: their wrappers share names.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::client::BitcoinClient;
use super::error::RpcError;
use super::types::{BlockchainInfo, MempoolInfo, NetworkInfo};

/// Blocking typed calls.
pub trait RpcApi {
    /// Calls `method` with positional `params` and deserializes the result.
    fn call<T: DeserializeOwned>(&self, method: &str, params: &[Value]) -> Result<T, RpcError>;

    fn get_block_count(&self) -> Result<u64, RpcError> {
        self.call("getblockcount", &[])
    }

    fn get_best_block_hash(&self) -> Result<String, RpcError> {
        self.call("getbestblockhash", &[])
    }

    fn get_block_hash(&self, height: u64) -> Result<String, RpcError> {
        self.call("getblockhash", &[height.into()])
    }

    /// `verbosity` 0 returns the hex-encoded block, 1 and 2 a JSON object.
    fn get_block(&self, hash: &str, verbosity: u8) -> Result<Value, RpcError> {
        self.call("getblock", &[hash.into(), verbosity.into()])
    }

    fn get_blockchain_info(&self) -> Result<BlockchainInfo, RpcError> {
        self.call("getblockchaininfo", &[])
    }

    fn get_network_info(&self) -> Result<NetworkInfo, RpcError> {
        self.call("getnetworkinfo", &[])
    }

    fn get_mempool_info(&self) -> Result<MempoolInfo, RpcError> {
        self.call("getmempoolinfo", &[])
    }

    fn get_raw_mempool(&self) -> Result<Vec<String>, RpcError> {
        self.call("getrawmempool", &[])
    }

    fn get_difficulty(&self) -> Result<f64, RpcError> {
        self.call("getdifficulty", &[])
    }

    fn get_connection_count(&self) -> Result<u64, RpcError> {
        self.call("getconnectioncount", &[])
    }

    fn uptime(&self) -> Result<u64, RpcError> {
        self.call("uptime", &[])
    }

    fn get_raw_transaction(&self, txid: &str, verbose: bool) -> Result<Value, RpcError> {
        self.call("getrawtransaction", &[txid.into(), verbose.into()])
    }

    /// Broadcasts a hex-encoded transaction and returns its txid.
    fn send_raw_transaction(&self, hex: &str) -> Result<String, RpcError> {
        self.call("sendrawtransaction", &[hex.into()])
    }
}

/// Async typed calls.
#[async_trait]
pub trait AsyncRpcApi: Sync {
    /// Calls `method` with positional `params` and deserializes the result.
    async fn call_async<T: DeserializeOwned + Send>(&self, method: &str, params: &[Value]) -> Result<T, RpcError>;

    async fn get_block_count(&self) -> Result<u64, RpcError> {
        self.call_async("getblockcount", &[]).await
    }

    async fn get_best_block_hash(&self) -> Result<String, RpcError> {
        self.call_async("getbestblockhash", &[]).await
    }

    async fn get_block_hash(&self, height: u64) -> Result<String, RpcError> {
        self.call_async("getblockhash", &[height.into()]).await
    }

    async fn get_block(&self, hash: &str, verbosity: u8) -> Result<Value, RpcError> {
        self.call_async("getblock", &[hash.into(), verbosity.into()]).await
    }

    async fn get_blockchain_info(&self) -> Result<BlockchainInfo, RpcError> {
        self.call_async("getblockchaininfo", &[]).await
    }

    async fn get_network_info(&self) -> Result<NetworkInfo, RpcError> {
        self.call_async("getnetworkinfo", &[]).await
    }

    async fn get_mempool_info(&self) -> Result<MempoolInfo, RpcError> {
        self.call_async("getmempoolinfo", &[]).await
    }

    async fn get_raw_mempool(&self) -> Result<Vec<String>, RpcError> {
        self.call_async("getrawmempool", &[]).await
    }

    async fn get_difficulty(&self) -> Result<f64, RpcError> {
        self.call_async("getdifficulty", &[]).await
    }

    async fn get_connection_count(&self) -> Result<u64, RpcError> {
        self.call_async("getconnectioncount", &[]).await
    }

    async fn uptime(&self) -> Result<u64, RpcError> {
        self.call_async("uptime", &[]).await
    }

    async fn get_raw_transaction(&self, txid: &str, verbose: bool) -> Result<Value, RpcError> {
        self.call_async("getrawtransaction", &[txid.into(), verbose.into()]).await
    }

    async fn send_raw_transaction(&self, hex: &str) -> Result<String, RpcError> {
        self.call_async("sendrawtransaction", &[hex.into()]).await
    }
}

impl RpcApi for BitcoinClient {
    fn call<T: DeserializeOwned>(&self, method: &str, params: &[Value]) -> Result<T, RpcError> {
        let value = self.request(method, params)?;
        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait]
impl AsyncRpcApi for BitcoinClient {
    async fn call_async<T: DeserializeOwned + Send>(&self, method: &str, params: &[Value]) -> Result<T, RpcError> {
        let value = self.request_await(method, params).await?;
        Ok(serde_json::from_value(value)?)
    }
}
