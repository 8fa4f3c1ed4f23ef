use async_trait::async_trait;
use eyre::Result;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::trace;

use common::errors::{BlockNotFoundError, RpcError};
use common::types::BlockTag;

use super::ExecutionRpc;
use crate::types::RpcBlock;

const GET_BLOCK_BY_NUMBER: &str = "eth_getBlockByNumber";

#[derive(Clone)]
pub struct HttpRpc {
    url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Deserialize)]
struct JsonRpcResponse<T> {
    result: Option<T>,
    error: Option<JsonRpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcErrorObject {
    code: i64,
    message: String,
}

impl HttpRpc {
    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<JsonRpcResponse<T>> {
        let req = JsonRpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };

        let res = self
            .client
            .post(&self.url)
            .json(&req)
            .send()
            .await
            .map_err(|e| RpcError::new(method, e))?
            .json::<JsonRpcResponse<T>>()
            .await
            .map_err(|e| RpcError::new(method, e))?;

        Ok(res)
    }
}

fn response_result<T>(method: &str, res: JsonRpcResponse<T>) -> Result<Option<T>> {
    if let Some(err) = res.error {
        let message = format!("{} (code {})", err.message, err.code);
        return Err(RpcError::new(method, message).into());
    }

    Ok(res.result)
}

/// A `null` result means the provider does not have the block.
fn block_result(block: BlockTag, res: JsonRpcResponse<RpcBlock>) -> Result<RpcBlock> {
    response_result(GET_BLOCK_BY_NUMBER, res)?
        .ok_or_else(|| BlockNotFoundError::new(block).into())
}

#[async_trait]
impl ExecutionRpc for HttpRpc {
    fn new(rpc: &str) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(HttpRpc {
            url: rpc.to_string(),
            client,
        })
    }

    async fn get_block_by_number(&self, block: BlockTag) -> Result<RpcBlock> {
        trace!(target: "gnosis_tools::execution", %block, "fetching block");
        let params = json!([block.to_rpc_param(), true]);

        let res = self
            .request::<RpcBlock>(GET_BLOCK_BY_NUMBER, params)
            .await?;

        block_result(block, res)
    }
}
