//! 探测客户端模块：单次GET请求的抽象与reqwest实现
pub mod http_client;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use crate::error::MvcResult;

pub use self::http_client::HttpProbeClient;

/// 单次探测的响应
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// 仅 `get_body` 填充
    pub body: String,
}

impl ProbeResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self { status, headers, body: body.into() }
    }

    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }
}

/// 探测客户端
///
/// 传输层错误（超时、DNS失败、连接被拒绝、TLS失败）以 `Err` 返回，
/// 调用方一律视为"无证据"，而不是致命错误。
#[async_trait]
pub trait ProbeClient: Send + Sync {
    /// 发起GET请求，只关心状态码与响应头
    async fn get(&self, url: &str) -> MvcResult<ProbeResponse>;

    /// 发起GET请求并读取完整响应体
    async fn get_body(&self, url: &str) -> MvcResult<ProbeResponse>;
}

