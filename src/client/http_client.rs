//! 基于reqwest的探测客户端
//! 固定超时、可选正向代理、跳过证书校验、固定User-Agent，不做任何重试

use async_trait::async_trait;
use reqwest::{Client, Proxy, Response};
use tracing::{debug, warn};
use url::Url;

use super::{ProbeClient, ProbeResponse};
use crate::config::ProbeConfig;
use crate::error::{MvcResult, MvcTraceError};

/// HTTP探测客户端
#[derive(Debug, Clone)]
pub struct HttpProbeClient {
    client: Client,
    config: ProbeConfig,
}

impl HttpProbeClient {
    /// 按配置创建客户端
    pub fn new(config: ProbeConfig) -> MvcResult<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .user_agent(config.user_agent.clone())
            // 不读取系统代理环境变量，只认显式配置
            .no_proxy();

        if let Some(proxy) = config.proxy.as_deref().and_then(Self::parse_proxy) {
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| MvcTraceError::ClientInit(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// 解析代理地址，无效时告警并回退为直连
    fn parse_proxy(raw: &str) -> Option<Proxy> {
        let proxy_url = match Url::parse(raw) {
            Ok(url) => url,
            Err(e) => {
                warn!("代理地址无效，改为直连：{}，错误：{}", raw, e);
                return None;
            }
        };

        match Proxy::all(proxy_url.as_str()) {
            Ok(proxy) => Some(proxy),
            Err(e) => {
                warn!("代理地址不受支持，改为直连：{}，错误：{}", raw, e);
                None
            }
        }
    }

    async fn send(&self, url: &str) -> MvcResult<Response> {
        let response = self.client.get(url).send().await?;
        debug!("探测完成：{} -> {}", url, response.status());
        Ok(response)
    }

    /// 逐块读取响应体，读取出错时保留已读内容
    async fn read_body(url: &str, mut response: Response) -> String {
        let mut body = Vec::new();
        loop {
            match response.chunk().await {
                Ok(Some(chunk)) => body.extend_from_slice(&chunk),
                Ok(None) => break,
                Err(e) => {
                    debug!("读取响应体中断：{}，已读取{}字节，错误：{}", url, body.len(), e);
                    break;
                }
            }
        }
        String::from_utf8_lossy(&body).into_owned()
    }
}

#[async_trait]
impl ProbeClient for HttpProbeClient {
    async fn get(&self, url: &str) -> MvcResult<ProbeResponse> {
        let response = self.send(url).await?;
        Ok(ProbeResponse::new(response.status(), response.headers().clone(), String::new()))
    }

    async fn get_body(&self, url: &str) -> MvcResult<ProbeResponse> {
        let response = self.send(url).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = Self::read_body(url, response).await;
        Ok(ProbeResponse::new(status, headers, body))
    }
}
