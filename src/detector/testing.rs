//! 测试用内存探测客户端：按URL返回预置响应，未登记的URL模拟连接被拒绝
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;

use crate::client::{ProbeClient, ProbeResponse};
use crate::error::{MvcResult, MvcTraceError};

#[derive(Debug, Clone)]
struct StubResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

#[derive(Debug, Default)]
pub(crate) struct StubClient {
    // None 表示连接被拒绝
    routes: HashMap<String, Option<StubResponse>>,
    fallback: Option<StubResponse>,
    calls: Mutex<Vec<String>>,
}

fn build(status: u16, headers: &[(&str, &str)], body: &str) -> StubResponse {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        map.append(
            HeaderName::from_bytes(name.as_bytes()).unwrap(),
            HeaderValue::from_str(value).unwrap(),
        );
    }
    StubResponse {
        status: StatusCode::from_u16(status).unwrap(),
        headers: map,
        body: body.to_string(),
    }
}

impl StubClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn route(self, url: &str, status: u16, body: &str) -> Self {
        self.route_with_headers(url, status, &[], body)
    }

    pub(crate) fn route_with_headers(
        mut self,
        url: &str,
        status: u16,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Self {
        self.routes.insert(url.to_string(), Some(build(status, headers, body)));
        self
    }

    /// 未登记URL的默认响应
    pub(crate) fn fallback(mut self, status: u16, headers: &[(&str, &str)], body: &str) -> Self {
        self.fallback = Some(build(status, headers, body));
        self
    }

    /// 拒绝指定URL（覆盖默认响应）
    pub(crate) fn refuse(mut self, url: &str) -> Self {
        self.routes.insert(url.to_string(), None);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn lookup(&self, url: &str) -> MvcResult<StubResponse> {
        self.calls.lock().unwrap().push(url.to_string());
        let resp = match self.routes.get(url) {
            Some(entry) => entry.as_ref(),
            None => self.fallback.as_ref(),
        };
        resp.cloned()
            .ok_or_else(|| MvcTraceError::InvalidInput(format!("connection refused: {}", url)))
    }
}

#[async_trait]
impl ProbeClient for StubClient {
    async fn get(&self, url: &str) -> MvcResult<ProbeResponse> {
        let resp = self.lookup(url)?;
        Ok(ProbeResponse::new(resp.status, resp.headers, String::new()))
    }

    async fn get_body(&self, url: &str) -> MvcResult<ProbeResponse> {
        let resp = self.lookup(url)?;
        Ok(ProbeResponse::new(resp.status, resp.headers, resp.body))
    }
}
