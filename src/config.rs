//! 全局配置管理，存储探测客户端的所有可配置项

use std::time::Duration;

/// 默认单次请求超时
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// 固定的User-Agent标识
pub const DEFAULT_USER_AGENT: &str = "MVCTrace/1.0";

/// 探测客户端配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    // 单次请求超时（不限制整体运行时长）
    pub timeout: Duration,
    // 正向代理URL，None 表示直连
    pub proxy: Option<String>,
    pub user_agent: String,
    // 目标多为自签名证书，默认跳过证书校验
    pub accept_invalid_certs: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: true,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> ProbeConfig {
        ProbeConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: ProbeConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// 设置代理，空字符串视为直连
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        let proxy = proxy.into();
        self.config.proxy = if proxy.trim().is_empty() { None } else { Some(proxy) };
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config.accept_invalid_certs = accept;
        self
    }

    pub fn build(self) -> ProbeConfig {
        self.config
    }
}
