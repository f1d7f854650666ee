//! 检测器核心：按固定顺序运行各分析器并聚合结果
use tracing::debug;

use super::analyzer::{ErrorPageAnalyzer, HeaderAnalyzer, HtmlAnalyzer, RouteAnalyzer, StaticFileAnalyzer};
use crate::client::{HttpProbeClient, ProbeClient};
use crate::config::ProbeConfig;
use crate::error::MvcResult;
use crate::rule::model::{DetectResult, Evidence};
use crate::rule::signature::SignatureSet;

/// ASP.NET MVC 检测器
///
/// 各分析器顺序执行（Header → HTML → 路由 → 错误页 → 静态文件），
/// 同一时刻只有一个探测请求在途，证据按该顺序拼接。
#[derive(Debug, Clone)]
pub struct MvcDetector<C> {
    client: C,
    signatures: SignatureSet,
}

impl MvcDetector<HttpProbeClient> {
    /// 按配置创建基于reqwest的检测器
    pub fn from_config(config: ProbeConfig) -> MvcResult<Self> {
        Ok(Self::new(HttpProbeClient::new(config)?))
    }
}

impl<C: ProbeClient> MvcDetector<C> {
    /// 使用默认特征集创建检测器
    pub fn new(client: C) -> Self {
        Self { client, signatures: SignatureSet::default() }
    }

    /// 替换特征集
    pub fn with_signatures(mut self, signatures: SignatureSet) -> Self {
        self.signatures = signatures;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// 收集全部证据（顺序固定）
    pub async fn collect_evidence(&self, target: &str) -> Vec<Evidence> {
        let client = &self.client;
        let sigs = &self.signatures;

        let mut evidence = Vec::new();
        evidence.extend(HeaderAnalyzer::analyze(client, target).await);
        evidence.extend(HtmlAnalyzer::analyze(client, target, &sigs.html_markers).await);
        evidence.extend(RouteAnalyzer::analyze(client, target, &sigs.routes).await);
        evidence.extend(ErrorPageAnalyzer::analyze(client, target, &sigs.error_page).await);
        evidence.extend(StaticFileAnalyzer::analyze(client, target, &sigs.static_files).await);
        evidence
    }

    /// 核心检测接口：探测目标并返回聚合结果，探测失败不会导致检测失败
    pub async fn detect(&self, target: &str) -> DetectResult {
        let evidence = self.collect_evidence(target).await;
        let result = DetectResult::from_evidence(target, evidence);
        debug!(
            "检测完成：目标={}，MVC={}，置信度={}，版本={:?}，证据数={}",
            result.target,
            result.is_mvc,
            result.confidence,
            result.version,
            result.evidence.len()
        );
        result
    }
}
