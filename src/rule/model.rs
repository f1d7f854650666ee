//! 检测数据模型定义
//! 证据（Evidence）由分析器产生，仅由聚合逻辑消费；检测结果（DetectResult）每次检测只构建一次

use std::fmt;
use serde::Serialize;

use crate::utils::{DetectionUpdater, VersionExtractor};

/// 判定为MVC的置信度阈值
pub const MVC_THRESHOLD: u8 = 40;
/// 高置信度阈值
pub const HIGH_CONFIDENCE: u8 = 70;

/// 证据信号类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SignalKind {
    /// 仅说明框架存在
    #[default]
    Presence,
    /// 携带MVC版本号
    Version,
}

/// 单条检测证据
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evidence {
    pub description: String,
    pub source: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    pub confidence: u8,
    #[serde(skip)]
    pub kind: SignalKind,
}

impl Evidence {
    /// 创建存在性证据，置信度超过100时截断
    pub fn new(
        description: impl Into<String>,
        source: impl Into<String>,
        value: impl Into<String>,
        confidence: u8,
    ) -> Self {
        Self {
            description: description.into(),
            source: source.into(),
            value: value.into(),
            confidence: confidence.min(100),
            kind: SignalKind::Presence,
        }
    }

    /// 标记为版本信号
    pub fn as_version_signal(mut self) -> Self {
        self.kind = SignalKind::Version;
        self
    }

    pub fn is_version_signal(&self) -> bool {
        self.kind == SignalKind::Version
    }
}

/// 置信度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_score(confidence: u8) -> Self {
        if confidence >= HIGH_CONFIDENCE {
            ConfidenceLevel::High
        } else if confidence >= MVC_THRESHOLD {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单个目标的检测结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectResult {
    pub target: String,
    pub is_mvc: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version_source: String,
    pub confidence: u8,
    pub evidence: Vec<Evidence>,
}

impl DetectResult {
    /// 由证据列表聚合出最终结果（纯函数，不做任何网络请求）
    pub fn from_evidence(target: impl Into<String>, evidence: Vec<Evidence>) -> Self {
        let confidence = DetectionUpdater::total_confidence(&evidence);
        let (version, version_source) = VersionExtractor::resolve(&evidence)
            .map(|(v, s)| (v.to_string(), s.to_string()))
            .unwrap_or_default();

        Self {
            target: target.into(),
            is_mvc: confidence >= MVC_THRESHOLD,
            version,
            version_source,
            confidence,
            evidence,
        }
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_score(self.confidence)
    }
}
