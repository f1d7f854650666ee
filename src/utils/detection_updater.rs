//! 置信度累加工具
//! 负责将各分析器的证据置信度叠加并截断到 [0, 100]

use crate::rule::model::Evidence;

/// 置信度累加工具
pub struct DetectionUpdater;

impl DetectionUpdater {
    /// 叠加置信度，结果上限为100
    pub fn update(existing: u8, confidence: u8) -> u8 {
        existing.saturating_add(confidence).min(100)
    }

    /// 计算证据列表的总置信度
    pub fn total_confidence(evidence: &[Evidence]) -> u8 {
        evidence
            .iter()
            .fold(0u8, |total, ev| Self::update(total, ev.confidence))
    }
}
