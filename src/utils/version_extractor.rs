//! 版本选取工具模块
//! 从证据列表中选出用于上报的MVC版本号

use crate::rule::model::Evidence;

/// 版本选取工具类
pub struct VersionExtractor;

impl VersionExtractor {
    /// 按证据顺序取第一条版本信号
    ///
    /// # 返回值
    /// - `Some((version, source))`: 首个 `kind == Version` 且值非空的证据
    /// - `None`: 没有任何版本信号
    pub fn resolve(evidence: &[Evidence]) -> Option<(&str, &str)> {
        evidence
            .iter()
            .find(|ev| ev.is_version_signal() && !ev.value.trim().is_empty())
            .map(|ev| (ev.value.as_str(), ev.source.as_str()))
    }
}
