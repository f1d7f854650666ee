//! 检测模块：分析器与聚合逻辑
pub mod analyzer;
pub mod detector;

#[cfg(test)]
pub(crate) mod testing;

// 导出核心接口
pub use self::analyzer::{
    probe_url, ErrorPageAnalyzer, HeaderAnalyzer, HtmlAnalyzer, RouteAnalyzer, StaticFileAnalyzer,
};
pub use self::detector::MvcDetector;
