//! mvctrace - ASP.NET MVC 框架指纹识别与版本推断

// 导出全局错误类型
pub use self::error::{MvcTraceError, MvcResult};

// 导出配置模块
pub use self::config::{ProbeConfig, ConfigManager, CustomConfigBuilder};

// 导出探测客户端
pub use self::client::{ProbeClient, ProbeResponse, HttpProbeClient};

// 导出规则模块核心接口
pub use self::rule::{
    ConfidenceLevel, DetectResult, Evidence, SignalKind, SignatureSet,
    BodyMarker, ErrorPageSignature, PathProbe,
};

// 导出工具模块核心接口
pub use self::utils::{VersionExtractor, HeaderConverter, DetectionUpdater};

// 导出检测模块核心接口
pub use self::detector::MvcDetector;

// 导出渲染接口
pub use self::report::ReportFormat;

// 声明所有子模块
pub mod config;
pub mod error;
pub mod client;
pub mod rule;
pub mod utils;
pub mod detector;
pub mod report;
