//! 规则模块：检测数据模型与指纹特征库
pub mod model;
pub mod signature;

// 导出核心接口
pub use self::model::{ConfidenceLevel, DetectResult, Evidence, SignalKind, MVC_THRESHOLD, HIGH_CONFIDENCE};
pub use self::signature::{BodyMarker, ErrorPageSignature, PathProbe, SignatureSet};
