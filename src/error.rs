//! 全局错误类型定义

use thiserror::Error;
use serde_json::Error as SerdeJsonError;

#[derive(Error, Debug)]
pub enum MvcTraceError {
    // 网络相关错误（超时、DNS、连接拒绝、TLS握手失败）
    #[error("网络请求失败：{0}")]
    HttpError(#[from] reqwest::Error),
    #[error("HTTP客户端初始化失败：{0}")]
    ClientInit(String),

    // 序列化错误
    #[error("JSON序列化失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type MvcResult<T> = Result<T, MvcTraceError>;
