//! Header读取工具
//! 按HTTP语义（大小写不敏感）读取响应头

use reqwest::header::HeaderMap;

/// Header读取工具
pub struct HeaderConverter;

impl HeaderConverter {
    /// 读取Header的第一个值，缺失或为空时返回None；非ASCII字节按UTF-8宽松解码
    pub fn first_value(headers: &HeaderMap, name: &str) -> Option<String> {
        headers
            .get(name)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).trim().to_string())
            .filter(|value| !value.is_empty())
    }

    /// Header值是否包含指定子串
    pub fn contains(headers: &HeaderMap, name: &str, needle: &str) -> Option<String> {
        Self::first_value(headers, name).filter(|value| value.contains(needle))
    }
}
