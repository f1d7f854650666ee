//! 指纹特征库
//! 路由、静态文件、HTML标记等探测列表均为数据而非代码，可整体替换

use once_cell::sync::Lazy;

/// 路径探测项：命中（HTTP 200）即贡献固定置信度
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathProbe {
    pub path: String,
    pub confidence: u8,
}

impl PathProbe {
    pub fn new(path: impl Into<String>, confidence: u8) -> Self {
        Self { path: path.into(), confidence }
    }
}

/// 响应体字面量标记
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyMarker {
    pub marker: String,
    pub description: String,
    pub source: String,
    pub confidence: u8,
}

impl BodyMarker {
    pub fn new(
        marker: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<String>,
        confidence: u8,
    ) -> Self {
        Self {
            marker: marker.into(),
            description: description.into(),
            source: source.into(),
            confidence,
        }
    }
}

/// 错误页特征
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPageSignature {
    /// 几乎不可能存在的路径
    pub path: String,
    /// 404页面中任一命中即视为MVC默认错误页
    pub not_found_markers: Vec<String>,
    pub not_found_confidence: u8,
    /// 与状态码无关，泄露的命名空间（堆栈信息）
    pub stack_trace_marker: String,
    pub stack_trace_confidence: u8,
}

/// 完整特征集
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureSet {
    pub html_markers: Vec<BodyMarker>,
    pub routes: Vec<PathProbe>,
    pub error_page: ErrorPageSignature,
    pub static_files: Vec<PathProbe>,
}

static DEFAULT_SIGNATURES: Lazy<SignatureSet> = Lazy::new(|| SignatureSet {
    html_markers: vec![
        BodyMarker::new(r#"data-val="true""#, "MVC validation attributes detected", "HTML Body: data-val attribute", 60),
        BodyMarker::new("__MVCFormValidation", "MVC form validation script found", "HTML Body: __MVCFormValidation script", 70),
        BodyMarker::new("jquery.validate.unobtrusive", "jQuery unobtrusive validation library referenced", "HTML Body: Script reference", 50),
        BodyMarker::new("System.Web.Mvc", "System.Web.Mvc namespace referenced", "HTML Body: Script or attribute", 80),
    ],
    routes: vec![
        PathProbe::new("/Home/Index", 40),
        PathProbe::new("/Account/Login", 40),
        PathProbe::new("/Home/About", 40),
    ],
    error_page: ErrorPageSignature {
        path: "/nonexistent-path-12345".to_string(),
        not_found_markers: vec![
            "The resource cannot be found".to_string(),
            "Server Error in '/' Application".to_string(),
        ],
        not_found_confidence: 30,
        stack_trace_marker: "System.Web.Mvc".to_string(),
        stack_trace_confidence: 50,
    },
    static_files: vec![
        PathProbe::new("/Content/Site.css", 20),
        PathProbe::new("/Scripts/jquery-1.10.2.js", 20),
        PathProbe::new("/bundles/jquery", 20),
    ],
});

impl Default for SignatureSet {
    fn default() -> Self {
        DEFAULT_SIGNATURES.clone()
    }
}

impl SignatureSet {
    pub fn with_routes(mut self, routes: Vec<PathProbe>) -> Self {
        self.routes = routes;
        self
    }

    pub fn with_static_files(mut self, static_files: Vec<PathProbe>) -> Self {
        self.static_files = static_files;
        self
    }

    pub fn with_html_markers(mut self, html_markers: Vec<BodyMarker>) -> Self {
        self.html_markers = html_markers;
        self
    }

    pub fn with_error_page(mut self, error_page: ErrorPageSignature) -> Self {
        self.error_page = error_page;
        self
    }
}
