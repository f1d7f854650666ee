//! 检测分析器：Header / HTML / 路由 / 错误页 / 静态文件
//! 每个分析器无状态，自行发起探测，返回零到多条证据；探测失败只意味着没有证据
use tracing::debug;

use crate::client::ProbeClient;
use crate::rule::model::Evidence;
use crate::rule::signature::{BodyMarker, ErrorPageSignature, PathProbe};
use crate::utils::HeaderConverter;

const MVC_VERSION_HEADER: &str = "X-AspNetMvc-Version";
const ASPNET_VERSION_HEADER: &str = "X-AspNet-Version";
const POWERED_BY_HEADER: &str = "X-Powered-By";

/// 拼接探测地址：去掉目标末尾的一个 `/` 后追加路径
pub fn probe_url(base: &str, path: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    format!("{}{}", base, path)
}

/// Header分析器
pub struct HeaderAnalyzer;

impl HeaderAnalyzer {
    pub async fn analyze<C: ProbeClient + ?Sized>(client: &C, target: &str) -> Vec<Evidence> {
        let response = match client.get(target).await {
            Ok(resp) => resp,
            Err(e) => {
                debug!("Header探测失败：{}，错误：{}", target, e);
                return Vec::new();
            }
        };

        let mut evidence = Vec::new();

        if let Some(version) = HeaderConverter::first_value(&response.headers, MVC_VERSION_HEADER) {
            debug!("Header匹配成功：{}={}", MVC_VERSION_HEADER, version);
            evidence.push(
                Evidence::new(
                    format!("MVC Version {} detected", version),
                    format!("HTTP Header: {}", MVC_VERSION_HEADER),
                    version,
                    90,
                )
                .as_version_signal(),
            );
        }

        // 只说明是.NET，不能说明是MVC
        if let Some(version) = HeaderConverter::first_value(&response.headers, ASPNET_VERSION_HEADER) {
            debug!("Header匹配成功：{}={}", ASPNET_VERSION_HEADER, version);
            evidence.push(Evidence::new(
                format!(".NET Framework version detected: {}", version),
                format!("HTTP Header: {}", ASPNET_VERSION_HEADER),
                version,
                20,
            ));
        }

        if let Some(powered) = HeaderConverter::contains(&response.headers, POWERED_BY_HEADER, "ASP.NET") {
            debug!("Header匹配成功：{}={}", POWERED_BY_HEADER, powered);
            evidence.push(Evidence::new(
                "ASP.NET technology stack identified",
                format!("HTTP Header: {}", POWERED_BY_HEADER),
                powered,
                10,
            ));
        }

        evidence
    }
}

/// HTML分析器
pub struct HtmlAnalyzer;

impl HtmlAnalyzer {
    pub async fn analyze<C: ProbeClient + ?Sized>(
        client: &C,
        target: &str,
        markers: &[BodyMarker],
    ) -> Vec<Evidence> {
        let response = match client.get_body(target).await {
            Ok(resp) if resp.is_ok() => resp,
            Ok(resp) => {
                debug!("HTML探测跳过：{} 返回状态码 {}", target, resp.status);
                return Vec::new();
            }
            Err(e) => {
                debug!("HTML探测失败：{}，错误：{}", target, e);
                return Vec::new();
            }
        };

        markers
            .iter()
            .filter(|m| response.body.contains(m.marker.as_str()))
            .map(|m| {
                debug!("HTML匹配成功：标记={}", m.marker);
                Evidence::new(m.description.clone(), m.source.clone(), m.marker.clone(), m.confidence)
            })
            .collect()
    }
}

/// 路径探测：逐个请求，仅HTTP 200计入，单个失败不影响其余
async fn probe_paths<C: ProbeClient + ?Sized>(
    client: &C,
    target: &str,
    probes: &[PathProbe],
    describe: impl Fn(&PathProbe) -> (String, String),
) -> Vec<Evidence> {
    let mut evidence = Vec::new();

    for probe in probes {
        let url = probe_url(target, &probe.path);
        let response = match client.get(&url).await {
            Ok(resp) => resp,
            Err(e) => {
                debug!("路径探测失败：{}，错误：{}", url, e);
                continue;
            }
        };

        if response.is_ok() {
            let (description, source) = describe(probe);
            evidence.push(Evidence::new(
                description,
                source,
                format!("HTTP {}", response.status.as_u16()),
                probe.confidence,
            ));
        }
    }

    evidence
}

/// 默认路由分析器
pub struct RouteAnalyzer;

impl RouteAnalyzer {
    pub async fn analyze<C: ProbeClient + ?Sized>(
        client: &C,
        target: &str,
        routes: &[PathProbe],
    ) -> Vec<Evidence> {
        probe_paths(client, target, routes, |probe| {
            (
                "MVC default route is accessible".to_string(),
                format!("HTTP Route: {}", probe.path),
            )
        })
        .await
    }
}

/// 错误页分析器
pub struct ErrorPageAnalyzer;

impl ErrorPageAnalyzer {
    pub async fn analyze<C: ProbeClient + ?Sized>(
        client: &C,
        target: &str,
        signature: &ErrorPageSignature,
    ) -> Vec<Evidence> {
        let url = probe_url(target, &signature.path);
        let response = match client.get_body(&url).await {
            Ok(resp) => resp,
            Err(e) => {
                debug!("错误页探测失败：{}，错误：{}", url, e);
                return Vec::new();
            }
        };

        let source = format!("HTTP Error Page: {}", signature.path);
        let mut evidence = Vec::new();

        if response.status == reqwest::StatusCode::NOT_FOUND
            && signature
                .not_found_markers
                .iter()
                .any(|m| response.body.contains(m.as_str()))
        {
            evidence.push(Evidence::new(
                "MVC error page detected",
                source.clone(),
                "404 Error Message Pattern",
                signature.not_found_confidence,
            ));
        }

        // 与状态码无关：未处理异常的堆栈会泄露命名空间
        if response.body.contains(signature.stack_trace_marker.as_str()) {
            evidence.push(Evidence::new(
                "MVC stack trace in error page",
                source,
                format!("{} Stack Trace", signature.stack_trace_marker),
                signature.stack_trace_confidence,
            ));
        }

        evidence
    }
}

/// 静态文件分析器
pub struct StaticFileAnalyzer;

impl StaticFileAnalyzer {
    pub async fn analyze<C: ProbeClient + ?Sized>(
        client: &C,
        target: &str,
        files: &[PathProbe],
    ) -> Vec<Evidence> {
        probe_paths(client, target, files, |probe| {
            (
                "MVC static file structure detected".to_string(),
                format!("Static File: {}", probe.path),
            )
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::testing::StubClient;
    use crate::rule::SignatureSet;

    #[test]
    fn test_path_join_strips_one_trailing_slash() {
        assert_eq!(probe_url("http://t/", "/Home/Index"), "http://t/Home/Index");
        assert_eq!(probe_url("http://t", "/Home/Index"), "http://t/Home/Index");
        assert_eq!(probe_url("http://t//", "/x"), "http://t//x");
    }

    #[tokio::test]
    async fn test_header_analyzer_all_headers() {
        let client = StubClient::new().route_with_headers(
            "http://t",
            200,
            &[
                ("X-AspNetMvc-Version", "5.2"),
                ("X-AspNet-Version", "4.0.30319"),
                ("X-Powered-By", "ASP.NET"),
            ],
            "",
        );

        let evidence = HeaderAnalyzer::analyze(&client, "http://t").await;
        let weights: Vec<u8> = evidence.iter().map(|e| e.confidence).collect();
        assert_eq!(weights, vec![90, 20, 10]);
        assert!(evidence[0].is_version_signal());
        assert_eq!(evidence[0].value, "5.2");
        assert_eq!(evidence[0].description, "MVC Version 5.2 detected");
        assert!(!evidence[1].is_version_signal());
        assert_eq!(evidence[2].source, "HTTP Header: X-Powered-By");
    }

    #[tokio::test]
    async fn test_header_analyzer_powered_by_other_stack() {
        let client = StubClient::new().route_with_headers("http://t", 200, &[("X-Powered-By", "PHP/8.2")], "");
        assert!(HeaderAnalyzer::analyze(&client, "http://t").await.is_empty());
    }

    #[tokio::test]
    async fn test_header_analyzer_transport_error() {
        let client = StubClient::new();
        assert!(HeaderAnalyzer::analyze(&client, "http://t").await.is_empty());
    }

    #[tokio::test]
    async fn test_html_analyzer_requires_200() {
        let body = r#"<input data-val="true" /><script src="/Scripts/jquery.validate.unobtrusive.js"></script>"#;
        let sigs = SignatureSet::default();

        let client = StubClient::new().route("http://t", 200, body);
        let evidence = HtmlAnalyzer::analyze(&client, "http://t", &sigs.html_markers).await;
        let weights: Vec<u8> = evidence.iter().map(|e| e.confidence).collect();
        assert_eq!(weights, vec![60, 50]);
        assert_eq!(evidence[0].value, r#"data-val="true""#);

        let client = StubClient::new().route("http://t", 500, body);
        assert!(HtmlAnalyzer::analyze(&client, "http://t", &sigs.html_markers).await.is_empty());
    }

    #[tokio::test]
    async fn test_html_analyzer_all_markers() {
        let body = r#"data-val="true" __MVCFormValidation jquery.validate.unobtrusive System.Web.Mvc"#;
        let sigs = SignatureSet::default();
        let client = StubClient::new().route("http://t", 200, body);
        let evidence = HtmlAnalyzer::analyze(&client, "http://t", &sigs.html_markers).await;
        let weights: Vec<u8> = evidence.iter().map(|e| e.confidence).collect();
        assert_eq!(weights, vec![60, 70, 50, 80]);
    }

    #[tokio::test]
    async fn test_route_analyzer_independent_requests() {
        let sigs = SignatureSet::default();
        // /Home/Index 失败（无路由），/Account/Login 200，/Home/About 404
        let client = StubClient::new()
            .route("http://t/Account/Login", 200, "")
            .route("http://t/Home/About", 404, "");

        let evidence = RouteAnalyzer::analyze(&client, "http://t/", &sigs.routes).await;
        assert_eq!(evidence.len(), 1);
        assert_eq!(evidence[0].source, "HTTP Route: /Account/Login");
        assert_eq!(evidence[0].value, "HTTP 200");
        assert_eq!(evidence[0].confidence, 40);
    }

    #[tokio::test]
    async fn test_error_page_both_checks() {
        let sigs = SignatureSet::default();
        let body = "<h1>Server Error in '/' Application.</h1> at System.Web.Mvc.ControllerActionInvoker";
        let client = StubClient::new().route("http://t/nonexistent-path-12345", 404, body);

        let evidence = ErrorPageAnalyzer::analyze(&client, "http://t", &sigs.error_page).await;
        let weights: Vec<u8> = evidence.iter().map(|e| e.confidence).collect();
        assert_eq!(weights, vec![30, 50]);
        assert_eq!(evidence[1].value, "System.Web.Mvc Stack Trace");
        assert_eq!(evidence[0].source, "HTTP Error Page: /nonexistent-path-12345");
    }

    #[tokio::test]
    async fn test_error_page_stack_trace_ignores_status() {
        let sigs = SignatureSet::default();
        // 500 页面：默认404模板不计分，但堆栈仍计分
        let body = "The resource cannot be found. System.Web.Mvc";
        let client = StubClient::new().route("http://t/nonexistent-path-12345", 500, body);

        let evidence = ErrorPageAnalyzer::analyze(&client, "http://t", &sigs.error_page).await;
        assert_eq!(evidence.len(), 1);
        assert_eq!(evidence[0].confidence, 50);
    }

    #[tokio::test]
    async fn test_static_file_analyzer() {
        let sigs = SignatureSet::default();
        let client = StubClient::new()
            .route("http://t/Content/Site.css", 200, "")
            .route("http://t/Scripts/jquery-1.10.2.js", 404, "")
            .route("http://t/bundles/jquery", 200, "");

        let evidence = StaticFileAnalyzer::analyze(&client, "http://t", &sigs.static_files).await;
        let sources: Vec<&str> = evidence.iter().map(|e| e.source.as_str()).collect();
        assert_eq!(sources, vec!["Static File: /Content/Site.css", "Static File: /bundles/jquery"]);
        assert!(evidence.iter().all(|e| e.confidence == 20));
    }
}
