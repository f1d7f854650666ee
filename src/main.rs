//! mvctrace 命令行入口
//! 用法：mvctrace [flags] <url>

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use mvctrace::config::ConfigManager;
use mvctrace::report::{self, ReportFormat};
use mvctrace::MvcDetector;

#[derive(Parser, Debug)]
#[command(name = "mvctrace", version, about = "Detect ASP.NET MVC and guess its version")]
struct Args {
    /// Target URL
    url: String,

    /// Output in JSON format
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Request timeout (e.g. 500ms, 10s, 1m; bare numbers are seconds)
    #[arg(long, value_name = "DURATION", default_value = "10s", value_parser = parse_duration)]
    timeout: Duration,

    /// HTTP proxy URL
    #[arg(long, value_name = "URL", default_value = "")]
    proxy: String,

    /// Minimal output
    #[arg(long, default_value_t = false)]
    silent: bool,

    /// Debug logging on stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

/// 解析时长参数
fn parse_duration(raw: &str) -> Result<Duration, String> {
    let raw = raw.trim();
    let split = raw
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(raw.len());
    let (number, unit) = raw.split_at(split);

    let value: f64 = number
        .parse()
        .map_err(|_| format!("invalid duration: {:?}", raw))?;
    let secs = match unit {
        "" | "s" => value,
        "ms" => value / 1000.0,
        "m" => value * 60.0,
        "h" => value * 3600.0,
        _ => return Err(format!("unknown duration unit {:?} in {:?}", unit, raw)),
    };

    if secs <= 0.0 {
        return Err(format!("duration must be positive: {:?}", raw));
    }
    Duration::try_from_secs_f64(secs).map_err(|e| format!("invalid duration {:?}: {}", raw, e))
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = ConfigManager::custom()
        .timeout(args.timeout)
        .proxy(args.proxy.as_str())
        .build();
    tracing::debug!("探测配置：{:?}", config);

    let detector = MvcDetector::from_config(config).context("failed to build HTTP client")?;
    let result = detector.detect(&args.url).await;

    let format = ReportFormat::from_flags(args.json, args.silent);
    let output = report::render(&result, format).context("failed to render result")?;
    println!("{}", output);

    Ok(())
}
