//! 检测结果渲染：JSON / 精简 / 彩色文本
//! 颜色只存在于这一层，核心检测逻辑与输出格式无关

use colored::{Color, Colorize};

use crate::error::MvcResult;
use crate::rule::model::{ConfidenceLevel, DetectResult};

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    Json,
    Silent,
    #[default]
    Human,
}

impl ReportFormat {
    /// `--json` 优先于 `--silent`
    pub fn from_flags(json: bool, silent: bool) -> Self {
        if json {
            ReportFormat::Json
        } else if silent {
            ReportFormat::Silent
        } else {
            ReportFormat::Human
        }
    }
}

/// 置信度等级对应的终端颜色
pub fn confidence_color(level: ConfidenceLevel) -> Color {
    match level {
        ConfidenceLevel::High => Color::Green,
        ConfidenceLevel::Medium => Color::Yellow,
        ConfidenceLevel::Low => Color::Red,
    }
}

fn colored_level(result: &DetectResult) -> String {
    let level = result.confidence_level();
    level.as_str().color(confidence_color(level)).to_string()
}

pub fn render(result: &DetectResult, format: ReportFormat) -> MvcResult<String> {
    match format {
        ReportFormat::Json => render_json(result),
        ReportFormat::Silent => Ok(render_silent(result)),
        ReportFormat::Human => Ok(render_human(result)),
    }
}

/// 两空格缩进的JSON
pub fn render_json(result: &DetectResult) -> MvcResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

pub fn render_silent(result: &DetectResult) -> String {
    if result.is_mvc {
        format!("{} ({} confidence)", "MVC detected".green(), colored_level(result))
    } else {
        "Not MVC".red().to_string()
    }
}

pub fn render_human(result: &DetectResult) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{} {}", "Target:".blue().bold(), result.target));

    if result.is_mvc {
        lines.push(format!("{} ASP.NET MVC", "Framework:".green().bold()));
        if result.version.is_empty() {
            lines.push(format!("{} ({} Confidence)", "MVC Detected".green().bold(), colored_level(result)));
        } else {
            lines.push(format!(
                "{} {} ({} Confidence)",
                "MVC Version:".green().bold(),
                result.version,
                colored_level(result)
            ));
        }
    } else {
        lines.push(format!("{} Not ASP.NET MVC", "Framework:".red().bold()));
        lines.push(format!("{} {}", "Confidence:".red().bold(), colored_level(result)));
    }

    if !result.evidence.is_empty() {
        lines.push("Evidence:".yellow().bold().to_string());
        for ev in &result.evidence {
            lines.push(format!("  {} {}", "•".yellow(), ev.description));
        }
    }

    lines.join("\n")
}
