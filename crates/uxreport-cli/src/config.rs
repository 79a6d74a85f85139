//! Input loading for the CLI
//!
//! Reports are TOML documents; the `pie` and `timeline` commands take JSON.
//! A path of `-` reads from stdin.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;
use uxreport_core::Report;

/// Sample report written by `uxreport init`
pub const SAMPLE_REPORT: &str = include_str!("../demos/cms_survey.toml");

/// File name used by `uxreport init`
pub const SAMPLE_FILE_NAME: &str = "cms_survey.toml";

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Parse a TOML report document
pub fn parse_report(source: &str) -> Result<Report> {
    let report: Report = toml::from_str(source).context("Invalid report document")?;
    report.theme.validate().context("Invalid report theme")?;
    Ok(report)
}

/// Load a TOML report from a file
pub fn load_report(path: &Path) -> Result<Report> {
    let source = read_input(path)?;
    let report = parse_report(&source).with_context(|| format!("While loading {}", path.display()))?;
    debug!(
        title = %report.title,
        sections = report.sections.len(),
        "loaded report"
    );
    Ok(report)
}

/// Load a JSON document from a file
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let source = read_input(path)?;
    serde_json::from_str(&source).with_context(|| format!("Invalid JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use uxreport_chart::validate_report;
    use uxreport_core::{Block, CategoryCount, TimelinePlan};

    #[test]
    fn sample_report_parses() {
        let report = parse_report(SAMPLE_REPORT).unwrap();
        assert_eq!(report.title, "CMS User Experience Survey Insights");
        assert_eq!(report.sections.len(), 4);
    }

    #[test]
    fn sample_report_embedded_from_crate() {
        let shipped = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/cms_survey.toml");
        assert_eq!(fs::read_to_string(shipped).unwrap(), SAMPLE_REPORT);
    }

    #[test]
    fn sample_report_validates() {
        let report = parse_report(SAMPLE_REPORT).unwrap();
        let summary = validate_report(&report).unwrap();
        assert_eq!(summary.pie_charts, 1);
        assert_eq!(summary.bar_charts, 1);
        assert_eq!(summary.timelines, 1);
        assert_eq!(summary.phases, 3);
    }

    #[test]
    fn sample_report_carries_survey_counts() {
        let report = parse_report(SAMPLE_REPORT).unwrap();
        let pie = report.pie_charts().next().unwrap();
        let counts: Vec<u64> = pie.data.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![11, 9, 7, 6]);

        let timeline = report.timelines().next().unwrap();
        assert_eq!(timeline.span, 6);
        assert_eq!(timeline.start_month.as_deref(), Some("2024-07"));
    }

    #[test]
    fn unknown_block_kind_rejected() {
        let source = r#"
title = "Bad"

[[sections]]
title = "S"

[[sections.blocks]]
kind = "donut"
"#;
        assert!(parse_report(source).is_err());
    }

    #[test]
    fn minimal_report() {
        let source = r#"
title = "Tiny"

[[sections]]
title = "Only"

[[sections.blocks]]
kind = "paragraph"
text = "Hello"
"#;
        let report = parse_report(source).unwrap();
        assert!(matches!(
            report.sections[0].blocks[0],
            Block::Paragraph { ref text } if text == "Hello"
        ));
    }

    #[test]
    fn theme_colors_checked_on_load() {
        let source = r##"
title = "Styled"

[theme]
bar_color = "#8DC63F</style><script>"
"##;
        let err = parse_report(source).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid color"));
    }

    #[test]
    fn load_json_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pie.json");
        fs::write(&path, r#"[{"label": "A", "count": 2}]"#).unwrap();

        let data: Vec<CategoryCount> = load_json(&path).unwrap();
        assert_eq!(data, vec![CategoryCount::new("A", 2)]);
    }

    #[test]
    fn load_json_reports_path_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_json::<TimelinePlan>(&path).unwrap_err();
        assert!(format!("{}", err).contains("plan.json"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_report(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(format!("{}", err).contains("Failed to read"));
    }
}
