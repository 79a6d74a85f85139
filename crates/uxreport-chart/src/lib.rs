//! # uxreport-chart
//!
//! Pure chart layout for uxreport reports.
//!
//! This crate provides:
//! - Pie segment percentages and palette colors (`PieLayout`)
//! - Proportional timeline bar placement (`TimelineLayoutEngine`)
//! - Bar chart heights and axis ticks (`BarChartLayout`)
//! - Whole-report validation (`validate_report`)
//!
//! Every function here is a pure transform of its input: no caching, no
//! shared state, identical input gives identical output.
//!
//! ## Example
//!
//! ```rust
//! use uxreport_core::{CategoryCount, Phase};
//! use uxreport_chart::{PieLayout, TimelineConfig, TimelineLayoutEngine};
//!
//! let data = vec![CategoryCount::new("A", 1), CategoryCount::new("B", 3)];
//! let segments = PieLayout::new().segments(&data).unwrap();
//! assert_eq!(segments[1].tooltip(), "75% (3 mentions)");
//!
//! let engine = TimelineLayoutEngine::new(TimelineConfig::new(6).unwrap());
//! let bar = engine.layout_phase(&Phase::new("Phase 3").span(3.0, 3.0)).unwrap();
//! assert_eq!(bar.left_fraction, 0.5);
//! ```

pub mod bar;
pub mod pie;
pub mod timeline;

pub use bar::{axis_ticks, BarChartLayout};
pub use pie::{percentage, percentage_sum, PieLayout};
pub use timeline::{layout_plan, month_columns, TimelineConfig, TimelineLayoutEngine};

use uxreport_core::{ChartError, Report};

/// Chart counts of a report that passed validation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub sections: usize,
    pub pie_charts: usize,
    pub bar_charts: usize,
    pub timelines: usize,
    pub phases: usize,
}

/// Lay out every chart of a report once, returning the first error found
pub fn validate_report(report: &Report) -> Result<ReportSummary, ChartError> {
    report.theme.validate()?;

    let mut summary = ReportSummary {
        sections: report.sections.len(),
        ..ReportSummary::default()
    };

    for pie in report.pie_charts() {
        PieLayout::new()
            .palette(report.theme.palette.clone())
            .zero_total(pie.zero_total)
            .segments(&pie.data)?;
        summary.pie_charts += 1;
    }

    for bars in report.bar_charts() {
        BarChartLayout::new().layout(bars)?;
        summary.bar_charts += 1;
    }

    for plan in report.timelines() {
        let (_, layouts) = layout_plan(plan)?;
        summary.timelines += 1;
        summary.phases += layouts.len();
    }

    Ok(summary)
}
