//! Proportional timeline layout
//!
//! Places each phase of a plan on a horizontal track spanning a fixed
//! number of time units. A phase starting at `start` and lasting `duration`
//! units gets `left = start / span` and `width = duration / span`, both as
//! fractions of the track width.
//!
//! The span and the column labels are configuration: report revisions use
//! 6, 8 or 10 month horizons, so nothing here assumes a fixed width.
//! Phases that leave the track are rejected rather than drawn overflowing.

use chrono::{Months, NaiveDate};
use uxreport_core::{ChartError, Phase, TimelineLayout, TimelinePlan};

/// Span and column labels of a timeline track
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineConfig {
    span: u32,
    columns: Vec<String>,
}

impl TimelineConfig {
    /// Track of `span` units labeled `1..=span`
    pub fn new(span: u32) -> Result<Self, ChartError> {
        check_span(span)?;
        Ok(Self {
            span,
            columns: (1..=span).map(|i| i.to_string()).collect(),
        })
    }

    /// Track with one explicit label per unit
    pub fn with_columns<I, S>(span: u32, columns: I) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        check_span(span)?;
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.len() != span as usize {
            return Err(ChartError::ColumnMismatch {
                span,
                columns: columns.len(),
            });
        }
        Ok(Self { span, columns })
    }

    /// Track of consecutive months starting at `start`
    pub fn with_start_month(span: u32, start: NaiveDate) -> Result<Self, ChartError> {
        check_span(span)?;
        Ok(Self {
            span,
            columns: month_columns(start, span),
        })
    }

    /// Resolve a plan's span and labels. Explicit columns win over `start_month`.
    pub fn from_plan(plan: &TimelinePlan) -> Result<Self, ChartError> {
        match (&plan.columns, &plan.start_month) {
            (Some(columns), _) => Self::with_columns(plan.span, columns.iter().cloned()),
            (None, Some(month)) => Self::with_start_month(plan.span, parse_start_month(month)?),
            (None, None) => Self::new(plan.span),
        }
    }

    pub fn span(&self) -> u32 {
        self.span
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Width of one column as a fraction of the track
    pub fn column_fraction(&self) -> f64 {
        1.0 / f64::from(self.span)
    }
}

fn check_span(span: u32) -> Result<(), ChartError> {
    if span == 0 {
        Err(ChartError::InvalidSpan(span))
    } else {
        Ok(())
    }
}

/// Parse `YYYY-MM` into the first day of that month
pub fn parse_start_month(value: &str) -> Result<NaiveDate, ChartError> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d")
        .map_err(|_| ChartError::InvalidMonth(value.to_string()))
}

/// Three-letter month abbreviations for `count` months from `start`
pub fn month_columns(start: NaiveDate, count: u32) -> Vec<String> {
    (0..count)
        .filter_map(|i| start.checked_add_months(Months::new(i)))
        .map(|d| d.format("%b").to_string())
        .collect()
}

/// Timeline bar calculator
#[derive(Clone, Debug)]
pub struct TimelineLayoutEngine {
    config: TimelineConfig,
}

impl TimelineLayoutEngine {
    pub fn new(config: TimelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Lay out every phase in input order, failing on the first invalid one
    pub fn layout(&self, phases: &[Phase]) -> Result<Vec<TimelineLayout>, ChartError> {
        phases.iter().map(|p| self.layout_phase(p)).collect()
    }

    /// Lay out a single phase
    pub fn layout_phase(&self, phase: &Phase) -> Result<TimelineLayout, ChartError> {
        self.validate_phase(phase)?;
        let span = f64::from(self.config.span);
        let left_fraction = phase.start / span;

        Ok(TimelineLayout {
            name: phase.name.clone(),
            subtitle: phase.subtitle.clone(),
            description: phase.description.clone(),
            left_fraction,
            width_fraction: fit_width(left_fraction, phase.duration / span),
        })
    }

    /// Check that a phase fits on the track
    pub fn validate_phase(&self, phase: &Phase) -> Result<(), ChartError> {
        if !phase.start.is_finite() || !phase.duration.is_finite() {
            return Err(ChartError::invalid_phase(
                &phase.name,
                "start and duration must be finite numbers",
            ));
        }
        if phase.duration <= 0.0 {
            return Err(ChartError::invalid_phase(
                &phase.name,
                format!("duration must be positive, got {}", phase.duration),
            ));
        }
        if phase.start < 0.0 {
            return Err(ChartError::invalid_phase(
                &phase.name,
                format!("start offset must not be negative, got {}", phase.start),
            ));
        }
        let span = f64::from(self.config.span);
        if phase.end() > span {
            return Err(ChartError::invalid_phase(
                &phase.name,
                format!(
                    "ends at {} but the timeline spans {} units",
                    phase.end(),
                    self.config.span
                ),
            ));
        }
        Ok(())
    }
}

/// Shrink `width` until `left + width` stays on the track.
///
/// Separately rounded quotients of a phase that ends exactly at the span can
/// sum to one ulp past 1.0.
fn fit_width(left: f64, width: f64) -> f64 {
    let mut width = width.min(1.0 - left);
    while width > 0.0 && left + width > 1.0 {
        width = f64::from_bits(width.to_bits() - 1);
    }
    width
}

/// Resolve a plan's configuration and lay out its phases
pub fn layout_plan(plan: &TimelinePlan) -> Result<(TimelineConfig, Vec<TimelineLayout>), ChartError> {
    let config = TimelineConfig::from_plan(plan)?;
    let engine = TimelineLayoutEngine::new(config);
    let layouts = engine.layout(&plan.phases)?;
    Ok((engine.config, layouts))
}
