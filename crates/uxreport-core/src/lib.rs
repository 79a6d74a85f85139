//! # uxreport-core
//!
//! Core domain model and traits for the uxreport survey renderer.
//!
//! This crate provides:
//! - Chart input types: `CategoryCount`, `Phase`, `BarValue`
//! - Derived layout types: `DerivedSegment`, `TimelineLayout`, `BarLayout`
//! - The report document model (`report` module)
//! - The `Renderer` trait and error types
//!
//! ## Example
//!
//! ```rust
//! use uxreport_core::{CategoryCount, Palette, Phase};
//!
//! let challenges = vec![
//!     CategoryCount::new("Technical Issues & Performance", 11),
//!     CategoryCount::new("Content Findability", 9),
//! ];
//! let palette = Palette::default();
//! assert_eq!(palette.color_for(5), "#00C49F");
//!
//! let phase = Phase::new("Phase 1")
//!     .subtitle("Foundation Improvements")
//!     .span(0.0, 3.0);
//! assert_eq!(phase.end(), 3.0);
//! # let _ = challenges;
//! ```

pub mod report;

pub use report::{
    BarChartData, Block, Icon, NextStep, PieChartData, Quote, Report, Section, Theme,
    TimelinePlan,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Pie Chart Types
// ============================================================================

/// One labeled count, the input unit of a proportion chart
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: u64,
}

impl CategoryCount {
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// One slice of a proportion chart, derived from a `CategoryCount`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DerivedSegment {
    pub label: String,
    pub count: u64,
    /// Rounded share of the total, 0..=100
    pub percentage: u8,
    /// Position in the palette (segment index modulo palette length)
    pub color_index: usize,
    pub color: String,
    /// Slice start angle in radians, clockwise from 12 o'clock
    #[serde(skip)]
    pub start_angle: f64,
    /// Slice end angle in radians, clockwise from 12 o'clock
    #[serde(skip)]
    pub end_angle: f64,
}

impl DerivedSegment {
    /// Tooltip text, e.g. `"39% (7 mentions)"`
    pub fn tooltip(&self) -> String {
        format!("{}% ({} mentions)", self.percentage, self.count)
    }

    /// Label drawn next to the slice, e.g. `"39%"`
    pub fn slice_label(&self) -> String {
        format!("{}%", self.percentage)
    }

    /// Angle at the middle of the slice
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// What a proportion chart does when every count is zero
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroTotalPolicy {
    /// Fail with `ChartError::ZeroTotal`
    #[default]
    Reject,
    /// Keep every segment and show it as 0%
    ShowZero,
}

// ============================================================================
// Palette
// ============================================================================

/// Cyclic list of display colors, assigned to segments by position
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette {
    colors: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                "#0088FE".into(),
                "#00C49F".into(),
                "#FFBB28".into(),
                "#FF8042".into(),
            ],
        }
    }
}

impl Palette {
    pub fn new<I, S>(colors: I) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(ChartError::EmptyPalette);
        }
        for color in &colors {
            validate_color(color)?;
        }
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Palette slot for the item at `index`
    pub fn index_for(&self, index: usize) -> usize {
        index % self.colors.len()
    }

    /// Color for the item at `index`
    pub fn color_for(&self, index: usize) -> &str {
        &self.colors[self.index_for(index)]
    }
}

/// Check that a theme color is a plain CSS color value.
///
/// Accepts hex (`#8DC63F`), names (`teal`) and functional notation
/// (`rgb(0, 136, 254)`, `hsl(200 50% 40% / 0.5)`). Anything that could close
/// a `style` attribute or a `<style>` rule is rejected.
pub fn validate_color(color: &str) -> Result<(), ChartError> {
    let plain = !color.trim().is_empty()
        && color
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "#(),.%/ -".contains(c));
    if plain {
        Ok(())
    } else {
        Err(ChartError::InvalidColor(color.to_string()))
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = ChartError;

    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

// ============================================================================
// Timeline Types
// ============================================================================

/// One interval of a plan, drawn as a bar on its own timeline row
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    /// Offset from the start of the timeline, in time units
    pub start: f64,
    /// Length in time units
    pub duration: f64,
}

impl Phase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subtitle: String::new(),
            description: String::new(),
            start: 0.0,
            duration: 1.0,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set start offset and duration
    pub fn span(mut self, start: f64, duration: f64) -> Self {
        self.start = start;
        self.duration = duration;
        self
    }

    /// Offset at which the phase ends
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Horizontal placement of one phase, as fractions of the track width
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineLayout {
    pub name: String,
    pub subtitle: String,
    pub description: String,
    /// Left edge, in [0, 1]
    pub left_fraction: f64,
    /// Width, in (0, 1]
    pub width_fraction: f64,
}

impl TimelineLayout {
    pub fn right_fraction(&self) -> f64 {
        self.left_fraction + self.width_fraction
    }

    /// Left edge as a CSS percentage
    pub fn left_percent(&self) -> f64 {
        self.left_fraction * 100.0
    }

    /// Width as a CSS percentage
    pub fn width_percent(&self) -> f64 {
        self.width_fraction * 100.0
    }
}

// ============================================================================
// Bar Chart Types
// ============================================================================

/// One labeled value of a bar chart
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarValue {
    pub label: String,
    pub value: u64,
}

impl BarValue {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Vertical size of one bar relative to the tallest bar
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarLayout {
    pub label: String,
    pub value: u64,
    /// Height, in [0, 1]
    pub height_fraction: f64,
}

// ============================================================================
// Traits
// ============================================================================

/// Output rendering
pub trait Renderer {
    type Output;

    /// Render a report to the output format
    fn render(&self, report: &Report) -> Result<Self::Output, RenderError>;
}

// ============================================================================
// Errors
// ============================================================================

/// Chart layout error
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ChartError {
    #[error("Total of all counts is zero; percentages are undefined")]
    ZeroTotal,

    #[error("Invalid phase '{name}': {reason}")]
    InvalidPhase { name: String, reason: String },

    #[error("Invalid timeline span: {0} (must be positive)")]
    InvalidSpan(u32),

    #[error("Timeline has {columns} column labels but spans {span} units")]
    ColumnMismatch { span: u32, columns: usize },

    #[error("Invalid start month '{0}' (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Palette must contain at least one color")]
    EmptyPalette,

    #[error("Invalid color '{0}' (expected a CSS color such as #0088FE)")]
    InvalidColor(String),

    #[error("Chart '{0}' has no data")]
    Empty(String),
}

impl ChartError {
    pub fn invalid_phase(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPhase {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Rendering error
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

// ============================================================================
// Tests
// ============================================================================
