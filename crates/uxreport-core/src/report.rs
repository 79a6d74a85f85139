//! Report document model
//!
//! A report is an ordered list of titled sections, each holding an ordered
//! list of content blocks. Chart blocks carry their own data; the renderers
//! derive every percentage and fraction from it on each render.
//!
//! Reports are authored as TOML:
//!
//! ```toml
//! title = "CMS User Experience Survey Insights"
//!
//! [[sections]]
//! title = "User Feedback"
//!
//! [[sections.blocks]]
//! kind = "pie_chart"
//! title = "Distribution of Key Challenges"
//! data = [
//!     { label = "Technical Issues & Performance", count = 11 },
//!     { label = "Content Findability", count = 9 },
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    validate_color, BarValue, CategoryCount, ChartError, Palette, Phase, ZeroTotalPolicy,
};

/// A complete report page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            theme: Theme::default(),
            sections: Vec::new(),
        }
    }

    /// Append a section
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// All blocks in page order
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections.iter().flat_map(|s| s.blocks.iter())
    }

    pub fn pie_charts(&self) -> impl Iterator<Item = &PieChartData> {
        self.blocks().filter_map(|b| match b {
            Block::PieChart(pie) => Some(pie),
            _ => None,
        })
    }

    pub fn bar_charts(&self) -> impl Iterator<Item = &BarChartData> {
        self.blocks().filter_map(|b| match b {
            Block::BarChart(bars) => Some(bars),
            _ => None,
        })
    }

    pub fn timelines(&self) -> impl Iterator<Item = &TimelinePlan> {
        self.blocks().filter_map(|b| match b {
            Block::Timeline(plan) => Some(plan),
            _ => None,
        })
    }
}

/// Presentation settings shared by every chart on the page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Slice colors for pie charts
    pub palette: Palette,
    pub bar_color: String,
    pub timeline_color: String,
    pub text_color: String,
    pub background_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            bar_color: "#8DC63F".into(),
            timeline_color: "#0088FE".into(),
            text_color: "#2c3e50".into(),
            background_color: "#ffffff".into(),
        }
    }
}

impl Theme {
    /// Check every color; palette colors are checked when the palette is built
    pub fn validate(&self) -> Result<(), ChartError> {
        for color in [
            &self.bar_color,
            &self.timeline_color,
            &self.text_color,
            &self.background_color,
        ] {
            validate_color(color)?;
        }
        Ok(())
    }
}

/// A titled group of blocks
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }
}

/// One unit of section content
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { text: String },
    Paragraph { text: String },
    Quote(Quote),
    /// Bulleted list of action items under a heading
    Actions {
        heading: String,
        items: Vec<String>,
    },
    NextStep(NextStep),
    BarChart(BarChartData),
    PieChart(PieChartData),
    Timeline(TimelinePlan),
}

/// Attributed quotation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// Action card with an icon, description and expected impact
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextStep {
    #[serde(default)]
    pub icon: Icon,
    pub title: String,
    pub description: String,
    pub impact: String,
}

/// Glyph shown on a next-step card
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    #[default]
    Zap,
    BookOpen,
    Users,
    BarChart,
    Layout,
    FolderTree,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Zap => "\u{26A1}",
            Icon::BookOpen => "\u{1F4D6}",
            Icon::Users => "\u{1F465}",
            Icon::BarChart => "\u{1F4CA}",
            Icon::Layout => "\u{1F5D4}",
            Icon::FolderTree => "\u{1F5C2}",
        }
    }
}

/// Bar chart block
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarChartData {
    pub title: String,
    pub data: Vec<BarValue>,
}

/// Pie chart block
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieChartData {
    pub title: String,
    pub data: Vec<CategoryCount>,
    #[serde(default)]
    pub zero_total: ZeroTotalPolicy,
}

/// Timeline block; also the JSON input of the timeline layout
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelinePlan {
    #[serde(default)]
    pub title: String,
    /// Number of time units across the track
    pub span: u32,
    /// Explicit column labels, one per unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    /// First month (`YYYY-MM`) when columns are month abbreviations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_month: Option<String>,
    pub phases: Vec<Phase>,
}

impl TimelinePlan {
    pub fn new(span: u32) -> Self {
        Self {
            title: String::new(),
            span,
            columns: None,
            start_month: None,
            phases: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn start_month(mut self, month: impl Into<String>) -> Self {
        self.start_month = Some(month.into());
        self
    }

    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn phase(mut self, phase: Phase) -> Self {
        self.phases.push(phase);
        self
    }
}
