//! # uxreport-render
//!
//! Rendering backends for uxreport survey reports.
//!
//! This crate provides:
//! - Standalone HTML report pages (`HtmlReportRenderer`)
//! - SVG pie and bar charts (`SvgPieRenderer`, `SvgBarRenderer`)
//! - HTML timeline tracks with hover detail panels (`HtmlTimelineRenderer`)
//! - MermaidJS `pie` and `gantt` blocks for Markdown (`MermaidRenderer`)
//! - Plain text summaries (`TextRenderer`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use uxreport_core::{Report, Renderer};
//! use uxreport_render::{HtmlReportRenderer, MermaidRenderer, SvgPieRenderer};
//!
//! // Full page
//! let html = HtmlReportRenderer::new().render(&report)?;
//!
//! // First pie chart of the report as an SVG document
//! let svg = SvgPieRenderer::new().render(&report)?;
//!
//! // Charts as Mermaid blocks for docs
//! let markdown = MermaidRenderer::new().render(&report)?;
//! ```

pub mod html;
pub mod mermaid;
pub mod timeline;

pub use html::HtmlReportRenderer;
pub use mermaid::MermaidRenderer;
pub use timeline::{DetailState, DetailStates, HtmlTimelineRenderer};

use std::f64::consts::PI;

use svg::node::element::{Element, Group, Line, Path, Rectangle, Text};
use svg::{Document, Node};
use uxreport_chart::{axis_ticks, bar::max_value, BarChartLayout, PieLayout};
use uxreport_core::{
    BarChartData, Block, DerivedSegment, PieChartData, RenderError, Renderer, Report, Theme,
};

/// SVG pie chart renderer configuration
#[derive(Clone, Debug)]
pub struct SvgPieRenderer {
    /// Outer radius of the pie in pixels
    pub radius: u32,
    /// Room around the pie for slice labels
    pub label_space: u32,
    /// Padding around the chart
    pub padding: u32,
    /// Height reserved for the chart title
    pub title_height: u32,
    /// Height per legend row
    pub legend_row_height: u32,
    /// Draw `NN%` labels next to slices
    pub show_labels: bool,
    /// Font family
    pub font_family: String,
    /// Font size in pixels
    pub font_size: u32,
}

impl Default for SvgPieRenderer {
    fn default() -> Self {
        Self {
            radius: 120,
            label_space: 50,
            padding: 20,
            title_height: 30,
            legend_row_height: 20,
            show_labels: true,
            font_family: "system-ui, -apple-system, sans-serif".into(),
            font_size: 12,
        }
    }
}

impl SvgPieRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure outer radius
    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Hide slice labels (tooltips and legend remain)
    pub fn hide_labels(mut self) -> Self {
        self.show_labels = false;
        self
    }

    fn total_width(&self) -> u32 {
        self.padding * 2 + self.label_space * 2 + self.radius * 2
    }

    fn total_height(&self, segment_count: usize) -> u32 {
        self.padding * 2
            + self.title_height
            + self.label_space * 2
            + self.radius * 2
            + segment_count as u32 * self.legend_row_height
    }

    fn center(&self) -> (f64, f64) {
        let cx = self.padding + self.label_space + self.radius;
        let cy = self.padding + self.title_height + self.label_space + self.radius;
        (f64::from(cx), f64::from(cy))
    }

    /// Point at `angle` (clockwise from 12 o'clock) and distance `r` from the center
    fn polar(&self, angle: f64, r: f64) -> (f64, f64) {
        let (cx, cy) = self.center();
        (cx + r * angle.sin(), cy - r * angle.cos())
    }

    /// Lay out a pie chart block with the theme palette
    pub fn segments(
        &self,
        chart: &PieChartData,
        theme: &Theme,
    ) -> Result<Vec<DerivedSegment>, RenderError> {
        let segments = PieLayout::new()
            .palette(theme.palette.clone())
            .zero_total(chart.zero_total)
            .segments(&chart.data)?;
        Ok(segments)
    }

    /// Build the SVG document for already computed segments
    pub fn document(&self, title: &str, segments: &[DerivedSegment], theme: &Theme) -> Document {
        let width = self.total_width();
        let height = self.total_height(segments.len());

        let mut document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0, 0, width, height))
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("class", "pie-chart");

        let background = Rectangle::new()
            .set("width", "100%")
            .set("height", "100%")
            .set("fill", theme.background_color.as_str());
        document = document.add(background);

        let title_text = Text::new(title)
            .set("x", width / 2)
            .set("y", self.padding + 18)
            .set("font-family", self.font_family.as_str())
            .set("font-size", self.font_size + 4)
            .set("font-weight", "bold")
            .set("fill", theme.text_color.as_str())
            .set("text-anchor", "middle");
        document = document.add(title_text);

        let mut slices = Group::new().set("class", "slices");
        for segment in segments {
            slices = slices.add(self.render_slice(segment, theme));
        }
        document = document.add(slices);

        let legend_y = self.padding + self.title_height + self.label_space * 2 + self.radius * 2;
        document.add(self.render_legend(segments, legend_y, theme))
    }

    /// Render one slice with its tooltip and optional label
    fn render_slice(&self, segment: &DerivedSegment, theme: &Theme) -> Group {
        let mut group = Group::new()
            .set("class", "slice")
            .set("data-percentage", segment.percentage.to_string());

        group = group.add(svg_title(format!("{}: {}", segment.label, segment.tooltip())));

        let sweep = segment.end_angle - segment.start_angle;
        if sweep <= 0.0 {
            return group;
        }

        let r = f64::from(self.radius);
        let (cx, cy) = self.center();
        let shape = if sweep >= 2.0 * PI - 1e-9 {
            // A full-circle arc has identical end points and would not draw
            Path::new().set(
                "d",
                format!(
                    "M {cx} {top} A {r} {r} 0 1 1 {cx} {bottom} A {r} {r} 0 1 1 {cx} {top} Z",
                    cx = cx,
                    top = cy - r,
                    bottom = cy + r,
                    r = r
                ),
            )
        } else {
            let (x1, y1) = self.polar(segment.start_angle, r);
            let (x2, y2) = self.polar(segment.end_angle, r);
            let large_arc = u8::from(sweep > PI);
            Path::new().set(
                "d",
                format!(
                    "M {cx} {cy} L {x1:.3} {y1:.3} A {r} {r} 0 {large_arc} 1 {x2:.3} {y2:.3} Z"
                ),
            )
        };
        group = group.add(
            shape
                .set("fill", segment.color.as_str())
                .set("stroke", theme.background_color.as_str())
                .set("stroke-width", 1),
        );

        if self.show_labels {
            let mid = segment.mid_angle();
            let (lx1, ly1) = self.polar(mid, r);
            let (lx2, ly2) = self.polar(mid, r + f64::from(self.label_space) * 0.5);
            group = group.add(
                Line::new()
                    .set("x1", lx1)
                    .set("y1", ly1)
                    .set("x2", lx2)
                    .set("y2", ly2)
                    .set("stroke", segment.color.as_str())
                    .set("stroke-width", 1),
            );

            let (tx, ty) = self.polar(mid, r + f64::from(self.label_space) * 0.6);
            let anchor = if mid.sin() >= 0.0 { "start" } else { "end" };
            group = group.add(
                Text::new(segment.slice_label())
                    .set("x", tx)
                    .set("y", ty + 4.0)
                    .set("font-family", self.font_family.as_str())
                    .set("font-size", self.font_size)
                    .set("fill", segment.color.as_str())
                    .set("text-anchor", anchor)
                    .set("class", "slice-label"),
            );
        }

        group
    }

    /// Render the legend, one row per segment in input order
    fn render_legend(&self, segments: &[DerivedSegment], y_offset: u32, theme: &Theme) -> Group {
        let mut group = Group::new().set("class", "legend");
        let box_size = 12.0;
        let x = f64::from(self.padding + self.label_space);

        for (row, segment) in segments.iter().enumerate() {
            let y = f64::from(y_offset) + row as f64 * f64::from(self.legend_row_height);

            group = group.add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", y)
                    .set("width", box_size)
                    .set("height", box_size)
                    .set("rx", 2)
                    .set("fill", segment.color.as_str()),
            );
            group = group.add(
                Text::new(truncate(&segment.label, 48))
                    .set("x", x + box_size + 6.0)
                    .set("y", y + box_size - 2.0)
                    .set("font-family", self.font_family.as_str())
                    .set("font-size", self.font_size)
                    .set("fill", theme.text_color.as_str()),
            );
        }

        group
    }

    /// Lay out and render one pie chart block to an SVG string
    pub fn render_chart(&self, chart: &PieChartData, theme: &Theme) -> Result<String, RenderError> {
        let segments = self.segments(chart, theme)?;
        document_to_string(&self.document(&chart.title, &segments, theme))
    }
}

impl Renderer for SvgPieRenderer {
    type Output = String;

    /// Render the first pie chart of the report
    fn render(&self, report: &Report) -> Result<String, RenderError> {
        let chart = report
            .pie_charts()
            .next()
            .ok_or_else(|| RenderError::InvalidData("No pie chart to render".into()))?;
        self.render_chart(chart, &report.theme)
    }
}

/// SVG bar chart renderer configuration
#[derive(Clone, Debug)]
pub struct SvgBarRenderer {
    /// Total width in pixels
    pub width: u32,
    /// Total height in pixels
    pub height: u32,
    /// Padding around the chart
    pub padding: u32,
    /// Width of the value axis
    pub axis_width: u32,
    /// Height of the category labels below the bars
    pub label_height: u32,
    /// Share of each slot taken by its bar
    pub bar_ratio: f64,
    /// Font family
    pub font_family: String,
    /// Font size in pixels
    pub font_size: u32,
}

impl Default for SvgBarRenderer {
    fn default() -> Self {
        Self {
            width: 600,
            height: 300,
            padding: 20,
            axis_width: 40,
            label_height: 24,
            bar_ratio: 0.8,
            font_family: "system-ui, -apple-system, sans-serif".into(),
            font_size: 12,
        }
    }
}

impl SvgBarRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure width
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Configure height
    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Build the SVG document for a bar chart block
    pub fn document(&self, chart: &BarChartData, theme: &Theme) -> Result<Document, RenderError> {
        let bars = BarChartLayout::new().layout(chart)?;
        let max = max_value(&chart.data);

        let plot_x = f64::from(self.padding + self.axis_width);
        let plot_y = f64::from(self.padding);
        let plot_w = f64::from(self.width.saturating_sub(self.padding * 2 + self.axis_width));
        let plot_h = f64::from(self.height.saturating_sub(self.padding * 2 + self.label_height));
        let baseline = plot_y + plot_h;

        let mut document = Document::new()
            .set("width", self.width)
            .set("height", self.height)
            .set("viewBox", (0, 0, self.width, self.height))
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("class", "bar-chart");

        // Value axis
        let mut axis = Group::new().set("class", "axis");
        for tick in axis_ticks(max) {
            let y = if max == 0 {
                baseline
            } else {
                baseline - plot_h * tick as f64 / max as f64
            };
            axis = axis.add(
                Line::new()
                    .set("x1", plot_x)
                    .set("y1", y)
                    .set("x2", plot_x + plot_w)
                    .set("y2", y)
                    .set("stroke", "#ecf0f1")
                    .set("stroke-width", 1),
            );
            axis = axis.add(
                Text::new(tick.to_string())
                    .set("x", plot_x - 6.0)
                    .set("y", y + 4.0)
                    .set("font-family", self.font_family.as_str())
                    .set("font-size", self.font_size.saturating_sub(1))
                    .set("fill", theme.text_color.as_str())
                    .set("text-anchor", "end"),
            );
        }
        axis = axis.add(
            Line::new()
                .set("x1", plot_x)
                .set("y1", baseline)
                .set("x2", plot_x + plot_w)
                .set("y2", baseline)
                .set("stroke", theme.text_color.as_str())
                .set("stroke-width", 1),
        );
        document = document.add(axis);

        // Bars
        let slot = plot_w / bars.len() as f64;
        let bar_w = slot * self.bar_ratio;
        let mut group = Group::new().set("class", "bars");
        for (i, bar) in bars.iter().enumerate() {
            let x = plot_x + i as f64 * slot + (slot - bar_w) / 2.0;
            let h = plot_h * bar.height_fraction;

            let tooltip = svg_title(format!("{}: {}", bar.label, bar.value));
            let rect = Rectangle::new()
                .set("x", x)
                .set("y", baseline - h)
                .set("width", bar_w)
                .set("height", h)
                .set("fill", theme.bar_color.as_str())
                .set("data-value", bar.value.to_string())
                .add(tooltip);
            group = group.add(rect);

            group = group.add(
                Text::new(truncate(&bar.label, 16))
                    .set("x", x + bar_w / 2.0)
                    .set("y", baseline + f64::from(self.label_height) - 6.0)
                    .set("font-family", self.font_family.as_str())
                    .set("font-size", self.font_size.saturating_sub(1))
                    .set("fill", theme.text_color.as_str())
                    .set("text-anchor", "middle"),
            );
        }
        document = document.add(group);

        Ok(document)
    }

    /// Render one bar chart block to an SVG string
    pub fn render_chart(&self, chart: &BarChartData, theme: &Theme) -> Result<String, RenderError> {
        document_to_string(&self.document(chart, theme)?)
    }
}

impl Renderer for SvgBarRenderer {
    type Output = String;

    /// Render the first bar chart of the report
    fn render(&self, report: &Report) -> Result<String, RenderError> {
        let chart = report
            .bar_charts()
            .next()
            .ok_or_else(|| RenderError::InvalidData("No bar chart to render".into()))?;
        self.render_chart(chart, &report.theme)
    }
}

/// `<title>` child, shown by browsers as a hover tooltip
fn svg_title(text: String) -> Element {
    let mut title = Element::new("title");
    title.append(svg::node::Text::new(text));
    title
}

/// Serialize an SVG document
fn document_to_string(document: &Document) -> Result<String, RenderError> {
    let mut output = Vec::new();
    svg::write(&mut output, document)
        .map_err(|e| RenderError::Format(format!("Failed to write SVG: {}", e)))?;

    String::from_utf8(output).map_err(|e| RenderError::Format(format!("Invalid UTF-8: {}", e)))
}

/// Plain text renderer for console output
#[derive(Clone, Debug)]
pub struct TextRenderer {
    /// Characters used for a full-width timeline track or bar
    pub track_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { track_width: 48 }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn cells(&self, fraction: f64) -> usize {
        (fraction * self.track_width as f64).round() as usize
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, report: &Report) -> Result<String, RenderError> {
        let mut out = format!("{}\n{}\n", report.title, "=".repeat(report.title.chars().count()));

        for section in &report.sections {
            out.push_str(&format!("\n{}\n", section.title));

            for block in &section.blocks {
                match block {
                    Block::PieChart(chart) => {
                        let segments = PieLayout::new()
                            .palette(report.theme.palette.clone())
                            .zero_total(chart.zero_total)
                            .segments(&chart.data)?;
                        out.push_str(&format!("  {}\n", chart.title));
                        let label_width = segments
                            .iter()
                            .map(|s| s.label.chars().count())
                            .max()
                            .unwrap_or(0);
                        for s in &segments {
                            out.push_str(&format!(
                                "    {:<width$}  {}\n",
                                s.label,
                                s.tooltip(),
                                width = label_width
                            ));
                        }
                    }
                    Block::BarChart(chart) => {
                        let bars = BarChartLayout::new().layout(chart)?;
                        out.push_str(&format!("  {}\n", chart.title));
                        let label_width = bars
                            .iter()
                            .map(|b| b.label.chars().count())
                            .max()
                            .unwrap_or(0);
                        for b in &bars {
                            out.push_str(&format!(
                                "    {:<width$} | {} {}\n",
                                b.label,
                                "#".repeat(self.cells(b.height_fraction)),
                                b.value,
                                width = label_width
                            ));
                        }
                    }
                    Block::Timeline(plan) => {
                        let (config, layouts) = uxreport_chart::layout_plan(plan)?;
                        if !plan.title.is_empty() {
                            out.push_str(&format!("  {}\n", plan.title));
                        }
                        out.push_str(&format!("    columns: {}\n", config.columns().join(" ")));
                        let name_width = layouts
                            .iter()
                            .map(|l| l.name.chars().count())
                            .max()
                            .unwrap_or(0);
                        for l in &layouts {
                            let lead = self.cells(l.left_fraction);
                            let fill = self.cells(l.width_fraction).max(1);
                            let tail = self.track_width.saturating_sub(lead + fill);
                            out.push_str(&format!(
                                "    {:<width$} [{}{}{}] {:.2}-{:.2}\n",
                                l.name,
                                ".".repeat(lead),
                                "#".repeat(fill),
                                ".".repeat(tail),
                                l.left_fraction,
                                l.right_fraction(),
                                width = name_width
                            ));
                        }
                    }
                    Block::Heading { text } => out.push_str(&format!("  {}\n", text)),
                    Block::Actions { heading, items } => {
                        out.push_str(&format!("  {}\n", heading));
                        for item in items {
                            out.push_str(&format!("    - {}\n", item));
                        }
                    }
                    Block::NextStep(step) => out.push_str(&format!("  * {}\n", step.title)),
                    Block::Paragraph { .. } | Block::Quote(_) => {}
                }
            }
        }

        Ok(out)
    }
}

/// HTML-escape a string
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Truncate a string with ellipsis
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        format!(
            "{}…",
            s.chars().take(max.saturating_sub(1)).collect::<String>()
        )
    }
}

/// Format a fraction as a CSS percentage with at most four decimals
pub(crate) fn css_percent(fraction: f64) -> String {
    let formatted = format!("{:.4}", fraction * 100.0);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uxreport_core::{BarValue, CategoryCount, Section, ZeroTotalPolicy};

    fn challenges() -> PieChartData {
        PieChartData {
            title: "Distribution of Key Challenges".into(),
            data: vec![
                CategoryCount::new("Technical Issues and Performance", 11),
                CategoryCount::new("Content Findability", 9),
                CategoryCount::new("Lack of Training", 7),
                CategoryCount::new("Limited Templates and Layout", 6),
            ],
            zero_total: ZeroTotalPolicy::Reject,
        }
    }

    fn ratings() -> BarChartData {
        BarChartData {
            title: "Overall Satisfaction Ratings".into(),
            data: vec![
                BarValue::new("1", 3),
                BarValue::new("2", 4),
                BarValue::new("3", 7),
                BarValue::new("4", 4),
                BarValue::new("5", 0),
            ],
        }
    }

    fn create_test_report() -> Report {
        Report::new("Survey Insights").section(
            Section::new("Feedback")
                .block(Block::BarChart(ratings()))
                .block(Block::PieChart(challenges())),
        )
    }

    #[test]
    fn svg_pie_renderer_creation() {
        let renderer = SvgPieRenderer::new();
        assert_eq!(renderer.radius, 120);
        assert!(renderer.show_labels);
    }

    #[test]
    fn svg_pie_renderer_with_config() {
        let renderer = SvgPieRenderer::new().radius(80).hide_labels();
        assert_eq!(renderer.radius, 80);
        assert!(!renderer.show_labels);
    }

    #[test]
    fn svg_pie_produces_valid_svg() {
        let svg = SvgPieRenderer::new().render(&create_test_report()).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("Distribution of Key Challenges"));
        assert!(svg.contains("Content Findability"));
    }

    #[test]
    fn svg_pie_includes_tooltips_and_labels() {
        let svg = SvgPieRenderer::new().render(&create_test_report()).unwrap();

        assert!(svg.contains("33% (11 mentions)"));
        assert!(svg.contains("18% (6 mentions)"));
        assert_eq!(svg.matches("slice-label").count(), 4);
        assert_eq!(svg.matches("class=\"slice\"").count(), 4);
    }

    #[test]
    fn svg_pie_uses_palette_colors_in_order() {
        let svg = SvgPieRenderer::new().render(&create_test_report()).unwrap();

        let first = svg.find("#0088FE").unwrap();
        let second = svg.find("#00C49F").unwrap();
        let fourth = svg.find("#FF8042").unwrap();
        assert!(first < second && second < fourth);
    }

    #[test]
    fn svg_pie_hidden_labels() {
        let svg = SvgPieRenderer::new()
            .hide_labels()
            .render(&create_test_report())
            .unwrap();
        assert!(!svg.contains("slice-label"));
        assert!(svg.contains("33% (11 mentions)"));
    }

    #[test]
    fn svg_pie_single_category_draws_full_circle() {
        let chart = PieChartData {
            title: "One".into(),
            data: vec![CategoryCount::new("Everything", 5)],
            zero_total: ZeroTotalPolicy::Reject,
        };
        let svg = SvgPieRenderer::new()
            .render_chart(&chart, &Theme::default())
            .unwrap();
        assert!(svg.contains("100% (5 mentions)"));
        assert!(svg.contains("0 1 1"));
    }

    #[test]
    fn svg_pie_zero_total_fails() {
        let chart = PieChartData {
            title: "Nothing".into(),
            data: vec![CategoryCount::new("a", 0)],
            zero_total: ZeroTotalPolicy::Reject,
        };
        let result = SvgPieRenderer::new().render_chart(&chart, &Theme::default());
        assert!(matches!(
            result,
            Err(RenderError::Chart(uxreport_core::ChartError::ZeroTotal))
        ));
    }

    #[test]
    fn svg_pie_zero_total_show_zero_renders_legend_only() {
        let chart = PieChartData {
            title: "Nothing".into(),
            data: vec![CategoryCount::new("a", 0), CategoryCount::new("b", 0)],
            zero_total: ZeroTotalPolicy::ShowZero,
        };
        let svg = SvgPieRenderer::new()
            .render_chart(&chart, &Theme::default())
            .unwrap();
        assert!(svg.contains("0% (0 mentions)"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn svg_pie_report_without_pie_fails() {
        let result = SvgPieRenderer::new().render(&Report::new("Empty"));
        assert!(matches!(result, Err(RenderError::InvalidData(_))));
    }

    #[test]
    fn svg_bar_produces_one_rect_per_bar() {
        let svg = SvgBarRenderer::new().render(&create_test_report()).unwrap();

        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("data-value=").count(), 5);
        assert!(svg.contains("#8DC63F"));
        assert!(svg.contains("3: 7"));
    }

    #[test]
    fn svg_bar_with_config() {
        let renderer = SvgBarRenderer::new().width(800).height(400);
        assert_eq!(renderer.width, 800);
        assert_eq!(renderer.height, 400);
    }

    #[test]
    fn svg_bar_zero_font_size() {
        let renderer = SvgBarRenderer {
            font_size: 0,
            ..SvgBarRenderer::default()
        };
        let svg = renderer.render_chart(&ratings(), &Theme::default()).unwrap();
        assert!(svg.contains("font-size=\"0\""));
        assert_eq!(svg.matches("data-value=").count(), 5);
    }

    #[test]
    fn text_renderer_lists_segments() {
        let text = TextRenderer::new().render(&create_test_report()).unwrap();

        assert!(text.starts_with("Survey Insights\n===="));
        assert!(text.contains("Content Findability"));
        assert!(text.contains("27% (9 mentions)"));
        assert!(text.contains(&format!("| {} 7", "#".repeat(48))));
    }

    #[test]
    fn html_escape_works() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
    }

    #[test]
    fn truncate_works() {
        assert_eq!(truncate("Short", 20), "Short");
        assert_eq!(truncate("This is a very long name", 10), "This is a…");
    }

    #[test]
    fn css_percent_trims_zeros() {
        assert_eq!(css_percent(0.5), "50%");
        assert_eq!(css_percent(0.0), "0%");
        assert_eq!(css_percent(1.0 / 6.0), "16.6667%");
        assert_eq!(css_percent(0.125), "12.5%");
    }
}
