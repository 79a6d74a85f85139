//! Standalone HTML report page
//!
//! Generates a single self-contained HTML file: every section of the report
//! in order, with inline SVG for pie and bar charts and an HTML/CSS timeline
//! track. No external assets are referenced.

use tracing::debug;
use uxreport_core::{Block, NextStep, Quote, RenderError, Renderer, Report, Section, Theme};

use crate::timeline::HtmlTimelineRenderer;
use crate::{html_escape, SvgBarRenderer, SvgPieRenderer};

/// HTML report renderer configuration
#[derive(Clone, Debug)]
pub struct HtmlReportRenderer {
    /// Maximum page content width in pixels
    pub max_width: u32,
    /// Pie chart settings
    pub pie: SvgPieRenderer,
    /// Bar chart settings
    pub bars: SvgBarRenderer,
    /// Emit the script that mirrors hover state into `data-detail`
    pub interactive: bool,
}

impl Default for HtmlReportRenderer {
    fn default() -> Self {
        Self {
            max_width: 960,
            pie: SvgPieRenderer::default(),
            bars: SvgBarRenderer::default(),
            interactive: true,
        }
    }
}

impl HtmlReportRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure maximum content width
    pub fn max_width(mut self, width: u32) -> Self {
        self.max_width = width;
        self
    }

    /// Use custom pie chart settings
    pub fn pie(mut self, pie: SvgPieRenderer) -> Self {
        self.pie = pie;
        self
    }

    /// Use custom bar chart settings
    pub fn bars(mut self, bars: SvgBarRenderer) -> Self {
        self.bars = bars;
        self
    }

    /// Disable the script; hover and focus still reveal detail panels via CSS
    pub fn static_page(mut self) -> Self {
        self.interactive = false;
        self
    }

    fn timeline(&self, theme: &Theme) -> HtmlTimelineRenderer {
        HtmlTimelineRenderer::new().bar_color(theme.timeline_color.as_str())
    }

    /// Generate the complete HTML document
    fn generate_html(&self, report: &Report) -> Result<String, RenderError> {
        let mut body = String::new();
        for section in &report.sections {
            body.push_str(&self.render_section(section, &report.theme)?);
        }

        let timeline = self.timeline(&report.theme);
        let css = self.generate_css(&report.theme, &timeline);
        let js = if self.interactive { timeline.js() } else { "" };

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <div class="dashboard">
        <h1 class="main-title">{title}</h1>
{body}
    </div>
    <script>
{js}
    </script>
</body>
</html>"#,
            title = html_escape(&report.title),
            css = css,
            body = body,
            js = js,
        ))
    }

    /// Render one section and its blocks
    fn render_section(&self, section: &Section, theme: &Theme) -> Result<String, RenderError> {
        let mut html = format!(
            "        <div class=\"info-graphic-section\">\n            <h2 class=\"section-title\">{}</h2>\n",
            html_escape(&section.title)
        );
        for block in &section.blocks {
            html.push_str(&self.render_block(block, theme)?);
        }
        html.push_str("        </div>\n");
        Ok(html)
    }

    fn render_block(&self, block: &Block, theme: &Theme) -> Result<String, RenderError> {
        let html = match block {
            Block::Heading { text } => format!("            <h3>{}</h3>\n", html_escape(text)),
            Block::Paragraph { text } => format!(
                "            <p class=\"section-intro\">{}</p>\n",
                html_escape(text)
            ),
            Block::Quote(quote) => render_quote(quote),
            Block::Actions { heading, items } => {
                let mut html = format!("            <h3>{}</h3>\n            <ul>\n", html_escape(heading));
                for item in items {
                    html.push_str(&format!("                <li>{}</li>\n", html_escape(item)));
                }
                html.push_str("            </ul>\n");
                html
            }
            Block::NextStep(step) => render_next_step(step),
            Block::BarChart(chart) => {
                let svg = self.bars.render_chart(chart, theme)?;
                debug!(chart = %chart.title, bars = chart.data.len(), "rendered bar chart");
                format!(
                    "            <div class=\"bar-chart-section\">\n                <h3 class=\"chart-title\">{}</h3>\n{}\n            </div>\n",
                    html_escape(&chart.title),
                    svg
                )
            }
            Block::PieChart(chart) => {
                let segments = self.pie.segments(chart, theme)?;
                let svg = crate::document_to_string(&self.pie.document(&chart.title, &segments, theme))?;
                debug!(chart = %chart.title, segments = segments.len(), "rendered pie chart");

                let mut legend = String::from("                <ul class=\"pie-legend\">\n");
                for segment in &segments {
                    legend.push_str(&format!(
                        "                    <li><span class=\"legend-box\" style=\"background: {color}\"></span>{label} <span class=\"legend-value\">{tooltip}</span></li>\n",
                        color = html_escape(&segment.color),
                        label = html_escape(&segment.label),
                        tooltip = segment.tooltip(),
                    ));
                }
                legend.push_str("                </ul>\n");

                format!(
                    "            <div class=\"pie-chart-section\">\n                <h3 class=\"chart-title\">{}</h3>\n{}\n{}            </div>\n",
                    html_escape(&chart.title),
                    svg,
                    legend
                )
            }
            Block::Timeline(plan) => {
                let html = self.timeline(theme).render_plan(plan)?;
                debug!(span = plan.span, phases = plan.phases.len(), "rendered timeline");
                html
            }
        };
        Ok(html)
    }

    /// Generate CSS styles
    fn generate_css(&self, theme: &Theme, timeline: &HtmlTimelineRenderer) -> String {
        format!(
            r#"        :root {{
            --bg-color: {bg};
            --text-color: {text};
            --accent-color: {accent};
        }}
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: system-ui, -apple-system, sans-serif;
            background: var(--bg-color);
            color: var(--text-color);
            padding: 20px;
            line-height: 1.5;
        }}
        .dashboard {{
            max-width: {max_width}px;
            margin: 0 auto;
        }}
        .main-title {{
            font-size: 2rem;
            font-weight: 700;
            margin-bottom: 24px;
            text-align: center;
        }}
        .info-graphic-section {{
            margin-bottom: 40px;
            padding: 24px;
            border: 1px solid rgba(128,128,128,0.3);
            border-radius: 8px;
        }}
        .section-title {{
            font-size: 1.5rem;
            margin-bottom: 16px;
            color: var(--accent-color);
        }}
        .section-intro {{ margin-bottom: 12px; }}
        h3 {{ margin: 16px 0 8px; }}
        ul {{ margin: 0 0 12px 24px; }}
        .chart-title {{ text-align: center; }}
        .bar-chart-section svg, .pie-chart-section svg {{
            display: block;
            margin: 0 auto;
            max-width: 100%;
            height: auto;
        }}
        .pie-legend {{
            list-style: none;
            margin: 12px auto;
            display: flex;
            flex-wrap: wrap;
            gap: 16px;
            justify-content: center;
            font-size: 13px;
        }}
        .legend-box {{
            display: inline-block;
            width: 12px;
            height: 12px;
            border-radius: 2px;
            margin-right: 6px;
        }}
        .legend-value {{ color: rgba(128,128,128,0.9); }}
        .quote-box {{
            margin: 16px 0;
            padding: 16px 20px;
            border-left: 4px solid var(--accent-color);
            background: rgba(128,128,128,0.08);
        }}
        .quote-icon {{ font-size: 1.5rem; color: var(--accent-color); }}
        .quote-text {{ font-style: italic; }}
        .quote-author {{ text-align: right; margin-top: 8px; }}
        .next-step-item {{
            margin: 12px 0;
            padding: 16px;
            border-radius: 6px;
            background: rgba(128,128,128,0.08);
        }}
        .next-step-header {{
            display: flex;
            align-items: center;
            gap: 8px;
        }}
        .next-step-icon {{ font-size: 1.25rem; }}
        .impact {{ margin-top: 8px; }}
{timeline_css}"#,
            bg = theme.background_color,
            text = theme.text_color,
            accent = theme.timeline_color,
            max_width = self.max_width,
            timeline_css = timeline.css(),
        )
    }
}

fn render_quote(quote: &Quote) -> String {
    format!(
        r#"            <div class="quote-box">
                <span class="quote-icon">&ldquo;</span>
                <p class="quote-text">"{text}"</p>
                <p class="quote-author">- {author}</p>
            </div>
"#,
        text = html_escape(&quote.text),
        author = html_escape(&quote.author),
    )
}

fn render_next_step(step: &NextStep) -> String {
    let description = step
        .description
        .lines()
        .map(|line| html_escape(line.trim()))
        .collect::<Vec<_>>()
        .join("<br>\n");
    format!(
        r#"            <div class="next-step-item">
                <div class="next-step-header">
                    <span class="next-step-icon">{icon}</span>
                    <h4>{title}</h4>
                </div>
                <p>{description}</p>
                <div class="impact"><strong>Impact:</strong> {impact}</div>
            </div>
"#,
        icon = step.icon.glyph(),
        title = html_escape(&step.title),
        description = description,
        impact = html_escape(&step.impact),
    )
}

impl Renderer for HtmlReportRenderer {
    type Output = String;

    fn render(&self, report: &Report) -> Result<String, RenderError> {
        if report.sections.is_empty() {
            return Err(RenderError::InvalidData("No sections to render".into()));
        }
        // Theme colors are written unescaped into the page stylesheet
        report.theme.validate()?;

        self.generate_html(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uxreport_core::{
        BarChartData, BarValue, CategoryCount, ChartError, Icon, PieChartData, Phase,
        TimelinePlan, ZeroTotalPolicy,
    };

    fn create_test_report() -> Report {
        Report::new("CMS Survey Insights")
            .section(
                Section::new("Overview")
                    .block(Block::Paragraph {
                        text: "We surveyed 22 participants.".into(),
                    })
                    .block(Block::BarChart(BarChartData {
                        title: "Overall Satisfaction Ratings".into(),
                        data: vec![BarValue::new("1", 3), BarValue::new("2", 4)],
                    })),
            )
            .section(
                Section::new("User Feedback")
                    .block(Block::PieChart(PieChartData {
                        title: "Distribution of Key Challenges".into(),
                        data: vec![
                            CategoryCount::new("Technical Issues & Performance", 11),
                            CategoryCount::new("Content Findability", 9),
                        ],
                        zero_total: ZeroTotalPolicy::Reject,
                    }))
                    .block(Block::Quote(Quote {
                        text: "Pages take forever to load.".into(),
                        author: "Marketing Specialist".into(),
                    })),
            )
            .section(
                Section::new("Next Steps")
                    .block(Block::Timeline(
                        TimelinePlan::new(6)
                            .start_month("2024-07")
                            .phase(Phase::new("Phase 1").subtitle("Foundation").span(0.0, 3.0))
                            .phase(Phase::new("Phase 3").subtitle("Advanced").span(3.0, 3.0)),
                    ))
                    .block(Block::Heading {
                        text: "Phase 1: Foundation Improvements".into(),
                    })
                    .block(Block::NextStep(NextStep {
                        icon: Icon::BookOpen,
                        title: "Training and Learning Resources".into(),
                        description: "Develop training materials.\nRun workshops.".into(),
                        impact: "Increased user confidence.".into(),
                    }))
                    .block(Block::Actions {
                        heading: "1. Technical Improvements".into(),
                        items: vec!["Enable analytics".into(), "Implement A/B testing".into()],
                    }),
            )
    }

    #[test]
    fn html_report_renderer_creation() {
        let renderer = HtmlReportRenderer::new();
        assert_eq!(renderer.max_width, 960);
        assert!(renderer.interactive);
    }

    #[test]
    fn html_report_produces_valid_html() {
        let html = HtmlReportRenderer::new().render(&create_test_report()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("</html>"));
        assert!(html.contains("<title>CMS Survey Insights</title>"));
        for title in ["Overview", "User Feedback", "Next Steps"] {
            assert!(html.contains(&format!("<h2 class=\"section-title\">{}</h2>", title)));
        }
    }

    #[test]
    fn html_report_keeps_section_order() {
        let html = HtmlReportRenderer::new().render(&create_test_report()).unwrap();
        let overview = html.find("Overview").unwrap();
        let feedback = html.find("User Feedback").unwrap();
        let next = html.find("Next Steps").unwrap();
        assert!(overview < feedback && feedback < next);
    }

    #[test]
    fn html_report_includes_charts() {
        let html = HtmlReportRenderer::new().render(&create_test_report()).unwrap();

        assert!(html.contains("class=\"bar-chart\""));
        assert!(html.contains("class=\"pie-chart\""));
        assert!(html.contains("55% (11 mentions)"));
        assert!(html.contains("45% (9 mentions)"));
        assert!(html.contains("Technical Issues &amp; Performance"));
    }

    #[test]
    fn html_report_includes_timeline() {
        let html = HtmlReportRenderer::new().render(&create_test_report()).unwrap();

        assert!(html.contains("class=\"gantt-chart\""));
        assert!(html.contains("margin-left: 50%; width: 50%"));
        assert!(html.contains(">Jul</div>"));
        assert!(html.contains(".gantt-bar:hover .gantt-tooltip"));
    }

    #[test]
    fn html_report_includes_content_blocks() {
        let html = HtmlReportRenderer::new().render(&create_test_report()).unwrap();

        assert!(html.contains("<p class=\"quote-text\">\"Pages take forever to load.\"</p>"));
        assert!(html.contains("- Marketing Specialist"));
        assert!(html.contains("<h4>Training and Learning Resources</h4>"));
        assert!(html.contains("Develop training materials.<br>\nRun workshops."));
        assert!(html.contains("<strong>Impact:</strong> Increased user confidence."));
        assert!(html.contains("<li>Implement A/B testing</li>"));
        assert!(html.contains("<h3>Phase 1: Foundation Improvements</h3>"));
    }

    #[test]
    fn html_report_interactive_script() {
        let html = HtmlReportRenderer::new().render(&create_test_report()).unwrap();
        assert!(html.contains("addEventListener('mouseenter'"));

        let html = HtmlReportRenderer::new()
            .static_page()
            .render(&create_test_report())
            .unwrap();
        assert!(!html.contains("addEventListener"));
        assert!(html.contains(".gantt-bar:focus .gantt-tooltip"));
    }

    #[test]
    fn html_report_escapes_title() {
        let mut report = create_test_report();
        report.title = "<Survey>".into();
        let html = HtmlReportRenderer::new().render(&report).unwrap();
        assert!(html.contains("<title>&lt;Survey&gt;</title>"));
    }

    #[test]
    fn html_report_rejects_markup_in_theme_colors() {
        let mut report = create_test_report();
        report.theme.background_color = "#fff } </style><script>alert(1)</script>".into();
        let result = HtmlReportRenderer::new().render(&report);
        assert!(matches!(
            result,
            Err(RenderError::Chart(ChartError::InvalidColor(_)))
        ));
    }

    #[test]
    fn html_report_empty_fails() {
        let result = HtmlReportRenderer::new().render(&Report::new("Empty"));
        assert!(result.is_err());
    }

    #[test]
    fn html_report_surfaces_chart_errors() {
        let report = Report::new("Broken").section(Section::new("s").block(Block::PieChart(
            PieChartData {
                title: "none".into(),
                data: vec![CategoryCount::new("a", 0)],
                zero_total: ZeroTotalPolicy::Reject,
            },
        )));
        let result = HtmlReportRenderer::new().render(&report);
        assert!(matches!(
            result,
            Err(RenderError::Chart(ChartError::ZeroTotal))
        ));
    }

    #[test]
    fn html_report_is_deterministic() {
        let renderer = HtmlReportRenderer::new();
        let report = create_test_report();
        assert_eq!(
            renderer.render(&report).unwrap(),
            renderer.render(&report).unwrap()
        );
    }
}
