//! MermaidJS chart renderer
//!
//! Emits every chart of a report as a fenced Mermaid block under a Markdown
//! heading, suitable for GitHub, wikis and other docs platforms.
//!
//! ## Example Output
//!
//! ~~~text
//! ### Distribution of Key Challenges
//!
//! ```mermaid
//! pie showData
//!     title Distribution of Key Challenges
//!     "Technical Issues & Performance" : 11
//!     "Content Findability" : 9
//! ```
//!
//! ### Implementation Timeline
//!
//! ```mermaid
//! gantt
//!     title Implementation Timeline
//!     dateFormat X
//!     axisFormat %s
//!
//!     section Phase 1
//!     Foundation Improvements :p1, 0, 3
//! ```
//! ~~~
//!
//! Timeline units have no calendar meaning, so gantt blocks use Mermaid's
//! numeric `X` date format with offsets and end points in span units.

use uxreport_chart::{layout_plan, BarChartLayout, PieLayout};
use uxreport_core::{
    Block, CategoryCount, PieChartData, RenderError, Renderer, Report, TimelinePlan,
    ZeroTotalPolicy,
};

/// MermaidJS chart renderer
#[derive(Clone, Debug)]
pub struct MermaidRenderer {
    /// Show raw counts next to pie legend entries (`showData`)
    pub show_data: bool,
    /// Wrap each chart in a ```` ```mermaid ```` fence with a heading
    pub fenced: bool,
    /// Also export bar charts as pie charts of the same values
    pub bars_as_pies: bool,
}

impl Default for MermaidRenderer {
    fn default() -> Self {
        Self {
            show_data: true,
            fenced: true,
            bars_as_pies: false,
        }
    }
}

impl MermaidRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide raw counts
    pub fn no_data(mut self) -> Self {
        self.show_data = false;
        self
    }

    /// Emit bare Mermaid source without Markdown fences or headings
    pub fn bare(mut self) -> Self {
        self.fenced = false;
        self
    }

    /// Include bar charts, rendered as pies
    pub fn bars_as_pies(mut self) -> Self {
        self.bars_as_pies = true;
        self
    }

    /// Sanitize text for Mermaid (colons and quotes break the grammar)
    fn sanitize_name(name: &str) -> String {
        name.replace(':', "-")
            .replace(';', "-")
            .replace('"', "'")
            .replace('#', "")
            .replace('\n', " ")
            .replace('\r', "")
    }

    /// Render a pie chart block to Mermaid source
    pub fn pie_chart(&self, chart: &PieChartData) -> Result<String, RenderError> {
        // Validates the data the same way the HTML page does
        PieLayout::new()
            .zero_total(chart.zero_total)
            .segments(&chart.data)?;

        let mut output = String::from(if self.show_data { "pie showData\n" } else { "pie\n" });
        output.push_str(&format!("    title {}\n", Self::sanitize_name(&chart.title)));
        for entry in &chart.data {
            output.push_str(&format!(
                "    \"{}\" : {}\n",
                Self::sanitize_name(&entry.label),
                entry.count
            ));
        }
        Ok(output)
    }

    /// Render a timeline block to Mermaid gantt source
    pub fn gantt(&self, plan: &TimelinePlan) -> Result<String, RenderError> {
        layout_plan(plan)?;

        let mut output = String::from("gantt\n");
        if !plan.title.is_empty() {
            output.push_str(&format!("    title {}\n", Self::sanitize_name(&plan.title)));
        }
        output.push_str("    dateFormat X\n");
        output.push_str("    axisFormat %s\n");

        for (i, phase) in plan.phases.iter().enumerate() {
            output.push('\n');
            output.push_str(&format!("    section {}\n", Self::sanitize_name(&phase.name)));
            let label = if phase.subtitle.is_empty() {
                &phase.name
            } else {
                &phase.subtitle
            };
            output.push_str(&format!(
                "    {} :p{}, {}, {}\n",
                Self::sanitize_name(label),
                i + 1,
                phase.start,
                phase.end()
            ));
        }
        Ok(output)
    }

    fn push_chart(&self, output: &mut String, title: &str, source: &str) {
        if !output.is_empty() {
            output.push('\n');
        }
        if self.fenced {
            output.push_str(&format!("### {}\n\n```mermaid\n{}```\n", title, source));
        } else {
            output.push_str(source);
        }
    }
}

impl Renderer for MermaidRenderer {
    type Output = String;

    fn render(&self, report: &Report) -> Result<String, RenderError> {
        let mut output = String::new();

        for block in report.blocks() {
            match block {
                Block::PieChart(chart) => {
                    let source = self.pie_chart(chart)?;
                    self.push_chart(&mut output, &chart.title, &source);
                }
                Block::Timeline(plan) => {
                    let source = self.gantt(plan)?;
                    let title = if plan.title.is_empty() {
                        "Timeline"
                    } else {
                        plan.title.as_str()
                    };
                    self.push_chart(&mut output, title, &source);
                }
                Block::BarChart(chart) if self.bars_as_pies => {
                    BarChartLayout::new().layout(chart)?;
                    let as_pie = PieChartData {
                        title: chart.title.clone(),
                        data: chart
                            .data
                            .iter()
                            .map(|b| CategoryCount::new(b.label.clone(), b.value))
                            .collect(),
                        zero_total: ZeroTotalPolicy::ShowZero,
                    };
                    let source = self.pie_chart(&as_pie)?;
                    self.push_chart(&mut output, &chart.title, &source);
                }
                _ => {}
            }
        }

        if output.is_empty() {
            return Err(RenderError::InvalidData("No charts to render".into()));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uxreport_core::{BarChartData, BarValue, Phase, Section};

    fn challenges() -> PieChartData {
        PieChartData {
            title: "Distribution of Key Challenges".into(),
            data: vec![
                CategoryCount::new("Technical Issues & Performance", 11),
                CategoryCount::new("Content Findability", 9),
            ],
            zero_total: ZeroTotalPolicy::Reject,
        }
    }

    fn plan() -> TimelinePlan {
        TimelinePlan::new(6)
            .title("Implementation Timeline")
            .phase(
                Phase::new("Phase 1")
                    .subtitle("Foundation Improvements")
                    .span(0.0, 3.0),
            )
            .phase(Phase::new("Phase 3").subtitle("Advanced Features").span(3.0, 3.0))
    }

    #[test]
    fn pie_chart_source() {
        let source = MermaidRenderer::new().pie_chart(&challenges()).unwrap();
        assert_eq!(
            source,
            "pie showData\n    title Distribution of Key Challenges\n    \"Technical Issues & Performance\" : 11\n    \"Content Findability\" : 9\n"
        );
    }

    #[test]
    fn pie_chart_without_data() {
        let source = MermaidRenderer::new().no_data().pie_chart(&challenges()).unwrap();
        assert!(source.starts_with("pie\n"));
    }

    #[test]
    fn gantt_source() {
        let source = MermaidRenderer::new().gantt(&plan()).unwrap();
        assert_eq!(
            source,
            "gantt\n    title Implementation Timeline\n    dateFormat X\n    axisFormat %s\n\n    section Phase 1\n    Foundation Improvements :p1, 0, 3\n\n    section Phase 3\n    Advanced Features :p2, 3, 6\n"
        );
    }

    #[test]
    fn gantt_rejects_overflowing_phase() {
        let bad = plan().phase(Phase::new("Phase 4").span(5.0, 5.0));
        assert!(MermaidRenderer::new().gantt(&bad).is_err());
    }

    #[test]
    fn sanitize_name_strips_grammar_characters() {
        assert_eq!(
            MermaidRenderer::sanitize_name("Phase 1: \"Core\" #1"),
            "Phase 1- 'Core' 1"
        );
    }

    #[test]
    fn report_renders_fenced_blocks_in_order() {
        let report = Report::new("r").section(
            Section::new("s")
                .block(Block::PieChart(challenges()))
                .block(Block::Timeline(plan())),
        );
        let output = MermaidRenderer::new().render(&report).unwrap();

        assert!(output.starts_with("### Distribution of Key Challenges\n\n```mermaid\npie showData\n"));
        assert_eq!(output.matches("```mermaid").count(), 2);
        assert!(output.find("pie showData").unwrap() < output.find("gantt").unwrap());
    }

    #[test]
    fn bare_output_has_no_fences() {
        let report = Report::new("r").section(Section::new("s").block(Block::PieChart(challenges())));
        let output = MermaidRenderer::new().bare().render(&report).unwrap();
        assert!(!output.contains("```"));
        assert!(output.starts_with("pie showData"));
    }

    #[test]
    fn bar_charts_skipped_unless_requested() {
        let bars = BarChartData {
            title: "Ratings".into(),
            data: vec![BarValue::new("1", 3), BarValue::new("2", 4)],
        };
        let report = Report::new("r").section(Section::new("s").block(Block::BarChart(bars)));

        assert!(MermaidRenderer::new().render(&report).is_err());

        let output = MermaidRenderer::new().bars_as_pies().render(&report).unwrap();
        assert!(output.contains("\"1\" : 3"));
    }
}
