//! HTML timeline track renderer
//!
//! Draws one row per phase. Each bar is positioned with `margin-left` and
//! sized with `width`, both percentages of the track taken from the layout
//! fractions. Hovering or focusing a bar reveals its detail panel (subtitle
//! and description). Panels open independently; opening one never closes
//! another.

use uxreport_chart::layout_plan;
use uxreport_core::{RenderError, TimelinePlan};

use crate::{css_percent, html_escape};

/// Visibility of one phase's detail panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailState {
    /// Panel hidden
    #[default]
    Collapsed,
    /// Panel shown while the bar is hovered or focused
    Expanded,
}

impl DetailState {
    pub fn as_str(self) -> &'static str {
        match self {
            DetailState::Collapsed => "collapsed",
            DetailState::Expanded => "expanded",
        }
    }
}

/// Per-phase detail panel states, owned by the presentation layer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailStates {
    states: Vec<DetailState>,
}

impl DetailStates {
    /// All panels collapsed
    pub fn new(phase_count: usize) -> Self {
        Self {
            states: vec![DetailState::Collapsed; phase_count],
        }
    }

    /// Pointer entered or focus moved onto a bar
    pub fn enter(&mut self, index: usize) {
        if let Some(state) = self.states.get_mut(index) {
            *state = DetailState::Expanded;
        }
    }

    /// Pointer left or focus moved off a bar
    pub fn leave(&mut self, index: usize) {
        if let Some(state) = self.states.get_mut(index) {
            *state = DetailState::Collapsed;
        }
    }

    pub fn state(&self, index: usize) -> Option<DetailState> {
        self.states.get(index).copied()
    }

    pub fn expanded_count(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == DetailState::Expanded)
            .count()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// HTML timeline renderer configuration
#[derive(Clone, Debug)]
pub struct HtmlTimelineRenderer {
    /// Bar fill color
    pub bar_color: String,
    /// Default heading when the plan has no title
    pub default_title: String,
}

impl Default for HtmlTimelineRenderer {
    fn default() -> Self {
        Self {
            bar_color: "#0088FE".into(),
            default_title: "Implementation Timeline".into(),
        }
    }
}

impl HtmlTimelineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure bar color
    pub fn bar_color(mut self, color: impl Into<String>) -> Self {
        self.bar_color = color.into();
        self
    }

    /// Render a plan to an HTML fragment
    pub fn render_plan(&self, plan: &TimelinePlan) -> Result<String, RenderError> {
        let (config, layouts) = layout_plan(plan)?;
        let states = DetailStates::new(layouts.len());
        let title = if plan.title.is_empty() {
            &self.default_title
        } else {
            &plan.title
        };

        let mut html = String::new();
        html.push_str(&format!(
            "<div class=\"gantt-chart\" data-span=\"{}\">\n",
            config.span()
        ));
        html.push_str(&format!("  <h3>{}</h3>\n", html_escape(title)));

        html.push_str("  <div class=\"gantt-timeline\">\n");
        for column in config.columns() {
            html.push_str(&format!(
                "    <div class=\"gantt-month\" style=\"width: {}\">{}</div>\n",
                css_percent(config.column_fraction()),
                html_escape(column)
            ));
        }
        html.push_str("  </div>\n");

        for (index, layout) in layouts.iter().enumerate() {
            let state = states.state(index).unwrap_or_default();
            html.push_str(&format!(
                r#"  <div class="gantt-bar-container" data-phase="{index}">
    <div class="gantt-bar-label">{name}</div>
    <div class="gantt-bar-timeline">
      <div class="gantt-bar" tabindex="0" data-detail="{state}" style="margin-left: {left}; width: {width}; background: {color}">
        <div class="gantt-tooltip">
          <div class="gantt-tooltip-title">{subtitle}</div>
          {description}
        </div>
      </div>
    </div>
  </div>
"#,
                index = index,
                name = html_escape(&layout.name),
                state = state.as_str(),
                left = css_percent(layout.left_fraction),
                width = css_percent(layout.width_fraction),
                color = html_escape(&self.bar_color),
                subtitle = html_escape(&layout.subtitle),
                description = html_escape(&layout.description),
            ));
        }

        html.push_str("</div>\n");
        Ok(html)
    }

    /// CSS for the timeline; detail panels show on hover, focus or an expanded state
    pub fn css(&self) -> &'static str {
        r#"        .gantt-chart { margin: 24px 0; }
        .gantt-timeline {
            display: flex;
            margin-left: 120px;
            border-bottom: 1px solid rgba(128,128,128,0.3);
        }
        .gantt-month {
            text-align: center;
            font-size: 13px;
            padding: 4px 0;
        }
        .gantt-bar-container {
            display: flex;
            align-items: center;
            margin: 8px 0;
        }
        .gantt-bar-label {
            width: 120px;
            flex-shrink: 0;
            font-weight: 600;
        }
        .gantt-bar-timeline {
            flex-grow: 1;
            position: relative;
            height: 28px;
            background: rgba(128,128,128,0.08);
            border-radius: 4px;
        }
        .gantt-bar {
            position: relative;
            height: 100%;
            border-radius: 4px;
            cursor: pointer;
            outline: none;
        }
        .gantt-tooltip {
            display: none;
            position: absolute;
            top: 32px;
            left: 0;
            z-index: 10;
            width: 260px;
            padding: 10px;
            border-radius: 6px;
            background: rgba(0,0,0,0.9);
            color: #fff;
            font-size: 13px;
        }
        .gantt-tooltip-title {
            font-weight: 600;
            margin-bottom: 6px;
        }
        .gantt-bar:hover .gantt-tooltip,
        .gantt-bar:focus .gantt-tooltip,
        .gantt-bar[data-detail="expanded"] .gantt-tooltip {
            display: block;
        }"#
    }

    /// Script keeping `data-detail` in sync with pointer and focus, per bar
    pub fn js(&self) -> &'static str {
        r#"        document.querySelectorAll('.gantt-bar').forEach(bar => {
            const expand = () => bar.setAttribute('data-detail', 'expanded');
            const collapse = () => bar.setAttribute('data-detail', 'collapsed');
            bar.addEventListener('mouseenter', expand);
            bar.addEventListener('focus', expand);
            bar.addEventListener('mouseleave', collapse);
            bar.addEventListener('blur', collapse);
        });"#
    }
}
