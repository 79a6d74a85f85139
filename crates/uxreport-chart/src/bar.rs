//! Bar chart layout
//!
//! Bar heights are fractions of the tallest bar. A chart whose values are
//! all zero still lays out every bar, at zero height.

use uxreport_core::{BarChartData, BarLayout, BarValue, ChartError};

/// Maximum number of labeled ticks on the value axis
const MAX_TICKS: u64 = 5;

/// Bar height calculator
#[derive(Clone, Copy, Debug, Default)]
pub struct BarChartLayout;

impl BarChartLayout {
    pub fn new() -> Self {
        Self
    }

    /// Lay out every bar of a chart in input order
    pub fn layout(&self, chart: &BarChartData) -> Result<Vec<BarLayout>, ChartError> {
        if chart.data.is_empty() {
            return Err(ChartError::Empty(chart.title.clone()));
        }
        let max = max_value(&chart.data);

        Ok(chart
            .data
            .iter()
            .map(|bar| BarLayout {
                label: bar.label.clone(),
                value: bar.value,
                height_fraction: if max == 0 {
                    0.0
                } else {
                    bar.value as f64 / max as f64
                },
            })
            .collect())
    }
}

/// Largest value in the chart, 0 for an empty chart
pub fn max_value(data: &[BarValue]) -> u64 {
    data.iter().map(|b| b.value).max().unwrap_or(0)
}

/// Evenly stepped axis values from 0 up to at most `max`
pub fn axis_ticks(max: u64) -> Vec<u64> {
    if max == 0 {
        return vec![0];
    }
    let step = max.div_ceil(MAX_TICKS - 1).max(1);
    (0..=max).step_by(step as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ratings() -> BarChartData {
        BarChartData {
            title: "Overall Satisfaction Ratings".into(),
            data: vec![
                BarValue::new("1 (Lowest)", 3),
                BarValue::new("2", 4),
                BarValue::new("3", 7),
                BarValue::new("4", 4),
                BarValue::new("5 (Highest)", 0),
            ],
        }
    }

    #[test]
    fn heights_relative_to_tallest_bar() {
        let bars = BarChartLayout::new().layout(&ratings()).unwrap();

        assert_eq!(bars.len(), 5);
        assert_eq!(bars[2].height_fraction, 1.0);
        assert_eq!(bars[1].height_fraction, 4.0 / 7.0);
        assert_eq!(bars[4].height_fraction, 0.0);
        assert_eq!(bars[0].label, "1 (Lowest)");
    }

    #[test]
    fn all_zero_values_give_flat_bars() {
        let chart = BarChartData {
            title: "flat".into(),
            data: vec![BarValue::new("a", 0), BarValue::new("b", 0)],
        };
        let bars = BarChartLayout::new().layout(&chart).unwrap();
        assert!(bars.iter().all(|b| b.height_fraction == 0.0));
    }

    #[test]
    fn empty_chart_rejected() {
        let chart = BarChartData {
            title: "nothing".into(),
            data: vec![],
        };
        assert_eq!(
            BarChartLayout::new().layout(&chart),
            Err(ChartError::Empty("nothing".into()))
        );
    }

    #[test]
    fn ticks_stay_within_max() {
        assert_eq!(axis_ticks(7), vec![0, 2, 4, 6]);
        assert_eq!(axis_ticks(8), vec![0, 2, 4, 6, 8]);
        assert_eq!(axis_ticks(3), vec![0, 1, 2, 3]);
        assert_eq!(axis_ticks(100), vec![0, 25, 50, 75, 100]);
        assert_eq!(axis_ticks(0), vec![0]);
    }
}
