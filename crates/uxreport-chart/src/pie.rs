//! Proportion chart layout
//!
//! Turns an ordered list of labeled counts into pie segments. Each segment
//! gets its rounded share of the total and a palette color chosen by
//! position. Input order is kept; nothing is sorted or merged.
//!
//! Percentages are rounded per item, so the displayed values can sum to 99
//! or 101. That drift is accepted and not redistributed.

use std::f64::consts::TAU;

use uxreport_core::{CategoryCount, ChartError, DerivedSegment, Palette, ZeroTotalPolicy};

/// Pie segment calculator
#[derive(Clone, Debug, Default)]
pub struct PieLayout {
    /// Colors assigned by segment index
    pub palette: Palette,
    /// Behavior when every count is zero
    pub zero_total: ZeroTotalPolicy,
}

impl PieLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn zero_total(mut self, policy: ZeroTotalPolicy) -> Self {
        self.zero_total = policy;
        self
    }

    /// Compute one segment per input entry, in input order
    pub fn segments(&self, data: &[CategoryCount]) -> Result<Vec<DerivedSegment>, ChartError> {
        let total = total_count(data);
        if total == 0 && self.zero_total == ZeroTotalPolicy::Reject {
            return Err(ChartError::ZeroTotal);
        }

        let mut cumulative = 0u128;
        let segments = data
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let start_angle = angle_at(cumulative, total);
                cumulative += u128::from(entry.count);
                let end_angle = angle_at(cumulative, total);

                DerivedSegment {
                    label: entry.label.clone(),
                    count: entry.count,
                    percentage: percentage(entry.count, total),
                    color_index: self.palette.index_for(index),
                    color: self.palette.color_for(index).to_string(),
                    start_angle,
                    end_angle,
                }
            })
            .collect();

        Ok(segments)
    }
}

/// Sum of all counts, widened so any number of `u64` counts fits
pub fn total_count(data: &[CategoryCount]) -> u128 {
    data.iter().map(|c| u128::from(c.count)).sum()
}

/// `round(100 * count / total)`, halves rounding up; 0 when total is 0
pub fn percentage(count: u64, total: u128) -> u8 {
    if total == 0 {
        return 0;
    }
    let count = u128::from(count).min(total);
    ((200 * count + total) / (2 * total)) as u8
}

/// Sum of displayed percentages, which may differ from 100
pub fn percentage_sum(segments: &[DerivedSegment]) -> u32 {
    segments.iter().map(|s| u32::from(s.percentage)).sum()
}

fn angle_at(cumulative: u128, total: u128) -> f64 {
    if total == 0 {
        0.0
    } else {
        TAU * cumulative as f64 / total as f64
    }
}
