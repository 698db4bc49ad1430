use crate::format::{Precision, format_years_ago};

use super::scale::LogScale;
use super::types::GridLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridLabels {
    /// Only the power-of-ten line of each decade is labelled
    #[default]
    Major,
    All,
}

/// Log ruler over every drawn decade: nine lines per decade at
/// `1..=9 × 10^e`, the first of which is major.
pub fn generate_gridlines(scale: &LogScale, labels: GridLabels) -> Vec<GridLine> {
    let min = scale.min_decade_exponent();
    let max = scale.max_decade_exponent();
    let mut lines = Vec::with_capacity(scale.decade_count() * 9);
    for exponent in min..=max {
        let step_size = 10f64.powi(exponent);
        for step in 1..=9u8 {
            let years_ago = f64::from(step) * step_size;
            let is_major = step == 1;
            let label = (is_major || labels == GridLabels::All)
                .then(|| format_years_ago(years_ago, Precision::Integer));
            lines.push(GridLine {
                years_ago,
                y: scale.position(years_ago),
                is_major,
                label,
            });
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;

    #[test]
    fn nine_lines_per_decade() {
        let scale = LogScale::new(&LayoutConfig::default(), Some(3.5e6));
        let lines = generate_gridlines(&scale, GridLabels::Major);
        assert_eq!(lines.len(), 9 * 7);
        assert_eq!(lines.iter().filter(|line| line.is_major).count(), 7);
    }

    #[test]
    fn majors_are_powers_of_ten_and_labelled() {
        let scale = LogScale::new(&LayoutConfig::default(), Some(2e4));
        let lines = generate_gridlines(&scale, GridLabels::Major);
        let majors: Vec<&GridLine> = lines.iter().filter(|line| line.is_major).collect();
        let years: Vec<f64> = majors.iter().map(|line| line.years_ago).collect();
        assert_eq!(years, vec![1.0, 10.0, 100.0, 1e3, 1e4]);
        let labels: Vec<&str> = majors
            .iter()
            .map(|line| line.label.as_deref().unwrap())
            .collect();
        assert_eq!(labels, vec!["Now", "10 ya", "100 ya", "1 kya", "10 kya"]);
        assert!(lines.iter().filter(|line| !line.is_major).all(|line| line.label.is_none()));
    }

    #[test]
    fn all_lines_labelled_on_request() {
        let scale = LogScale::new(&LayoutConfig::default(), Some(50.0));
        let lines = generate_gridlines(&scale, GridLabels::All);
        assert!(lines.iter().all(|line| line.label.is_some()));
        assert_eq!(lines[1].label.as_deref(), Some("2 ya"));
    }

    #[test]
    fn gridlines_descend_the_page() {
        let scale = LogScale::new(&LayoutConfig::default(), Some(1e9));
        let lines = generate_gridlines(&scale, GridLabels::Major);
        for pair in lines.windows(2) {
            assert!(pair[0].y < pair[1].y);
        }
    }

    #[test]
    fn empty_timeline_draws_a_single_decade() {
        let scale = LogScale::new(&LayoutConfig::default(), None);
        let lines = generate_gridlines(&scale, GridLabels::Major);
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn nothing_below_the_minimum_decade() {
        let config = LayoutConfig {
            min_decade_exponent: 2,
            ..LayoutConfig::default()
        };
        let scale = LogScale::new(&config, Some(5e4));
        let lines = generate_gridlines(&scale, GridLabels::Major);
        assert_eq!(lines.len(), 9 * 3);
        assert!(lines.iter().all(|line| line.years_ago >= 100.0));
    }
}
