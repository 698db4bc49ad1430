use crate::config::LayoutConfig;
use crate::format::{Precision, format_years_ago};
use crate::ir::Event;
use crate::theme::Theme;

use super::scale::LogScale;
use super::text::measure_label;
use super::types::{Connector, EventPlacement, Marker};

/// Greedy single-pass declutter. `natural` must be non-decreasing; the
/// result is non-decreasing with consecutive entries at least `min_gap`
/// apart. A label is only ever moved down, never up.
pub fn declutter(natural: &[f32], top: f32, min_gap: f32) -> Vec<f32> {
    natural
        .iter()
        .scan(top, |last_label_bottom, &natural_y| {
            let gap = natural_y - *last_label_bottom;
            let label_y = if gap < min_gap {
                *last_label_bottom + min_gap
            } else {
                natural_y
            };
            *last_label_bottom = label_y;
            Some(label_y)
        })
        .collect()
}

/// Place every event of an ascending event list. Each call starts from a
/// fresh cursor at the top margin.
pub fn place_events(
    events: &[Event],
    scale: &LogScale,
    theme: &Theme,
    config: &LayoutConfig,
) -> Vec<EventPlacement> {
    let natural: Vec<f32> = events
        .iter()
        .map(|event| scale.position(event.years_ago))
        .collect();
    let label_ys = declutter(&natural, config.margin, config.min_label_gap);

    events
        .iter()
        .zip(natural)
        .zip(label_ys)
        .map(|((event, axis_y), label_y)| {
            let text = format!(
                "{} ({})",
                event.title,
                format_years_ago(event.years_ago, Precision::OneDecimal)
            );
            EventPlacement {
                title: event.title.clone(),
                years_ago: event.years_ago,
                label: measure_label(&text, theme.font_size, theme, config),
                axis_y,
                label_y,
                label_x: config.label_x() + config.label_gap,
                marker: Marker {
                    x: config.axis_x(),
                    y: axis_y,
                    size: config.marker_size,
                },
                connector: connector(axis_y, label_y, config),
            }
        })
        .collect()
}

fn connector(axis_y: f32, label_y: f32, config: &LayoutConfig) -> Connector {
    let start_x = config.axis_x();
    let end_x = config.label_x();
    if label_y == axis_y {
        return Connector::Straight([(start_x, axis_y), (end_x, axis_y)]);
    }
    let flat = config.connector_width * config.elbow_flat_ratio;
    Connector::Elbow([
        (start_x, axis_y),
        (start_x + flat, axis_y),
        (end_x - flat, label_y),
        (end_x, label_y),
    ])
}
