mod grid;
mod placement;
mod scale;
mod text;
pub(crate) mod types;

pub use grid::{GridLabels, generate_gridlines};
pub use placement::{declutter, place_events};
pub use scale::LogScale;
pub use types::*;

use crate::config::LayoutConfig;
use crate::ir::Timeline;
use crate::theme::Theme;
use log::debug;

pub fn compute_layout(timeline: &Timeline, theme: &Theme, config: &LayoutConfig) -> TimelineLayout {
    let scale = LogScale::new(config, timeline.max_years_ago());
    let labels = if config.label_all_gridlines {
        GridLabels::All
    } else {
        GridLabels::Major
    };
    let gridlines = generate_gridlines(&scale, labels);
    let events = place_events(&timeline.events, &scale, theme, config);

    let widest_label = events
        .iter()
        .map(|event| event.label.width)
        .fold(0.0, f32::max);
    let width = config
        .page_width
        .max(config.label_x() + config.label_gap + widest_label + config.margin);

    // Pushed-down labels can run past the last decade
    let lowest_label = events
        .last()
        .map(|event| event.label_y + theme.font_size + config.margin)
        .unwrap_or(0.0);
    let height = scale.canvas_height().max(lowest_label);

    let axis_x = config.axis_x();
    let grid_x2 = if config.full_width_grid {
        width - config.margin
    } else {
        config.margin + config.grid_width
    };

    debug!(
        "Layout `{}`: {} gridline(s) over decades {}..={}, {} event(s), {width:.0}x{height:.0}",
        timeline.title,
        gridlines.len(),
        scale.min_decade_exponent(),
        scale.max_decade_exponent(),
        events.len(),
    );

    TimelineLayout {
        title: timeline.title.clone(),
        width,
        height,
        axis_x,
        grid_x1: axis_x,
        grid_x2,
        scale,
        gridlines,
        events,
    }
}
