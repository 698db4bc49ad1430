#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod format;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod parser;
pub mod render;
pub mod text_metrics;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig, RenderConfig, load_config};
pub use format::{Precision, format_years_ago};
pub use ir::{Event, EventSource, SourceField, Timeline, TimelineSource};
pub use layout::{TimelineLayout, compute_layout};
pub use parser::{DateParseError, TimeUnit, build_timeline, parse_timeline, parse_years_ago};
pub use render::render_svg;
pub use theme::Theme;

/// Theme and layout settings for a one-call render.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub theme: Theme,
    pub layout: LayoutConfig,
}

impl RenderOptions {
    pub fn classic() -> Self {
        Self::default()
    }

    pub fn modern() -> Self {
        Self {
            theme: Theme::modern(),
            layout: LayoutConfig::default(),
        }
    }
}

/// Parse a timeline document and render it straight to SVG.
pub fn render_with_options(input: &str, options: RenderOptions) -> anyhow::Result<String> {
    let timeline = parse_timeline(input)?;
    let layout = compute_layout(&timeline, &options.theme, &options.layout);
    Ok(render_svg(&layout, &options.theme, &options.layout))
}
