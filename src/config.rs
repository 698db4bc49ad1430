use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Geometry of the timeline page. Distances are in SVG user units (px).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Minimum page width; the page widens to fit long event labels
    pub page_width: f32,
    pub margin: f32,
    /// Vertical distance covered by one power of ten
    pub decade_height: f32,
    /// Room left of the axis for tick labels
    pub grid_label_width: f32,
    /// Gridline length when `full_width_grid` is off
    pub grid_width: f32,
    pub full_width_grid: bool,
    /// Horizontal distance from the axis to the start of an event label
    pub connector_width: f32,
    /// Padding between the end of a connector and the label text
    pub label_gap: f32,
    /// Minimum vertical distance between consecutive event labels
    pub min_label_gap: f32,
    pub marker_size: f32,
    /// Lowest decade that gets gridlines (10^n years ago)
    pub min_decade_exponent: i32,
    pub label_all_gridlines: bool,
    pub major_line_width: f32,
    pub minor_line_width: f32,
    pub connector_line_width: f32,
    /// Share of the connector width taken by each flat end of an elbow
    pub elbow_flat_ratio: f32,
    /// Skip font lookup and estimate text widths from character tables
    pub fast_text_metrics: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: 794.0,
            margin: 38.0,
            decade_height: 189.0,
            grid_label_width: 76.0,
            grid_width: 113.0,
            full_width_grid: true,
            connector_width: 113.0,
            label_gap: 11.0,
            min_label_gap: 19.0,
            marker_size: 2.3,
            min_decade_exponent: 0,
            label_all_gridlines: false,
            major_line_width: 1.9,
            minor_line_width: 0.75,
            connector_line_width: 0.75,
            elbow_flat_ratio: 0.2,
            fast_text_metrics: false,
        }
    }
}

impl LayoutConfig {
    /// x of the time axis
    pub fn axis_x(&self) -> f32 {
        self.margin + self.grid_label_width
    }

    /// x where connectors end and event labels begin
    pub fn label_x(&self) -> f32 {
        self.axis_x() + self.connector_width
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Fallback raster size when the SVG carries none
    pub width: f32,
    pub height: f32,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 794.0,
            height: 1200.0,
            background: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::classic();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            layout: LayoutConfig::default(),
            render,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<NumberOrString>,
    grid_label_font_size: Option<NumberOrString>,
    text_color: Option<String>,
    grid_label_color: Option<String>,
    grid_color: Option<String>,
    connector_color: Option<String>,
    marker_color: Option<String>,
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f32),
    String(String),
}

impl NumberOrString {
    fn as_f32(&self) -> Option<f32> {
        match self {
            NumberOrString::Number(val) => Some(*val),
            NumberOrString::String(val) => val.trim().trim_end_matches("px").parse::<f32>().ok(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    page_width: Option<f32>,
    margin: Option<f32>,
    decade_height: Option<f32>,
    grid_label_width: Option<f32>,
    grid_width: Option<f32>,
    full_width_grid: Option<bool>,
    connector_width: Option<f32>,
    label_gap: Option<f32>,
    min_label_gap: Option<f32>,
    marker_size: Option<f32>,
    min_decade_exponent: Option<i32>,
    label_all_gridlines: Option<bool>,
    major_line_width: Option<f32>,
    minor_line_width: Option<f32>,
    connector_line_width: Option<f32>,
    elbow_flat_ratio: Option<f32>,
    fast_text_metrics: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    layout: Option<LayoutConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        match theme_name {
            "modern" => config.theme = Theme::modern(),
            "classic" | "default" => config.theme = Theme::classic(),
            other => log::warn!("Unknown theme `{other}`, keeping the default"),
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size.as_ref().and_then(NumberOrString::as_f32) {
            config.theme.font_size = v;
        }
        if let Some(v) = vars
            .grid_label_font_size
            .as_ref()
            .and_then(NumberOrString::as_f32)
        {
            config.theme.grid_label_font_size = v;
        }
        if let Some(v) = vars.text_color {
            config.theme.text_color = v;
        }
        if let Some(v) = vars.grid_label_color {
            config.theme.grid_label_color = v;
        }
        if let Some(v) = vars.grid_color {
            config.theme.grid_color = v;
        }
        if let Some(v) = vars.connector_color {
            config.theme.connector_color = v;
        }
        if let Some(v) = vars.marker_color {
            config.theme.marker_color = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
    }

    if let Some(layout) = parsed.layout {
        if let Some(v) = layout.page_width {
            config.layout.page_width = v;
        }
        if let Some(v) = layout.margin {
            config.layout.margin = v;
        }
        if let Some(v) = layout.decade_height {
            config.layout.decade_height = v;
        }
        if let Some(v) = layout.grid_label_width {
            config.layout.grid_label_width = v;
        }
        if let Some(v) = layout.grid_width {
            config.layout.grid_width = v;
        }
        if let Some(v) = layout.full_width_grid {
            config.layout.full_width_grid = v;
        }
        if let Some(v) = layout.connector_width {
            config.layout.connector_width = v;
        }
        if let Some(v) = layout.label_gap {
            config.layout.label_gap = v;
        }
        if let Some(v) = layout.min_label_gap {
            config.layout.min_label_gap = v;
        }
        if let Some(v) = layout.marker_size {
            config.layout.marker_size = v;
        }
        if let Some(v) = layout.min_decade_exponent {
            config.layout.min_decade_exponent = v;
        }
        if let Some(v) = layout.label_all_gridlines {
            config.layout.label_all_gridlines = v;
        }
        if let Some(v) = layout.major_line_width {
            config.layout.major_line_width = v;
        }
        if let Some(v) = layout.minor_line_width {
            config.layout.minor_line_width = v;
        }
        if let Some(v) = layout.connector_line_width {
            config.layout.connector_line_width = v;
        }
        if let Some(v) = layout.elbow_flat_ratio {
            config.layout.elbow_flat_ratio = v.clamp(0.0, 0.5);
        }
        if let Some(v) = layout.fast_text_metrics {
            config.layout.fast_text_metrics = v;
        }
    }

    config.render.background = config.theme.background.clone();

    Ok(config)
}
