use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    /// Event label size
    pub font_size: f32,
    /// Axis tick label size
    pub grid_label_font_size: f32,
    pub text_color: String,
    pub grid_label_color: String,
    pub grid_color: String,
    pub connector_color: String,
    pub marker_color: String,
    pub background: String,
}

impl Theme {
    /// Black-on-white print style with light grey rules.
    pub fn classic() -> Self {
        Self {
            font_family: "Arial, Helvetica, sans-serif".to_string(),
            font_size: 13.0,
            grid_label_font_size: 13.0,
            text_color: "#000000".to_string(),
            grid_label_color: "#000000".to_string(),
            grid_color: "#E6E6E6".to_string(),
            connector_color: "#000000".to_string(),
            marker_color: "#000000".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }

    pub fn modern() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 13.0,
            grid_label_font_size: 12.0,
            text_color: "#1C2430".to_string(),
            grid_label_color: "#52606D".to_string(),
            grid_color: "#D7E0F0".to_string(),
            connector_color: "#7A8AA6".to_string(),
            marker_color: "#1C2430".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
