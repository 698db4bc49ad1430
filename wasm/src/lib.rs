use log_timeline::{RenderOptions, render_with_options};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimelineRenderOptions {
    theme: Option<String>,
    font_family: Option<String>,
    font_size: Option<f32>,
    min_label_gap: Option<f32>,
}

fn build_render_options(options: TimelineRenderOptions) -> RenderOptions {
    let mut render_options = if options.theme.as_deref() == Some("modern") {
        RenderOptions::modern()
    } else {
        RenderOptions::classic()
    };

    if let Some(font_family) = options.font_family {
        render_options.theme.font_family = font_family;
    }
    if let Some(font_size) = options.font_size {
        render_options.theme.font_size = font_size;
    }
    if let Some(gap) = options.min_label_gap {
        render_options.layout.min_label_gap = gap;
    }
    // No system fonts to query in the browser
    render_options.layout.fast_text_metrics = true;

    render_options
}

#[wasm_bindgen]
pub fn render_timeline_svg(json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<TimelineRenderOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        TimelineRenderOptions::default()
    };

    let render_options = build_render_options(options);
    render_with_options(json, render_options).map_err(|error| JsValue::from_str(&error.to_string()))
}

#[cfg(test)]
mod tests {
    use log_timeline::render_with_options;

    use crate::{TimelineRenderOptions, build_render_options};

    #[test]
    fn renders_timeline_with_skipped_event() {
        let json = r#"{
            "title": "Human evolution",
            "events": [
                {"title": "Homo sapiens", "date": "300 kya"},
                {"title": "Stone tools", "date": "3.3 mya"},
                {"title": "Broken", "date": "yesterday"}
            ]
        }"#;

        let svg = render_with_options(json, build_render_options(TimelineRenderOptions::default()))
            .expect("timeline should render");

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Homo sapiens (300.0 kya)"));
        assert!(svg.contains("Stone tools (3.3 mya)"));
        assert!(!svg.contains("Broken"));
    }

    #[test]
    fn modern_theme_option() {
        let options: TimelineRenderOptions =
            serde_json::from_str(r#"{"theme":"modern","fontSize":15}"#).unwrap();
        let render_options = build_render_options(options);
        assert_eq!(render_options.theme.font_size, 15.0);
        assert!(render_options.layout.fast_text_metrics);
    }
}
