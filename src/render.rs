use crate::config::LayoutConfig;
use crate::layout::{Connector, TimelineLayout};
use crate::theme::Theme;
use anyhow::Result;
use std::fmt::Write as _;
use std::path::Path;

pub fn render_svg(layout: &TimelineLayout, theme: &Theme, config: &LayoutConfig) -> String {
    let mut svg = String::new();
    let width = layout.width;
    let height = layout.height;

    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.2}\" height=\"{height:.2}\" viewBox=\"0 0 {width:.2} {height:.2}\">",
    );
    let _ = write!(svg, "<title>{}</title>", escape_xml(&layout.title));
    let _ = write!(
        svg,
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    );

    svg.push_str("<g class=\"grid\">");
    for line in &layout.gridlines {
        let stroke_width = if line.is_major {
            config.major_line_width
        } else {
            config.minor_line_width
        };
        let _ = write!(
            svg,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{stroke_width}\"/>",
            layout.grid_x1, line.y, layout.grid_x2, line.y, theme.grid_color
        );
        if let Some(label) = line.label.as_deref() {
            svg.push_str(&text_svg(
                config.margin,
                line.y,
                label,
                theme.grid_label_font_size,
                &theme.grid_label_color,
                &theme.font_family,
            ));
        }
    }
    svg.push_str("</g>");

    svg.push_str("<g class=\"events\">");
    for event in &layout.events {
        let half = event.marker.size / 2.0;
        let _ = write!(
            svg,
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>",
            event.marker.x - half,
            event.marker.y - half,
            event.marker.size,
            event.marker.size,
            theme.marker_color
        );
        let _ = write!(
            svg,
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            connector_path(&event.connector),
            theme.connector_color,
            config.connector_line_width
        );
        svg.push_str(&text_svg(
            event.label_x,
            event.label_y,
            &event.label.text,
            theme.font_size,
            &theme.text_color,
            &theme.font_family,
        ));
    }
    svg.push_str("</g>");

    svg.push_str("</svg>");
    svg
}

fn connector_path(connector: &Connector) -> String {
    let points = connector.points();
    let mut d = String::new();
    for (idx, (x, y)) in points.iter().enumerate() {
        let command = if idx == 0 { "M" } else { " L" };
        let _ = write!(d, "{command} {x:.2} {y:.2}");
    }
    d
}

fn text_svg(x: f32, y: f32, text: &str, font_size: f32, fill: &str, font_family: &str) -> String {
    format!(
        "<text x=\"{x:.2}\" y=\"{y:.2}\" dominant-baseline=\"middle\" font-family=\"{}\" font-size=\"{font_size}\" fill=\"{fill}\">{}</text>",
        escape_xml(font_family),
        escape_xml(text)
    )
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(
    svg: &str,
    output: &Path,
    render_cfg: &crate::config::RenderConfig,
    theme: &Theme,
) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = theme
        .font_family
        .split(',')
        .next()
        .map(|family| family.trim().trim_matches('"').to_string())
        .unwrap_or_else(|| "sans-serif".to_string());
    if let Some(size) = usvg::Size::from_wh(render_cfg.width, render_cfg.height) {
        opt.default_size = size;
    }
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

#[cfg(not(feature = "png"))]
pub fn write_output_png(
    _svg: &str,
    _output: &Path,
    _render_cfg: &crate::config::RenderConfig,
    _theme: &Theme,
) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
