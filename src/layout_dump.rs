use crate::ir::Timeline;
use crate::layout::{Connector, TimelineLayout};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub min_decade_exponent: i32,
    pub max_decade_exponent: i32,
    pub gridlines: Vec<GridLineDump>,
    pub events: Vec<EventDump>,
    pub skipped: Vec<SkippedDump>,
}

#[derive(Debug, Serialize)]
pub struct GridLineDump {
    pub years_ago: f64,
    pub y: f32,
    pub major: bool,
    pub label: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EventDump {
    pub title: String,
    pub years_ago: f64,
    pub label: String,
    pub axis_y: f32,
    pub label_y: f32,
    pub displaced: bool,
    pub connector: Vec<[f32; 2]>,
}

#[derive(Debug, Serialize)]
pub struct SkippedDump {
    pub title: String,
    pub date: Option<String>,
    pub reason: String,
}

impl LayoutDump {
    pub fn from_layout(layout: &TimelineLayout, timeline: &Timeline) -> Self {
        let gridlines = layout
            .gridlines
            .iter()
            .map(|line| GridLineDump {
                years_ago: line.years_ago,
                y: line.y,
                major: line.is_major,
                label: line.label.clone(),
            })
            .collect();

        let events = layout
            .events
            .iter()
            .map(|event| EventDump {
                title: event.title.clone(),
                years_ago: event.years_ago,
                label: event.label.text.clone(),
                axis_y: event.axis_y,
                label_y: event.label_y,
                displaced: matches!(event.connector, Connector::Elbow(_)),
                connector: event.connector.points().iter().map(|(x, y)| [*x, *y]).collect(),
            })
            .collect();

        let skipped = timeline
            .skipped
            .iter()
            .map(|skip| SkippedDump {
                title: skip.title.clone(),
                date: skip.date.clone(),
                reason: skip.error.to_string(),
            })
            .collect();

        LayoutDump {
            title: layout.title.clone(),
            width: layout.width,
            height: layout.height,
            min_decade_exponent: layout.scale.min_decade_exponent(),
            max_decade_exponent: layout.scale.max_decade_exponent(),
            gridlines,
            events,
            skipped,
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &TimelineLayout, timeline: &Timeline) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout, timeline);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout::compute_layout;
    use crate::parser::parse_timeline;
    use crate::theme::Theme;

    #[test]
    fn dump_records_events_and_skips() {
        let timeline = parse_timeline(
            r#"{"title":"T","events":[
                {"title":"A","date":"10 kya"},
                {"title":"B","date":"10 kya"},
                {"title":"C","date":"banana"}
            ]}"#,
        )
        .unwrap();
        let config = LayoutConfig {
            fast_text_metrics: true,
            ..LayoutConfig::default()
        };
        let layout = compute_layout(&timeline, &Theme::classic(), &config);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        write_layout_dump(&path, &layout, &timeline).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(value["events"].as_array().unwrap().len(), 2);
        assert_eq!(value["events"][0]["displaced"], false);
        assert_eq!(value["events"][1]["displaced"], true);
        assert_eq!(value["events"][1]["connector"].as_array().unwrap().len(), 4);
        assert_eq!(value["skipped"][0]["title"], "C");
        assert_eq!(value["gridlines"].as_array().unwrap().len(), 9 * 5);
        assert_eq!(value["max_decade_exponent"], 4);
    }
}
