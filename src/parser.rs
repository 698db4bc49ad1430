use crate::ir::{
    DEFAULT_EVENT_TITLE, DEFAULT_TIMELINE_TITLE, Event, EventSource, SkippedEvent, SourceField,
    Timeline, TimelineSource,
};
use anyhow::Result;
use log::{info, warn};
use std::str::FromStr;
use thiserror::Error;

/// Reasons a relative date expression cannot be turned into years ago
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DateParseError {
    /// The event carried no date at all
    #[error("missing date")]
    Missing,

    /// The expression is not exactly `<number> <unit>`
    #[error("expected `<number> <unit>`, got `{0}`")]
    Malformed(String),

    #[error("unknown unit `{0}`")]
    UnknownUnit(String),

    #[error("`{0}` is not a number")]
    InvalidNumber(String),

    /// Negative, infinite or NaN magnitudes
    #[error("`{0}` is not a finite, non-negative magnitude")]
    OutOfRange(String),
}

/// Units accepted after the magnitude, e.g. the `mya` in `3.5 mya`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Billion years ago
    Bya,
    /// Million years ago
    Mya,
    /// Thousand years ago
    Kya,
    /// Thousand years ago (alternative spelling)
    Tya,
    /// Hundred years ago
    Hya,
    Ya,
}

impl TimeUnit {
    pub fn exponent(self) -> i32 {
        match self {
            TimeUnit::Bya => 9,
            TimeUnit::Mya => 6,
            TimeUnit::Kya | TimeUnit::Tya => 3,
            TimeUnit::Hya => 2,
            TimeUnit::Ya => 0,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            TimeUnit::Bya => "bya",
            TimeUnit::Mya => "mya",
            TimeUnit::Kya => "kya",
            TimeUnit::Tya => "tya",
            TimeUnit::Hya => "hya",
            TimeUnit::Ya => "ya",
        }
    }
}

impl FromStr for TimeUnit {
    type Err = DateParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_ascii_lowercase().as_str() {
            "bya" => Ok(TimeUnit::Bya),
            "mya" => Ok(TimeUnit::Mya),
            "kya" => Ok(TimeUnit::Kya),
            "tya" => Ok(TimeUnit::Tya),
            "hya" => Ok(TimeUnit::Hya),
            "ya" => Ok(TimeUnit::Ya),
            _ => Err(DateParseError::UnknownUnit(token.to_string())),
        }
    }
}

/// Parse `"<number> <unit>"` (single space, case-insensitive) into years ago.
///
/// `"0 ya"` is a valid parse of `0.0`.
pub fn parse_years_ago(input: &str) -> Result<f64, DateParseError> {
    let lower = input.to_lowercase();
    let tokens: Vec<&str> = lower.split(' ').collect();
    let [number, unit] = tokens.as_slice() else {
        return Err(DateParseError::Malformed(input.to_string()));
    };
    let unit: TimeUnit = unit.parse()?;
    let value: f64 = number
        .parse()
        .map_err(|_| DateParseError::InvalidNumber(number.to_string()))?;
    let years_ago = value * 10f64.powi(unit.exponent());
    if !years_ago.is_finite() || years_ago < 0.0 {
        return Err(DateParseError::OutOfRange(number.to_string()));
    }
    Ok(years_ago)
}

/// Decode a timeline document. Strict JSON is tried first, then JSON5 for
/// hand-written files with comments or trailing commas.
pub fn parse_timeline_document(input: &str) -> Result<TimelineSource> {
    match serde_json::from_str::<TimelineSource>(input) {
        Ok(source) => Ok(source),
        Err(json_err) => json5::from_str::<TimelineSource>(input)
            .map_err(|_| anyhow::anyhow!("Invalid timeline document: {json_err}")),
    }
}

/// Validate a source document into a sorted [`Timeline`]. Events whose date
/// does not parse are logged, recorded in `skipped` and left out.
pub fn build_timeline(source: TimelineSource) -> Timeline {
    let title = source
        .title
        .filter(|title| !title.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TIMELINE_TITLE.to_string());
    let mut timeline = Timeline::new(title);

    for EventSource { title, date } in source.events {
        let title = title
            .and_then(SourceField::into_text)
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EVENT_TITLE.to_string());
        match date {
            Some(SourceField::Text(date)) => match parse_years_ago(&date) {
                Ok(years_ago) => timeline.events.push(Event {
                    title,
                    date,
                    years_ago,
                }),
                Err(error) => skip_event(&mut timeline, title, Some(date), error),
            },
            Some(SourceField::Other(value)) => {
                let raw = value.to_string();
                let error = DateParseError::Malformed(raw.clone());
                skip_event(&mut timeline, title, Some(raw), error);
            }
            None => skip_event(&mut timeline, title, None, DateParseError::Missing),
        }
    }

    // `sort_by` is stable, so equal magnitudes keep their input order
    timeline
        .events
        .sort_by(|a, b| a.years_ago.total_cmp(&b.years_ago));
    info!("Processed {} event(s)", timeline.events.len());
    timeline
}

fn skip_event(timeline: &mut Timeline, title: String, date: Option<String>, error: DateParseError) {
    warn!(
        "Invalid date - {} ({title}): {error}",
        date.as_deref().unwrap_or("<none>")
    );
    timeline.skipped.push(SkippedEvent { title, date, error });
}

pub fn parse_timeline(input: &str) -> Result<Timeline> {
    Ok(build_timeline(parse_timeline_document(input)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_unit() {
        assert_eq!(parse_years_ago("3 bya").unwrap(), 3e9);
        assert_eq!(parse_years_ago("3.5 mya").unwrap(), 3.5e6);
        assert_eq!(parse_years_ago("10 kya").unwrap(), 10_000.0);
        assert_eq!(parse_years_ago("10 tya").unwrap(), 10_000.0);
        assert_eq!(parse_years_ago("4 hya").unwrap(), 400.0);
        assert_eq!(parse_years_ago("1 ya").unwrap(), 1.0);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(parse_years_ago("2 MYA").unwrap(), 2e6);
        assert_eq!(parse_years_ago("2 Kya").unwrap(), 2000.0);
    }

    #[test]
    fn zero_is_a_valid_magnitude() {
        assert_eq!(parse_years_ago("0 ya").unwrap(), 0.0);
        assert_eq!(parse_years_ago("0 mya").unwrap(), 0.0);
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(matches!(
            parse_years_ago("banana"),
            Err(DateParseError::Malformed(_))
        ));
        assert!(matches!(
            parse_years_ago("5  mya"),
            Err(DateParseError::Malformed(_))
        ));
        assert!(matches!(
            parse_years_ago("5 mya ago"),
            Err(DateParseError::Malformed(_))
        ));
        assert!(matches!(
            parse_years_ago("5 lightyears"),
            Err(DateParseError::UnknownUnit(_))
        ));
        assert!(matches!(
            parse_years_ago("five mya"),
            Err(DateParseError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_years_ago("-5 mya"),
            Err(DateParseError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_years_ago("inf kya"),
            Err(DateParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn rejects_magnitudes_that_overflow_their_unit() {
        assert!(matches!(
            parse_years_ago("1e300 bya"),
            Err(DateParseError::OutOfRange(_))
        ));
        assert!(parse_years_ago("1e300 ya").is_ok());
    }

    #[test]
    fn unit_codes_round_trip() {
        for unit in [
            TimeUnit::Bya,
            TimeUnit::Mya,
            TimeUnit::Kya,
            TimeUnit::Tya,
            TimeUnit::Hya,
            TimeUnit::Ya,
        ] {
            assert_eq!(unit.code().parse::<TimeUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn build_timeline_sorts_and_drops_invalid() {
        let source = TimelineSource {
            title: Some("T".to_string()),
            events: vec![
                EventSource::new("A", "5 mya"),
                EventSource::new("Fruit", "banana"),
                EventSource::new("B", "3 mya"),
                EventSource {
                    title: Some(SourceField::Text("No date".to_string())),
                    date: None,
                },
            ],
        };
        let timeline = build_timeline(source);
        let titles: Vec<&str> = timeline.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert_eq!(timeline.skipped.len(), 2);
        assert_eq!(timeline.skipped[0].title, "Fruit");
        assert_eq!(timeline.skipped[1].error, DateParseError::Missing);
        assert_eq!(timeline.min_years_ago(), Some(3e6));
        assert_eq!(timeline.max_years_ago(), Some(5e6));
    }

    #[test]
    fn ties_keep_input_order() {
        let source = TimelineSource {
            title: None,
            events: vec![
                EventSource::new("first", "10 kya"),
                EventSource::new("second", "10 tya"),
                EventSource::new("earlier", "1 kya"),
            ],
        };
        let timeline = build_timeline(source);
        let titles: Vec<&str> = timeline.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["earlier", "first", "second"]);
    }

    #[test]
    fn missing_titles_get_defaults() {
        let timeline = parse_timeline(r#"{"events":[{"date":"1 ya"}]}"#).unwrap();
        assert_eq!(timeline.title, DEFAULT_TIMELINE_TITLE);
        assert_eq!(timeline.events[0].title, DEFAULT_EVENT_TITLE);
    }

    #[test]
    fn non_string_fields_only_drop_their_event() {
        let input = r#"{"events":[
            {"title":"A","date":5},
            {"title":"B","date":"1 mya"},
            {"title":7,"date":"2 kya"},
            {"title":"C","date":null}
        ]}"#;
        let timeline = parse_timeline(input).unwrap();
        let titles: Vec<&str> = timeline.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec![DEFAULT_EVENT_TITLE, "B"]);
        assert_eq!(timeline.skipped.len(), 2);
        assert_eq!(timeline.skipped[0].title, "A");
        assert_eq!(
            timeline.skipped[0].error,
            DateParseError::Malformed("5".to_string())
        );
        assert_eq!(timeline.skipped[1].error, DateParseError::Missing);
    }

    #[test]
    fn accepts_json5_documents() {
        let input = r#"{
            // hand-written
            title: "Life",
            events: [{title: "Cells", date: "3.5 bya"},],
        }"#;
        let timeline = parse_timeline(input).unwrap();
        assert_eq!(timeline.title, "Life");
        assert_eq!(timeline.events.len(), 1);
    }

    #[test]
    fn rejects_non_documents() {
        assert!(parse_timeline("not json at all [").is_err());
    }
}
