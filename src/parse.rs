use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// One (date-time, condition) pair from the parallel `timeDefines` and
/// `weathers` arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastEntry {
    pub at: DateTime<FixedOffset>,
    pub condition: String,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed forecast document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected document shape: no {0}")]
    Shape(&'static str),
    #[error("timeDefines has {times} entries but weathers has {weathers}")]
    LengthMismatch { times: usize, weathers: usize },
    #[error("bad time marker {value:?}: {source}")]
    Time {
        value: String,
        source: chrono::ParseError,
    },
}

// The slice of the JMA schema we care about: the first time-series group of
// the first report. Later groups (precipitation, temperatures) have other
// fields and are ignored.
#[derive(Deserialize)]
struct TimeSeriesGroup {
    #[serde(rename = "timeDefines")]
    time_defines: Vec<String>,
    areas: Vec<Area>,
}

#[derive(Deserialize)]
struct Area {
    weathers: Vec<String>,
}

/// All-or-nothing: any missing key, wrong type, out-of-range index, length
/// mismatch, or unparseable time marker fails the whole document.
pub fn parse(raw: &str) -> Result<Vec<ForecastEntry>, ParseError> {
    let root: Value = serde_json::from_str(raw)?;
    let report = root.get(0).ok_or(ParseError::Shape("report at root[0]"))?;
    let group = report
        .get("timeSeries")
        .and_then(|s| s.get(0))
        .ok_or(ParseError::Shape("timeSeries[0]"))?;
    let TimeSeriesGroup {
        time_defines,
        areas,
    } = serde_json::from_value(group.clone())?;
    let area = areas.into_iter().next().ok_or(ParseError::Shape("areas[0]"))?;
    if time_defines.len() != area.weathers.len() {
        return Err(ParseError::LengthMismatch {
            times: time_defines.len(),
            weathers: area.weathers.len(),
        });
    }

    time_defines
        .into_iter()
        .zip(area.weathers)
        .map(|(marker, condition)| {
            let at = DateTime::parse_from_rfc3339(&marker).map_err(|source| ParseError::Time {
                value: marker.clone(),
                source,
            })?;
            Ok(ForecastEntry { at, condition })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKYO: &str = include_str!("../tests/ref/forecast-tokyo.json");

    #[test]
    fn pairs_time_defines_with_weathers_in_order() {
        let entries = parse(TOKYO).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].condition, "晴れ時々くもり");
        assert_eq!(entries[0].at.format("%Y/%m/%d").to_string(), "2024/01/01");
        assert_eq!(entries[2].condition, "雨");
        assert_eq!(entries[2].at.format("%Y/%m/%d").to_string(), "2024/01/03");
    }

    #[test]
    fn minimal_document() {
        let raw = r#"[{"timeSeries":[{"timeDefines":["2024-01-01T00:00:00+09:00","2024-01-02T00:00:00+09:00"],"areas":[{"weathers":["晴れ","くもり"]}]}]}]"#;
        let entries = parse(raw).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].condition, "くもり");
    }

    #[test]
    fn object_root_is_rejected() {
        let err = parse(r#"{"timeSeries":[]}"#).unwrap_err();
        assert!(matches!(err, ParseError::Shape("report at root[0]")));
    }

    #[test]
    fn missing_time_series_is_rejected() {
        let err = parse(r#"[{"publishingOffice":"気象庁"}]"#).unwrap_err();
        assert!(matches!(err, ParseError::Shape("timeSeries[0]")));
    }

    #[test]
    fn empty_areas_is_rejected() {
        let err =
            parse(r#"[{"timeSeries":[{"timeDefines":[],"areas":[]}]}]"#).unwrap_err();
        assert!(matches!(err, ParseError::Shape("areas[0]")));
    }

    #[test]
    fn short_weathers_is_a_length_mismatch_not_a_crash() {
        let raw = r#"[{"timeSeries":[{"timeDefines":["2024-01-01T00:00:00+09:00","2024-01-02T00:00:00+09:00"],"areas":[{"weathers":["晴れ"]}]}]}]"#;
        let err = parse(raw).unwrap_err();
        assert!(matches!(
            err,
            ParseError::LengthMismatch {
                times: 2,
                weathers: 1
            }
        ));
    }

    #[test]
    fn bad_time_marker_fails_the_whole_parse() {
        let raw = r#"[{"timeSeries":[{"timeDefines":["January 1st"],"areas":[{"weathers":["晴れ"]}]}]}]"#;
        let err = parse(raw).unwrap_err();
        assert!(matches!(err, ParseError::Time { .. }));
    }

    #[test]
    fn not_json_at_all() {
        assert!(matches!(parse("<html>").unwrap_err(), ParseError::Json(_)));
    }
}
