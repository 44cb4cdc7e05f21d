// Reading draws from JSON files: an array of records, in the long or the wide layout.

use std::fs;

use serde_json::{Map as JSMap, Value as JSValue};

use crate::report::*;

pub fn read_json_draws(path: &str) -> ReportResult<DrawSet> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    parse_json_draws(&contents, path)
}

pub fn parse_json_draws(contents: &str, path: &str) -> ReportResult<DrawSet> {
    let js: JSValue = serde_json::from_str(contents).context(ParsingJsonSnafu {})?;
    let arr = js.as_array().context(JsonNotRecordsSnafu { path })?;
    let records: Vec<JSMap<String, JSValue>> = arr
        .iter()
        .map(|v| v.as_object().cloned())
        .collect::<Option<Vec<_>>>()
        .context(JsonNotRecordsSnafu { path })?;
    debug!("parse_json_draws: {}: {} records", path, records.len());
    DrawSet::from_records(records).context(ForecastSnafu {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_and_wide_records() {
        let long = parse_json_draws(
            r#"[{"draw": 1, "party": "AD", "seats": 120}, {"draw": 1, "party": "PS"}]"#,
            "long",
        )
        .unwrap();
        assert_eq!(long.layout(), "long");
        assert_eq!(long.party_seats("PS"), vec![0]);

        let wide = parse_json_draws(r#"[{"AD": 120, "PS": 90, "label": "x"}]"#, "wide").unwrap();
        assert_eq!(wide.layout(), "wide");
        assert_eq!(wide.parties(), vec!["AD".to_string(), "PS".to_string()]);
    }

    #[test]
    fn not_records() {
        assert!(matches!(
            parse_json_draws(r#"{"AD": 120}"#, "obj"),
            Err(ReportError::JsonNotRecords { .. })
        ));
        assert!(matches!(
            parse_json_draws(r#"[{"AD": 120}, 3]"#, "mixed"),
            Err(ReportError::JsonNotRecords { .. })
        ));
        assert!(matches!(
            parse_json_draws("[{", "broken"),
            Err(ReportError::ParsingJson { .. })
        ));
    }

    #[test]
    fn heterogeneous_long_records() {
        let res = parse_json_draws(
            r#"[{"draw": 1, "party": "AD", "seats": 120}, {"AD": 3}]"#,
            "long",
        );
        assert!(matches!(
            res,
            Err(ReportError::Forecast {
                source: ForecastErrors::HeterogeneousRecords { index: 1 }
            })
        ));
    }
}
