use crate::report::*;

use seat_forecast::{Bloc, ForecastRules, Seats};
use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;
use snafu::prelude::*;
use std::fs;

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct BlocConfig {
    pub name: String,
    pub parties: Vec<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct MostSeatsConfig {
    pub target: String,
    #[serde(default)]
    pub competitors: Vec<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct BlocComparisonConfig {
    #[serde(rename = "blocA")]
    pub bloc_a: String,
    #[serde(rename = "blocB")]
    pub bloc_b: String,
}

/// The JSON configuration of a report. Missing fields fall back to the
/// default rules.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastConfig {
    #[serde(rename = "majorityThreshold")]
    pub majority_threshold: Option<Seats>,
    pub blocs: Option<Vec<BlocConfig>>,
    #[serde(rename = "excludedParties")]
    pub excluded_parties: Option<Vec<String>>,
    #[serde(rename = "mostSeats", default)]
    pub most_seats: Vec<MostSeatsConfig>,
    #[serde(rename = "blocComparisons", default)]
    pub bloc_comparisons: Vec<BlocComparisonConfig>,
}

pub fn read_config(path: &str) -> ReportResult<ForecastConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> ReportResult<ForecastConfig> {
    let config: ForecastConfig = serde_json::from_str(contents).context(ParsingJsonSnafu {})?;
    Ok(config)
}

pub fn validate_rules(config: &ForecastConfig) -> ReportResult<ForecastRules> {
    let mut rules = ForecastRules::default();
    if let Some(t) = config.majority_threshold {
        rules.majority_threshold = t;
    }
    if let Some(blocs) = &config.blocs {
        rules.blocs = blocs
            .iter()
            .map(|bc| Bloc::new(&bc.name, &bc.parties))
            .collect::<Result<Vec<Bloc>, _>>()
            .context(ForecastSnafu {})?;
    }
    if let Some(excluded) = &config.excluded_parties {
        rules.excluded_parties = excluded.clone();
    }
    // Every bloc named in a comparison must exist.
    for cmp in config.bloc_comparisons.iter() {
        comparison_blocs(&rules, cmp)?;
    }
    Ok(rules)
}

pub fn comparison_blocs<'a>(
    rules: &'a ForecastRules,
    cmp: &BlocComparisonConfig,
) -> ReportResult<(&'a Bloc, &'a Bloc)> {
    let find = |name: &String| {
        rules
            .bloc(name)
            .context(UnknownBlocSnafu { name: name.clone() })
    };
    Ok((find(&cmp.bloc_a)?, find(&cmp.bloc_b)?))
}

pub fn read_summary(path: &str) -> ReportResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seat_forecast::ForecastErrors;

    #[test]
    fn empty_config_gives_default_rules() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config, ForecastConfig::default());
        assert_eq!(validate_rules(&config).unwrap(), ForecastRules::default());
    }

    #[test]
    fn config_overrides() {
        let config = parse_config(
            r#"{
                "majorityThreshold": 100,
                "blocs": [{"name": "Centre", "parties": ["PS", "AD"]}],
                "mostSeats": [{"target": "AD"}],
                "blocComparisons": [{"blocA": "Centre", "blocB": "Centre"}]
            }"#,
        )
        .unwrap();
        let rules = validate_rules(&config).unwrap();
        assert_eq!(rules.majority_threshold, 100);
        assert_eq!(rules.blocs.len(), 1);
        assert_eq!(rules.excluded_parties, vec!["OTH".to_string()]);
        assert!(config.most_seats[0].competitors.is_empty());
    }

    #[test]
    fn invalid_blocs() {
        let config = parse_config(r#"{"blocs": [{"name": "Empty", "parties": []}]}"#).unwrap();
        assert!(matches!(
            validate_rules(&config),
            Err(ReportError::Forecast {
                source: ForecastErrors::EmptyBloc { .. }
            })
        ));
        let config =
            parse_config(r#"{"blocComparisons": [{"blocA": "Left Bloc", "blocB": "Centre"}]}"#)
                .unwrap();
        match validate_rules(&config) {
            Err(ReportError::UnknownBloc { name }) => assert_eq!(name, "Centre"),
            x => panic!("unexpected result {:?}", x),
        }
    }
}
