// ********* Input data structures ***********

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::error::Error;
use std::fmt::Display;

/// A number of seats won by a party (or a bloc) in one draw.
pub type Seats = u32;

/// The identifier of a draw in a long-form table.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawId(pub u64);

/// One row of a long-form table: the seats of one party in one draw.
///
/// Several rows share the same `draw`, one per party.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct LongRow {
    pub draw: DrawId,
    pub party: String,
    #[serde(default)]
    pub seats: Seats,
}

/// One draw of a wide-form table, keyed directly by party code.
///
/// The position of the row in its table is the identity of the draw.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WideRow {
    pub seats: BTreeMap<String, Seats>,
}

impl WideRow {
    pub fn new(seats: &[(&str, Seats)]) -> WideRow {
        WideRow {
            seats: seats.iter().map(|(p, s)| (p.to_string(), *s)).collect(),
        }
    }
}

/// A named set of parties whose seats are summed together.
///
/// Invariant: at least one party, no party listed twice. The order of the
/// parties is the order given at construction.
#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct Bloc {
    name: String,
    parties: Vec<String>,
}

impl Bloc {
    pub fn new(name: &str, parties: &[String]) -> Result<Bloc, ForecastErrors> {
        if parties.is_empty() {
            return Err(ForecastErrors::EmptyBloc {
                name: name.to_string(),
            });
        }
        let mut seen: HashSet<&str> = HashSet::new();
        for p in parties.iter() {
            if !seen.insert(p.as_str()) {
                return Err(ForecastErrors::DuplicateParty {
                    bloc: name.to_string(),
                    party: p.clone(),
                });
            }
        }
        Ok(Bloc {
            name: name.to_string(),
            parties: parties.to_vec(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parties(&self) -> &[String] {
        &self.parties
    }
}

// ******** Output data structures *********

/// Summary of the seats of one bloc across all the draws.
#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct BlocStats {
    pub name: String,
    pub parties: Vec<String>,
    /// The seats of the bloc in every draw, in draw order.
    pub seats: Vec<Seats>,
    pub median: f64,
    pub majority_probability: f64,
}

/// Median and 95% interval of the seats of one party.
#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct PartySeatForecast {
    pub party: String,
    pub median: f64,
    pub low95: f64,
    pub high95: f64,
}

/// Errors that prevent a draw table or a bloc from being built.
///
/// The estimators themselves never fail.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ForecastErrors {
    EmptyBloc { name: String },
    DuplicateParty { bloc: String, party: String },
    /// A wide-form table is required, a long-form one was provided.
    WideFormRequired,
    /// A record does not follow the layout detected on the first record.
    HeterogeneousRecords { index: usize },
    InvalidSeatCount { index: usize, party: String },
}

impl Error for ForecastErrors {}

impl Display for ForecastErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastErrors::EmptyBloc { name } => write!(f, "bloc {} has no party", name),
            ForecastErrors::DuplicateParty { bloc, party } => {
                write!(f, "party {} is listed twice in bloc {}", party, bloc)
            }
            ForecastErrors::WideFormRequired => {
                write!(f, "this statistic requires draws in the wide format")
            }
            ForecastErrors::HeterogeneousRecords { index } => write!(
                f,
                "record {} does not have the layout of the first record",
                index
            ),
            ForecastErrors::InvalidSeatCount { index, party } => write!(
                f,
                "record {}: invalid seat count for party {}",
                index, party
            ),
        }
    }
}

// ********* Configuration **********

pub const TOTAL_SEATS: Seats = 230;

/// Half of the seats plus one.
pub const MAJORITY_THRESHOLD: Seats = TOTAL_SEATS / 2 + 1;

pub const OTHER_PARTIES: &str = "OTH";

/// The blocs and the threshold that govern the summaries of a forecast.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ForecastRules {
    pub majority_threshold: Seats,
    pub blocs: Vec<Bloc>,
    /// Parties left out of the per-party seat forecast.
    pub excluded_parties: Vec<String>,
}

impl ForecastRules {
    pub fn bloc(&self, name: &str) -> Option<&Bloc> {
        self.blocs.iter().find(|b| b.name == name)
    }
}

fn default_bloc(name: &str, parties: &[&str]) -> Bloc {
    Bloc {
        name: name.to_string(),
        parties: parties.iter().map(|p| p.to_string()).collect(),
    }
}

impl Default for ForecastRules {
    fn default() -> ForecastRules {
        ForecastRules {
            majority_threshold: MAJORITY_THRESHOLD,
            blocs: vec![
                default_bloc("Left Bloc", &["PS", "BE", "CDU"]),
                default_bloc("Right Bloc", &["AD", "IL"]),
            ],
            excluded_parties: vec![OTHER_PARTIES.to_string()],
        }
    }
}
