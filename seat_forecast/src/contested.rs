//! Contested seats: which party takes a given seat of a district, and how
//! likely it is.

use serde::{Deserialize, Serialize};

pub const OTHER_LABEL: &str = "Other";

/// The smallest probability shown as its own entry in a breakdown.
pub const DEFAULT_DISPLAY_THRESHOLD: f64 = 0.05;

// Below this, the grouped small probabilities are not worth an entry.
const OTHER_EPSILON: f64 = 1e-6;

/// One seat of a district, with the probability of each party winning it.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ContestedSeat {
    pub district: String,
    /// The position of the seat in the allocation of its district.
    pub rank: u32,
    pub probs: Vec<(String, f64)>,
}

#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct SeatProbability {
    pub party: String,
    pub probability: f64,
}

/// Groups the probabilities under `threshold` into a single `Other` entry
/// and sorts the result by decreasing probability.
///
/// The `Other` entry is left out when the grouped probabilities add up to
/// almost nothing.
pub fn probability_breakdown(probs: &[(String, f64)], threshold: f64) -> Vec<SeatProbability> {
    let mut res: Vec<SeatProbability> = Vec::new();
    let mut other = 0.0;
    for (party, p) in probs.iter() {
        if *p >= threshold {
            res.push(SeatProbability {
                party: party.clone(),
                probability: *p,
            });
        } else {
            other += p;
        }
    }
    if other > OTHER_EPSILON {
        res.push(SeatProbability {
            party: OTHER_LABEL.to_string(),
            probability: other,
        });
    }
    res.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    res
}

/// The `limit` seats with the lowest rank, across all the districts.
pub fn top_contested_seats(seats: &[ContestedSeat], limit: usize) -> Vec<&ContestedSeat> {
    let mut sorted: Vec<&ContestedSeat> = seats.iter().collect();
    sorted.sort_by_key(|s| s.rank);
    sorted.truncate(limit);
    sorted
}
