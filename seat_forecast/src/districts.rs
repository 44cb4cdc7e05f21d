//! The winner of each district, and of each geometry drawn on the map.
//!
//! The islands of the Azores and of Madeira are separate geometries but
//! belong to a single electoral region each.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const AZORES_ISLANDS: [&str; 9] = [
    "Ilha do Faial",
    "Ilha de São Jorge",
    "Ilha da Graciosa",
    "Ilha Terceira",
    "Ilha das Flores",
    "Ilha do Corvo",
    "Ilha de São Miguel",
    "Ilha de Santa Maria",
    "Ilha do Pico",
];

const MADEIRA_ISLANDS: [&str; 2] = ["Ilha da Madeira", "Ilha de Porto Santo"];

/// The forecast vote share of a party in a district.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DistrictShare {
    pub district: String,
    pub party: String,
    pub vote_share_mean: f64,
}

#[derive(PartialEq, Eq, Debug, Clone, Serialize)]
pub struct GeometryWinner {
    pub geometry: String,
    pub region: String,
    pub is_island: bool,
    pub winner: Option<String>,
}

/// The electoral region a geometry belongs to: the archipelago for an
/// island, the geometry itself otherwise.
pub fn region_for_geometry(name: &str) -> &str {
    if AZORES_ISLANDS.contains(&name) {
        "Acores"
    } else if MADEIRA_ISLANDS.contains(&name) {
        "Madeira"
    } else {
        name
    }
}

pub fn is_island(name: &str) -> bool {
    AZORES_ISLANDS.contains(&name) || MADEIRA_ISLANDS.contains(&name)
}

/// The party with the strictly greatest mean vote share in every district,
/// in order of first appearance of the district.
///
/// The first row wins a tie. A district without any comparable share (all
/// NaN) has no winner.
pub fn district_winners(shares: &[DistrictShare]) -> Vec<(String, Option<String>)> {
    let mut res: Vec<(String, Option<String>)> = Vec::new();
    let mut best: Vec<f64> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for s in shares.iter() {
        let idx = *index.entry(s.district.as_str()).or_insert_with(|| {
            res.push((s.district.clone(), None));
            best.push(f64::NEG_INFINITY);
            res.len() - 1
        });
        if s.vote_share_mean > best[idx] {
            best[idx] = s.vote_share_mean;
            res[idx].1 = Some(s.party.clone());
        }
    }
    debug!("district_winners: {:?}", res);
    res
}

/// The winner of the region of every geometry.
pub fn geometry_winners(geometries: &[String], shares: &[DistrictShare]) -> Vec<GeometryWinner> {
    let winners: HashMap<String, Option<String>> = district_winners(shares).into_iter().collect();
    let res: Vec<GeometryWinner> = geometries
        .iter()
        .map(|g| {
            let region = region_for_geometry(g);
            GeometryWinner {
                geometry: g.clone(),
                region: region.to_string(),
                is_island: is_island(g),
                winner: winners.get(region).cloned().flatten(),
            }
        })
        .collect();
    if res.iter().all(|gw| gw.winner.is_none()) && !res.is_empty() {
        warn!("geometry_winners: no geometry matches a district of the forecast");
    }
    res
}
