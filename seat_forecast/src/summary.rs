//! Distribution summaries of the seats across draws: bloc gauges and the
//! per-party seat forecast.

use log::info;

use crate::*;

/// The `p`-quantile of sorted values, interpolating linearly between the two
/// closest order statistics. `None` for no values.
pub fn quantile_sorted(sorted: &[Seats], p: f64) -> Option<f64> {
    let (first, last) = (sorted.first()?, sorted.last()?);
    if p <= 0.0 || sorted.len() == 1 {
        return Some(*first as f64);
    }
    if p >= 1.0 {
        return Some(*last as f64);
    }
    let h = (sorted.len() - 1) as f64 * p;
    let lo = (h.floor() as usize).min(sorted.len() - 2);
    let v0 = sorted[lo] as f64;
    let v1 = sorted[lo + 1] as f64;
    Some(v0 + (h - lo as f64) * (v1 - v0))
}

/// The median of the values: the middle value, or the mean of the two
/// middle values for an even number of values.
pub fn median(values: &[Seats]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    quantile_sorted(&sorted, 0.5)
}

/// Seats per draw, median and majority probability of a bloc.
///
/// With no draws, the seats are empty and the median and the probability
/// are 0.
pub fn bloc_stats(draws: &DrawSet, bloc: &Bloc, threshold: Seats) -> BlocStats {
    let seats = bloc_seats(draws, bloc);
    let stats = BlocStats {
        name: bloc.name().to_string(),
        parties: bloc.parties().to_vec(),
        median: median(&seats).unwrap_or(0.0),
        majority_probability: bloc_majority_probability(draws, bloc, threshold),
        seats,
    };
    info!(
        "bloc {}: median {}, P(>={}): {}",
        stats.name,
        stats.median,
        threshold,
        format_probability_percent(stats.majority_probability)
    );
    stats
}

/// The median seats and the 95% interval of every party present in the
/// draws, except the excluded ones.
///
/// Parties are sorted by decreasing median, ties keeping the order of first
/// appearance in the draws. A party missing from a draw has 0 seats in it.
pub fn party_seat_forecasts(draws: &DrawSet, excluded: &[String]) -> Vec<PartySeatForecast> {
    let mut res: Vec<PartySeatForecast> = draws
        .parties()
        .into_iter()
        .filter(|p| !excluded.contains(p))
        .filter_map(|party| {
            let mut seats = draws.party_seats(&party);
            seats.sort_unstable();
            Some(PartySeatForecast {
                median: quantile_sorted(&seats, 0.5)?,
                low95: quantile_sorted(&seats, 0.025)?,
                high95: quantile_sorted(&seats, 0.975)?,
                party,
            })
        })
        .collect();
    res.sort_by(|a, b| b.median.total_cmp(&a.median));
    res
}
