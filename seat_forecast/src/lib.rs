mod config;
mod draws;
mod format;

pub mod builder;
pub mod contested;
pub mod districts;
pub mod manual;
pub mod summary;

use log::debug;

pub use crate::config::*;
pub use crate::draws::*;
pub use crate::format::*;

/// The seats of a bloc in every draw, in draw order. A total too large for
/// [`Seats`] saturates at `Seats::MAX`.
///
/// For a long-form table, the draws are in order of first appearance of
/// their id. Rows of parties outside the bloc are ignored.
pub fn bloc_seats(draws: &DrawSet, bloc: &Bloc) -> Vec<Seats> {
    match draws {
        DrawSet::Wide(wd) => wd.draws().map(|d| d.bloc_seats(bloc)).collect(),
        DrawSet::Long(ld) => ld.draws().map(|d| d.bloc_seats(bloc)).collect(),
    }
}

/// The probability that a bloc reaches `threshold` seats (inclusive).
///
/// Returns 0 if there are no draws.
pub fn bloc_majority_probability(draws: &DrawSet, bloc: &Bloc, threshold: Seats) -> f64 {
    let seats = bloc_seats(draws, bloc);
    let p = fraction_of_draws(seats.iter().map(|s| *s >= threshold));
    debug!(
        "bloc_majority_probability: bloc {} threshold {}: {:?} over {:?} draws",
        bloc.name(),
        threshold,
        p,
        seats.len()
    );
    p
}

/// The probability that `target` wins strictly more seats than every one of
/// the `competitors`. A tie with any competitor loses the draw.
///
/// With no competitors, every draw is a win. Returns 0 if there are no draws.
pub fn party_most_seats_probability(
    draws: &WideDraws,
    target: &str,
    competitors: &[String],
) -> f64 {
    let p = fraction_of_draws(draws.draws().map(|d| {
        let target_seats = d.seats(target);
        competitors.iter().all(|c| target_seats > d.seats(c))
    }));
    debug!(
        "party_most_seats_probability: {} against {:?}: {:?}",
        target, competitors, p
    );
    p
}

/// The probability that bloc A wins strictly more seats than bloc B.
///
/// A party may belong to both blocs, its seats are then counted on both
/// sides. Returns 0 if there are no draws.
pub fn bloc_beats_bloc_probability(draws: &WideDraws, bloc_a: &Bloc, bloc_b: &Bloc) -> f64 {
    let p = fraction_of_draws(
        draws
            .draws()
            .map(|d| d.bloc_seats(bloc_a) > d.bloc_seats(bloc_b)),
    );
    debug!(
        "bloc_beats_bloc_probability: {} over {}: {:?}",
        bloc_a.name(),
        bloc_b.name(),
        p
    );
    p
}

// The fraction of draws for which the outcome holds, 0 for no draws.
fn fraction_of_draws<I: Iterator<Item = bool>>(outcomes: I) -> f64 {
    let (total, hits) = outcomes.fold((0u64, 0u64), |(total, hits), hit| {
        (total + 1, if hit { hits + 1 } else { hits })
    });
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}
