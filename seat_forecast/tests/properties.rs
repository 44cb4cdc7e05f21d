//! Property-based tests for the estimators and the formatter.

use proptest::prelude::*;

use seat_forecast::builder::Builder;
use seat_forecast::*;

const PARTIES: [&str; 4] = ["AD", "PS", "CH", "IL"];

fn parties() -> Vec<String> {
    PARTIES.iter().map(|p| p.to_string()).collect()
}

/// Strategy: up to 40 draws of 4 parties, each with 0-130 seats.
fn draws_strategy() -> impl Strategy<Value = Vec<Vec<Seats>>> {
    prop::collection::vec(prop::collection::vec(0..=130u32, PARTIES.len()), 0..40)
}

/// Strategy: a non-empty subset of the parties, in a fixed order.
fn bloc_strategy() -> impl Strategy<Value = Bloc> {
    prop::sample::subsequence(PARTIES.to_vec(), 1..=PARTIES.len()).prop_map(|ps| {
        let names: Vec<String> = ps.iter().map(|p| p.to_string()).collect();
        Bloc::new("bloc", &names).unwrap()
    })
}

fn wide(draws: &[Vec<Seats>]) -> WideDraws {
    let mut b = Builder::new().parties(&parties()).unwrap();
    for d in draws {
        b.add_draw_simple(d).unwrap();
    }
    b.build_wide()
}

proptest! {
    // 1. Probabilities stay in [0, 1]
    #[test]
    fn majority_is_a_probability(draws in draws_strategy(), bloc in bloc_strategy(), t in 0..300u32) {
        let p = bloc_majority_probability(&DrawSet::Wide(wide(&draws)), &bloc, t);
        prop_assert!((0.0..=1.0).contains(&p), "p={p}");
    }

    // 2. Both layouts give the same bloc seats
    #[test]
    fn layouts_agree(draws in draws_strategy(), bloc in bloc_strategy()) {
        let wd = wide(&draws);
        let long = DrawSet::Long(wd.melt_long());
        let wide = DrawSet::Wide(wd);
        prop_assert_eq!(bloc_seats(&wide, &bloc), bloc_seats(&long, &bloc));
    }

    // 3. No competitor: every draw is won
    #[test]
    fn no_competitor(draws in draws_strategy()) {
        let p = party_most_seats_probability(&wide(&draws), "AD", &[]);
        let expected = if draws.is_empty() { 0.0 } else { 1.0 };
        prop_assert_eq!(p, expected);
    }

    // 4. Without ties, one of two blocs always wins
    #[test]
    fn comparison_is_complementary(draws in draws_strategy(), a in bloc_strategy(), b in bloc_strategy()) {
        let wd = wide(&draws);
        let no_ties = wd.draws().all(|d| d.bloc_seats(&a) != d.bloc_seats(&b));
        prop_assume!(no_ties && !wd.is_empty());
        let total = bloc_beats_bloc_probability(&wd, &a, &b) + bloc_beats_bloc_probability(&wd, &b, &a);
        prop_assert!((total - 1.0).abs() < 1e-12, "total={total}");
    }

    // 5. Formatted percentages never decrease with the probability
    #[test]
    fn formatting_is_monotonic(x in 0.0..=1.0f64, y in 0.0..=1.0f64) {
        let rank = |s: &str| -> i32 {
            match s {
                "<1%" => 0,
                ">99%" => 100,
                _ => s.trim_end_matches('%').parse::<i32>().unwrap(),
            }
        };
        let (lo, hi) = if x <= y { (x, y) } else { (y, x) };
        prop_assert!(rank(&format_probability_percent(lo)) <= rank(&format_probability_percent(hi)));
    }
}
