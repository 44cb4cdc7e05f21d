use seat_forecast::builder::Builder;
use seat_forecast::summary::bloc_stats;
use seat_forecast::*;
use serde_json::json;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn names(ps: &[&str]) -> Vec<String> {
    ps.iter().map(|p| p.to_string()).collect()
}

fn three_draws() -> WideDraws {
    let mut b = Builder::new().parties(&names(&["AD", "PS"])).unwrap();
    b.add_draw_simple(&[120, 90]).unwrap();
    b.add_draw_simple(&[100, 110]).unwrap();
    b.add_draw_simple(&[116, 100]).unwrap();
    b.build_wide()
}

#[test]
fn majority_of_a_single_party() {
    init_logger();
    let ds = DrawSet::Wide(three_draws());
    let ad = Bloc::new("AD", &names(&["AD"])).unwrap();
    let p = bloc_majority_probability(&ds, &ad, 116);
    assert_eq!(p, 2.0 / 3.0);
    assert_eq!(format_probability_percent(p), "67%");
}

#[test]
fn most_seats_against_one_competitor() {
    init_logger();
    let p = party_most_seats_probability(&three_draws(), "AD", &names(&["PS"]));
    assert_eq!(p, 2.0 / 3.0);
    assert_eq!(format_probability_percent(0.667), "67%");
}

#[test]
fn long_and_wide_agree() {
    init_logger();
    let wide = three_draws();
    let long = DrawSet::Long(wide.melt_long());
    let wide = DrawSet::Wide(wide);
    for parties in [vec!["AD"], vec!["PS"], vec!["AD", "PS"], vec!["PS", "CH"]] {
        let b = Bloc::new("b", &names(&parties)).unwrap();
        assert_eq!(bloc_seats(&wide, &b), bloc_seats(&long, &b));
        assert_eq!(
            bloc_majority_probability(&wide, &b, 116),
            bloc_majority_probability(&long, &b, 116)
        );
    }
}

#[test]
fn records_in_both_layouts() {
    init_logger();
    let long = json!([
        {"draw": 1, "party": "AD", "seats": 120},
        {"draw": 1, "party": "PS", "seats": 90},
        {"draw": 2, "party": "AD", "seats": 100},
        {"draw": 2, "party": "PS", "seats": 110},
        {"draw": 3, "party": "PS", "seats": 100},
        {"draw": 3, "party": "AD", "seats": 116},
        {"draw": 3, "party": "CH", "seats": 14},
    ]);
    let wide = json!([
        {"AD": 120, "PS": 90},
        {"AD": 100, "PS": 110},
        {"AD": 116, "PS": 100, "CH": 14},
    ]);
    let to_records = |js: serde_json::Value| -> Vec<serde_json::Map<String, serde_json::Value>> {
        js.as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_object().unwrap().clone())
            .collect()
    };
    let long = DrawSet::from_records(to_records(long)).unwrap();
    let wide = DrawSet::from_records(to_records(wide)).unwrap();
    let rules = ForecastRules::default();
    for b in rules.blocs.iter() {
        assert_eq!(bloc_seats(&long, b), bloc_seats(&wide, b));
    }
    let right = Bloc::new("right", &names(&["AD", "CH"])).unwrap();
    assert_eq!(bloc_seats(&long, &right), vec![120, 100, 130]);
    assert_eq!(
        long.as_wide().map(|_| ()),
        Err(ForecastErrors::WideFormRequired)
    );
    match &long {
        DrawSet::Long(ld) => assert_eq!(DrawSet::Wide(ld.pivot_wide()), wide),
        DrawSet::Wide(_) => panic!("expected the long layout"),
    }
}

#[test]
fn empty_draws_everywhere() {
    init_logger();
    let empty = DrawSet::from_records(vec![]).unwrap();
    let rules = ForecastRules::default();
    for b in rules.blocs.iter() {
        assert_eq!(bloc_majority_probability(&empty, b, 116), 0.0);
        let stats = bloc_stats(&empty, b, 116);
        assert_eq!(stats.median, 0.0);
    }
    let wd = empty.as_wide().unwrap();
    assert_eq!(party_most_seats_probability(wd, "AD", &[]), 0.0);
    assert_eq!(
        bloc_beats_bloc_probability(wd, &rules.blocs[0], &rules.blocs[1]),
        0.0
    );
}

#[test]
fn bloc_comparison_without_ties_is_complementary() {
    init_logger();
    let mut b = Builder::new()
        .parties(&names(&["AD", "IL", "PS", "BE", "CDU"]))
        .unwrap();
    b.add_draw_simple(&[110, 10, 80, 20, 8]).unwrap();
    b.add_draw_simple(&[95, 5, 110, 12, 6]).unwrap();
    b.add_draw_simple(&[106, 10, 90, 15, 7]).unwrap();
    let wd = b.build_wide();
    let rules = ForecastRules::default();
    let left = rules.bloc("Left Bloc").unwrap();
    let right = rules.bloc("Right Bloc").unwrap();
    let p_right = bloc_beats_bloc_probability(&wd, right, left);
    let p_left = bloc_beats_bloc_probability(&wd, left, right);
    assert_eq!(p_right, 2.0 / 3.0);
    assert_eq!(p_right + p_left, 1.0);
}
