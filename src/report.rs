use log::{debug, info, warn};

use seat_forecast::summary::{bloc_stats, party_seat_forecasts};
use seat_forecast::*;
use snafu::{prelude::*, Snafu};

use std::fs;

use serde_json::json;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::report::config_reader::*;
use crate::report::io_common::{input_type_for, InputType};

pub mod config_reader;
pub mod io_common;
pub mod io_csv;
pub mod io_json;

#[derive(Debug, Snafu)]
pub enum ReportError {
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("{path}: expected an array of objects"))]
    JsonNotRecords { path: String },
    #[snafu(display("Error opening CSV file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error reading CSV line"))]
    CsvLineParse { source: csv::Error },
    #[snafu(display("Column {column} appears more than once in the CSV header"))]
    CsvDuplicateColumn { column: String },
    #[snafu(display("Line {lineno}: missing column {column}"))]
    CsvMissingColumn { lineno: usize, column: String },
    #[snafu(display("Line {lineno}: invalid value {content:?} in column {column}"))]
    CsvInvalidValue {
        lineno: usize,
        column: String,
        content: String,
    },
    #[snafu(display("Unknown input type {input_type}"))]
    UnknownInputType { input_type: String },
    #[snafu(display("{source}"))]
    Forecast { source: ForecastErrors },
    #[snafu(display("Unknown bloc {name}: it must be defined in the blocs of the configuration"))]
    UnknownBloc { name: String },
    #[snafu(display("Error writing {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Difference detected between calculated summary and reference summary"))]
    ReferenceMismatch {},
}

pub type ReportResult<T> = Result<T, ReportError>;

fn round_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn read_draws(args: &Args) -> ReportResult<DrawSet> {
    info!("Attempting to read draws file {:?}", args.input);
    match input_type_for(&args.input, &args.input_type)? {
        InputType::Json => io_json::read_json_draws(&args.input),
        InputType::Csv => io_csv::read_csv_draws(&args.input),
    }
}

// The draws in the wide layout, if the statistics over wide tables can be computed.
fn wide_draws<'a>(
    draws: &'a DrawSet,
    pivoted: &'a Option<WideDraws>,
) -> ReportResult<&'a WideDraws> {
    match pivoted {
        Some(wd) => Ok(wd),
        None => draws.as_wide().context(ForecastSnafu {}),
    }
}

fn build_summary_js(
    config: &ForecastConfig,
    rules: &ForecastRules,
    draws: &DrawSet,
    args: &Args,
) -> ReportResult<JSValue> {
    let threshold = rules.majority_threshold;

    let mut blocs_js: Vec<JSValue> = Vec::new();
    for bloc in rules.blocs.iter() {
        let stats = bloc_stats(draws, bloc, threshold);
        let mut js = json!({
            "name": stats.name,
            "parties": stats.parties,
            "median": stats.median,
            "majorityProbability": stats.majority_probability,
            "majorityLabel": format_probability_percent(stats.majority_probability),
        });
        if args.bloc_seats {
            js["seats"] = json!(stats.seats);
        }
        blocs_js.push(js);
    }

    let parties_js: Vec<JSValue> = party_seat_forecasts(draws, &rules.excluded_parties)
        .iter()
        .map(|f| {
            json!({
                "party": f.party,
                "median": f.median,
                "low95": round_tenth(f.low95),
                "high95": round_tenth(f.high95),
            })
        })
        .collect();

    let mut most_seats_js: Vec<JSValue> = Vec::new();
    let mut comparisons_js: Vec<JSValue> = Vec::new();
    if !config.most_seats.is_empty() || !config.bloc_comparisons.is_empty() {
        let pivoted: Option<WideDraws> = match draws {
            DrawSet::Long(ld) if args.pivot_wide => {
                info!("Converting {} long draws to the wide layout", ld.len());
                Some(ld.pivot_wide())
            }
            _ => None,
        };
        let wd = wide_draws(draws, &pivoted)?;

        for ms in config.most_seats.iter() {
            let p = party_most_seats_probability(wd, &ms.target, &ms.competitors);
            info!(
                "{} most seats against {:?}: {}",
                ms.target,
                ms.competitors,
                format_probability_percent(p)
            );
            most_seats_js.push(json!({
                "target": ms.target,
                "competitors": ms.competitors,
                "probability": p,
                "label": format_probability_percent(p),
            }));
        }

        for cmp in config.bloc_comparisons.iter() {
            let (bloc_a, bloc_b) = comparison_blocs(rules, cmp)?;
            let p = bloc_beats_bloc_probability(wd, bloc_a, bloc_b);
            info!(
                "{} over {}: {}",
                bloc_a.name(),
                bloc_b.name(),
                format_probability_percent(p)
            );
            comparisons_js.push(json!({
                "blocA": bloc_a.name(),
                "blocB": bloc_b.name(),
                "probability": p,
                "label": format_probability_percent(p),
            }));
        }
    }

    Ok(json!({
        "config": {
            "draws": draws.len(),
            "layout": draws.layout(),
            "majorityThreshold": threshold,
        },
        "blocs": blocs_js,
        "parties": parties_js,
        "mostSeats": most_seats_js,
        "blocComparisons": comparisons_js,
    }))
}

fn write_summary(pretty_js: &str, out: &Option<String>) -> ReportResult<()> {
    match out.as_deref() {
        None | Some("stdout") => {
            println!("{}", pretty_js);
            Ok(())
        }
        Some(path) => {
            info!("Writing summary to {:?}", path);
            fs::write(path, pretty_js).context(WritingOutputSnafu { path })
        }
    }
}

pub fn run_report(args: &Args) -> ReportResult<()> {
    let config: ForecastConfig = match &args.config {
        Some(p) => read_config(p)?,
        None => ForecastConfig::default(),
    };
    debug!("config: {:?}", config);

    // Validate the rules:
    let rules = validate_rules(&config)?;

    let draws = read_draws(args)?;
    info!("Read {} draws in the {} layout", draws.len(), draws.layout());

    let summary_js = build_summary_js(&config, &rules, &draws, args)?;
    let pretty_js_stats =
        serde_json::to_string_pretty(&summary_js).context(ParsingJsonSnafu {})?;
    write_summary(&pretty_js_stats, &args.out)?;

    // The reference summary, if provided for comparison
    if let Some(summary_p) = &args.reference {
        let summary_ref = read_summary(summary_p)?;
        let pretty_js_summary_ref =
            serde_json::to_string_pretty(&summary_ref).context(ParsingJsonSnafu {})?;
        if pretty_js_summary_ref != pretty_js_stats {
            warn!("Found differences with the reference string");
            print_diff(
                pretty_js_summary_ref.as_str(),
                pretty_js_stats.as_ref(),
                "\n",
            );
            return ReferenceMismatchSnafu {}.fail();
        }
    }

    Ok(())
}

#[cfg(test)]
fn run_report_test(test_name: &str, input_lpath: &str, extra: fn(&mut Args)) -> ReportResult<()> {
    let test_dir = format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), test_name);
    info!("Running test {}", test_name);
    let mut args = Args {
        input: format!("{}/{}", test_dir, input_lpath),
        input_type: None,
        config: Some(format!("{}/{}_config.json", test_dir, test_name)),
        out: Some(
            std::env::temp_dir()
                .join(format!("seatcast_{}.json", test_name))
                .display()
                .to_string(),
        ),
        reference: Some(format!("{}/{}_expected_summary.json", test_dir, test_name)),
        pivot_wide: false,
        bloc_seats: false,
        verbose: false,
    };
    extra(&mut args);
    run_report(&args)
}
