// Primitives for reading CSV files.
//
// The first line is always a header. A header with both a `draw` and a
// `party` column is a long table, anything else is a wide table with one
// column per party.

use std::collections::BTreeMap;
use std::io::Read;

use csv::StringRecord;

use crate::report::io_common::parse_seats_cell;
use crate::report::*;

pub fn read_csv_draws(path: &str) -> ReportResult<DrawSet> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .context(CsvOpenSnafu { path })?;
    read_draws_from(rdr)
}

pub fn read_draws_from<R: Read>(mut rdr: csv::Reader<R>) -> ReportResult<DrawSet> {
    let header = rdr.headers().context(CsvLineParseSnafu {})?.clone();
    // A repeated column would silently hide one of the values.
    for (idx, h) in header.iter().enumerate() {
        ensure!(
            !header.iter().take(idx).any(|prev| prev == h),
            CsvDuplicateColumnSnafu { column: h }
        );
    }
    let column = |name: &str| header.iter().position(|h| h == name);
    let res = match (column("draw"), column("party")) {
        (Some(draw_idx), Some(party_idx)) => {
            let seats_idx = column("seats");
            let mut rows: Vec<LongRow> = Vec::new();
            for (idx, line_r) in rdr.records().enumerate() {
                let line = line_r.context(CsvLineParseSnafu {})?;
                rows.push(read_long_line(idx + 2, &line, draw_idx, party_idx, seats_idx)?);
            }
            DrawSet::Long(LongDraws::new(rows))
        }
        _ => {
            let mut rows: Vec<WideRow> = Vec::new();
            for (idx, line_r) in rdr.records().enumerate() {
                let line = line_r.context(CsvLineParseSnafu {})?;
                rows.push(read_wide_line(idx + 2, &line, &header)?);
            }
            DrawSet::Wide(WideDraws::new(rows))
        }
    };
    debug!("read_draws_from: {} draws ({})", res.len(), res.layout());
    Ok(res)
}

fn cell<'a>(
    line: &'a StringRecord,
    lineno: usize,
    idx: usize,
    column: &str,
) -> ReportResult<&'a str> {
    line.get(idx).context(CsvMissingColumnSnafu { lineno, column })
}

fn read_long_line(
    lineno: usize,
    line: &StringRecord,
    draw_idx: usize,
    party_idx: usize,
    seats_idx: Option<usize>,
) -> ReportResult<LongRow> {
    let draw_s = cell(line, lineno, draw_idx, "draw")?;
    let draw = draw_s.parse::<u64>().ok().context(CsvInvalidValueSnafu {
        lineno,
        column: "draw",
        content: draw_s,
    })?;
    let party = cell(line, lineno, party_idx, "party")?.to_string();
    let seats = match seats_idx {
        None => 0,
        Some(i) => {
            let s = cell(line, lineno, i, "seats")?;
            parse_seats_cell(s).context(CsvInvalidValueSnafu {
                lineno,
                column: "seats",
                content: s,
            })?
        }
    };
    Ok(LongRow {
        draw: DrawId(draw),
        party,
        seats,
    })
}

fn read_wide_line(
    lineno: usize,
    line: &StringRecord,
    header: &StringRecord,
) -> ReportResult<WideRow> {
    let mut seats: BTreeMap<String, Seats> = BTreeMap::new();
    for (idx, party) in header.iter().enumerate() {
        let s = cell(line, lineno, idx, party)?;
        if s.is_empty() {
            continue;
        }
        let n = parse_seats_cell(s).context(CsvInvalidValueSnafu {
            lineno,
            column: party,
            content: s,
        })?;
        seats.insert(party.to_string(), n);
    }
    Ok(WideRow { seats })
}
