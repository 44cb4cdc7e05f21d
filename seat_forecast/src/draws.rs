//! The tables of simulation draws, in their two layouts.
//!
//! A long-form table has one row per (draw, party) pair. A wide-form table
//! has one row per draw, keyed by party code. Both are exposed to the
//! estimators through the [`SeatLookup`] trait, which reads a missing party
//! as 0 seats.

use log::debug;
use serde_json::{Map as JSMap, Value as JSValue};
use std::collections::{BTreeMap, HashMap};

use crate::config::*;

/// Read access to the seats of the parties in a single draw.
pub trait SeatLookup {
    /// The seats of `party` in this draw, or 0 if the party is absent.
    fn seats(&self, party: &str) -> Seats;

    /// The seats of all the parties of `bloc`. Saturates at `Seats::MAX`.
    fn bloc_seats(&self, bloc: &Bloc) -> Seats {
        bloc.parties()
            .iter()
            .fold(0, |acc: Seats, p| acc.saturating_add(self.seats(p)))
    }
}

impl SeatLookup for WideRow {
    fn seats(&self, party: &str) -> Seats {
        self.seats.get(party).cloned().unwrap_or(0)
    }
}

/// The rows of a long-form table that share the same draw id.
#[derive(Eq, PartialEq, Debug, Clone)]
struct DrawGroup {
    id: DrawId,
    // Indices into the rows of the table.
    rows: Vec<usize>,
}

/// A view over one draw of a long-form table.
#[derive(Debug, Clone, Copy)]
pub struct LongDraw<'a> {
    id: DrawId,
    all_rows: &'a [LongRow],
    rows: &'a [usize],
}

impl<'a> LongDraw<'a> {
    pub fn id(&self) -> DrawId {
        self.id
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a LongRow> {
        let all_rows = self.all_rows;
        self.rows.iter().map(move |idx| &all_rows[*idx])
    }
}

impl<'a> SeatLookup for LongDraw<'a> {
    fn seats(&self, party: &str) -> Seats {
        self.rows()
            .filter(|r| r.party == party)
            .fold(0, |acc: Seats, r| acc.saturating_add(r.seats))
    }
}

/// A long-form table, grouped by draw id in order of first appearance.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct LongDraws {
    rows: Vec<LongRow>,
    groups: Vec<DrawGroup>,
}

impl LongDraws {
    pub fn new(rows: Vec<LongRow>) -> LongDraws {
        let mut groups: Vec<DrawGroup> = Vec::new();
        let mut group_by_id: HashMap<DrawId, usize> = HashMap::new();
        for (idx, row) in rows.iter().enumerate() {
            let gidx = *group_by_id.entry(row.draw).or_insert_with(|| {
                groups.push(DrawGroup {
                    id: row.draw,
                    rows: Vec::new(),
                });
                groups.len() - 1
            });
            groups[gidx].rows.push(idx);
        }
        debug!(
            "LongDraws::new: {:?} rows in {:?} draws",
            rows.len(),
            groups.len()
        );
        LongDraws { rows, groups }
    }

    /// The number of distinct draws.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn rows(&self) -> &[LongRow] {
        &self.rows
    }

    pub fn draws(&self) -> impl Iterator<Item = LongDraw<'_>> {
        self.groups.iter().map(move |g| LongDraw {
            id: g.id,
            all_rows: &self.rows,
            rows: &g.rows,
        })
    }

    /// Converts to the wide layout, one row per draw in the same order.
    ///
    /// Rows repeating a party within a draw are summed, saturating at
    /// `Seats::MAX`.
    pub fn pivot_wide(&self) -> WideDraws {
        let rows: Vec<WideRow> = self
            .draws()
            .map(|d| {
                let mut seats: BTreeMap<String, Seats> = BTreeMap::new();
                for r in d.rows() {
                    let s = seats.entry(r.party.clone()).or_insert(0);
                    *s = s.saturating_add(r.seats);
                }
                WideRow { seats }
            })
            .collect();
        WideDraws::new(rows)
    }
}

/// A wide-form table. The position of a row is the identity of the draw.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct WideDraws {
    rows: Vec<WideRow>,
}

impl WideDraws {
    pub fn new(rows: Vec<WideRow>) -> WideDraws {
        WideDraws { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn draws(&self) -> impl Iterator<Item = &WideRow> {
        self.rows.iter()
    }

    /// Converts to the long layout. The draw ids are the row positions and
    /// the parties of a draw are listed in code order.
    pub fn melt_long(&self) -> LongDraws {
        let rows: Vec<LongRow> = self
            .rows
            .iter()
            .enumerate()
            .flat_map(|(idx, row)| {
                row.seats.iter().map(move |(party, seats)| LongRow {
                    draw: DrawId(idx as u64),
                    party: party.clone(),
                    seats: *seats,
                })
            })
            .collect();
        LongDraws::new(rows)
    }
}

/// The two layouts of a table of draws.
///
/// The layout is decided once, when the table is built, and every consumer
/// matches on it.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum DrawSet {
    Long(LongDraws),
    Wide(WideDraws),
}

impl DrawSet {
    /// Builds a table from dynamically typed records.
    ///
    /// The table is long-form if the first record has both a `draw` and a
    /// `party` field, and wide-form otherwise. All the other records must
    /// follow the layout of the first one:
    /// - long-form records need an unsigned integer `draw` and a string
    ///   `party`.
    /// - in wide-form records, every field is the seat count of the party
    ///   named by the field.
    ///
    /// In both layouts, a seat count that is missing, null or not a
    /// non-negative integer (`"many"`, `-3`, `2.5`) reads as 0 seats.
    pub fn from_records(records: Vec<JSMap<String, JSValue>>) -> Result<DrawSet, ForecastErrors> {
        let is_long = records
            .first()
            .map(|r| r.contains_key("draw") && r.contains_key("party"))
            .unwrap_or(false);
        debug!(
            "from_records: {:?} records, long format: {:?}",
            records.len(),
            is_long
        );
        if is_long {
            let mut rows: Vec<LongRow> = Vec::with_capacity(records.len());
            for (index, r) in records.iter().enumerate() {
                rows.push(read_long_record(index, r)?);
            }
            Ok(DrawSet::Long(LongDraws::new(rows)))
        } else {
            let rows: Vec<WideRow> = records
                .iter()
                .enumerate()
                .map(|(index, r)| read_wide_record(index, r))
                .collect();
            Ok(DrawSet::Wide(WideDraws::new(rows)))
        }
    }

    /// The number of distinct draws.
    pub fn len(&self) -> usize {
        match self {
            DrawSet::Long(ld) => ld.len(),
            DrawSet::Wide(wd) => wd.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn layout(&self) -> &'static str {
        match self {
            DrawSet::Long(_) => "long",
            DrawSet::Wide(_) => "wide",
        }
    }

    pub fn as_wide(&self) -> Result<&WideDraws, ForecastErrors> {
        match self {
            DrawSet::Wide(wd) => Ok(wd),
            DrawSet::Long(_) => Err(ForecastErrors::WideFormRequired),
        }
    }

    /// The seats of `party` in every draw, in draw order.
    pub fn party_seats(&self, party: &str) -> Vec<Seats> {
        match self {
            DrawSet::Long(ld) => ld.draws().map(|d| d.seats(party)).collect(),
            DrawSet::Wide(wd) => wd.draws().map(|d| d.seats(party)).collect(),
        }
    }

    /// All the parties that appear in the table.
    ///
    /// Long tables list the parties in order of first appearance in the rows.
    /// Wide rows are keyed in alphabetical order, so a wide table lists the
    /// parties of its first row alphabetically, then the new parties of each
    /// following row alphabetically.
    pub fn parties(&self) -> Vec<String> {
        let mut res: Vec<String> = Vec::new();
        let mut push = |p: &String| {
            if !res.contains(p) {
                res.push(p.clone());
            }
        };
        match self {
            DrawSet::Long(ld) => ld.rows().iter().for_each(|r| push(&r.party)),
            DrawSet::Wide(wd) => wd.draws().flat_map(|d| d.seats.keys()).for_each(push),
        }
        res
    }
}

fn read_long_record(index: usize, r: &JSMap<String, JSValue>) -> Result<LongRow, ForecastErrors> {
    let draw = r
        .get("draw")
        .and_then(|v| v.as_u64())
        .ok_or(ForecastErrors::HeterogeneousRecords { index })?;
    let party = r
        .get("party")
        .and_then(|v| v.as_str())
        .ok_or(ForecastErrors::HeterogeneousRecords { index })?
        .to_string();
    let seats = match r.get("seats") {
        None | Some(JSValue::Null) => 0,
        Some(v) => read_seats(v).unwrap_or_else(|| {
            debug!(
                "read_long_record: record {}: invalid seats {:?} for {}",
                index, v, party
            );
            0
        }),
    };
    Ok(LongRow {
        draw: DrawId(draw),
        party,
        seats,
    })
}

fn read_wide_record(index: usize, r: &JSMap<String, JSValue>) -> WideRow {
    let mut seats: BTreeMap<String, Seats> = BTreeMap::new();
    for (k, v) in r.iter() {
        if let Some(s) = read_seats(v) {
            seats.insert(k.clone(), s);
        } else {
            debug!("read_wide_record: record {}: skipping field {} = {:?}", index, k, v);
        }
    }
    WideRow { seats }
}

// Accepts integers, and floats without a fractional part.
fn read_seats(v: &JSValue) -> Option<Seats> {
    if let Some(x) = v.as_u64() {
        return Seats::try_from(x).ok();
    }
    match v.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= Seats::MAX as f64 => Some(f as Seats),
        _ => None,
    }
}
