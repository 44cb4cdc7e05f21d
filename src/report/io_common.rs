use std::path::Path;

use crate::report::*;
use seat_forecast::Seats;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum InputType {
    Json,
    Csv,
}

/// The type of an input file, given explicitly or guessed from its extension.
pub fn input_type_for(path: &str, explicit: &Option<String>) -> ReportResult<InputType> {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    let name = match explicit {
        Some(t) => t.to_lowercase(),
        None => ext.unwrap_or_else(|| "csv".to_string()),
    };
    match name.as_str() {
        "json" => Ok(InputType::Json),
        "csv" => Ok(InputType::Csv),
        // Unknown extensions are read as csv, unknown explicit types are errors.
        _ if explicit.is_none() => Ok(InputType::Csv),
        _ => UnknownInputTypeSnafu { input_type: name }.fail(),
    }
}

/// Parses a seat count from a CSV cell. An empty cell is 0 seats.
pub fn parse_seats_cell(cell: &str) -> Option<Seats> {
    let c = cell.trim();
    if c.is_empty() {
        return Some(0);
    }
    if let Ok(x) = c.parse::<Seats>() {
        return Some(x);
    }
    match c.parse::<f64>() {
        Ok(f) if f >= 0.0 && f.fract() == 0.0 && f <= Seats::MAX as f64 => Some(f as Seats),
        _ => None,
    }
}
