pub use crate::config::*;
use crate::draws::*;

/// A builder for tables of draws.
///
/// ```
/// pub use seat_forecast::builder::Builder;
/// # use seat_forecast::ForecastErrors;
///
/// let mut builder = Builder::new().parties(&["AD".to_string(), "PS".to_string()])?;
///
/// builder.add_draw_simple(&[120, 90])?;
/// builder.add_draw(&[("AD".to_string(), 100), ("CH".to_string(), 12)])?;
///
/// let draws = builder.build_wide();
/// assert_eq!(draws.len(), 2);
///
/// # Ok::<(), ForecastErrors>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    pub(crate) _parties: Vec<String>,
    pub(crate) _draws: Vec<WideRow>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder::default()
    }

    /// Registers the parties, in the order used by [`Builder::add_draw_simple`].
    pub fn parties(self, parties: &[String]) -> Result<Builder, ForecastErrors> {
        // Same rules as a bloc: no empty list, no duplicates.
        Bloc::new("parties", parties)?;
        Ok(Builder {
            _parties: parties.to_vec(),
            _draws: self._draws,
        })
    }

    /// Adds a draw with the seats of the registered parties, in order.
    ///
    /// Missing trailing values are parties absent from the draw.
    pub fn add_draw_simple(&mut self, seats: &[Seats]) -> Result<(), ForecastErrors> {
        if seats.len() > self._parties.len() {
            return Err(ForecastErrors::InvalidSeatCount {
                index: self._draws.len(),
                party: format!("#{}", self._parties.len() + 1),
            });
        }
        let pairs: Vec<(String, Seats)> = self
            ._parties
            .iter()
            .zip(seats.iter())
            .map(|(p, s)| (p.clone(), *s))
            .collect();
        self.add_draw(&pairs)
    }

    /// Adds a draw given as (party, seats) pairs. The parties do not need to
    /// be registered.
    pub fn add_draw(&mut self, seats: &[(String, Seats)]) -> Result<(), ForecastErrors> {
        let mut row = WideRow::default();
        for (party, s) in seats.iter() {
            if row.seats.insert(party.clone(), *s).is_some() {
                return Err(ForecastErrors::DuplicateParty {
                    bloc: format!("draw {}", self._draws.len()),
                    party: party.clone(),
                });
            }
        }
        self._draws.push(row);
        Ok(())
    }

    pub fn build_wide(self) -> WideDraws {
        WideDraws::new(self._draws)
    }

    pub fn build_long(self) -> LongDraws {
        self.build_wide().melt_long()
    }
}
