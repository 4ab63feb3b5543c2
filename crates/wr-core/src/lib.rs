//! Weather generator core for tabletop campaigns.
//!
//! Rolls weather from a fixed nine-entry table (plus Nyx's Game, which
//! combines two entries), maps day counts onto a 360-day campaign calendar,
//! and chains rolls into a clipped multi-day weather log. Randomness is
//! injected through [`RandomSource`] and [`WeatherSource`]; the crate does
//! no I/O.

pub mod calendar;
pub mod config;
pub mod dice;
pub mod error;
pub mod random;
pub mod roller;
pub mod simulator;
pub mod table;


pub use calendar::{CalendarDate, to_absolute_day, to_date};
pub use config::WeatherConfig;
pub use dice::Die;
pub use error::{WeatherError, WeatherResult};
pub use random::{RandomSource, ScriptedSource};
pub use roller::{RollKind, RollOutcome, WeatherRoller, WeatherSource, roll_once};
pub use simulator::{Segment, SimulationLog, simulate, simulate_from};
pub use table::WeatherEvent;
