//! Weather rolls.
//!
//! A d10 picks the weather: faces 1-9 select an entry from the table and
//! its own die sets the duration. A 10 is Nyx's Game, where two different
//! weathers hold at once for a d4 days.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::dice::Die;
use crate::error::WeatherResult;
use crate::random::RandomSource;
use crate::table::{self, EVENT_COUNT, NYX_TITLE};

/// The d10 face that triggers Nyx's Game.
pub const NYX_FACE: u32 = 10;

/// Which table entries a roll produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RollKind {
    /// A single weather event.
    Single {
        /// Table id of the event.
        event_id: u32,
    },
    /// Nyx's Game: two distinct events at once.
    Combined {
        /// Table id of the first event.
        first: u32,
        /// Table id of the second event.
        second: u32,
    },
}

/// The result of one weather roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Which events were rolled.
    pub kind: RollKind,
    /// Fully formatted description, including the duration.
    pub text: String,
    /// How many days the weather lasts (at least 1).
    pub duration_days: u32,
}

impl RollOutcome {
    /// Short heading, e.g. "Kali's Tears" or "Nyx's Game: Uni's Rot & IA's Fog".
    pub fn headline(&self) -> String {
        match self.kind {
            RollKind::Single { event_id } => title_of(event_id).to_string(),
            RollKind::Combined { first, second } => {
                format!("{NYX_TITLE}: {} & {}", title_of(first), title_of(second))
            }
        }
    }
}

fn title_of(id: u32) -> &'static str {
    table::lookup(id).map_or("Unknown", |e| e.title)
}

/// Something that yields weather outcomes, one per call.
///
/// The simulator only needs this seam, so tests can force exact durations.
pub trait WeatherSource {
    /// Produce the next weather outcome.
    fn roll(&mut self) -> WeatherResult<RollOutcome>;
}

/// Rolls weather from the table using an injected random source.
#[derive(Debug, Clone)]
pub struct WeatherRoller<R> {
    rng: R,
}

impl<R: RandomSource> WeatherRoller<R> {
    /// Create a roller drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Give back the random source.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RandomSource> WeatherSource for WeatherRoller<R> {
    fn roll(&mut self) -> WeatherResult<RollOutcome> {
        roll_once(&mut self.rng)
    }
}

/// Roll the weather once.
pub fn roll_once<R: RandomSource + ?Sized>(rng: &mut R) -> WeatherResult<RollOutcome> {
    let face = rng.roll_die(Die::D10)?;
    trace!(face, "weather face rolled");
    if face == NYX_FACE {
        roll_combined(rng)
    } else {
        roll_single(rng, face)
    }
}

fn roll_single<R: RandomSource + ?Sized>(rng: &mut R, id: u32) -> WeatherResult<RollOutcome> {
    let event = table::lookup(id)?;
    let duration = roll_duration(rng, event.die)?;
    Ok(RollOutcome {
        kind: RollKind::Single { event_id: id },
        text: format!(
            "{}:\n{}\n\n{}",
            event.title,
            event.narrative,
            duration_line(duration)
        ),
        duration_days: duration,
    })
}

fn roll_combined<R: RandomSource + ?Sized>(rng: &mut R) -> WeatherResult<RollOutcome> {
    let mut ids: Vec<u32> = (1..=EVENT_COUNT).collect();
    rng.shuffle(&mut ids)?;
    let first = table::lookup(ids[0])?;
    let second = table::lookup(ids[1])?;
    let duration = roll_duration(rng, Die::D4)?;
    Ok(RollOutcome {
        kind: RollKind::Combined {
            first: first.id,
            second: second.id,
        },
        text: format!(
            "{NYX_TITLE}: {} & {}\n\n{}\n   ~and~ \n{}\n\n{}",
            first.title,
            second.title,
            first.narrative,
            second.narrative,
            duration_line(duration)
        ),
        duration_days: duration,
    })
}

// Scripted sources return values verbatim; keep durations on the die.
fn roll_duration<R: RandomSource + ?Sized>(rng: &mut R, die: Die) -> WeatherResult<u32> {
    Ok(rng.roll_die(die)?.clamp(1, die.sides()))
}

// Plural even for a single day.
fn duration_line(days: u32) -> String {
    format!("Duration: {days} days")
}
