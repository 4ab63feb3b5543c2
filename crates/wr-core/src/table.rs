//! The weather table.
//!
//! Nine weather events, each named for the deity who sends it and each
//! lasting a number of days rolled on its own die. The table is plain data:
//! editing an entry never touches the roller or the simulator.

use serde::Serialize;

use crate::dice::Die;
use crate::error::{WeatherError, WeatherResult};

/// A single entry in the weather table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherEvent {
    /// Table id (1-9), matching the d10 face that selects it.
    pub id: u32,
    /// Display title, e.g. "Kali's Tears".
    pub title: &'static str,
    /// Narrative and mechanical effect read to the players.
    pub narrative: &'static str,
    /// Die rolled for the event's duration in days.
    pub die: Die,
}

impl WeatherEvent {
    /// Largest duration this event can roll.
    pub fn die_max(&self) -> u32 {
        self.die.sides()
    }
}

/// Number of regular events in the table.
pub const EVENT_COUNT: u32 = 9;

/// Title of the combined event rolled on a 10.
pub const NYX_TITLE: &str = "Nyx's Game";

static WEATHER_TABLE: [WeatherEvent; EVENT_COUNT as usize] = [
    WeatherEvent {
        id: 1,
        title: "Bleck's Shade",
        narrative: "Shadows stretch unnaturally. The first short rest the party takes each day may be completed in 5 minutes.",
        die: Die::D4,
    },
    WeatherEvent {
        id: 2,
        title: "Azrah's Winds",
        narrative: "A gentle tailwind urges travelers onward. All creatures gain +5 feet to base movement speed.",
        die: Die::D6,
    },
    WeatherEvent {
        id: 3,
        title: "Kali's Tears",
        narrative: "Steady rainfall blesses the earth. The land becomes dotted with clean water sources, sufficient for safe drinking.",
        die: Die::D8,
    },
    WeatherEvent {
        id: 4,
        title: "Maeoria's Clouds",
        narrative: "The sky is overcast with peaceful gray. On the first Wisdom saving throw each day, each creature gains advantage.",
        die: Die::D10,
    },
    WeatherEvent {
        id: 5,
        title: "Hush's Emptiness",
        narrative: "A cloudless silence. Bright sun counts as bright light; spotting illusions is at disadvantage due to the intense glare and stillness.",
        die: Die::D12,
    },
    WeatherEvent {
        id: 6,
        title: "IA's Fog",
        narrative: "A thin mist obscures all. Vision beyond 30 feet is lightly obscured. Perception checks relying on sight are at disadvantage past that.",
        die: Die::D12,
    },
    WeatherEvent {
        id: 7,
        title: "Suthis' Scorcher",
        narrative: "A relentless desert sun. Unshaded creatures take 1d6 fire damage per hour of travel (enhanced: 1d12 in desert regions).",
        die: Die::D10,
    },
    WeatherEvent {
        id: 8,
        title: "Uni's Rot",
        narrative: "Decay clings to wounds. If a creature is bloodied, it takes 1d4 necrotic damage at the start of its turn.",
        die: Die::D8,
    },
    WeatherEvent {
        id: 9,
        title: "Daunthurge's Long Day",
        narrative: "Time stretches painfully. Gain 1 level of exhaustion per day, max 1 from this effect.",
        die: Die::D6,
    },
];

/// Look up a weather event by id.
pub fn lookup(id: u32) -> WeatherResult<&'static WeatherEvent> {
    id.checked_sub(1)
        .and_then(|idx| WEATHER_TABLE.get(idx as usize))
        .ok_or(WeatherError::InvalidEventId(id))
}

/// All weather events in id order.
pub fn all() -> &'static [WeatherEvent] {
    &WEATHER_TABLE
}
