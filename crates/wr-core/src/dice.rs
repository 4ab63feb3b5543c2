//! Polyhedral dice used by the weather table.
//!
//! Every weather event lasts for a number of days rolled on one of these
//! dice. The roller itself uses a d10 to pick the event and a d4 for the
//! duration of Nyx's Game.

use serde::{Deserialize, Serialize};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_sides() {
        assert_eq!(Die::D4.sides(), 4);
        assert_eq!(Die::D6.sides(), 6);
        assert_eq!(Die::D8.sides(), 8);
        assert_eq!(Die::D10.sides(), 10);
        assert_eq!(Die::D12.sides(), 12);
    }

    #[test]
    fn die_display() {
        assert_eq!(Die::D4.to_string(), "d4");
        assert_eq!(Die::D10.to_string(), "d10");
    }
}
