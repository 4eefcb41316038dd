use serde::{Deserialize, Serialize};

use super::types::TimeInstant;

/// Visual prominence of a tick, ordered `Minor < Major < Mega < Maxi`.
///
/// The discriminant is the ordinal, so "never demote" is `max(existing, new)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TickLevel {
    Minor = 0,
    Major = 1,
    Mega = 2,
    Maxi = 3,
}

impl TickLevel {
    /// Next level up, saturating at `Maxi`.
    #[must_use]
    pub fn promoted(self) -> Self {
        match self {
            Self::Minor => Self::Major,
            Self::Major => Self::Mega,
            Self::Mega | Self::Maxi => Self::Maxi,
        }
    }

    /// Whether the renderer should draw this level's label.
    #[must_use]
    pub fn shows_label(self) -> bool {
        self != Self::Minor
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    pub instant: TimeInstant,
    pub label: String,
    pub level: TickLevel,
    pub dashed: bool,
}

impl Tick {
    #[must_use]
    pub fn new(instant: TimeInstant, label: impl Into<String>, level: TickLevel) -> Self {
        Self {
            instant,
            label: label.into(),
            level,
            dashed: false,
        }
    }

    #[must_use]
    pub fn with_dashed(mut self, dashed: bool) -> Self {
        self.dashed = dashed;
        self
    }
}
