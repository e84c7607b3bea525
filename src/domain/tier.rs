//! Value tiers used by the tier table.

use std::fmt;

/// Lower bound (inclusive) of the `SS` tier.
pub const SS_FLOOR: u64 = 100_000_000;
/// Lower bound (inclusive) of the `S` tier.
pub const S_FLOOR: u64 = 20_000_000;
/// Lower bound (inclusive) of the `A` tier.
pub const A_FLOOR: u64 = 5_000_000;
/// Lower bound (inclusive) of the `B` tier.
pub const B_FLOOR: u64 = 1_000_000;

/// Ordinal value band. Declared lowest first so the derived `Ord` gives
/// `SS > S > A > B > C`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    C,
    B,
    A,
    S,
    SS,
}

impl Tier {
    /// All tiers, highest first (tab order).
    pub const ALL: [Tier; 5] = [Tier::SS, Tier::S, Tier::A, Tier::B, Tier::C];

    pub fn classify(value: u64) -> Tier {
        if value >= SS_FLOOR {
            Tier::SS
        } else if value >= S_FLOOR {
            Tier::S
        } else if value >= A_FLOOR {
            Tier::A
        } else if value >= B_FLOOR {
            Tier::B
        } else {
            Tier::C
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::SS => "SS",
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Tier::SS => "💎",
            Tier::S => "🥇",
            Tier::A => "🥈",
            Tier::B => "🥉",
            Tier::C => "🧱",
        }
    }

    /// Position in `Tier::ALL`.
    pub fn index(&self) -> usize {
        match self {
            Tier::SS => 0,
            Tier::S => 1,
            Tier::A => 2,
            Tier::B => 3,
            Tier::C => 4,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
