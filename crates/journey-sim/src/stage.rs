//! Sales funnel stages and the forward-progress transition rule
//!
//! Stages form a strict forward order from `New` to `Under Contract`, followed
//! by the absorbing `Converted` exit. `Lost` is a second absorbing exit that
//! only revival can leave, and `Won` is reachable only from `Converted`.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Probability that a negative signal sends a lead to `Lost`.
pub const LOSS_ON_NEGATIVE: f64 = 0.40;

/// Probability that a positive signal advances a lead one stage.
pub const ADVANCE_ON_POSITIVE: f64 = 0.70;

/// A discrete point in the sales funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    /// Fresh lead, no engagement yet
    #[serde(rename = "New")]
    New,
    /// Lead has asked a first question
    #[serde(rename = "Inquiry")]
    Inquiry,
    /// Lead is in a back-and-forth conversation
    #[serde(rename = "Engaged")]
    Engaged,
    /// Lead shows consistent interest
    #[serde(rename = "Warm")]
    Warm,
    /// Lead is actively evaluating options
    #[serde(rename = "Active")]
    Active,
    /// Lead is close to a decision
    #[serde(rename = "Hot")]
    Hot,
    /// Lead has signalled intent to commit
    #[serde(rename = "High Intent")]
    HighIntent,
    /// Terms are being finalized
    #[serde(rename = "Under Contract")]
    UnderContract,
    /// Lead converted (absorbing)
    #[serde(rename = "Converted")]
    Converted,
    /// Deal closed after conversion (absorbing)
    #[serde(rename = "Won")]
    Won,
    /// Lead dropped off (absorbing except for revival)
    #[serde(rename = "Lost")]
    Lost,
}

impl Stage {
    /// Forward-progress stages in canonical order, ending at the graduation
    /// stage.
    pub const FORWARD: [Stage; 8] = [
        Stage::New,
        Stage::Inquiry,
        Stage::Engaged,
        Stage::Warm,
        Stage::Active,
        Stage::Hot,
        Stage::HighIntent,
        Stage::UnderContract,
    ];

    /// Every stage, forward stages first.
    pub const ALL: [Stage; 11] = [
        Stage::New,
        Stage::Inquiry,
        Stage::Engaged,
        Stage::Warm,
        Stage::Active,
        Stage::Hot,
        Stage::HighIntent,
        Stage::UnderContract,
        Stage::Converted,
        Stage::Won,
        Stage::Lost,
    ];

    /// The last forward stage; a positive signal here always converts.
    pub const GRADUATION: Stage = Stage::UnderContract;

    /// Display label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Stage::New => "New",
            Stage::Inquiry => "Inquiry",
            Stage::Engaged => "Engaged",
            Stage::Warm => "Warm",
            Stage::Active => "Active",
            Stage::Hot => "Hot",
            Stage::HighIntent => "High Intent",
            Stage::UnderContract => "Under Contract",
            Stage::Converted => "Converted",
            Stage::Won => "Won",
            Stage::Lost => "Lost",
        }
    }

    /// True for `Converted`, `Won` and `Lost`.
    pub fn is_absorbing(self) -> bool {
        matches!(self, Stage::Converted | Stage::Won | Stage::Lost)
    }

    /// True when daily client and assistant activity is suspended.
    pub fn halts_activity(self) -> bool {
        matches!(self, Stage::Converted | Stage::Lost)
    }

    /// True for stages on the forward-progress path.
    pub fn is_forward(self) -> bool {
        !self.is_absorbing()
    }

    /// Position in [`Stage::FORWARD`], if this is a forward stage.
    pub fn forward_index(self) -> Option<usize> {
        Stage::FORWARD.iter().position(|s| *s == self)
    }

    /// The stage one step further along the funnel.
    ///
    /// Absorbing stages map to themselves.
    pub fn next_forward(self) -> Stage {
        match self {
            Stage::New => Stage::Inquiry,
            Stage::Inquiry => Stage::Engaged,
            Stage::Engaged => Stage::Warm,
            Stage::Warm => Stage::Active,
            Stage::Active => Stage::Hot,
            Stage::Hot => Stage::HighIntent,
            Stage::HighIntent => Stage::UnderContract,
            Stage::UnderContract => Stage::Converted,
            Stage::Converted | Stage::Won | Stage::Lost => self,
        }
    }

    /// Parse a display label (`"High Intent"`) or a snake_case key
    /// (`"high_intent"`).
    pub fn from_label(label: &str) -> Option<Stage> {
        let wanted = label.trim();
        Stage::ALL.into_iter().find(|stage| {
            stage.label().eq_ignore_ascii_case(wanted)
                || stage
                    .label()
                    .replace(' ', "_")
                    .eq_ignore_ascii_case(wanted)
        })
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Draw once against `probability`.
pub(crate) fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    rng.gen::<f64>() < probability
}

/// Compute the stage that follows `current` given a positive or negative
/// signal.
///
/// Absorbing stages never move. A negative signal sends the lead to `Lost`
/// with probability [`LOSS_ON_NEGATIVE`]. A positive signal at the graduation
/// stage always converts; anywhere else it advances exactly one stage with
/// probability [`ADVANCE_ON_POSITIVE`].
pub fn advance<R: Rng + ?Sized>(current: Stage, positive: bool, rng: &mut R) -> Stage {
    if current.is_absorbing() {
        return current;
    }

    if !positive {
        return if chance(rng, LOSS_ON_NEGATIVE) {
            Stage::Lost
        } else {
            current
        };
    }

    if current == Stage::GRADUATION {
        return Stage::Converted;
    }

    if chance(rng, ADVANCE_ON_POSITIVE) {
        current.next_forward()
    } else {
        current
    }
}
