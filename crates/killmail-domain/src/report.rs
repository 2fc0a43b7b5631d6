//! Report module - the top-level parse result

use crate::{Item, Participant};
use serde::{Deserialize, Serialize};

/// A fully parsed killmail
///
/// The victim is always present. Attackers and both item lists keep the
/// order in which they appear in the source text and may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Date token of the kill, kept verbatim
    pub timestamp: String,

    /// The pilot that lost the ship
    pub victim: Participant,

    /// Pilots on the kill, in source order
    pub attackers: Vec<Participant>,

    /// Items destroyed with the ship
    pub destroyed: Vec<Item>,

    /// Items that dropped into the wreck
    pub dropped: Vec<Item>,
}

impl Report {
    /// Create a report with no attackers and no items
    pub fn new(timestamp: impl Into<String>, victim: Participant) -> Self {
        Self {
            timestamp: timestamp.into(),
            victim,
            attackers: Vec::new(),
            destroyed: Vec::new(),
            dropped: Vec::new(),
        }
    }

    /// All items, destroyed first and then dropped
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.destroyed.iter().chain(self.dropped.iter())
    }

    /// The attacker credited with the final blow, if any
    pub fn final_blow(&self) -> Option<&Participant> {
        self.attackers
            .iter()
            .find(|a| a.attacker_details().is_some_and(|d| d.final_blow))
    }

    /// Sum of damage done by all attackers
    pub fn total_damage_done(&self) -> u64 {
        self.attackers
            .iter()
            .filter_map(|a| a.attacker_details())
            .map(|d| d.damage_done)
            .sum()
    }

    /// Every participant, victim first
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        std::iter::once(&self.victim).chain(self.attackers.iter())
    }

    /// Every participant, victim first, for in-place corrections
    pub fn participants_mut(&mut self) -> impl Iterator<Item = &mut Participant> {
        std::iter::once(&mut self.victim).chain(self.attackers.iter_mut())
    }
}
