//! Participant module - victims and attackers

use serde::{Deserialize, Serialize};

/// Faction value used when a pilot is not enlisted in factional warfare
pub const NO_FACTION: &str = "NONE";

/// A pilot involved in a kill
///
/// Victims and attackers share the same affiliation fields; everything that
/// only makes sense for one side lives in [`Role`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Character name
    pub name: String,

    /// Security status of the character
    pub security_status: f64,

    /// Corporation name
    pub corporation: String,

    /// Alliance name
    pub alliance: String,

    /// Factional warfare faction, `NONE` when not enlisted
    pub faction: String,

    /// Victim or attacker specific fields
    pub role: Role,
}

/// Side-specific fields of a participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Role {
    /// The pilot that lost the ship
    Victim(VictimDetails),
    /// A pilot on the kill
    Attacker(AttackerDetails),
}

/// Fields only the victim carries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VictimDetails {
    /// Type name of the destroyed ship or structure
    pub ship_destroyed: String,

    /// Solar system the kill happened in
    pub system: String,

    /// Moon, for structure kills
    pub moon: String,

    /// Total damage taken
    pub damage_taken: u64,
}

/// Fields only an attacker carries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttackerDetails {
    /// Type name of the attacking ship
    pub ship: String,

    /// Weapon used
    pub weapon: String,

    /// Damage dealt by this attacker
    pub damage_done: u64,

    /// Whether this attacker laid the final blow
    pub final_blow: bool,
}

impl Participant {
    /// Create a victim with empty affiliations
    ///
    /// # Examples
    ///
    /// ```
    /// use killmail_domain::{Participant, VictimDetails, NO_FACTION};
    ///
    /// let victim = Participant::victim("Jane Doe", VictimDetails::default());
    /// assert!(victim.is_victim());
    /// assert_eq!(victim.faction, NO_FACTION);
    /// ```
    pub fn victim(name: impl Into<String>, details: VictimDetails) -> Self {
        Self::with_role(name, Role::Victim(details))
    }

    /// Create an attacker with empty affiliations
    pub fn attacker(name: impl Into<String>, details: AttackerDetails) -> Self {
        Self::with_role(name, Role::Attacker(details))
    }

    fn with_role(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            security_status: 0.0,
            corporation: String::new(),
            alliance: String::new(),
            faction: NO_FACTION.to_string(),
            role,
        }
    }

    /// True when this participant is the victim
    pub fn is_victim(&self) -> bool {
        matches!(self.role, Role::Victim(_))
    }

    /// Victim fields, if this is the victim
    pub fn victim_details(&self) -> Option<&VictimDetails> {
        match &self.role {
            Role::Victim(details) => Some(details),
            Role::Attacker(_) => None,
        }
    }

    /// Mutable victim fields, if this is the victim
    pub fn victim_details_mut(&mut self) -> Option<&mut VictimDetails> {
        match &mut self.role {
            Role::Victim(details) => Some(details),
            Role::Attacker(_) => None,
        }
    }

    /// Attacker fields, if this is an attacker
    pub fn attacker_details(&self) -> Option<&AttackerDetails> {
        match &self.role {
            Role::Attacker(details) => Some(details),
            Role::Victim(_) => None,
        }
    }

    /// Mutable attacker fields, if this is an attacker
    pub fn attacker_details_mut(&mut self) -> Option<&mut AttackerDetails> {
        match &mut self.role {
            Role::Attacker(details) => Some(details),
            Role::Victim(_) => None,
        }
    }

    /// Whether the pilot is enlisted in a faction
    pub fn has_faction(&self) -> bool {
        !self.faction.is_empty() && self.faction != NO_FACTION
    }
}
