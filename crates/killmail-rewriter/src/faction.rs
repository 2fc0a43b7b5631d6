//! Faction recorded in the alliance field

use crate::rewriter::Rewriter;
use killmail_domain::{Participant, Report, NO_FACTION};
use tracing::info;

/// The four empires of factional warfare
pub const DEFAULT_FACTIONS: [&str; 4] = [
    "Amarr Empire",
    "Minmatar Republic",
    "Caldari State",
    "Gallente Federation",
];

/// Moves a faction name found in `alliance` over to `faction`
///
/// Some killmail tools wrote the militia faction into the alliance line.
/// When a participant's alliance is exactly one of the known factions, the
/// value becomes the faction and the alliance is reset to `NONE`.
#[derive(Debug, Clone)]
pub struct FactionalWarfareAlliances {
    factions: Vec<String>,
}

impl FactionalWarfareAlliances {
    /// Use a custom faction list
    pub fn new<I, S>(factions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            factions: factions.into_iter().map(Into::into).collect(),
        }
    }

    /// Factions this pass recognises
    pub fn factions(&self) -> &[String] {
        &self.factions
    }

    fn fix(&self, participant: &mut Participant) -> bool {
        if !self.factions.iter().any(|f| *f == participant.alliance) {
            return false;
        }
        info!(
            "Moving faction {:?} out of the alliance of {:?}",
            participant.alliance, participant.name
        );
        participant.faction = std::mem::replace(&mut participant.alliance, NO_FACTION.to_string());
        true
    }
}

impl Default for FactionalWarfareAlliances {
    fn default() -> Self {
        Self::new(DEFAULT_FACTIONS)
    }
}

impl Rewriter for FactionalWarfareAlliances {
    fn name(&self) -> &str {
        "factional_warfare_alliances"
    }

    fn rewrite(&self, report: &mut Report) -> usize {
        report
            .participants_mut()
            .map(|p| self.fix(p))
            .filter(|fixed| *fixed)
            .count()
    }
}
