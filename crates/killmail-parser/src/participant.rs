//! Victim and attacker extraction from keyword lines

use crate::lookup::{field_value, float_field, int_field, string_field};
use killmail_domain::{AttackerDetails, Participant, VictimDetails, NO_FACTION};

/// Phrase appended to the name of the attacker that laid the final blow
pub const FINAL_BLOW_MARKER: &str = "(laid the final blow)";

/// Build the victim from the victim header lines
///
/// Returns `None` when no `Victim:` line is present.
pub fn extract_victim(lines: &[&str]) -> Option<Participant> {
    let name = field_value("Victim", lines)?;

    let details = VictimDetails {
        ship_destroyed: string_field("Destroyed", lines),
        system: string_field("System", lines),
        moon: string_field("Moon", lines),
        damage_taken: int_field("Damage Taken", lines),
    };

    let mut victim = Participant::victim(name, details);
    fill_affiliations(&mut victim, lines);
    Some(victim)
}

/// Build one attacker from its paragraph lines
///
/// Every field is optional; an attacker block without a `Name:` line yields
/// an attacker with an empty name.
pub fn extract_attacker(lines: &[&str]) -> Participant {
    let final_blow = lines.iter().any(|line| line.contains(FINAL_BLOW_MARKER));
    let name = field_value("Name", lines)
        .unwrap_or_default()
        .replace(FINAL_BLOW_MARKER, "")
        .trim()
        .to_string();

    let details = AttackerDetails {
        ship: string_field("Ship", lines),
        weapon: string_field("Weapon", lines),
        damage_done: int_field("Damage Done", lines),
        final_blow,
    };

    let mut attacker = Participant::attacker(name, details);
    fill_affiliations(&mut attacker, lines);
    attacker
}

/// Fields shared by victims and attackers
fn fill_affiliations(participant: &mut Participant, lines: &[&str]) {
    participant.security_status = float_field("Security", lines);
    participant.corporation = string_field("Corp", lines);
    participant.alliance = string_field("Alliance", lines);
    participant.faction = field_value("Faction", lines)
        .filter(|f| !f.is_empty())
        .unwrap_or(NO_FACTION)
        .to_string();
}
