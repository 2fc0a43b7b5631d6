//! Standard killmail layout, with factional warfare lines

use killmail_domain::{Item, Participant, Report, Role};

const FINAL_BLOW_SUFFIX: &str = " (laid the final blow)";

/// Writes reports in the standard layout
#[derive(Debug, Default)]
pub struct StandardPrinter {
    mail: String,
}

impl StandardPrinter {
    /// Create an empty printer
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a report
    ///
    /// The timestamp comes first, then the victim block, the attacker blocks
    /// and both item lists, each under its marker line.
    pub fn print(mut self, report: &Report) -> String {
        self.insert(&report.timestamp);
        self.newline();
        self.insert_victim(&report.victim);
        self.newline();
        self.insert("Involved parties:");
        self.newline();
        for attacker in &report.attackers {
            self.insert_attacker(attacker);
            self.newline();
        }
        self.newline();
        self.insert("Destroyed items:");
        self.newline();
        for item in &report.destroyed {
            self.insert(&format_item(item));
        }
        self.newline();
        self.insert("Dropped items:");
        self.newline();
        for item in &report.dropped {
            self.insert(&format_item(item));
        }
        self.mail
    }

    fn insert_victim(&mut self, victim: &Participant) {
        self.insert(&format!("Victim: {}", victim.name));
        self.insert(&format!("Alliance: {}", victim.alliance));
        self.insert(&format!("Faction: {}", victim.faction));
        self.insert(&format!("Corp: {}", victim.corporation));
        if let Some(details) = victim.victim_details() {
            self.insert(&format!("Destroyed: {}", details.ship_destroyed));
            self.insert(&format!("System: {}", details.system));
            if !details.moon.is_empty() {
                self.insert(&format!("Moon: {}", details.moon));
            }
        }
        self.insert(&format!("Security: {}", format_security(victim.security_status)));
        let damage_taken = victim.victim_details().map_or(0, |d| d.damage_taken);
        self.insert(&format!("Damage Taken: {}", damage_taken));
    }

    fn insert_attacker(&mut self, attacker: &Participant) {
        let Role::Attacker(details) = &attacker.role else {
            return;
        };

        let suffix = if details.final_blow { FINAL_BLOW_SUFFIX } else { "" };
        self.insert(&format!("Name: {}{}", attacker.name, suffix));
        self.insert(&format!("Security: {}", format_security(attacker.security_status)));
        self.insert(&format!("Alliance: {}", attacker.alliance));
        self.insert(&format!("Faction: {}", attacker.faction));
        self.insert(&format!("Corp: {}", attacker.corporation));
        self.insert(&format!("Ship: {}", details.ship));
        self.insert(&format!("Weapon: {}", details.weapon));
        self.insert(&format!("Damage Done: {}", details.damage_done));
    }

    fn newline(&mut self) {
        self.mail.push('\n');
    }

    /// Append a line; blank lines are dropped, use `newline` for spacing
    fn insert(&mut self, line: &str) {
        let line = line.trim_end();
        if line.trim_start().is_empty() {
            return;
        }
        self.mail.push_str(line);
        self.newline();
    }
}

/// Render a report with a fresh [`StandardPrinter`]
pub fn print_report(report: &Report) -> String {
    StandardPrinter::new().print(report)
}

/// One item line: name, quantity when above one, then location suffixes
pub fn format_item(item: &Item) -> String {
    let mut line = item.name.clone();
    if item.quantity > 1 {
        line.push_str(&format!(", Qty: {}", item.quantity));
    }
    if item.in_cargo {
        line.push_str(" (Cargo)");
    }
    if item.in_drone_bay {
        line.push_str(" (Drone Bay)");
    }
    line
}

/// Security status with at least one decimal place
pub fn format_security(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
