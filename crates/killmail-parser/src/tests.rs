//! Integration tests for the Parser

#[cfg(test)]
mod tests {
    use crate::{parse_killmail, KillmailParser, ParseError, ParserConfig};
    use killmail_domain::{Item, NO_FACTION};
    use pretty_assertions::assert_eq;

    const FULL_MAIL: &str = "2008.07.21 14:32

Victim: Jane Doe
Corp: Frontier Miners
Alliance: Deep Core Mining
Faction: NONE
Destroyed: Hulk
System: Rens
Security: 0.9
Damage Taken: 4821

Involved parties:

Name: Killer Bee (laid the final blow)
Security: -5.3
Corp: Stingers
Alliance: Hive
Faction: NONE
Ship: Thrasher
Weapon: 280mm Howitzer Artillery II
Damage Done: 3000

Name: Wingman
Security: 1.2
Corp: Stingers
Alliance: Hive
Faction: Minmatar Republic
Ship: Rifter
Weapon: Warrior I
Damage Done: 1821

Destroyed items:

Strip Miner I
Modulated Strip Miner II, Qty: 2
Hobgoblin I, Qty: 3 (Drone Bay)

Dropped items:

Veldspar, Qty: 5000 (Cargo)
Mining Laser Upgrade I
";

    #[test]
    fn test_full_killmail() {
        let report = parse_killmail(FULL_MAIL).unwrap();

        assert_eq!(report.timestamp, "2008.07.21 14:32");
        assert_eq!(report.victim.name, "Jane Doe");
        assert_eq!(report.victim.alliance, "Deep Core Mining");
        assert_eq!(report.victim.victim_details().unwrap().ship_destroyed, "Hulk");
        assert_eq!(report.victim.victim_details().unwrap().damage_taken, 4821);

        assert_eq!(report.attackers.len(), 2);
        assert_eq!(report.attackers[0].name, "Killer Bee");
        assert_eq!(report.attackers[1].name, "Wingman");
        assert_eq!(report.attackers[1].faction, "Minmatar Republic");
        assert_eq!(report.final_blow().unwrap().name, "Killer Bee");
        assert_eq!(report.total_damage_done(), 4821);

        assert_eq!(
            report.destroyed,
            vec![
                Item::new("Strip Miner I"),
                Item::new("Modulated Strip Miner II").with_quantity(2),
                Item::new("Hobgoblin I").with_quantity(3).in_drone_bay(),
            ]
        );
        assert_eq!(
            report.dropped,
            vec![
                Item::new("Veldspar").with_quantity(5000).in_cargo(),
                Item::new("Mining Laser Upgrade I"),
            ]
        );
    }

    #[test]
    fn test_crlf_killmail_matches_lf() {
        let crlf = FULL_MAIL.replace('\n', "\r\n");
        assert_eq!(parse_killmail(&crlf).unwrap(), parse_killmail(FULL_MAIL).unwrap());
    }

    #[test]
    fn test_zero_attackers() {
        let text = "2008.07.21 14:32

Victim: Jane Doe
Destroyed: Rifter

Involved parties:

Destroyed items:

Small Armor Repairer I
";
        let report = parse_killmail(text).unwrap();
        assert!(report.attackers.is_empty());
        assert_eq!(report.destroyed, vec![Item::new("Small Armor Repairer I")]);
        assert!(report.dropped.is_empty());
    }

    #[test]
    fn test_attackers_without_item_sections() {
        let text = "2008.07.21 14:32

Victim: Jane Doe

Involved parties:

Name: First

Name: Second (laid the final blow)
";
        let report = parse_killmail(text).unwrap();
        assert_eq!(report.attackers.len(), 2);
        assert!(report.destroyed.is_empty());
        assert!(report.dropped.is_empty());
        assert_eq!(report.final_blow().unwrap().name, "Second");
    }

    #[test]
    fn test_dropped_only() {
        let text = "2008.07.21 14:32

Victim: Jane Doe

Involved parties:

Name: First

Dropped items:

Tritanium, Qty: 500 (Cargo)
";
        let report = parse_killmail(text).unwrap();
        assert_eq!(report.attackers.len(), 1);
        assert!(report.destroyed.is_empty());
        assert_eq!(
            report.dropped,
            vec![Item::new("Tritanium").with_quantity(500).in_cargo()]
        );
    }

    #[test]
    fn test_victim_faction_not_taken_from_attackers() {
        let text = "2008.07.21 14:32

Victim: Jane Doe
Alliance: Deep Core Mining

Involved parties:

Name: First
Faction: Amarr Empire
";
        let report = parse_killmail(text).unwrap();
        assert_eq!(report.victim.faction, NO_FACTION);
        assert_eq!(report.attackers[0].faction, "Amarr Empire");
    }

    #[test]
    fn test_victim_only() {
        let report = parse_killmail("2008.07.21 14:32\n\nVictim: Jane Doe\n").unwrap();
        assert_eq!(report.victim.name, "Jane Doe");
        assert!(report.attackers.is_empty());
        assert_eq!(report.items().count(), 0);
    }

    #[test]
    fn test_extra_blank_lines_between_sections() {
        let text = FULL_MAIL.replace("\n\n", "\n\n\n  \n");
        assert_eq!(parse_killmail(&text).unwrap(), parse_killmail(FULL_MAIL).unwrap());
    }

    #[test]
    fn test_parser_uses_config_limit() {
        let parser = KillmailParser::new(ParserConfig { max_input_length: 64 });
        assert!(matches!(
            parser.parse(FULL_MAIL),
            Err(ParseError::InputTooLong(_, 64))
        ));
        assert!(KillmailParser::default_config().parse(FULL_MAIL).is_ok());
    }

    #[test]
    fn test_marker_directly_after_victim_lines() {
        let text = "2008.07.21 14:32

Victim: Jane Doe
Corp: Frontier Miners
Destroyed: Rifter
Involved parties:

Name: Killer Bee (laid the final blow)
Damage Done: 400

Destroyed items:

Small Armor Repairer I
";
        let report = parse_killmail(text).unwrap();
        assert_eq!(report.victim.name, "Jane Doe");
        assert_eq!(report.victim.corporation, "Frontier Miners");
        assert_eq!(report.victim.victim_details().unwrap().ship_destroyed, "Rifter");
        assert_eq!(report.attackers.len(), 1);
        assert_eq!(report.attackers[0].name, "Killer Bee");
        assert_eq!(report.destroyed, vec![Item::new("Small Armor Repairer I")]);
    }

    #[test]
    fn test_killmail_without_blank_lines() {
        let text = "2008.07.21 14:32
Victim: Jane Doe
Corp: Frontier Miners
Destroyed: Rifter
Damage Taken: 400
Involved parties:
Name: Killer Bee
Faction: Amarr Empire
";
        let report = parse_killmail(text).unwrap();
        assert_eq!(report.timestamp, "2008.07.21 14:32");
        assert_eq!(report.victim.name, "Jane Doe");
        assert_eq!(report.victim.corporation, "Frontier Miners");
        assert_eq!(report.victim.victim_details().unwrap().damage_taken, 400);
        assert_eq!(report.victim.faction, NO_FACTION);
    }

    #[test]
    fn test_victim_after_first_marker_is_still_found() {
        let text = "2008.07.21 14:32

Involved parties:

Victim: Jane Doe
Corp: Frontier Miners
";
        let report = parse_killmail(text).unwrap();
        assert_eq!(report.victim.name, "Jane Doe");
        assert_eq!(report.victim.corporation, "Frontier Miners");
    }
}
