//! Killmail Parser
//!
//! Converts a plain-text killmail into a typed [`Report`](killmail_domain::Report).
//!
//! # Overview
//!
//! The text export has no grammar. It is a sequence of blank-line separated
//! paragraphs: a timestamp, the victim header, and then three optional
//! sections opened by the marker phrases `Involved parties`,
//! `Destroyed items` and `Dropped items`. Fields are `Key: value` lines found
//! by keyword, and items are one per line.
//!
//! # Architecture
//!
//! ```text
//! Text → split_paragraphs → SectionLayout → extract_victim / extract_attacker / extract_item → Report
//! ```
//!
//! # Example Usage
//!
//! ```
//! use killmail_parser::parse_killmail;
//!
//! let text = "2008.07.21 14:32\n\n\
//!             Victim: Jane Doe\nCorp: Frontier Miners\nDestroyed: Rifter\n\n\
//!             Involved parties:\n\n\
//!             Name: Killer Bee (laid the final blow)\nDamage Done: 400\n\n\
//!             Destroyed items:\n\n\
//!             200mm AutoCannon I\n";
//!
//! let report = parse_killmail(text).unwrap();
//! assert_eq!(report.victim.name, "Jane Doe");
//! assert_eq!(report.attackers.len(), 1);
//! assert_eq!(report.destroyed.len(), 1);
//! assert!(report.dropped.is_empty());
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod item;
mod lookup;
mod parser;
mod participant;
mod segment;

#[cfg(test)]
mod tests;

pub use config::ParserConfig;
pub use error::ParseError;
pub use item::{extract_item, extract_items, CARGO_MARKER, DRONE_BAY_MARKER};
pub use lookup::{field_value, find_line};
pub use parser::{extract_timestamp, parse_killmail, KillmailParser};
pub use participant::{extract_attacker, extract_victim, FINAL_BLOW_MARKER};
pub use segment::{
    split_paragraphs, MarkerPosition, Section, SectionLayout, DESTROYED_MARKER, DROPPED_MARKER,
    INVOLVED_MARKER,
};
