//! Killmail Domain Layer
//!
//! Typed records for a parsed killmail. This crate holds data only: the
//! parser, printer and rewriters live in their own crates and all work on
//! the types defined here.
//!
//! ## Key Concepts
//!
//! - **Report**: one parsed killmail, owning every nested record
//! - **Participant**: a victim or an attacker, sharing one field shape
//! - **Item**: a destroyed or dropped module, charge or cargo entry
//!
//! ## Ownership
//!
//! A `Report` exclusively owns its victim, attackers and items. There are no
//! back-references, so a report can be cloned, moved or mutated in place by a
//! single owner without any coordination.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod item;
pub mod participant;
pub mod report;

// Re-exports for convenience
pub use item::Item;
pub use participant::{AttackerDetails, Participant, Role, VictimDetails, NO_FACTION};
pub use report::Report;
