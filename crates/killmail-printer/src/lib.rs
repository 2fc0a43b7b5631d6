//! Killmail Printer
//!
//! Renders a [`Report`](killmail_domain::Report) back into the standard
//! plain-text killmail layout, in a form the parser reads back to the same
//! report.
//!
//! # Example Usage
//!
//! ```
//! use killmail_domain::{Participant, Report, VictimDetails};
//! use killmail_printer::print_report;
//!
//! let report = Report::new(
//!     "2008.07.21 14:32",
//!     Participant::victim("Jane Doe", VictimDetails::default()),
//! );
//!
//! let text = print_report(&report);
//! assert!(text.starts_with("2008.07.21 14:32\n\nVictim: Jane Doe\n"));
//! ```

#![warn(missing_docs)]

mod standard;

pub use standard::{format_item, format_security, print_report, StandardPrinter};
