//! Killmail Rewriter
//!
//! Correction passes for killmails with known data-entry mistakes.
//!
//! A rewriter never patches text. The raw killmail is parsed first and each
//! [`Rewriter`] then fixes the parsed [`Report`](killmail_domain::Report) in
//! place. New corrections are added as new `Rewriter` implementations and
//! combined through a [`RewritePipeline`].
//!
//! # Examples
//!
//! ```
//! use killmail_rewriter::fix_faction_alliances;
//!
//! let text = "2008.07.21 14:32\n\nVictim: Jane Doe\nAlliance: Caldari State\n";
//! let report = fix_faction_alliances(text).unwrap();
//!
//! assert_eq!(report.victim.faction, "Caldari State");
//! assert_eq!(report.victim.alliance, "NONE");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod faction;
mod rewriter;

pub use config::RewriterConfig;
pub use error::RewriteError;
pub use faction::{FactionalWarfareAlliances, DEFAULT_FACTIONS};
pub use rewriter::{RewritePipeline, RewriteSummary, Rewriter};

use killmail_domain::Report;
use killmail_parser::KillmailParser;

/// Parse a raw killmail and run the pipeline over it
pub fn rewrite_killmail(
    text: &str,
    pipeline: &RewritePipeline,
) -> Result<(Report, RewriteSummary), RewriteError> {
    rewrite_killmail_with(&KillmailParser::default_config(), text, pipeline)
}

/// Like [`rewrite_killmail`], with a configured parser
pub fn rewrite_killmail_with(
    parser: &KillmailParser,
    text: &str,
    pipeline: &RewritePipeline,
) -> Result<(Report, RewriteSummary), RewriteError> {
    let report = parser.parse(text)?;
    Ok(pipeline.apply(report))
}

/// Parse a raw killmail and move faction names out of the alliance field
pub fn fix_faction_alliances(text: &str) -> Result<Report, RewriteError> {
    let pipeline = RewritePipeline::new().with(FactionalWarfareAlliances::default());
    rewrite_killmail(text, &pipeline).map(|(report, _)| report)
}
