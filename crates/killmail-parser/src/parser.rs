//! Report parser: segmentation plus per-section extraction

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::item::extract_items;
use crate::participant::{extract_attacker, extract_victim};
use crate::segment::{split_paragraphs, Section, SectionLayout};
use killmail_domain::{Item, Participant, Report};
use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;
use tracing::{debug, warn};

lazy_static! {
    // Year, month and day, optionally a time, at the end of a line
    static ref TIMESTAMP_REGEX: Regex = Regex::new(
        r"(?m)(\d{4}[./-]\d{2}[./-]\d{2}(?:[ T]\d{2}:\d{2}(?::\d{2})?)?)[ \t]*\r?$"
    )
    .unwrap();
}

/// Last date token that ends a line
pub fn extract_timestamp(text: &str) -> Option<&str> {
    TIMESTAMP_REGEX
        .captures_iter(text)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parses plain-text killmails into [`Report`]s
#[derive(Debug, Clone, Default)]
pub struct KillmailParser {
    config: ParserConfig,
}

impl KillmailParser {
    /// Create a parser with the given configuration
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Create a parser with default configuration
    pub fn default_config() -> Self {
        Self::new(ParserConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a killmail
    ///
    /// Fails when the timestamp or the victim cannot be found. No partial
    /// report is returned.
    pub fn parse(&self, text: &str) -> Result<Report, ParseError> {
        if text.len() > self.config.max_input_length {
            warn!(
                "Rejecting killmail of {} bytes (max {})",
                text.len(),
                self.config.max_input_length
            );
            return Err(ParseError::InputTooLong(
                text.len(),
                self.config.max_input_length,
            ));
        }

        let timestamp = extract_timestamp(text).ok_or(ParseError::MissingTimestamp)?;

        let paragraphs = split_paragraphs(text);
        let layout = SectionLayout::locate(&paragraphs);
        debug!(
            "Split killmail into {} paragraphs: {:?}",
            paragraphs.len(),
            layout
        );

        let header_lines = header_lines(&paragraphs, &layout);
        let victim = match extract_victim(&header_lines) {
            Some(victim) => victim,
            None => {
                debug!("No victim in the header, searching the whole killmail");
                let all_lines: Vec<&str> = text.lines().collect();
                extract_victim(&all_lines).ok_or(ParseError::MissingVictim)?
            }
        };

        let attackers = layout
            .range(Section::Attackers)
            .map(|range| attackers_in(&paragraphs, range))
            .unwrap_or_default();
        let destroyed = layout
            .range(Section::Destroyed)
            .map(|range| items_in(&paragraphs, range))
            .unwrap_or_default();
        let dropped = layout
            .range(Section::Dropped)
            .map(|range| items_in(&paragraphs, range))
            .unwrap_or_default();

        debug!(
            "Parsed killmail of {}: {} attackers, {} destroyed, {} dropped",
            victim.name,
            attackers.len(),
            destroyed.len(),
            dropped.len()
        );

        Ok(Report {
            timestamp: timestamp.to_string(),
            victim,
            attackers,
            destroyed,
            dropped,
        })
    }
}

/// Parse a killmail with the default configuration
pub fn parse_killmail(text: &str) -> Result<Report, ParseError> {
    KillmailParser::default_config().parse(text)
}

/// Lines before the first marker, including the start of its paragraph
fn header_lines<'a>(paragraphs: &[&'a str], layout: &SectionLayout) -> Vec<&'a str> {
    let mut lines = lines_of(paragraphs, layout.header_range());
    if let Some(first) = layout.first_marker() {
        lines.extend(paragraphs[first.paragraph][..first.offset].lines());
    }
    lines
}

fn lines_of<'a>(paragraphs: &[&'a str], range: Range<usize>) -> Vec<&'a str> {
    paragraphs[range]
        .iter()
        .flat_map(|paragraph| paragraph.lines())
        .collect()
}

fn attackers_in(paragraphs: &[&str], range: Range<usize>) -> Vec<Participant> {
    paragraphs[range]
        .iter()
        .filter(|paragraph| !paragraph.trim().is_empty())
        .map(|paragraph| {
            let lines: Vec<&str> = paragraph.lines().collect();
            extract_attacker(&lines)
        })
        .collect()
}

fn items_in(paragraphs: &[&str], range: Range<usize>) -> Vec<Item> {
    paragraphs[range]
        .iter()
        .flat_map(|paragraph| extract_items(paragraph))
        .collect()
}
