//! Item line extraction

use killmail_domain::Item;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

/// Suffix marking an item held in the cargo hold
pub const CARGO_MARKER: &str = "(Cargo)";

/// Suffix marking an item held in the drone bay
pub const DRONE_BAY_MARKER: &str = "(Drone Bay)";

/// Lines shorter than this never describe an item
const MIN_ITEM_LINE_LEN: usize = 3;

lazy_static! {
    static ref QUANTITY_REGEX: Regex = Regex::new(r"Qty:\s*(\d+)").unwrap();
}

/// Parse one item line
///
/// The name is the text up to the first comma or parenthesis. A missing or
/// zero `Qty:` means a single item. Returns `None` for lines under three
/// characters or lines without a name.
///
/// # Examples
///
/// ```
/// use killmail_parser::extract_item;
///
/// let item = extract_item("Tritanium, Qty: 500 (Cargo)").unwrap();
/// assert_eq!(item.name, "Tritanium");
/// assert_eq!(item.quantity, 500);
/// assert!(item.in_cargo);
/// assert!(!item.in_drone_bay);
///
/// assert!(extract_item("ab").is_none());
/// ```
pub fn extract_item(line: &str) -> Option<Item> {
    if line.chars().count() < MIN_ITEM_LINE_LEN {
        return None;
    }

    let name = line
        .split(|c: char| matches!(c, ',' | '(' | '\r' | '\n'))
        .next()
        .unwrap_or_default()
        .trim();
    if name.is_empty() {
        return None;
    }

    let quantity: u64 = QUANTITY_REGEX
        .captures(line)
        .and_then(|caps| caps[1].parse().ok())
        .filter(|qty| *qty > 0)
        .unwrap_or(1);

    Some(Item {
        name: name.to_string(),
        quantity,
        in_cargo: line.contains(CARGO_MARKER),
        in_drone_bay: line.contains(DRONE_BAY_MARKER),
    })
}

/// Parse every item line of a paragraph, skipping lines that hold no item
pub fn extract_items(paragraph: &str) -> Vec<Item> {
    paragraph
        .lines()
        .filter_map(|line| {
            let item = extract_item(line);
            if item.is_none() && !line.trim().is_empty() {
                debug!("Skipping item line {:?}", line);
            }
            item
        })
        .collect()
}
