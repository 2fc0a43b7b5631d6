//! Keyword-line lookup and value coercion shared by every field extractor

/// First line containing `keyword`, like `grep -m1`
pub fn find_line<'a, I>(keyword: &str, lines: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().find(|line| line.contains(keyword))
}

/// Value of the first `Key: value` line for `key`
///
/// Everything after the first `Key:` on the matching line is returned,
/// trimmed. `None` when no line carries the key.
pub fn field_value<'a>(key: &str, lines: &[&'a str]) -> Option<&'a str> {
    let prefix = format!("{}:", key);
    let line = find_line(&prefix, lines.iter().copied())?;
    line.find(&prefix)
        .map(|idx| line[idx + prefix.len()..].trim())
}

/// String field, empty when absent
pub fn string_field(key: &str, lines: &[&str]) -> String {
    field_value(key, lines).unwrap_or_default().to_string()
}

/// Integer field, 0 when absent or unparsable
pub fn int_field(key: &str, lines: &[&str]) -> u64 {
    field_value(key, lines).map(coerce_int).unwrap_or(0)
}

/// Float field, 0.0 when absent or unparsable
pub fn float_field(key: &str, lines: &[&str]) -> f64 {
    field_value(key, lines).map(coerce_float).unwrap_or(0.0)
}

/// Parse the leading run of digits, 0 if there is none
///
/// Counts are unsigned, so a leading sign also yields 0.
pub fn coerce_int(value: &str) -> u64 {
    let digits: String = value
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Parse the longest leading decimal number, 0.0 if there is none
pub fn coerce_float(value: &str) -> f64 {
    let value = value.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    for (idx, c) in value.char_indices() {
        match c {
            '-' | '+' if idx == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            c if c.is_ascii_digit() => {}
            _ => break,
        }
        end = idx + c.len_utf8();
    }

    // Shrink until it parses, "5." and "-" are valid prefixes but not numbers
    let mut candidate = &value[..end];
    while !candidate.is_empty() {
        if let Ok(parsed) = candidate.parse::<f64>() {
            return parsed;
        }
        candidate = &candidate[..candidate.len() - 1];
    }
    0.0
}
