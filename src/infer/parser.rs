//! Parsing of model-produced quantity lists.
//!
//! The model is asked for one `name: quantity` pair per line, but the reply
//! is untrusted free text. A candidate line is any line containing a colon;
//! candidates that fail to yield a usable quantity are skipped and counted,
//! never fatal. Prose lines without a colon are ignored outright — chat
//! models routinely wrap answers in prose.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

/// Leading numeric token of the text after the colon, e.g. `120` in
/// `"120 units (framing)"`.
static QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\$?(\d+(?:\.\d+)?)").expect("quantity regex"));

/// One successfully parsed `name: quantity` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityEntry {
    pub name: String,
    pub quantity: Decimal,
}

/// A candidate line that did not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the raw response.
    pub line: usize,
    pub content: String,
}

/// Outcome of parsing one model response.
#[derive(Debug, Clone, Default)]
pub struct ParsedQuantities {
    /// Parsed pairs, in response order.
    pub entries: Vec<QuantityEntry>,
    /// Candidate lines that were skipped.
    pub skipped: Vec<SkippedLine>,
}

impl ParsedQuantities {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse `name: quantity` pairs out of a model response.
pub fn parse_quantities(text: &str) -> ParsedQuantities {
    let mut parsed = ParsedQuantities::default();

    for (index, raw_line) in text.lines().enumerate() {
        let Some((raw_name, raw_value)) = raw_line.split_once(':') else {
            continue;
        };

        let name = clean_name(raw_name);
        let quantity = QUANTITY
            .captures(raw_value)
            .and_then(|caps| caps[1].parse::<Decimal>().ok());

        match (name, quantity) {
            (Some(name), Some(quantity)) => parsed.entries.push(QuantityEntry { name, quantity }),
            _ => parsed.skipped.push(SkippedLine {
                line: index + 1,
                content: raw_line.trim().to_string(),
            }),
        }
    }

    if !parsed.skipped.is_empty() {
        tracing::warn!(
            skipped = parsed.skipped.len(),
            "some response lines did not parse as name: quantity"
        );
    }

    parsed
}

/// Strip list markers and emphasis from the name side of a candidate line.
fn clean_name(raw: &str) -> Option<String> {
    let name = raw
        .trim()
        .trim_start_matches(['-', '*', '•'])
        .trim()
        .trim_matches('*')
        .trim();

    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}
