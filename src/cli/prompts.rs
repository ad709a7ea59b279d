//! Interactive numeric prompts.
//!
//! One rule everywhere: empty input takes the default, anything else must be
//! a non-negative number, and invalid input re-prompts instead of aborting
//! or silently coercing to zero.

use std::str::FromStr;

use rust_decimal::Decimal;
use rustyline::DefaultEditor;

/// Print a section header.
pub fn print_header(title: &str) {
    println!("\n=== {title} ===");
}

/// What one line of prompt input amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Empty,
    Number(Decimal),
    Invalid,
}

fn classify(input: &str) -> Entry {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Entry::Empty;
    }
    match Decimal::from_str(trimmed) {
        Ok(value) if !value.is_sign_negative() => Entry::Number(value),
        _ => Entry::Invalid,
    }
}

/// Prompt for a non-negative number, returning `default` on empty input.
pub fn decimal_input(
    editor: &mut DefaultEditor,
    prompt: &str,
    default: Decimal,
) -> rustyline::Result<Decimal> {
    loop {
        let line = editor.readline(prompt)?;
        match classify(&line) {
            Entry::Empty => return Ok(default),
            Entry::Number(value) => return Ok(value),
            Entry::Invalid => println!("Please enter a non-negative numeric value."),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_input_means_default() {
        assert_eq!(classify(""), Entry::Empty);
        assert_eq!(classify("   "), Entry::Empty);
    }

    #[test]
    fn plain_numbers_parse() {
        assert_eq!(classify("12"), Entry::Number(dec!(12)));
        assert_eq!(classify(" 3.50 "), Entry::Number(dec!(3.50)));
        assert_eq!(classify("0"), Entry::Number(dec!(0)));
    }

    #[test]
    fn garbage_and_negatives_are_invalid() {
        assert_eq!(classify("a dozen"), Entry::Invalid);
        assert_eq!(classify("-4"), Entry::Invalid);
        assert_eq!(classify("1,200"), Entry::Invalid);
    }
}
