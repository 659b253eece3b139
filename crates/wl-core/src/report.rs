//! Human-readable output. Every line format the program prints lives here.

use std::io::{self, Write};

use crate::ledger::Ledger;

pub const LOOKUP_PROMPT: &str = "\nEnter a word for lookup:";

/// Header, then one `<word> <count>` line per entry in ascending order.
pub fn write_word_list<W: Write>(out: &mut W, ledger: &Ledger) -> io::Result<()> {
    writeln!(out, "\n=== Word list:")?;
    for (word, count) in ledger.iter() {
        writeln!(out, "{word} {count}")?;
    }
    Ok(())
}

/// Prompt before a lookup read. Flushed so it shows before input blocks.
pub fn write_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(LOOKUP_PROMPT.as_bytes())?;
    out.flush()
}

pub fn write_lookup_result<W: Write>(out: &mut W, word: &str, count: Option<u64>) -> io::Result<()> {
    match count {
        Some(count) => writeln!(
            out,
            "SUCCESS: '{word}' was present {count} times in the initial word list"
        ),
        None => writeln!(out, "'{word}' was NOT found in the initial word list"),
    }
}

pub fn write_total_found<W: Write>(out: &mut W, found: u64) -> io::Result<()> {
    writeln!(out, "\n=== Total words found: {found}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::{Word, WordLimits};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_word_list_format() {
        let mut ledger = Ledger::new();
        for w in ["dog", "cat", "cat"] {
            ledger.tally(Word::parse(w, &WordLimits::default()).unwrap());
        }
        let text = render(|out| write_word_list(out, &ledger));
        assert_eq!(text, "\n=== Word list:\ncat 2\ndog 1\n");
    }

    #[test]
    fn test_empty_word_list_is_header_only() {
        let text = render(|out| write_word_list(out, &Ledger::new()));
        assert_eq!(text, "\n=== Word list:\n");
    }

    #[test]
    fn test_lookup_lines() {
        assert_eq!(
            render(|out| write_lookup_result(out, "cat", Some(2))),
            "SUCCESS: 'cat' was present 2 times in the initial word list\n"
        );
        assert_eq!(
            render(|out| write_lookup_result(out, "dog", None)),
            "'dog' was NOT found in the initial word list\n"
        );
    }

    #[test]
    fn test_total_found_line() {
        assert_eq!(
            render(|out| write_total_found(out, 3)),
            "\n=== Total words found: 3\n"
        );
    }
}
