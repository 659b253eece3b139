use std::io::{BufRead, Write};

use crate::error::Result;
use crate::ingest::{EndedBy, ingest};
use crate::lookup::run_lookups;
use crate::report;
use crate::tokenizer::TokenReader;
use crate::word::WordLimits;

/// What a finished session did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub distinct_words: usize,
    pub tallied: usize,
    pub found: u64,
    pub ended_by: EndedBy,
}

/// Run the whole program over one input stream: ingest, print the word
/// list, answer lookups, print the total.
///
/// Both phases read from the same token stream, so words typed after the
/// sentinel are the first lookups.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    limits: &WordLimits,
) -> Result<SessionSummary> {
    let mut tokens = TokenReader::new(input);

    let outcome = ingest(&mut tokens, limits)?;
    report::write_word_list(out, &outcome.ledger)?;

    let found = run_lookups(&outcome.ledger, &mut tokens, limits, out)?;
    report::write_total_found(out, found)?;
    out.flush()?;

    tracing::info!(found, "lookups complete");
    Ok(SessionSummary {
        distinct_words: outcome.ledger.len(),
        tallied: outcome.stats.tallied,
        found,
        ended_by: outcome.ended_by,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str) -> (SessionSummary, String) {
        let mut out = Vec::new();
        let summary =
            run_session(Cursor::new(input.as_bytes().to_vec()), &mut out, &WordLimits::default())
                .unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_full_transcript() {
        let (summary, out) = session("cat dog cat end\ncat\nbird\n");
        assert_eq!(
            out,
            "\n=== Word list:\ncat 2\ndog 1\n\
             \nEnter a word for lookup:SUCCESS: 'cat' was present 2 times in the initial word list\n\
             \nEnter a word for lookup:'bird' was NOT found in the initial word list\n\
             \nEnter a word for lookup:\
             \n=== Total words found: 1\n"
        );
        assert_eq!(summary.found, 1);
        assert_eq!(summary.distinct_words, 2);
        assert_eq!(summary.ended_by, EndedBy::Sentinel);
    }

    #[test]
    fn test_eof_during_ingestion_still_reports() {
        let (summary, out) = session("fish");
        assert!(out.starts_with("\n=== Word list:\nfish 1\n"));
        assert!(out.ends_with("\n=== Total words found: 0\n"));
        assert_eq!(summary.ended_by, EndedBy::EndOfInput);
    }
}
