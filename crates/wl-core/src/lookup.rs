use std::io::{BufRead, Write};

use crate::error::Result;
use crate::ledger::Ledger;
use crate::report;
use crate::tokenizer::TokenReader;
use crate::word::{Word, WordLimits};

/// Prompt for words and report each against the frozen ledger until input
/// runs out. Returns how many lookups succeeded.
///
/// The sentinel gets no special treatment here: it is looked up like any
/// other word and is never found, since ingestion does not tally it.
pub fn run_lookups<R: BufRead, W: Write>(
    ledger: &Ledger,
    tokens: &mut TokenReader<R>,
    limits: &WordLimits,
    out: &mut W,
) -> Result<u64> {
    let mut found = 0u64;

    loop {
        report::write_prompt(out)?;
        let Some(token) = tokens.next_token()? else {
            break;
        };

        let word = Word::parse(&token, limits)?;
        let count = ledger.get(word.as_str());
        tracing::debug!(%word, ?count, "lookup");
        report::write_lookup_result(out, word.as_str(), count)?;
        if count.is_some() {
            found += 1;
        }
    }

    Ok(found)
}
