use std::io::BufRead;
use std::thread;

use crate::constants::{SENTINEL, WORKER_THREAD_NAME};
use crate::error::{Error, Result};
use crate::handoff::{self, Sender};
use crate::ledger::Ledger;
use crate::tally::{self, Parcel, TallyStats};
use crate::tokenizer::TokenReader;
use crate::word::{Word, WordLimits};

/// How the ingestion phase stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndedBy {
    Sentinel,
    /// Input ran out first; an end marker was injected for the worker.
    EndOfInput,
}

pub struct IngestOutcome {
    pub ledger: Ledger,
    pub stats: TallyStats,
    pub ended_by: EndedBy,
}

/// Read tokens until the sentinel or end of input, tallying them on a
/// dedicated worker thread.
///
/// The ledger is lent to the worker for the duration of a thread scope and
/// only handed back after the worker has joined. Every exit path sends the
/// end marker first, so the worker never outlives this call.
pub fn ingest<R: BufRead>(tokens: &mut TokenReader<R>, limits: &WordLimits) -> Result<IngestOutcome> {
    let mut ledger = Ledger::new();
    let (tx, rx) = handoff::channel();

    let (ended_by, stats) = thread::scope(|scope| -> Result<(EndedBy, TallyStats)> {
        let ledger = &mut ledger;
        let worker = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn_scoped(scope, move || tally::run_worker(rx, ledger))?;

        let fed = feed(tokens, limits, &tx);
        if fed.is_err() {
            // Best effort: the worker may already be gone.
            let _ = tx.send(Parcel::End);
        }
        drop(tx);

        let stats = worker.join().map_err(|_| Error::WorkerPanicked)?;
        let ended_by = fed?;
        Ok((ended_by, stats?))
    })?;

    tracing::info!(
        ?ended_by,
        words = stats.tallied,
        distinct = ledger.len(),
        "ingestion complete"
    );
    Ok(IngestOutcome {
        ledger,
        stats,
        ended_by,
    })
}

fn feed<R: BufRead>(
    tokens: &mut TokenReader<R>,
    limits: &WordLimits,
    tx: &Sender<Parcel>,
) -> Result<EndedBy> {
    while let Some(token) = tokens.next_token()? {
        if token == SENTINEL {
            tracing::debug!("sentinel read, stopping ingestion");
            tx.send(Parcel::End)?;
            return Ok(EndedBy::Sentinel);
        }

        let word = Word::parse(&token, limits)?;
        tracing::debug!(%word, "handing off");
        tx.send(Parcel::Word(word))?;
    }

    tracing::debug!("end of input before sentinel, injecting end marker");
    tx.send(Parcel::End)?;
    Ok(EndedBy::EndOfInput)
}
