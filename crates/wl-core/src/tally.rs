use crate::handoff::{HandoffError, Receiver};
use crate::ledger::Ledger;
use crate::word::Word;

/// What travels through the handoff slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parcel {
    Word(Word),
    /// The sentinel. Never tallied.
    End,
}

/// Summary of one worker run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TallyStats {
    /// Parcels taken from the slot, including the end marker.
    pub received: usize,
    pub tallied: usize,
    /// Empty words skipped without touching the ledger.
    pub ignored: usize,
}

/// Drain `rx` into `ledger` until the end marker arrives.
///
/// Consumes the receiver so the channel closes when the worker returns or
/// unwinds. Fails with `Closed` if the producer disappears without sending
/// the end marker; words tallied up to that point stay in the ledger.
pub fn run_worker(rx: Receiver<Parcel>, ledger: &mut Ledger) -> Result<TallyStats, HandoffError> {
    let mut stats = TallyStats::default();

    loop {
        let parcel = rx.receive()?;
        stats.received += 1;

        match parcel {
            Parcel::End => break,
            Parcel::Word(word) if word.is_empty() => {
                stats.ignored += 1;
            }
            Parcel::Word(word) => {
                let count = ledger.tally(word);
                tracing::trace!(count, "tallied");
                stats.tallied += 1;
            }
        }
    }

    tracing::debug!(
        received = stats.received,
        tallied = stats.tallied,
        ignored = stats.ignored,
        distinct = ledger.len(),
        "tally worker finished"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handoff::channel;
    use crate::word::WordLimits;
    use std::thread;

    fn word(s: &str) -> Parcel {
        Parcel::Word(Word::parse(s, &WordLimits::default()).unwrap())
    }

    fn run_with(parcels: Vec<Parcel>) -> (Ledger, Result<TallyStats, HandoffError>) {
        let (tx, rx) = channel();
        let mut ledger = Ledger::new();
        let result = thread::scope(|s| {
            let worker = s.spawn(|| run_worker(rx, &mut ledger));
            for p in parcels {
                if tx.send(p).is_err() {
                    break;
                }
            }
            drop(tx);
            worker.join().unwrap()
        });
        (ledger, result)
    }

    #[test]
    fn test_sentinel_not_tallied() {
        let (ledger, stats) = run_with(vec![word("cat"), word("dog"), word("cat"), Parcel::End]);
        let stats = stats.unwrap();
        assert_eq!(ledger.get("cat"), Some(2));
        assert_eq!(ledger.get("dog"), Some(1));
        assert!(!ledger.contains("end"));
        assert_eq!(stats.received, 4);
        assert_eq!(stats.tallied, 3);
    }

    #[test]
    fn test_empty_words_ignored() {
        let (ledger, stats) = run_with(vec![word(""), word("cat"), Parcel::End]);
        let stats = stats.unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(stats.ignored, 1);
    }

    #[test]
    fn test_stops_at_end_marker() {
        // Parcels after the end marker are never taken; their send fails.
        let (ledger, stats) = run_with(vec![word("a"), Parcel::End, word("b")]);
        assert_eq!(stats.unwrap().received, 2);
        assert!(!ledger.contains("b"));
    }

    #[test]
    fn test_producer_gone_without_end_marker() {
        let (ledger, stats) = run_with(vec![word("fish")]);
        assert_eq!(stats, Err(HandoffError::Closed));
        assert_eq!(ledger.get("fish"), Some(1));
    }
}
