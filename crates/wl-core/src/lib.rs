//! Word ledger engine.
//!
//! Tallies whitespace-delimited words read from a stream, handing each word
//! from the reading thread to a tallying worker through a single-slot
//! mutex/condvar rendezvous, then answers exact-match lookups against the
//! sorted result.
//!
//! Works over any `BufRead` / `Write`; the binary wires it to stdin/stdout.

pub mod constants;
pub mod error;
pub mod handoff;
pub mod ingest;
pub mod ledger;
pub mod lookup;
pub mod report;
pub mod session;
pub mod tally;
pub mod tokenizer;
pub mod word;

pub use constants::{DEFAULT_MAX_WORD_LEN, SENTINEL};
pub use error::{Error, Result};
pub use handoff::{HandoffError, Receiver, Sender, channel};
pub use ingest::{EndedBy, IngestOutcome, ingest};
pub use ledger::Ledger;
pub use lookup::run_lookups;
pub use session::{SessionSummary, run_session};
pub use tally::{Parcel, TallyStats, run_worker};
pub use tokenizer::{TokenReader, tokenize};
pub use word::{OversizePolicy, Word, WordLimits};
