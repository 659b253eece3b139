/// Reserved token that ends the ingestion phase. Case-sensitive, exact match.
pub const SENTINEL: &str = "end";

/// Default word bound in characters: a 32-byte buffer minus its terminator.
pub const DEFAULT_MAX_WORD_LEN: usize = 31;

/// Name given to the tallying thread (shows up in panics and debuggers).
pub const WORKER_THREAD_NAME: &str = "tally-worker";
