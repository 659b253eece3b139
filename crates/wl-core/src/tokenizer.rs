use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Whitespace tokenizer over a line-oriented reader.
///
/// Tokens left over on a line stay queued across calls, so one reader can be
/// handed from the ingestion phase to the lookup phase without losing the
/// words typed after the sentinel. Invalid UTF-8 is replaced, not rejected.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line: Vec<u8>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: Vec::new(),
        }
    }

    /// Next whitespace-delimited token, or `None` at end of stream.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(tokenize(&String::from_utf8_lossy(&self.line)));
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Split text into tokens on any Unicode whitespace. No normalization.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
