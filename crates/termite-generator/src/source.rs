//! The entropy source behind every draw.
//!
//! All randomness in the engine flows through [`DrawSource`] as 64-bit
//! words. Recording the word sequence is therefore enough to replay any
//! generation run bit-for-bit, no matter which generators consumed it.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// How a [`DrawSource`] produces its words.
#[derive(Debug, Clone)]
enum SourceMode {
    /// Draw from the seeded RNG.
    Fresh,
    /// Draw from the seeded RNG and log every word.
    Recording(Vec<u64>),
    /// Feed back a recorded word log; falls through to the seeded RNG once
    /// the log is exhausted (partial replay).
    Replaying { words: Vec<u64>, cursor: usize },
}

/// A deterministic, replayable source of random bits.
///
/// Given the same seed, a `DrawSource` produces an identical word sequence;
/// given a recorded word log, [`DrawSource::replaying`] reproduces the exact
/// draws of a previous run. This is the reproducibility foundation for
/// failure replay.
///
/// # Examples
///
/// ```
/// use termite_generator::source::DrawSource;
///
/// let mut a = DrawSource::seeded(42);
/// let mut b = DrawSource::seeded(42);
/// assert_eq!(a.next_word(), b.next_word());
/// ```
#[derive(Debug, Clone)]
pub struct DrawSource {
    rng: ChaCha8Rng,
    seed: u64,
    mode: SourceMode,
}

impl DrawSource {
    /// A fresh source seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            mode: SourceMode::Fresh,
        }
    }

    /// A seeded source that logs every drawn word for later replay.
    pub fn recording(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            mode: SourceMode::Recording(Vec::new()),
        }
    }

    /// A source that replays a recorded word log.
    ///
    /// Once the log is exhausted the source continues from a zero-seeded
    /// RNG, so a truncated log still drives generation to completion; only
    /// the logged prefix is guaranteed to match the original run.
    pub fn replaying(words: Vec<u64>) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(0),
            seed: 0,
            mode: SourceMode::Replaying { words, cursor: 0 },
        }
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws the next 64-bit word.
    pub fn next_word(&mut self) -> u64 {
        match &mut self.mode {
            SourceMode::Fresh => self.rng.next_u64(),
            SourceMode::Recording(log) => {
                let word = self.rng.next_u64();
                log.push(word);
                word
            }
            SourceMode::Replaying { words, cursor } => {
                if let Some(word) = words.get(*cursor) {
                    *cursor += 1;
                    *word
                } else {
                    self.rng.next_u64()
                }
            }
        }
    }

    /// Draws a float uniform in `[0, 1)`, derived from one word.
    pub fn next_f64(&mut self) -> f64 {
        // 53 high-quality mantissa bits, the standard u64-to-f64 reduction.
        (self.next_word() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// The words drawn so far, if this source is recording.
    pub fn recorded(&self) -> Option<&[u64]> {
        match &self.mode {
            SourceMode::Recording(log) => Some(log),
            _ => None,
        }
    }

    /// Serializes the recorded word log to JSON for storage.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self.recorded().unwrap_or(&[]))
    }

    /// Builds a replaying source from a JSON word log.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let words: Vec<u64> = serde_json::from_str(json)?;
        Ok(Self::replaying(words))
    }
}
