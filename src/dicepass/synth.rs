//! # Password Synthesis
//!
//! Builds diceware-style passwords: `word_count` words drawn uniformly, with
//! replacement, from the active catalog and joined by a literal separator.
//!
//! Length limits are met by rejection sampling. Each attempt draws a full set
//! of words; attempts whose joined length falls outside `[min_len, max_len]`
//! are discarded. Because every attempt is drawn independently, the accepted
//! outputs are uniformly distributed over all in-range assemblies.
//!
//! The loop is capped at [`MAX_ATTEMPTS`]. Running out of attempts yields
//! [`DiceError::ConstraintUnsatisfiable`], which is distinct from
//! [`DiceError::InfeasibleConstraint`] (`max_len < min_len`, rejected before
//! any drawing happens).
//!
//! Lengths are measured in `char`s. Word counts above [`MAX_WORD_COUNT`] are
//! rejected with [`DiceError::WordCountTooLarge`] before anything is drawn or
//! allocated.

use crate::catalog::WordCatalog;
use crate::config::AppConfig;
use crate::error::{DiceError, Result};
use rand::rngs::OsRng;
use rand::Rng;

pub const MAX_ATTEMPTS: usize = 1000;

/// Upper bound on words per password. Keeps one synthesis to at most
/// `MAX_ATTEMPTS * MAX_WORD_COUNT` draws.
pub const MAX_WORD_COUNT: usize = 256;

/// Inputs to a single synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordSpec {
    pub word_count: usize,
    pub separator: String,
    pub min_len: usize,
    pub max_len: usize,
    pub use_extra: bool,
}

impl PasswordSpec {
    /// Normalizes raw settings.
    ///
    /// A word count below 1 is clamped to 1 and a negative minimum is treated
    /// as 0. `max_len < min_len`, or a negative maximum, is infeasible. A word
    /// count above [`MAX_WORD_COUNT`] is an error.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let (min, max) = (config.min_len, config.max_len);
        if max < min || max < 0 {
            return Err(DiceError::InfeasibleConstraint {
                min_len: min,
                max_len: max,
            });
        }
        if config.word_count > MAX_WORD_COUNT as i64 {
            return Err(DiceError::WordCountTooLarge {
                word_count: config.word_count as u64,
                max: MAX_WORD_COUNT,
            });
        }
        Ok(Self {
            word_count: config.word_count.max(1) as usize,
            separator: config.separator.clone(),
            min_len: min.max(0) as usize,
            max_len: max as usize,
            use_extra: config.extra,
        })
    }
}

/// Synthesizes a password using the operating system's random source.
pub fn generate(catalog: &WordCatalog, spec: &PasswordSpec) -> Result<String> {
    synthesize(catalog, spec, &mut OsRng)
}

/// Synthesizes a password drawing randomness from `rng`.
pub fn synthesize<R: Rng>(
    catalog: &WordCatalog,
    spec: &PasswordSpec,
    rng: &mut R,
) -> Result<String> {
    if spec.max_len < spec.min_len {
        return Err(DiceError::InfeasibleConstraint {
            min_len: spec.min_len as i64,
            max_len: spec.max_len as i64,
        });
    }

    let pool = catalog.active_len(spec.use_extra);
    if pool == 0 {
        return Err(DiceError::CatalogEmpty);
    }

    if spec.word_count > MAX_WORD_COUNT {
        return Err(DiceError::WordCountTooLarge {
            word_count: spec.word_count as u64,
            max: MAX_WORD_COUNT,
        });
    }

    let word_count = spec.word_count.max(1);
    if !reachable(catalog, spec, word_count) {
        return Err(DiceError::ConstraintUnsatisfiable { attempts: 0 });
    }

    let mut words: Vec<&str> = Vec::with_capacity(word_count);
    for attempt in 1..=MAX_ATTEMPTS {
        words.clear();
        for _ in 0..word_count {
            let index = rng.gen_range(0..pool);
            // index < pool, so the lookup cannot miss
            if let Some(word) = catalog.active_word(spec.use_extra, index) {
                words.push(word);
            }
        }

        let candidate = words.join(&spec.separator);
        let len = candidate.chars().count();
        if (spec.min_len..=spec.max_len).contains(&len) {
            tracing::debug!(attempt, len, "password accepted");
            return Ok(candidate);
        }
    }

    Err(DiceError::ConstraintUnsatisfiable {
        attempts: MAX_ATTEMPTS,
    })
}

/// False when no assembly of `word_count` words can land inside the limits:
/// the shortest is already too long, or the longest is still too short.
fn reachable(catalog: &WordCatalog, spec: &PasswordSpec, word_count: usize) -> bool {
    // every word has at least one char
    if word_count > spec.max_len {
        return false;
    }

    let (shortest, longest) = catalog
        .active_words(spec.use_extra)
        .map(|w| w.chars().count())
        .fold((usize::MAX, 0), |(lo, hi), len| (lo.min(len), hi.max(len)));

    let separators = spec
        .separator
        .chars()
        .count()
        .saturating_mul(word_count - 1);
    let min_total = shortest.saturating_mul(word_count).saturating_add(separators);
    let max_total = longest.saturating_mul(word_count).saturating_add(separators);
    min_total <= spec.max_len && max_total >= spec.min_len
}
