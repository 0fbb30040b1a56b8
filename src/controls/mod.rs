//! Array controls: size input, random arrays and explicit value lists
//!
//! Everything that decides *which* array gets traced lives here, so the
//! generator only ever sees a well-formed `&[i64]`.

pub mod constants;
pub mod errors;

pub use errors::InputError;

use constants::{MAX_ARRAY_SIZE, MIN_ARRAY_SIZE, RANDOM_VALUE_MAX, RANDOM_VALUE_MIN};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Clamp a requested size into `MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE`
pub fn clamp_size(raw: i64) -> usize {
    raw.clamp(MIN_ARRAY_SIZE as i64, MAX_ARRAY_SIZE as i64) as usize
}

/// Parse a size typed by the user.
///
/// Anything that is not a number falls back to the minimum size.
pub fn parse_size(text: &str) -> usize {
    match text.trim().parse::<i64>() {
        Ok(raw) => clamp_size(raw),
        Err(_) => MIN_ARRAY_SIZE,
    }
}

/// Parse a comma or whitespace separated list of integers
pub fn parse_values(text: &str) -> Result<Vec<i64>, InputError> {
    let values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|_| InputError::InvalidValue {
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(InputError::EmptyInput);
    }
    if values.len() > MAX_ARRAY_SIZE {
        return Err(InputError::TooManyValues {
            count: values.len(),
            max: MAX_ARRAY_SIZE,
        });
    }

    Ok(values)
}

/// Size setting and random source for generated arrays
#[derive(Debug)]
pub struct ArrayControls {
    size: usize,
    rng: SmallRng,
}

impl ArrayControls {
    /// Controls seeded from the OS
    pub fn new(size: usize) -> Self {
        ArrayControls {
            size: clamp_size(size as i64),
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Controls with a fixed seed, for reproducible arrays
    pub fn with_seed(size: usize, seed: u64) -> Self {
        ArrayControls {
            size: clamp_size(size as i64),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn set_size(&mut self, raw: i64) {
        self.size = clamp_size(raw);
    }

    /// Grow or shrink the size, staying within bounds
    pub fn resize(&mut self, delta: i64) {
        self.set_size(self.size as i64 + delta);
    }

    /// A fresh random array of the current size
    pub fn generate_random(&mut self) -> Vec<i64> {
        (0..self.size)
            .map(|_| self.rng.random_range(RANDOM_VALUE_MIN..=RANDOM_VALUE_MAX))
            .collect()
    }
}
