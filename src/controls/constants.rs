// Constants for the array controls

/// Smallest array the controls will generate
pub const MIN_ARRAY_SIZE: usize = 7;

/// Largest array the controls will generate or accept
pub const MAX_ARRAY_SIZE: usize = 20;

pub const DEFAULT_ARRAY_SIZE: usize = 12;

/// Inclusive bounds for randomly generated values
pub const RANDOM_VALUE_MIN: i64 = 1;
pub const RANDOM_VALUE_MAX: i64 = 99;

/// Delay between auto-play steps, in milliseconds
pub const DEFAULT_PLAY_INTERVAL_MS: u64 = 800;

/// Array shown when nothing else is requested
pub const DEFAULT_ARRAY: [i64; 12] = [45, 3, 5, 17, 32, 23, 27, 6, 24, 13, 33, 22];
