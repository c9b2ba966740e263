//! ID generation utilities for tasktrack
//!
//! Task IDs combine a millisecond timestamp with a short random suffix, both
//! encoded in base 36. Uniqueness is best-effort rather than cryptographic:
//! each [`IdGenerator`] forces its timestamp component to be strictly
//! increasing, so IDs from one generator never collide, and the random suffix
//! keeps IDs from independent generators apart in practice.

use rand::Rng;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of base-36 characters in the random suffix.
pub const SUFFIX_LEN: usize = 4;

/// Get current timestamp in milliseconds since Unix epoch
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Encode a number in lowercase base 36.
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Generates task IDs of the form `{timestamp_b36}-{random_b36}`.
///
/// Example: `mfx1k2p3-0a9z`
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_ms: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the next task ID.
    pub fn next_id(&mut self) -> String {
        let stamp = self.next_stamp(now_ms());
        let random: u64 = rand::rng().random_range(0..36u64.pow(SUFFIX_LEN as u32));
        format!("{}-{:0>width$}", to_base36(stamp), to_base36(random), width = SUFFIX_LEN)
    }

    /// Return `now` unless the clock has not moved past the last issued stamp.
    fn next_stamp(&mut self, now: u64) -> u64 {
        let stamp = if now > self.last_ms { now } else { self.last_ms + 1 };
        self.last_ms = stamp;
        stamp
    }
}
