use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{StillreelError, StillreelResult};

/// 0-based position of a frame in the output video.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> StillreelResult<Self> {
        if den == 0 {
            return Err(StillreelError::validation("fps denominator must be > 0"));
        }
        if num == 0 {
            return Err(StillreelError::validation("fps numerator must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * f64::from(self.den) / f64::from(self.num)
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 24, den: 1 }
    }
}

impl fmt::Display for Fps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// Accepts `"24"` or a rational `"30000/1001"`.
impl FromStr for Fps {
    type Err = StillreelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| StillreelError::validation(format!("invalid fps \"{s}\"")))
        };
        match s.split_once('/') {
            Some((num, den)) => Self::new(parse(num)?, parse(den)?),
            None => Self::new(parse(s)?, 1),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
