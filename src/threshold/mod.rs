//! Typed, optionally absent threshold values
//!
//! A `Threshold` that holds nothing never triggers: every comparison with an
//! empty right hand side is false. That is how an unset `--warn` or `--crit`
//! stays quiet without special casing in the checks.
//!
//! The threshold flavors differ only in how they are parsed from the command
//! line:
//!
//! * `AbsoluteThreshold`: a plain count, `"42"`
//! * `RelativeThreshold`: a ratio, `"0.5"` or `"50%"`
//! * bytes: a count with a binary multiplier, `"10M"`, see [`parse_bytes`]
//! * timestamps: an age turned into "now minus age", `"2d"`, see
//!   [`parse_timestamp`]
//!
//! [`parse_bytes`]: fn.parse_bytes.html
//! [`parse_timestamp`]: fn.parse_timestamp.html

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ParseError;

mod range;
mod size;
mod tuples;

pub use self::range::RangeThreshold;
pub use self::size::SizeThreshold;
pub use self::tuples::{parse_tuple, AgentStatusTuple, CpuTuple, LoadTuple};

pub type AbsoluteThreshold = Threshold<u64>;
pub type RelativeThreshold = Threshold<f64>;
/// Bytes are stored as an absolute count
pub type BytesThreshold = AbsoluteThreshold;
/// Seconds since the epoch
pub type TimestampThreshold = AbsoluteThreshold;

/// The scalar types a `Threshold` can wrap
pub trait ThresholdValue: Copy + Default + PartialOrd + fmt::Debug {
    fn render(&self) -> String;
}

impl ThresholdValue for u64 {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl ThresholdValue for f64 {
    fn render(&self) -> String {
        format!("{:.2}", self)
    }
}

/// A value that may be absent
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Threshold<T> {
    value: Option<T>,
}

impl<T: ThresholdValue> Threshold<T> {
    pub fn new(value: T) -> Threshold<T> {
        Threshold { value: Some(value) }
    }

    pub fn empty() -> Threshold<T> {
        Threshold { value: None }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    pub fn value(&self) -> Option<T> {
        self.value
    }

    /// The wrapped value, or `T::default()` for an empty threshold
    pub fn get(&self) -> T {
        self.value.unwrap_or_default()
    }

    pub fn is_lt(&self, other: &Threshold<T>) -> bool {
        match other.value {
            Some(y) => self.get() < y,
            None => false,
        }
    }

    pub fn is_gt(&self, other: &Threshold<T>) -> bool {
        match other.value {
            Some(y) => self.get() > y,
            None => false,
        }
    }

    pub fn is_eq(&self, other: &Threshold<T>) -> bool {
        match other.value {
            Some(y) => self.get() == y,
            None => false,
        }
    }

    pub fn is_ne(&self, other: &Threshold<T>) -> bool {
        !self.is_eq(other)
    }

    pub fn is_le(&self, other: &Threshold<T>) -> bool {
        self.is_eq(other) || self.is_lt(other)
    }

    pub fn is_ge(&self, other: &Threshold<T>) -> bool {
        self.is_eq(other) || self.is_gt(other)
    }
}

impl<T: ThresholdValue> From<T> for Threshold<T> {
    fn from(value: T) -> Threshold<T> {
        Threshold::new(value)
    }
}

impl<T: ThresholdValue> fmt::Display for Threshold<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.value {
            Some(ref v) => write!(f, "{}", v.render()),
            None => write!(f, "-"),
        }
    }
}

/// Split a trailing non digit off `s`
fn split_suffix(s: &str) -> (&str, Option<char>) {
    match s.chars().last() {
        Some(c) if !c.is_ascii_digit() && c != '.' => (&s[..s.len() - c.len_utf8()], Some(c)),
        _ => (s, None),
    }
}

fn parse_count(s: &str, whole: &str) -> Result<u64, ParseError> {
    s.parse::<u64>()
        .map_err(|_| ParseError::InvalidNumber(whole.to_string()))
}

impl FromStr for Threshold<u64> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<AbsoluteThreshold, ParseError> {
        let s = s.trim();
        if s == "-" {
            return Ok(Threshold::empty());
        }
        parse_count(s, s).map(Threshold::new)
    }
}

/// Parses `"0.5"` or `"50%"` into a ratio
impl FromStr for Threshold<f64> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<RelativeThreshold, ParseError> {
        let s = s.trim();
        if s == "-" {
            return Ok(Threshold::empty());
        }
        let (number, divisor) = match s.strip_suffix('%') {
            Some(number) => (number, 100.0),
            None => (s, 1.0),
        };
        number
            .parse::<f64>()
            .map(|d| Threshold::new(d / divisor))
            .map_err(|_| ParseError::InvalidNumber(s.to_string()))
    }
}

/// Parse a byte count with an optional `k`, `m`, `g`, `t` or `p` suffix
///
/// Suffixes are case insensitive and multiply by powers of 1024.
pub fn parse_bytes(s: &str) -> Result<BytesThreshold, ParseError> {
    let s = s.trim();
    let (number, suffix) = split_suffix(s);
    let multiplier: u64 = match suffix {
        None => 1,
        Some(c) => match c.to_ascii_lowercase() {
            'k' => 1 << 10,
            'm' => 1 << 20,
            'g' => 1 << 30,
            't' => 1 << 40,
            'p' => 1 << 50,
            _ => {
                return Err(ParseError::InvalidSuffix {
                    value: s.to_string(),
                    suffix: c,
                })
            }
        },
    };
    parse_count(number, s)?
        .checked_mul(multiplier)
        .map(Threshold::new)
        .ok_or_else(|| ParseError::InvalidNumber(s.to_string()))
}

/// Parse an age like `"90m"` into the timestamp `now - age`
///
/// Suffixes are case sensitive: `s`, `m` (minutes), `h`, `d`, `w`,
/// `M` (31 days) and `Y` (365 days).
pub fn parse_timestamp(s: &str, now: u64) -> Result<TimestampThreshold, ParseError> {
    let s = s.trim();
    let (number, suffix) = split_suffix(s);
    let multiplier: u64 = match suffix {
        None | Some('s') => 1,
        Some('m') => 60,
        Some('h') => 60 * 60,
        Some('d') => 60 * 60 * 24,
        Some('w') => 60 * 60 * 24 * 7,
        Some('M') => 60 * 60 * 24 * 31,
        Some('Y') => 60 * 60 * 24 * 365,
        Some(c) => {
            return Err(ParseError::InvalidSuffix {
                value: s.to_string(),
                suffix: c,
            })
        }
    };
    let age = parse_count(number, s)?
        .checked_mul(multiplier)
        .ok_or_else(|| ParseError::InvalidNumber(s.to_string()))?;
    Ok(Threshold::new(now.saturating_sub(age)))
}

/// The current time as seconds since the epoch
pub fn now() -> u64 {
    let ts = chrono::Utc::now().timestamp();
    if ts < 0 {
        0
    } else {
        ts as u64
    }
}

#[cfg(test)]
mod test {
    use super::{parse_bytes, parse_timestamp, AbsoluteThreshold, RelativeThreshold, Threshold};
    use crate::error::ParseError;

    #[test]
    fn empty_right_side_is_never_true() {
        let empty = AbsoluteThreshold::empty();
        for x in &[Threshold::new(0), Threshold::new(7), AbsoluteThreshold::empty()] {
            assert!(!x.is_lt(&empty));
            assert!(!x.is_gt(&empty));
            assert!(!x.is_eq(&empty));
            assert!(!x.is_le(&empty));
            assert!(!x.is_ge(&empty));
            assert!(x.is_ne(&empty));
        }
    }

    #[test]
    fn empty_left_side_compares_as_default() {
        let empty = AbsoluteThreshold::empty();
        assert!(empty.is_lt(&Threshold::new(1)));
        assert!(empty.is_eq(&Threshold::new(0)));
        assert!(!empty.is_gt(&Threshold::new(0)));
    }

    #[test]
    fn derived_relations() {
        let five = Threshold::new(5u64);
        let ten = Threshold::new(10u64);
        assert!(five.is_le(&ten));
        assert!(five.is_le(&five));
        assert!(!ten.is_le(&five));
        assert!(ten.is_ge(&five));
        assert!(ten.is_ge(&ten));
        assert!(five.is_ne(&ten));
    }

    #[test]
    fn renders_dash_for_empty() {
        assert_eq!(AbsoluteThreshold::empty().to_string(), "-");
        assert_eq!(Threshold::new(42u64).to_string(), "42");
        assert_eq!(Threshold::new(0.5f64).to_string(), "0.50");
        assert_eq!("-".parse::<AbsoluteThreshold>(), Ok(AbsoluteThreshold::empty()));
    }

    #[test]
    fn parses_relative() {
        assert_eq!("50%".parse::<RelativeThreshold>(), Ok(Threshold::new(0.5)));
        assert_eq!("0.25".parse::<RelativeThreshold>(), Ok(Threshold::new(0.25)));
        assert!("half".parse::<RelativeThreshold>().is_err());
    }

    #[test]
    fn parses_bytes() {
        assert_eq!(parse_bytes("10M"), Ok(Threshold::new(10 * 1024 * 1024)));
        assert_eq!(parse_bytes("1k"), parse_bytes("1K"));
        assert_eq!(parse_bytes("1k"), Ok(Threshold::new(1024)));
        assert_eq!(parse_bytes("2p"), Ok(Threshold::new(2 << 50)));
        assert_eq!(parse_bytes("512"), Ok(Threshold::new(512)));
        assert_eq!(
            parse_bytes("3x"),
            Err(ParseError::InvalidSuffix {
                value: "3x".into(),
                suffix: 'x'
            })
        );
        assert!(parse_bytes("5%").is_err());
    }

    #[test]
    fn parses_timestamps_relative_to_now() {
        let now = 1_000_000;
        assert_eq!(parse_timestamp("1h", now), Ok(Threshold::new(now - 3600)));
        assert_eq!(parse_timestamp("2d", now), Ok(Threshold::new(now - 172_800)));
        assert_eq!(parse_timestamp("30", now), Ok(Threshold::new(now - 30)));
        assert_eq!(parse_timestamp("1m", now), Ok(Threshold::new(now - 60)));
        assert_eq!(
            parse_timestamp("1M", 3_000_000),
            Ok(Threshold::new(3_000_000 - 31 * 86_400))
        );
        assert_eq!(parse_timestamp("1M", now), Ok(Threshold::new(0)));
        assert_eq!(parse_timestamp("1Y", 10), Ok(Threshold::new(0)));
        assert!(parse_timestamp("1H", now).is_err());
    }
}
