use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::{parse_bytes, BytesThreshold, RelativeThreshold};
use crate::error::ParseError;

/// An amount of bytes and/or a ratio, as in `--warn 10G,20%`
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct SizeThreshold {
    pub absolute: BytesThreshold,
    pub relative: RelativeThreshold,
}

impl SizeThreshold {
    pub fn new(absolute: BytesThreshold, relative: RelativeThreshold) -> SizeThreshold {
        SizeThreshold { absolute, relative }
    }

    pub fn is_abs(&self) -> bool {
        !self.absolute.is_empty()
    }

    pub fn is_rel(&self) -> bool {
        !self.relative.is_empty()
    }

    /// The threshold expressed in bytes of `total`
    ///
    /// A ratio wins over an absolute value, an empty threshold is 0.
    pub fn bytes_of(&self, total: u64) -> u64 {
        if self.is_rel() {
            (self.relative.get() * total as f64) as u64
        } else {
            self.absolute.get()
        }
    }
}

/// Each comma separated token is tried as bytes first, then as a ratio
impl FromStr for SizeThreshold {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<SizeThreshold, ParseError> {
        let mut size = SizeThreshold::default();
        for token in s.split(',') {
            if size.is_abs() && size.is_rel() {
                return Err(ParseError::TooManyComponents(s.to_string()));
            }
            if !size.is_abs() {
                if let Ok(abs) = parse_bytes(token) {
                    size.absolute = abs;
                    continue;
                }
            }
            if !size.is_rel() {
                size.relative = token.parse::<RelativeThreshold>().map_err(|e| {
                    if parse_bytes(token).is_ok() {
                        ParseError::DuplicateKind(s.to_string())
                    } else {
                        e
                    }
                })?;
                continue;
            }
            return Err(ParseError::DuplicateKind(s.to_string()));
        }
        Ok(size)
    }
}

impl fmt::Display for SizeThreshold {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.absolute, self.relative)
    }
}
