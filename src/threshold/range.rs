use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::{Threshold, ThresholdValue};
use crate::error::ParseError;

/// A `min:max` pair
///
/// `"lo:hi"`, `"lo:"` and `":hi"` set the given bounds, a bare `"hi"` means
/// "up to hi". When both bounds are given with `lo > hi` they are swapped
/// and the range is `negated`: it then describes the band values must stay
/// out of.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct RangeThreshold<T> {
    pub min: Threshold<T>,
    pub max: Threshold<T>,
    pub negated: bool,
}

impl<T: ThresholdValue> RangeThreshold<T> {
    pub fn new(min: Threshold<T>, max: Threshold<T>) -> RangeThreshold<T> {
        RangeThreshold {
            min,
            max,
            negated: false,
        }
    }

    /// A range holding a single value as both bounds
    pub fn point(value: T) -> RangeThreshold<T> {
        RangeThreshold::new(Threshold::new(value), Threshold::new(value))
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }
}

impl<T> FromStr for RangeThreshold<T>
where
    T: ThresholdValue,
    Threshold<T>: FromStr<Err = ParseError>,
{
    type Err = ParseError;

    fn from_str(s: &str) -> Result<RangeThreshold<T>, ParseError> {
        let parse = |part: &str| -> Result<Threshold<T>, ParseError> {
            if part.is_empty() {
                Ok(Threshold::empty())
            } else {
                part.parse()
            }
        };

        let parts = s.split(':').collect::<Vec<_>>();
        let mut range = match parts.as_slice() {
            [max] => RangeThreshold::new(Threshold::empty(), parse(max)?),
            [min, max] => RangeThreshold::new(parse(min)?, parse(max)?),
            _ => return Err(ParseError::TooManyComponents(s.to_string())),
        };

        if !range.min.is_empty() && !range.max.is_empty() && range.min.is_gt(&range.max) {
            std::mem::swap(&mut range.min, &mut range.max);
            range.negated = true;
        }
        Ok(range)
    }
}

impl<T: ThresholdValue> fmt::Display for RangeThreshold<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.min.is_empty() {
            write!(f, "{}", self.min)?;
        }
        write!(f, ":")?;
        if !self.max.is_empty() {
            write!(f, "{}", self.max)?;
        }
        Ok(())
    }
}
