//! Deciding the status of a check from its prove value
//!
//! The critical threshold is always tried before the warning threshold, the
//! first one hit decides.

use crate::compare::Comparator;
use crate::error::OptionError;
use crate::metrics::FromMetric;
use crate::Status;

pub trait CheckStrategy {
    /// The type of the prove value and of the thresholds
    type Value: FromMetric;

    fn validate(&self) -> Result<(), OptionError> {
        Ok(())
    }

    fn prove(&self, value: &Self::Value, cmp: &dyn Comparator<Self::Value>) -> Status;
}

/// Warn and crit thresholds that may each be left out
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WarnCritCheck<T> {
    pub warn: Option<T>,
    pub crit: Option<T>,
}

impl<T> WarnCritCheck<T> {
    pub fn new(warn: Option<T>, crit: Option<T>) -> WarnCritCheck<T> {
        WarnCritCheck { warn, crit }
    }
}

impl<T: FromMetric> CheckStrategy for WarnCritCheck<T> {
    type Value = T;

    fn prove(&self, value: &T, cmp: &dyn Comparator<T>) -> Status {
        if let Some(ref crit) = self.crit {
            if cmp.compare(value, crit) {
                return Status::Critical;
            }
        }
        if let Some(ref warn) = self.warn {
            if cmp.compare(value, warn) {
                return Status::Warning;
            }
        }
        Status::Ok
    }
}

/// Warn and crit thresholds that both have to be given
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MandatoryWarnCritCheck<T>(pub WarnCritCheck<T>);

impl<T> MandatoryWarnCritCheck<T> {
    pub fn new(warn: Option<T>, crit: Option<T>) -> MandatoryWarnCritCheck<T> {
        MandatoryWarnCritCheck(WarnCritCheck::new(warn, crit))
    }

    pub fn warn(&self) -> Option<&T> {
        self.0.warn.as_ref()
    }

    pub fn crit(&self) -> Option<&T> {
        self.0.crit.as_ref()
    }
}

impl<T: FromMetric> CheckStrategy for MandatoryWarnCritCheck<T> {
    type Value = T;

    fn validate(&self) -> Result<(), OptionError> {
        if self.0.warn.is_none() {
            return Err(OptionError::Required(vec!["warn"]));
        }
        if self.0.crit.is_none() {
            return Err(OptionError::Required(vec!["crit"]));
        }
        Ok(())
    }

    fn prove(&self, value: &T, cmp: &dyn Comparator<T>) -> Status {
        self.0.prove(value, cmp)
    }
}

/// Critical when the prove value compares to `true`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoolCritCheck;

impl CheckStrategy for BoolCritCheck {
    type Value = bool;

    fn prove(&self, value: &bool, cmp: &dyn Comparator<bool>) -> Status {
        if cmp.compare(value, &true) {
            Status::Critical
        } else {
            Status::Ok
        }
    }
}
