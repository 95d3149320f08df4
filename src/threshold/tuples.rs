//! Records of several thresholds checked together
//!
//! On the command line they are written as comma separated values, filled
//! from the left: `--warn 70,20` sets the first two fields of a `CpuTuple`
//! and leaves the others empty.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::{parse_timestamp, AbsoluteThreshold, Threshold, TimestampThreshold};
use crate::error::ParseError;

/// Split `s` on commas into at most `max` tokens and parse each of them
pub fn parse_tuple<T, F>(s: &str, max: usize, parse: F) -> Result<Vec<T>, ParseError>
where
    F: Fn(&str) -> Result<T, ParseError>,
{
    let tokens = s.split(',').collect::<Vec<_>>();
    if tokens.len() > max {
        return Err(ParseError::TooManyComponents(s.to_string()));
    }
    tokens.into_iter().map(|t| parse(t.trim())).collect()
}

fn parse_decimal(s: &str) -> Result<Threshold<f64>, ParseError> {
    if s == "-" {
        return Ok(Threshold::empty());
    }
    s.parse::<f64>()
        .map(Threshold::new)
        .map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

/// CPU usage in percent
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct CpuTuple {
    pub user: AbsoluteThreshold,
    pub system: AbsoluteThreshold,
    pub idle: AbsoluteThreshold,
    pub wait: AbsoluteThreshold,
}

impl CpuTuple {
    pub fn new(user: u64, system: u64, idle: u64) -> CpuTuple {
        CpuTuple {
            user: Threshold::new(user),
            system: Threshold::new(system),
            idle: Threshold::new(idle),
            wait: Threshold::empty(),
        }
    }

    /// Whatever is left of 100% after user, system and idle
    pub fn remaining_wait(&self) -> u64 {
        100u64.saturating_sub(self.user.get() + self.system.get() + self.idle.get())
    }
}

impl FromStr for CpuTuple {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<CpuTuple, ParseError> {
        let mut values = parse_tuple(s, 4, str::parse::<AbsoluteThreshold>)?.into_iter();
        let mut next = || values.next().unwrap_or_default();
        Ok(CpuTuple {
            user: next(),
            system: next(),
            idle: next(),
            wait: next(),
        })
    }
}

impl fmt::Display for CpuTuple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{},{},{}", self.user, self.system, self.idle, self.wait)
    }
}

/// Load averages over 1, 5 and 15 minutes
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct LoadTuple {
    pub load1: Threshold<f64>,
    pub load5: Threshold<f64>,
    pub load15: Threshold<f64>,
}

impl LoadTuple {
    pub fn new(load1: f64, load5: f64, load15: f64) -> LoadTuple {
        LoadTuple {
            load1: Threshold::new(load1),
            load5: Threshold::new(load5),
            load15: Threshold::new(load15),
        }
    }
}

impl FromStr for LoadTuple {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<LoadTuple, ParseError> {
        let mut values = parse_tuple(s, 3, parse_decimal)?.into_iter();
        let mut next = || values.next().unwrap_or_default();
        Ok(LoadTuple {
            load1: next(),
            load5: next(),
            load15: next(),
        })
    }
}

impl fmt::Display for LoadTuple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{},{}", self.load1, self.load5, self.load15)
    }
}

/// State of the application monitoring agent attached to smart-snmpd
///
/// `updated` is the time of the last update, as a threshold it is the
/// oldest acceptable update time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct AgentStatusTuple {
    pub updated: TimestampThreshold,
    pub vsz_increases: AbsoluteThreshold,
    pub rsz_increases: AbsoluteThreshold,
}

impl AgentStatusTuple {
    /// Parse `age[,vsz-increases[,rsz-increases]]` with ages counted back from `now`
    pub fn parse_at(s: &str, now: u64) -> Result<AgentStatusTuple, ParseError> {
        let tokens = s.split(',').map(str::trim).collect::<Vec<_>>();
        if tokens.len() > 3 {
            return Err(ParseError::TooManyComponents(s.to_string()));
        }
        let mut agent = AgentStatusTuple::default();
        if let Some(age) = tokens.get(0) {
            agent.updated = parse_timestamp(age, now)?;
        }
        if let Some(vsz) = tokens.get(1) {
            agent.vsz_increases = vsz.parse()?;
        }
        if let Some(rsz) = tokens.get(2) {
            agent.rsz_increases = rsz.parse()?;
        }
        Ok(agent)
    }
}

impl FromStr for AgentStatusTuple {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<AgentStatusTuple, ParseError> {
        AgentStatusTuple::parse_at(s, super::now())
    }
}
