//! Errors shared by every check
//!
//! There are three layers: `ParseError` for threshold text that cannot be
//! understood, `OptionError` for option sets that are incomplete or
//! contradictory, and `CheckError` for everything that can go wrong after
//! the options have been accepted.

use std::result::Result as StdResult;

use itertools::Itertools;
use thiserror::Error;

pub type Result<T> = StdResult<T, CheckError>;

/// Threshold text that could not be parsed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("invalid suffix '{suffix}' in '{value}'")]
    InvalidSuffix { value: String, suffix: char },
    #[error("too many components in '{0}'")]
    TooManyComponents(String),
    #[error("'{0}' contains the same kind of threshold twice")]
    DuplicateKind(String),
}

/// An option set that cannot be used
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionError {
    #[error("{}", required_message(.0))]
    Required(Vec<&'static str>),
    #[error("Option '{0}' requires option '{1}'.")]
    Dependency(&'static str, &'static str),
    #[error("the argument ('{value}') for option '{option}' is invalid")]
    InvalidValue { option: &'static str, value: String },
    #[error("{0}")]
    Invalid(String),
}

fn required_message(names: &[&'static str]) -> String {
    match names {
        [] => "A required option is missing.".to_string(),
        [name] => format!("Option '{}' is required.", name),
        [init @ .., last] => format!(
            "One of the options {} or '{}' is required.",
            init.iter().map(|n| format!("'{}'", n)).join(", "),
            last
        ),
    }
}

/// Failure of a single transport round trip
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// The alarm deadline passed before the agent answered
    #[error("Alarm timeout reached")]
    Timeout,
    #[error("{0}")]
    Request(String),
}

/// Everything that can end a check early
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Options(#[from] OptionError),
    #[error("Unknown SNMP daemon (daemon not running or no supported MIB found)")]
    UnknownDaemon,
    #[error("Bad snmp request: {0}")]
    BadRequest(String),
    #[error("Bad snmp result: {0}")]
    BadResult(String),
    #[error("Alarm timeout reached")]
    AlarmTimeout,
    #[error("out of order execution of CheckAppl::{0}()")]
    OutOfOrder(&'static str),
    #[error("no field '{0}' in fetched data")]
    FieldNotFound(String),
    #[error("field '{key}' does not hold a {expected}")]
    FieldType { key: String, expected: &'static str },
    #[error("{0}")]
    Unsupported(String),
}

impl CheckError {
    /// Errors raised while talking to (or about) the agent
    pub fn is_snmp_error(&self) -> bool {
        match self {
            CheckError::UnknownDaemon | CheckError::BadRequest(_) | CheckError::BadResult(_) => {
                true
            }
            _ => false,
        }
    }

    /// Translate a transport failure, keeping timeouts distinguishable
    pub fn from_transport<F>(err: TransportError, context: F) -> CheckError
    where
        F: FnOnce() -> String,
    {
        match err {
            TransportError::Timeout => CheckError::AlarmTimeout,
            TransportError::Request(cause) => {
                log::debug!("request failed: {}", cause);
                CheckError::BadRequest(context())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{CheckError, OptionError, TransportError};

    #[test]
    fn required_messages() {
        assert_eq!(
            OptionError::Required(vec!["warn"]).to_string(),
            "Option 'warn' is required."
        );
        assert_eq!(
            OptionError::Required(vec!["index", "name"]).to_string(),
            "One of the options 'index' or 'name' is required."
        );
        assert_eq!(
            OptionError::Required(vec!["a", "b", "c"]).to_string(),
            "One of the options 'a', 'b' or 'c' is required."
        );
    }

    #[test]
    fn error_texts() {
        assert_eq!(
            CheckError::BadRequest("Cannot fetch values to check from net-snmpd".into())
                .to_string(),
            "Bad snmp request: Cannot fetch values to check from net-snmpd"
        );
        assert_eq!(
            CheckError::OutOfOrder("fetch_data").to_string(),
            "out of order execution of CheckAppl::fetch_data()"
        );
    }

    #[test]
    fn transport_timeouts_stay_timeouts() {
        let err = CheckError::from_transport(TransportError::Timeout, || "nope".to_string());
        match err {
            CheckError::AlarmTimeout => {}
            other => panic!("unexpected {:?}", other),
        }
        let err = CheckError::from_transport(TransportError::Request("io".into()), || {
            "context".to_string()
        });
        assert!(err.is_snmp_error());
        assert_eq!(err.to_string(), "Bad snmp request: context");
    }
}
