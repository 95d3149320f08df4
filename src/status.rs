use std::fmt;
use std::process;
use std::str::FromStr;

use serde::Deserialize;

/// The status vocabulary of a check
///
/// Ordered by severity so that `max` picks the worse of two results,
/// `Exception` is what a run ends with when no status could be determined.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
    Dependent,
    Exception,
}

impl Status {
    #![cfg_attr(test, allow(dead_code))]
    pub fn exit(self) -> ! {
        process::exit(self.code())
    }

    /// The process exit code for this status
    pub fn code(self) -> i32 {
        use self::Status::*;
        match self {
            Ok => 0,
            Warning => 1,
            Critical => 2,
            Unknown => 3,
            Dependent => 4,
            Exception => 255,
        }
    }

    /// The word printed after the check name
    pub fn word(self) -> &'static str {
        use self::Status::*;
        match self {
            Ok => "OK",
            Warning => "WARNING",
            Critical => "CRITICAL",
            Unknown | Exception => "UNKNOWN",
            Dependent => "DEPENDENT",
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Status, String> {
        use self::Status::*;
        match s {
            "ok" => Result::Ok(Ok),
            "warning" => Result::Ok(Warning),
            "critical" => Result::Ok(Critical),
            "unknown" => Result::Ok(Unknown),
            "dependent" => Result::Ok(Dependent),
            _ => Err(format!("Unexpected exit status: {}", s)),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.word())
    }
}
