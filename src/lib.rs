//! SNMP checks for Nagios and Sensu
//!
//! Every check in this crate follows the same pipeline: parse the command
//! line, identify which flavor of snmpd answers on the other end, fetch the
//! objects that flavor exposes, convert them into a metric map, compare the
//! prove value against the warn and crit thresholds and finally print a
//! single status line:
//!
//! ```plain
//! CHECKNAME STATUSWORD[ - message][|perfdata]
//! ```
//!
//! The binaries in `src/bin` are tiny, the shared machinery lives here:
//!
//! * [`threshold`](threshold/index.html) and [`compare`](compare/index.html)
//!   form the threshold engine
//! * [`daemon`](daemon/index.html) identifies the agent flavor
//! * [`fetch`](fetch/index.html) holds the static, table and process-scan
//!   strategies
//! * [`appl`](appl/index.html) wires everything into one state machine
//!
//! See [`scripts`](scripts/index.html) for the list of checks.

pub mod appl;
pub mod check;
pub mod compare;
pub mod daemon;
pub mod error;
pub mod fetch;
pub mod metrics;
pub mod oids;
pub mod probes;
pub mod process;
pub mod scripts;
pub mod snmp;
pub mod threshold;

mod status;

pub use crate::status::Status;
