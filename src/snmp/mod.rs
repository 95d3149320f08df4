//! The SNMP side of a check: object identifiers, typed values and the
//! transport the checks talk through
//!
//! Checks never see the wire client directly. They issue requests through
//! the [`Transport`] trait, which [`SnmpSession`] implements on top of
//! `snmp2` and which tests implement with a scripted agent.
//!
//! [`Transport`]: trait.Transport.html
//! [`SnmpSession`]: struct.SnmpSession.html

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use itertools::Itertools;
use log::{debug, warn};

use crate::error::{CheckError, ParseError, Result, TransportError};

#[cfg(test)]
pub(crate) mod mock;
pub mod options;
mod session;

pub use self::options::{AuthProtocol, PrivProtocol, SecurityLevel, SnmpOptions, SnmpVersion};
pub use self::session::SnmpSession;

/// Rows requested per bulk round trip when scanning a table
pub const DEFAULT_MAX_REPETITIONS: u32 = 16;

/// An object identifier, stored as its numeric arcs
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Oid(Vec<u64>);

impl Oid {
    pub fn new(arcs: Vec<u64>) -> Oid {
        Oid(arcs)
    }

    pub fn arcs(&self) -> &[u64] {
        &self.0
    }

    pub fn starts_with(&self, prefix: &Oid) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// This identifier with `index` appended
    pub fn child(&self, index: u64) -> Oid {
        let mut arcs = self.0.clone();
        arcs.push(index);
        Oid(arcs)
    }

    pub fn last(&self) -> Option<u64> {
        self.0.last().cloned()
    }

    /// Rendered the way net-snmp prints it without MIBs loaded, `iso.3.6...`
    pub fn to_iso_string(&self) -> String {
        match self.0.split_first() {
            Some((&1, rest)) if !rest.is_empty() => format!("iso.{}", rest.iter().join(".")),
            _ => self.to_string(),
        }
    }
}

impl FromStr for Oid {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Oid, ParseError> {
        let trimmed = s.trim().trim_start_matches('.');
        if trimmed.is_empty() {
            return Err(ParseError::InvalidNumber(s.to_string()));
        }
        trimmed
            .split('.')
            .map(|arc| arc.parse::<u64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(Oid)
            .map_err(|_| ParseError::InvalidNumber(s.to_string()))
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.iter().join("."))
    }
}

impl From<&[u64]> for Oid {
    fn from(arcs: &[u64]) -> Oid {
        Oid(arcs.to_vec())
    }
}

/// A value received from the agent
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    OctetString(Vec<u8>),
    ObjectIdentifier(Oid),
    IpAddress([u8; 4]),
    Counter32(u32),
    Unsigned32(u32),
    Timeticks(u32),
    Counter64(u64),
    Null,
    NoSuchObject,
    NoSuchInstance,
    EndOfMibView,
}

impl Value {
    /// Counter32, Gauge32/Unsigned32 and TimeTicks
    pub fn as_u32(&self) -> Option<u32> {
        match *self {
            Value::Counter32(u) | Value::Unsigned32(u) | Value::Timeticks(u) => Some(u),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::Counter64(u) => Some(u),
            _ => None,
        }
    }

    /// Any non negative integer, whatever its declared type
    pub fn as_count(&self) -> Option<u64> {
        match *self {
            Value::Integer(i) if i >= 0 => Some(i as u64),
            Value::Counter32(u) | Value::Unsigned32(u) | Value::Timeticks(u) => Some(u64::from(u)),
            Value::Counter64(u) => Some(u),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<String> {
        match *self {
            Value::OctetString(ref bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        }
    }

    /// Exceptions an agent returns in place of a value
    pub fn is_exception(&self) -> bool {
        match *self {
            Value::NoSuchObject | Value::NoSuchInstance | Value::EndOfMibView => true,
            _ => false,
        }
    }

    pub fn printable(&self) -> String {
        match *self {
            Value::Integer(i) => i.to_string(),
            Value::OctetString(ref bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Value::ObjectIdentifier(ref oid) => oid.to_string(),
            Value::IpAddress(ip) => ip.iter().join("."),
            Value::Counter32(u) | Value::Unsigned32(u) | Value::Timeticks(u) => u.to_string(),
            Value::Counter64(u) => u.to_string(),
            Value::Null => String::new(),
            Value::NoSuchObject => "noSuchObject".to_string(),
            Value::NoSuchInstance => "noSuchInstance".to_string(),
            Value::EndOfMibView => "endOfMibView".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VarBind {
    pub oid: Oid,
    pub value: Value,
}

impl VarBind {
    pub fn new(oid: Oid, value: Value) -> VarBind {
        VarBind { oid, value }
    }
}

impl fmt::Display for VarBind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.oid, self.value.printable())
    }
}

/// The point in time after which a check gives up
///
/// An unarmed deadline never passes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    pub fn unarmed() -> Deadline {
        Deadline { at: None }
    }

    /// A deadline `secs` from now; 0 leaves it unarmed
    pub fn after_secs(secs: u64) -> Deadline {
        if secs == 0 {
            Deadline::unarmed()
        } else {
            Deadline::after(Duration::from_secs(secs))
        }
    }

    pub fn after(timeout: Duration) -> Deadline {
        Deadline {
            at: Some(Instant::now() + timeout),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.at.is_some()
    }

    pub fn disarm(&mut self) {
        self.at = None;
    }

    /// Time left, `None` when unarmed
    pub fn remaining(&self) -> Option<Duration> {
        self.at
            .map(|at| at.saturating_duration_since(Instant::now()))
    }

    pub fn has_passed(&self) -> bool {
        self.remaining() == Some(Duration::from_secs(0))
    }

    pub fn check(&self) -> std::result::Result<(), TransportError> {
        if self.has_passed() {
            Err(TransportError::Timeout)
        } else {
            Ok(())
        }
    }

    /// `timeout`, cut short if the deadline comes first
    pub fn clamp(&self, timeout: Duration) -> Duration {
        match self.remaining() {
            Some(left) if left < timeout => left,
            _ => timeout,
        }
    }
}

/// The requests a check can send to an agent
///
/// Every call checks `deadline` before it goes out and returns
/// `TransportError::Timeout` once it has passed.
pub trait Transport {
    /// Fetch all `oids`; the reply holds one var-bind per requested oid
    fn get(
        &mut self,
        oids: &[Oid],
        deadline: &Deadline,
    ) -> std::result::Result<Vec<VarBind>, TransportError>;

    fn get_next(
        &mut self,
        oid: &Oid,
        deadline: &Deadline,
    ) -> std::result::Result<VarBind, TransportError>;

    /// Up to `max_repetitions` successors of every oid, interleaved row by row
    fn get_bulk(
        &mut self,
        oids: &[Oid],
        max_repetitions: u32,
        deadline: &Deadline,
    ) -> std::result::Result<Vec<VarBind>, TransportError>;

    /// Whether several objects can be asked for in one round trip
    fn can_combine_requests(&self) -> bool;
}

/// Scan the table columns starting at `columns` row by row
///
/// `on_row` receives one var-bind per column and returns `true` to stop the
/// scan. The scan also ends when the agent reports the end of its MIB view
/// or any column leaves the subtree it started in. A failing request is
/// reported as a bad request carrying `context`.
pub fn get_table<F>(
    transport: &mut dyn Transport,
    columns: &[Oid],
    max_repetitions: u32,
    deadline: &Deadline,
    context: &str,
    mut on_row: F,
) -> Result<()>
where
    F: FnMut(&[VarBind]) -> bool,
{
    if columns.is_empty() {
        return Ok(());
    }
    let mut cursor = columns.to_vec();
    loop {
        let reply = transport
            .get_bulk(&cursor, max_repetitions, deadline)
            .map_err(|e| CheckError::from_transport(e, || context.to_string()))?;
        debug!("bulk reply with {} var-binds", reply.len());

        match reply.as_slice() {
            [] => return Ok(()),
            [only] if only.value == Value::EndOfMibView => return Ok(()),
            _ => {}
        }
        if reply.len() % columns.len() != 0 {
            return Err(CheckError::BadResult(format!(
                "Invalid number of results ({}), expected multiple of {}",
                reply.len(),
                columns.len()
            )));
        }

        for row in reply.chunks(columns.len()) {
            let left_table = row
                .iter()
                .zip(columns)
                .any(|(vb, column)| vb.value == Value::EndOfMibView || !vb.oid.starts_with(column));
            if left_table || on_row(row) {
                return Ok(());
            }
        }

        let next = reply[reply.len() - columns.len()..]
            .iter()
            .map(|vb| vb.oid.clone())
            .collect::<Vec<_>>();
        if next <= cursor {
            warn!("agent did not advance past {}, stopping scan", cursor.iter().join(", "));
            return Ok(());
        }
        cursor = next;
    }
}

/// Get `oids` in one request and check that every one of them was answered
pub fn get_values(
    transport: &mut dyn Transport,
    oids: &[Oid],
    deadline: &Deadline,
    context: &str,
) -> Result<Vec<VarBind>> {
    let reply = transport
        .get(oids, deadline)
        .map_err(|e| CheckError::from_transport(e, || context.to_string()))?;
    if reply.len() != oids.len() {
        return Err(CheckError::BadResult(
            "Can't extract varBinds after successful get request".to_string(),
        ));
    }
    for vb in &reply {
        debug!("received {}", vb);
    }
    Ok(reply)
}
