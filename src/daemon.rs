//! Telling apart the SNMP daemons a check knows how to read
//!
//! Each daemon flavor is recognized by the value it returns for one object:
//! the value has to start with the flavor's expected prefix.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use log::{debug, info};

use crate::error::{CheckError, OptionError, Result, TransportError};
use crate::oids::{self, smart_snmpd};
use crate::snmp::{Deadline, Oid, Transport, VarBind};

/// A daemon flavor: its name, the object to ask for and the value prefix
/// it answers with
#[derive(Debug)]
pub struct SnmpDaemonIdentifier {
    name: &'static str,
    prove_oid: &'static str,
    prove_value: &'static str,
}

pub static SMART_SNMPD: SnmpDaemonIdentifier =
    SnmpDaemonIdentifier::new("smart-snmpd", oids::SYS_OBJECT_ID, smart_snmpd::ROOT);
pub static NET_SNMPD: SnmpDaemonIdentifier =
    SnmpDaemonIdentifier::new("net-snmpd", oids::SYS_OBJECT_ID, oids::NET_SNMP_AGENT);

/// The value of `--snmpd-type` that asks for detection
pub const AUTO: &str = "auto";

impl SnmpDaemonIdentifier {
    pub const fn new(
        name: &'static str,
        prove_oid: &'static str,
        prove_value: &'static str,
    ) -> SnmpDaemonIdentifier {
        SnmpDaemonIdentifier {
            name,
            prove_oid,
            prove_value,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn prove_oid(&self) -> Oid {
        oids::oid(self.prove_oid)
    }

    pub fn prove_value(&self) -> &'static str {
        self.prove_value
    }

    pub fn proves(&self, value: &str) -> bool {
        value.starts_with(self.prove_value)
    }

    fn matches(&self, reply: &VarBind) -> bool {
        if reply.value.is_exception() {
            return false;
        }
        let value = reply.value.printable();
        debug!("probing {}: {} = {}", self.name, reply.oid, value);
        self.proves(&value)
    }
}

impl PartialEq for SnmpDaemonIdentifier {
    fn eq(&self, other: &SnmpDaemonIdentifier) -> bool {
        self.name == other.name
    }
}

impl Eq for SnmpDaemonIdentifier {}

impl PartialOrd for SnmpDaemonIdentifier {
    fn partial_cmp(&self, other: &SnmpDaemonIdentifier) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SnmpDaemonIdentifier {
    fn cmp(&self, other: &SnmpDaemonIdentifier) -> Ordering {
        self.name.cmp(other.name)
    }
}

impl Hash for SnmpDaemonIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state)
    }
}

impl fmt::Display for SnmpDaemonIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Resolve the `--snmpd-type` value against the daemons a check supports
///
/// `auto` resolves to `None`.
pub fn select(
    name: &str,
    supported: &[&'static SnmpDaemonIdentifier],
) -> std::result::Result<Option<&'static SnmpDaemonIdentifier>, OptionError> {
    if name == AUTO {
        return Ok(None);
    }
    supported
        .iter()
        .find(|daemon| daemon.name == name)
        .map(|daemon| Some(*daemon))
        .ok_or_else(|| OptionError::InvalidValue {
            option: "snmpd-type",
            value: name.to_string(),
        })
}

/// Ask for one object, a failed request counts as no answer
fn ask(
    transport: &mut dyn Transport,
    oids: &[Oid],
    deadline: &Deadline,
) -> Result<Option<Vec<VarBind>>> {
    match transport.get(oids, deadline) {
        Ok(reply) => Ok(Some(reply)),
        Err(TransportError::Timeout) => Err(CheckError::AlarmTimeout),
        Err(TransportError::Request(e)) => {
            debug!("identification request failed: {}", e);
            Ok(None)
        }
    }
}

/// Find out which of `candidates` is answering on `transport`
///
/// A `forced` daemon is only verified. Otherwise all candidates are asked
/// at once when the transport can combine requests, one after the other
/// when it cannot, and the first in `candidates` order that matches wins.
pub fn identify(
    transport: &mut dyn Transport,
    candidates: &[&'static SnmpDaemonIdentifier],
    forced: Option<&'static SnmpDaemonIdentifier>,
    deadline: &Deadline,
) -> Result<&'static SnmpDaemonIdentifier> {
    if let Some(daemon) = forced {
        info!("verifying snmp daemon is {}", daemon);
        let reply = ask(transport, &[daemon.prove_oid()], deadline)?;
        return match reply {
            Some(ref reply) if reply.first().map_or(false, |vb| daemon.matches(vb)) => Ok(daemon),
            _ => Err(CheckError::UnknownDaemon),
        };
    }

    if transport.can_combine_requests() {
        let oids = candidates.iter().map(|d| d.prove_oid()).collect::<Vec<_>>();
        if let Some(reply) = ask(transport, &oids, deadline)? {
            for (daemon, vb) in candidates.iter().zip(&reply) {
                if daemon.matches(vb) {
                    info!("identified snmp daemon {}", daemon);
                    return Ok(*daemon);
                }
            }
        }
    } else {
        for daemon in candidates {
            if let Some(reply) = ask(transport, &[daemon.prove_oid()], deadline)? {
                if reply.first().map_or(false, |vb| daemon.matches(vb)) {
                    info!("identified snmp daemon {}", daemon);
                    return Ok(*daemon);
                }
            }
        }
    }
    Err(CheckError::UnknownDaemon)
}
