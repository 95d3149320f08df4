//! `Transport` on top of the `snmp2` synchronous session

use std::fmt;

use itertools::Itertools;
use log::{debug, info};
use snmp2::SyncSession;

use super::options::{SnmpOptions, SnmpVersion};
use super::{Deadline, Oid, Transport, Value, VarBind};
use crate::error::{CheckError, TransportError};

/// SNMPv1 error status for a get-next past the last object
const NO_SUCH_NAME: u32 = 2;

pub struct SnmpSession {
    inner: SyncSession,
    version: SnmpVersion,
    target: String,
    retries: u32,
}

impl fmt::Debug for SnmpSession {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SnmpSession")
            .field("version", &self.version)
            .field("target", &self.target)
            .field("retries", &self.retries)
            .finish()
    }
}

impl SnmpSession {
    /// Open a session for validated `options`
    ///
    /// The request timeout never exceeds what remains of `deadline`.
    pub fn open(options: &SnmpOptions, deadline: &Deadline) -> Result<SnmpSession, CheckError> {
        let target = options.target();
        let timeout = deadline.clamp(options.request_timeout());
        let community = options.community.clone().unwrap_or_default();
        let inner = match options.snmp_version {
            SnmpVersion::V1 => SyncSession::new_v1(&*target, community.as_bytes(), Some(timeout), 0),
            SnmpVersion::V2c => {
                SyncSession::new_v2c(&*target, community.as_bytes(), Some(timeout), 0)
            }
            SnmpVersion::V3 => {
                return Err(CheckError::Unsupported(
                    "SNMPv3 is not supported by this build".to_string(),
                ))
            }
        }
        .map_err(|e| CheckError::BadRequest(format!("Cannot open session to {}: {}", target, e)))?;
        if options.context_name.is_some() {
            log::warn!("option 'context-name' is only used with SNMPv3, ignoring it");
        }
        info!(
            "SNMPv{} session to {} (timeout {:?}, {} retries)",
            options.snmp_version, target, timeout, options.retries
        );
        Ok(SnmpSession {
            inner,
            version: options.snmp_version,
            target,
            retries: options.retries,
        })
    }

    /// Run `request`, repeating it up to `retries` times while it fails
    fn with_retries<T, F>(&mut self, deadline: &Deadline, mut request: F) -> Result<T, TransportError>
    where
        F: FnMut(&mut SyncSession) -> Result<T, String>,
    {
        let mut attempt = 0;
        loop {
            deadline.check()?;
            match request(&mut self.inner) {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.retries => {
                    debug!("request to {} failed ({}), retrying", self.target, e);
                    attempt += 1;
                }
                Err(e) => {
                    deadline.check()?;
                    return Err(TransportError::Request(format!("{}: {}", self.target, e)));
                }
            }
        }
    }
}

fn to_wire(oid: &Oid) -> Result<snmp2::Oid<'static>, TransportError> {
    snmp2::Oid::from(oid.arcs())
        .map_err(|e| TransportError::Request(format!("cannot encode oid {}: {:?}", oid, e)))
}

fn from_wire(oid: &snmp2::Oid) -> Result<Oid, String> {
    oid.to_id_string()
        .parse()
        .map_err(|e| format!("cannot decode oid: {}", e))
}

fn value_from_wire(value: snmp2::Value) -> Result<Value, String> {
    let value = match value {
        snmp2::Value::Integer(i) => Value::Integer(i),
        snmp2::Value::OctetString(bytes) => Value::OctetString(bytes.to_vec()),
        snmp2::Value::ObjectIdentifier(oid) => Value::ObjectIdentifier(from_wire(&oid)?),
        snmp2::Value::IpAddress(ip) => Value::IpAddress(ip),
        snmp2::Value::Counter32(c) => Value::Counter32(c),
        snmp2::Value::Unsigned32(u) => Value::Unsigned32(u),
        snmp2::Value::Timeticks(t) => Value::Timeticks(t),
        snmp2::Value::Counter64(c) => Value::Counter64(c),
        snmp2::Value::Null => Value::Null,
        snmp2::Value::NoSuchObject => Value::NoSuchObject,
        snmp2::Value::NoSuchInstance => Value::NoSuchInstance,
        snmp2::Value::EndOfMibView => Value::EndOfMibView,
        other => {
            debug!("unhandled value {:?}", other);
            Value::Null
        }
    };
    Ok(value)
}

fn varbinds(pdu: snmp2::Pdu) -> Result<Vec<VarBind>, String> {
    if pdu.error_status != 0 {
        return Err(format!(
            "agent answered with error status {} at index {}",
            pdu.error_status, pdu.error_index
        ));
    }
    let mut received = Vec::new();
    for (oid, value) in pdu.varbinds {
        let vb = VarBind::new(from_wire(&oid)?, value_from_wire(value)?);
        debug!("received {}", vb);
        received.push(vb);
    }
    Ok(received)
}

/// The gets needed for `oids`, one per object unless they can be combined
///
/// SNMPv1 agents reject a whole request when one of its objects is missing.
fn request_batches(oids: &[Oid], combine: bool) -> std::slice::Chunks<'_, Oid> {
    oids.chunks(if combine { oids.len().max(1) } else { 1 })
}

impl Transport for SnmpSession {
    fn get(&mut self, oids: &[Oid], deadline: &Deadline) -> Result<Vec<VarBind>, TransportError> {
        let mut received = Vec::with_capacity(oids.len());
        for batch in request_batches(oids, self.can_combine_requests()) {
            debug!("get {}", batch.iter().join(", "));
            let wire = batch.iter().map(to_wire).collect::<Result<Vec<_>, _>>()?;
            let reply = self.with_retries(deadline, |session| {
                let objects = wire.iter().collect::<Vec<_>>();
                let pdu = session.get_many(&objects).map_err(|e| format!("{:?}", e))?;
                varbinds(pdu)
            })?;
            received.extend(reply);
        }
        Ok(received)
    }

    fn get_next(&mut self, oid: &Oid, deadline: &Deadline) -> Result<VarBind, TransportError> {
        debug!("get-next {}", oid);
        let wire = to_wire(oid)?;
        let v1 = self.version == SnmpVersion::V1;
        let reply = self.with_retries(deadline, |session| {
            let pdu = session.getnext(&wire).map_err(|e| format!("{:?}", e))?;
            if v1 && pdu.error_status == NO_SUCH_NAME {
                return Ok(Vec::new());
            }
            varbinds(pdu)
        })?;
        Ok(reply
            .into_iter()
            .next()
            .unwrap_or_else(|| VarBind::new(oid.clone(), Value::EndOfMibView)))
    }

    /// SNMPv1 has no get-bulk, it is emulated row by row with get-next
    fn get_bulk(
        &mut self,
        oids: &[Oid],
        max_repetitions: u32,
        deadline: &Deadline,
    ) -> Result<Vec<VarBind>, TransportError> {
        if self.version == SnmpVersion::V1 {
            let mut cursor = oids.to_vec();
            let mut received = Vec::new();
            for _ in 0..max_repetitions {
                let mut row = Vec::with_capacity(cursor.len());
                for oid in &cursor {
                    row.push(self.get_next(oid, deadline)?);
                }
                let finished = row.iter().all(|vb| vb.value == Value::EndOfMibView);
                cursor = row.iter().map(|vb| vb.oid.clone()).collect();
                received.extend(row);
                if finished {
                    break;
                }
            }
            return Ok(received);
        }

        debug!("get-bulk {} oids, {} repetitions", oids.len(), max_repetitions);
        let wire = oids.iter().map(to_wire).collect::<Result<Vec<_>, _>>()?;
        let refs = wire.iter().collect::<Vec<_>>();
        self.with_retries(deadline, |session| {
            let pdu = session
                .getbulk(&refs, 0, max_repetitions)
                .map_err(|e| format!("{:?}", e))?;
            varbinds(pdu)
        })
    }

    fn can_combine_requests(&self) -> bool {
        self.version > SnmpVersion::V1
    }
}
