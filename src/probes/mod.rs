//! The checks shipped as binaries
//!
//! Each module defines one `Probe`: the schemas for the daemons it reads
//! and the messages it prints. The binaries in `src/bin` only parse the
//! command line and hand the option groups to `appl::main`.

use crate::daemon::{SnmpDaemonIdentifier, NET_SNMPD, SMART_SNMPD};
use crate::error::CheckError;

pub mod agent;
pub mod cpu;
pub mod daemon;
pub mod fs;
pub mod load;
pub mod mem;
pub mod proc_cnt;
pub mod procs;
pub mod user_cnt;

pub use self::agent::AgentProbe;
pub use self::cpu::CpuProbe;
pub use self::daemon::DaemonProbe;
pub use self::fs::FsProbe;
pub use self::load::LoadProbe;
pub use self::mem::{MemProbe, SwapProbe};
pub use self::proc_cnt::ProcCountProbe;
pub use self::procs::ProcessProbe;
pub use self::user_cnt::UserCountProbe;

/// smart-snmpd first, it carries the richer MIB
pub static SMART_AND_NET_SNMPD: [&SnmpDaemonIdentifier; 2] = [&SMART_SNMPD, &NET_SNMPD];
pub static SMART_SNMPD_ONLY: [&SnmpDaemonIdentifier; 1] = [&SMART_SNMPD];

pub const MIB: u64 = 1024 * 1024;

/// A daemon was identified that the probe has no schema for
fn unsupported(daemon: &SnmpDaemonIdentifier) -> CheckError {
    log::debug!("no schema for {}", daemon);
    CheckError::UnknownDaemon
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::appl::{CheckAppl, GeneralOptions, Probe};
    use crate::oids::smart_snmpd;
    use crate::snmp::mock::ScriptedAgent;
    use crate::snmp::{Oid, SnmpOptions, Value};
    use crate::Status;

    pub fn text(s: &str) -> Value {
        Value::OctetString(s.as_bytes().to_vec())
    }

    fn sys_object_id(id: &str) -> ScriptedAgent {
        let id = id.parse::<Oid>().unwrap();
        ScriptedAgent::new().with("1.3.6.1.2.1.1.2.0", Value::ObjectIdentifier(id))
    }

    pub fn smart_snmpd_agent() -> ScriptedAgent {
        sys_object_id(&format!("{}.1", smart_snmpd::ROOT))
    }

    pub fn net_snmpd_agent() -> ScriptedAgent {
        sys_object_id("1.3.6.1.4.1.8072.3.2.10")
    }

    pub fn appl<P: Probe>(
        probe: P,
        fetch: P::Fetch,
        check: P::Check,
        agent: ScriptedAgent,
    ) -> CheckAppl<P> {
        let snmp = SnmpOptions {
            community: Some("public".to_string()),
            ..Default::default()
        };
        CheckAppl::new(probe, fetch, check, GeneralOptions::default(), snmp, "auto".to_string())
            .with_transport(Box::new(agent))
    }

    /// Run a probe against `agent`, returning the status and the status line
    pub fn run<P: Probe>(
        probe: P,
        fetch: P::Fetch,
        check: P::Check,
        agent: ScriptedAgent,
    ) -> (Status, String) {
        let mut appl = appl(probe, fetch, check, agent);
        let status = appl.run();
        (status, appl.output().unwrap_or_default().to_string())
    }
}
