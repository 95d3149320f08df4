//! Number of running processes

use crate::appl::Probe;
use crate::check::WarnCritCheck;
use crate::compare::{Comparator, Relation};
use crate::daemon::{SnmpDaemonIdentifier, NET_SNMPD, SMART_SNMPD};
use crate::error::Result;
use crate::fetch::FetchStatic;
use crate::metrics::{MetricMap, MetricSchema, Row};
use crate::oids::{self, host_resources, smart_snmpd};
use crate::snmp::{Oid, VarBind};
use crate::threshold::{AbsoluteThreshold, Threshold};

use super::{unsupported, SMART_AND_NET_SNMPD};

/// A single counter object, read as a Counter64 or as a 32 bit gauge
pub(super) struct Counter {
    pub oid: &'static str,
    pub wide: bool,
    pub corrupt: &'static str,
}

impl MetricSchema for Counter {
    fn data_oids(&self) -> Vec<Oid> {
        vec![oids::oid(self.oid)]
    }

    fn convert(&self, data: &[VarBind], metrics: &mut MetricMap) -> Result<()> {
        let row = Row::new(data, 1, self.corrupt)?;
        let count = if self.wide {
            row.u64(0)?
        } else {
            u64::from(row.u32(0)?)
        };
        metrics.set_prove_value(Threshold::new(count));
        Ok(())
    }
}

const CORRUPT: &str = "Process count incomplete (o.O) or corrupt";

#[derive(Clone, Copy, Debug, Default)]
pub struct ProcCountProbe;

impl Probe for ProcCountProbe {
    type Fetch = FetchStatic;
    type Check = WarnCritCheck<AbsoluteThreshold>;

    fn check_name(&self) -> &'static str {
        "PROCS"
    }

    fn appl_name(&self) -> &'static str {
        "check_proc_cnt_by_snmp"
    }

    fn description(&self) -> &'static str {
        "Check count of running processes via Simple Network Management Protocol"
    }

    fn supported_daemons(&self) -> &'static [&'static SnmpDaemonIdentifier] {
        &SMART_AND_NET_SNMPD
    }

    fn schema(&self, daemon: &SnmpDaemonIdentifier) -> Result<Box<dyn MetricSchema>> {
        let counter = if *daemon == SMART_SNMPD {
            Counter {
                oid: smart_snmpd::PROCESS_TOTAL,
                wide: true,
                corrupt: CORRUPT,
            }
        } else if *daemon == NET_SNMPD {
            Counter {
                oid: host_resources::HR_SYSTEM_PROCESSES,
                wide: false,
                corrupt: CORRUPT,
            }
        } else {
            return Err(unsupported(daemon));
        };
        Ok(Box::new(counter))
    }

    fn comparator(&self) -> Box<dyn Comparator<AbsoluteThreshold>> {
        Box::new(Relation::Ge)
    }

    fn result_message(&self, metrics: &MetricMap, _check: &Self::Check) -> Result<String> {
        let procs = metrics.prove_value::<AbsoluteThreshold>()?;
        Ok(format!("{} procs currently running", procs))
    }

    fn performance_message(&self, metrics: &MetricMap, _check: &Self::Check) -> Result<String> {
        let procs = metrics.prove_value::<AbsoluteThreshold>()?;
        Ok(format!("procs={};", procs))
    }
}

#[cfg(test)]
mod test {
    use super::ProcCountProbe;
    use crate::check::WarnCritCheck;
    use crate::fetch::FetchStatic;
    use crate::probes::test_support::{net_snmpd_agent, run, smart_snmpd_agent};
    use crate::snmp::mock::ScriptedAgent;
    use crate::snmp::Value;
    use crate::threshold::{AbsoluteThreshold, Threshold};
    use crate::Status;

    fn thresholds(warn: u64, crit: u64) -> WarnCritCheck<AbsoluteThreshold> {
        WarnCritCheck::new(Some(Threshold::new(warn)), Some(Threshold::new(crit)))
    }

    fn hr_agent(procs: u32) -> ScriptedAgent {
        net_snmpd_agent().with("1.3.6.1.2.1.25.1.6.0", Value::Unsigned32(procs))
    }

    #[test]
    fn too_many_processes() {
        let (status, line) = run(ProcCountProbe, FetchStatic, thresholds(50, 100), hr_agent(120));
        assert_eq!(status, Status::Critical);
        assert_eq!(status.code(), 2);
        assert_eq!(line, "PROCS CRITICAL - 120 procs currently running|procs=120;");
    }

    #[test]
    fn between_warn_and_crit() {
        let (status, _) = run(ProcCountProbe, FetchStatic, thresholds(50, 100), hr_agent(50));
        assert_eq!(status, Status::Warning);
    }

    #[test]
    fn smart_snmpd_counter() {
        let agent = smart_snmpd_agent().with("1.3.6.1.4.1.36539.20.4.1.0", Value::Counter64(42));
        let (status, line) = run(ProcCountProbe, FetchStatic, thresholds(50, 100), agent);
        assert_eq!(status, Status::Ok);
        assert_eq!(line, "PROCS OK - 42 procs currently running|procs=42;");
    }

    #[test]
    fn wrong_type_is_corrupt() {
        let agent = net_snmpd_agent().with("1.3.6.1.2.1.25.1.6.0", Value::Counter64(42));
        let (status, line) = run(ProcCountProbe, FetchStatic, thresholds(50, 100), agent);
        assert_eq!(status, Status::Unknown);
        assert_eq!(
            line,
            "PROCS UNKNOWN - Bad snmp result: Process count incomplete (o.O) or corrupt"
        );
    }
}
