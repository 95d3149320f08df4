//! Liveness of the application monitoring agent attached to smart-snmpd

use crate::appl::Probe;
use crate::check::WarnCritCheck;
use crate::compare::{AgentStatusCmp, Comparator};
use crate::daemon::{SnmpDaemonIdentifier, SMART_SNMPD};
use crate::error::Result;
use crate::fetch::FetchStatic;
use crate::metrics::{MetricMap, MetricSchema, Row};
use crate::oids::{self, smart_snmpd};
use crate::snmp::{Oid, VarBind};
use crate::threshold::{self, AgentStatusTuple, Threshold};
use crate::Status;

use super::{unsupported, SMART_SNMPD_ONLY};

const CORRUPT: &str = "Agent status data incomplete or corrupt";

/// Memory growth since aggregation started, in percent
fn variation(current: u64, aggregated: u64) -> f64 {
    let (current, aggregated) = if aggregated == 0 {
        (1, 1)
    } else {
        (current, aggregated)
    };
    (current as f64 - aggregated as f64) * 100.0 / aggregated as f64
}

struct SmartSnmpdAgent;

impl MetricSchema for SmartSnmpdAgent {
    fn data_oids(&self) -> Vec<Oid> {
        oids::oids(&[
            smart_snmpd::APP_LAST_UPDATE,
            smart_snmpd::APP_AGG_VSZ,
            smart_snmpd::APP_AGG_RSZ,
            smart_snmpd::APP_CUR_VSZ,
            smart_snmpd::APP_CUR_RSZ,
            smart_snmpd::APP_VSZ_INCREASES,
            smart_snmpd::APP_RSZ_INCREASES,
        ])
    }

    fn convert(&self, data: &[VarBind], metrics: &mut MetricMap) -> Result<()> {
        let row = Row::new(data, 7, CORRUPT)?;
        let (agg_vsz, agg_rsz) = (row.u64(1)?, row.u64(2)?);
        let (cur_vsz, cur_rsz) = (row.u64(3)?, row.u64(4)?);
        metrics.set_prove_value(AgentStatusTuple {
            updated: Threshold::new(row.u64(0)?),
            vsz_increases: Threshold::new(u64::from(row.u32(5)?)),
            rsz_increases: Threshold::new(u64::from(row.u32(6)?)),
        });
        metrics.insert("rel_vsz", variation(cur_vsz, agg_vsz));
        metrics.insert("rel_rsz", variation(cur_rsz, agg_rsz));
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AgentProbe {
    /// The reference time the age of the last update is measured from
    pub now: u64,
}

impl AgentProbe {
    pub fn new() -> AgentProbe {
        AgentProbe {
            now: threshold::now(),
        }
    }
}

impl Default for AgentProbe {
    fn default() -> AgentProbe {
        AgentProbe::new()
    }
}

impl Probe for AgentProbe {
    type Fetch = FetchStatic;
    type Check = WarnCritCheck<AgentStatusTuple>;

    fn check_name(&self) -> &'static str {
        "AGENT"
    }

    fn appl_name(&self) -> &'static str {
        "check_snmp_agent_avail"
    }

    fn description(&self) -> &'static str {
        "Check whether a suitable application monitoring agent is attached to snmpd or not"
    }

    fn supported_daemons(&self) -> &'static [&'static SnmpDaemonIdentifier] {
        &SMART_SNMPD_ONLY
    }

    fn schema(&self, daemon: &SnmpDaemonIdentifier) -> Result<Box<dyn MetricSchema>> {
        if *daemon == SMART_SNMPD {
            Ok(Box::new(SmartSnmpdAgent))
        } else {
            Err(unsupported(daemon))
        }
    }

    fn comparator(&self) -> Box<dyn Comparator<AgentStatusTuple>> {
        Box::new(AgentStatusCmp)
    }

    fn result_message(&self, metrics: &MetricMap, _check: &Self::Check) -> Result<String> {
        let agent = metrics.prove_value::<AgentStatusTuple>()?;
        let updated = agent.updated.get();
        let mut msg = if updated > 0 {
            let age = self.now.saturating_sub(updated);
            format!("has been updated last time {}m{}s ago", age / 60, age % 60)
        } else {
            "has never been updated".to_string()
        };
        if !agent.vsz_increases.is_empty() && !agent.rsz_increases.is_empty() {
            msg.push_str(&format!(
                ", increased vsz {} and rsz {} times",
                agent.vsz_increases, agent.rsz_increases
            ));
        }
        Ok(msg)
    }

    fn performance_message(&self, metrics: &MetricMap, _check: &Self::Check) -> Result<String> {
        Ok(format!(
            "vsz memory variation={:.2};0;0 rsz memory variation={:.2};0;0",
            metrics.get::<f64>("rel_vsz")?,
            metrics.get::<f64>("rel_rsz")?
        ))
    }

    fn failure_status(&self) -> Status {
        Status::Critical
    }
}

#[cfg(test)]
mod test {
    use super::{variation, AgentProbe};
    use crate::check::WarnCritCheck;
    use crate::fetch::FetchStatic;
    use crate::probes::test_support::{net_snmpd_agent, run, smart_snmpd_agent};
    use crate::snmp::mock::ScriptedAgent;
    use crate::snmp::Value;
    use crate::threshold::AgentStatusTuple;
    use crate::Status;

    const NOW: u64 = 1_600_000_000;

    fn probe() -> AgentProbe {
        AgentProbe { now: NOW }
    }

    fn agent_status(last_update: u64, vsz: (u64, u64), rsz: (u64, u64), incs: (u32, u32)) -> ScriptedAgent {
        smart_snmpd_agent()
            .with("1.3.6.1.4.1.36539.20.7.1.0", Value::Counter64(last_update))
            .with("1.3.6.1.4.1.36539.20.7.2.0", Value::Counter64(vsz.0))
            .with("1.3.6.1.4.1.36539.20.7.3.0", Value::Counter64(rsz.0))
            .with("1.3.6.1.4.1.36539.20.7.4.0", Value::Counter64(vsz.1))
            .with("1.3.6.1.4.1.36539.20.7.5.0", Value::Counter64(rsz.1))
            .with("1.3.6.1.4.1.36539.20.7.6.0", Value::Unsigned32(incs.0))
            .with("1.3.6.1.4.1.36539.20.7.7.0", Value::Unsigned32(incs.1))
    }

    fn thresholds(warn: &str, crit: &str) -> WarnCritCheck<AgentStatusTuple> {
        WarnCritCheck::new(
            Some(AgentStatusTuple::parse_at(warn, NOW).unwrap()),
            Some(AgentStatusTuple::parse_at(crit, NOW).unwrap()),
        )
    }

    #[test]
    fn recently_updated() {
        let agent = agent_status(NOW - 75, (1000, 1100), (400, 400), (2, 0));
        let (status, line) = run(probe(), FetchStatic, thresholds("5m,5,5", "15m,10,10"), agent);
        assert_eq!(status, Status::Ok);
        assert_eq!(
            line,
            "AGENT OK - has been updated last time 1m15s ago, increased vsz 2 and rsz 0 times\
             |vsz memory variation=10.00;0;0 rsz memory variation=0.00;0;0"
        );
    }

    #[test]
    fn stale_update_warns() {
        let agent = agent_status(NOW - 600, (1000, 1000), (400, 400), (0, 0));
        let (status, line) = run(probe(), FetchStatic, thresholds("5m", "15m"), agent);
        assert_eq!(status, Status::Warning);
        assert!(line.starts_with("AGENT WARNING - has been updated last time 10m0s ago,"), "{}", line);
    }

    #[test]
    fn too_many_increases_is_critical() {
        let agent = agent_status(NOW, (1000, 3000), (400, 800), (3, 12));
        let (status, _) = run(probe(), FetchStatic, thresholds("5m,5,5", "15m,10,10"), agent);
        assert_eq!(status, Status::Critical);
    }

    #[test]
    fn never_updated() {
        let agent = agent_status(0, (0, 0), (0, 0), (0, 0));
        let (status, line) = run(probe(), FetchStatic, thresholds("5m", "15m"), agent);
        assert_eq!(status, Status::Critical);
        assert!(line.starts_with("AGENT CRITICAL - has never been updated"), "{}", line);
    }

    #[test]
    fn net_snmpd_is_critical() {
        let (status, line) = run(probe(), FetchStatic, WarnCritCheck::default(), net_snmpd_agent());
        assert_eq!(status, Status::Critical);
        assert!(line.starts_with("AGENT CRITICAL - Unknown SNMP daemon"), "{}", line);
    }

    #[test]
    fn unreachable_agent_is_critical() {
        let mut agent = smart_snmpd_agent();
        agent.go_silent();
        let (status, _) = run(probe(), FetchStatic, WarnCritCheck::default(), agent);
        assert_eq!(status, Status::Critical);
    }

    #[test]
    fn variation_without_aggregate() {
        assert_eq!(variation(500, 0), 0.0);
        assert_eq!(variation(150, 100), 50.0);
        assert_eq!(variation(50, 100), -50.0);
    }
}
