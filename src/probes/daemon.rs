//! Whether any snmpd the checks know about answers at all

use crate::appl::{Probe, DAEMON_NAME};
use crate::check::BoolCritCheck;
use crate::compare::Comparator;
use crate::daemon::SnmpDaemonIdentifier;
use crate::error::{CheckError, Result};
use crate::fetch::IdentifyOnly;
use crate::metrics::MetricMap;
use crate::Status;

use super::SMART_AND_NET_SNMPD;

#[derive(Clone, Copy, Debug, Default)]
pub struct DaemonProbe;

impl Probe for DaemonProbe {
    type Fetch = IdentifyOnly;
    type Check = BoolCritCheck;

    fn check_name(&self) -> &'static str {
        "DAEMON"
    }

    fn appl_name(&self) -> &'static str {
        "check_snmp_daemon_avail"
    }

    fn description(&self) -> &'static str {
        "Check whether a suitable snmpd is available or not"
    }

    fn supported_daemons(&self) -> &'static [&'static SnmpDaemonIdentifier] {
        &SMART_AND_NET_SNMPD
    }

    fn schema(&self, _daemon: &SnmpDaemonIdentifier) -> Result<Box<()>> {
        Ok(Box::new(()))
    }

    fn comparator(&self) -> Box<dyn Comparator<bool>> {
        Box::new(|x: &bool, y: &bool| x == y)
    }

    fn result_message(&self, metrics: &MetricMap, _check: &Self::Check) -> Result<String> {
        metrics.get::<String>(DAEMON_NAME)
    }

    fn performance_message(&self, _metrics: &MetricMap, _check: &Self::Check) -> Result<String> {
        Ok(String::new())
    }

    fn failure_status(&self) -> Status {
        Status::Critical
    }

    fn failure_message(&self, err: &CheckError) -> String {
        match err {
            CheckError::AlarmTimeout => {
                "Alarm timeout reached (daemon supposably not running)".to_string()
            }
            _ => err.to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::DaemonProbe;
    use crate::appl::Probe;
    use crate::check::BoolCritCheck;
    use crate::error::CheckError;
    use crate::fetch::IdentifyOnly;
    use crate::probes::test_support::{net_snmpd_agent, run, smart_snmpd_agent};
    use crate::snmp::mock::ScriptedAgent;
    use crate::Status;

    #[test]
    fn smart_snmpd_answers() {
        let (status, line) = run(DaemonProbe, IdentifyOnly, BoolCritCheck, smart_snmpd_agent());
        assert_eq!(status, Status::Ok);
        assert_eq!(line, "DAEMON OK - smart-snmpd");
    }

    #[test]
    fn net_snmpd_answers() {
        let (status, line) = run(DaemonProbe, IdentifyOnly, BoolCritCheck, net_snmpd_agent());
        assert_eq!(status, Status::Ok);
        assert_eq!(line, "DAEMON OK - net-snmpd");
    }

    #[test]
    fn nobody_home() {
        let mut agent = ScriptedAgent::new();
        agent.go_silent();
        let (status, line) = run(DaemonProbe, IdentifyOnly, BoolCritCheck, agent);
        assert_eq!(status, Status::Critical);
        assert_eq!(status.code(), 2);
        assert!(line.starts_with("DAEMON CRITICAL - Unknown SNMP daemon"), "{}", line);
    }

    #[test]
    fn timeout_message() {
        assert_eq!(
            DaemonProbe.failure_message(&CheckError::AlarmTimeout),
            "Alarm timeout reached (daemon supposably not running)"
        );
        assert_eq!(
            DaemonProbe.failure_message(&CheckError::UnknownDaemon),
            CheckError::UnknownDaemon.to_string()
        );
    }
}
