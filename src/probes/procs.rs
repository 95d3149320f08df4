//! Number of processes matching a filter, read from the smart-snmpd
//! process table

use crate::appl::Probe;
use crate::check::WarnCritCheck;
use crate::compare::{Comparator, RangeCmp};
use crate::daemon::{SnmpDaemonIdentifier, SMART_SNMPD};
use crate::error::Result;
use crate::fetch::{process_columns, FetchProcesses};
use crate::metrics::MetricMap;
use crate::snmp::Oid;
use crate::threshold::RangeThreshold;

use super::{unsupported, SMART_SNMPD_ONLY};

#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessProbe;

impl Probe for ProcessProbe {
    type Fetch = FetchProcesses;
    type Check = WarnCritCheck<RangeThreshold<u64>>;

    fn check_name(&self) -> &'static str {
        "PROCS_EXT"
    }

    fn appl_name(&self) -> &'static str {
        "check_procs_by_snmp"
    }

    fn description(&self) -> &'static str {
        "Check count of a certain running process via Simple Network Management Protocol"
    }

    fn supported_daemons(&self) -> &'static [&'static SnmpDaemonIdentifier] {
        &SMART_SNMPD_ONLY
    }

    fn schema(&self, daemon: &SnmpDaemonIdentifier) -> Result<Box<[Oid]>> {
        if *daemon == SMART_SNMPD {
            Ok(process_columns().into_boxed_slice())
        } else {
            Err(unsupported(daemon))
        }
    }

    fn comparator(&self) -> Box<dyn Comparator<RangeThreshold<u64>>> {
        Box::new(RangeCmp::default())
    }

    fn result_message(&self, metrics: &MetricMap, _check: &Self::Check) -> Result<String> {
        Ok(format!(
            "{} Processes ( {} )",
            metrics.get::<u64>("count")?,
            metrics.get::<String>("filter")?
        ))
    }

    fn performance_message(&self, metrics: &MetricMap, _check: &Self::Check) -> Result<String> {
        Ok(format!("count={}", metrics.get::<u64>("count")?))
    }

    fn show_performance_data(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod test {
    use super::ProcessProbe;
    use crate::check::WarnCritCheck;
    use crate::fetch::FetchProcesses;
    use crate::probes::test_support::{appl, net_snmpd_agent, run, smart_snmpd_agent, text};
    use crate::process::ProcessFilterOptions;
    use crate::snmp::mock::ScriptedAgent;
    use crate::threshold::RangeThreshold;
    use crate::Status;

    fn process_table() -> ScriptedAgent {
        let rows = [
            (1, "/sbin/init splash", "root", "root"),
            (412, "/usr/sbin/cron -f", "root", "root"),
            (1200, "postgres: checkpointer", "postgres", "postgres"),
            (1201, "postgres: walwriter", "postgres", "postgres"),
            (1202, "postgres -D /var/lib/postgresql", "postgres", "postgres"),
        ];
        let mut agent = smart_snmpd_agent();
        for &(index, args, user, group) in rows.iter() {
            let prefix = "1.3.6.1.4.1.36539.20.4.2.1";
            agent
                .insert(&format!("{}.3.{}", prefix, index), text(args))
                .insert(&format!("{}.4.{}", prefix, index), text(user))
                .insert(&format!("{}.5.{}", prefix, index), text(group))
                .insert(&format!("{}.6.{}", prefix, index), text(user))
                .insert(&format!("{}.7.{}", prefix, index), text(group));
        }
        agent
    }

    fn filter(command: &str, user: Option<&str>) -> FetchProcesses {
        FetchProcesses::new(ProcessFilterOptions {
            command: Some(command.to_string()),
            username: user.map(str::to_string),
            ..Default::default()
        })
    }

    fn range(warn: &str, crit: &str) -> WarnCritCheck<RangeThreshold<u64>> {
        WarnCritCheck::new(Some(warn.parse().unwrap()), Some(crit.parse().unwrap()))
    }

    #[test]
    fn count_inside_range() {
        let (status, line) = run(
            ProcessProbe,
            filter("postgres:?", Some("postgres")),
            range("1:5", "1:10"),
            process_table(),
        );
        assert_eq!(status, Status::Ok);
        assert_eq!(line, "PROCS_EXT OK - 3 Processes ( command=postgres:?,username=postgres )");
    }

    #[test]
    fn missing_process_is_critical() {
        let (status, line) = run(ProcessProbe, filter("nginx", None), range("1:", "1:"), process_table());
        assert_eq!(status, Status::Critical);
        assert_eq!(line, "PROCS_EXT CRITICAL - 0 Processes ( command=nginx )");
    }

    #[test]
    fn performance_data_hidden_by_default() {
        let mut appl = appl(ProcessProbe, filter("/usr/sbin/cron", None), range("2:", "1:"), process_table());
        assert_eq!(appl.execute().unwrap(), Status::Warning);
        assert_eq!(
            appl.render(Status::Warning, None),
            "PROCS_EXT WARNING - 1 Processes ( command=/usr/sbin/cron )"
        );
    }

    #[test]
    fn net_snmpd_has_no_process_table() {
        let (status, line) = run(ProcessProbe, filter("cron", None), range("1:", "1:"), net_snmpd_agent());
        assert_eq!(status, Status::Unknown);
        assert!(line.starts_with("PROCS_EXT UNKNOWN - Unknown SNMP daemon"), "{}", line);
    }
}
