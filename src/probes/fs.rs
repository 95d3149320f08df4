//! Free space of one file system, picked by mountpoint or table index

use crate::appl::Probe;
use crate::check::MandatoryWarnCritCheck;
use crate::compare::{AbsoluteRelativeCmp, Comparator};
use crate::daemon::{SnmpDaemonIdentifier, NET_SNMPD, SMART_SNMPD};
use crate::error::Result;
use crate::fetch::FetchTable;
use crate::metrics::{row_oids, MetricMap, MetricSchema, Row, TableSchema};
use crate::oids::{self, host_resources, smart_snmpd};
use crate::snmp::{Oid, VarBind};
use crate::threshold::{SizeThreshold, Threshold};

use super::{unsupported, MIB, SMART_AND_NET_SNMPD};

const CORRUPT: &str = "File system data incomplete or corrupt";

/// An empty file system counts as one byte, all of it free
fn set_storage(metrics: &mut MetricMap, mnt: String, used: u64, total: u64) {
    let (used, total) = if total == 0 { (0, 1) } else { (used, total) };
    metrics.set_prove_value(SizeThreshold::new(
        Threshold::new(total.saturating_sub(used)),
        Threshold::new(used as f64 / total as f64),
    ));
    metrics.insert("used", used);
    metrics.insert("total", total);
    metrics.insert("mnt", mnt);
}

/// The smart-snmpd file system table, searched by device and mountpoint
#[derive(Default)]
struct SmartSnmpdFileSystem {
    index: Option<u64>,
}

impl MetricSchema for SmartSnmpdFileSystem {
    fn data_oids(&self) -> Vec<Oid> {
        let columns = oids::oids(&[
            smart_snmpd::FS_MOUNTPOINT,
            smart_snmpd::FS_TOTAL,
            smart_snmpd::FS_USED,
        ]);
        row_oids(&columns, self.index)
    }

    fn convert(&self, data: &[VarBind], metrics: &mut MetricMap) -> Result<()> {
        let row = Row::new(data, 3, CORRUPT)?;
        set_storage(metrics, row.string(0)?, row.u64(2)?, row.u64(1)?);
        Ok(())
    }
}

impl TableSchema for SmartSnmpdFileSystem {
    fn search_oids(&self) -> Vec<Oid> {
        oids::oids(&[smart_snmpd::FS_DEVICE, smart_snmpd::FS_MOUNTPOINT])
    }

    fn set_row_index(&mut self, index: u64) {
        self.index = Some(index);
    }
}

/// hrStorageTable, sizes are counted in allocation units
#[derive(Default)]
struct HostResourcesStorage {
    index: Option<u64>,
}

impl MetricSchema for HostResourcesStorage {
    fn data_oids(&self) -> Vec<Oid> {
        let columns = oids::oids(&[
            host_resources::HR_STORAGE_DESCR,
            host_resources::HR_STORAGE_ALLOCATION_UNITS,
            host_resources::HR_STORAGE_SIZE,
            host_resources::HR_STORAGE_USED,
        ]);
        row_oids(&columns, self.index)
    }

    fn convert(&self, data: &[VarBind], metrics: &mut MetricMap) -> Result<()> {
        let row = Row::new(data, 4, CORRUPT)?;
        let unit = row.count(1)?;
        let total = row.count(2)? * unit;
        let used = row.count(3)? * unit;
        set_storage(metrics, row.string(0)?, used, total);
        Ok(())
    }
}

impl TableSchema for HostResourcesStorage {
    fn search_oids(&self) -> Vec<Oid> {
        oids::oids(&[host_resources::HR_STORAGE_DESCR])
    }

    fn set_row_index(&mut self, index: u64) {
        self.index = Some(index);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FsProbe;

impl Probe for FsProbe {
    type Fetch = FetchTable;
    type Check = MandatoryWarnCritCheck<SizeThreshold>;

    fn check_name(&self) -> &'static str {
        "FILESYSTEM"
    }

    fn appl_name(&self) -> &'static str {
        "check_fs_by_snmp"
    }

    fn description(&self) -> &'static str {
        "Check file system storage via Simple Network Management Protocol"
    }

    fn supported_daemons(&self) -> &'static [&'static SnmpDaemonIdentifier] {
        &SMART_AND_NET_SNMPD
    }

    fn schema(&self, daemon: &SnmpDaemonIdentifier) -> Result<Box<dyn TableSchema>> {
        if *daemon == SMART_SNMPD {
            Ok(Box::new(SmartSnmpdFileSystem::default()))
        } else if *daemon == NET_SNMPD {
            Ok(Box::new(HostResourcesStorage::default()))
        } else {
            Err(unsupported(daemon))
        }
    }

    fn comparator(&self) -> Box<dyn Comparator<SizeThreshold>> {
        Box::new(AbsoluteRelativeCmp::default())
    }

    fn result_message(&self, metrics: &MetricMap, _check: &Self::Check) -> Result<String> {
        let used = metrics.get::<u64>("used")?;
        let total = metrics.get::<u64>("total")?;
        let usage = (used as f64 * 100.0 / total as f64 + 0.5) as u64;
        Ok(format!(
            "free space: {} {} MB (Usage: {}%)",
            metrics.get::<String>("mnt")?,
            total.saturating_sub(used) / MIB,
            usage
        ))
    }

    fn performance_message(&self, metrics: &MetricMap, check: &Self::Check) -> Result<String> {
        let used = metrics.get::<u64>("used")?;
        let total = metrics.get::<u64>("total")?;
        let warn = check.warn().map_or(0, |t| t.bytes_of(total));
        let crit = check.crit().map_or(0, |t| t.bytes_of(total));
        Ok(format!(
            "{}={}MB;{};{};0;{}",
            metrics.get::<String>("mnt")?,
            used / MIB,
            warn / MIB,
            crit / MIB,
            total / MIB
        ))
    }
}

#[cfg(test)]
mod test {
    use super::FsProbe;
    use crate::check::MandatoryWarnCritCheck;
    use crate::fetch::FetchTable;
    use crate::probes::test_support::{net_snmpd_agent, run, smart_snmpd_agent, text};
    use crate::snmp::mock::ScriptedAgent;
    use crate::snmp::Value;
    use crate::threshold::SizeThreshold;
    use crate::Status;

    const GIB: u64 = 1024 * 1024 * 1024;

    fn thresholds(warn: &str, crit: &str) -> MandatoryWarnCritCheck<SizeThreshold> {
        MandatoryWarnCritCheck::new(Some(warn.parse().unwrap()), Some(crit.parse().unwrap()))
    }

    fn by_name(name: &str) -> FetchTable {
        FetchTable {
            index: None,
            name: Some(name.to_string()),
        }
    }

    fn storage_table() -> ScriptedAgent {
        let mut agent = net_snmpd_agent();
        let rows = [
            (1, "Physical memory", 1024, 4_000_000, 3_000_000),
            (31, "/", 4096, 2_621_440, 1_310_720),
            (36, "/var", 4096, 0, 0),
        ];
        for &(index, descr, unit, size, used) in rows.iter() {
            agent
                .insert(&format!("1.3.6.1.2.1.25.2.3.1.3.{}", index), text(descr))
                .insert(&format!("1.3.6.1.2.1.25.2.3.1.4.{}", index), Value::Integer(unit))
                .insert(&format!("1.3.6.1.2.1.25.2.3.1.5.{}", index), Value::Integer(size))
                .insert(&format!("1.3.6.1.2.1.25.2.3.1.6.{}", index), Value::Integer(used));
        }
        agent
    }

    #[test]
    fn host_resources_row_by_name() {
        let (status, line) = run(FsProbe, by_name("/"), thresholds("80%", "90%"), storage_table());
        assert_eq!(status, Status::Ok);
        assert_eq!(
            line,
            "FILESYSTEM OK - free space: / 5120 MB (Usage: 50%)|/=5120MB;8192;9216;0;10240"
        );
    }

    #[test]
    fn usage_over_relative_threshold() {
        let (status, line) = run(FsProbe, by_name("/"), thresholds("40%", "50%"), storage_table());
        assert_eq!(status, Status::Critical);
        assert!(line.ends_with("|/=5120MB;4096;5120;0;10240"), "{}", line);
    }

    #[test]
    fn empty_file_system() {
        let fetch = FetchTable {
            index: Some(36),
            name: None,
        };
        let (status, line) = run(FsProbe, fetch, thresholds("1G", "512M"), storage_table());
        assert_eq!(status, Status::Critical);
        assert_eq!(
            line,
            "FILESYSTEM CRITICAL - free space: /var 0 MB (Usage: 0%)|/var=0MB;1024;512;0;0"
        );
    }

    #[test]
    fn smart_snmpd_row_by_device() {
        let agent = smart_snmpd_agent()
            .with("1.3.6.1.4.1.36539.20.6.1.1.2.1", text("/dev/sda1"))
            .with("1.3.6.1.4.1.36539.20.6.1.1.2.2", text("/dev/sdb1"))
            .with("1.3.6.1.4.1.36539.20.6.1.1.3.1", text("/"))
            .with("1.3.6.1.4.1.36539.20.6.1.1.3.2", text("/srv"))
            .with("1.3.6.1.4.1.36539.20.6.1.1.4.1", Value::Counter64(10 * GIB))
            .with("1.3.6.1.4.1.36539.20.6.1.1.4.2", Value::Counter64(100 * GIB))
            .with("1.3.6.1.4.1.36539.20.6.1.1.5.1", Value::Counter64(GIB))
            .with("1.3.6.1.4.1.36539.20.6.1.1.5.2", Value::Counter64(95 * GIB));
        let (status, line) = run(FsProbe, by_name("/dev/sdb"), thresholds("10G", "5G"), agent);
        assert_eq!(status, Status::Critical);
        assert!(line.starts_with("FILESYSTEM CRITICAL - free space: /srv 5120 MB (Usage: 95%)"), "{}", line);
    }

    #[test]
    fn smart_snmpd_root_mount_behind_device() {
        let agent = smart_snmpd_agent()
            .with("1.3.6.1.4.1.36539.20.6.1.1.2.1", text("/dev/sda1"))
            .with("1.3.6.1.4.1.36539.20.6.1.1.2.2", text("/dev/sdb1"))
            .with("1.3.6.1.4.1.36539.20.6.1.1.3.1", text("/srv"))
            .with("1.3.6.1.4.1.36539.20.6.1.1.3.2", text("/"))
            .with("1.3.6.1.4.1.36539.20.6.1.1.4.1", Value::Counter64(10 * GIB))
            .with("1.3.6.1.4.1.36539.20.6.1.1.4.2", Value::Counter64(20 * GIB))
            .with("1.3.6.1.4.1.36539.20.6.1.1.5.1", Value::Counter64(GIB))
            .with("1.3.6.1.4.1.36539.20.6.1.1.5.2", Value::Counter64(5 * GIB));
        let (status, line) = run(FsProbe, by_name("/"), thresholds("10G", "5G"), agent);
        assert_eq!(status, Status::Ok);
        assert!(line.starts_with("FILESYSTEM OK - free space: / 15360 MB (Usage: 25%)|/=5120MB;"), "{}", line);
    }

    #[test]
    fn unknown_mountpoint() {
        let (status, line) = run(FsProbe, by_name("/home"), thresholds("20%", "10%"), storage_table());
        assert_eq!(status, Status::Unknown);
        assert_eq!(
            line,
            "FILESYSTEM UNKNOWN - Bad snmp result: Cannot find row matching '/home' from net-snmpd"
        );
    }
}
