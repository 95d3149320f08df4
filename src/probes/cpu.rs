//! CPU usage in percent of the last measuring interval

use crate::appl::Probe;
use crate::check::WarnCritCheck;
use crate::compare::{AnyField, Comparator};
use crate::daemon::{SnmpDaemonIdentifier, NET_SNMPD, SMART_SNMPD};
use crate::error::Result;
use crate::fetch::FetchStatic;
use crate::metrics::{MetricMap, MetricSchema, Row};
use crate::oids::{self, smart_snmpd, ucd};
use crate::snmp::{Oid, VarBind};
use crate::threshold::CpuTuple;

use super::{unsupported, SMART_AND_NET_SNMPD};

const CORRUPT: &str = "CPU usage data incomplete or corrupt";

/// Time spent per mode since the last interval, turned into percentages
struct SmartSnmpdCpu;

impl MetricSchema for SmartSnmpdCpu {
    fn data_oids(&self) -> Vec<Oid> {
        oids::oids(&[
            smart_snmpd::CPU_USER,
            smart_snmpd::CPU_KERNEL,
            smart_snmpd::CPU_IDLE,
            smart_snmpd::CPU_TOTAL,
        ])
    }

    fn convert(&self, data: &[VarBind], metrics: &mut MetricMap) -> Result<()> {
        let row = Row::new(data, 4, CORRUPT)?;
        let (user, kernel, idle, total) = (row.u64(0)?, row.u64(1)?, row.u64(2)?, row.u64(3)?);
        let cpu = if total == 0 {
            CpuTuple::new(0, 0, 0)
        } else {
            CpuTuple::new(user * 100 / total, kernel * 100 / total, idle * 100 / total)
        };
        metrics.set_prove_value(cpu);
        Ok(())
    }
}

/// UCD-SNMP-MIB already reports percentages
struct UcdCpu;

impl MetricSchema for UcdCpu {
    fn data_oids(&self) -> Vec<Oid> {
        oids::oids(&[ucd::SS_CPU_USER, ucd::SS_CPU_SYSTEM, ucd::SS_CPU_IDLE])
    }

    fn convert(&self, data: &[VarBind], metrics: &mut MetricMap) -> Result<()> {
        let row = Row::new(data, 3, CORRUPT)?;
        metrics.set_prove_value(CpuTuple::new(row.count(0)?, row.count(1)?, row.count(2)?));
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CpuProbe;

impl Probe for CpuProbe {
    type Fetch = FetchStatic;
    type Check = WarnCritCheck<CpuTuple>;

    fn check_name(&self) -> &'static str {
        "CPU"
    }

    fn appl_name(&self) -> &'static str {
        "check_cpu_by_snmp"
    }

    fn description(&self) -> &'static str {
        "Check CPU statistics via Simple Network Management Protocol"
    }

    fn supported_daemons(&self) -> &'static [&'static SnmpDaemonIdentifier] {
        &SMART_AND_NET_SNMPD
    }

    fn schema(&self, daemon: &SnmpDaemonIdentifier) -> Result<Box<dyn MetricSchema>> {
        if *daemon == SMART_SNMPD {
            Ok(Box::new(SmartSnmpdCpu))
        } else if *daemon == NET_SNMPD {
            Ok(Box::new(UcdCpu))
        } else {
            Err(unsupported(daemon))
        }
    }

    fn comparator(&self) -> Box<dyn Comparator<CpuTuple>> {
        Box::new(AnyField::default())
    }

    fn result_message(&self, metrics: &MetricMap, _check: &Self::Check) -> Result<String> {
        let cpu = metrics.prove_value::<CpuTuple>()?;
        Ok(format!(
            "user: {}% system: {}% idle: {}% wait: {}%",
            cpu.user,
            cpu.system,
            cpu.idle,
            cpu.remaining_wait()
        ))
    }

    fn performance_message(&self, metrics: &MetricMap, _check: &Self::Check) -> Result<String> {
        let cpu = metrics.prove_value::<CpuTuple>()?;
        Ok(format!(
            "{}={} {}={} {}={}",
            oids::oid(ucd::SS_CPU_USER).to_iso_string(),
            cpu.user,
            oids::oid(ucd::SS_CPU_SYSTEM).to_iso_string(),
            cpu.system,
            oids::oid(ucd::SS_CPU_IDLE).to_iso_string(),
            cpu.idle
        ))
    }
}
