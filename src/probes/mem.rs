//! Physical memory and swap space
//!
//! Both checks read the same kind of data from different objects, so they
//! share one implementation parameterized by a `Pool`.

use crate::appl::Probe;
use crate::check::WarnCritCheck;
use crate::compare::{AbsoluteRelativeCmp, Comparator};
use crate::daemon::{SnmpDaemonIdentifier, NET_SNMPD, SMART_SNMPD};
use crate::error::Result;
use crate::fetch::FetchStatic;
use crate::metrics::{MetricMap, MetricSchema, Row};
use crate::oids::{self, smart_snmpd, ucd};
use crate::snmp::{Oid, VarBind};
use crate::threshold::{SizeThreshold, Threshold};

use super::{unsupported, MIB, SMART_AND_NET_SNMPD};

/// Where to find one kind of memory
struct Pool {
    check_name: &'static str,
    appl_name: &'static str,
    description: &'static str,
    corrupt: &'static str,
    /// free and used bytes first, total bytes last
    smart_snmpd: &'static [&'static str],
    /// available and total kB
    ucd: [&'static str; 2],
}

static PHYSICAL: Pool = Pool {
    check_name: "MEM",
    appl_name: "check_mem_by_snmp",
    description: "Check memory statistics via Simple Network Management Protocol",
    corrupt: "Memory statistics incomplete or corrupt",
    smart_snmpd: &[
        smart_snmpd::MEM_PHYS_FREE,
        smart_snmpd::MEM_PHYS_USED,
        smart_snmpd::MEM_PHYS_CACHED,
        smart_snmpd::MEM_PHYS_TOTAL,
    ],
    ucd: [ucd::MEM_AVAIL_REAL, ucd::MEM_TOTAL_REAL],
};

static SWAP: Pool = Pool {
    check_name: "SWAP",
    appl_name: "check_swap_by_snmp",
    description: "Check swap statistics via Simple Network Management Protocol",
    corrupt: "Swap statistics incomplete or corrupt",
    smart_snmpd: &[
        smart_snmpd::MEM_SWAP_FREE,
        smart_snmpd::MEM_SWAP_USED,
        smart_snmpd::MEM_SWAP_TOTAL,
    ],
    ucd: [ucd::MEM_AVAIL_SWAP, ucd::MEM_TOTAL_SWAP],
};

fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

fn set_memory(metrics: &mut MetricMap, avail: u64, used: u64, total: u64) {
    metrics.set_prove_value(SizeThreshold::new(
        Threshold::new(avail),
        Threshold::new(ratio(used, total)),
    ));
    metrics.insert("avail", avail);
    metrics.insert("total", total);
}

struct SmartSnmpdMemory(&'static Pool);

impl MetricSchema for SmartSnmpdMemory {
    fn data_oids(&self) -> Vec<Oid> {
        oids::oids(self.0.smart_snmpd)
    }

    fn convert(&self, data: &[VarBind], metrics: &mut MetricMap) -> Result<()> {
        let last = self.0.smart_snmpd.len() - 1;
        let row = Row::new(data, last + 1, self.0.corrupt)?;
        for i in 2..last {
            row.u64(i)?;
        }
        set_memory(metrics, row.u64(0)?, row.u64(1)?, row.u64(last)?);
        Ok(())
    }
}

/// UCD-SNMP-MIB counts in kB
struct UcdMemory(&'static Pool);

impl MetricSchema for UcdMemory {
    fn data_oids(&self) -> Vec<Oid> {
        oids::oids(&self.0.ucd)
    }

    fn convert(&self, data: &[VarBind], metrics: &mut MetricMap) -> Result<()> {
        let row = Row::new(data, 2, self.0.corrupt)?;
        let (avail, total) = (row.count(0)? * 1024, row.count(1)? * 1024);
        set_memory(metrics, avail, total.saturating_sub(avail), total);
        Ok(())
    }
}

fn schema(pool: &'static Pool, daemon: &SnmpDaemonIdentifier) -> Result<Box<dyn MetricSchema>> {
    if *daemon == SMART_SNMPD {
        Ok(Box::new(SmartSnmpdMemory(pool)))
    } else if *daemon == NET_SNMPD {
        Ok(Box::new(UcdMemory(pool)))
    } else {
        Err(unsupported(daemon))
    }
}

fn result_message(metrics: &MetricMap) -> Result<String> {
    Ok(format!(
        "avail: {}M total: {}M",
        metrics.get::<u64>("avail")? / MIB,
        metrics.get::<u64>("total")? / MIB
    ))
}

/// The performance line names the UCD objects whatever daemon answered
fn performance_message(pool: &Pool, metrics: &MetricMap) -> Result<String> {
    Ok(format!(
        "{}={} {}={}",
        oids::oid(pool.ucd[0]).to_iso_string(),
        metrics.get::<u64>("avail")? / 1024,
        oids::oid(pool.ucd[1]).to_iso_string(),
        metrics.get::<u64>("total")? / 1024
    ))
}

macro_rules! memory_probe {
    ($(#[$attr:meta])* $name:ident, $pool:ident) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl Probe for $name {
            type Fetch = FetchStatic;
            type Check = WarnCritCheck<SizeThreshold>;

            fn check_name(&self) -> &'static str {
                $pool.check_name
            }

            fn appl_name(&self) -> &'static str {
                $pool.appl_name
            }

            fn description(&self) -> &'static str {
                $pool.description
            }

            fn supported_daemons(&self) -> &'static [&'static SnmpDaemonIdentifier] {
                &SMART_AND_NET_SNMPD
            }

            fn schema(&self, daemon: &SnmpDaemonIdentifier) -> Result<Box<dyn MetricSchema>> {
                schema(&$pool, daemon)
            }

            fn comparator(&self) -> Box<dyn Comparator<SizeThreshold>> {
                Box::new(AbsoluteRelativeCmp::default())
            }

            fn result_message(&self, metrics: &MetricMap, _check: &Self::Check) -> Result<String> {
                result_message(metrics)
            }

            fn performance_message(&self, metrics: &MetricMap, _check: &Self::Check) -> Result<String> {
                performance_message(&$pool, metrics)
            }
        }
    };
}

memory_probe!(
    /// Available physical memory
    MemProbe,
    PHYSICAL
);
memory_probe!(
    /// Available swap space
    SwapProbe,
    SWAP
);
