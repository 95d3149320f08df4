//! The 1, 5 and 15 minute load averages

use crate::appl::Probe;
use crate::check::MandatoryWarnCritCheck;
use crate::compare::{AnyField, Comparator};
use crate::daemon::{SnmpDaemonIdentifier, NET_SNMPD, SMART_SNMPD};
use crate::error::Result;
use crate::fetch::FetchStatic;
use crate::metrics::{MetricMap, MetricSchema, Row};
use crate::oids::{self, smart_snmpd, ucd};
use crate::snmp::{Oid, VarBind};
use crate::threshold::LoadTuple;

use super::{unsupported, SMART_AND_NET_SNMPD};

const CORRUPT: &str = "Machine load data incomplete or corrupt";

fn hundredths(value: u64) -> f64 {
    value as f64 / 100.0
}

/// Both daemons report the averages multiplied by 100, they only differ in
/// the objects and their types.
struct LoadSchema {
    oids: [&'static str; 3],
}

const SMART_SNMPD_LOAD: [&str; 3] = [smart_snmpd::LOAD_1, smart_snmpd::LOAD_5, smart_snmpd::LOAD_15];
const UCD_LOAD: [&str; 3] = [ucd::LA_LOAD_INT_1, ucd::LA_LOAD_INT_5, ucd::LA_LOAD_INT_15];

impl MetricSchema for LoadSchema {
    fn data_oids(&self) -> Vec<Oid> {
        oids::oids(&self.oids)
    }

    fn convert(&self, data: &[VarBind], metrics: &mut MetricMap) -> Result<()> {
        let row = Row::new(data, 3, CORRUPT)?;
        let load = LoadTuple::new(
            hundredths(row.count(0)?),
            hundredths(row.count(1)?),
            hundredths(row.count(2)?),
        );
        metrics.set_prove_value(load);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LoadProbe;

impl Probe for LoadProbe {
    type Fetch = FetchStatic;
    type Check = MandatoryWarnCritCheck<LoadTuple>;

    fn check_name(&self) -> &'static str {
        "LOAD"
    }

    fn appl_name(&self) -> &'static str {
        "check_load_by_snmp"
    }

    fn description(&self) -> &'static str {
        "Check load statistics via Simple Network Management Protocol"
    }

    fn supported_daemons(&self) -> &'static [&'static SnmpDaemonIdentifier] {
        &SMART_AND_NET_SNMPD
    }

    fn schema(&self, daemon: &SnmpDaemonIdentifier) -> Result<Box<dyn MetricSchema>> {
        if *daemon == SMART_SNMPD {
            Ok(Box::new(LoadSchema { oids: SMART_SNMPD_LOAD }))
        } else if *daemon == NET_SNMPD {
            Ok(Box::new(LoadSchema { oids: UCD_LOAD }))
        } else {
            Err(unsupported(daemon))
        }
    }

    fn comparator(&self) -> Box<dyn Comparator<LoadTuple>> {
        Box::new(AnyField::default())
    }

    fn result_message(&self, metrics: &MetricMap, _check: &Self::Check) -> Result<String> {
        let load = metrics.prove_value::<LoadTuple>()?;
        Ok(format!(
            "load1: {} load5: {} load15: {}",
            load.load1, load.load5, load.load15
        ))
    }

    fn performance_message(&self, metrics: &MetricMap, check: &Self::Check) -> Result<String> {
        let load = metrics.prove_value::<LoadTuple>()?;
        let warn = check.warn().cloned().unwrap_or_default();
        let crit = check.crit().cloned().unwrap_or_default();
        Ok(format!(
            "load1={};{};{};0; load5={};{};{};0; load15={};{};{};0;",
            load.load1,
            warn.load1,
            crit.load1,
            load.load5,
            warn.load5,
            crit.load5,
            load.load15,
            warn.load15,
            crit.load15
        ))
    }
}
