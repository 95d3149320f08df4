//! Number of logged in users

use crate::appl::Probe;
use crate::check::WarnCritCheck;
use crate::compare::{Comparator, Relation};
use crate::daemon::{SnmpDaemonIdentifier, NET_SNMPD, SMART_SNMPD};
use crate::error::Result;
use crate::fetch::FetchStatic;
use crate::metrics::{MetricMap, MetricSchema};
use crate::oids::{host_resources, smart_snmpd};
use crate::threshold::AbsoluteThreshold;

use super::proc_cnt::Counter;
use super::{unsupported, SMART_AND_NET_SNMPD};

const CORRUPT: &str = "User count incomplete (o.O) or corrupt";

#[derive(Clone, Copy, Debug, Default)]
pub struct UserCountProbe;

impl Probe for UserCountProbe {
    type Fetch = FetchStatic;
    type Check = WarnCritCheck<AbsoluteThreshold>;

    fn check_name(&self) -> &'static str {
        "USERS"
    }

    fn appl_name(&self) -> &'static str {
        "check_user_cnt_by_snmp"
    }

    fn description(&self) -> &'static str {
        "Check logged in user count via Simple Network Management Protocol"
    }

    fn supported_daemons(&self) -> &'static [&'static SnmpDaemonIdentifier] {
        &SMART_AND_NET_SNMPD
    }

    fn schema(&self, daemon: &SnmpDaemonIdentifier) -> Result<Box<dyn MetricSchema>> {
        let counter = if *daemon == SMART_SNMPD {
            Counter {
                oid: smart_snmpd::USER_LOGINS,
                wide: true,
                corrupt: CORRUPT,
            }
        } else if *daemon == NET_SNMPD {
            Counter {
                oid: host_resources::HR_SYSTEM_NUM_USERS,
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
        let users = metrics.prove_value::<AbsoluteThreshold>()?;
        Ok(format!("{} users currently logged in", users))
    }

    fn performance_message(&self, metrics: &MetricMap, check: &Self::Check) -> Result<String> {
        let users = metrics.prove_value::<AbsoluteThreshold>()?;
        Ok(format!(
            "users={};{};{};0",
            users,
            check.warn.unwrap_or_default(),
            check.crit.unwrap_or_default()
        ))
    }
}
