//! Check the number of processes matching a filter on a remote host
//!
//! Processes are filtered by a regular expression on the command and its
//! arguments and by the names of their owners. The count of the matching
//! processes is checked against ranges: `min:max` alarms when the count
//! falls outside, `max:min` when it falls inside.
//!
//! Only smart-snmpd exports the process table this needs.

use structopt::clap::AppSettings;
use structopt::StructOpt;

use snmp_plugins::appl::{self, CheckAppl, GeneralOptions};
use snmp_plugins::check::WarnCritCheck;
use snmp_plugins::fetch::FetchProcesses;
use snmp_plugins::probes::ProcessProbe;
use snmp_plugins::process::ProcessFilterOptions;
use snmp_plugins::snmp::SnmpOptions;
use snmp_plugins::threshold::RangeThreshold;

/// Check count of a certain running process via SNMP
#[derive(Debug, StructOpt)]
#[structopt(
    name = "check-procs-by-snmp",
    no_version,
    global_settings = &[AppSettings::DisableVersion, AppSettings::ColoredHelp]
)]
struct Args {
    #[structopt(flatten)]
    general: GeneralOptions,
    #[structopt(flatten)]
    snmp: SnmpOptions,
    #[structopt(
        short = "s",
        long = "snmpd-type",
        default_value = "auto",
        help = "name of the snmpd type to query: smart-snmpd"
    )]
    snmpd_type: String,
    #[structopt(flatten)]
    filter: ProcessFilterOptions,
    #[structopt(short = "w", long = "warn", help = "range of process counts that is fine")]
    warn: Option<RangeThreshold<u64>>,
    #[structopt(short = "c", long = "crit", help = "range of process counts that is not critical")]
    crit: Option<RangeThreshold<u64>>,
}

impl Args {
    fn into_appl(self) -> CheckAppl<ProcessProbe> {
        CheckAppl::new(
            ProcessProbe,
            FetchProcesses::new(self.filter),
            WarnCritCheck::new(self.warn, self.crit),
            self.general,
            self.snmp,
            self.snmpd_type,
        )
    }
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    appl::main(Args::from_args().into_appl()).exit()
}
