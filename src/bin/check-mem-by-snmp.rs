//! Check the physical memory of a remote host
//!
//! Thresholds are sizes with an optional binary suffix (`512M`), a
//! percentage of the total (`90%`) or both separated by a comma. An
//! absolute part triggers when less than that is available, a relative part
//! when that share is in use.

use structopt::clap::AppSettings;
use structopt::StructOpt;

use snmp_plugins::appl::{self, CheckAppl, GeneralOptions};
use snmp_plugins::check::WarnCritCheck;
use snmp_plugins::fetch::FetchStatic;
use snmp_plugins::probes::MemProbe;
use snmp_plugins::snmp::SnmpOptions;
use snmp_plugins::threshold::SizeThreshold;

/// Available physical memory via SNMP
#[derive(Debug, StructOpt)]
#[structopt(
    name = "check-mem-by-snmp",
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
        help = "name of the snmpd type to query: smart-snmpd, net-snmpd"
    )]
    snmpd_type: String,
    #[structopt(short = "w", long = "warn", help = "available size or usage to warn at")]
    warn: Option<SizeThreshold>,
    #[structopt(short = "c", long = "crit", help = "available size or usage to go critical at")]
    crit: Option<SizeThreshold>,
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    let args = Args::from_args();
    let check = WarnCritCheck::new(args.warn, args.crit);
    let appl = CheckAppl::new(MemProbe, FetchStatic, check, args.general, args.snmp, args.snmpd_type);
    appl::main(appl).exit()
}
