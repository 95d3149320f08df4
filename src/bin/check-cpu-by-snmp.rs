//! Check the CPU usage of a remote host
//!
//! Usage is split into user, system, idle and wait percentages. Thresholds
//! are given in the same order and may leave out fields from the right.

use structopt::clap::AppSettings;
use structopt::StructOpt;

use snmp_plugins::appl::{self, CheckAppl, GeneralOptions};
use snmp_plugins::check::WarnCritCheck;
use snmp_plugins::fetch::FetchStatic;
use snmp_plugins::probes::CpuProbe;
use snmp_plugins::snmp::SnmpOptions;
use snmp_plugins::threshold::CpuTuple;

/// Check CPU usage via SNMP
#[derive(Debug, StructOpt)]
#[structopt(
    name = "check-cpu-by-snmp",
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
    #[structopt(short = "w", long = "warn", help = "user,system,idle,wait percentages to warn at")]
    warn: Option<CpuTuple>,
    #[structopt(
        short = "c",
        long = "crit",
        help = "user,system,idle,wait percentages to go critical at"
    )]
    crit: Option<CpuTuple>,
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    let args = Args::from_args();
    let check = WarnCritCheck::new(args.warn, args.crit);
    let appl = CheckAppl::new(CpuProbe, FetchStatic, check, args.general, args.snmp, args.snmpd_type);
    appl::main(appl).exit()
}
