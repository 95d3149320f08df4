//! Check the number of users logged in on a remote host

use structopt::clap::AppSettings;
use structopt::StructOpt;

use snmp_plugins::appl::{self, CheckAppl, GeneralOptions};
use snmp_plugins::check::WarnCritCheck;
use snmp_plugins::fetch::FetchStatic;
use snmp_plugins::probes::UserCountProbe;
use snmp_plugins::snmp::SnmpOptions;
use snmp_plugins::threshold::AbsoluteThreshold;

/// Check logged in user count via SNMP
#[derive(Debug, StructOpt)]
#[structopt(
    name = "check-user-cnt-by-snmp",
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
    #[structopt(short = "w", long = "warn", help = "user count to warn at")]
    warn: Option<AbsoluteThreshold>,
    #[structopt(short = "c", long = "crit", help = "user count to go critical at")]
    crit: Option<AbsoluteThreshold>,
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    let args = Args::from_args();
    let check = WarnCritCheck::new(args.warn, args.crit);
    let appl = CheckAppl::new(UserCountProbe, FetchStatic, check, args.general, args.snmp, args.snmpd_type);
    appl::main(appl).exit()
}
