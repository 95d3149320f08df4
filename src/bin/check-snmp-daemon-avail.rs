//! Check that a supported snmpd answers on a remote host
//!
//! Nothing is read beyond what identifies the daemon, the status line names
//! the daemon found. Anything short of an identified daemon is critical.

use structopt::clap::AppSettings;
use structopt::StructOpt;

use snmp_plugins::appl::{self, CheckAppl, GeneralOptions};
use snmp_plugins::check::BoolCritCheck;
use snmp_plugins::fetch::IdentifyOnly;
use snmp_plugins::probes::DaemonProbe;
use snmp_plugins::snmp::SnmpOptions;

/// Check whether a suitable snmpd is available or not
#[derive(Debug, StructOpt)]
#[structopt(
    name = "check-snmp-daemon-avail",
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
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    let args = Args::from_args();
    let appl = CheckAppl::new(DaemonProbe, IdentifyOnly, BoolCritCheck, args.general, args.snmp, args.snmpd_type);
    appl::main(appl).exit()
}
