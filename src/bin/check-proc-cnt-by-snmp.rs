//! Check the number of processes running on a remote host

use structopt::clap::AppSettings;
use structopt::StructOpt;

use snmp_plugins::appl::{self, CheckAppl, GeneralOptions};
use snmp_plugins::check::WarnCritCheck;
use snmp_plugins::fetch::FetchStatic;
use snmp_plugins::probes::ProcCountProbe;
use snmp_plugins::snmp::SnmpOptions;
use snmp_plugins::threshold::AbsoluteThreshold;

/// Check count of running processes via SNMP
#[derive(Debug, StructOpt)]
#[structopt(
    name = "check-proc-cnt-by-snmp",
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
    #[structopt(short = "w", long = "warn", help = "process count to warn at")]
    warn: Option<AbsoluteThreshold>,
    #[structopt(short = "c", long = "crit", help = "process count to go critical at")]
    crit: Option<AbsoluteThreshold>,
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    let args = Args::from_args();
    let check = WarnCritCheck::new(args.warn, args.crit);
    let appl = CheckAppl::new(ProcCountProbe, FetchStatic, check, args.general, args.snmp, args.snmpd_type);
    appl::main(appl).exit()
}

#[cfg(test)]
mod test {
    use structopt::StructOpt;

    use snmp_plugins::threshold::Threshold;

    use super::Args;

    #[test]
    fn counts() {
        let args = Args::from_iter(vec!["check-proc-cnt-by-snmp", "-w", "300", "-c", "500"]);
        assert_eq!(args.warn, Some(Threshold::new(300)));
        assert_eq!(args.crit, Some(Threshold::new(500)));
    }

    #[test]
    fn negative_count() {
        assert!(Args::from_iter_safe(vec!["check-proc-cnt-by-snmp", "-w", "-3"]).is_err());
    }
}
