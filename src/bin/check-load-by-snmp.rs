//! Check the load average of a remote host
//!
//! The numbers checked are the load averaged over 1, 5 and 15 minutes. Both
//! thresholds are required, a load at or above any of their fields raises
//! the status.

use structopt::clap::AppSettings;
use structopt::StructOpt;

use snmp_plugins::appl::{self, CheckAppl, GeneralOptions};
use snmp_plugins::check::MandatoryWarnCritCheck;
use snmp_plugins::fetch::FetchStatic;
use snmp_plugins::probes::LoadProbe;
use snmp_plugins::snmp::SnmpOptions;
use snmp_plugins::threshold::LoadTuple;

/// Check the load average of a remote host via SNMP
#[derive(Debug, StructOpt)]
#[structopt(
    name = "check-load-by-snmp",
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
    #[structopt(short = "w", long = "warn", help = "load1,load5,load15 to warn at")]
    warn: Option<LoadTuple>,
    #[structopt(short = "c", long = "crit", help = "load1,load5,load15 to go critical at")]
    crit: Option<LoadTuple>,
}

impl Args {
    fn into_appl(self) -> CheckAppl<LoadProbe> {
        CheckAppl::new(
            LoadProbe,
            FetchStatic,
            MandatoryWarnCritCheck::new(self.warn, self.crit),
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

#[cfg(test)]
mod test {
    use structopt::StructOpt;

    use snmp_plugins::threshold::LoadTuple;

    use super::Args;

    fn build_args(argv: Vec<&str>) -> Args {
        Args::from_iter(argv.into_iter())
    }

    #[test]
    fn thresholds_parse() {
        let args = build_args(vec!["check-load-by-snmp", "-C", "public", "-w", "5,3.5,2.5", "-c", "10,5"]);
        assert_eq!(args.warn, Some(LoadTuple::new(5.0, 3.5, 2.5)));
        let crit = args.crit.unwrap();
        assert_eq!(crit.load5.get(), 5.0);
        assert!(crit.load15.is_empty());
    }

    #[test]
    fn both_thresholds_required() {
        let appl = build_args(vec!["check-load-by-snmp", "-C", "public", "-w", "5"]).into_appl();
        let err = appl.validate_options().unwrap_err();
        assert!(err.to_string().contains("crit"), "{}", err);
    }

    #[test]
    fn bad_tuple_is_rejected() {
        let res = Args::from_iter_safe(vec!["check-load-by-snmp", "-w", "1,2,3,4"]);
        assert!(res.is_err());
    }
}
