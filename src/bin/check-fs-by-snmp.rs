//! Check the free space of a file system on a remote host
//!
//! The file system is chosen by its table index or by a name. A name
//! selects the row whose mountpoint, or on smart-snmpd its device, equals
//! it. Without such a row the first one starting with the name is taken.

use structopt::clap::AppSettings;
use structopt::StructOpt;

use snmp_plugins::appl::{self, CheckAppl, GeneralOptions};
use snmp_plugins::check::MandatoryWarnCritCheck;
use snmp_plugins::fetch::FetchTable;
use snmp_plugins::probes::FsProbe;
use snmp_plugins::snmp::SnmpOptions;
use snmp_plugins::threshold::SizeThreshold;

/// Check file system storage via SNMP
#[derive(Debug, StructOpt)]
#[structopt(
    name = "check-fs-by-snmp",
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
    #[structopt(flatten)]
    row: FetchTable,
    #[structopt(short = "w", long = "warn", help = "free space or usage to warn at")]
    warn: Option<SizeThreshold>,
    #[structopt(short = "c", long = "crit", help = "free space or usage to go critical at")]
    crit: Option<SizeThreshold>,
}

impl Args {
    fn into_appl(self) -> CheckAppl<FsProbe> {
        CheckAppl::new(
            FsProbe,
            self.row,
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

    use super::Args;

    fn build_args(argv: Vec<&str>) -> Args {
        Args::from_iter(argv.into_iter())
    }

    #[test]
    fn row_by_name() {
        let args = build_args(vec!["check-fs-by-snmp", "-C", "public", "-n", "/var", "-w", "20%", "-c", "10%"]);
        assert_eq!(args.row.name.as_deref(), Some("/var"));
        assert_eq!(args.row.index, None);
        assert!(args.into_appl().validate_options().is_ok());
    }

    #[test]
    fn row_by_index() {
        let args = build_args(vec!["check-fs-by-snmp", "-C", "public", "-i", "31", "-w", "1G", "-c", "512M"]);
        assert_eq!(args.row.index, Some(31));
        assert!(args.into_appl().validate_options().is_ok());
    }

    #[test]
    fn row_is_required() {
        let appl = build_args(vec!["check-fs-by-snmp", "-C", "public", "-w", "1G", "-c", "512M"]).into_appl();
        assert!(appl.validate_options().is_err());
    }
}
