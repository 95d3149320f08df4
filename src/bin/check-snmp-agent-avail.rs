//! Check that the application monitoring agent of smart-snmpd is alive
//!
//! Thresholds are `<age>[,<vsz-increases>[,<rsz-increases>]]`: the oldest
//! acceptable update, as an age like `15m` or `2h`, and how often the
//! monitored memory sizes may have grown.

use structopt::clap::AppSettings;
use structopt::StructOpt;

use snmp_plugins::appl::{self, CheckAppl, GeneralOptions};
use snmp_plugins::check::WarnCritCheck;
use snmp_plugins::fetch::FetchStatic;
use snmp_plugins::probes::AgentProbe;
use snmp_plugins::snmp::SnmpOptions;
use snmp_plugins::threshold::AgentStatusTuple;

/// Check whether a suitable application monitoring agent is attached to snmpd
#[derive(Debug, StructOpt)]
#[structopt(
    name = "check-snmp-agent-avail",
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
    #[structopt(short = "w", long = "warn", help = "update age and increase counts to warn at")]
    warn: Option<AgentStatusTuple>,
    #[structopt(
        short = "c",
        long = "crit",
        help = "update age and increase counts to go critical at"
    )]
    crit: Option<AgentStatusTuple>,
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    let args = Args::from_args();
    let check = WarnCritCheck::new(args.warn, args.crit);
    let appl = CheckAppl::new(AgentProbe::new(), FetchStatic, check, args.general, args.snmp, args.snmpd_type);
    appl::main(appl).exit()
}

#[cfg(test)]
mod test {
    use structopt::StructOpt;

    use snmp_plugins::threshold;

    use super::Args;

    #[test]
    fn age_and_increases() {
        let before = threshold::now();
        let args = Args::from_iter(vec!["check-snmp-agent-avail", "-w", "5m,3", "-c", "1h,10,10"]);
        let after = threshold::now();

        let warn = args.warn.unwrap();
        let updated = warn.updated.get();
        assert!(before - 300 <= updated && updated <= after - 300);
        assert_eq!(warn.vsz_increases.get(), 3);
        assert!(warn.rsz_increases.is_empty());

        let crit = args.crit.unwrap();
        assert_eq!(crit.rsz_increases.get(), 10);
    }

    #[test]
    fn four_fields_are_too_many() {
        assert!(Args::from_iter_safe(vec!["check-snmp-agent-avail", "-w", "5m,1,1,1"]).is_err());
    }
}
