//! The generic check application
//!
//! Every check runs the same stages in the same order:
//!
//! ```text
//! ParseOptions -> Configure -> IdentifyDaemon -> FetchData -> Convert
//!     -> CreateMessages -> Prove -> Report
//! ```
//!
//! What differs between checks is captured by a [`Probe`]: which daemons it
//! reads, the schema for each of them, how it fetches (a `FetchStrategy`),
//! how it decides (a `CheckStrategy`) and how the messages look. `CheckAppl`
//! drives a probe through the stages and prints exactly one status line.
//!
//! [`Probe`]: trait.Probe.html

use std::io::Write;

use log::{debug, error, info, LevelFilter};
use structopt::clap::{Error as ClapError, ErrorKind};
use structopt::StructOpt;

use crate::check::CheckStrategy;
use crate::compare::Comparator;
use crate::daemon::{self, SnmpDaemonIdentifier};
use crate::error::{CheckError, OptionError, Result};
use crate::fetch::FetchStrategy;
use crate::metrics::MetricMap;
use crate::snmp::{Deadline, SnmpOptions, SnmpSession, Transport};
use crate::Status;

/// Key in the metric map holding the name of the identified daemon
pub const DAEMON_NAME: &str = "[daemon]";

/// Options every check understands
#[derive(Clone, Debug, StructOpt)]
pub struct GeneralOptions {
    #[structopt(short = "v", long = "version", help = "output the version number")]
    pub version: bool,
    #[structopt(
        short = "d",
        long = "debug-level",
        default_value = "0",
        possible_values = &["0", "1", "2", "3", "4"],
        help = "set debug level (0: quiet .. 4: everything)"
    )]
    pub debug_level: u8,
    #[structopt(
        short = "a",
        long = "alarm-timeout",
        default_value = "45",
        help = "seconds after which the check gives up, 0 disables the alarm"
    )]
    pub alarm_timeout: u64,
    #[structopt(
        long = "show-performance-data",
        parse(try_from_str),
        help = "enable or disable output of performance data"
    )]
    pub show_performance_data: Option<bool>,
}

impl Default for GeneralOptions {
    fn default() -> GeneralOptions {
        GeneralOptions {
            version: false,
            debug_level: 0,
            alarm_timeout: 45,
            show_performance_data: None,
        }
    }
}

/// Log levels of the transport and of everything else for a debug level
fn log_levels(debug_level: u8) -> (LevelFilter, LevelFilter) {
    match debug_level {
        0 => (LevelFilter::Warn, LevelFilter::Warn),
        1 => (LevelFilter::Warn, LevelFilter::Info),
        2 => (LevelFilter::Info, LevelFilter::Info),
        3 => (LevelFilter::Info, LevelFilter::Debug),
        _ => (LevelFilter::Debug, LevelFilter::Debug),
    }
}

/// Send log records to stderr, stdout is reserved for the status line
pub fn init_logging(debug_level: u8) {
    let (transport, plugins) = log_levels(debug_level);
    let _ = env_logger::Builder::new()
        .filter_level(plugins)
        .filter_module("snmp_plugins::snmp", transport)
        .filter_module("snmp2", transport)
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();
}

/// Leave through clap's error path: message on stderr, no status line
pub fn exit_with_option_error(err: &OptionError) -> ! {
    ClapError::with_description(&err.to_string(), ErrorKind::ValueValidation).exit()
}

type SchemaOf<P> = <<P as Probe>::Fetch as FetchStrategy>::Schema;
type RawOf<P> = <<P as Probe>::Fetch as FetchStrategy>::Raw;
type ValueOf<P> = <<P as Probe>::Check as CheckStrategy>::Value;

/// Everything that makes one check different from the others
pub trait Probe {
    type Fetch: FetchStrategy;
    type Check: CheckStrategy;

    /// The first word of the status line
    fn check_name(&self) -> &'static str;
    fn appl_name(&self) -> &'static str;
    fn description(&self) -> &'static str;

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// In detection order
    fn supported_daemons(&self) -> &'static [&'static SnmpDaemonIdentifier];

    /// What to fetch from `daemon`
    fn schema(&self, daemon: &SnmpDaemonIdentifier) -> Result<Box<SchemaOf<Self>>>;

    fn comparator(&self) -> Box<dyn Comparator<ValueOf<Self>>>;

    fn result_message(&self, metrics: &MetricMap, check: &Self::Check) -> Result<String>;

    fn performance_message(&self, metrics: &MetricMap, check: &Self::Check) -> Result<String>;

    fn show_performance_data(&self) -> bool {
        true
    }

    /// The status reported when the agent cannot be read
    fn failure_status(&self) -> Status {
        Status::Unknown
    }

    fn failure_message(&self, err: &CheckError) -> String {
        err.to_string()
    }
}

/// The stages of a run, in order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    ParseOptions,
    Configure,
    IdentifyDaemon,
    FetchData,
    Convert,
    CreateMessages,
    Prove,
    Report,
}

impl Stage {
    fn successor(self) -> Stage {
        use self::Stage::*;
        match self {
            ParseOptions => Configure,
            Configure => IdentifyDaemon,
            IdentifyDaemon => FetchData,
            FetchData => Convert,
            Convert => CreateMessages,
            CreateMessages => Prove,
            Prove | Report => Report,
        }
    }
}

/// One run of a probe against one agent
pub struct CheckAppl<P: Probe> {
    probe: P,
    fetch: P::Fetch,
    check: P::Check,
    general: GeneralOptions,
    snmp: SnmpOptions,
    snmpd_type: String,
    stage: Stage,
    transport: Option<Box<dyn Transport>>,
    deadline: Deadline,
    daemon: Option<&'static SnmpDaemonIdentifier>,
    schema: Option<Box<SchemaOf<P>>>,
    raw: Option<RawOf<P>>,
    metrics: MetricMap,
    result_message: String,
    performance_message: String,
    status: Status,
    output: Option<String>,
}

impl<P: Probe> CheckAppl<P> {
    /// The command line has been parsed into the given option groups
    pub fn new(
        probe: P,
        fetch: P::Fetch,
        check: P::Check,
        general: GeneralOptions,
        snmp: SnmpOptions,
        snmpd_type: String,
    ) -> CheckAppl<P> {
        CheckAppl {
            probe,
            fetch,
            check,
            general,
            snmp,
            snmpd_type,
            stage: Stage::ParseOptions,
            transport: None,
            deadline: Deadline::unarmed(),
            daemon: None,
            schema: None,
            raw: None,
            metrics: MetricMap::new(),
            result_message: String::new(),
            performance_message: String::new(),
            status: Status::Exception,
            output: None,
        }
    }

    /// Talk to `transport` instead of opening an SNMP session
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> CheckAppl<P> {
        self.transport = Some(transport);
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn daemon(&self) -> Option<&'static SnmpDaemonIdentifier> {
        self.daemon
    }

    pub fn metrics(&self) -> &MetricMap {
        &self.metrics
    }

    pub fn deadline(&self) -> &Deadline {
        &self.deadline
    }

    /// The status line printed by `report`, once it has been printed
    pub fn output(&self) -> Option<&str> {
        self.output.as_ref().map(String::as_str)
    }

    fn enter(&mut self, next: Stage, operation: &'static str) -> Result<()> {
        if self.stage.successor() != next {
            return Err(CheckError::OutOfOrder(operation));
        }
        if self.deadline.has_passed() {
            return Err(CheckError::AlarmTimeout);
        }
        self.stage = next;
        Ok(())
    }

    /// `--version` line
    pub fn version_line(&self) -> String {
        format!(
            "{} {} {}",
            self.probe.appl_name(),
            self.probe.version(),
            self.probe.description()
        )
    }

    /// Check the option groups against each other
    pub fn validate_options(&self) -> std::result::Result<(), OptionError> {
        self.snmp.validate()?;
        daemon::select(&self.snmpd_type, self.probe.supported_daemons())?;
        self.fetch.validate()?;
        self.check.validate()
    }

    pub fn configure(&mut self) -> Result<()> {
        self.enter(Stage::Configure, "configure")?;
        self.validate_options()?;
        init_logging(self.general.debug_level);
        self.deadline = Deadline::after_secs(self.general.alarm_timeout);
        if self.transport.is_none() {
            let session = SnmpSession::open(&self.snmp, &self.deadline)?;
            self.transport = Some(Box::new(session));
        }
        Ok(())
    }

    pub fn identify_daemon(&mut self) -> Result<()> {
        self.enter(Stage::IdentifyDaemon, "identify_daemon")?;
        let forced = daemon::select(&self.snmpd_type, self.probe.supported_daemons())?;
        let transport = self
            .transport
            .as_mut()
            .ok_or(CheckError::OutOfOrder("identify_daemon"))?;
        let found = daemon::identify(
            &mut **transport,
            self.probe.supported_daemons(),
            forced,
            &self.deadline,
        )?;
        info!("Using SNMP daemon type {}", found);
        self.schema = Some(self.probe.schema(found)?);
        self.daemon = Some(found);
        Ok(())
    }

    pub fn fetch_data(&mut self) -> Result<()> {
        self.enter(Stage::FetchData, "fetch_data")?;
        info!("fetching data");
        let transport = self
            .transport
            .as_mut()
            .ok_or(CheckError::OutOfOrder("fetch_data"))?;
        let schema = self
            .schema
            .as_mut()
            .ok_or(CheckError::OutOfOrder("fetch_data"))?;
        let daemon = self.daemon.ok_or(CheckError::OutOfOrder("fetch_data"))?;
        let raw = self
            .fetch
            .fetch(&mut **transport, &self.deadline, &mut **schema, daemon)?;
        self.raw = Some(raw);
        Ok(())
    }

    pub fn convert(&mut self) -> Result<()> {
        self.enter(Stage::Convert, "convert")?;
        info!("normalizing and converting fetched data");
        let schema = self.schema.as_ref().ok_or(CheckError::OutOfOrder("convert"))?;
        let raw = self.raw.as_ref().ok_or(CheckError::OutOfOrder("convert"))?;
        let daemon = self.daemon.ok_or(CheckError::OutOfOrder("convert"))?;
        self.metrics = MetricMap::new();
        self.metrics.insert(DAEMON_NAME, daemon.name());
        self.fetch.convert(&**schema, raw, &mut self.metrics)?;
        debug!("converted {} fields", self.metrics.len());
        Ok(())
    }

    pub fn create_messages(&mut self) -> Result<()> {
        self.enter(Stage::CreateMessages, "create_messages")?;
        info!("creating result messages");
        self.result_message = self.probe.result_message(&self.metrics, &self.check)?;
        self.performance_message = self.probe.performance_message(&self.metrics, &self.check)?;
        Ok(())
    }

    pub fn prove(&mut self) -> Result<Status> {
        self.enter(Stage::Prove, "prove")?;
        info!("proving values");
        let value: ValueOf<P> = self.metrics.prove_value()?;
        let cmp = self.probe.comparator();
        self.status = self.check.prove(&value, &*cmp);
        Ok(self.status)
    }

    /// All stages up to `prove`
    pub fn execute(&mut self) -> Result<Status> {
        self.configure()?;
        self.identify_daemon()?;
        self.fetch_data()?;
        self.convert()?;
        self.create_messages()?;
        self.prove()
    }

    fn show_performance_data(&self) -> bool {
        self.general
            .show_performance_data
            .unwrap_or_else(|| self.probe.show_performance_data())
    }

    /// The status line for `status`
    ///
    /// A `message` replaces the result and performance messages.
    pub fn render(&self, status: Status, message: Option<&str>) -> String {
        let mut line = format!("{} {}", self.probe.check_name(), status.word());
        match message {
            Some(message) => {
                line.push_str(" - ");
                line.push_str(message);
            }
            None => {
                if !self.result_message.is_empty() {
                    line.push_str(" - ");
                    line.push_str(&self.result_message);
                }
                if self.show_performance_data() && !self.performance_message.is_empty() {
                    line.push('|');
                    line.push_str(&self.performance_message);
                }
            }
        }
        line
    }

    /// Print the status line, only the first call has an effect
    pub fn report(&mut self, status: Status, message: Option<&str>) -> Status {
        if self.output.is_some() {
            return status;
        }
        self.deadline.disarm();
        self.stage = Stage::Report;
        let line = self.render(status, message);
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            error!("cannot write status line: {}", e);
        }
        self.output = Some(line);
        status
    }

    /// Run every stage and report the outcome, returning the status to exit with
    pub fn run(&mut self) -> Status {
        match self.execute() {
            Ok(status) => self.report(status, None),
            Err(ref err) if err.is_snmp_error() => {
                let message = self.probe.failure_message(err);
                let status = self.probe.failure_status();
                self.report(status, Some(&message))
            }
            Err(ref err @ CheckError::AlarmTimeout) | Err(ref err @ CheckError::OutOfOrder(_)) => {
                let message = self.probe.failure_message(err);
                let status = self.probe.failure_status();
                self.report(status, Some(&message))
            }
            Err(err) => {
                let message = err.to_string();
                eprintln!("{}", message);
                self.report(Status::Exception, Some(&message))
            }
        }
    }
}

/// The whole life of a check binary after the command line has been parsed
///
/// `--version` and rejected options end the process here, everything else
/// ends with the status of the run.
pub fn main<P: Probe>(mut appl: CheckAppl<P>) -> Status {
    if appl.general.version {
        println!("{}", appl.version_line());
        return Status::Ok;
    }
    if let Err(err) = appl.validate_options() {
        exit_with_option_error(&err);
    }
    appl.run()
}

#[cfg(test)]
mod test {
    use log::LevelFilter;

    use super::{log_levels, CheckAppl, GeneralOptions, Probe, Stage};
    use crate::check::WarnCritCheck;
    use crate::compare::{Comparator, Relation};
    use crate::daemon::{SnmpDaemonIdentifier, NET_SNMPD, SMART_SNMPD};
    use crate::error::{CheckError, OptionError, Result};
    use crate::fetch::FetchStatic;
    use crate::metrics::{MetricMap, MetricSchema, Row};
    use crate::oids;
    use crate::snmp::mock::ScriptedAgent;
    use crate::snmp::{Oid, SnmpOptions, Value, VarBind};
    use crate::threshold::{AbsoluteThreshold, Threshold};
    use crate::Status;

    static DAEMONS: [&SnmpDaemonIdentifier; 2] = [&SMART_SNMPD, &NET_SNMPD];

    struct Counter(&'static str);

    impl MetricSchema for Counter {
        fn data_oids(&self) -> Vec<Oid> {
            vec![oids::oid(self.0)]
        }

        fn convert(&self, data: &[VarBind], metrics: &mut MetricMap) -> Result<()> {
            let row = Row::new(data, 1, "counter corrupt")?;
            let n = row.u64(0)?;
            metrics.set_prove_value(Threshold::new(n));
            metrics.insert("n", n);
            Ok(())
        }
    }

    struct CounterProbe;

    impl Probe for CounterProbe {
        type Fetch = FetchStatic;
        type Check = WarnCritCheck<AbsoluteThreshold>;

        fn check_name(&self) -> &'static str {
            "COUNTER"
        }

        fn appl_name(&self) -> &'static str {
            "check_counter"
        }

        fn description(&self) -> &'static str {
            "Check a counter"
        }

        fn supported_daemons(&self) -> &'static [&'static SnmpDaemonIdentifier] {
            &DAEMONS
        }

        fn schema(&self, daemon: &SnmpDaemonIdentifier) -> Result<Box<dyn MetricSchema>> {
            if *daemon == SMART_SNMPD {
                Ok(Box::new(Counter("1.3.6.1.9.1.0")))
            } else {
                Ok(Box::new(Counter("1.3.6.1.9.2.0")))
            }
        }

        fn comparator(&self) -> Box<dyn Comparator<AbsoluteThreshold>> {
            Box::new(Relation::Ge)
        }

        fn result_message(&self, metrics: &MetricMap, _: &Self::Check) -> Result<String> {
            Ok(format!("counter is {}", metrics.get::<u64>("n")?))
        }

        fn performance_message(&self, metrics: &MetricMap, check: &Self::Check) -> Result<String> {
            Ok(format!(
                "n={};{};{}",
                metrics.get::<u64>("n")?,
                check.warn.unwrap_or_default(),
                check.crit.unwrap_or_default()
            ))
        }
    }

    fn net_snmp_agent(counter: u64) -> ScriptedAgent {
        let id = "1.3.6.1.4.1.8072.3.2.10".parse::<Oid>().unwrap();
        ScriptedAgent::new()
            .with("1.3.6.1.2.1.1.2.0", Value::ObjectIdentifier(id))
            .with("1.3.6.1.9.1.0", Value::Counter64(1))
            .with("1.3.6.1.9.2.0", Value::Counter64(counter))
    }

    fn appl(agent: ScriptedAgent, warn: u64, crit: u64) -> CheckAppl<CounterProbe> {
        let check = WarnCritCheck::new(Some(Threshold::new(warn)), Some(Threshold::new(crit)));
        let snmp = SnmpOptions {
            community: Some("public".into()),
            ..Default::default()
        };
        CheckAppl::new(
            CounterProbe,
            FetchStatic,
            check,
            GeneralOptions::default(),
            snmp,
            "auto".into(),
        )
        .with_transport(Box::new(agent))
    }

    #[test]
    fn stages_run_in_order() {
        let mut appl = appl(net_snmp_agent(15), 10, 20);
        assert_eq!(appl.execute().unwrap(), Status::Warning);
        assert_eq!(appl.stage(), Stage::Prove);
        assert_eq!(appl.daemon(), Some(&NET_SNMPD));
        assert_eq!(
            appl.render(Status::Warning, None),
            "COUNTER WARNING - counter is 15|n=15;10;20"
        );
    }

    #[test]
    fn skipping_a_stage_is_out_of_order() {
        let mut appl = appl(net_snmp_agent(15), 10, 20);
        appl.configure().unwrap();
        match appl.fetch_data() {
            Err(CheckError::OutOfOrder(op)) => assert_eq!(op, "fetch_data"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(appl.run(), Status::Unknown);
        assert_eq!(
            appl.output(),
            Some("COUNTER UNKNOWN - out of order execution of CheckAppl::configure()")
        );
    }

    #[test]
    fn report_happens_once() {
        let mut appl = appl(net_snmp_agent(25), 10, 20);
        assert_eq!(appl.run(), Status::Critical);
        let first = appl.output().map(str::to_string);
        assert_eq!(first.as_ref().map(String::as_str), Some("COUNTER CRITICAL - counter is 25|n=25;10;20"));
        assert!(!appl.deadline().is_armed());

        assert_eq!(appl.report(Status::Ok, Some("again")), Status::Ok);
        assert_eq!(appl.output().map(str::to_string), first);
        assert!(!appl.deadline().is_armed());
        assert_eq!(appl.stage(), Stage::Report);
    }

    #[test]
    fn snmp_failures_are_unknown() {
        let mut agent = net_snmp_agent(1);
        agent.go_silent();
        let mut appl = appl(agent, 10, 20);
        assert_eq!(appl.run(), Status::Unknown);
        assert_eq!(
            appl.output(),
            Some("COUNTER UNKNOWN - Unknown SNMP daemon (daemon not running or no supported MIB found)")
        );
    }

    #[test]
    fn bad_data_is_reported() {
        let id = "1.3.6.1.4.1.8072.3.2.10".parse::<Oid>().unwrap();
        let agent = ScriptedAgent::new()
            .with("1.3.6.1.2.1.1.2.0", Value::ObjectIdentifier(id))
            .with("1.3.6.1.9.2.0", Value::OctetString(b"many".to_vec()));
        let mut appl = appl(agent, 10, 20);
        assert_eq!(appl.run(), Status::Unknown);
        assert_eq!(appl.output(), Some("COUNTER UNKNOWN - Bad snmp result: counter corrupt"));
    }

    #[test]
    fn performance_data_can_be_hidden() {
        let mut appl = appl(net_snmp_agent(5), 10, 20);
        appl.general.show_performance_data = Some(false);
        assert_eq!(appl.execute().unwrap(), Status::Ok);
        assert_eq!(appl.render(Status::Ok, None), "COUNTER OK - counter is 5");
    }

    #[test]
    fn options_are_validated_together() {
        let mut appl = appl(net_snmp_agent(5), 10, 20);
        appl.snmpd_type = "bsnmpd".into();
        assert_eq!(
            appl.validate_options(),
            Err(OptionError::InvalidValue {
                option: "snmpd-type",
                value: "bsnmpd".into()
            })
        );
        appl.snmpd_type = "auto".into();
        appl.snmp.community = None;
        assert!(appl.validate_options().is_err());
    }

    #[test]
    fn forced_daemon_must_answer() {
        let mut appl = appl(net_snmp_agent(5), 10, 20);
        appl.snmpd_type = "smart-snmpd".into();
        assert_eq!(appl.run(), Status::Unknown);
    }

    #[test]
    fn version_line() {
        let appl = appl(net_snmp_agent(5), 10, 20);
        assert_eq!(
            appl.version_line(),
            format!("check_counter {} Check a counter", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn debug_levels() {
        assert_eq!(log_levels(0), (LevelFilter::Warn, LevelFilter::Warn));
        assert_eq!(log_levels(3), (LevelFilter::Info, LevelFilter::Debug));
        assert_eq!(log_levels(4), (LevelFilter::Debug, LevelFilter::Debug));
    }
}
