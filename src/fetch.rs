//! How a check gets its data off the agent
//!
//! * [`FetchStatic`] asks for the fixed object list of a schema.
//! * [`FetchTable`] first finds a table row by name, or takes the row index
//!   from the command line, then asks for that row.
//! * [`FetchProcesses`] scans the process table and keeps the processes
//!   passing a filter.
//! * [`IdentifyOnly`] fetches nothing, identifying the daemon is all there
//!   is to do.
//!
//! [`FetchStatic`]: struct.FetchStatic.html
//! [`FetchTable`]: struct.FetchTable.html
//! [`FetchProcesses`]: struct.FetchProcesses.html
//! [`IdentifyOnly`]: struct.IdentifyOnly.html

use log::{debug, info};
use structopt::StructOpt;

use crate::daemon::SnmpDaemonIdentifier;
use crate::error::{CheckError, OptionError, Result};
use crate::metrics::{MetricMap, MetricSchema, TableSchema};
use crate::oids::{self, smart_snmpd};
use crate::process::{ProcessFilter, ProcessFilterOptions, ProcessMap};
use crate::snmp::{self, Deadline, Oid, Transport, VarBind, DEFAULT_MAX_REPETITIONS};
use crate::threshold::RangeThreshold;

/// A way of fetching the raw data for a check and converting it
pub trait FetchStrategy {
    /// What describes the data to fetch for the identified daemon
    type Schema: ?Sized;
    /// What the fetch returns
    type Raw;

    fn validate(&self) -> std::result::Result<(), OptionError> {
        Ok(())
    }

    fn fetch(
        &self,
        transport: &mut dyn Transport,
        deadline: &Deadline,
        schema: &mut Self::Schema,
        daemon: &SnmpDaemonIdentifier,
    ) -> Result<Self::Raw>;

    fn convert(&self, schema: &Self::Schema, raw: &Self::Raw, metrics: &mut MetricMap) -> Result<()>;
}

fn fetch_static(
    transport: &mut dyn Transport,
    deadline: &Deadline,
    data_oids: &[Oid],
    daemon: &SnmpDaemonIdentifier,
) -> Result<Vec<VarBind>> {
    let context = format!("Cannot fetch values to check from {}", daemon);
    snmp::get_values(transport, data_oids, deadline, &context)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FetchStatic;

impl FetchStrategy for FetchStatic {
    type Schema = dyn MetricSchema;
    type Raw = Vec<VarBind>;

    fn fetch(
        &self,
        transport: &mut dyn Transport,
        deadline: &Deadline,
        schema: &mut Self::Schema,
        daemon: &SnmpDaemonIdentifier,
    ) -> Result<Vec<VarBind>> {
        fetch_static(transport, deadline, &schema.data_oids(), daemon)
    }

    fn convert(&self, schema: &Self::Schema, raw: &Self::Raw, metrics: &mut MetricMap) -> Result<()> {
        schema.convert(raw, metrics)
    }
}

/// Selects the table row a check reads
#[derive(Clone, Debug, Default, StructOpt)]
pub struct FetchTable {
    #[structopt(short = "i", long = "index", help = "table index of object to check")]
    pub index: Option<u64>,
    #[structopt(short = "n", long = "name", help = "name of the object to check")]
    pub name: Option<String>,
}

impl FetchTable {
    /// Scan the search columns for a value equal to `name`
    ///
    /// Without an exact match in any column the first row with a value
    /// starting with `name` is taken.
    fn find_row(
        &self,
        transport: &mut dyn Transport,
        deadline: &Deadline,
        columns: &[Oid],
        name: &str,
        daemon: &SnmpDaemonIdentifier,
    ) -> Result<u64> {
        info!("searching row matching '{}'", name);
        let context = format!("Cannot fetch values to search for '{}' from {}", name, daemon);
        let mut exact = None;
        let mut prefixed = None;
        snmp::get_table(
            transport,
            columns,
            DEFAULT_MAX_REPETITIONS,
            deadline,
            &context,
            |row| {
                for vb in row {
                    let value = vb.value.printable();
                    if value == name {
                        exact = vb.oid.last();
                        return true;
                    }
                    if prefixed.is_none() && value.starts_with(name) {
                        prefixed = vb.oid.last();
                    }
                }
                false
            },
        )?;
        exact.or(prefixed).ok_or_else(|| {
            CheckError::BadResult(format!("Cannot find row matching '{}' from {}", name, daemon))
        })
    }
}

impl FetchStrategy for FetchTable {
    type Schema = dyn TableSchema;
    type Raw = Vec<VarBind>;

    fn validate(&self) -> std::result::Result<(), OptionError> {
        if self.index.is_none() && self.name.is_none() {
            return Err(OptionError::Required(vec!["index", "name"]));
        }
        Ok(())
    }

    fn fetch(
        &self,
        transport: &mut dyn Transport,
        deadline: &Deadline,
        schema: &mut Self::Schema,
        daemon: &SnmpDaemonIdentifier,
    ) -> Result<Vec<VarBind>> {
        let index = match (self.index, &self.name) {
            (Some(index), _) => index,
            (None, Some(name)) => {
                self.find_row(transport, deadline, &schema.search_oids(), name, daemon)?
            }
            (None, None) => return Err(OptionError::Required(vec!["index", "name"]).into()),
        };
        debug!("reading table row {}", index);
        schema.set_row_index(index);
        fetch_static(transport, deadline, &schema.data_oids(), daemon)
    }

    fn convert(&self, schema: &Self::Schema, raw: &Self::Raw, metrics: &mut MetricMap) -> Result<()> {
        schema.convert(raw, metrics)
    }
}

/// The process table columns, in scan order
pub fn process_columns() -> Vec<Oid> {
    oids::oids(&[
        smart_snmpd::PROCESS_ARGS,
        smart_snmpd::PROCESS_USER,
        smart_snmpd::PROCESS_GROUP,
        smart_snmpd::PROCESS_EFF_USER,
        smart_snmpd::PROCESS_EFF_GROUP,
    ])
}

/// Counts the processes passing a filter
#[derive(Debug, Default)]
pub struct FetchProcesses {
    pub options: ProcessFilterOptions,
}

impl FetchProcesses {
    pub fn new(options: ProcessFilterOptions) -> FetchProcesses {
        FetchProcesses { options }
    }

    pub fn filter(&self) -> std::result::Result<ProcessFilter, OptionError> {
        self.options.build()
    }
}

impl FetchStrategy for FetchProcesses {
    /// The process table has the same layout everywhere it is supported
    type Schema = [Oid];
    type Raw = ProcessMap;

    fn validate(&self) -> std::result::Result<(), OptionError> {
        self.options.validate()
    }

    fn fetch(
        &self,
        transport: &mut dyn Transport,
        deadline: &Deadline,
        columns: &mut [Oid],
        daemon: &SnmpDaemonIdentifier,
    ) -> Result<ProcessMap> {
        let filter = self.filter()?;
        let context = format!("Cannot fetch values to search from {}", daemon);
        let mut scanned = ProcessMap::new();
        snmp::get_table(transport, columns, DEFAULT_MAX_REPETITIONS, deadline, &context, |row| {
            for (column, vb) in row.iter().enumerate() {
                let index = match vb.oid.last() {
                    Some(index) => index,
                    None => continue,
                };
                let text = vb.value.printable();
                match column {
                    0 => scanned.set_args(index, text),
                    1 => scanned.set_username(index, text),
                    2 => scanned.set_groupname(index, text),
                    3 => scanned.set_eff_username(index, text),
                    _ => scanned.set_eff_groupname(index, text),
                }
            }
            false
        })?;

        let mut processes = ProcessMap::new();
        for (index, process) in scanned.iter() {
            if filter.matches(process) {
                debug!("process {} matches: {}", index, process.args);
                processes.insert(*index, process.clone());
            }
        }
        info!(
            "{} of {} processes match {}",
            processes.len(),
            scanned.len(),
            filter.summary()
        );
        Ok(processes)
    }

    fn convert(&self, _columns: &[Oid], raw: &ProcessMap, metrics: &mut MetricMap) -> Result<()> {
        let count = raw.len() as u64;
        metrics.set_prove_value(RangeThreshold::point(count));
        metrics.insert("count", count);
        metrics.insert("filter", self.options.summary());
        Ok(())
    }
}

/// Nothing to fetch: an identified daemon is the whole result
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentifyOnly;

impl FetchStrategy for IdentifyOnly {
    type Schema = ();
    type Raw = ();

    fn fetch(
        &self,
        _transport: &mut dyn Transport,
        _deadline: &Deadline,
        _schema: &mut (),
        _daemon: &SnmpDaemonIdentifier,
    ) -> Result<()> {
        Ok(())
    }

    fn convert(&self, _schema: &(), _raw: &(), metrics: &mut MetricMap) -> Result<()> {
        metrics.set_prove_value(false);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{process_columns, FetchProcesses, FetchStrategy, FetchTable};
    use crate::daemon::SMART_SNMPD;
    use crate::error::{CheckError, Result};
    use crate::metrics::{row_oids, MetricMap, MetricSchema, TableSchema};
    use crate::process::ProcessFilterOptions;
    use crate::snmp::mock::ScriptedAgent;
    use crate::snmp::{Deadline, Oid, Value, VarBind};
    use crate::threshold::RangeThreshold;

    fn text(s: &str) -> Value {
        Value::OctetString(s.as_bytes().to_vec())
    }

    struct Mounts {
        index: Option<u64>,
    }

    impl MetricSchema for Mounts {
        fn data_oids(&self) -> Vec<Oid> {
            row_oids(&["1.3.6.1.9.1.3".parse().unwrap()], self.index)
        }

        fn convert(&self, data: &[VarBind], metrics: &mut MetricMap) -> Result<()> {
            metrics.insert("size", data[0].value.printable());
            Ok(())
        }
    }

    impl TableSchema for Mounts {
        fn search_oids(&self) -> Vec<Oid> {
            vec!["1.3.6.1.9.1.2".parse().unwrap()]
        }

        fn set_row_index(&mut self, index: u64) {
            self.index = Some(index);
        }
    }

    fn mounts_agent() -> ScriptedAgent {
        ScriptedAgent::new()
            .with("1.3.6.1.9.1.2.1", text("/"))
            .with("1.3.6.1.9.1.2.2", text("/boot"))
            .with("1.3.6.1.9.1.2.3", text("/var"))
            .with("1.3.6.1.9.1.3.1", Value::Integer(10))
            .with("1.3.6.1.9.1.3.2", Value::Integer(20))
            .with("1.3.6.1.9.1.3.3", Value::Integer(30))
    }

    fn by_name(name: &str) -> FetchTable {
        FetchTable {
            index: None,
            name: Some(name.to_string()),
        }
    }

    #[test]
    fn table_row_found_by_name() {
        let mut agent = mounts_agent();
        let mut schema = Mounts { index: None };
        let raw = by_name("/var")
            .fetch(&mut agent, &Deadline::unarmed(), &mut schema, &SMART_SNMPD)
            .unwrap();
        assert_eq!(schema.index, Some(3));
        assert_eq!(schema.data_oids()[0].to_string(), "1.3.6.1.9.1.3.3");
        assert_eq!(raw[0].value, Value::Integer(30));
    }

    #[test]
    fn table_row_name_is_a_prefix() {
        let mut agent = mounts_agent();
        let mut schema = Mounts { index: None };
        by_name("/b")
            .fetch(&mut agent, &Deadline::unarmed(), &mut schema, &SMART_SNMPD)
            .unwrap();
        assert_eq!(schema.index, Some(2));
    }

    #[test]
    fn exact_name_beats_an_earlier_prefix() {
        let mut agent = ScriptedAgent::new()
            .with("1.3.6.1.9.1.2.1", text("/var/log"))
            .with("1.3.6.1.9.1.2.2", text("/var"))
            .with("1.3.6.1.9.1.3.1", Value::Integer(10))
            .with("1.3.6.1.9.1.3.2", Value::Integer(20));
        let mut schema = Mounts { index: None };
        let raw = by_name("/var")
            .fetch(&mut agent, &Deadline::unarmed(), &mut schema, &SMART_SNMPD)
            .unwrap();
        assert_eq!(schema.index, Some(2));
        assert_eq!(raw[0].value, Value::Integer(20));
    }

    /// Mounts searched by device first, then by mountpoint
    struct Devices(Mounts);

    impl MetricSchema for Devices {
        fn data_oids(&self) -> Vec<Oid> {
            self.0.data_oids()
        }

        fn convert(&self, data: &[VarBind], metrics: &mut MetricMap) -> Result<()> {
            self.0.convert(data, metrics)
        }
    }

    impl TableSchema for Devices {
        fn search_oids(&self) -> Vec<Oid> {
            vec!["1.3.6.1.9.1.1".parse().unwrap(), "1.3.6.1.9.1.2".parse().unwrap()]
        }

        fn set_row_index(&mut self, index: u64) {
            self.0.set_row_index(index);
        }
    }

    fn devices_agent() -> ScriptedAgent {
        ScriptedAgent::new()
            .with("1.3.6.1.9.1.1.1", text("/dev/sda1"))
            .with("1.3.6.1.9.1.1.2", text("/dev/sdb1"))
            .with("1.3.6.1.9.1.2.1", text("/srv"))
            .with("1.3.6.1.9.1.2.2", text("/"))
            .with("1.3.6.1.9.1.3.1", Value::Integer(10))
            .with("1.3.6.1.9.1.3.2", Value::Integer(20))
    }

    #[test]
    fn exact_match_in_second_column() {
        let mut agent = devices_agent();
        let mut schema = Devices(Mounts { index: None });
        let raw = by_name("/")
            .fetch(&mut agent, &Deadline::unarmed(), &mut schema, &SMART_SNMPD)
            .unwrap();
        assert_eq!(schema.0.index, Some(2));
        assert_eq!(raw[0].value, Value::Integer(20));
    }

    #[test]
    fn prefix_match_in_first_column() {
        let mut agent = devices_agent();
        let mut schema = Devices(Mounts { index: None });
        by_name("/dev/sdb")
            .fetch(&mut agent, &Deadline::unarmed(), &mut schema, &SMART_SNMPD)
            .unwrap();
        assert_eq!(schema.0.index, Some(2));

        let mut schema = Devices(Mounts { index: None });
        by_name("/s")
            .fetch(&mut agent, &Deadline::unarmed(), &mut schema, &SMART_SNMPD)
            .unwrap();
        assert_eq!(schema.0.index, Some(1));
    }

    #[test]
    fn table_row_not_found() {
        let mut agent = mounts_agent();
        let mut schema = Mounts { index: None };
        match by_name("/home").fetch(&mut agent, &Deadline::unarmed(), &mut schema, &SMART_SNMPD) {
            Err(CheckError::BadResult(msg)) => {
                assert_eq!(msg, "Cannot find row matching '/home' from smart-snmpd")
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn explicit_index_skips_the_search() {
        let mut agent = mounts_agent();
        let mut schema = Mounts { index: None };
        let fetch = FetchTable {
            index: Some(1),
            name: None,
        };
        let raw = fetch
            .fetch(&mut agent, &Deadline::unarmed(), &mut schema, &SMART_SNMPD)
            .unwrap();
        assert_eq!(raw[0].value, Value::Integer(10));
        assert_eq!(agent.bulk_requests(), 0);
    }

    #[test]
    fn table_needs_index_or_name() {
        assert!(FetchTable::default().validate().is_err());
        assert!(by_name("/").validate().is_ok());
    }

    fn process_agent() -> ScriptedAgent {
        let rows = [
            (1, "/sbin/init", "root"),
            (220, "/usr/sbin/sshd -D", "root"),
            (871, "sshd: alice [priv]", "root"),
            (1003, "/usr/sbin/nginx -g daemon off;", "www-data"),
            (1004, "/usr/sbin/nginx -g daemon off;", "www-data"),
        ];
        let mut agent = ScriptedAgent::new();
        for (index, args, user) in rows.iter() {
            for (column, value) in [(3, *args), (4, *user), (5, *user), (6, *user), (7, *user)].iter() {
                agent.insert(&format!("1.3.6.1.4.1.36539.20.4.2.1.{}.{}", column, index), text(value));
            }
        }
        agent.insert("1.3.6.1.4.1.36539.20.5.1.0", Value::Counter64(2));
        agent
    }

    #[test]
    fn process_scan_keeps_matching_rows() {
        let fetch = FetchProcesses::new(ProcessFilterOptions {
            command: Some("/usr/sbin/nginx".into()),
            username: Some("www-data".into()),
            ..Default::default()
        });
        let mut agent = process_agent();
        let mut columns = process_columns();
        let processes = fetch
            .fetch(&mut agent, &Deadline::unarmed(), &mut columns, &SMART_SNMPD)
            .unwrap();
        assert_eq!(processes.iter().map(|(i, _)| *i).collect::<Vec<_>>(), vec![1003, 1004]);

        let mut metrics = MetricMap::new();
        fetch.convert(&columns, &processes, &mut metrics).unwrap();
        assert_eq!(
            metrics.prove_value::<RangeThreshold<u64>>().unwrap(),
            RangeThreshold::point(2)
        );
        assert_eq!(
            metrics.get::<String>("filter").unwrap(),
            "command=/usr/sbin/nginx,username=www-data"
        );
    }

    #[test]
    fn process_scan_with_nothing_matching() {
        let fetch = FetchProcesses::new(ProcessFilterOptions {
            command: Some("postgres".into()),
            ..Default::default()
        });
        let mut agent = process_agent();
        let processes = fetch
            .fetch(&mut agent, &Deadline::unarmed(), &mut process_columns(), &SMART_SNMPD)
            .unwrap();
        assert!(processes.is_empty());
    }

    #[test]
    fn process_scan_request_failure() {
        let fetch = FetchProcesses::new(ProcessFilterOptions {
            command: Some("sshd".into()),
            ..Default::default()
        });
        let mut agent = process_agent();
        agent.go_silent();
        match fetch.fetch(&mut agent, &Deadline::unarmed(), &mut process_columns(), &SMART_SNMPD) {
            Err(CheckError::BadRequest(msg)) => {
                assert_eq!(msg, "Cannot fetch values to search from smart-snmpd")
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
