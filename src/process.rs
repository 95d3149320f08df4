//! Finding processes in the smart-snmpd process table

use std::collections::btree_map::{self, BTreeMap};

use itertools::Itertools;
use regex::Regex;
use structopt::StructOpt;

use crate::error::OptionError;

/// The columns of one process table row that can be filtered on
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProcessTuple {
    pub args: String,
    pub username: String,
    pub groupname: String,
    pub eff_username: String,
    pub eff_groupname: String,
}

/// Processes by their row in the process table, filled column by column
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProcessMap {
    rows: BTreeMap<u64, ProcessTuple>,
}

impl ProcessMap {
    pub fn new() -> ProcessMap {
        ProcessMap::default()
    }

    fn row(&mut self, index: u64) -> &mut ProcessTuple {
        self.rows.entry(index).or_insert_with(ProcessTuple::default)
    }

    pub fn set_args(&mut self, index: u64, args: String) {
        self.row(index).args = args;
    }

    pub fn set_username(&mut self, index: u64, username: String) {
        self.row(index).username = username;
    }

    pub fn set_groupname(&mut self, index: u64, groupname: String) {
        self.row(index).groupname = groupname;
    }

    pub fn set_eff_username(&mut self, index: u64, eff_username: String) {
        self.row(index).eff_username = eff_username;
    }

    pub fn set_eff_groupname(&mut self, index: u64, eff_groupname: String) {
        self.row(index).eff_groupname = eff_groupname;
    }

    pub fn insert(&mut self, index: u64, process: ProcessTuple) {
        self.rows.insert(index, process);
    }

    pub fn get(&self, index: u64) -> Option<&ProcessTuple> {
        self.rows.get(&index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<u64, ProcessTuple> {
        self.rows.iter()
    }
}

/// Options selecting the processes to count; at least one is required
#[derive(Clone, Debug, Default, StructOpt)]
pub struct ProcessFilterOptions {
    #[structopt(
        short = "P",
        long = "process-command",
        help = "regular expression matching the command of the processes to count"
    )]
    pub command: Option<String>,
    #[structopt(
        short = "A",
        long = "process-argument",
        help = "regular expression matching one of the arguments of the processes to count"
    )]
    pub argument: Option<String>,
    #[structopt(short = "u", long = "process-username", help = "user name of the process owner")]
    pub username: Option<String>,
    #[structopt(short = "g", long = "process-groupname", help = "group name of the process owner")]
    pub groupname: Option<String>,
    #[structopt(
        short = "U",
        long = "process-effective-username",
        help = "effective user name of the process"
    )]
    pub eff_username: Option<String>,
    #[structopt(
        short = "G",
        long = "process-effective-groupname",
        help = "effective group name of the process"
    )]
    pub eff_groupname: Option<String>,
}

const FILTER_OPTIONS: &[&str] = &[
    "process-command",
    "process-argument",
    "process-username",
    "process-groupname",
    "process-effective-username",
    "process-effective-groupname",
];

impl ProcessFilterOptions {
    pub fn validate(&self) -> Result<(), OptionError> {
        self.build().map(|_| ())
    }

    pub fn build(&self) -> Result<ProcessFilter, OptionError> {
        let given = [
            &self.command,
            &self.argument,
            &self.username,
            &self.groupname,
            &self.eff_username,
            &self.eff_groupname,
        ];
        if given.iter().all(|o| o.is_none()) {
            return Err(OptionError::Required(FILTER_OPTIONS.to_vec()));
        }

        let command = match self.command {
            Some(ref pattern) => Some(compile(
                "process-command",
                pattern,
                format!(r"(?s)^(?:{})(?:\s+.*)?$", pattern),
            )?),
            None => None,
        };
        let argument = match self.argument {
            Some(ref pattern) => Some(compile(
                "process-argument",
                pattern,
                format!(r"(?s)^.*\s+(?:{})(?:\s+.*)?$", pattern),
            )?),
            None => None,
        };

        Ok(ProcessFilter {
            command,
            argument,
            username: self.username.clone(),
            groupname: self.groupname.clone(),
            eff_username: self.eff_username.clone(),
            eff_groupname: self.eff_groupname.clone(),
            summary: self.summary(),
        })
    }

    /// `command=..,arg=..` listing the filters that are set
    pub fn summary(&self) -> String {
        let named = [
            ("command", &self.command),
            ("arg", &self.argument),
            ("username", &self.username),
            ("groupname", &self.groupname),
            ("eff_username", &self.eff_username),
            ("eff_groupname", &self.eff_groupname),
        ];
        named
            .iter()
            .filter_map(|&(name, value)| value.as_ref().map(|v| format!("{}={}", name, v)))
            .join(",")
    }
}

fn compile(option: &'static str, pattern: &str, anchored: String) -> Result<Regex, OptionError> {
    Regex::new(&anchored).map_err(|_| OptionError::InvalidValue {
        option,
        value: pattern.to_string(),
    })
}

/// Every predicate that is set has to hold for a process to match
#[derive(Clone, Debug)]
pub struct ProcessFilter {
    command: Option<Regex>,
    argument: Option<Regex>,
    username: Option<String>,
    groupname: Option<String>,
    eff_username: Option<String>,
    eff_groupname: Option<String>,
    summary: String,
}

fn equal_if_set(expected: &Option<String>, actual: &str) -> bool {
    expected.as_ref().map_or(true, |e| e == actual)
}

impl ProcessFilter {
    pub fn matches(&self, process: &ProcessTuple) -> bool {
        self.command.as_ref().map_or(true, |re| re.is_match(&process.args))
            && self.argument.as_ref().map_or(true, |re| re.is_match(&process.args))
            && equal_if_set(&self.username, &process.username)
            && equal_if_set(&self.groupname, &process.groupname)
            && equal_if_set(&self.eff_username, &process.eff_username)
            && equal_if_set(&self.eff_groupname, &process.eff_groupname)
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }
}
