//! Normalized check data and the per daemon schemas producing it
//!
//! A schema knows which objects to fetch from one daemon flavor and how to
//! turn the reply into a `MetricMap`. The map always holds the value the
//! thresholds are proved against under `PROVE_VALUE`, plus whatever named
//! fields the check needs to render its messages.

use std::collections::BTreeMap;

use crate::error::{CheckError, Result};
use crate::snmp::{Oid, Value, VarBind};
use crate::threshold::{
    AbsoluteThreshold, AgentStatusTuple, CpuTuple, LoadTuple, RangeThreshold, RelativeThreshold,
    SizeThreshold,
};

pub const PROVE_VALUE: &str = "[prove_value]";

#[derive(Clone, Debug, PartialEq)]
pub enum MetricValue {
    Unsigned(u64),
    Double(f64),
    Text(String),
    Bool(bool),
    Absolute(AbsoluteThreshold),
    Relative(RelativeThreshold),
    Size(SizeThreshold),
    Range(RangeThreshold<u64>),
    Cpu(CpuTuple),
    Load(LoadTuple),
    Agent(AgentStatusTuple),
}

/// Types that can be read back out of a `MetricMap`
pub trait FromMetric: Sized {
    const KIND: &'static str;

    fn from_metric(value: &MetricValue) -> Option<Self>;
}

macro_rules! metric_kind {
    ($ty:ty, $variant:ident, $kind:expr) => {
        impl From<$ty> for MetricValue {
            fn from(value: $ty) -> MetricValue {
                MetricValue::$variant(value)
            }
        }

        impl FromMetric for $ty {
            const KIND: &'static str = $kind;

            fn from_metric(value: &MetricValue) -> Option<$ty> {
                match *value {
                    MetricValue::$variant(ref inner) => Some(inner.clone()),
                    _ => None,
                }
            }
        }
    };
}

metric_kind!(u64, Unsigned, "unsigned integer");
metric_kind!(f64, Double, "double");
metric_kind!(String, Text, "string");
metric_kind!(bool, Bool, "boolean");
metric_kind!(AbsoluteThreshold, Absolute, "absolute threshold");
metric_kind!(RelativeThreshold, Relative, "relative threshold");
metric_kind!(SizeThreshold, Size, "size threshold");
metric_kind!(RangeThreshold<u64>, Range, "range threshold");
metric_kind!(CpuTuple, Cpu, "cpu tuple");
metric_kind!(LoadTuple, Load, "load tuple");
metric_kind!(AgentStatusTuple, Agent, "agent status tuple");

impl<'a> From<&'a str> for MetricValue {
    fn from(value: &'a str) -> MetricValue {
        MetricValue::Text(value.to_string())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricMap {
    fields: BTreeMap<String, MetricValue>,
}

impl MetricMap {
    pub fn new() -> MetricMap {
        MetricMap::default()
    }

    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<MetricValue>,
    {
        self.fields.insert(key.into(), value.into());
    }

    pub fn set_prove_value<V: Into<MetricValue>>(&mut self, value: V) {
        self.insert(PROVE_VALUE, value);
    }

    pub fn get<T: FromMetric>(&self, key: &str) -> Result<T> {
        let value = self
            .fields
            .get(key)
            .ok_or_else(|| CheckError::FieldNotFound(key.to_string()))?;
        T::from_metric(value).ok_or_else(|| CheckError::FieldType {
            key: key.to_string(),
            expected: T::KIND,
        })
    }

    pub fn prove_value<T: FromMetric>(&self) -> Result<T> {
        self.get(PROVE_VALUE)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Which objects to fetch from a daemon and how to read them
pub trait MetricSchema {
    fn data_oids(&self) -> Vec<Oid>;

    /// Fill `metrics` from the reply to a request for `data_oids`
    fn convert(&self, data: &[VarBind], metrics: &mut MetricMap) -> Result<()>;
}

/// A schema reading one row of a table, found by searching a column
pub trait TableSchema: MetricSchema {
    /// The columns scanned for the row, a value in any of them can match
    fn search_oids(&self) -> Vec<Oid>;

    /// From now on `data_oids` addresses the row `index`
    fn set_row_index(&mut self, index: u64);
}

/// The data oids of a table schema: every column with the row index appended
pub fn row_oids(columns: &[Oid], index: Option<u64>) -> Vec<Oid> {
    match index {
        Some(index) => columns.iter().map(|column| column.child(index)).collect(),
        None => columns.to_vec(),
    }
}

/// Typed access to the var-binds of a reply
///
/// Any missing or mistyped value is a bad result described by `corrupt`.
#[derive(Debug)]
pub struct Row<'a> {
    data: &'a [VarBind],
    corrupt: &'static str,
}

impl<'a> Row<'a> {
    pub fn new(data: &'a [VarBind], expected: usize, corrupt: &'static str) -> Result<Row<'a>> {
        if data.len() < expected {
            return Err(CheckError::BadResult(corrupt.to_string()));
        }
        Ok(Row { data, corrupt })
    }

    fn extract<T, F>(&self, index: usize, extract: F) -> Result<T>
    where
        F: Fn(&Value) -> Option<T>,
    {
        self.data
            .get(index)
            .and_then(|vb| extract(&vb.value))
            .ok_or_else(|| {
                if let Some(vb) = self.data.get(index) {
                    log::debug!("cannot extract {}", vb);
                }
                CheckError::BadResult(self.corrupt.to_string())
            })
    }

    pub fn u32(&self, index: usize) -> Result<u32> {
        self.extract(index, Value::as_u32)
    }

    pub fn u64(&self, index: usize) -> Result<u64> {
        self.extract(index, Value::as_u64)
    }

    pub fn count(&self, index: usize) -> Result<u64> {
        self.extract(index, Value::as_count)
    }

    pub fn string(&self, index: usize) -> Result<String> {
        self.extract(index, Value::as_string)
    }
}
