//! An in-memory agent serving a fixed MIB view, for tests

use std::collections::BTreeMap;
use std::ops::Bound;

use super::{Deadline, Oid, Transport, Value, VarBind};
use crate::error::TransportError;

#[derive(Debug, Default)]
pub struct ScriptedAgent {
    view: BTreeMap<Oid, Value>,
    combine: bool,
    silent: bool,
    truncate_bulk: Option<usize>,
    get_requests: usize,
    bulk_requests: usize,
}

impl ScriptedAgent {
    /// An agent that can answer several objects per request, like v2c
    pub fn new() -> ScriptedAgent {
        ScriptedAgent {
            combine: true,
            ..ScriptedAgent::default()
        }
    }

    /// An agent that only handles one object per request, like v1
    pub fn single_object() -> ScriptedAgent {
        ScriptedAgent::default()
    }

    pub fn insert(&mut self, oid: &str, value: Value) -> &mut ScriptedAgent {
        match oid.parse::<Oid>() {
            Ok(oid) => {
                self.view.insert(oid, value);
            }
            Err(e) => panic!("bad oid in test fixture: {}", e),
        }
        self
    }

    pub fn with(mut self, oid: &str, value: Value) -> ScriptedAgent {
        self.insert(oid, value);
        self
    }

    /// Every following request fails as if the agent never answered
    pub fn go_silent(&mut self) {
        self.silent = true;
    }

    pub fn truncate_bulk_replies_to(&mut self, len: usize) {
        self.truncate_bulk = Some(len);
    }

    pub fn get_requests(&self) -> usize {
        self.get_requests
    }

    pub fn bulk_requests(&self) -> usize {
        self.bulk_requests
    }

    fn answer(&self, deadline: &Deadline) -> Result<(), TransportError> {
        deadline.check()?;
        if self.silent {
            Err(TransportError::Request("Timeout: no response from agent".to_string()))
        } else {
            Ok(())
        }
    }

    fn successor(&self, oid: &Oid) -> VarBind {
        match self
            .view
            .range((Bound::Excluded(oid.clone()), Bound::Unbounded))
            .next()
        {
            Some((next, value)) => VarBind::new(next.clone(), value.clone()),
            None => VarBind::new(oid.clone(), Value::EndOfMibView),
        }
    }
}

impl Transport for ScriptedAgent {
    fn get(&mut self, oids: &[Oid], deadline: &Deadline) -> Result<Vec<VarBind>, TransportError> {
        self.get_requests += 1;
        self.answer(deadline)?;
        Ok(oids
            .iter()
            .map(|oid| {
                let value = self.view.get(oid).cloned().unwrap_or(Value::NoSuchObject);
                VarBind::new(oid.clone(), value)
            })
            .collect())
    }

    fn get_next(&mut self, oid: &Oid, deadline: &Deadline) -> Result<VarBind, TransportError> {
        self.get_requests += 1;
        self.answer(deadline)?;
        Ok(self.successor(oid))
    }

    fn get_bulk(
        &mut self,
        oids: &[Oid],
        max_repetitions: u32,
        deadline: &Deadline,
    ) -> Result<Vec<VarBind>, TransportError> {
        self.bulk_requests += 1;
        self.answer(deadline)?;
        let mut cursor = oids.to_vec();
        let mut reply = Vec::new();
        for _ in 0..max_repetitions {
            let row = cursor.iter().map(|oid| self.successor(oid)).collect::<Vec<_>>();
            let finished = row.iter().all(|vb| vb.value == Value::EndOfMibView);
            cursor = row.iter().map(|vb| vb.oid.clone()).collect();
            reply.extend(row);
            if finished {
                break;
            }
        }
        if let Some(len) = self.truncate_bulk {
            reply.truncate(len);
        }
        Ok(reply)
    }

    fn can_combine_requests(&self) -> bool {
        self.combine
    }
}
