//! In-memory connection manager for exercising the exporter without a server.

use std::collections::BTreeMap;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::connection::QueryConnection;
use crate::spec::{ExportError, SpecQueryResult, SqlParam, SqlValue};

/// Query text that echoes its bound parameters back as one row.
pub(crate) const C_QUERY_ECHO: &str = "SELECT $params";

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeManager {
    dict_results: Arc<BTreeMap<String, SpecQueryResult>>,
    n_connects: Arc<AtomicUsize>,
    if_refuse_connect: bool,
}

impl FakeManager {
    pub(crate) fn new(l_results: Vec<(&str, SpecQueryResult)>) -> Self {
        Self {
            dict_results: Arc::new(
                l_results
                    .into_iter()
                    .map(|(c_query, result)| (c_query.to_string(), result))
                    .collect(),
            ),
            ..Self::default()
        }
    }

    pub(crate) fn refusing() -> Self {
        Self {
            if_refuse_connect: true,
            ..Self::default()
        }
    }

    pub(crate) fn connects(&self) -> usize {
        self.n_connects.load(Ordering::SeqCst)
    }
}

pub(crate) struct FakeConnection {
    dict_results: Arc<BTreeMap<String, SpecQueryResult>>,
}

impl r2d2::ManageConnection for FakeManager {
    type Connection = FakeConnection;
    type Error = io::Error;

    fn connect(&self) -> Result<FakeConnection, io::Error> {
        if self.if_refuse_connect {
            return Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            ));
        }
        self.n_connects.fetch_add(1, Ordering::SeqCst);
        Ok(FakeConnection {
            dict_results: Arc::clone(&self.dict_results),
        })
    }

    fn is_valid(&self, _conn: &mut FakeConnection) -> Result<(), io::Error> {
        Ok(())
    }

    fn has_broken(&self, _conn: &mut FakeConnection) -> bool {
        false
    }
}

impl QueryConnection for FakeConnection {
    fn run_query(
        &mut self,
        query: &str,
        params: &[SqlParam],
    ) -> Result<SpecQueryResult, ExportError> {
        if query == C_QUERY_ECHO {
            return Ok(SpecQueryResult {
                columns: Some((1..=params.len()).map(|n| format!("p{n}")).collect()),
                rows: vec![params.iter().map(derive_echo_value).collect()],
            });
        }
        self.dict_results
            .get(query)
            .cloned()
            .ok_or_else(|| ExportError::query(format!("syntax error at or near \"{query}\"")))
    }
}

fn derive_echo_value(param: &SqlParam) -> SqlValue {
    match param {
        SqlParam::Null => SqlValue::Null,
        SqlParam::Bool(val) => SqlValue::Bool(*val),
        SqlParam::Int(val) => SqlValue::Int(*val),
        SqlParam::Float(val) => SqlValue::Float(*val),
        SqlParam::Text(val) => SqlValue::Text(val.clone()),
        SqlParam::Date(val) => SqlValue::Date(*val),
        SqlParam::Timestamp(val) => SqlValue::Timestamp(*val),
    }
}
