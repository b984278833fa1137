//! In-memory variable store.
//!
//! [`VariableStore`] is the stock [`RuntimeContext`]: two persistent maps
//! (variables and captures) plus a log buffer. Cloning a store is O(1), so a
//! caller can keep a snapshot before running a script and compare afterwards.

use std::collections::BTreeMap;

use blockscript_foundation::{Error, Result, Value};
use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::context::RuntimeContext;

const REF_OPEN: char = '<';
const REF_CLOSE: char = '>';

/// Variables and captures keyed by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariableStore {
    variables: OrdMap<String, Value>,
    captures: OrdMap<String, Value>,
    log: Vec<String>,
}

/// Wire form of a store; the log buffer is not persisted.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    variables: BTreeMap<String, Value>,
    captures: BTreeMap<String, Value>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds an ordinary variable.
    pub fn set_value(&mut self, name: &str, value: impl Into<Value>) {
        self.set(name, value.into(), false);
    }

    /// Binds a capture.
    pub fn set_capture(&mut self, name: &str, value: impl Into<Value>) {
        self.set(name, value.into(), true);
    }

    /// Looks up a binding in either partition.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name).or_else(|| self.captures.get(name))
    }

    /// Returns true if `name` is bound as a capture.
    #[must_use]
    pub fn is_capture(&self, name: &str) -> bool {
        self.captures.contains_key(name)
    }

    /// Iterates ordinary variables in name order.
    pub fn variables(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.variables.iter()
    }

    /// Iterates captures in name order.
    pub fn captures(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.captures.iter()
    }

    /// Returns the number of bindings across both partitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len() + self.captures.len()
    }

    /// Returns true if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.captures.is_empty()
    }

    /// Removes a binding from whichever partition holds it.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.variables
            .remove(name)
            .or_else(|| self.captures.remove(name))
    }

    /// Returns log lines recorded so far.
    #[must_use]
    pub fn logs(&self) -> &[String] {
        &self.log
    }

    /// Drains the log buffer.
    pub fn take_logs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.log)
    }

    /// Removes all bindings and log lines.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Resolves one reference body (`NAME` or `NAME[i]`).
    fn resolve(&self, reference: &str) -> Option<String> {
        if let Some(indexed) = reference.strip_suffix(']') {
            let (name, index) = indexed.split_once('[')?;
            let index = index.trim().parse::<isize>().ok()?;
            return self.get(name.trim())?.element(index).map(str::to_string);
        }
        self.get(reference.trim()).map(ToString::to_string)
    }

    /// Encodes the bindings as `MessagePack`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Snapshot`] if encoding fails.
    pub fn to_snapshot(&self) -> Result<Vec<u8>> {
        let snapshot = Snapshot {
            variables: self.variables.clone().into_iter().collect(),
            captures: self.captures.clone().into_iter().collect(),
        };
        rmp_serde::to_vec_named(&snapshot).map_err(|e| Error::Snapshot(e.to_string()))
    }

    /// Restores a store from [`VariableStore::to_snapshot`] bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Snapshot`] if the bytes are not a valid snapshot.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self> {
        let snapshot: Snapshot =
            rmp_serde::from_slice(bytes).map_err(|e| Error::Snapshot(e.to_string()))?;
        Ok(Self {
            variables: snapshot.variables.into_iter().collect(),
            captures: snapshot.captures.into_iter().collect(),
            log: Vec::new(),
        })
    }
}

impl RuntimeContext for VariableStore {
    /// Replaces each `<NAME>` or `<NAME[i]>` with its bound value.
    ///
    /// Lists render as `[a, b]` unless indexed. Unbound references and
    /// unclosed `<` are left as written.
    fn substitute(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        let mut rest = raw;
        while let Some(open) = rest.find(REF_OPEN) {
            out.push_str(&rest[..open]);
            let after = &rest[open + REF_OPEN.len_utf8()..];
            let Some(close) = after.find(REF_CLOSE) else {
                out.push_str(&rest[open..]);
                return out;
            };
            let reference = &after[..close];
            match self.resolve(reference) {
                Some(value) => out.push_str(&value),
                None => {
                    out.push(REF_OPEN);
                    out.push_str(reference);
                    out.push(REF_CLOSE);
                }
            }
            rest = &after[close + REF_CLOSE.len_utf8()..];
        }
        out.push_str(rest);
        out
    }

    fn set(&mut self, name: &str, value: Value, is_capture: bool) {
        let (target, other) = if is_capture {
            (&mut self.captures, &mut self.variables)
        } else {
            (&mut self.variables, &mut self.captures)
        };
        other.remove(name);
        target.insert(name.to_string(), value);
    }

    fn log(&mut self, message: &str) {
        self.log.push(message.to_string());
    }
}
