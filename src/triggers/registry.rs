//! Handler unit registry.

use std::collections::HashMap;

use tracing::warn;

use super::builtin;
use super::{DispatchError, TriggerHandler};
use crate::config::Config;

/// A named bundle of entry points.
///
/// A trigger `foo` resolves to the entry point `foo` of the unit `foo`.
#[derive(Default)]
pub struct HandlerUnit {
    entries: HashMap<String, Box<dyn TriggerHandler>>,
}

impl HandlerUnit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry point.
    pub fn with_entry(
        mut self,
        name: impl Into<String>,
        handler: impl TriggerHandler + 'static,
    ) -> Self {
        self.entries.insert(name.into(), Box::new(handler));
        self
    }

    /// Look up an entry point by name.
    pub fn entry(&self, name: &str) -> Option<&dyn TriggerHandler> {
        self.entries.get(name).map(|handler| &**handler)
    }
}

/// Registry of handler units, keyed by unit name.
#[derive(Default)]
pub struct Registry {
    units: HashMap<String, HandlerUnit>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every builtin unit registered.
    ///
    /// Configured triggers without a unit are reported here and answered
    /// with a "does not exist" reply when used.
    pub fn builtin(config: &Config) -> Self {
        let mut registry = Self::new();
        builtin::register_all(&mut registry, config);

        for trigger in &config.triggers {
            if !registry.contains(trigger) {
                warn!(trigger = %trigger, "configured trigger has no handler unit");
            }
        }

        registry
    }

    /// Register a unit, replacing any unit of the same name.
    pub fn register(&mut self, name: impl Into<String>, unit: HandlerUnit) {
        self.units.insert(name.into(), unit);
    }

    /// Register a single-entry unit named after its trigger.
    pub fn register_handler(&mut self, name: &str, handler: impl TriggerHandler + 'static) {
        self.register(name, HandlerUnit::new().with_entry(name, handler));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.units.contains_key(name)
    }

    /// Resolve a trigger name to its entry point.
    pub fn lookup(&self, trigger: &str) -> Result<&dyn TriggerHandler, DispatchError> {
        let unit = self
            .units
            .get(trigger)
            .ok_or_else(|| DispatchError::HandlerMissing(trigger.to_owned()))?;
        unit.entry(trigger)
            .ok_or_else(|| DispatchError::HandlerMalformed(trigger.to_owned()))
    }
}
