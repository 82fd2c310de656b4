//! Scriptable probe for tests.
//!
//! `MockProbe` implements [`CommandProbe`] over an in-memory set of
//! "installed" tools and counts how often each name is probed. Clones share
//! state, so a test can keep a handle after moving the probe into a
//! resolver.
//!
//! # Example
//!
//! ```
//! use toolprobe::resolver::{AvailabilityResolver, MockProbe};
//!
//! let probe = MockProbe::with_available(["go"]);
//! let resolver = AvailabilityResolver::new(probe.clone());
//!
//! assert!(resolver.is_available("go").unwrap());
//! assert!(resolver.is_available("go").unwrap());
//! assert_eq!(probe.probe_count("go"), 1);
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::name::CommandName;
use super::probe::CommandProbe;

#[derive(Debug, Default)]
struct MockState {
    available: HashSet<String>,
    probes: HashMap<String, usize>,
}

/// In-memory probe with per-name call counts.
#[derive(Debug, Clone, Default)]
pub struct MockProbe {
    state: Arc<Mutex<MockState>>,
}

impl MockProbe {
    /// Create a probe where nothing is installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a probe with the given tools installed.
    pub fn with_available<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let probe = Self::new();
        for name in names {
            probe.install(name.as_ref());
        }
        probe
    }

    /// Mark a tool as installed.
    pub fn install(&self, name: &str) {
        self.lock().available.insert(key_for(name));
    }

    /// Mark a tool as removed.
    pub fn uninstall(&self, name: &str) {
        self.lock().available.remove(&key_for(name));
    }

    /// How many times `name` has been probed.
    pub fn probe_count(&self, name: &str) -> usize {
        self.lock().probes.get(&key_for(name)).copied().unwrap_or(0)
    }

    /// Total probes across all names.
    pub fn total_probes(&self) -> usize {
        self.lock().probes.values().sum()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CommandProbe for MockProbe {
    fn resolve(&self, name: &CommandName) -> bool {
        let mut state = self.lock();
        *state.probes.entry(name.key().to_string()).or_insert(0) += 1;
        state.available.contains(name.key())
    }
}

fn key_for(name: &str) -> String {
    CommandName::parse(name)
        .map(|n| n.key().to_string())
        .unwrap_or_else(|_| name.to_string())
}
