//! Memoized availability checks and one-time missing-tool warnings.
//!
//! The `AvailabilityResolver` answers "is this tool usable?" by probing
//! once per name and caching the answer until it is invalidated. It also
//! tracks which missing tools have already been reported, so wrappers
//! called in a loop or from a prompt hook warn only once.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::Result;
use crate::ui::{hints, UserInterface};

use super::name::CommandName;
use super::probe::CommandProbe;

#[derive(Debug, Default)]
struct ResolverState {
    /// Cached probe results, keyed by normalized command name.
    availability: HashMap<String, bool>,
    /// Names whose missing-tool warning has been emitted.
    warned: HashSet<String>,
}

/// Session-wide availability cache with warning suppression.
///
/// Both maps sit behind one lock. The cache miss path probes while holding
/// it, so concurrent callers never probe the same name twice or both emit
/// the same warning.
pub struct AvailabilityResolver {
    probe: Box<dyn CommandProbe>,
    state: Mutex<ResolverState>,
}

impl AvailabilityResolver {
    /// Create a resolver over the given probe.
    pub fn new(probe: impl CommandProbe + 'static) -> Self {
        Self {
            probe: Box::new(probe),
            state: Mutex::new(ResolverState::default()),
        }
    }

    /// Check whether `name` resolves, probing only on a cache miss.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCommandName` for empty or malformed names. A tool that
    /// is not installed is `Ok(false)`.
    pub fn is_available(&self, name: &str) -> Result<bool> {
        let name = CommandName::parse(name)?;
        let mut state = self.lock();
        Ok(self.lookup(&mut state, &name))
    }

    /// Full path of `name` when it is available.
    ///
    /// Availability comes from the cache. The path is only reported when the
    /// probe can locate binaries.
    pub fn locate(&self, name: &str) -> Result<Option<PathBuf>> {
        let parsed = CommandName::parse(name)?;
        if !self.is_available(name)? {
            return Ok(None);
        }
        Ok(self.probe.locate(&parsed))
    }

    /// The cached answer for `name`, without probing.
    pub fn cached(&self, name: &str) -> Result<Option<bool>> {
        let name = CommandName::parse(name)?;
        Ok(self.lock().availability.get(name.key()).copied())
    }

    /// Forget the cached answer for `name` so the next query probes again.
    pub fn invalidate(&self, name: &str) -> Result<()> {
        let name = CommandName::parse(name)?;
        if self.lock().availability.remove(name.key()).is_some() {
            tracing::debug!("Invalidated availability cache entry for {}", name);
        }
        Ok(())
    }

    /// Forget every cached answer.
    pub fn invalidate_all(&self) {
        let mut state = self.lock();
        tracing::debug!(
            "Invalidated {} availability cache entries",
            state.availability.len()
        );
        state.availability.clear();
    }

    /// Warn once if `name` is missing.
    ///
    /// Returns `Ok(true)` with no output when the tool is available. When it
    /// is missing, the first call in the session emits a warning naming the
    /// tool and `install_hint`; later calls stay quiet. Both return
    /// `Ok(false)`.
    pub fn warn_if_missing(
        &self,
        name: &str,
        install_hint: &str,
        ui: &mut dyn UserInterface,
    ) -> Result<bool> {
        let name = CommandName::parse(name)?;

        let first_warning = {
            let mut state = self.lock();
            if self.lookup(&mut state, &name) {
                return Ok(true);
            }
            state.warned.insert(name.key().to_string())
        };

        if first_warning {
            ui.warning(&hints::missing_tool(name.as_str(), install_hint));
        } else {
            tracing::debug!("Suppressed repeat missing-tool warning for {}", name);
        }
        Ok(false)
    }

    /// Whether the missing-tool warning for `name` has been emitted.
    pub fn has_warned(&self, name: &str) -> Result<bool> {
        let name = CommandName::parse(name)?;
        Ok(self.lock().warned.contains(name.key()))
    }

    /// Re-arm the missing-tool warning for `name`.
    ///
    /// The availability cache is left untouched.
    pub fn reset_warnings(&self, name: &str) -> Result<()> {
        let name = CommandName::parse(name)?;
        self.lock().warned.remove(name.key());
        Ok(())
    }

    /// Re-arm every missing-tool warning.
    pub fn reset_all_warnings(&self) {
        self.lock().warned.clear();
    }

    /// Number of names with a cached answer.
    pub fn cached_len(&self) -> usize {
        self.lock().availability.len()
    }

    fn lookup(&self, state: &mut ResolverState, name: &CommandName) -> bool {
        if let Some(&cached) = state.availability.get(name.key()) {
            tracing::trace!("Availability cache hit for {}: {}", name, cached);
            return cached;
        }

        let found = self.probe.resolve(name);
        tracing::debug!(
            "Probed {}: {}",
            name,
            if found { "available" } else { "missing" }
        );
        state.availability.insert(name.key().to_string(), found);
        found
    }

    fn lock(&self) -> MutexGuard<'_, ResolverState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for AvailabilityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("AvailabilityResolver")
            .field("cached", &state.availability.len())
            .field("warned", &state.warned.len())
            .finish()
    }
}
