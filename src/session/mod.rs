//! Session bootstrap.
//!
//! A `Session` owns everything a run of toolprobe shares: the loaded config,
//! the fragment registry, and the one availability resolver every wrapper
//! consults. Caches live exactly as long as the session.
//!
//! # Example
//!
//! ```
//! use toolprobe::config::ToolprobeConfig;
//! use toolprobe::resolver::MockProbe;
//! use toolprobe::session::Session;
//! use toolprobe::ui::MockUI;
//!
//! let config = ToolprobeConfig {
//!     package_manager: "scoop".to_string(),
//!     ..Default::default()
//! };
//! let session = Session::with_probe(config, MockProbe::new()).unwrap();
//!
//! let mut ui = MockUI::new();
//! let kubectl = session.wrapper("kubectl").unwrap();
//! assert_eq!(kubectl.ensure(&mut ui).unwrap(), None);
//! assert!(ui.has_warning("scoop install kubectl"));
//! ```

use crate::config::{validate, ToolprobeConfig};
use crate::error::Result;
use crate::fragments::{FragmentRegistry, ToolWrapper};
use crate::resolver::{AvailabilityResolver, CommandProbe, PathProbe};

/// Shared state for one toolprobe process.
#[derive(Debug)]
pub struct Session {
    config: ToolprobeConfig,
    registry: FragmentRegistry,
    resolver: AvailabilityResolver,
}

impl Session {
    /// Build a session that probes `PATH` plus the configured extra paths.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if the config is invalid.
    pub fn bootstrap(config: ToolprobeConfig) -> Result<Self> {
        let probe = PathProbe::from_env_with_extra(config.extra_paths.clone());
        Self::with_probe(config, probe)
    }

    /// Build a session around a specific probe.
    pub fn with_probe(config: ToolprobeConfig, probe: impl CommandProbe + 'static) -> Result<Self> {
        validate(&config)?;
        let registry = FragmentRegistry::from_config(&config);
        tracing::debug!(
            "Session ready: {} fragments, package manager '{}'",
            registry.len(),
            config.package_manager
        );
        Ok(Self {
            config,
            registry,
            resolver: AvailabilityResolver::new(probe),
        })
    }

    /// The loaded configuration.
    pub fn config(&self) -> &ToolprobeConfig {
        &self.config
    }

    /// The fragment registry.
    pub fn registry(&self) -> &FragmentRegistry {
        &self.registry
    }

    /// The shared availability resolver.
    pub fn resolver(&self) -> &AvailabilityResolver {
        &self.resolver
    }

    /// A wrapper for `tool`, registered or not.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCommandName` for names that can't be executables.
    pub fn wrapper(&self, tool: &str) -> Result<ToolWrapper<'_>> {
        let fragment = self.registry.resolve(tool)?;
        Ok(ToolWrapper::new(
            &self.resolver,
            fragment,
            &self.config.package_manager,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolConfig;
    use crate::error::ToolprobeError;
    use crate::resolver::MockProbe;
    use crate::ui::MockUI;

    fn scoop_config() -> ToolprobeConfig {
        ToolprobeConfig {
            package_manager: "scoop".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn wrappers_share_one_resolver() {
        let probe = MockProbe::with_available(["git"]);
        let session = Session::with_probe(scoop_config(), probe.clone()).unwrap();

        session.wrapper("git").unwrap().locate().unwrap();
        session.wrapper("git").unwrap().locate().unwrap();
        assert!(session.resolver().is_available("git").unwrap());
        assert_eq!(probe.probe_count("git"), 1);
    }

    #[test]
    fn warnings_are_suppressed_across_wrappers() {
        let session = Session::with_probe(scoop_config(), MockProbe::new()).unwrap();
        let mut ui = MockUI::new();

        session.wrapper("kubectl").unwrap().ensure(&mut ui).unwrap();
        session.wrapper("kubectl").unwrap().ensure(&mut ui).unwrap();
        assert_eq!(ui.warnings().len(), 1);
    }

    #[test]
    fn config_tools_reach_wrappers() {
        let mut config = scoop_config();
        config.tools.insert(
            "bd".to_string(),
            ToolConfig {
                install_hint: Some("go install example.com/bd@latest".to_string()),
                ..Default::default()
            },
        );
        let session = Session::with_probe(config, MockProbe::new()).unwrap();
        let wrapper = session.wrapper("bd").unwrap();
        assert_eq!(wrapper.install_hint(), "go install example.com/bd@latest");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ToolprobeConfig {
            package_manager: String::new(),
            ..Default::default()
        };
        let err = Session::with_probe(config, MockProbe::new()).unwrap_err();
        assert!(matches!(err, ToolprobeError::ConfigValidationError { .. }));
    }

    #[test]
    fn invalid_tool_name_is_rejected() {
        let session = Session::with_probe(scoop_config(), MockProbe::new()).unwrap();
        assert!(session.wrapper("").is_err());
    }

    #[test]
    fn bootstrap_uses_path_probe() {
        let session = Session::bootstrap(scoop_config()).unwrap();
        assert!(!session
            .resolver()
            .is_available("toolprobe-definitely-not-installed")
            .unwrap());
    }
}
