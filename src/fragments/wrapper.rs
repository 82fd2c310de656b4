//! Tool wrappers.
//!
//! A `ToolWrapper` is what a shell fragment does for one tool: try each
//! candidate binary in order against the shared resolver, forward the
//! caller's arguments to the first one found, and otherwise warn once and
//! return nothing.
//!
//! # Example
//!
//! ```
//! use toolprobe::fragments::{Fragment, ToolWrapper};
//! use toolprobe::resolver::{AvailabilityResolver, MockProbe};
//! use toolprobe::ui::MockUI;
//!
//! let resolver = AvailabilityResolver::new(MockProbe::with_available(["openscad"]));
//! let fragment = Fragment::new("openscad").with_candidates(&["openscad-dev", "openscad"]);
//! let wrapper = ToolWrapper::new(&resolver, fragment, "scoop");
//!
//! let mut ui = MockUI::new();
//! assert_eq!(wrapper.ensure(&mut ui).unwrap().as_deref(), Some("openscad"));
//! assert!(ui.warnings().is_empty());
//! ```

use std::path::PathBuf;

use crate::error::Result;
use crate::resolver::AvailabilityResolver;
use crate::shell;
use crate::ui::UserInterface;

use super::registry::Fragment;

/// A fragment bound to the session resolver.
pub struct ToolWrapper<'a> {
    resolver: &'a AvailabilityResolver,
    fragment: Fragment,
    install_hint: String,
}

impl<'a> ToolWrapper<'a> {
    /// Bind `fragment` to `resolver`, using `package_manager` for its hint.
    pub fn new(
        resolver: &'a AvailabilityResolver,
        fragment: Fragment,
        package_manager: &str,
    ) -> Self {
        let install_hint = fragment.install_hint(package_manager);
        Self {
            resolver,
            fragment,
            install_hint,
        }
    }

    /// The wrapped fragment.
    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    /// The install hint shown when the tool is missing.
    pub fn install_hint(&self) -> &str {
        &self.install_hint
    }

    /// The first candidate that is available, probing in order.
    ///
    /// Candidates after the first hit are not probed.
    pub fn locate(&self) -> Result<Option<String>> {
        for candidate in &self.fragment.candidates {
            if self.resolver.is_available(candidate)? {
                return Ok(Some(candidate.clone()));
            }
        }
        Ok(None)
    }

    /// Like [`locate`](Self::locate), but also returns the full path.
    pub fn locate_path(&self) -> Result<Option<(String, Option<PathBuf>)>> {
        let Some(found) = self.locate()? else {
            return Ok(None);
        };
        let path = self.resolver.locate(&found)?;
        Ok(Some((found, path)))
    }

    /// Locate the tool, warning once per session when no candidate exists.
    ///
    /// The warning names the fragment's stable (last) candidate.
    pub fn ensure(&self, ui: &mut dyn UserInterface) -> Result<Option<String>> {
        if let Some(found) = self.locate()? {
            return Ok(Some(found));
        }
        self.resolver
            .warn_if_missing(self.fragment.warn_name(), &self.install_hint, ui)?;
        Ok(None)
    }

    /// Forward `args` unchanged to the located binary.
    ///
    /// Returns the child's exit code, or `None` when the tool is missing.
    pub fn invoke(&self, args: &[String], ui: &mut dyn UserInterface) -> Result<Option<i32>> {
        let Some(found) = self.ensure(ui)? else {
            return Ok(None);
        };
        let program = self
            .resolver
            .locate(&found)?
            .unwrap_or_else(|| PathBuf::from(&found));
        shell::forward(&program, args).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{MockProbe, PathProbe};
    use crate::ui::MockUI;

    fn openscad() -> Fragment {
        Fragment::new("openscad").with_candidates(&["openscad-dev", "openscad"])
    }

    #[test]
    fn locate_prefers_dev_build() {
        let probe = MockProbe::with_available(["openscad-dev", "openscad"]);
        let resolver = AvailabilityResolver::new(probe.clone());
        let wrapper = ToolWrapper::new(&resolver, openscad(), "scoop");

        assert_eq!(wrapper.locate().unwrap().as_deref(), Some("openscad-dev"));
        assert_eq!(probe.probe_count("openscad"), 0);
    }

    #[test]
    fn locate_falls_back_to_stable() {
        let resolver = AvailabilityResolver::new(MockProbe::with_available(["openscad"]));
        let wrapper = ToolWrapper::new(&resolver, openscad(), "scoop");

        assert_eq!(wrapper.locate().unwrap().as_deref(), Some("openscad"));
    }

    #[test]
    fn all_candidates_missing_warns_once_about_stable_name() {
        let resolver = AvailabilityResolver::new(MockProbe::new());
        let wrapper = ToolWrapper::new(&resolver, openscad(), "scoop");
        let mut ui = MockUI::new();

        assert_eq!(wrapper.ensure(&mut ui).unwrap(), None);
        assert_eq!(wrapper.ensure(&mut ui).unwrap(), None);

        assert_eq!(ui.warnings().len(), 1);
        assert!(ui.has_warning("openscad not found"));
        assert!(ui.has_warning("scoop install openscad"));
        assert!(!ui.has_warning("openscad-dev"));
        assert!(!resolver.has_warned("openscad-dev").unwrap());
    }

    #[test]
    fn repeated_calls_reuse_cache() {
        let probe = MockProbe::new();
        let resolver = AvailabilityResolver::new(probe.clone());
        let wrapper = ToolWrapper::new(&resolver, openscad(), "scoop");
        let mut ui = MockUI::new();

        for _ in 0..3 {
            wrapper.ensure(&mut ui).unwrap();
        }
        assert_eq!(probe.probe_count("openscad-dev"), 1);
        assert_eq!(probe.probe_count("openscad"), 1);
    }

    #[test]
    fn install_hint_uses_package_manager() {
        let resolver = AvailabilityResolver::new(MockProbe::new());
        let fragment = Fragment::new("rg").with_package("ripgrep");
        let wrapper = ToolWrapper::new(&resolver, fragment, "brew");
        assert_eq!(wrapper.install_hint(), "brew install ripgrep");
        assert_eq!(wrapper.fragment().name, "rg");
    }

    #[test]
    fn invoke_missing_tool_returns_none() {
        let resolver = AvailabilityResolver::new(MockProbe::new());
        let wrapper = ToolWrapper::new(&resolver, Fragment::new("kubectl"), "scoop");
        let mut ui = MockUI::new();

        let code = wrapper
            .invoke(&["get".to_string(), "pods".to_string()], &mut ui)
            .unwrap();
        assert_eq!(code, None);
        assert!(ui.has_warning("scoop install kubectl"));
    }

    #[cfg(unix)]
    #[test]
    fn invoke_forwards_to_located_binary() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let bin = temp.path().join("fake-tool");
        fs::write(&bin, "#!/bin/sh\nexit \"$1\"\n").unwrap();
        fs::set_permissions(&bin, fs::Permissions::from_mode(0o755)).unwrap();

        let resolver =
            AvailabilityResolver::new(PathProbe::with_paths(vec![temp.path().to_path_buf()]));
        let wrapper = ToolWrapper::new(&resolver, Fragment::new("fake-tool"), "apt");
        let mut ui = MockUI::new();

        let args = ["4".to_string()];
        assert_eq!(wrapper.invoke(&args, &mut ui).unwrap(), Some(4));
        let (name, path) = wrapper.locate_path().unwrap().unwrap();
        assert_eq!(name, "fake-tool");
        assert_eq!(path, Some(bin));
    }
}
