//! Fragment registry and definitions.
//!
//! A fragment describes one wrapped tool: the executable names to try, in
//! order, and how to tell the user to install it. The registry holds the
//! built-in fragments and any custom ones from config.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::{ToolConfig, ToolprobeConfig};
use crate::error::{Result, ToolprobeError};
use crate::resolver::CommandName;

/// One wrapped tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    /// Tool name used on the command line (e.g., "kubectl", "openscad").
    pub name: String,
    /// Executable names to probe, most preferred first.
    pub candidates: Vec<String>,
    /// Package name passed to the package manager.
    pub package: String,
    /// Verbatim install hint overriding the package manager form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_hint: Option<String>,
    /// Short human-readable description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Fragment {
    /// A fragment probing just `name`, installed as package `name`.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            candidates: vec![name.to_string()],
            package: name.to_string(),
            install_hint: None,
            description: String::new(),
        }
    }

    /// Replace the candidate list.
    pub fn with_candidates(mut self, candidates: &[&str]) -> Self {
        self.candidates = candidates.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Set the package name.
    pub fn with_package(mut self, package: &str) -> Self {
        self.package = package.to_string();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Install hint for this fragment: the verbatim override if set,
    /// otherwise `<package_manager> install <package>`.
    pub fn install_hint(&self, package_manager: &str) -> String {
        match &self.install_hint {
            Some(hint) => hint.clone(),
            None => format!("{} install {}", package_manager, self.package),
        }
    }

    /// The candidate named in missing-tool warnings: the last, stable name.
    pub fn warn_name(&self) -> &str {
        self.candidates
            .last()
            .map(String::as_str)
            .unwrap_or(&self.name)
    }

    /// Layer config values on top of this fragment.
    fn apply(&mut self, config: &ToolConfig) {
        if let Some(candidates) = &config.candidates {
            self.candidates = candidates.clone();
        }
        if let Some(package) = &config.package {
            self.package = package.clone();
        }
        if let Some(hint) = &config.install_hint {
            self.install_hint = Some(hint.clone());
        }
        if let Some(description) = &config.description {
            self.description = description.clone();
        }
    }
}

/// Definition of a built-in fragment.
struct BuiltinDef {
    name: &'static str,
    candidates: &'static [&'static str],
    package: &'static str,
    description: &'static str,
}

/// Built-in fragments.
///
/// An empty candidate list means "just the name"; an empty package means
/// "same as the name".
const BUILTIN_DEFS: &[BuiltinDef] = &[
    BuiltinDef {
        name: "git",
        candidates: &[],
        package: "",
        description: "Version control",
    },
    BuiltinDef {
        name: "gh",
        candidates: &[],
        package: "",
        description: "GitHub CLI",
    },
    BuiltinDef {
        name: "docker",
        candidates: &[],
        package: "",
        description: "Container runtime",
    },
    BuiltinDef {
        name: "kubectl",
        candidates: &[],
        package: "",
        description: "Kubernetes CLI",
    },
    BuiltinDef {
        name: "helm",
        candidates: &[],
        package: "",
        description: "Kubernetes package manager",
    },
    BuiltinDef {
        name: "terraform",
        candidates: &[],
        package: "",
        description: "Infrastructure as code",
    },
    BuiltinDef {
        name: "poetry",
        candidates: &[],
        package: "",
        description: "Python packaging",
    },
    BuiltinDef {
        name: "conda",
        candidates: &[],
        package: "miniconda3",
        description: "Conda environments",
    },
    BuiltinDef {
        name: "python",
        candidates: &["python3", "python"],
        package: "python",
        description: "Python interpreter",
    },
    BuiltinDef {
        name: "node",
        candidates: &[],
        package: "nodejs",
        description: "Node.js runtime",
    },
    BuiltinDef {
        name: "go",
        candidates: &[],
        package: "",
        description: "Go toolchain",
    },
    BuiltinDef {
        name: "rg",
        candidates: &[],
        package: "ripgrep",
        description: "Recursive grep",
    },
    BuiltinDef {
        name: "jq",
        candidates: &[],
        package: "",
        description: "JSON processor",
    },
    BuiltinDef {
        name: "bd",
        candidates: &[],
        package: "",
        description: "Issue tracker",
    },
    BuiltinDef {
        name: "openscad",
        candidates: &["openscad-dev", "openscad"],
        package: "",
        description: "Solid CAD modeller",
    },
    BuiltinDef {
        name: "dolphin",
        candidates: &["dolphin-dev", "dolphin-nightly", "dolphin"],
        package: "dolphin-emu",
        description: "GameCube/Wii emulator",
    },
];

impl BuiltinDef {
    fn to_fragment(&self) -> Fragment {
        let mut fragment = Fragment::new(self.name).with_description(self.description);
        if !self.candidates.is_empty() {
            fragment = fragment.with_candidates(self.candidates);
        }
        if !self.package.is_empty() {
            fragment = fragment.with_package(self.package);
        }
        fragment
    }
}

/// Registry of all known fragments.
#[derive(Debug, Clone)]
pub struct FragmentRegistry {
    fragments: BTreeMap<String, Fragment>,
}

impl Default for FragmentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentRegistry {
    /// Create a registry with the built-in fragments.
    pub fn new() -> Self {
        let fragments = BUILTIN_DEFS
            .iter()
            .map(|def| (def.name.to_string(), def.to_fragment()))
            .collect();
        Self { fragments }
    }

    /// Create a registry with built-ins plus the tools from `config`.
    ///
    /// A config entry for a built-in name overrides only the fields it sets.
    pub fn from_config(config: &ToolprobeConfig) -> Self {
        let mut registry = Self::new();
        for (name, tool) in &config.tools {
            registry
                .fragments
                .entry(name.clone())
                .or_insert_with(|| Fragment::new(name))
                .apply(tool);
        }
        registry
    }

    /// Look up a registered fragment.
    pub fn get(&self, name: &str) -> Option<&Fragment> {
        self.fragments.get(name)
    }

    /// Look up a fragment, or treat `name` as an unregistered single-binary
    /// tool.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCommandName` when `name` is not a plain command name.
    pub fn resolve(&self, name: &str) -> Result<Fragment> {
        if let Some(fragment) = self.get(name) {
            return Ok(fragment.clone());
        }
        CommandName::parse(name)?;
        Ok(Fragment::new(name))
    }

    /// Look up a registered fragment, failing for unknown names.
    pub fn require(&self, name: &str) -> Result<&Fragment> {
        self.get(name).ok_or_else(|| ToolprobeError::UnknownTool {
            name: name.to_string(),
        })
    }

    /// All fragments, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.values()
    }

    /// Number of registered fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_registered() {
        let registry = FragmentRegistry::new();
        for name in [
            "git",
            "docker",
            "kubectl",
            "terraform",
            "poetry",
            "conda",
            "go",
        ] {
            assert!(registry.get(name).is_some(), "missing builtin {}", name);
        }
        assert_eq!(registry.len(), BUILTIN_DEFS.len());
        assert!(!registry.is_empty());
    }

    #[test]
    fn builtin_candidates_are_valid_names() {
        for fragment in FragmentRegistry::new().iter() {
            assert!(!fragment.candidates.is_empty());
            for candidate in &fragment.candidates {
                assert!(CommandName::parse(candidate).is_ok(), "{}", candidate);
            }
        }
    }

    #[test]
    fn dev_builds_are_tried_first() {
        let registry = FragmentRegistry::new();
        assert_eq!(
            registry.get("openscad").unwrap().candidates,
            vec!["openscad-dev", "openscad"]
        );
        assert_eq!(
            registry.get("dolphin").unwrap().candidates,
            vec!["dolphin-dev", "dolphin-nightly", "dolphin"]
        );
    }

    #[test]
    fn install_hint_uses_package_manager_and_package() {
        let registry = FragmentRegistry::new();
        assert_eq!(
            registry.get("kubectl").unwrap().install_hint("scoop"),
            "scoop install kubectl"
        );
        assert_eq!(
            registry.get("rg").unwrap().install_hint("brew"),
            "brew install ripgrep"
        );
    }

    #[test]
    fn verbatim_hint_overrides_package_manager() {
        let mut fragment = Fragment::new("bd");
        fragment.install_hint = Some("go install example.com/bd@latest".to_string());
        assert_eq!(
            fragment.install_hint("scoop"),
            "go install example.com/bd@latest"
        );
    }

    #[test]
    fn warn_name_is_last_candidate() {
        let registry = FragmentRegistry::new();
        assert_eq!(registry.get("openscad").unwrap().warn_name(), "openscad");
        assert_eq!(registry.get("python").unwrap().warn_name(), "python");
        assert_eq!(Fragment::new("jq").warn_name(), "jq");
    }

    #[test]
    fn config_adds_custom_tools() {
        let mut config = ToolprobeConfig::default();
        config.tools.insert(
            "blender".to_string(),
            ToolConfig {
                candidates: Some(vec!["blender-nightly".to_string(), "blender".to_string()]),
                ..Default::default()
            },
        );

        let registry = FragmentRegistry::from_config(&config);
        let blender = registry.get("blender").unwrap();
        assert_eq!(blender.candidates, vec!["blender-nightly", "blender"]);
        assert_eq!(blender.package, "blender");
    }

    #[test]
    fn config_overrides_only_set_fields() {
        let mut config = ToolprobeConfig::default();
        config.tools.insert(
            "dolphin".to_string(),
            ToolConfig {
                package: Some("dolphin".to_string()),
                ..Default::default()
            },
        );

        let registry = FragmentRegistry::from_config(&config);
        let dolphin = registry.get("dolphin").unwrap();
        assert_eq!(dolphin.package, "dolphin");
        assert_eq!(dolphin.candidates.len(), 3);
        assert_eq!(dolphin.description, "GameCube/Wii emulator");
    }

    #[test]
    fn resolve_falls_back_to_single_binary() {
        let registry = FragmentRegistry::new();
        let fragment = registry.resolve("zoxide").unwrap();
        assert_eq!(fragment.candidates, vec!["zoxide"]);
        assert_eq!(fragment.package, "zoxide");
    }

    #[test]
    fn resolve_rejects_invalid_names() {
        let registry = FragmentRegistry::new();
        assert!(registry.resolve("").unwrap_err().is_invalid_name());
    }

    #[test]
    fn require_fails_for_unknown() {
        let registry = FragmentRegistry::new();
        assert!(matches!(
            registry.require("zoxide"),
            Err(ToolprobeError::UnknownTool { .. })
        ));
        assert!(registry.require("git").is_ok());
    }
}
