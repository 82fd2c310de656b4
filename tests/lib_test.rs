//! Library integration tests.

use toolprobe::ToolprobeError;

#[test]
fn error_types_are_public() {
    let err = ToolprobeError::UnknownTool {
        name: "frobnicate".into(),
    };
    assert!(err.to_string().contains("frobnicate"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> toolprobe::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use toolprobe::cli::{Cli, Commands};

    let cli = Cli::parse_from(["toolprobe", "check", "git", "--json"]);
    if let Commands::Check(args) = cli.command {
        assert!(args.json);
        assert_eq!(args.tools, vec!["git"]);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn config_parses_from_yaml() {
    use std::path::Path;
    use toolprobe::config::{parse_config, validate, OutputMode};

    let yaml = r#"
package_manager: scoop
settings:
  default_output: quiet
extra_paths:
  - /opt/tools/bin
tools:
  bd:
    install_hint: go install example.com/bd@latest
  openscad:
    candidates: [openscad-nightly, openscad]
"#;
    let config = parse_config(yaml, Path::new("config.yml")).unwrap();
    validate(&config).unwrap();
    assert_eq!(config.package_manager, "scoop");
    assert_eq!(config.settings.default_output, OutputMode::Quiet);
    assert_eq!(config.extra_paths.len(), 1);
    assert_eq!(config.tools.len(), 2);
}

#[test]
fn registry_merges_config_over_builtins() {
    use toolprobe::config::{ToolConfig, ToolprobeConfig};
    use toolprobe::fragments::FragmentRegistry;

    let mut config = ToolprobeConfig::default();
    config.tools.insert(
        "openscad".to_string(),
        ToolConfig {
            candidates: Some(vec!["openscad-nightly".into(), "openscad".into()]),
            ..Default::default()
        },
    );
    let registry = FragmentRegistry::from_config(&config);
    let openscad = registry.require("openscad").unwrap();
    assert_eq!(openscad.candidates, vec!["openscad-nightly", "openscad"]);
    assert_eq!(openscad.warn_name(), "openscad");
    assert!(registry.get("kubectl").is_some());
}

#[test]
fn session_wrappers_share_warnings() {
    use toolprobe::config::ToolprobeConfig;
    use toolprobe::resolver::MockProbe;
    use toolprobe::session::Session;
    use toolprobe::ui::MockUI;

    let config = ToolprobeConfig {
        package_manager: "scoop".to_string(),
        ..Default::default()
    };
    let session = Session::with_probe(config, MockProbe::new()).unwrap();
    let mut ui = MockUI::new();

    for _ in 0..3 {
        assert_eq!(session.wrapper("helm").unwrap().ensure(&mut ui).unwrap(), None);
    }
    assert_eq!(ui.warnings(), ["helm not found. Install with: scoop install helm"]);
}

#[test]
fn shell_session_is_scriptable() {
    use std::io::Cursor;
    use toolprobe::cli::ShellSession;
    use toolprobe::config::ToolprobeConfig;
    use toolprobe::resolver::MockProbe;
    use toolprobe::session::Session;
    use toolprobe::ui::MockUI;

    let session = Session::with_probe(ToolprobeConfig::default(), MockProbe::new()).unwrap();
    let mut ui = MockUI::new();
    let code = ShellSession::new(&session)
        .run(Cursor::new("check jq\ncheck jq\n"), None, &mut ui)
        .unwrap();
    assert_eq!(code, 1);
    assert_eq!(ui.warnings().len(), 1);
}
