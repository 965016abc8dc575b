//! End-to-end generation runs against a temporary directory

use std::fs;
use std::sync::Arc;

use configgen_clock::FixedClock;
use configgen_core::{AgentKind, GeneratorInput, ModeFlags, PartialAgentCounts, SectionKind};
use configgen_ports::ConfigGenError;
use configgen_runner::{Outcome, OutputRequest, Pipeline};

fn pipeline() -> Pipeline {
    let _ = env_logger::try_init();
    let clock = FixedClock::from_rfc3339("2025-01-15T10:00:00Z").unwrap();
    Pipeline::new(Arc::new(clock))
}

fn generated(outcome: Outcome) -> (std::path::PathBuf, Vec<SectionKind>, i64) {
    match outcome {
        Outcome::Generated {
            path,
            sections,
            total_agents,
            ..
        } => (path, sections, total_agents),
        other => panic!("expected a generated artifact, got {:?}", other),
    }
}

#[test]
fn test_minimal_template_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let output = OutputRequest::new(dir.path(), Some("minimal_run".into()));

    let outcome = pipeline()
        .run(&GeneratorInput::from_template("minimal"), &output)
        .unwrap();
    let (path, sections, total_agents) = generated(outcome);

    assert_eq!(path, dir.path().join("minimal_run.py"));
    assert_eq!(sections, SectionKind::ALL[..5].to_vec());
    assert_eq!(total_agents, 16);

    let script = fs::read_to_string(&path).unwrap();
    assert!(script.contains("symbol = 'TEST'"));
    assert!(script.contains("starting_cash = 1000000"));
    assert!(script.contains("        id=0,\n        name='EXCHANGE_AGENT',"));
    assert!(script.contains("# Market Maker agents (1)\n"));
    assert!(script.contains("    for j in range(1, 2)"));
    assert!(script.contains("# Zero Intelligence agents (10)\n"));
    assert!(script.contains("    for j in range(2, 12)"));
    assert!(script.contains("# Noise agents (5)\n"));
    assert!(script.contains("    for j in range(12, 17)"));
    assert!(!script.contains("    ValueAgent("));
    assert!(!script.contains("    MomentumAgent("));
    assert!(script.contains("agent_count = 17\n"));
}

#[test]
fn test_scaled_rmsc03() {
    let dir = tempfile::tempdir().unwrap();
    let input = GeneratorInput {
        agents_scale: Some(0.1),
        ..GeneratorInput::from_template("rmsc03")
    };
    let output = OutputRequest::new(dir.path(), Some("scaled".into()));

    let (path, _, total_agents) = generated(pipeline().run(&input, &output).unwrap());

    assert_eq!(total_agents, 500 + 10 + 2);
    let script = fs::read_to_string(path).unwrap();
    assert!(script.contains("# Noise agents (500)\n"));
    assert!(script.contains("# Momentum agents (2)\n"));
}

#[test]
fn test_rerun_keeps_one_copy_of_each_section() {
    let dir = tempfile::tempdir().unwrap();
    let output = OutputRequest::new(dir.path(), Some("twice".into()));
    let pipeline = pipeline();
    let input = GeneratorInput::from_template("hft");

    pipeline.run(&input, &output).unwrap();
    let first = fs::read_to_string(dir.path().join("twice.py")).unwrap();
    pipeline.run(&input, &output).unwrap();
    let second = fs::read_to_string(dir.path().join("twice.py")).unwrap();

    assert_eq!(first, second);
    for kind in &SectionKind::ALL[..5] {
        let banner = format!("###### {} ######", kind.heading());
        assert_eq!(second.matches(&banner).count(), 1, "{banner}");
    }
}

#[test]
fn test_rl_compat_appends_background_config() {
    let dir = tempfile::tempdir().unwrap();
    let input = GeneratorInput {
        modes: ModeFlags {
            rl_compat: true,
            ..Default::default()
        },
        ..GeneratorInput::from_template("rmsc04")
    };
    let output = OutputRequest::new(dir.path(), Some("gym".into()));

    let (path, sections, _) = generated(pipeline().run(&input, &output).unwrap());

    assert_eq!(sections, SectionKind::ALL.to_vec());
    let script = fs::read_to_string(path).unwrap();
    assert!(script.trim_end().ends_with("background_config = create_background_config()"));
}

#[test]
fn test_rl_with_batch_conflicts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input = GeneratorInput {
        modes: ModeFlags {
            rl_compat: true,
            batch: true,
            ..Default::default()
        },
        ..GeneratorInput::from_template("minimal")
    };
    let output = OutputRequest::new(dir.path().join("never"), Some("conflict".into()));

    let err = pipeline().run(&input, &output).unwrap_err();

    assert!(matches!(err, ConfigGenError::ModeConflict(_)));
    assert!(!dir.path().join("never").exists());
}

#[test]
fn test_rl_with_batch_conflicts_even_for_unknown_template() {
    let dir = tempfile::tempdir().unwrap();
    let input = GeneratorInput {
        modes: ModeFlags {
            rl_compat: true,
            batch: true,
            ..Default::default()
        },
        ..GeneratorInput::from_template("nope")
    };
    let output = OutputRequest::new(dir.path(), Some("conflict".into()));

    let err = pipeline().run(&input, &output).unwrap_err();

    assert!(matches!(err, ConfigGenError::ModeConflict(_)));
    assert!(!dir.path().join("conflict.py").exists());
}

#[test]
fn test_validation_failure_leaves_existing_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keep.py");
    fs::write(&path, "# previous run\n").unwrap();

    let input = GeneratorInput {
        agents: PartialAgentCounts::EMPTY.with(AgentKind::Value, -5),
        ..GeneratorInput::from_template("minimal")
    };
    let output = OutputRequest::new(dir.path(), Some("keep".into()));

    let err = pipeline().run(&input, &output).unwrap_err();

    match err {
        ConfigGenError::Validation { field, value, .. } => {
            assert_eq!(field, "Value count");
            assert_eq!(value, "-5");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), "# previous run\n");
}

#[test]
fn test_population_past_id_range_is_rejected_by_validation() {
    let dir = tempfile::tempdir().unwrap();
    let output = OutputRequest::new(dir.path(), Some("huge".into()));

    let split = GeneratorInput {
        agents: PartialAgentCounts::EMPTY
            .with(AgentKind::Noise, 3_000_000_000)
            .with(AgentKind::Value, 2_000_000_000),
        ..GeneratorInput::from_template("minimal")
    };
    match pipeline().run(&split, &output).unwrap_err() {
        ConfigGenError::Validation { field, .. } => assert_eq!(field, "total agents"),
        other => panic!("unexpected error: {other}"),
    }

    let single = GeneratorInput {
        agents: PartialAgentCounts::EMPTY.with(AgentKind::Noise, 5_000_000_000),
        ..GeneratorInput::from_template("minimal")
    };
    match pipeline().run(&single, &output).unwrap_err() {
        ConfigGenError::Validation { field, .. } => assert_eq!(field, "Noise count"),
        other => panic!("unexpected error: {other}"),
    }

    assert!(!dir.path().join("huge.py").exists());
}

#[test]
fn test_unknown_template_lists_available() {
    let dir = tempfile::tempdir().unwrap();
    let output = OutputRequest::new(dir.path(), Some("x".into()));

    let err = pipeline()
        .run(&GeneratorInput::from_template("nope"), &output)
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("Unknown template 'nope'"));
    assert!(message.contains("rmsc03"));
}

#[test]
fn test_default_name_from_template_and_time() {
    let dir = tempfile::tempdir().unwrap();
    let output = OutputRequest::new(dir.path(), None);

    let (path, _, _) = generated(
        pipeline()
            .run(&GeneratorInput::from_template("minimal"), &output)
            .unwrap(),
    );

    assert_eq!(
        path,
        dir.path().join("abides_minimal_16agents_20250115_100000.py")
    );
}
