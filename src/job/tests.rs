//! Tests for the job builder and manifest rendering.

use super::*;
use crate::naming::{editor_ref, package_pack_ref};

fn populated_builder() -> JobBuilder {
    let mut job = JobBuilder::new();
    job.set_name("Test Core Windows 2022.3")
        .set_agent(Agent::Label("agent-win".to_string()))
        .add_dependencies([editor_ref("2022.3", "win").unwrap()])
        .add_commands(["first", "second"])
        .add_artifacts_test_results();
    job
}

#[test]
fn unset_builder_finalizes_to_defaults() {
    let manifest = JobBuilder::new().build();
    assert_eq!(manifest.name, "");
    assert_eq!(manifest.agent, Agent::Label(String::new()));
    assert!(manifest.dependencies.is_empty());
    assert!(manifest.commands.is_empty());
    assert!(manifest.artifacts.is_empty());
    assert!(!manifest.skip_checkout);
}

#[test]
fn setters_last_write_wins() {
    let mut job = JobBuilder::new();
    job.set_name("first").set_name("second");
    job.set_agent(Agent::Label("a".to_string()))
        .set_agent(Agent::Label("b".to_string()));
    let manifest = job.build();
    assert_eq!(manifest.name, "second");
    assert_eq!(manifest.agent, Agent::Label("b".to_string()));
}

#[test]
fn add_commands_preserves_order_across_calls() {
    let mut job = JobBuilder::new();
    job.add_commands(["c", "a"])
        .add_commands(vec!["b".to_string()]);
    assert_eq!(job.build().commands, vec!["c", "a", "b"]);
}

#[test]
fn add_dependencies_with_empty_list_is_noop() {
    let mut job = populated_builder();
    let before = job.clone().build().dependencies;
    job.add_dependencies(Vec::new());
    assert_eq!(job.build().dependencies, before);
}

#[test]
fn add_dependencies_keeps_duplicates() {
    let reference = package_pack_ref("D1").unwrap();
    let mut job = JobBuilder::new();
    job.add_dependencies([reference.clone(), reference.clone()]);
    let twice = vec![reference.clone(), reference];
    assert_eq!(job.build().dependencies, twice);
}

#[test]
fn repeated_artifact_declaration_keeps_both() {
    let mut job = JobBuilder::new();
    job.add_artifacts_test_results()
        .add_artifacts_test_results();
    let manifest = job.build();
    assert_eq!(manifest.artifacts.len(), 2);
    assert!(
        manifest
            .artifacts
            .iter()
            .all(|a| *a == ArtifactDeclaration::test_results())
    );
}

#[test]
fn repeated_artifact_declaration_renders_under_one_key() {
    let mut job = JobBuilder::new();
    job.add_artifacts_test_results()
        .add_artifacts_packages()
        .add_artifacts_test_results();
    let yaml = serde_yaml::to_string(&job.build()).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

    let names: Vec<&str> = value["artifacts"]
        .as_mapping()
        .unwrap()
        .keys()
        .map(|k| k.as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["logs", "packages"]);

    let logs = value["artifacts"]["logs"]["paths"].as_sequence().unwrap();
    assert_eq!(logs.len(), 2);
    assert!(logs.iter().all(|path| path == TEST_RESULTS_PATH));
    assert_eq!(value["artifacts"]["packages"]["paths"][0], PACKAGES_PATH);
}

#[test]
fn finalizing_clones_yields_equal_manifests() {
    let job = populated_builder();
    assert_eq!(job.clone().build(), job.build());
}

#[test]
fn manifest_renders_yamato_fields() {
    let manifest = populated_builder().build();
    let yaml = serde_yaml::to_string(&manifest).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(value["name"], "Test Core Windows 2022.3");
    assert_eq!(value["agent"], "agent-win");
    assert_eq!(
        value["dependencies"][0],
        ".yamato/_editor.yml#editor:priming:2022.3:win"
    );
    assert_eq!(value["commands"][1], "second");
    assert_eq!(value["artifacts"]["logs"]["paths"][0], TEST_RESULTS_PATH);
    assert!(value.get("skip_checkout").is_none());
}

#[test]
fn empty_sections_are_omitted() {
    let mut job = JobBuilder::new();
    job.set_name("Aggregate");
    let yaml = serde_yaml::to_string(&job.build()).unwrap();
    assert!(!yaml.contains("dependencies"));
    assert!(!yaml.contains("commands"));
    assert!(!yaml.contains("artifacts"));
}

#[test]
fn structured_agent_renders_type_key() {
    let mut job = JobBuilder::new();
    job.set_agent(Agent::vm("package-ci/ubuntu:stable", "b1.large"))
        .set_skip_checkout(true);
    let yaml = serde_yaml::to_string(&job.build()).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(value["agent"]["type"], "Unity::VM");
    assert_eq!(value["agent"]["image"], "package-ci/ubuntu:stable");
    assert_eq!(value["agent"]["flavor"], "b1.large");
    assert_eq!(value["skip_checkout"], true);
}

#[test]
fn agent_deserializes_from_label_or_mapping() {
    let label: Agent = serde_yaml::from_str("agent-win").unwrap();
    assert_eq!(label, Agent::Label("agent-win".to_string()));

    let spec: Agent =
        serde_yaml::from_str("type: Unity::VM::osx\nimage: buildfarm/mac:stable\n").unwrap();
    assert_eq!(
        spec,
        Agent::Spec {
            kind: "Unity::VM::osx".to_string(),
            image: "buildfarm/mac:stable".to_string(),
            flavor: None,
        }
    );
}
