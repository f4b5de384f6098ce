//! End-to-end generation against throwaway Unity projects.

use std::{
    fs,
    time::{Duration, UNIX_EPOCH},
};

use constgen_codegen::{
    Action, GenerateError, Inspection, Orchestrator, StaticNames, Trigger, testing::UnityProject,
};
use constgen_codegen_csharp::{Generator, reader};
use constgen_core::{BUILTIN_TAGS, LAYER_COUNT, Layers, TargetKind, Value};
use constgen_manifest::Manifest;

const TAG_FILE: &str = "Assets/Scripts/Generated/Tag.cs";
const LAYER_FILE: &str = "Assets/Scripts/Generated/Layer.cs";

fn tag_names(snapshot_source: &str) -> Vec<String> {
    reader::read_tags(snapshot_source, "Tag")
        .expect("tags class not found")
        .names()
        .map(String::from)
        .collect()
}

#[test]
fn test_first_generation_writes_tags_in_order() {
    let project = UnityProject::new();
    let manifest = Manifest::default();
    let names = StaticNames::new().tags(["Untagged", "Player"]);
    let orchestrator = Orchestrator::new(&manifest, project.root(), names, Generator);

    let evaluation = orchestrator.evaluate(TargetKind::Tags).unwrap();
    assert_eq!(evaluation.existing, Inspection::NotFound);
    assert!(evaluation.needs_regeneration);

    let outcome = orchestrator
        .generate_file(TargetKind::Tags, Trigger::Automatic)
        .unwrap();
    assert_eq!(outcome.action, Action::Written { changed: true });
    assert_eq!(outcome.path, project.path(TAG_FILE));
    assert_eq!(tag_names(&project.read(TAG_FILE)), ["Untagged", "Player"]);
}

#[test]
fn test_unchanged_set_in_other_order() {
    let project = UnityProject::new();
    let manifest = Manifest::default();
    let first = Orchestrator::new(
        &manifest,
        project.root(),
        StaticNames::new().tags(["Untagged", "Player"]),
        Generator,
    );
    first
        .generate_file(TargetKind::Tags, Trigger::Manual)
        .unwrap();
    let written = project.read(TAG_FILE);

    let reordered = Orchestrator::new(
        &manifest,
        project.root(),
        StaticNames::new().tags(["Player", "Untagged"]),
        Generator,
    );
    assert!(!reordered.evaluate(TargetKind::Tags).unwrap().needs_regeneration);

    // Backdate the file so any rewrite shows up in its mtime.
    let backdated = UNIX_EPOCH + Duration::from_secs(1_000_000_000);
    fs::File::options()
        .write(true)
        .open(project.path(TAG_FILE))
        .unwrap()
        .set_modified(backdated)
        .unwrap();

    let automatic = reordered
        .generate_file(TargetKind::Tags, Trigger::Automatic)
        .unwrap();
    assert_eq!(automatic.action, Action::Unchanged);
    assert_eq!(project.read(TAG_FILE), written);
    let modified = fs::metadata(project.path(TAG_FILE)).unwrap().modified().unwrap();
    assert_eq!(modified, backdated);

    let manual = first
        .generate_file(TargetKind::Tags, Trigger::Manual)
        .unwrap();
    assert_eq!(manual.action, Action::Written { changed: false });
    assert_eq!(project.read(TAG_FILE), written);
}

#[test]
fn test_single_layer_and_mask() {
    let project = UnityProject::new();
    let manifest = Manifest::default();
    let names = StaticNames::new().layers(Layers::empty().with(6, "Collectable"));
    let orchestrator = Orchestrator::new(&manifest, project.root(), names, Generator);

    orchestrator
        .generate_file(TargetKind::Layers, Trigger::Automatic)
        .unwrap();
    let source = project.read(LAYER_FILE);

    let layers = reader::read_layers(&source, "Layer").unwrap();
    assert_eq!(layers.len(), 1);
    assert_eq!(layers.get("Collectable"), Some(&Value::Int(6)));

    let masks = reader::read_layer_masks(&source, "Layer").unwrap();
    assert_eq!(masks.len(), 1);
    assert_eq!(masks.get("Collectable"), Some(&Value::Int(64)));
}

#[test]
fn test_type_in_two_assemblies_is_ambiguous() {
    let project = UnityProject::new();
    let existing = Generator::new()
        .emit_layer_file(None, "Layer", &Layers::empty().with(0, "Default"))
        .unwrap();
    project
        .asmdef("Assets/Core", "Game.Core")
        .asmdef("Assets/Ui", "Game.Ui")
        .write("Assets/Core/Layer.cs", &existing)
        .write("Assets/Ui/Layer.cs", &existing);

    let manifest = Manifest::default();
    let names = StaticNames::new().layers(Layers::empty().with(0, "Default").with(4, "Water"));
    let orchestrator = Orchestrator::new(&manifest, project.root(), names, Generator);

    for trigger in [Trigger::Manual, Trigger::Automatic] {
        let err = orchestrator
            .generate_file(TargetKind::Layers, trigger)
            .unwrap_err();
        match err {
            GenerateError::AmbiguousType {
                type_name,
                assemblies,
            } => {
                assert_eq!(type_name, "Layer");
                assert_eq!(assemblies, ["Game.Core", "Game.Ui"]);
            }
            other => panic!("expected AmbiguousType, got {other:?}"),
        }
    }
    assert!(!project.exists(LAYER_FILE));
}

#[test]
fn test_assembly_qualifier_resolves_ambiguity() {
    let project = UnityProject::new();
    let existing = Generator::new()
        .emit_layer_file(None, "Layer", &Layers::empty().with(0, "Default"))
        .unwrap();
    project
        .asmdef("Assets/Core", "Game.Core")
        .asmdef("Assets/Ui", "Game.Ui")
        .write("Assets/Core/Layer.cs", &existing)
        .write("Assets/Ui/Layer.cs", &existing);

    let mut manifest = Manifest::default();
    manifest.layers.file_path = "Assets/Core/Layer.cs".to_string();
    manifest.layers.assembly = Some("Game.Core".to_string());
    let names = StaticNames::new().layers(Layers::empty().with(0, "Default"));
    let orchestrator = Orchestrator::new(&manifest, project.root(), names, Generator);

    let evaluation = orchestrator.evaluate(TargetKind::Layers).unwrap();
    let found = evaluation.existing.found().unwrap();
    assert_eq!(found.assembly, "Game.Core");
    assert_eq!(found.path, project.path("Assets/Core/Layer.cs"));
    assert!(!evaluation.needs_regeneration);
}

#[test]
fn test_second_automatic_run_is_a_no_op() {
    let project = UnityProject::new();
    project.tag_manager(&["Enemy"], &["Default", "TransparentFX", "Ignore Raycast", "", "Water", "UI"]);
    let manifest = Manifest::default();
    let orchestrator = Orchestrator::for_project(&manifest, project.root(), Generator);

    let first = orchestrator.on_project_changed();
    assert_eq!(first.len(), 2);
    assert!(first.iter().all(|(_, result)| result.as_ref().unwrap().written()));
    let tags = project.read(TAG_FILE);
    let layers = project.read(LAYER_FILE);

    let second = orchestrator.on_project_changed();
    assert!(
        second
            .iter()
            .all(|(_, result)| result.as_ref().unwrap().action == Action::Unchanged)
    );
    assert_eq!(project.read(TAG_FILE), tags);
    assert_eq!(project.read(LAYER_FILE), layers);

    let mut expected: Vec<String> = BUILTIN_TAGS.iter().map(|t| t.to_string()).collect();
    expected.push("Enemy".to_string());
    assert_eq!(tag_names(&tags), expected);

    let layer_members = reader::read_layers(&layers, "Layer").unwrap();
    assert_eq!(layer_members.get("IgnoreRaycast"), Some(&Value::Int(2)));
    assert!(layer_members.get("TransparentFX").is_some());
    assert_eq!(layer_members.len(), 5);
}

#[test]
fn test_tag_manager_change_triggers_regeneration() {
    let project = UnityProject::new();
    project.tag_manager(&["Enemy"], &["Default"]);
    let manifest = Manifest::default();
    let orchestrator = Orchestrator::for_project(&manifest, project.root(), Generator);
    orchestrator.on_project_changed();

    project.tag_manager(&["Enemy", "Pickup"], &["Default"]);
    let results = orchestrator.on_project_changed();

    let (_, tags) = &results[0];
    assert_eq!(tags.as_ref().unwrap().action, Action::Written { changed: true });
    let (_, layers) = &results[1];
    assert_eq!(layers.as_ref().unwrap().action, Action::Unchanged);
    assert!(tag_names(&project.read(TAG_FILE)).contains(&"Pickup".to_string()));
}

#[test]
fn test_missing_tag_manager_is_host_unavailable() {
    let project = UnityProject::new();
    let manifest = Manifest::default();
    let orchestrator = Orchestrator::for_project(&manifest, project.root(), Generator);

    let err = orchestrator
        .generate_file(TargetKind::Tags, Trigger::Manual)
        .unwrap_err();
    assert!(matches!(err, GenerateError::HostUnavailable(_)));
    assert!(!project.exists(TAG_FILE));
}

#[test]
fn test_unconfigured_target_writes_nothing() {
    let project = UnityProject::new();
    let mut manifest = Manifest::default();
    manifest.layers.type_name = String::new();
    let names = StaticNames::new().layers(Layers::empty().with(0, "Default"));
    let orchestrator = Orchestrator::new(&manifest, project.root(), names, Generator);

    assert!(!orchestrator.can_generate(TargetKind::Layers));
    assert!(orchestrator.can_generate(TargetKind::Tags));
    let err = orchestrator
        .generate_file(TargetKind::Layers, Trigger::Manual)
        .unwrap_err();
    assert!(matches!(err, GenerateError::NotConfigured { .. }));
    assert!(!project.exists(LAYER_FILE));
}

#[test]
fn test_unwritable_path_is_write_error() {
    let project = UnityProject::new();
    // A file where the output folder should be.
    project.write("Assets/Scripts/Generated", "not a folder");
    let manifest = Manifest::default();
    let names = StaticNames::new().tags(["Untagged"]);
    let orchestrator = Orchestrator::new(&manifest, project.root(), names, Generator);

    let err = orchestrator
        .generate_file(TargetKind::Tags, Trigger::Manual)
        .unwrap_err();
    match err {
        GenerateError::Write { path, .. } => assert_eq!(path, project.path(TAG_FILE)),
        other => panic!("expected Write, got {other:?}"),
    }
}

#[test]
fn test_colliding_names_are_invalid() {
    let project = UnityProject::new();
    let manifest = Manifest::default();
    let names = StaticNames::new().tags(["Main Camera", "MainCamera"]);
    let orchestrator = Orchestrator::new(&manifest, project.root(), names, Generator);

    let err = orchestrator
        .generate_file(TargetKind::Tags, Trigger::Manual)
        .unwrap_err();
    assert!(matches!(
        err,
        GenerateError::InvalidName {
            target: TargetKind::Tags,
            ..
        }
    ));
    assert!(!project.exists(TAG_FILE));
}

#[test]
fn test_output_is_deterministic() {
    let layers = (0..LAYER_COUNT as u8).fold(Layers::empty(), |layers, index| {
        layers.with(index, format!("Layer{}", index))
    });
    let first = Generator::new()
        .emit_layer_file(Some("Game"), "Layer", &layers)
        .unwrap();
    let second = Generator::new()
        .emit_layer_file(Some("Game"), "Layer", &layers)
        .unwrap();
    assert_eq!(first, second);

    let masks = reader::read_layer_masks(&first, "Layer").unwrap();
    assert_eq!(masks.len(), LAYER_COUNT);
    for entry in layers.slots() {
        assert_eq!(
            masks.get(&format!("Layer{}", entry.index)),
            Some(&Value::Int(i64::from(entry.mask())))
        );
    }
}

#[test]
fn test_hand_written_type_is_not_found() {
    let project = UnityProject::new();
    project.write(
        "Assets/Scripts/Tag.cs",
        "public static class Tag\n{\n    public static readonly string Player = \"Player\";\n}\n",
    );
    let manifest = Manifest::default();
    let orchestrator = Orchestrator::new(&manifest, project.root(), StaticNames::new(), Generator);

    assert_eq!(
        orchestrator.inspect(TargetKind::Tags).unwrap(),
        Inspection::NotFound
    );
}
