/// Edge case integration tests
///
/// These tests cover filesystem quirks, damaged snapshot files, and other unusual scenarios
mod common;

use std::collections::HashMap;
use std::fs;
use std::time::Duration;

use chrono::{TimeDelta, Utc};
use common::{TreeBuilder, example_tree};
use dirsearch::engine::SnapshotOrigin;
use dirsearch::index_storage::{SnapshotFile, save_snapshot};
use dirsearch::{Engine, EngineConfig, EngineError, Snapshot, StalenessPolicy};

#[test]
fn test_edge_case_corrupt_snapshot_triggers_rebuild() {
    let tree = example_tree();
    let snapshot_path = tree.config().snapshot_path();
    fs::write(&snapshot_path, "{\"version\": 1, \"root\": \"/r\", \"entr").unwrap();

    let engine = Engine::new(tree.config()).expect("Corrupt snapshot must not fail construction");
    assert_eq!(engine.origin(), SnapshotOrigin::Built);
    assert_eq!(engine.search("re").len(), 2);

    // The rebuilt snapshot replaced the corrupt file
    let reloaded = Engine::new(tree.config()).unwrap();
    assert_eq!(reloaded.origin(), SnapshotOrigin::Loaded);
}

#[test]
fn test_edge_case_wrong_shape_snapshot_triggers_rebuild() {
    let tree = example_tree();
    fs::write(tree.config().snapshot_path(), "[[[\"/r\", [], []]]]").unwrap();

    let engine = Engine::new(tree.config()).unwrap();
    assert_eq!(engine.origin(), SnapshotOrigin::Built);
}

#[test]
fn test_edge_case_empty_snapshot_file_triggers_rebuild() {
    let tree = example_tree();
    fs::write(tree.config().snapshot_path(), "").unwrap();

    let engine = Engine::new(tree.config()).unwrap();
    assert_eq!(engine.origin(), SnapshotOrigin::Built);
}

#[test]
fn test_edge_case_cached_snapshot_trusted_regardless_of_age() {
    let tree = example_tree();
    let mut old = Snapshot::new(Vec::new());
    old.built_at = Utc::now() - TimeDelta::days(365);
    save_snapshot(&tree.config().snapshot_path(), tree.root(), &old).unwrap();

    let engine = Engine::new(tree.config().retarget(tree.root(), Duration::from_secs(1))).unwrap();
    assert_eq!(engine.origin(), SnapshotOrigin::Loaded);
    assert!(engine.snapshot().is_empty());
    assert!(engine.search("re").is_empty(), "Stale cache is used verbatim");
    assert!(engine.is_stale());
}

#[test]
fn test_edge_case_rebuild_when_older_than_timeout() {
    let tree = example_tree();
    let mut old = Snapshot::new(Vec::new());
    old.built_at = Utc::now() - TimeDelta::hours(2);
    save_snapshot(&tree.config().snapshot_path(), tree.root(), &old).unwrap();

    let config = tree
        .config()
        .with_staleness_policy(StalenessPolicy::RebuildWhenOlderThanTimeout);
    let engine = Engine::new(config).unwrap();
    assert_eq!(engine.origin(), SnapshotOrigin::Built);
    assert_eq!(engine.search("re").len(), 2);
}

#[test]
fn test_edge_case_fresh_snapshot_kept_under_rebuild_policy() {
    let tree = example_tree();
    Engine::new(tree.config()).unwrap();

    let config = tree
        .config()
        .with_staleness_policy(StalenessPolicy::RebuildWhenOlderThanTimeout);
    assert_eq!(Engine::new(config).unwrap().origin(), SnapshotOrigin::Loaded);
}

#[test]
fn test_edge_case_colliding_snapshot_keys_stay_separate() {
    let parent = tempfile::TempDir::new().unwrap();
    let cache = tempfile::TempDir::new().unwrap();
    let spaced = parent.path().join("a b");
    let nested = parent.path().join("a/b");
    fs::create_dir_all(&spaced).unwrap();
    fs::create_dir_all(&nested).unwrap();
    fs::write(spaced.join("only_in_spaced.txt"), b"x").unwrap();

    let spaced_config = EngineConfig::new(&spaced, Duration::from_secs(60)).with_snapshot_dir(cache.path());
    let nested_config = EngineConfig::new(&nested, Duration::from_secs(60)).with_snapshot_dir(cache.path());
    assert_eq!(spaced_config.snapshot_path(), nested_config.snapshot_path());

    Engine::new(spaced_config).unwrap();
    let engine = Engine::new(nested_config).unwrap();

    assert_eq!(engine.origin(), SnapshotOrigin::Built);
    assert!(engine.search("only_in_spaced").is_empty());
    assert!(engine.snapshot().entries.iter().all(|e| e.path.starts_with(&nested)));
}

#[test]
fn test_edge_case_explicit_snapshot_key() {
    let tree = example_tree();
    let config = tree.config().with_snapshot_key("custom-index.json");
    Engine::new(config).unwrap();

    assert!(tree.cache().join("custom-index.json").is_file());
    let written = fs::read_to_string(tree.cache().join("custom-index.json")).unwrap();
    let file: SnapshotFile = serde_json::from_str(&written).unwrap();
    assert_eq!(file.entries.len(), 3);
}

#[test]
fn test_edge_case_root_is_file() {
    let tree = example_tree();
    let config = EngineConfig::new(tree.path("a/report.pdf"), Duration::from_secs(60))
        .with_snapshot_dir(tree.cache());
    assert!(matches!(Engine::new(config), Err(EngineError::RootNotFound(_))));
    // Nothing was written for a rejected root
    assert_eq!(fs::read_dir(tree.cache()).unwrap().count(), 0);
}

#[test]
fn test_edge_case_empty_root() {
    let tree = TreeBuilder::new().build();
    let engine = Engine::new(tree.config()).unwrap();
    assert_eq!(engine.snapshot().directory_count(), 1);
    assert!(engine.search("anything").is_empty());
}

#[test]
fn test_edge_case_blank_queries() {
    let tree = example_tree();
    let engine = Engine::new(tree.config()).unwrap();
    assert!(engine.search("").is_empty());
    assert!(engine.search("    ").is_empty());
}

#[test]
fn test_edge_case_query_with_regex_characters() {
    let tree = TreeBuilder::new().file("notes (draft) [v2].md").file("a+b.txt").build();
    let engine = Engine::new(tree.config()).unwrap();

    assert_eq!(engine.search("(draft) [v2]").len(), 1);
    assert_eq!(engine.search("a+b").len(), 1);
    assert!(engine.search(".*").is_empty());
}

#[test]
fn test_edge_case_unicode_names() {
    let tree = TreeBuilder::new().file("Übersicht.pdf").file("写真/旅行.jpg").build();
    let engine = Engine::new(tree.config()).unwrap();

    let results = engine.search("übersicht");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Übersicht");

    assert_eq!(engine.search("旅行").len(), 1);
    assert_eq!(engine.search("写真").len(), 1);
}

#[test]
fn test_edge_case_dotfiles_and_multi_dot_names() {
    let tree = TreeBuilder::new().file(".env").file("archive.tar.gz").build();
    let engine = Engine::new(tree.config()).unwrap();

    assert_eq!(engine.search(".env")[0].name, ".env");
    assert_eq!(engine.search("archive")[0].name, "archive.tar");
}

#[test]
fn test_edge_case_advanced_search_unsupported() {
    let tree = example_tree();
    let engine = Engine::new(tree.config()).unwrap();
    let options = HashMap::from([("type".to_string(), "doc".to_string())]);
    assert!(matches!(
        engine.advanced_search("report", &options),
        Err(EngineError::AdvancedSearchUnsupported)
    ));
}

#[cfg(unix)]
#[test]
fn test_edge_case_symlink_cycle_terminates() {
    let tree = TreeBuilder::new().file("a/b/deep.txt").build();
    std::os::unix::fs::symlink(tree.root(), tree.path("a/b/loop")).unwrap();
    std::os::unix::fs::symlink(tree.path("a"), tree.path("a/b/up")).unwrap();

    for follow_links in [false, true] {
        let config = tree
            .config()
            .with_follow_links(follow_links)
            .with_snapshot_key(format!("follow-{}.json", follow_links));
        let engine = Engine::new(config).unwrap();
        assert_eq!(engine.snapshot().directory_count(), 3, "follow_links={}", follow_links);
        assert_eq!(engine.search("deep").len(), 1);
        // Listed as directories by their parent
        assert_eq!(engine.search("loop").len(), 1);
        assert_eq!(engine.search("up").len(), 1);
    }
}

#[cfg(unix)]
#[test]
fn test_edge_case_control_characters_in_names() {
    let tree = TreeBuilder::new().file("bad\x1b[2Jname.txt").build();
    let engine = Engine::new(tree.config()).unwrap();

    // Stored and matched verbatim; sanitizing is a display concern
    let results = engine.search("name");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "bad\x1b[2Jname");
    assert_eq!(dirsearch::utils::sanitize_name(&results[0].name), "bad?name");
}

#[cfg(unix)]
#[test]
fn test_edge_case_unreadable_subdirectory_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let tree = TreeBuilder::new().file("open/visible.txt").file("locked/hidden.txt").build();
    fs::set_permissions(tree.path("locked"), fs::Permissions::from_mode(0o000)).unwrap();

    let engine = Engine::new(tree.config()).unwrap();
    fs::set_permissions(tree.path("locked"), fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(engine.search("visible").len(), 1);
    assert_eq!(engine.search("locked").len(), 1, "The directory itself is still listed");
}
