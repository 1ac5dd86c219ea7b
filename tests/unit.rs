use projcat::{FlattenBuilder, scan};
use std::fs;
use tempfile::tempdir;
#[test]
fn test_basic_scan() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hello.txt"), "hello world").unwrap();
    let options = FlattenBuilder::new(dir.path()).build();
    let snapshot = scan(&options).unwrap();
    assert_eq!(snapshot.file_count(), 1);
    assert_eq!(snapshot.root.depth, 0);
    assert_eq!(snapshot.root.files[0].name, "hello.txt");
    assert_eq!(snapshot.root.files[0].display_path, "./hello.txt");
}
#[test]
fn test_ignored_dirs_pruned_at_any_depth() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();
    fs::write(dir.path().join("node_modules/pkg/index.js"), "x").unwrap();
    fs::create_dir_all(dir.path().join("src/build")).unwrap();
    fs::write(dir.path().join("src/build/out.txt"), "x").unwrap();
    fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();
    let options = FlattenBuilder::new(dir.path()).build();
    let snapshot = scan(&options).unwrap();
    let paths: Vec<_> = snapshot
        .root
        .walk_files()
        .iter()
        .map(|f| f.display_path.clone())
        .collect();
    assert_eq!(paths, vec!["./src/main.rs"]);
    assert_eq!(snapshot.root.dirs.len(), 1);
    assert!(snapshot.root.dirs[0].dirs.is_empty());
}
#[test]
fn test_ignored_extensions() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::write(dir.path().join("b.json"), "{}").unwrap();
    fs::write(dir.path().join("c.d.ts"), "x").unwrap();
    fs::write(dir.path().join("myjson"), "kept").unwrap();
    let options = FlattenBuilder::new(dir.path()).build();
    let snapshot = scan(&options).unwrap();
    let names: Vec<_> = snapshot.root.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a.txt", "myjson"]);
}
#[test]
fn test_custom_rules_replace_defaults() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("node_modules/c.txt"), "c").unwrap();
    fs::create_dir(dir.path().join("target")).unwrap();
    fs::write(dir.path().join("target/t.txt"), "t").unwrap();
    fs::write(dir.path().join("b.json"), "{}").unwrap();
    fs::write(dir.path().join("Cargo.lock"), "").unwrap();
    let options = FlattenBuilder::new(dir.path())
        .ignore_dirs(["target"])
        .ignore_extensions([".lock"])
        .build();
    let snapshot = scan(&options).unwrap();
    let paths: Vec<_> = snapshot
        .root
        .walk_files()
        .iter()
        .map(|f| f.display_path.clone())
        .collect();
    assert_eq!(paths, vec!["./b.json", "./node_modules/c.txt"]);
}
#[test]
fn test_self_and_output_names_excluded_everywhere() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("_project_context.txt"), "old").unwrap();
    fs::write(dir.path().join("sub/_project_context.txt"), "old").unwrap();
    fs::write(dir.path().join("merge_tool"), "bin").unwrap();
    fs::write(dir.path().join("keep.md"), "# keep").unwrap();
    let options = FlattenBuilder::new(dir.path()).tool_name("merge_tool").build();
    let snapshot = scan(&options).unwrap();
    assert_eq!(snapshot.file_count(), 1);
    assert_eq!(snapshot.root.files[0].name, "keep.md");
}
#[test]
fn test_entries_sorted_files_before_subdirs() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("b")).unwrap();
    fs::create_dir(dir.path().join("a")).unwrap();
    fs::write(dir.path().join("b/2.txt"), "").unwrap();
    fs::write(dir.path().join("a/1.txt"), "").unwrap();
    fs::write(dir.path().join("z.txt"), "").unwrap();
    fs::write(dir.path().join("y.txt"), "").unwrap();
    let options = FlattenBuilder::new(dir.path()).build();
    let snapshot = scan(&options).unwrap();
    let paths: Vec<_> = snapshot
        .root
        .walk_files()
        .iter()
        .map(|f| f.display_path.clone())
        .collect();
    assert_eq!(paths, vec!["./y.txt", "./z.txt", "./a/1.txt", "./b/2.txt"]);
}
#[test]
fn test_missing_root_is_fatal() {
    let dir = tempdir().unwrap();
    let options = FlattenBuilder::new(dir.path().join("nope")).build();
    assert!(scan(&options).is_err());
}
