//! End-to-end tests for hook registration and emission.

use hookgen_registry::HookRegistry;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Vendor tree with one host (`A.vue`, declaring `_slot`) and three
/// insertable components, an alias file mapping `@App` into it, and a
/// registry writing to `<root>/generated`.
fn fixture() -> (TempDir, HookRegistry) {
    let root = TempDir::new().unwrap();
    let app = root.path().join("vendor/app");
    std::fs::create_dir_all(app.join("hooks")).unwrap();
    std::fs::write(
        app.join("A.vue"),
        "<template>\n  <div>\n    <!-- hook_name _slot -->\n  </div>\n</template>\n",
    )
    .unwrap();
    for name in ["B", "C", "D"] {
        std::fs::write(
            app.join(format!("hooks/{name}.vue")),
            "<template><p/></template>\n",
        )
        .unwrap();
    }

    let alias_file = root.path().join("aliases.json");
    let mut file = std::fs::File::create(&alias_file).unwrap();
    write!(file, r#"{{"@App": "{}"}}"#, app.display()).unwrap();

    let registry = HookRegistry::with_alias_file(root.path().join("generated"), &alias_file).unwrap();
    (root, registry)
}

/// Collect every file under `dir` as (relative path, bytes).
fn snapshot(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    fn walk(base: &Path, dir: &Path, out: &mut BTreeMap<PathBuf, Vec<u8>>) {
        for entry in std::fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(base, &path, out);
            } else {
                let relative = path.strip_prefix(base).unwrap().to_path_buf();
                out.insert(relative, std::fs::read(&path).unwrap());
            }
        }
    }
    let mut out = BTreeMap::new();
    walk(dir, dir, &mut out);
    out
}

#[test]
fn end_to_end_single_hook() {
    let (root, mut registry) = fixture();
    registry.add("@App/A.vue", "_slot", "@App/hooks/B.vue").unwrap();
    registry.dump_all().unwrap();

    let generated = root.path().join("generated/app/A/_slot.vue");
    assert!(generated.exists(), "expected {} to exist", generated.display());

    let content = std::fs::read_to_string(&generated).unwrap();
    assert!(content.contains("<BC/>"));
    assert!(content.contains("import BC from '@App/hooks/B.vue';"));
    assert!(content.contains("name: '_slot'"));
    assert!(content.contains("    BC,\n"));
    // The import keeps the alias form for the downstream bundler.
    assert!(!content.contains(&root.path().display().to_string()));
}

#[test]
fn emission_order_matches_insertion_order() {
    let (root, mut registry) = fixture();
    registry.add("@App/A.vue", "_slot", "@App/hooks/D.vue").unwrap();
    registry.add("@App/A.vue", "_slot", "@App/hooks/B.vue").unwrap();
    registry.add("@App/A.vue", "_slot", "@App/hooks/C.vue").unwrap();
    registry.dump_all().unwrap();

    let content =
        std::fs::read_to_string(root.path().join("generated/app/A/_slot.vue")).unwrap();
    for (first, second) in [("<DC/>", "<BC/>"), ("<BC/>", "<CC/>")] {
        assert!(content.find(first).unwrap() < content.find(second).unwrap());
    }
    for (first, second) in [("import DC", "import BC"), ("import BC", "import CC")] {
        assert!(content.find(first).unwrap() < content.find(second).unwrap());
    }
    for (first, second) in [("    DC,\n", "    BC,\n"), ("    BC,\n", "    CC,\n")] {
        assert!(content.find(first).unwrap() < content.find(second).unwrap());
    }
}

#[test]
fn dump_all_is_deterministic() {
    let (root, mut registry) = fixture();
    registry.add("@App/A.vue", "_slot", "@App/hooks/B.vue").unwrap();
    registry.add("@App/A.vue", "_slot", "@App/hooks/C.vue").unwrap();

    registry.dump_all().unwrap();
    let first = snapshot(&root.path().join("generated"));
    registry.dump_all().unwrap();
    let second = snapshot(&root.path().join("generated"));

    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn dump_all_clears_stale_output() {
    let (root, mut registry) = fixture();
    let out_dir = root.path().join("generated");
    std::fs::create_dir_all(out_dir.join("stale")).unwrap();
    std::fs::write(out_dir.join("stale/old.vue"), "obsolete").unwrap();

    registry.add("@App/A.vue", "_slot", "@App/hooks/B.vue").unwrap();
    registry.dump_all().unwrap();

    assert!(!out_dir.join("stale/old.vue").exists());
    assert!(out_dir.join("app/A/_slot.vue").exists());
}

#[test]
fn multiple_hook_points_get_separate_files() {
    let (root, mut registry) = fixture();
    std::fs::write(
        root.path().join("vendor/app/Multi.vue"),
        "<!-- hook_name _header -->\n<!-- hook_name _footer -->\n",
    )
    .unwrap();

    registry.add("@App/Multi.vue", "_header", "@App/hooks/B.vue").unwrap();
    registry.add("@App/Multi.vue", "_footer", "@App/hooks/C.vue").unwrap();
    registry.dump_all().unwrap();

    let header = root.path().join("generated/app/Multi/_header.vue");
    let footer = root.path().join("generated/app/Multi/_footer.vue");
    assert!(header.exists());
    assert!(footer.exists());
    assert!(std::fs::read_to_string(&header).unwrap().contains("name: '_header'"));
    assert!(std::fs::read_to_string(&footer).unwrap().contains("name: '_footer'"));
}

#[test]
fn removed_entries_do_not_appear_in_output() {
    let (root, mut registry) = fixture();
    registry.add("@App/A.vue", "_slot", "@App/hooks/B.vue").unwrap();
    registry.add("@App/A.vue", "_slot", "@App/hooks/C.vue").unwrap();
    registry.remove("@App/A.vue", "_slot", "@App/hooks/B.vue").unwrap();
    registry.dump_all().unwrap();

    let content =
        std::fs::read_to_string(root.path().join("generated/app/A/_slot.vue")).unwrap();
    assert!(!content.contains("BC"));
    assert!(content.contains("<CC/>"));
}
