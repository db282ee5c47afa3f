//! End-to-end install + sync pipeline over a local bundle directory.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rime_core::{Installer, Synchronizer};
use tempfile::TempDir;

fn seed_bundle(root: &Path) -> PathBuf {
    let bundle = root.join("rime-ice-main");
    fs::create_dir_all(bundle.join("opencc")).unwrap();
    fs::write(
        bundle.join("default.yaml"),
        "schema_list:\n  - schema: rime_ice\nmenu:\n  page_size: 5\n",
    )
    .unwrap();
    fs::write(bundle.join("rime_ice.schema.yaml"), "schema:\n  schema_id: rime_ice\n").unwrap();
    fs::write(bundle.join("opencc/emoji.json"), "{}\n").unwrap();
    bundle
}

#[test]
fn install_then_sync_produces_a_deployable_config_dir() {
    let temp = TempDir::new().unwrap();
    let bundle = seed_bundle(temp.path());
    let target = temp.path().join("Rime");
    let overrides = temp.path().join("custom_config");
    let schemas = vec!["rime_ice".to_string(), "double_pinyin_flypy".to_string()];

    fs::create_dir_all(&overrides).unwrap();
    fs::write(
        overrides.join("default.custom.yml"),
        "patch:\n  \"menu/page_size\": 7\n",
    )
    .unwrap();
    fs::write(
        overrides.join("weasel.custom.yaml"),
        "patch:\n  \"style/color_scheme\": ayaya\n",
    )
    .unwrap();

    Installer::new(&target)
        .install_from_dir(&bundle, &schemas)
        .unwrap();
    let deployed = Synchronizer::new(&target, &overrides)
        .sync(&schemas)
        .unwrap();

    assert_eq!(deployed, vec!["default.custom.yaml", "weasel.custom.yaml"]);

    // Bundle files made it through untouched.
    assert_eq!(fs::read_to_string(target.join("opencc/emoji.json")).unwrap(), "{}\n");

    // The override replaced the installer's generated base patch and got
    // the schema selection spliced in, still valid YAML.
    let patch = fs::read_to_string(target.join("default.custom.yaml")).unwrap();
    let parsed: serde_yaml::Value = serde_yaml::from_str(&patch).unwrap();
    assert_eq!(parsed["patch"]["menu/page_size"], serde_yaml::Value::from(7));
    assert_eq!(parsed["patch"]["schema_list"][0]["schema"], "rime_ice");
    assert_eq!(
        parsed["patch"]["schema_list"][1]["schema"],
        "double_pinyin_flypy"
    );

    // No stray .yml destinations.
    assert!(!target.join("default.custom.yml").exists());
}

#[test]
fn resync_after_reinstall_converges() {
    let temp = TempDir::new().unwrap();
    let bundle = seed_bundle(temp.path());
    let target = temp.path().join("Rime");
    let overrides = temp.path().join("custom_config");
    let schemas = vec!["rime_ice".to_string()];

    fs::create_dir_all(&overrides).unwrap();
    fs::write(overrides.join("default.custom.yaml"), "patch:\n  foo: 1\n").unwrap();

    let installer = Installer::new(&target);
    let syncer = Synchronizer::new(&target, &overrides);

    installer.install_from_dir(&bundle, &schemas).unwrap();
    syncer.sync(&schemas).unwrap();
    let first = fs::read_to_string(target.join("default.custom.yaml")).unwrap();

    // Upgrade cycle: reinstall the bundle, then resync overrides.
    installer.install_from_dir(&bundle, &schemas).unwrap();
    syncer.sync(&schemas).unwrap();
    let second = fs::read_to_string(target.join("default.custom.yaml")).unwrap();

    assert_eq!(first, second);
    assert_eq!(second.matches("schema_list:").count(), 1);
}
