use anyhow::Result;
use portal_kit::config::SetupConfig;
use portal_kit::filesystem::RealFileSystem;
use portal_kit::privileged::mock::MockPrivilegedOps;
use portal_kit::setup;
use portal_kit::tree;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn config_for(staging: &Path, target: &Path, app_file: &Path) -> SetupConfig {
    SetupConfig {
        staging_dir: staging.to_path_buf(),
        target_root: target.to_path_buf(),
        app_file: app_file.to_path_buf(),
        owner: Some("tester".to_string()),
        ..SetupConfig::default()
    }
}

/// Builds a staging directory with a representative subset of the manifest
fn populate_staging(staging: &Path) -> Result<()> {
    fs::create_dir_all(staging.join("ui"))?;
    fs::create_dir_all(staging.join("figma").join("icons"))?;

    fs::write(staging.join("AdminOverrides.tsx"), "admin overrides")?;
    fs::write(staging.join("EventLogs.tsx"), "event logs")?;
    fs::write(staging.join("ui").join("button.tsx"), "button")?;
    fs::write(staging.join("ui").join("dialog.tsx"), "dialog")?;
    fs::write(staging.join("info.tsx"), "info")?;
    fs::write(staging.join("kv_store.tsx"), "kv store")?;
    fs::write(staging.join("globals.css"), "body {}")?;
    fs::write(staging.join("figma").join("logo.svg"), "logo")?;
    fs::write(staging.join("figma").join("icons").join("check.svg"), "check")?;

    Ok(())
}

#[test]
fn test_setup_populates_target_tree() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let staging = temp_dir.path().join("portal_extracted");
    let target = temp_dir.path().join("portal");
    let app_file = temp_dir.path().join("App.tsx");

    populate_staging(&staging)?;
    fs::write(&app_file, "app entry")?;

    let config = config_for(&staging, &target, &app_file);
    let ops = MockPrivilegedOps::new();
    let copied = setup::run_setup(&config, &RealFileSystem::new(), &ops)?;

    // Every present manifest entry was confirmed, in copy order
    assert_eq!(
        copied,
        vec![
            "AdminOverrides.tsx".to_string(),
            "EventLogs.tsx".to_string(),
            "info.tsx".to_string(),
            "kv_store.tsx".to_string(),
            "globals.css".to_string(),
            "App.tsx".to_string(),
        ]
    );

    // Components land under src/components/
    assert_eq!(
        fs::read_to_string(target.join("src/components/AdminOverrides.tsx"))?,
        "admin overrides"
    );

    // Staged UI files land under src/components/ui/
    assert_eq!(
        fs::read_to_string(target.join("src/components/ui/button.tsx"))?,
        "button"
    );
    assert_eq!(
        fs::read_to_string(target.join("src/components/ui/dialog.tsx"))?,
        "dialog"
    );

    // The stylesheet routes to src/, the other utilities to utils/supabase/
    assert_eq!(fs::read_to_string(target.join("src/globals.css"))?, "body {}");
    assert_eq!(
        fs::read_to_string(target.join("src/utils/supabase/info.tsx"))?,
        "info"
    );
    assert_eq!(
        fs::read_to_string(target.join("src/utils/supabase/kv_store.tsx"))?,
        "kv store"
    );

    // The asset tree was copied recursively
    assert_eq!(
        fs::read_to_string(target.join("src/components/figma/logo.svg"))?,
        "logo"
    );
    assert_eq!(
        fs::read_to_string(target.join("src/components/figma/icons/check.svg"))?,
        "check"
    );

    // The standalone app file landed in src/
    assert_eq!(fs::read_to_string(target.join("src/App.tsx"))?, "app entry");

    // The whole tree went through the privileged capability
    assert_eq!(
        ops.created(),
        vec![
            target.join("src/components/ui"),
            target.join("src/utils/supabase"),
            target.join("src/assets"),
            target.join("public"),
        ]
    );
    assert_eq!(ops.chowned(), vec![(target.clone(), "tester".to_string())]);

    Ok(())
}

#[test]
fn test_setup_listing_covers_created_tree() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let staging = temp_dir.path().join("portal_extracted");
    let target = temp_dir.path().join("portal");
    let app_file = temp_dir.path().join("App.tsx");

    populate_staging(&staging)?;
    fs::write(&app_file, "app entry")?;

    let config = config_for(&staging, &target, &app_file);
    let fs_impl = RealFileSystem::new();
    setup::run_setup(&config, &fs_impl, &MockPrivilegedOps::new())?;

    let listing = tree::render_tree(&target, &fs_impl)?;
    for entry in [
        "portal/",
        "components/",
        "AdminOverrides.tsx",
        "button.tsx",
        "figma/",
        "check.svg",
        "supabase/",
        "kv_store.tsx",
        "globals.css",
        "App.tsx",
        "public/",
    ] {
        assert!(listing.contains(entry), "listing missing {entry}:\n{listing}");
    }

    Ok(())
}

#[test]
fn test_setup_skips_missing_ui_subdirectory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let staging = temp_dir.path().join("portal_extracted");
    let target = temp_dir.path().join("portal");

    fs::create_dir_all(&staging)?;
    fs::write(staging.join("EventLogs.tsx"), "event logs")?;

    // No ui/, no figma/, no app file
    let config = config_for(&staging, &target, &temp_dir.path().join("missing/App.tsx"));
    let copied = setup::run_setup(&config, &RealFileSystem::new(), &MockPrivilegedOps::new())?;

    assert_eq!(copied, vec!["EventLogs.tsx".to_string()]);
    assert!(target.join("src/components/EventLogs.tsx").exists());
    assert!(!target.join("src/App.tsx").exists());

    Ok(())
}

#[test]
fn test_setup_tolerates_existing_directories() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let staging = temp_dir.path().join("portal_extracted");
    let target = temp_dir.path().join("portal");

    fs::create_dir_all(&staging)?;
    // Pre-create part of the target tree
    fs::create_dir_all(target.join("src/components/ui"))?;
    fs::create_dir_all(target.join("public"))?;

    let config = config_for(&staging, &target, &temp_dir.path().join("App.tsx"));
    setup::run_setup(&config, &RealFileSystem::new(), &MockPrivilegedOps::new())?;

    assert!(target.join("src/components/ui").is_dir());
    assert!(target.join("src/assets").is_dir());

    Ok(())
}

#[test]
fn test_setup_skips_absent_manifest_entries() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let staging = temp_dir.path().join("portal_extracted");
    let target = temp_dir.path().join("portal");

    fs::create_dir_all(&staging)?;
    fs::write(staging.join("AdminOverrides.tsx"), "admin overrides")?;

    let config = config_for(&staging, &target, &temp_dir.path().join("App.tsx"));
    let copied = setup::run_setup(&config, &RealFileSystem::new(), &MockPrivilegedOps::new())?;

    // Only the entry that exists in staging is copied or reported
    assert_eq!(copied, vec!["AdminOverrides.tsx".to_string()]);
    assert!(!target.join("src/components/DriversManagement.tsx").exists());

    Ok(())
}

#[test]
fn test_setup_continues_past_privileged_failure() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let staging = temp_dir.path().join("portal_extracted");
    let target = temp_dir.path().join("portal");

    fs::create_dir_all(&staging)?;
    fs::write(staging.join("EventLogs.tsx"), "event logs")?;

    let config = config_for(&staging, &target, &temp_dir.path().join("App.tsx"));
    let ops = MockPrivilegedOps::new().with_failure(&target.join("public"), "permission denied");
    let copied = setup::run_setup(&config, &RealFileSystem::new(), &ops)?;

    // The failed directory is reported and skipped; later steps still ran
    assert_eq!(copied, vec!["EventLogs.tsx".to_string()]);
    assert!(!target.join("public").exists());
    assert!(target.join("src/components/EventLogs.tsx").exists());

    Ok(())
}

#[test]
fn test_setup_overwrites_existing_assets() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let staging = temp_dir.path().join("portal_extracted");
    let target = temp_dir.path().join("portal");

    fs::create_dir_all(staging.join("figma"))?;
    fs::write(staging.join("figma").join("logo.svg"), "new logo")?;
    fs::create_dir_all(target.join("src/components/figma"))?;
    fs::write(target.join("src/components/figma/logo.svg"), "old logo")?;

    let config = config_for(&staging, &target, &temp_dir.path().join("App.tsx"));
    setup::run_setup(&config, &RealFileSystem::new(), &MockPrivilegedOps::new())?;

    assert_eq!(
        fs::read_to_string(target.join("src/components/figma/logo.svg"))?,
        "new logo"
    );

    Ok(())
}
