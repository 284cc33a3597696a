//! End-to-end resolution against synthetic install trees.

use ansys_path::{
    Advisory, AnsysPathError, CollectingSink, DiscoveryEnv, InstalledVersion, PathResolver,
    Platform, Product, Resolution, ResolveOptions, VersionRequest,
};
use ansys_path_core::{ConfigStore, SettingsLocations};
use ansys_path_testkit::{InstallTree, temp_dir_in_workspace, touch};
use std::path::Path;
use tempfile::TempDir;

fn linux_resolver(root: &Path, tree: &InstallTree, sink: &CollectingSink) -> PathResolver {
    let store = ConfigStore::new(SettingsLocations::new(root.join("data"), false));
    let env = DiscoveryEnv::new(Platform::Linux).with_linux_base_dirs([tree.base()]);
    PathResolver::new(store, env).with_sink(sink.clone())
}

fn no_input() -> ResolveOptions {
    ResolveOptions {
        allow_input: false,
        ..ResolveOptions::default()
    }
}

#[test]
fn test_latest_release_is_selected() {
    let temp = temp_dir_in_workspace();
    let tree = InstallTree::new(temp.path().join("ansys_inc"));
    tree.add_version_dir(222, false);
    tree.add_version_dir(212, false);
    tree.add_version_dir(231, true);
    let sink = CollectingSink::new();
    let resolver = linux_resolver(temp.path(), &tree, &sink);

    let (version, path) = resolver.latest_installation().unwrap();
    assert_eq!(version, InstalledVersion::student(231));
    assert_eq!(path, tree.version_dir(231, true));
}

#[test]
fn test_student_only_newest_beats_older_standard() {
    let temp = temp_dir_in_workspace();
    let tree = InstallTree::new(temp.path().join("ansys_inc"));
    tree.add_mapdl(242);
    let student = tree.add_student_mapdl(251);
    let sink = CollectingSink::new();
    let resolver = linux_resolver(temp.path(), &tree, &sink);

    let found = resolver.find(Product::Mapdl, None).unwrap().unwrap();
    assert_eq!(found.path, student);
    assert!(found.installed.is_student());
    assert!((found.version - 25.1).abs() < 1e-9);
}

#[test]
fn test_standard_shadows_student_of_same_release() {
    let temp = temp_dir_in_workspace();
    let tree = InstallTree::new(temp.path().join("ansys_inc"));
    tree.add_student_mapdl(251);
    let standard = tree.add_mapdl(251);
    let sink = CollectingSink::new();
    let resolver = linux_resolver(temp.path(), &tree, &sink);

    let found = resolver.find(Product::Mapdl, None).unwrap().unwrap();
    assert_eq!(found.path, standard);
    assert!(!found.installed.is_student());
}

#[test]
fn test_discovered_path_reports_its_own_version() {
    let temp = temp_dir_in_workspace();
    let tree = InstallTree::new(temp.path().join("ansys_inc"));
    for code in [212, 222, 231] {
        tree.add_all(code, false);
    }
    let sink = CollectingSink::new();
    let resolver = linux_resolver(temp.path(), &tree, &sink);

    for product in Product::ALL {
        for code in [212, 222, 231] {
            let found = resolver
                .find(product, Some(VersionRequest::Code(code)))
                .unwrap()
                .unwrap();
            assert!(found.path.is_file(), "{product} {code} should exist");
            assert_eq!(resolver.version_from_path(product, &found.path).unwrap(), code);
        }
    }
}

#[test]
fn test_saved_path_round_trips_exactly() {
    let temp = temp_dir_in_workspace();
    let tree = InstallTree::new(temp.path().join("ansys_inc"));
    let exe = touch(temp.path().join("elsewhere").join("ansys251"));
    let sink = CollectingSink::new();

    let mut resolver = linux_resolver(temp.path(), &tree, &sink);
    resolver.save_path(Product::Mapdl, Some(&exe), false).unwrap();

    // a fresh resolver over the same files sees the same entry
    let mut fresh = linux_resolver(temp.path(), &tree, &sink);
    let resolved = fresh.get_path(Product::Mapdl, &no_input()).unwrap();
    assert_eq!(
        resolved.as_deref().map(|p| p.as_os_str()),
        Some(exe.as_os_str())
    );
}

#[test]
fn test_unknown_version_lists_available_codes() {
    let temp = temp_dir_in_workspace();
    let tree = InstallTree::new(temp.path().join("ansys_inc"));
    tree.add_version_dir(202, false);
    tree.add_version_dir(211, false);
    tree.add_version_dir(231, true);
    let sink = CollectingSink::new();
    let resolver = linux_resolver(temp.path(), &tree, &sink);

    let err = resolver
        .find(Product::Mapdl, Some(VersionRequest::Code(999)))
        .unwrap_err();
    assert!(matches!(err, AnsysPathError::VersionNotFound { .. }));
    let message = err.to_string();
    assert!(message.contains("999"));
    assert!(message.contains("[202, 211, -231]"));
}

#[test]
fn test_empty_machine_gives_none_and_warns() {
    let temp = TempDir::new().unwrap();
    let tree = InstallTree::new(temp.path().join("ansys_inc"));
    let sink = CollectingSink::new();
    let mut resolver = linux_resolver(temp.path(), &tree, &sink);

    assert!(resolver.find(Product::Mapdl, None).unwrap().is_none());

    let resolution = resolver.resolve(Product::Mapdl, &no_input()).unwrap();
    assert_eq!(
        resolution,
        Resolution::NotFound {
            product: Product::Mapdl
        }
    );
    assert_eq!(
        sink.advisories(),
        vec![Advisory::NotFound {
            product: Product::Mapdl
        }]
    );
}

#[test]
fn test_change_default_rejects_missing_file_and_keeps_cache() {
    let temp = temp_dir_in_workspace();
    let tree = InstallTree::new(temp.path().join("ansys_inc"));
    let sink = CollectingSink::new();
    let resolver = linux_resolver(temp.path(), &tree, &sink);

    let existing = tree.add_mechanical(242);
    resolver
        .change_default_path(Product::Mechanical, &existing)
        .unwrap();
    let before = std::fs::read_to_string(resolver.store().path()).unwrap();

    let err = resolver
        .change_default_path(Product::Mechanical, &temp.path().join("gone/.workbench"))
        .unwrap_err();
    assert!(matches!(err, AnsysPathError::ExecutableNotFound { .. }));

    let after = std::fs::read_to_string(resolver.store().path()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_windows_discovery_through_awp_roots() {
    let temp = temp_dir_in_workspace();
    let tree = InstallTree::windows(temp.path().join("ANSYS Inc"));
    tree.add_all(222, false);
    let student_exe = tree.add_student_mapdl(231);
    let standard_root = tree.version_dir(222, false);
    let student_root = tree.version_dir(231, true);

    let store = ConfigStore::new(SettingsLocations::new(temp.path().join("data"), true));
    let env = DiscoveryEnv::new(Platform::Windows)
        .with_awp_root(222, standard_root.to_string_lossy())
        .with_awp_root(231, student_root.to_string_lossy());
    let mut resolver = PathResolver::new(store, env);

    let installed = resolver.available_installations();
    assert_eq!(installed.signed_codes(), vec![222, -231]);

    let resolved = resolver.get_path(Product::Mapdl, &no_input()).unwrap();
    assert_eq!(resolved, Some(student_exe));

    let options = ResolveOptions {
        version: Some(VersionRequest::Float(22.2)),
        ..no_input()
    };
    let resolved = resolver.get_path(Product::Dyna, &options).unwrap().unwrap();
    assert!(resolved.ends_with("v222/ansys/bin/winx64/LSDYNA222.exe"));
}
