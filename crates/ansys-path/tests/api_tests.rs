//! Free functions driven by the process environment.
#![cfg(unix)]
#![allow(deprecated)]

use ansys_path::{
    AnsysPathError, ClearTarget, InstalledVersion, VersionRequest, change_default_ansys_path,
    change_default_mapdl_path, clear_configuration, find_ansys, find_dyna, find_mapdl,
    get_available_installations, get_latest_installation, get_mapdl_path, get_mechanical_path,
    get_saved_application_path, save_mechanical_path, settings_dir, version_from_path,
};
use ansys_path_testkit::{InstallTree, touch, with_isolated_settings_env};

#[test]
fn test_settings_dir_follows_data_dir_override() {
    with_isolated_settings_env(|env| {
        let dir = settings_dir().unwrap();
        assert_eq!(dir, env.data_dir().join("ansys_tools_path"));
    });
}

#[test]
fn test_find_uses_base_dir_override() {
    with_isolated_settings_env(|env| {
        let tree = InstallTree::new(env.base_dir());
        tree.add_mapdl(222);
        let latest = tree.add_mapdl(231);

        let found = find_mapdl(None, None).unwrap().unwrap();
        assert_eq!(found.path, latest);

        let older = find_mapdl(Some(VersionRequest::Float(22.2)), None)
            .unwrap()
            .unwrap();
        assert_eq!(older.code(), 222);

        let alias = find_ansys(None, None).unwrap().unwrap();
        assert_eq!(alias, found);
    });
}

#[test]
fn test_find_without_installs_is_none() {
    with_isolated_settings_env(|_| {
        assert!(find_dyna(None, None).unwrap().is_none());
        assert!(get_available_installations(None).unwrap().is_empty());
        assert!(matches!(
            get_latest_installation().unwrap_err(),
            AnsysPathError::NoInstallation
        ));
    });
}

#[test]
fn test_available_and_latest_installations() {
    with_isolated_settings_env(|env| {
        let tree = InstallTree::new(env.base_dir());
        tree.add_version_dir(241, false);
        tree.add_version_dir(242, true);

        let installed = get_available_installations(None).unwrap();
        assert_eq!(installed.signed_codes(), vec![241, -242]);

        let (version, path) = get_latest_installation().unwrap();
        assert_eq!(version, InstalledVersion::student(242));
        assert_eq!(path, tree.version_dir(242, true));
    });
}

#[test]
fn test_get_path_prefers_saved_entry() {
    with_isolated_settings_env(|env| {
        let tree = InstallTree::new(env.base_dir());
        let discovered = tree.add_mapdl(251);
        assert_eq!(get_mapdl_path(false, None, true).unwrap(), Some(discovered));
        assert_eq!(get_saved_application_path("mapdl").unwrap(), None);

        let custom = touch(env.data_dir().join("bin/ansys242"));
        change_default_mapdl_path(&custom).unwrap();
        assert_eq!(get_mapdl_path(false, None, true).unwrap(), Some(custom.clone()));
        assert_eq!(get_saved_application_path("mapdl").unwrap(), Some(custom));
    });
}

#[test]
fn test_get_path_without_anything_is_none() {
    with_isolated_settings_env(|_| {
        assert_eq!(get_mechanical_path(false, None, true).unwrap(), None);
    });
}

#[test]
fn test_save_discovers_latest_and_clear_removes_it() {
    with_isolated_settings_env(|env| {
        let tree = InstallTree::new(env.base_dir());
        let exe = tree.add_mechanical(242);

        let saved = save_mechanical_path(None, false).unwrap();
        assert_eq!(saved, exe);
        assert_eq!(get_saved_application_path("mechanical").unwrap(), Some(exe));

        clear_configuration(ClearTarget::Product(ansys_path::Product::Mechanical)).unwrap();
        assert_eq!(get_saved_application_path("mechanical").unwrap(), None);
    });
}

#[test]
fn test_clear_all_leaves_empty_document() {
    with_isolated_settings_env(|env| {
        let tree = InstallTree::new(env.base_dir());
        change_default_ansys_path(&tree.add_mapdl(231)).unwrap();

        clear_configuration(ClearTarget::All).unwrap();

        let file = settings_dir().unwrap().join("config.txt");
        let content = std::fs::read_to_string(file).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, serde_json::json!({}));
    });
}

#[test]
fn test_version_from_path_rejects_unknown_product() {
    let err = version_from_path("skvbhksbvks", "/ansys_inc/v251/ansys/bin/ansys251").unwrap_err();
    assert!(matches!(err, AnsysPathError::UnknownProduct(_)));

    assert_eq!(
        version_from_path("mapdl", "/ansys_inc/v251/ansys/bin/ansys251").unwrap(),
        251
    );
}
