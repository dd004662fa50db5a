use leadgrid::config::check::missing_keys;
use leadgrid::config::{Config, PreferenceStore};
use leadgrid::core::pagination::DEFAULT_PAGE_SIZE;
use leadgrid::core::sort::{SortDirection, SortState};
use leadgrid::models::LeadField;
use std::env;
use std::fs;

#[test]
fn test_missing_file_gives_defaults() {
    let mut path = env::temp_dir();
    path.push("leadgrid_no_such_config.conf");
    fs::remove_file(&path).ok();

    let cfg = Config::load_from(&path);
    assert_eq!(cfg.preferences.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(cfg.load_sort(), SortState::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut path = env::temp_dir();
    path.push("leadgrid_partial_config.conf");
    fs::write(&path, "database: /tmp/custom.sqlite\n").unwrap();

    let cfg = Config::load_from(&path);
    assert_eq!(cfg.database, "/tmp/custom.sqlite");
    assert_eq!(cfg.load_page_size(), DEFAULT_PAGE_SIZE);
}

#[test]
fn test_invalid_yaml_falls_back() {
    let mut path = env::temp_dir();
    path.push("leadgrid_broken_config.conf");
    fs::write(&path, "database: [unclosed\n").unwrap();

    let cfg = Config::load_from(&path);
    assert_eq!(cfg.preferences.page_size, DEFAULT_PAGE_SIZE);
}

#[test]
fn test_save_and_reload_preferences() {
    let mut path = env::temp_dir();
    path.push("leadgrid_roundtrip_config.conf");

    let mut cfg = Config::default();
    cfg.preferences.page_size = 50;
    cfg.preferences.sort = SortState::new(LeadField::Company, SortDirection::Asc);
    cfg.save_to(&path).unwrap();

    let loaded = Config::load_from(&path);
    assert_eq!(loaded.load_page_size(), 50);
    assert_eq!(
        loaded.load_sort().active(),
        Some((LeadField::Company, SortDirection::Asc))
    );
}

#[test]
fn test_out_of_range_page_size_is_ignored() {
    let mut cfg = Config::default();
    cfg.preferences.page_size = 500;
    assert_eq!(cfg.load_page_size(), DEFAULT_PAGE_SIZE);
}

#[test]
fn test_check_reports_missing_keys() {
    let missing = missing_keys("database: x.sqlite\npreferences:\n  page_size: 20\n").unwrap();
    assert_eq!(
        missing,
        vec!["preferences.sort.column", "preferences.sort.direction"]
    );

    let complete = "database: x.sqlite\n\
                    preferences:\n  page_size: 20\n  sort:\n    column: name\n    direction: asc\n";
    assert!(missing_keys(complete).unwrap().is_empty());
}
