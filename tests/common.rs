#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeZone, Utc};
use leadgrid::models::{Lead, LeadStatus};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, with HOME pointed at a scratch directory so no real
/// configuration is read or written.
pub fn lg() -> Command {
    let mut cmd = cargo_bin_cmd!("leadgrid");
    cmd.env("HOME", test_home());
    cmd
}

pub fn test_home() -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push("leadgrid_test_home");
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_leadgrid.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Write a CSV file in the temp dir and return its path
pub fn write_csv(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_leads.csv", name));
    fs::write(&path, content).expect("write csv");
    path.to_string_lossy().to_string()
}

/// Initialize a test DB through the CLI
pub fn init_db(db_path: &str) {
    lg().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

/// In-memory lead with fixed timestamps
pub fn lead(id: &str, name: &str, company: Option<&str>) -> Lead {
    Lead {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", id),
        phone: "555-000-1234".to_string(),
        company: company.map(str::to_string),
        status: LeadStatus::Pending,
        created_at: ts(2025, 10, 1, 9, 0),
        updated_at: ts(2025, 10, 1, 9, 0),
    }
}
