use leadgrid::core::import::ImportLogic;
use leadgrid::db::LeadStore;
use leadgrid::errors::{AppError, AppResult};
use leadgrid::import::ImportRow;
use leadgrid::models::{Lead, LeadPatch, NewLead};
use leadgrid::ui::notifier::{Notifier, Severity};
use std::cell::RefCell;
use std::env;
use std::path::PathBuf;

mod common;
use common::{lead, write_csv};

/// Store double: creates leads until the scripted call number fails.
#[derive(Default)]
struct FakeStore {
    attempts: Vec<String>,
    fail_on: Option<usize>,
}

impl LeadStore for FakeStore {
    fn update_record(&mut self, _id: &str, _patch: &LeadPatch) -> AppResult<bool> {
        Err(AppError::Other("not used".into()))
    }

    fn create_record(&mut self, new: &NewLead) -> AppResult<Lead> {
        self.attempts.push(new.name.clone());
        if self.fail_on == Some(self.attempts.len()) {
            return Err(AppError::Other("disk full".into()));
        }
        let id = self.attempts.len().to_string();
        Ok(lead(&id, &new.name, new.company.as_deref()))
    }
}

#[derive(Default)]
struct RecordingNotifier {
    seen: RefCell<Vec<(String, String, Severity)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, description: &str, severity: Severity) {
        self.seen
            .borrow_mut()
            .push((title.to_string(), description.to_string(), severity));
    }
}

fn row(name: &str) -> ImportRow {
    ImportRow {
        name: name.into(),
        email: format!("{}@x.com", name.to_lowercase()),
        phone: "5550001111".into(),
        company: None,
    }
}

#[test]
fn test_create_all_stops_at_first_failure() {
    let mut store = FakeStore {
        fail_on: Some(2),
        ..Default::default()
    };
    let notifier = RecordingNotifier::default();
    let rows = vec![row("Ann"), row("Bob"), row("Cid")];

    let result = ImportLogic::create_all(&mut store, &notifier, &rows);

    assert_eq!(store.attempts, ["Ann", "Bob"]);
    match result {
        Err(AppError::ImportAborted { created, reason }) => {
            assert_eq!(created, 1);
            assert!(reason.contains("disk full"));
        }
        other => panic!("expected ImportAborted, got {other:?}"),
    }

    let seen = notifier.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "Error importing leads");
    assert_eq!(seen[0].2, Severity::Destructive);
}

#[test]
fn test_create_all_first_row_fails() {
    let mut store = FakeStore {
        fail_on: Some(1),
        ..Default::default()
    };
    let notifier = RecordingNotifier::default();

    let err = ImportLogic::create_all(&mut store, &notifier, &[row("Ann"), row("Bob")]).unwrap_err();

    assert!(matches!(err, AppError::ImportAborted { created: 0, .. }));
    assert_eq!(store.attempts, ["Ann"]);
}

#[test]
fn test_create_all_success_notifies_count() {
    let mut store = FakeStore::default();
    let notifier = RecordingNotifier::default();

    let created = ImportLogic::create_all(&mut store, &notifier, &[row("Ann"), row("Bob")]).unwrap();

    assert_eq!(created, 2);
    let seen = notifier.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].1, "Successfully imported 2 leads.");
    assert_eq!(seen[0].2, Severity::Success);
}

#[test]
fn test_load_notifies_parse_failure() {
    let path = PathBuf::from(write_csv("workflow_header_only", "name,email,phone\n"));
    let notifier = RecordingNotifier::default();

    let err = ImportLogic::load(&path, &notifier).unwrap_err();

    assert!(matches!(err, AppError::Import(_)));
    let seen = notifier.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "Error parsing CSV");
    assert_eq!(seen[0].1, "CSV file must contain headers and at least one row");
    assert_eq!(seen[0].2, Severity::Destructive);
}

#[test]
fn test_load_rejects_other_extension() {
    let mut path = env::temp_dir();
    path.push("workflow_leads.txt");
    std::fs::write(&path, "name,email,phone\nAnn,ann@x.com,5550001111\n").unwrap();
    let notifier = RecordingNotifier::default();

    let err = ImportLogic::load(&path, &notifier).unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(notifier.seen.borrow()[0].0, "Error parsing CSV");
}

#[test]
fn test_load_valid_file_is_silent() {
    let path = PathBuf::from(write_csv(
        "workflow_valid",
        "name,email,phone\nAnn,ann@x.com,5550001111\n",
    ));
    let notifier = RecordingNotifier::default();

    let rows = ImportLogic::load(&path, &notifier).unwrap();

    assert_eq!(rows, vec![row("Ann")]);
    assert!(notifier.seen.borrow().is_empty());
}
