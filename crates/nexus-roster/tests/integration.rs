use nexus_model::{EmployeeDraft, Gender};
use nexus_roster::{
    filtered_view, stats, to_csv, FilterSpec, GenderFilter, Repository, RosterError, SessionGate,
    StatusFilter, AUTH_USER_KEY, DEFAULT_EMAIL, DEFAULT_NAME, EMPLOYEES_KEY,
};
use nexus_store::{FileStore, MemoryStore, RecordStore, StoreOptions};
use tempfile::TempDir;

fn draft(full_name: &str, gender: Gender) -> EmployeeDraft {
    EmployeeDraft {
        full_name: full_name.to_string(),
        gender: Some(gender),
        dob: "2000-01-01".to_string(),
        profile_image: "x".to_string(),
        state: "Texas".to_string(),
        is_active: None,
    }
}

#[test]
fn open_seeds_and_persists_on_fresh_store() {
    let repository = Repository::open(MemoryStore::new()).unwrap();
    let employees = repository.employees();

    assert_eq!(employees.len(), 3);
    assert_eq!(employees[0].full_name, "Jane Doe");
    assert_eq!(employees[1].full_name, "John Smith");
    assert_eq!(employees[2].full_name, "Alex Rivera");
}

#[test]
fn open_reloads_persisted_collection() {
    let dir = TempDir::new().unwrap();
    let open_store = || FileStore::open(dir.path(), StoreOptions::default()).unwrap();

    {
        let mut repository = Repository::open(open_store()).unwrap();
        repository.create(draft("New Hire", Gender::Female)).unwrap();
    }

    let repository = Repository::open(open_store()).unwrap();
    assert_eq!(repository.employees().len(), 4);
    assert_eq!(repository.employees()[0].full_name, "New Hire");
}

#[test]
fn corrupt_collection_falls_back_to_the_seed() {
    let mut store = MemoryStore::new();
    store
        .save(EMPLOYEES_KEY, &serde_json::json!({ "not": "an array" }))
        .unwrap();

    let repository = Repository::open(store).unwrap();
    assert_eq!(repository.employees().len(), 3);
    assert_eq!(repository.employees()[0].full_name, "Jane Doe");
}

#[test]
fn create_prepends_with_fresh_id_and_defaults() {
    let mut repository = Repository::open(MemoryStore::new()).unwrap();
    let before: Vec<String> = repository
        .employees()
        .iter()
        .map(|e| e.id.as_ref().to_string())
        .collect();

    let created = repository.create(draft("A", Gender::Other)).unwrap();
    assert_eq!(created.id.as_ref(), "EMP004");
    assert!(created.is_active);
    assert!(!created.created_at.is_empty());

    let after = repository.employees();
    assert_eq!(after[0].id.as_ref(), "EMP004");
    // Pre-existing records unchanged, shifted down by one.
    let shifted: Vec<String> = after[1..]
        .iter()
        .map(|e| e.id.as_ref().to_string())
        .collect();
    assert_eq!(shifted, before);
}

#[test]
fn deleted_ids_are_never_reused() {
    let mut repository = Repository::open(MemoryStore::new()).unwrap();
    repository.create(draft("A", Gender::Male)).unwrap(); // EMP004
    assert!(repository.delete("EMP004").unwrap());

    let created = repository.create(draft("B", Gender::Male)).unwrap();
    assert_eq!(created.id.as_ref(), "EMP005");
}

#[test]
fn validation_failure_mutates_nothing_and_skips_persistence() {
    let mut repository = Repository::open(MemoryStore::new()).unwrap();
    let empty = EmployeeDraft::default();

    let err = repository.create(empty).unwrap_err();
    let fields: Vec<_> = err
        .field_errors()
        .unwrap()
        .iter()
        .map(|e| e.field())
        .collect();
    assert_eq!(fields, vec!["fullName", "dob", "state", "profileImage"]);
    assert_eq!(repository.employees().len(), 3);
}

#[test]
fn update_merges_fields_but_not_identity() {
    let mut repository = Repository::open(MemoryStore::new()).unwrap();
    let created_at = repository.employees()[0].created_at.clone();

    let mut changed = draft("Jane A. Doe", Gender::Female);
    changed.state = "Oregon".to_string();
    assert!(repository.update("EMP001", changed).unwrap());

    let jane = repository
        .employees()
        .iter()
        .find(|e| e.id.as_ref() == "EMP001")
        .unwrap();
    assert_eq!(jane.full_name, "Jane A. Doe");
    assert_eq!(jane.state, "Oregon");
    assert_eq!(jane.created_at, created_at);
}

#[test]
fn operations_on_unknown_ids_are_silent_no_ops() {
    let mut repository = Repository::open(MemoryStore::new()).unwrap();

    assert!(!repository.update("EMP999", draft("X", Gender::Male)).unwrap());
    assert!(!repository.delete("EMP999").unwrap());
    assert!(!repository.toggle_active("EMP999").unwrap());
    assert_eq!(repository.employees().len(), 3);
}

#[test]
fn delete_is_permanent_and_idempotent() {
    let mut repository = Repository::open(MemoryStore::new()).unwrap();

    assert!(repository.delete("EMP002").unwrap());
    assert!(!repository.delete("EMP002").unwrap());

    let spec = FilterSpec::default();
    let view = filtered_view(repository.employees(), &spec);
    assert!(view.iter().all(|e| e.id.as_ref() != "EMP002"));
    assert_eq!(stats(repository.employees()).total, 2);
}

#[test]
fn toggle_flips_status_and_persists() {
    let mut repository = Repository::open(MemoryStore::new()).unwrap();
    assert!(repository.employees()[0].is_active);

    assert!(repository.toggle_active("EMP001").unwrap());
    assert!(!repository.employees()[0].is_active);
    assert!(repository.toggle_active("EMP001").unwrap());
    assert!(repository.employees()[0].is_active);
}

#[test]
fn storage_full_keeps_in_memory_mutation() {
    // Quota large enough for the seed roster, too small for one more.
    let seed_size = {
        let repository = Repository::open(MemoryStore::new()).unwrap();
        serde_json::to_vec(repository.employees()).unwrap().len() as u64
    };
    let mut repository = Repository::open(MemoryStore::with_quota(seed_size + 16)).unwrap();

    let err = repository.create(draft("Overflow", Gender::Male)).unwrap_err();
    assert!(matches!(err, RosterError::Store(e) if e.is_storage_full()));
    // The mutation stays applied in memory, unsaved.
    assert_eq!(repository.employees().len(), 4);
    assert_eq!(repository.employees()[0].full_name, "Overflow");
}

#[test]
fn filtered_view_applies_search_gender_and_status() {
    let repository = Repository::open(MemoryStore::new()).unwrap();
    let employees = repository.employees();

    let search = FilterSpec {
        search: "jo".to_string(),
        ..FilterSpec::default()
    };
    let by_search = filtered_view(employees, &search);
    assert_eq!(by_search.len(), 1);
    assert_eq!(by_search[0].full_name, "John Smith");

    let active = FilterSpec {
        status: StatusFilter::Active,
        ..FilterSpec::default()
    };
    let by_status = filtered_view(employees, &active);
    assert_eq!(by_status.len(), 2);
    assert!(by_status.iter().all(|e| e.is_active));

    let women = FilterSpec {
        gender: GenderFilter::Only(Gender::Female),
        ..FilterSpec::default()
    };
    let by_gender = filtered_view(employees, &women);
    assert_eq!(by_gender.len(), 1);
    assert_eq!(by_gender[0].full_name, "Jane Doe");

    // Order preserved from the input collection.
    let all = filtered_view(employees, &FilterSpec::default());
    let ids: Vec<_> = all.iter().map(|e| e.id.as_ref()).collect();
    assert_eq!(ids, vec!["EMP001", "EMP002", "EMP003"]);
}

#[test]
fn stats_ignore_any_active_filter() {
    let repository = Repository::open(MemoryStore::new()).unwrap();
    let employees = repository.employees();

    let counts = stats(employees);
    assert_eq!(counts.total, 3);
    assert_eq!(counts.active, 2);
    assert_eq!(counts.inactive, 1);

    // A restrictive view leaves the aggregate counts untouched.
    let spec = FilterSpec {
        search: "jane".to_string(),
        ..FilterSpec::default()
    };
    assert_eq!(filtered_view(employees, &spec).len(), 1);
    assert_eq!(stats(employees), counts);
}

#[test]
fn export_covers_exactly_the_filtered_rows() {
    let repository = Repository::open(MemoryStore::new()).unwrap();
    let spec = FilterSpec {
        status: StatusFilter::Active,
        ..FilterSpec::default()
    };
    let view = filtered_view(repository.employees(), &spec);

    let csv = to_csv(view.iter().copied());
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "ID,Full Name,Gender,DOB,State,Status");
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[1],
        "EMP001,Jane Doe,Female,1992-05-15,California,Active"
    );
    assert_eq!(lines[2], "EMP003,Alex Rivera,Other,1995-02-10,Texas,Active");
}

#[test]
fn session_lifecycle_persists_and_clears() {
    let mut gate = SessionGate::open(MemoryStore::new()).unwrap();
    assert!(gate.current().is_none());

    let session = gate.login("Dana", "dana@example.com").unwrap();
    assert_eq!(session.name, "Dana");
    assert!(!session.id.is_empty());
    assert!(gate.current().is_some());

    gate.logout().unwrap();
    assert!(gate.current().is_none());
}

#[test]
fn empty_login_inputs_take_the_fixed_defaults() {
    let mut gate = SessionGate::open(MemoryStore::new()).unwrap();
    let session = gate.login("", "  ").unwrap();
    assert_eq!(session.name, DEFAULT_NAME);
    assert_eq!(session.email, DEFAULT_EMAIL);
}

#[test]
fn gate_restores_persisted_session() {
    let mut store = MemoryStore::new();
    store
        .save(
            AUTH_USER_KEY,
            &serde_json::json!({ "id": "123", "name": "Dana", "email": "dana@example.com" }),
        )
        .unwrap();

    let gate = SessionGate::open(store).unwrap();
    assert_eq!(gate.current().unwrap().name, "Dana");
}
