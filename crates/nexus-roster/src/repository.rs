//! The employee repository: authoritative collection plus persistence.

use crate::error::RosterError;
use chrono::{SecondsFormat, Utc};
use nexus_model::{next_employee_id, seed_employees, validate_draft, Employee, EmployeeDraft, Gender};
use nexus_store::{RecordStore, StoreError};

/// Store key holding the employee collection.
pub const EMPLOYEES_KEY: &str = "nexus_employees";

/// Owns the authoritative in-memory employee collection.
///
/// The collection is an ordered sequence, newest first: new records are
/// prepended. Every mutating operation persists the entire collection
/// synchronously before returning. On a failed save the in-memory
/// mutation stays applied and the error propagates; the last
/// successfully persisted collection remains in the store.
pub struct Repository<S: RecordStore> {
    store: S,
    employees: Vec<Employee>,
}

impl<S: RecordStore> Repository<S> {
    /// Opens the repository, loading the persisted collection or falling
    /// back to the seed roster.
    ///
    /// A collection that is missing or fails to deserialize counts as
    /// absent. The seed roster is persisted immediately so a fresh data
    /// directory is populated after the first open.
    pub fn open(store: S) -> Result<Self, StoreError> {
        let loaded = store
            .load(EMPLOYEES_KEY)?
            .and_then(|value| serde_json::from_value::<Vec<Employee>>(value).ok());

        match loaded {
            Some(employees) => Ok(Self { store, employees }),
            None => {
                let mut repository = Self {
                    store,
                    employees: seed_employees(),
                };
                repository.persist()?;
                Ok(repository)
            }
        }
    }

    /// Current collection snapshot, newest first.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Creates a new employee from a validated draft.
    ///
    /// Assigns the next unique id, stamps `createdAt`, defaults
    /// `isActive` to true when the draft leaves it unset, prepends the
    /// record, and persists. Returns the created record.
    pub fn create(&mut self, draft: EmployeeDraft) -> Result<&Employee, RosterError> {
        validate_draft(&draft).map_err(RosterError::Invalid)?;

        let employee = Employee {
            id: next_employee_id(&self.employees),
            full_name: draft.full_name,
            gender: draft.gender.unwrap_or(Gender::Male),
            dob: draft.dob,
            profile_image: draft.profile_image,
            state: draft.state,
            is_active: draft.is_active.unwrap_or(true),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        self.employees.insert(0, employee);
        self.persist()?;
        Ok(&self.employees[0])
    }

    /// Merges a validated draft into the record matching `id`, leaving
    /// `id` and `createdAt` untouched.
    ///
    /// Returns `Ok(false)` without persisting if no record matches.
    pub fn update(&mut self, id: &str, draft: EmployeeDraft) -> Result<bool, RosterError> {
        validate_draft(&draft).map_err(RosterError::Invalid)?;

        let Some(employee) = self.employees.iter_mut().find(|e| e.id.as_ref() == id) else {
            return Ok(false);
        };
        employee.full_name = draft.full_name;
        if let Some(gender) = draft.gender {
            employee.gender = gender;
        }
        employee.dob = draft.dob;
        employee.profile_image = draft.profile_image;
        employee.state = draft.state;
        if let Some(is_active) = draft.is_active {
            employee.is_active = is_active;
        }
        self.persist()?;
        Ok(true)
    }

    /// Removes the record matching `id`. Permanent; there is no undo.
    ///
    /// Returns `Ok(false)` without persisting if no record matches.
    pub fn delete(&mut self, id: &str) -> Result<bool, RosterError> {
        let before = self.employees.len();
        self.employees.retain(|e| e.id.as_ref() != id);
        if self.employees.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Flips `isActive` on the record matching `id`.
    ///
    /// Returns `Ok(false)` without persisting if no record matches.
    pub fn toggle_active(&mut self, id: &str) -> Result<bool, RosterError> {
        let Some(employee) = self.employees.iter_mut().find(|e| e.id.as_ref() == id) else {
            return Ok(false);
        };
        employee.is_active = !employee.is_active;
        self.persist()?;
        Ok(true)
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let value = serde_json::to_value(&self.employees)?;
        self.store.save(EMPLOYEES_KEY, &value)
    }
}
