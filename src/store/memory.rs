//! # In-Memory Store
//!
//! The in-process [`StudentStore`] backing the server. Records live in a
//! `Vec` behind an `RwLock`, so storage order is insertion order — that is
//! the documented iteration order for the list endpoint. The netid
//! uniqueness check happens under the write lock, which closes the create
//! handler's check-then-act race at the storage layer.

use std::sync::RwLock;

use crate::model::Student;

use super::adapter::{StudentPatch, StudentStore};
use super::errors::{StoreError, StoreResult};
use super::filter::Filter;

/// In-memory student store
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Student>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with records. Test convenience.
    pub fn with_records(records: Vec<Student>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Vec<Student>>> {
        self.records
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Vec<Student>>> {
        self.records
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))
    }
}

impl StudentStore for MemoryStore {
    fn find_one(&self, filter: &Filter) -> StoreResult<Option<Student>> {
        let records = self.read()?;
        Ok(records.iter().find(|s| filter.matches(s)).cloned())
    }

    fn find_all(&self) -> StoreResult<Vec<Student>> {
        let records = self.read()?;
        Ok(records.clone())
    }

    fn insert(&self, student: Student) -> StoreResult<()> {
        let mut records = self.write()?;

        if records.iter().any(|s| s.net_id == student.net_id) {
            return Err(StoreError::DuplicateNetId(student.net_id));
        }

        records.push(student);
        Ok(())
    }

    fn update_one(&self, filter: &Filter, patch: &StudentPatch) -> StoreResult<()> {
        let mut records = self.write()?;

        let record = records
            .iter_mut()
            .find(|s| filter.matches(s))
            .ok_or(StoreError::NoMatch)?;

        patch.apply(record);
        Ok(())
    }

    fn remove_all(&self, filter: &Filter) -> StoreResult<u64> {
        let mut records = self.write()?;

        let before = records.len();
        records.retain(|s| !filter.matches(s));
        Ok((before - records.len()) as u64)
    }
}
