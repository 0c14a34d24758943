//! In-memory employee record store.
//!
//! [`EmployeeStore`] owns the authoritative record list together with the
//! active filter, sort and pagination state. The filtered and sorted view is
//! rebuilt in full after every mutation or criteria change; the visible slice
//! is then a window into that view.

use std::collections::HashSet;

use chrono::{NaiveDateTime, Utc};
use thiserror::Error;

use crate::DEFAULT_ITEMS_PER_PAGE;
use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::domain::query::{EmployeeFilter, EmployeeFilterPatch, SortField, SortOrder, SortSpec};
use crate::domain::statistics::EmployeeStatistics;
use crate::domain::types::EmployeeId;
use crate::pagination::{PaginationSummary, total_pages};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate employee id {0} in seed data")]
    DuplicateId(EmployeeId),

    #[error("items per page must be greater than zero")]
    InvalidPageSize,

    #[error("no employee id left after {0}")]
    IdSpaceExhausted(EmployeeId),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone)]
pub struct EmployeeStore {
    employees: Vec<Employee>,
    filtered: Vec<Employee>,
    next_id: EmployeeId,
    filter: EmployeeFilter,
    sort: SortSpec,
    current_page: usize,
    items_per_page: usize,
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self {
            employees: Vec::new(),
            filtered: Vec::new(),
            next_id: EmployeeId::FIRST,
            filter: EmployeeFilter::default(),
            sort: SortSpec::default(),
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

impl EmployeeStore {
    /// Builds a store loaded with `seed`.
    pub fn new(seed: Vec<Employee>) -> StoreResult<Self> {
        let mut store = Self::default();
        store.initialize(seed)?;
        Ok(store)
    }

    /// Replaces all records and resets filter, sort and page to their defaults.
    ///
    /// The page size is kept. Seed ids must be unique and below `i32::MAX`;
    /// on error nothing changes.
    pub fn initialize(&mut self, seed: Vec<Employee>) -> StoreResult<()> {
        let mut seen = HashSet::with_capacity(seed.len());
        for employee in &seed {
            if !seen.insert(employee.id) {
                return Err(StoreError::DuplicateId(employee.id));
            }
        }

        let next_id = match seed.iter().map(|employee| employee.id).max() {
            Some(max) => max.next().ok_or(StoreError::IdSpaceExhausted(max))?,
            None => EmployeeId::FIRST,
        };

        self.next_id = next_id;
        self.employees = seed;
        self.filter = EmployeeFilter::default();
        self.sort = SortSpec::default();
        self.current_page = 1;
        self.refresh();

        log::debug!(
            "Store initialized with {} employees, next id {}",
            self.employees.len(),
            self.next_id
        );
        Ok(())
    }

    /// Rebuilds the filtered and sorted view from the full record set.
    fn refresh(&mut self) {
        let mut result: Vec<Employee> = self
            .employees
            .iter()
            .filter(|employee| self.filter.matches(employee))
            .cloned()
            .collect();
        self.sort.sort(&mut result);
        self.filtered = result;
    }

    /// Inserts a new record under a fresh id and returns it.
    ///
    /// Callers validate `new_employee` beforehand; nothing is checked here.
    /// Fails without changes once the id range is used up.
    pub fn add(&mut self, new_employee: NewEmployee) -> StoreResult<Employee> {
        let id = self.next_id;
        self.next_id = id.next().ok_or(StoreError::IdSpaceExhausted(id))?;

        let employee = new_employee.into_employee(id, now());
        self.employees.insert(0, employee.clone());
        self.current_page = 1;

        // Sorting by id stays pinned to newest-first so the new record shows on top.
        if self.sort.field == SortField::Id {
            self.sort = SortSpec::newest_first();
        }

        self.refresh();
        log::debug!("Added employee {id}");
        Ok(employee)
    }

    /// Overwrites the editable fields of record `id`. `None` when absent.
    pub fn update(&mut self, id: EmployeeId, updates: &UpdateEmployee) -> Option<Employee> {
        let employee = self.employees.iter_mut().find(|e| e.id == id)?;
        updates.apply_to(employee, now());
        let updated = employee.clone();

        self.refresh();
        log::debug!("Updated employee {id}");
        Some(updated)
    }

    /// Deletes record `id` and returns it. `None` when absent.
    pub fn remove(&mut self, id: EmployeeId) -> Option<Employee> {
        let index = self.employees.iter().position(|e| e.id == id)?;
        let removed = self.employees.remove(index);
        self.refresh();

        let total_pages = self.total_pages();
        if self.current_page > total_pages && total_pages > 0 {
            self.current_page = total_pages;
        }

        log::debug!("Removed employee {id}");
        Some(removed)
    }

    pub fn set_search(&mut self, text: &str) {
        self.filter.set_search(text);
        self.current_page = 1;
        self.refresh();
    }

    pub fn set_filters(&mut self, patch: EmployeeFilterPatch) {
        self.filter.apply(patch);
        self.current_page = 1;
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.filter = EmployeeFilter::default();
        self.current_page = 1;
        self.refresh();
    }

    /// Changes the ordering. The current page is kept.
    pub fn set_sort(&mut self, field: SortField, order: SortOrder) {
        self.sort = SortSpec::new(field, order);
        self.refresh();
    }

    pub fn reset_sort(&mut self) {
        self.set_sort(SortField::Id, SortOrder::Desc);
    }

    /// Moves to `page` when it lies in `1..=total_pages`; returns whether it did.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages() {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) -> StoreResult<()> {
        if items_per_page == 0 {
            return Err(StoreError::InvalidPageSize);
        }
        self.items_per_page = items_per_page;
        self.current_page = 1;
        Ok(())
    }

    /// Records on the current page, after filtering and sorting.
    pub fn visible_slice(&self) -> &[Employee] {
        let len = self.filtered.len();
        let start = ((self.current_page - 1) * self.items_per_page).min(len);
        let end = (start + self.items_per_page).min(len);
        &self.filtered[start..end]
    }

    /// The whole filtered and sorted sequence, across all pages.
    pub fn filtered(&self) -> &[Employee] {
        &self.filtered
    }

    pub fn pagination_summary(&self) -> PaginationSummary {
        PaginationSummary::new(self.filtered.len(), self.current_page, self.items_per_page)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.items_per_page)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn filter(&self) -> &EmployeeFilter {
        &self.filter
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    /// Id the next added record will receive.
    pub fn next_id(&self) -> EmployeeId {
        self.next_id
    }

    /// Every record, in store order (most recently added first).
    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn statistics(&self) -> EmployeeStatistics {
        EmployeeStatistics::collect(&self.employees)
    }

    pub fn unique_departments(&self) -> Vec<String> {
        self.unique_values(|e| &e.department)
    }

    pub fn unique_roles(&self) -> Vec<String> {
        self.unique_values(|e| &e.role)
    }

    fn unique_values(&self, value: impl Fn(&Employee) -> &String) -> Vec<String> {
        let mut values: Vec<String> = self.employees.iter().map(value).cloned().collect();
        values.sort();
        values.dedup();
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Vec<Employee> {
        vec![
            Employee::new(EmployeeId::new(1).unwrap(), "Alice", "Smith", "alice@x.com", "Eng", "Dev"),
            Employee::new(EmployeeId::new(2).unwrap(), "Bob", "Brown", "bob@x.com", "Sales", "Rep"),
        ]
    }

    fn carl() -> NewEmployee {
        NewEmployee::new("Carl", "Jones", "CARL@X.com", "Eng", "Dev")
    }

    #[test]
    fn empty_store_starts_ids_at_one() {
        let mut store = EmployeeStore::default();
        assert_eq!(store.next_id(), EmployeeId::FIRST);
        assert_eq!(store.add(carl()).unwrap().id.get(), 1);
    }

    #[test]
    fn next_id_follows_the_largest_seed_id() {
        let mut seed = seed();
        seed.push(Employee::new(EmployeeId::new(9).unwrap(), "Zed", "Z", "z@x.com", "Ops", "Lead"));
        let store = EmployeeStore::new(seed).unwrap();
        assert_eq!(store.next_id().get(), 10);
    }

    #[test]
    fn seed_at_max_id_is_rejected() {
        let mut store = EmployeeStore::new(seed()).unwrap();
        let last = EmployeeId::new(i32::MAX).unwrap();
        let seed = vec![Employee::new(last, "Max", "Out", "max@x.com", "Ops", "Lead")];

        assert_eq!(
            store.initialize(seed),
            Err(StoreError::IdSpaceExhausted(last))
        );
        assert_eq!(store.len(), 2);
        assert_eq!(store.next_id().get(), 3);
    }

    #[test]
    fn add_fails_once_ids_run_out() {
        let last = EmployeeId::new(i32::MAX - 1).unwrap();
        let mut store =
            EmployeeStore::new(vec![Employee::new(last, "Max", "Out", "max@x.com", "Ops", "Lead")])
                .unwrap();

        assert_eq!(
            store.add(carl()),
            Err(StoreError::IdSpaceExhausted(EmployeeId::new(i32::MAX).unwrap()))
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.next_id().get(), i32::MAX);
    }

    #[test]
    fn duplicate_seed_ids_are_rejected() {
        let mut seed = seed();
        seed.push(Employee::new(EmployeeId::new(2).unwrap(), "Dup", "D", "d@x.com", "Ops", "Lead"));
        assert_eq!(
            EmployeeStore::new(seed).unwrap_err(),
            StoreError::DuplicateId(EmployeeId::new(2).unwrap())
        );
    }

    #[test]
    fn add_assigns_fresh_id_and_shows_first() {
        let mut store = EmployeeStore::new(seed()).unwrap();
        let created = store.add(carl()).unwrap();

        assert_eq!(created.id.get(), 3);
        assert_eq!(created.email, "carl@x.com");
        assert!(created.created_at.is_some());
        assert_eq!(store.visible_slice()[0].id, created.id);
    }

    #[test]
    fn add_pins_id_sort_to_descending() {
        let mut store = EmployeeStore::new(seed()).unwrap();
        store.set_sort(SortField::Id, SortOrder::Asc);
        store.add(carl()).unwrap();
        assert_eq!(store.sort(), SortSpec::newest_first());

        store.set_sort(SortField::LastName, SortOrder::Asc);
        store.add(NewEmployee::new("Dana", "Adams", "dana@x.com", "Eng", "Dev")).unwrap();
        assert_eq!(store.sort(), SortSpec::new(SortField::LastName, SortOrder::Asc));
        assert_eq!(store.visible_slice()[0].last_name, "Adams");
    }

    #[test]
    fn add_resets_to_first_page() {
        let mut store = EmployeeStore::new(seed()).unwrap();
        store.set_items_per_page(1).unwrap();
        assert!(store.set_page(2));
        store.add(carl()).unwrap();
        assert_eq!(store.current_page(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut store = EmployeeStore::new(seed()).unwrap();
        let carl = store.add(carl()).unwrap();
        store.remove(carl.id).unwrap();
        let dana = store.add(NewEmployee::new("Dana", "Adams", "dana@x.com", "Eng", "Dev")).unwrap();
        assert_eq!(dana.id.get(), 4);
    }

    #[test]
    fn update_unknown_id_changes_nothing() {
        let mut store = EmployeeStore::new(seed()).unwrap();
        store.remove(EmployeeId::new(2).unwrap()).unwrap();
        let before = store.all().to_vec();

        let result = store.update(
            EmployeeId::new(2).unwrap(),
            &UpdateEmployee::new("Bobby", "Brown", "bob@x.com", "Sales", "Rep"),
        );

        assert!(result.is_none());
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn update_overwrites_fields_and_refreshes_view() {
        let mut store = EmployeeStore::new(seed()).unwrap();
        store.set_filters(EmployeeFilterPatch::default().department("Eng"));
        assert_eq!(store.filtered_count(), 1);

        let updated = store
            .update(
                EmployeeId::new(2).unwrap(),
                &UpdateEmployee::new(" Bob ", "Brown", " BOB@Y.com", "Eng", "Rep"),
            )
            .unwrap();

        assert_eq!(updated.first_name, "Bob");
        assert_eq!(updated.email, "bob@y.com");
        assert!(updated.updated_at.is_some());
        assert_eq!(store.filtered_count(), 2);
    }

    #[test]
    fn remove_clamps_current_page() {
        let mut store = EmployeeStore::new(seed()).unwrap();
        store.add(carl()).unwrap();
        store.set_items_per_page(1).unwrap();
        assert!(store.set_page(3));

        store.remove(EmployeeId::new(1).unwrap()).unwrap();

        assert_eq!(store.total_pages(), 2);
        assert_eq!(store.current_page(), 2);
        assert_eq!(store.visible_slice().len(), 1);
    }

    #[test]
    fn removing_the_last_record_leaves_an_empty_first_page() {
        let only = EmployeeId::FIRST;
        let mut store =
            EmployeeStore::new(vec![Employee::new(only, "Solo", "One", "solo@x.com", "Eng", "Dev")])
                .unwrap();

        store.remove(only).unwrap();

        assert_eq!(store.current_page(), 1);
        assert_eq!(store.total_pages(), 0);
        assert!(store.visible_slice().is_empty());
        assert_eq!(store.pagination_summary(), PaginationSummary::default());
        assert_eq!(store.add(carl()).unwrap().id.get(), 2);
    }

    #[test]
    fn remove_unknown_id_returns_none() {
        let mut store = EmployeeStore::new(seed()).unwrap();
        assert!(store.remove(EmployeeId::new(42).unwrap()).is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn set_page_rejects_out_of_range() {
        let mut store = EmployeeStore::new(seed()).unwrap();
        store.add(carl()).unwrap();
        store.set_items_per_page(1).unwrap();

        assert!(store.set_page(3));
        assert!(!store.set_page(4));
        assert!(!store.set_page(0));
        assert_eq!(store.current_page(), 3);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let mut store = EmployeeStore::new(seed()).unwrap();
        assert_eq!(store.set_items_per_page(0), Err(StoreError::InvalidPageSize));
        assert_eq!(store.items_per_page(), DEFAULT_ITEMS_PER_PAGE);
    }

    #[test]
    fn summary_is_zero_when_nothing_matches() {
        let mut store = EmployeeStore::new(seed()).unwrap();
        store.set_search("nobody");
        assert!(store.visible_slice().is_empty());
        assert_eq!(store.pagination_summary(), PaginationSummary::default());
        assert_eq!(store.total_pages(), 0);
    }

    #[test]
    fn clear_filters_resets_every_criterion() {
        let mut store = EmployeeStore::new(seed()).unwrap();
        store.set_search("ali");
        store.set_filters(EmployeeFilterPatch::default().role("Dev"));
        store.clear_filters();

        assert!(store.filter().is_empty());
        assert_eq!(store.filtered_count(), 2);
    }

    #[test]
    fn unique_values_are_sorted_and_distinct() {
        let mut store = EmployeeStore::new(seed()).unwrap();
        store.add(carl()).unwrap();
        assert_eq!(store.unique_departments(), vec!["Eng", "Sales"]);
        assert_eq!(store.unique_roles(), vec!["Dev", "Rep"]);
    }

    #[test]
    fn reinitialize_replaces_state() {
        let mut store = EmployeeStore::new(seed()).unwrap();
        store.set_search("alice");
        store.set_sort(SortField::Email, SortOrder::Asc);

        store.initialize(Vec::new()).unwrap();

        assert!(store.is_empty());
        assert!(store.filter().is_empty());
        assert_eq!(store.sort(), SortSpec::newest_first());
        assert_eq!(store.next_id(), EmployeeId::FIRST);
    }
}
