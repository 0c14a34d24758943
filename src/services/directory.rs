use crate::domain::query::{EmployeeFilterPatch, SortField, SortOrder};
use crate::dto::directory::{DirectoryPageData, PageRequest};
use crate::pagination::Paginated;
use crate::services::{ServiceError, ServiceResult};
use crate::store::EmployeeStore;

/// Loads the current page of the directory listing.
pub fn load_directory_page(store: &EmployeeStore) -> DirectoryPageData {
    let employees = Paginated::new(
        store.visible_slice().to_vec(),
        store.current_page(),
        store.filtered_count(),
        store.items_per_page(),
    );

    DirectoryPageData {
        employees,
        filter: store.filter().clone(),
        sort: store.sort(),
        departments: store.unique_departments(),
        roles: store.unique_roles(),
    }
}

/// Applies the free-text search and returns to the first page.
pub fn search(store: &mut EmployeeStore, text: &str) {
    store.set_search(text.trim());
}

pub fn apply_filters(store: &mut EmployeeStore, patch: EmployeeFilterPatch) {
    store.set_filters(patch);
}

pub fn clear_filters(store: &mut EmployeeStore) {
    store.clear_filters();
}

pub fn sort(store: &mut EmployeeStore, field: SortField, order: SortOrder) {
    store.set_sort(field, order);
}

/// Moves the pager. Out-of-range requests leave the current page unchanged.
pub fn change_page(store: &mut EmployeeStore, request: PageRequest) -> ServiceResult<usize> {
    let current = store.current_page();
    let target = match request {
        PageRequest::Number(page) => page,
        PageRequest::Next => current + 1,
        PageRequest::Previous => current.saturating_sub(1),
    };

    if store.set_page(target) {
        Ok(target)
    } else {
        log::debug!("Rejected page {target} of {}", store.total_pages());
        Err(ServiceError::PageOutOfRange(target))
    }
}

pub fn set_items_per_page(store: &mut EmployeeStore, items_per_page: usize) -> ServiceResult<()> {
    store.set_items_per_page(items_per_page)?;
    Ok(())
}
