use std::sync::Arc;

use crate::error::{Error, Result};
use crate::model::{
    election::Election,
    sort::{SortBy, SortDirection},
};
use crate::store::ElectionStore;

/// A validated request for one page of open elections.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ListQuery {
    page: u32,
    items_per_page: u32,
    sort_by: SortBy,
    sort_direction: SortDirection,
}

impl ListQuery {
    /// Both `page` and `items_per_page` count from one.
    pub fn new(
        page: i64,
        items_per_page: i64,
        sort_by: SortBy,
        sort_direction: SortDirection,
    ) -> Result<Self> {
        let page = u32::try_from(page)
            .ok()
            .filter(|&page| page >= 1)
            .ok_or_else(|| {
                Error::invalid_argument(format!("page must be at least 1, got {page}"))
            })?;
        let items_per_page = u32::try_from(items_per_page)
            .ok()
            .filter(|&n| n >= 1)
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "items_per_page must be at least 1, got {items_per_page}"
                ))
            })?;
        Ok(Self {
            page,
            items_per_page,
            sort_by,
            sort_direction,
        })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Number of sorted elections preceding this page.
    pub fn skip(&self) -> usize {
        let skip = u64::from(self.page - 1) * u64::from(self.items_per_page);
        usize::try_from(skip).unwrap_or(usize::MAX)
    }
}

/// Answers listing requests from snapshots of the store. Never writes.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    store: ElectionStore,
}

impl QueryEngine {
    pub fn new(store: ElectionStore) -> Self {
        Self { store }
    }

    /// Sort every open election as requested and cut out the requested page.
    ///
    /// The sort is stable over the snapshot's insertion order, so elections
    /// that tie on the sort key come out in the order they were commenced.
    /// A page past the end is empty.
    pub fn list(&self, query: &ListQuery) -> Vec<Arc<Election>> {
        let mut elections = self.store.snapshot();
        elections.sort_by(|a, b| query.sort_direction.apply(query.sort_by.compare(a, b)));
        elections
            .into_iter()
            .skip(query.skip())
            .take(query.items_per_page as usize)
            .collect()
    }
}
