//! Search/category filtering and page slicing over an in-memory collection
//!
//! Everything here is a pure function of its inputs: the same collection,
//! term, category, page and page size always produce the same view.

use crate::entity::Entity;
use crate::types::Category;

/// The inputs that select a visible page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<'q> {
    pub search: &'q str,
    pub category: Option<Category>,
    pub page: usize,
    pub page_size: usize,
}

/// One page of a filtered collection
#[derive(Debug, Clone)]
pub struct PageView<'a, T> {
    /// Entities on the requested page, in collection order
    pub items: Vec<&'a T>,
    /// The requested page (1-based)
    pub page: usize,
    /// Number of pages, never less than 1
    pub page_count: usize,
    /// Size of the filtered set across all pages
    pub total: usize,
}

impl<T> PageView<'_, T> {
    /// True when nothing matched the filter (as opposed to loading/error)
    pub fn is_empty_result(&self) -> bool {
        self.total == 0
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Check one entity against the search term and category filter.
///
/// `search_lower` must already be lowercased.
fn matches<T: Entity>(entity: &T, search_lower: &str, category: Option<Category>) -> bool {
    let title_matches =
        search_lower.is_empty() || entity.title().to_lowercase().contains(search_lower);
    let category_matches = match category {
        None => true,
        Some(c) => entity.category() == Some(c.as_str()),
    };
    title_matches && category_matches
}

/// Entities whose title contains `search` (case-insensitively) and whose
/// category equals `category` when one is set
pub fn filter_entities<'a, T: Entity>(
    collection: &'a [T],
    search: &str,
    category: Option<Category>,
) -> Vec<&'a T> {
    let search_lower = search.to_lowercase();
    collection
        .iter()
        .filter(|e| matches(*e, &search_lower, category))
        .collect()
}

/// Number of pages for `total` items, with a minimum of one page
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Filter the collection and slice out the requested page.
///
/// A page beyond the last one yields an empty slice rather than an error.
pub fn paginate<'a, T: Entity>(collection: &'a [T], query: &ListQuery<'_>) -> PageView<'a, T> {
    let page_size = query.page_size.max(1);
    let page = query.page.max(1);
    let filtered = filter_entities(collection, query.search, query.category);
    let total = filtered.len();

    let items = filtered
        .into_iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .collect();

    PageView {
        items,
        page,
        page_count: page_count(total, page_size),
        total,
    }
}
