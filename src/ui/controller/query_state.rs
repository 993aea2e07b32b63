use crate::domain::entities::query::{SortDirection, SortKey, UserQuery, DEFAULT_PER_PAGE};

/// Quiet period after the last keystroke before a search navigates.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

pub const PER_PAGE_CHOICES: [i64; 3] = [5, 10, 15];

/// Handle for one armed debounce timer. A ticket commits only while it
/// is still the newest one; every later keystroke invalidates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Trailing debounce for the search box.
///
/// `input` records the pending text and arms a ticket; after the quiet
/// period the timer calls `try_commit`, which fires only if the ticket
/// was not superseded and the pending text differs from the last
/// applied filter. The applied value is the comparison baseline, so
/// typing back to the server-side value never re-navigates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDebounce {
    generation: u64,
    pending: String,
    applied: String,
}

impl SearchDebounce {
    pub fn input(&mut self, text: &str) -> DebounceTicket {
        self.generation += 1;
        self.pending = text.to_string();
        DebounceTicket(self.generation)
    }

    /// Returns the search term to navigate with, or `None` when the
    /// ticket was superseded or the value is already applied.
    pub fn try_commit(&mut self, ticket: DebounceTicket) -> Option<String> {
        if ticket.0 != self.generation {
            return None;
        }
        if self.pending == self.applied {
            return None;
        }
        self.applied = self.pending.clone();
        Some(self.applied.clone())
    }

    /// Cancels any armed ticket and forces the applied baseline, used
    /// by clear-filters and other immediate navigations.
    pub fn reset(&mut self, applied: &str) {
        self.generation += 1;
        self.pending = applied.to_string();
        self.applied = applied.to_string();
    }

    pub fn applied(&self) -> &str {
        &self.applied
    }
}

/// Sort and page-window state for the users list. Search text lives in
/// [`SearchDebounce`] since only the applied value belongs to a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub sort_key: SortKey,
    pub direction: SortDirection,
    pub page: i64,
    pub per_page: i64,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            sort_key: SortKey::CreatedAt,
            direction: SortDirection::Descending,
            page: 0,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl QueryState {
    /// Repeated clicks on the active column flip the direction; a new
    /// column always starts ascending. Either way the window snaps back
    /// to the first page.
    pub fn set_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.direction = self.direction.toggled();
        } else {
            self.sort_key = key;
            self.direction = SortDirection::Ascending;
        }
        self.page = 0;
    }

    pub fn set_per_page(&mut self, per_page: i64) {
        self.per_page = per_page.max(1);
        self.page = 0;
    }

    pub fn set_page(&mut self, page: i64) {
        self.page = page.max(0);
    }

    /// Back to the defaults: newest-first on the creation timestamp.
    pub fn clear(&mut self) {
        let per_page = self.per_page;
        *self = QueryState::default();
        self.per_page = per_page;
    }

    pub fn to_query(&self, search: &str) -> UserQuery {
        UserQuery {
            search: search.to_string(),
            sort_key: self.sort_key,
            direction: self.direction,
            page: self.page,
            per_page: self.per_page,
        }
    }
}
