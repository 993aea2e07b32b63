use std::collections::BTreeSet;

use crate::domain::entities::user::UserId;

/// Row selection for the users table.
///
/// Selected ids always reference rows of the page that was on screen
/// when they were picked: `sync` clears everything as soon as the
/// result page revision changes, so a selection can never survive a
/// reload, re-sort, re-filter, or post-delete refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<UserId>,
    select_all: bool,
    revision: u64,
}

impl Selection {
    /// Individual toggles leave the select-all flag alone; it is a
    /// one-shot action, not a maintained truth.
    pub fn toggle(&mut self, id: UserId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    pub fn set_all(&mut self, flag: bool, page_ids: &[UserId]) {
        self.select_all = flag;
        self.ids.clear();
        if flag {
            self.ids.extend(page_ids.iter().copied());
        }
    }

    /// Called with the revision of every freshly loaded result page.
    pub fn sync(&mut self, revision: u64) {
        if revision != self.revision {
            self.revision = revision;
            self.ids.clear();
            self.select_all = false;
        }
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn select_all(&self) -> bool {
        self.select_all
    }

    pub fn ids(&self) -> Vec<UserId> {
        self.ids.iter().copied().collect()
    }
}
