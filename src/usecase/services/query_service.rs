use std::sync::Arc;

use crate::domain::entities::query::{PageLink, UserPage, UserQuery};
use crate::domain::entities::user::{User, UserId};
use crate::usecase::ports::repo::{RepoError, UserRepository};

pub struct QueryService {
    repo: Arc<dyn UserRepository>,
}

impl QueryService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Loads one result page. If the requested page fell off the end of
    /// the collection (rows deleted since the last load), the last
    /// non-empty page is fetched instead.
    pub fn list_users(&self, query: &UserQuery) -> Result<UserPage, RepoError> {
        let (users, total) = self.repo.query_page(query)?;

        if users.is_empty() && total > 0 && query.page > 0 {
            let last_page = page_count(total, query.per_page);
            let mut clamped = query.clone();
            clamped.page = last_page - 1;
            let (users, total) = self.repo.query_page(&clamped)?;
            return Ok(build_user_page(&clamped, users, total));
        }

        Ok(build_user_page(query, users, total))
    }

    pub fn find_user(&self, id: UserId) -> Result<Option<User>, RepoError> {
        self.repo.find_user(id)
    }
}

fn page_count(total: i64, per_page: i64) -> i64 {
    let per_page = per_page.max(1);
    ((total + per_page - 1) / per_page).max(1)
}

/// Assembles the pagination metadata the index view renders: the
/// "Showing X to Y of Z results" counters and the Previous / numbered /
/// Next link row.
pub fn build_user_page(query: &UserQuery, users: Vec<User>, total: i64) -> UserPage {
    let per_page = query.per_page.max(1);
    let page = query.page.max(0);
    let last_page = page_count(total, per_page);

    let (from, to) = if users.is_empty() {
        (0, 0)
    } else {
        (page * per_page + 1, page * per_page + users.len() as i64)
    };

    let mut links = Vec::with_capacity(last_page as usize + 2);
    links.push(PageLink {
        page: (page > 0).then(|| page - 1),
        label: "Previous".to_string(),
        active: false,
    });
    for target in 0..last_page {
        links.push(PageLink {
            page: Some(target),
            label: (target + 1).to_string(),
            active: target == page,
        });
    }
    links.push(PageLink {
        page: (page + 1 < last_page).then(|| page + 1),
        label: "Next".to_string(),
        active: false,
    });

    UserPage {
        users,
        page,
        per_page,
        last_page,
        total,
        from,
        to,
        links,
    }
}
