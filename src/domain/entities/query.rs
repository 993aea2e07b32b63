use crate::domain::entities::user::User;

pub const DEFAULT_PER_PAGE: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Email,
    CreatedAt,
}

impl SortKey {
    pub fn column(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Email => "email",
            SortKey::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn sql(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

/// One fully materialized list request: filter, order, page window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery {
    pub search: String,
    pub sort_key: SortKey,
    pub direction: SortDirection,
    pub page: i64,
    pub per_page: i64,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_key: SortKey::CreatedAt,
            direction: SortDirection::Descending,
            page: 0,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// Zero-based target page. `None` renders the link disabled.
    pub page: Option<i64>,
    pub label: String,
    pub active: bool,
}

/// One server-delivered slice of the filtered, sorted user collection.
/// Always replaced wholesale; the view never patches it in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPage {
    pub users: Vec<User>,
    pub page: i64,
    pub per_page: i64,
    pub last_page: i64,
    pub total: i64,
    pub from: i64,
    pub to: i64,
    pub links: Vec<PageLink>,
}

impl UserPage {
    pub fn user_ids(&self) -> Vec<crate::domain::entities::user::UserId> {
        self.users.iter().map(|user| user.id).collect()
    }
}
