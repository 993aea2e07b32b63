use crate::domain::entities::query::UserQuery;
use crate::domain::entities::user::{User, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Message(String),
}

impl std::fmt::Display for RepoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepoError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for RepoError {}

/// The user directory behind the admin screen. The desktop build backs
/// this with SQLite; the view layer only ever talks to the services on
/// top of it.
pub trait UserRepository: Send + Sync {
    fn init(&self) -> Result<(), RepoError>;

    /// Returns one page of matching users plus the total match count.
    fn query_page(&self, query: &UserQuery) -> Result<(Vec<User>, i64), RepoError>;
    fn find_user(&self, id: UserId) -> Result<Option<User>, RepoError>;
    fn email_exists(&self, email: &str) -> Result<bool, RepoError>;

    fn insert_user(
        &self,
        name: &str,
        email: &str,
        password_digest: &str,
    ) -> Result<UserId, RepoError>;
    fn delete_user(&self, id: UserId) -> Result<(), RepoError>;
    /// Deletes the whole batch in one transaction; no partial deletes.
    fn delete_users(&self, ids: &[UserId]) -> Result<(), RepoError>;
}
