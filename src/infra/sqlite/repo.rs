use std::path::PathBuf;

use crate::domain::entities::query::UserQuery;
use crate::domain::entities::user::{User, UserId};
use crate::infra::sqlite::queries::{
    delete_user, delete_users, email_exists, find_user, insert_user, query_page,
};
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::repo::{RepoError, UserRepository};

pub struct SqliteUserRepo {
    pub db_path: PathBuf,
}

impl UserRepository for SqliteUserRepo {
    fn init(&self) -> Result<(), RepoError> {
        init_db(&self.db_path).map_err(|err| RepoError::Message(err.to_string()))
    }

    fn query_page(&self, query: &UserQuery) -> Result<(Vec<User>, i64), RepoError> {
        query_page(&self.db_path, query).map_err(|err| RepoError::Message(err.to_string()))
    }

    fn find_user(&self, id: UserId) -> Result<Option<User>, RepoError> {
        find_user(&self.db_path, id.0).map_err(|err| RepoError::Message(err.to_string()))
    }

    fn email_exists(&self, email: &str) -> Result<bool, RepoError> {
        email_exists(&self.db_path, email).map_err(|err| RepoError::Message(err.to_string()))
    }

    fn insert_user(
        &self,
        name: &str,
        email: &str,
        password_digest: &str,
    ) -> Result<UserId, RepoError> {
        let id = insert_user(&self.db_path, name, email, password_digest)
            .map_err(|err| RepoError::Message(err.to_string()))?;
        Ok(UserId(id))
    }

    fn delete_user(&self, id: UserId) -> Result<(), RepoError> {
        delete_user(&self.db_path, id.0).map_err(|err| RepoError::Message(err.to_string()))
    }

    fn delete_users(&self, ids: &[UserId]) -> Result<(), RepoError> {
        delete_users(&self.db_path, ids).map_err(|err| RepoError::Message(err.to_string()))
    }
}
