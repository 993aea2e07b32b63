use std::collections::BTreeMap;
use std::sync::Arc;

use ring::digest;

use crate::domain::entities::user::{NewUser, UserId};
use crate::usecase::ports::repo::{RepoError, UserRepository};

/// Field name -> first failing rule message, rendered under the inputs
/// of the create form.
pub type FieldErrors = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateUserError {
    Validation(FieldErrors),
    Repo(RepoError),
}

impl std::fmt::Display for CreateUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateUserError::Validation(errors) => {
                write!(f, "validation failed for {} field(s)", errors.len())
            }
            CreateUserError::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CreateUserError {}

impl From<RepoError> for CreateUserError {
    fn from(err: RepoError) -> Self {
        CreateUserError::Repo(err)
    }
}

pub struct AdminService {
    repo: Arc<dyn UserRepository>,
}

impl AdminService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub fn create_user(&self, new_user: &NewUser) -> Result<UserId, CreateUserError> {
        let mut errors = validate_new_user(new_user);

        if !errors.contains_key("email") && self.repo.email_exists(new_user.email.trim())? {
            errors.insert("email", "The email has already been taken.".to_string());
        }

        if !errors.is_empty() {
            return Err(CreateUserError::Validation(errors));
        }

        let id = self.repo.insert_user(
            new_user.name.trim(),
            new_user.email.trim(),
            &password_digest(&new_user.password),
        )?;
        Ok(id)
    }

    pub fn delete_user(&self, id: UserId) -> Result<(), RepoError> {
        self.repo.delete_user(id)
    }

    /// One batched delete for the whole id list; the repository applies
    /// it all-or-nothing.
    pub fn delete_users(&self, ids: &[UserId]) -> Result<(), RepoError> {
        if ids.is_empty() {
            return Ok(());
        }
        self.repo.delete_users(ids)
    }
}

pub fn validate_new_user(new_user: &NewUser) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if new_user.name.trim().is_empty() {
        errors.insert("name", "The name field is required.".to_string());
    }

    let email = new_user.email.trim();
    if email.is_empty() {
        errors.insert("email", "The email field is required.".to_string());
    } else if !is_plausible_email(email) {
        errors.insert("email", "The email must be a valid email address.".to_string());
    }

    if new_user.password.is_empty() {
        errors.insert("password", "The password field is required.".to_string());
    } else if new_user.password.chars().count() < 8 {
        errors.insert(
            "password",
            "The password must be at least 8 characters.".to_string(),
        );
    } else if new_user.password != new_user.password_confirmation {
        errors.insert(
            "password",
            "The password confirmation does not match.".to_string(),
        );
    }

    errors
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

pub fn password_digest(password: &str) -> String {
    let digest = digest::digest(&digest::SHA256, password.as_bytes());
    digest
        .as_ref()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
