use std::path::Path;

use anyhow::Result;

use crate::domain::entities::user::User;
use crate::infra::export::csv::write_users_csv;

pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Writes the given users to a CSV file, returning how many rows
    /// were written. Read-only with respect to application state.
    pub fn export_users(&self, path: &Path, users: &[User]) -> Result<usize> {
        write_users_csv(path, users)
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}
