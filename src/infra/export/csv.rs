use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::user::User;

/// Writes the selected users to a CSV file the way the bulk-export
/// action hands them over: header row first, one record per user.
pub fn write_users_csv(csv_path: &Path, users: &[User]) -> Result<usize> {
    let mut writer = csv::Writer::from_path(csv_path)
        .with_context(|| format!("failed to create csv: {}", csv_path.display()))?;

    writer
        .write_record(["ID", "Name", "Email", "Joined"])
        .context("failed to write csv header")?;

    for user in users {
        writer
            .write_record([
                user.id.0.to_string().as_str(),
                user.name.as_str(),
                user.email.as_str(),
                user.created_at.as_str(),
            ])
            .with_context(|| format!("failed to write csv record for user #{}", user.id))?;
    }

    writer.flush().context("failed to flush csv")?;
    Ok(users.len())
}
