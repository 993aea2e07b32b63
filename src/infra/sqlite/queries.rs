use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params, types::Value};

use crate::domain::entities::query::UserQuery;
use crate::domain::entities::user::{User, UserId};
use crate::infra::sqlite::schema::open_connection;

pub fn insert_user(
    db_path: &Path,
    name: &str,
    email: &str,
    password_digest: &str,
) -> Result<i64> {
    let conn = open_connection(db_path)?;
    conn.execute(
        "INSERT INTO user(name, email, password_digest) VALUES (?1, ?2, ?3)",
        params![name, email, password_digest],
    )
    .with_context(|| format!("failed to insert user: {email}"))?;
    Ok(conn.last_insert_rowid())
}

pub fn email_exists(db_path: &Path, email: &str) -> Result<bool> {
    let conn = open_connection(db_path)?;
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM user WHERE email = ?1",
            params![email],
            |row| row.get(0),
        )
        .context("failed to query email existence")?;
    Ok(count > 0)
}

pub fn find_user(db_path: &Path, user_id: i64) -> Result<Option<User>> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare("SELECT id, name, email, created_at FROM user WHERE id = ?1")
        .context("failed to prepare user lookup")?;

    let mut rows = stmt
        .query_map(params![user_id], map_user_row)
        .context("failed to query user")?;

    match rows.next() {
        Some(user) => Ok(Some(user.context("failed to read user row")?)),
        None => Ok(None),
    }
}

/// Fetches one page of users matching the query. The search term is
/// matched against name and email; ordering always carries an `id`
/// tiebreak so pages are stable across reloads.
pub fn query_page(db_path: &Path, query: &UserQuery) -> Result<(Vec<User>, i64)> {
    if query.per_page <= 0 {
        anyhow::bail!("per_page must be greater than zero")
    }

    let conn = open_connection(db_path)?;

    let term = query.search.trim();
    let (where_sql, mut filter_params) = if term.is_empty() {
        (String::new(), Vec::<Value>::new())
    } else {
        let pattern = format!("%{term}%");
        (
            "WHERE name LIKE ?1 OR email LIKE ?1".to_string(),
            vec![Value::Text(pattern)],
        )
    };

    let count_sql = format!("SELECT COUNT(*) FROM user {where_sql}");
    let total: i64 = conn
        .query_row(
            &count_sql,
            rusqlite::params_from_iter(filter_params.iter().cloned()),
            |row| row.get(0),
        )
        .context("failed to query filtered user count")?;

    let offset = query.page.max(0) * query.per_page;
    let rows_sql = format!(
        "SELECT id, name, email, created_at
         FROM user
         {where_sql}
         ORDER BY {column} {direction}, id ASC
         LIMIT ? OFFSET ?",
        column = query.sort_key.column(),
        direction = query.direction.sql(),
    );
    filter_params.push(Value::Integer(query.per_page));
    filter_params.push(Value::Integer(offset));

    let mut stmt = conn
        .prepare(&rows_sql)
        .context("failed to prepare user page query")?;
    let users = stmt
        .query_map(rusqlite::params_from_iter(filter_params), map_user_row)
        .context("failed to query user page")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to collect user page")?;

    Ok((users, total))
}

pub fn delete_user(db_path: &Path, user_id: i64) -> Result<()> {
    let conn = open_connection(db_path)?;
    let affected = conn
        .execute("DELETE FROM user WHERE id = ?1", params![user_id])
        .with_context(|| format!("failed to delete user #{user_id}"))?;
    if affected == 0 {
        anyhow::bail!("user #{user_id} not found")
    }
    Ok(())
}

/// Batched delete. Runs in one transaction: if any id in the batch is
/// missing, nothing is deleted.
pub fn delete_users(db_path: &Path, user_ids: &[UserId]) -> Result<()> {
    let mut conn = open_connection(db_path)?;
    let tx = conn
        .transaction()
        .context("failed to start bulk delete transaction")?;

    {
        let mut delete_stmt = tx
            .prepare("DELETE FROM user WHERE id = ?1")
            .context("failed to prepare bulk delete")?;
        for user_id in user_ids {
            let affected = delete_stmt
                .execute(params![user_id.0])
                .with_context(|| format!("failed to delete user #{user_id}"))?;
            if affected == 0 {
                anyhow::bail!("user #{user_id} not found; batch rolled back")
            }
        }
    }

    tx.commit().context("failed to commit bulk delete")?;
    Ok(())
}

fn map_user_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: UserId(row.get(0)?),
        name: row.get(1)?,
        email: row.get(2)?,
        created_at: row.get(3)?,
    })
}
