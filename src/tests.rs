use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, Connection};

use crate::domain::entities::query::{SortDirection, SortKey, UserQuery};
use crate::domain::entities::user::{NewUser, User, UserId};
use crate::infra::export::csv::write_users_csv;
use crate::infra::sqlite::queries::{
    delete_user, delete_users, email_exists, find_user, insert_user, query_page,
};
use crate::infra::sqlite::repo::SqliteUserRepo;
use crate::infra::sqlite::schema::init_db;
use crate::ui::controller::confirm::PendingDelete;
use crate::ui::controller::menu::{place_menu, MenuAlign, TriggerBounds};
use crate::ui::controller::query_state::{QueryState, SearchDebounce};
use crate::ui::controller::selection::Selection;
use crate::usecase::services::admin_service::{
    password_digest, validate_new_user, AdminService, CreateUserError,
};
use crate::usecase::services::query_service::{build_user_page, QueryService};
use crate::*;

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("dioxus-{prefix}-{nanos}"))
}

fn seed_user(db_path: &Path, name: &str, email: &str) -> i64 {
    insert_user(db_path, name, email, &password_digest("secret123"))
        .expect("seed insert should succeed")
}

fn set_created_at(db_path: &Path, user_id: i64, created_at: &str) {
    let conn = Connection::open(db_path).expect("should open sqlite db");
    conn.execute(
        "UPDATE user SET created_at = ?1 WHERE id = ?2",
        params![created_at, user_id],
    )
    .expect("should update created_at");
}

fn count_users(db_path: &Path) -> i64 {
    let conn = Connection::open(db_path).expect("should open sqlite db");
    conn.query_row("SELECT COUNT(*) FROM user", [], |row| row.get(0))
        .expect("user count query should succeed")
}

#[test]
fn debounce_commits_only_the_latest_ticket() {
    let mut debounce = SearchDebounce::default();

    let stale = debounce.input("a");
    let latest = debounce.input("ab");

    assert_eq!(
        debounce.try_commit(stale),
        None,
        "superseded ticket should not fire"
    );
    assert_eq!(
        debounce.try_commit(latest),
        Some("ab".to_string()),
        "latest ticket should fire with the full pending text"
    );
    assert_eq!(debounce.applied(), "ab");
}

#[test]
fn debounce_skips_commit_when_value_already_applied() {
    let mut debounce = SearchDebounce::default();

    let ticket = debounce.input("bob");
    assert_eq!(debounce.try_commit(ticket), Some("bob".to_string()));

    // typing back to the applied value must not re-navigate
    let ticket = debounce.input("bob");
    assert_eq!(debounce.try_commit(ticket), None);

    let ticket = debounce.input("");
    assert_eq!(
        debounce.try_commit(ticket),
        Some(String::new()),
        "clearing the box differs from the applied value and should fire"
    );
}

#[test]
fn debounce_reset_cancels_armed_ticket() {
    let mut debounce = SearchDebounce::default();

    let ticket = debounce.input("half-typed");
    debounce.reset("");

    assert_eq!(
        debounce.try_commit(ticket),
        None,
        "reset should invalidate the armed ticket"
    );
    assert_eq!(debounce.applied(), "");
}

#[test]
fn sort_toggle_flips_direction_on_repeated_clicks() {
    let mut query = QueryState::default();
    query.set_page(3);

    query.set_sort(SortKey::Name);
    assert_eq!(query.sort_key, SortKey::Name);
    assert_eq!(query.direction, SortDirection::Ascending);
    assert_eq!(query.page, 0, "sorting should snap back to the first page");

    query.set_sort(SortKey::Name);
    assert_eq!(query.direction, SortDirection::Descending);

    query.set_sort(SortKey::Email);
    assert_eq!(query.sort_key, SortKey::Email);
    assert_eq!(
        query.direction,
        SortDirection::Ascending,
        "a new column always starts ascending"
    );
}

#[test]
fn clear_restores_defaults_but_keeps_per_page() {
    let mut query = QueryState::default();
    query.set_per_page(5);
    query.set_sort(SortKey::Name);
    query.set_page(2);

    query.clear();

    assert_eq!(query.sort_key, SortKey::CreatedAt);
    assert_eq!(query.direction, SortDirection::Descending);
    assert_eq!(query.page, 0);
    assert_eq!(query.per_page, 5, "page size is not a filter");
}

#[test]
fn set_per_page_resets_page_and_floors_at_one() {
    let mut query = QueryState::default();
    query.set_page(4);

    query.set_per_page(0);

    assert_eq!(query.per_page, 1);
    assert_eq!(query.page, 0);
}

#[test]
fn selection_clears_when_page_revision_changes() {
    let mut selection = Selection::default();
    selection.toggle(UserId(1));
    selection.toggle(UserId(2));

    selection.sync(0);
    assert_eq!(selection.len(), 2, "same revision should keep the selection");

    selection.sync(1);
    assert!(
        selection.is_empty(),
        "a fresh result page must drop the old selection"
    );
    assert!(!selection.select_all());
}

#[test]
fn select_all_is_a_one_shot_not_a_maintained_truth() {
    let mut selection = Selection::default();
    let ids = [UserId(1), UserId(2), UserId(3)];

    selection.set_all(true, &ids);
    assert_eq!(selection.len(), 3);
    assert!(selection.select_all());

    selection.toggle(UserId(2));
    assert_eq!(selection.len(), 2);
    assert!(
        selection.select_all(),
        "individual toggles leave the header flag alone"
    );
    assert!(!selection.contains(UserId(2)));

    selection.set_all(false, &ids);
    assert!(selection.is_empty());
    assert!(!selection.select_all());
}

#[test]
fn bulk_delete_snapshots_the_selection_at_open() {
    let mut selection = Selection::default();
    selection.toggle(UserId(1));
    selection.toggle(UserId(2));

    let pending = PendingDelete::bulk(&selection).expect("non-empty selection should snapshot");

    selection.toggle(UserId(3));
    selection.toggle(UserId(1));

    assert_eq!(
        pending.count(),
        2,
        "the confirmed request carries what the user saw at open time"
    );
    match pending {
        PendingDelete::Bulk { ids } => assert_eq!(ids, vec![UserId(1), UserId(2)]),
        PendingDelete::One { .. } => panic!("bulk snapshot should be a bulk request"),
    }
}

#[test]
fn bulk_delete_requires_a_selection() {
    let selection = Selection::default();
    assert_eq!(PendingDelete::bulk(&selection), None);
}

#[test]
fn pending_delete_messages_name_their_target() {
    let one = PendingDelete::one(UserId(7), "Alice Johnson");
    assert_eq!(
        one.message(),
        "Are you sure you want to delete this user? (Alice Johnson)"
    );

    let mut selection = Selection::default();
    selection.toggle(UserId(1));
    selection.toggle(UserId(2));
    selection.toggle(UserId(3));
    let bulk = PendingDelete::bulk(&selection).expect("selection is not empty");
    assert_eq!(bulk.message(), "Delete 3 selected users?");
}

#[test]
fn menu_opens_below_its_trigger() {
    let trigger = TriggerBounds {
        left: 500.0,
        top: 120.0,
        width: 72.0,
        height: 24.0,
    };

    let placement = place_menu(trigger, 30.0, 1280.0, MenuAlign::Left);

    assert_eq!(placement.top, 174.0, "top is trigger bottom plus scroll");
    assert_eq!(placement.left, Some(500.0));
    assert_eq!(placement.right, None);
}

#[test]
fn right_aligned_menu_anchors_to_the_viewport_right_edge() {
    let trigger = TriggerBounds {
        left: 1100.0,
        top: 200.0,
        width: 72.0,
        height: 24.0,
    };

    let placement = place_menu(trigger, 0.0, 1280.0, MenuAlign::Right);

    assert_eq!(placement.top, 224.0);
    assert_eq!(placement.left, None);
    assert_eq!(
        placement.right,
        Some(108.0),
        "right offset is viewport width minus the trigger's right edge"
    );
    assert_eq!(placement.style(), "top: 224px; right: 108px;");
}

#[test]
fn build_user_page_counts_and_links() {
    let query = UserQuery {
        page: 1,
        per_page: 10,
        ..UserQuery::default()
    };
    let users: Vec<User> = (11..=20)
        .map(|n| User {
            id: UserId(n),
            name: format!("User {n}"),
            email: format!("user{n}@example.com"),
            created_at: "2026-08-01 00:00:00".to_string(),
        })
        .collect();

    let page = build_user_page(&query, users, 25);

    assert_eq!(page.from, 11);
    assert_eq!(page.to, 20);
    assert_eq!(page.total, 25);
    assert_eq!(page.last_page, 3);

    assert_eq!(page.links.len(), 5, "Previous, three pages, Next");
    assert_eq!(page.links[0].label, "Previous");
    assert_eq!(page.links[0].page, Some(0));
    assert_eq!(page.links[2].label, "2");
    assert!(page.links[2].active, "the current page link is highlighted");
    assert_eq!(page.links[4].label, "Next");
    assert_eq!(page.links[4].page, Some(2));
}

#[test]
fn build_user_page_handles_an_empty_result() {
    let query = UserQuery::default();

    let page = build_user_page(&query, Vec::new(), 0);

    assert_eq!(page.from, 0);
    assert_eq!(page.to, 0);
    assert_eq!(page.last_page, 1);
    assert_eq!(
        page.links[0].page, None,
        "Previous is disabled on the first page"
    );
    assert_eq!(
        page.links.last().expect("links are never empty").page,
        None,
        "Next is disabled when there is no next page"
    );
}

#[test]
fn build_user_page_disables_next_on_the_last_page() {
    let query = UserQuery {
        page: 2,
        per_page: 10,
        ..UserQuery::default()
    };
    let users = vec![User {
        id: UserId(21),
        name: "Tail".to_string(),
        email: "tail@example.com".to_string(),
        created_at: "2026-08-01 00:00:00".to_string(),
    }];

    let page = build_user_page(&query, users, 21);

    assert_eq!(page.from, 21);
    assert_eq!(page.to, 21);
    assert_eq!(page.links[0].page, Some(1));
    assert_eq!(page.links.last().expect("links are never empty").page, None);
}

#[test]
fn init_db_creates_the_user_table() {
    let temp_dir = unique_test_dir("init-db");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("users.sqlite");

    let result = init_db(&db_path);

    assert!(result.is_ok(), "init_db should succeed: {result:?}");

    let conn = Connection::open(&db_path).expect("should open sqlite db");
    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'user'",
            [],
            |row| row.get(0),
        )
        .expect("table count query should succeed");
    assert_eq!(table_count, 1, "user table should exist");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn insert_and_find_user_round_trip() {
    let temp_dir = unique_test_dir("insert-find");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("users.sqlite");
    init_db(&db_path).expect("init_db should succeed");

    let id = seed_user(&db_path, "Alice Johnson", "alice@example.com");

    let user = find_user(&db_path, id)
        .expect("lookup should succeed")
        .expect("inserted user should be found");
    assert_eq!(user.id, UserId(id));
    assert_eq!(user.name, "Alice Johnson");
    assert_eq!(user.email, "alice@example.com");
    assert!(!user.created_at.is_empty(), "created_at should default");

    let missing = find_user(&db_path, id + 100).expect("lookup should succeed");
    assert_eq!(missing, None);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn email_exists_detects_duplicates() {
    let temp_dir = unique_test_dir("email-exists");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("users.sqlite");
    init_db(&db_path).expect("init_db should succeed");

    seed_user(&db_path, "Alice", "alice@example.com");

    assert!(email_exists(&db_path, "alice@example.com").expect("query should succeed"));
    assert!(!email_exists(&db_path, "bob@example.com").expect("query should succeed"));

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn duplicate_email_insert_is_rejected() {
    let temp_dir = unique_test_dir("dup-email");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("users.sqlite");
    init_db(&db_path).expect("init_db should succeed");

    seed_user(&db_path, "Alice", "alice@example.com");
    let second = insert_user(&db_path, "Alice Twin", "alice@example.com", "digest");

    assert!(second.is_err(), "unique email constraint should reject");
    assert_eq!(count_users(&db_path), 1);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn query_page_matches_name_and_email() {
    let temp_dir = unique_test_dir("search");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("users.sqlite");
    init_db(&db_path).expect("init_db should succeed");

    seed_user(&db_path, "Alice Johnson", "alice@example.com");
    seed_user(&db_path, "Bob Smith", "bob@other.org");
    seed_user(&db_path, "Carol Alison", "carol@example.com");

    let query = UserQuery {
        search: "ali".to_string(),
        ..UserQuery::default()
    };
    let (users, total) = query_page(&db_path, &query).expect("search should succeed");
    assert_eq!(total, 2, "substring should match across name and email");
    let names: Vec<&str> = users.iter().map(|user| user.name.as_str()).collect();
    assert!(names.contains(&"Alice Johnson"));
    assert!(names.contains(&"Carol Alison"));

    let query = UserQuery {
        search: "other.org".to_string(),
        ..UserQuery::default()
    };
    let (users, total) = query_page(&db_path, &query).expect("search should succeed");
    assert_eq!(total, 1);
    assert_eq!(users[0].email, "bob@other.org");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn query_page_sorts_by_name_in_both_directions() {
    let temp_dir = unique_test_dir("sort-name");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("users.sqlite");
    init_db(&db_path).expect("init_db should succeed");

    seed_user(&db_path, "Carol", "carol@example.com");
    seed_user(&db_path, "Alice", "alice@example.com");
    seed_user(&db_path, "Bob", "bob@example.com");

    let query = UserQuery {
        sort_key: SortKey::Name,
        direction: SortDirection::Ascending,
        ..UserQuery::default()
    };
    let (users, _) = query_page(&db_path, &query).expect("query should succeed");
    let names: Vec<&str> = users.iter().map(|user| user.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);

    let query = UserQuery {
        sort_key: SortKey::Name,
        direction: SortDirection::Descending,
        ..UserQuery::default()
    };
    let (users, _) = query_page(&db_path, &query).expect("query should succeed");
    let names: Vec<&str> = users.iter().map(|user| user.name.as_str()).collect();
    assert_eq!(names, vec!["Carol", "Bob", "Alice"]);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn default_order_is_newest_first() {
    let temp_dir = unique_test_dir("newest-first");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("users.sqlite");
    init_db(&db_path).expect("init_db should succeed");

    let old = seed_user(&db_path, "Old Timer", "old@example.com");
    let new = seed_user(&db_path, "Newcomer", "new@example.com");
    set_created_at(&db_path, old, "2024-01-10 08:00:00");
    set_created_at(&db_path, new, "2026-08-27 08:00:00");

    let (users, _) = query_page(&db_path, &UserQuery::default()).expect("query should succeed");

    assert_eq!(users[0].name, "Newcomer");
    assert_eq!(users[1].name, "Old Timer");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn query_page_windows_the_collection() {
    let temp_dir = unique_test_dir("paging");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("users.sqlite");
    init_db(&db_path).expect("init_db should succeed");

    for n in 1..=5 {
        seed_user(&db_path, &format!("User {n}"), &format!("user{n}@example.com"));
    }

    let query = UserQuery {
        sort_key: SortKey::Name,
        direction: SortDirection::Ascending,
        page: 0,
        per_page: 2,
        ..UserQuery::default()
    };
    let (users, total) = query_page(&db_path, &query).expect("query should succeed");
    assert_eq!(total, 5);
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "User 1");

    let query = UserQuery { page: 2, ..query };
    let (users, total) = query_page(&db_path, &query).expect("query should succeed");
    assert_eq!(total, 5);
    assert_eq!(users.len(), 1, "last page holds the remainder");
    assert_eq!(users[0].name, "User 5");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn list_users_clamps_a_page_that_fell_off_the_end() {
    let temp_dir = unique_test_dir("clamp");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("users.sqlite");
    init_db(&db_path).expect("init_db should succeed");

    for n in 1..=3 {
        seed_user(&db_path, &format!("User {n}"), &format!("user{n}@example.com"));
    }

    let service = QueryService::new(Arc::new(SqliteUserRepo {
        db_path: db_path.clone(),
    }));
    let query = UserQuery {
        page: 5,
        per_page: 2,
        ..UserQuery::default()
    };

    let page = service.list_users(&query).expect("list should succeed");

    assert_eq!(page.page, 1, "requested page 5 clamps to the last page");
    assert_eq!(page.users.len(), 1);
    assert_eq!(page.total, 3);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn delete_user_rejects_a_missing_id() {
    let temp_dir = unique_test_dir("delete-missing");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("users.sqlite");
    init_db(&db_path).expect("init_db should succeed");

    let result = delete_user(&db_path, 42);

    assert!(result.is_err(), "deleting a missing user should error");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn bulk_delete_is_all_or_nothing() {
    let temp_dir = unique_test_dir("bulk-delete");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("users.sqlite");
    init_db(&db_path).expect("init_db should succeed");

    let first = seed_user(&db_path, "Alice", "alice@example.com");
    let second = seed_user(&db_path, "Bob", "bob@example.com");

    let result = delete_users(&db_path, &[UserId(first), UserId(999)]);
    assert!(result.is_err(), "a missing id should fail the whole batch");
    assert_eq!(count_users(&db_path), 2, "nothing deleted on failure");

    delete_users(&db_path, &[UserId(first), UserId(second)])
        .expect("valid batch should succeed");
    assert_eq!(count_users(&db_path), 0);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn create_form_validation_reports_per_field_messages() {
    let errors = validate_new_user(&NewUser::default());
    assert_eq!(errors.get("name").map(String::as_str), Some("The name field is required."));
    assert_eq!(
        errors.get("email").map(String::as_str),
        Some("The email field is required.")
    );
    assert_eq!(
        errors.get("password").map(String::as_str),
        Some("The password field is required.")
    );

    let errors = validate_new_user(&NewUser {
        name: "Alice".to_string(),
        email: "not-an-email".to_string(),
        password: "short".to_string(),
        password_confirmation: "short".to_string(),
    });
    assert_eq!(
        errors.get("email").map(String::as_str),
        Some("The email must be a valid email address.")
    );
    assert_eq!(
        errors.get("password").map(String::as_str),
        Some("The password must be at least 8 characters.")
    );

    let errors = validate_new_user(&NewUser {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "secret123".to_string(),
        password_confirmation: "secret124".to_string(),
    });
    assert_eq!(
        errors.get("password").map(String::as_str),
        Some("The password confirmation does not match.")
    );

    let errors = validate_new_user(&NewUser {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "secret123".to_string(),
        password_confirmation: "secret123".to_string(),
    });
    assert!(errors.is_empty(), "a valid submission passes: {errors:?}");
}

#[test]
fn create_user_rejects_a_taken_email() {
    let temp_dir = unique_test_dir("taken-email");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("users.sqlite");
    init_db(&db_path).expect("init_db should succeed");

    let service = AdminService::new(Arc::new(SqliteUserRepo {
        db_path: db_path.clone(),
    }));
    let submission = NewUser {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "secret123".to_string(),
        password_confirmation: "secret123".to_string(),
    };

    service
        .create_user(&submission)
        .expect("first create should succeed");

    let second = service.create_user(&NewUser {
        name: "Alice Twin".to_string(),
        ..submission
    });
    match second {
        Err(CreateUserError::Validation(errors)) => assert_eq!(
            errors.get("email").map(String::as_str),
            Some("The email has already been taken.")
        ),
        other => panic!("duplicate email should be a validation error: {other:?}"),
    }

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn create_user_trims_and_stores_a_password_digest() {
    let temp_dir = unique_test_dir("create-user");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("users.sqlite");
    init_db(&db_path).expect("init_db should succeed");

    let service = AdminService::new(Arc::new(SqliteUserRepo {
        db_path: db_path.clone(),
    }));
    let id = service
        .create_user(&NewUser {
            name: "  Alice Johnson  ".to_string(),
            email: " alice@example.com ".to_string(),
            password: "secret123".to_string(),
            password_confirmation: "secret123".to_string(),
        })
        .expect("create should succeed");

    let user = find_user(&db_path, id.0)
        .expect("lookup should succeed")
        .expect("created user should be found");
    assert_eq!(user.name, "Alice Johnson");
    assert_eq!(user.email, "alice@example.com");

    let conn = Connection::open(&db_path).expect("should open sqlite db");
    let stored: String = conn
        .query_row(
            "SELECT password_digest FROM user WHERE id = ?1",
            params![id.0],
            |row| row.get(0),
        )
        .expect("digest query should succeed");
    assert_eq!(stored, password_digest("secret123"));
    assert_ne!(stored, "secret123", "the raw password is never stored");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn password_digest_is_hex_encoded_sha256() {
    assert_eq!(
        password_digest("password"),
        "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
    );
    assert_eq!(password_digest("password").len(), 64);
}

#[test]
fn csv_export_writes_header_and_selected_rows() {
    let temp_dir = unique_test_dir("csv-export");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let csv_path = temp_dir.join("users.csv");

    let users = vec![
        User {
            id: UserId(1),
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            created_at: "2026-08-01 09:30:00".to_string(),
        },
        User {
            id: UserId(2),
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
            created_at: "2026-08-02 10:15:00".to_string(),
        },
    ];

    let written = write_users_csv(&csv_path, &users).expect("export should succeed");
    assert_eq!(written, 2);

    let content = fs::read_to_string(&csv_path).expect("should read csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3, "header plus one line per user");
    assert_eq!(lines[0], "ID,Name,Email,Joined");
    assert_eq!(lines[1], "1,Alice Johnson,alice@example.com,2026-08-01 09:30:00");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn joined_date_renders_short_and_passes_through_unknown_formats() {
    assert_eq!(format_joined_date("2026-08-27 10:00:00"), "Aug 27, 2026");
    assert_eq!(format_joined_date("2024-01-05 23:59:59"), "Jan 5, 2024");
    assert_eq!(format_joined_date("not a timestamp"), "not a timestamp");
}
