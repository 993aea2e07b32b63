use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use rfd::FileDialog;

use crate::domain::entities::query::{SortDirection, SortKey, UserPage, UserQuery};
use crate::domain::entities::user::{NewUser, User};
use crate::format_joined_date;
use crate::infra::sqlite::repo::SqliteUserRepo;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::controller::confirm::PendingDelete;
use crate::ui::controller::menu::{
    place_menu, MenuAlign, TriggerBounds, MENU_TRIGGER_HEIGHT, MENU_TRIGGER_WIDTH,
};
use crate::ui::controller::query_state::{QueryState, PER_PAGE_CHOICES, SEARCH_DEBOUNCE_MS};
use crate::ui::controller::selection::Selection;
use crate::ui::state::app_state::{AppState, Flash, FlashKind, RowMenu, View};
use crate::usecase::ports::repo::UserRepository;
use crate::usecase::services::admin_service::{AdminService, CreateUserError, FieldErrors};
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::query_service::QueryService;

fn table_container_style() -> &'static str {
    "overflow-x: auto; background: #fff; border: 1px solid #e2e8f0; border-radius: 8px;"
}

fn table_header_cell_style() -> &'static str {
    "border-bottom: 1px solid #e2e8f0; padding: 10px 12px; text-align: left; \
     font-size: 12px; text-transform: uppercase; color: #64748b; background: #f8fafc;"
}

fn table_cell_style() -> &'static str {
    "border-bottom: 1px solid #eef2f7; padding: 10px 12px; font-size: 14px;"
}

fn button_style() -> &'static str {
    "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
}

fn primary_button_style() -> &'static str {
    "border: 1px solid #4c51bf; background: #4f46e5; color: #fff; padding: 6px 14px; \
     border-radius: 6px; cursor: pointer; font-size: 14px;"
}

fn danger_button_style() -> &'static str {
    "border: 1px solid #b91c1c; background: #dc2626; color: #fff; padding: 4px 10px; \
     border-radius: 6px; cursor: pointer;"
}

fn menu_item_style() -> &'static str {
    "padding: 8px 12px; cursor: pointer; font-size: 14px;"
}

fn flash_style(kind: FlashKind) -> &'static str {
    match kind {
        FlashKind::Success => {
            "display: flex; align-items: center; background: #dcfce7; border: 1px solid #4ade80; \
             color: #166534; padding: 10px 14px; border-radius: 6px; margin-bottom: 12px;"
        }
        FlashKind::Error => {
            "display: flex; align-items: center; background: #fee2e2; border: 1px solid #f87171; \
             color: #991b1b; padding: 10px 14px; border-radius: 6px; margin-bottom: 12px;"
        }
    }
}

/// Replaces the current result page wholesale. A fresh load bumps the
/// page revision, which unconditionally clears the selection; on
/// failure the last-good page stays on screen and only a notification
/// is raised.
fn reload_users(
    query_service: &QueryService,
    user_query: &UserQuery,
    mut query: Signal<QueryState>,
    mut page_data: Signal<Option<UserPage>>,
    mut page_revision: Signal<u64>,
    mut selection: Signal<Selection>,
    mut flash: Signal<Option<Flash>>,
) {
    match run_blocking(|| query_service.list_users(user_query)) {
        Ok(page) => {
            // list_users may clamp past-the-end pages after deletes
            query.write().page = page.page;
            *page_data.write() = Some(page);
            let revision = *page_revision.peek() + 1;
            page_revision.set(revision);
            selection.write().sync(revision);
        }
        Err(err) => {
            *flash.write() = Some(Flash::error(format!("Failed to load users: {err}")));
        }
    }
}

#[component]
fn SortableHeader(
    label: &'static str,
    sort_key: SortKey,
    current: SortKey,
    direction: SortDirection,
    on_sort: EventHandler<SortKey>,
) -> Element {
    let indicator = if current == sort_key {
        match direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    } else {
        ""
    };

    rsx! {
        th {
            style: "{table_header_cell_style()} cursor: pointer; user-select: none;",
            onclick: move |_| on_sort.call(sort_key),
            "{label}{indicator}"
        }
    }
}

#[component]
pub fn App() -> Element {
    let db_path = match crate::default_db_path() {
        Ok(path) => path,
        Err(err) => {
            return rsx! {
                div {
                    p { "Unable to resolve database path: {err}" }
                }
            };
        }
    };

    let AppState {
        mut view,
        mut page_data,
        page_revision,
        mut search_input,
        mut debounce,
        mut query,
        mut selection,
        mut pending_delete,
        mut row_menu,
        mut flash,
        mut busy,
        mut shown_user,
        mut form_name,
        mut form_email,
        mut form_password,
        mut form_password_confirmation,
        mut form_errors,
        mut form_processing,
    } = AppState::new();

    let repo = Arc::new(SqliteUserRepo { db_path });
    let query_service = Arc::new(QueryService::new(repo.clone()));
    let admin_service = Arc::new(AdminService::new(repo.clone()));
    let export_service = Arc::new(ExportService::new());

    let repo_for_init = repo.clone();
    let query_service_for_init = query_service.clone();
    use_effect(move || {
        *busy.write() = true;
        let init_result = run_blocking(|| repo_for_init.init());
        match init_result {
            Ok(()) => {
                reload_users(
                    &query_service_for_init,
                    &UserQuery::default(),
                    query,
                    page_data,
                    page_revision,
                    selection,
                    flash,
                );
            }
            Err(err) => {
                *flash.write() = Some(Flash::error(format!(
                    "Failed to initialize database: {err}"
                )));
            }
        }
        *busy.write() = false;
    });

    let query_service_for_search = query_service.clone();
    let query_service_for_search_clear = query_service.clone();
    let query_service_for_clear_filters = query_service.clone();
    let query_service_for_per_page = query_service.clone();
    let query_service_for_sort = query_service.clone();
    let query_service_for_page_links = query_service.clone();
    let query_service_for_confirm = query_service.clone();
    let query_service_for_show = query_service.clone();
    let query_service_for_create = query_service.clone();
    let admin_service_for_confirm = admin_service.clone();
    let admin_service_for_create = admin_service.clone();
    let export_service_for_export = export_service.clone();

    let sort_users = Rc::new(RefCell::new(move |key: SortKey| {
        query.write().set_sort(key);
        let user_query = query().to_query(debounce().applied());
        *busy.write() = true;
        reload_users(
            &query_service_for_sort,
            &user_query,
            query,
            page_data,
            page_revision,
            selection,
            flash,
        );
        *busy.write() = false;
    }));
    let sort_users_for_name = sort_users.clone();
    let sort_users_for_email = sort_users.clone();
    let sort_users_for_joined = sort_users.clone();

    let view_snapshot = view();
    let page_snapshot = page_data();
    let selection_snapshot = selection();
    let query_snapshot = query();
    let flash_snapshot = flash();
    let search_input_snapshot = search_input();
    let form_errors_snapshot = form_errors();
    let shown_user_snapshot = shown_user();
    let row_menu_snapshot = row_menu();
    let pending_delete_snapshot = pending_delete();

    let heading = match view_snapshot {
        View::Index => "Manage Users",
        View::Create => "Create User",
        View::Show => "User Details",
    };

    rsx! {
        div {
            style: "font-family: 'Segoe UI', sans-serif; padding: 16px; background: #f1f5f9; \
                    min-height: 100vh; height: 100vh; overflow: auto; box-sizing: border-box;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                h2 { style: "margin: 0;", "{heading}" }
                if view_snapshot == View::Index {
                    button {
                        style: "{primary_button_style()}",
                        disabled: busy(),
                        onclick: move |_| {
                            form_name.set(String::new());
                            form_email.set(String::new());
                            form_password.set(String::new());
                            form_password_confirmation.set(String::new());
                            form_errors.set(FieldErrors::new());
                            view.set(View::Create);
                        },
                        "Add New User"
                    }
                }
            }

            if let Some(notice) = flash_snapshot.clone() {
                div {
                    style: "{flash_style(notice.kind)}",
                    span { style: "flex: 1;", "{notice.message}" }
                    button {
                        style: "border: none; background: transparent; cursor: pointer; font-size: 14px;",
                        onclick: move |_| flash.set(None),
                        "✕"
                    }
                }
            }

            if view_snapshot == View::Index {
                div {
                    style: "display: flex; gap: 12px; align-items: center; margin-bottom: 12px; flex-wrap: wrap;",

                    div {
                        style: "position: relative; flex: 1; min-width: 220px;",
                        input {
                            style: "width: 100%; padding: 6px 28px 6px 10px; border: 1px solid #cbd5e1; \
                                    border-radius: 6px; box-sizing: border-box;",
                            placeholder: "Search users...",
                            value: search_input_snapshot.clone(),
                            oninput: move |event| {
                                let text = event.value();
                                search_input.set(text.clone());
                                let ticket = debounce.write().input(&text);
                                let query_service = query_service_for_search.clone();
                                spawn(async move {
                                    tokio::time::sleep(Duration::from_millis(SEARCH_DEBOUNCE_MS)).await;
                                    let Some(term) = debounce.write().try_commit(ticket) else {
                                        return;
                                    };
                                    query.write().set_page(0);
                                    let user_query = query().to_query(&term);
                                    *busy.write() = true;
                                    reload_users(
                                        &query_service,
                                        &user_query,
                                        query,
                                        page_data,
                                        page_revision,
                                        selection,
                                        flash,
                                    );
                                    *busy.write() = false;
                                });
                            },
                        }
                        if !search_input_snapshot.is_empty() {
                            button {
                                style: "position: absolute; right: 4px; top: 50%; transform: translateY(-50%); \
                                        border: none; background: transparent; cursor: pointer; color: #94a3b8;",
                                onclick: move |_| {
                                    search_input.set(String::new());
                                    let was_applied = !debounce().applied().is_empty();
                                    debounce.write().reset("");
                                    if !was_applied {
                                        return;
                                    }
                                    query.write().set_page(0);
                                    let user_query = query().to_query("");
                                    *busy.write() = true;
                                    reload_users(
                                        &query_service_for_search_clear,
                                        &user_query,
                                        query,
                                        page_data,
                                        page_revision,
                                        selection,
                                        flash,
                                    );
                                    *busy.write() = false;
                                },
                                "✕"
                            }
                        }
                    }

                    label { style: "font-size: 14px; color: #475569;", "Show:" }
                    select {
                        style: "padding: 5px 8px; border: 1px solid #cbd5e1; border-radius: 6px;",
                        disabled: busy(),
                        value: "{query_snapshot.per_page}",
                        onchange: move |event| {
                            let Ok(per_page) = event.value().parse::<i64>() else {
                                return;
                            };
                            query.write().set_per_page(per_page);
                            let user_query = query().to_query(debounce().applied());
                            *busy.write() = true;
                            reload_users(
                                &query_service_for_per_page,
                                &user_query,
                                query,
                                page_data,
                                page_revision,
                                selection,
                                flash,
                            );
                            *busy.write() = false;
                        },
                        for choice in PER_PAGE_CHOICES {
                            option {
                                value: "{choice}",
                                selected: choice == query_snapshot.per_page,
                                "{choice}"
                            }
                        }
                    }

                    button {
                        style: "{button_style()}",
                        disabled: busy(),
                        onclick: move |_| {
                            search_input.set(String::new());
                            debounce.write().reset("");
                            query.write().clear();
                            let user_query = query().to_query("");
                            *busy.write() = true;
                            reload_users(
                                &query_service_for_clear_filters,
                                &user_query,
                                query,
                                page_data,
                                page_revision,
                                selection,
                                flash,
                            );
                            *busy.write() = false;
                        },
                        "Clear"
                    }
                }

                div {
                    style: "display: flex; gap: 8px; align-items: center; margin-bottom: 12px;",
                    span {
                        style: "font-size: 14px; color: #475569;",
                        "{selection_snapshot.len()} selected"
                    }
                    button {
                        style: "{danger_button_style()}",
                        disabled: busy() || selection_snapshot.is_empty(),
                        onclick: move |_| {
                            if let Some(pending) = PendingDelete::bulk(&selection()) {
                                pending_delete.set(Some(pending));
                            }
                        },
                        "Delete Selected"
                    }
                    button {
                        style: "{button_style()}",
                        disabled: busy() || selection_snapshot.is_empty(),
                        onclick: move |_| {
                            let live = selection();
                            if live.is_empty() {
                                return;
                            }
                            let Some(page) = page_data() else {
                                return;
                            };
                            let users: Vec<User> = page
                                .users
                                .iter()
                                .filter(|user| live.contains(user.id))
                                .cloned()
                                .collect();
                            let Some(path) = FileDialog::new()
                                .add_filter("CSV", &["csv"])
                                .set_file_name("users.csv")
                                .save_file()
                            else {
                                return;
                            };
                            let export_service = export_service_for_export.clone();
                            *busy.write() = true;
                            match run_blocking(|| export_service.export_users(&path, &users)) {
                                Ok(count) => {
                                    *flash.write() = Some(Flash::success(format!(
                                        "Exported {count} user(s) to {}",
                                        path.display()
                                    )));
                                }
                                Err(err) => {
                                    *flash.write() =
                                        Some(Flash::error(format!("Export failed: {err}")));
                                }
                            }
                            *busy.write() = false;
                        },
                        "Export Selected"
                    }
                }

                div {
                    style: "{table_container_style()}",
                    table {
                        style: "border-collapse: collapse; width: 100%;",
                        thead {
                            tr {
                                th {
                                    style: "{table_header_cell_style()} width: 36px; text-align: center;",
                                    input {
                                        r#type: "checkbox",
                                        checked: selection_snapshot.select_all(),
                                        onclick: move |_| {
                                            let page_ids = page_data()
                                                .map(|page| page.user_ids())
                                                .unwrap_or_default();
                                            let flag = !selection().select_all();
                                            selection.write().set_all(flag, &page_ids);
                                        },
                                    }
                                }
                                SortableHeader {
                                    label: "Name",
                                    sort_key: SortKey::Name,
                                    current: query_snapshot.sort_key,
                                    direction: query_snapshot.direction,
                                    on_sort: move |key| sort_users_for_name.borrow_mut()(key),
                                }
                                SortableHeader {
                                    label: "Email",
                                    sort_key: SortKey::Email,
                                    current: query_snapshot.sort_key,
                                    direction: query_snapshot.direction,
                                    on_sort: move |key| sort_users_for_email.borrow_mut()(key),
                                }
                                SortableHeader {
                                    label: "Joined Date",
                                    sort_key: SortKey::CreatedAt,
                                    current: query_snapshot.sort_key,
                                    direction: query_snapshot.direction,
                                    on_sort: move |key| sort_users_for_joined.borrow_mut()(key),
                                }
                                th { style: "{table_header_cell_style()}", "Actions" }
                            }
                        }
                        tbody {
                            if let Some(page) = page_snapshot.clone() {
                                if page.users.is_empty() {
                                    tr {
                                        td {
                                            style: "{table_cell_style()} text-align: center; color: #64748b;",
                                            colspan: "5",
                                            "No users found."
                                        }
                                    }
                                }
                                {page.users.iter().map(|user| {
                                    let user_id = user.id;
                                    let user_name = user.name.clone();
                                    let user_email = user.email.clone();
                                    let joined = format_joined_date(&user.created_at);
                                    let menu_label = user.name.clone();
                                    let is_selected = selection_snapshot.contains(user_id);
                                    let row_style = if is_selected {
                                        "background: #eef4ff;"
                                    } else {
                                        ""
                                    };
                                    rsx!(
                                        tr {
                                            style: "{row_style}",
                                            td {
                                                style: "{table_cell_style()} text-align: center;",
                                                input {
                                                    r#type: "checkbox",
                                                    checked: is_selected,
                                                    onclick: move |_| {
                                                        selection.write().toggle(user_id);
                                                    },
                                                }
                                            }
                                            td { style: "{table_cell_style()} font-weight: 500;", "{user_name}" }
                                            td { style: "{table_cell_style()} color: #64748b;", "{user_email}" }
                                            td { style: "{table_cell_style()} color: #64748b;", "{joined}" }
                                            td {
                                                style: "{table_cell_style()}",
                                                button {
                                                    style: "{button_style()} width: {MENU_TRIGGER_WIDTH}px; \
                                                            height: {MENU_TRIGGER_HEIGHT}px; padding: 0; font-size: 12px;",
                                                    onclick: move |event| {
                                                        event.stop_propagation();
                                                        if row_menu()
                                                            .as_ref()
                                                            .is_some_and(|menu| menu.user_id == user_id)
                                                        {
                                                            row_menu.set(None);
                                                            return;
                                                        }
                                                        let client = event.client_coordinates();
                                                        let element = event.element_coordinates();
                                                        let bounds = TriggerBounds {
                                                            left: client.x - element.x,
                                                            top: client.y - element.y,
                                                            width: MENU_TRIGGER_WIDTH,
                                                            height: MENU_TRIGGER_HEIGHT,
                                                        };
                                                        let window = dioxus::desktop::window();
                                                        let viewport_width = window.inner_size().width as f64
                                                            / window.scale_factor();
                                                        // fixed positioning works in viewport coords,
                                                        // so no scroll offset is added here
                                                        let placement = place_menu(
                                                            bounds,
                                                            0.0,
                                                            viewport_width,
                                                            MenuAlign::Right,
                                                        );
                                                        row_menu.set(Some(RowMenu {
                                                            user_id,
                                                            label: menu_label.clone(),
                                                            placement,
                                                        }));
                                                    },
                                                    "Actions ▾"
                                                }
                                            }
                                        }
                                    )
                                })}
                            }
                        }
                    }
                }

                if let Some(page) = page_snapshot.clone() {
                    div {
                        style: "display: flex; justify-content: space-between; align-items: center; \
                                margin-top: 12px; flex-wrap: wrap; gap: 8px;",
                        div {
                            style: "font-size: 14px; color: #475569;",
                            "Showing {page.from} to {page.to} of {page.total} results"
                        }
                        div {
                            style: "display: flex; gap: 4px; flex-wrap: wrap;",
                            {page.links.iter().map(|link| {
                                let link = link.clone();
                                let query_service = query_service_for_page_links.clone();
                                let link_style = if link.active {
                                    "border: 1px solid #4c51bf; background: #4f46e5; color: #fff; \
                                     padding: 4px 10px; border-radius: 6px; font-size: 13px;"
                                } else if link.page.is_none() {
                                    "border: 1px solid #e2e8f0; background: #f8fafc; color: #cbd5e1; \
                                     padding: 4px 10px; border-radius: 6px; font-size: 13px;"
                                } else {
                                    "border: 1px solid #cbd5e1; background: #fff; color: #334155; \
                                     padding: 4px 10px; border-radius: 6px; font-size: 13px; cursor: pointer;"
                                };
                                rsx!(
                                    button {
                                        style: "{link_style}",
                                        disabled: busy() || link.page.is_none(),
                                        onclick: move |_| {
                                            let Some(target) = link.page else {
                                                return;
                                            };
                                            query.write().set_page(target);
                                            let user_query = query().to_query(debounce().applied());
                                            *busy.write() = true;
                                            reload_users(
                                                &query_service,
                                                &user_query,
                                                query,
                                                page_data,
                                                page_revision,
                                                selection,
                                                flash,
                                            );
                                            *busy.write() = false;
                                        },
                                        "{link.label}"
                                    }
                                )
                            })}
                        }
                    }
                }
            }

            if view_snapshot == View::Create {
                div {
                    style: "background: #fff; border: 1px solid #e2e8f0; border-radius: 8px; \
                            padding: 20px; max-width: 640px;",

                    div {
                        style: "display: grid; grid-template-columns: 1fr 1fr; gap: 14px;",

                        div {
                            style: "grid-column: span 2;",
                            label { style: "display: block; font-size: 14px; margin-bottom: 4px;", "Name" }
                            input {
                                style: "width: 100%; padding: 6px 10px; border: 1px solid #cbd5e1; \
                                        border-radius: 6px; box-sizing: border-box;",
                                value: form_name(),
                                oninput: move |event| form_name.set(event.value()),
                            }
                            if let Some(message) = form_errors_snapshot.get("name") {
                                div { style: "color: #dc2626; font-size: 13px; margin-top: 4px;", "{message}" }
                            }
                        }

                        div {
                            style: "grid-column: span 2;",
                            label { style: "display: block; font-size: 14px; margin-bottom: 4px;", "Email" }
                            input {
                                style: "width: 100%; padding: 6px 10px; border: 1px solid #cbd5e1; \
                                        border-radius: 6px; box-sizing: border-box;",
                                value: form_email(),
                                oninput: move |event| form_email.set(event.value()),
                            }
                            if let Some(message) = form_errors_snapshot.get("email") {
                                div { style: "color: #dc2626; font-size: 13px; margin-top: 4px;", "{message}" }
                            }
                        }

                        div {
                            label { style: "display: block; font-size: 14px; margin-bottom: 4px;", "Password" }
                            input {
                                r#type: "password",
                                style: "width: 100%; padding: 6px 10px; border: 1px solid #cbd5e1; \
                                        border-radius: 6px; box-sizing: border-box;",
                                value: form_password(),
                                oninput: move |event| form_password.set(event.value()),
                            }
                            if let Some(message) = form_errors_snapshot.get("password") {
                                div { style: "color: #dc2626; font-size: 13px; margin-top: 4px;", "{message}" }
                            }
                        }

                        div {
                            label { style: "display: block; font-size: 14px; margin-bottom: 4px;", "Confirm Password" }
                            input {
                                r#type: "password",
                                style: "width: 100%; padding: 6px 10px; border: 1px solid #cbd5e1; \
                                        border-radius: 6px; box-sizing: border-box;",
                                value: form_password_confirmation(),
                                oninput: move |event| form_password_confirmation.set(event.value()),
                            }
                        }
                    }

                    div {
                        style: "display: flex; justify-content: flex-end; gap: 8px; margin-top: 18px;",
                        button {
                            style: "{button_style()}",
                            onclick: move |_| {
                                form_errors.set(FieldErrors::new());
                                view.set(View::Index);
                            },
                            "Cancel"
                        }
                        button {
                            style: "{primary_button_style()}",
                            disabled: form_processing(),
                            onclick: move |_| {
                                form_processing.set(true);
                                let new_user = NewUser {
                                    name: form_name(),
                                    email: form_email(),
                                    password: form_password(),
                                    password_confirmation: form_password_confirmation(),
                                };
                                let admin_service = admin_service_for_create.clone();
                                let result = run_blocking(|| admin_service.create_user(&new_user));
                                match result {
                                    Ok(_id) => {
                                        form_errors.set(FieldErrors::new());
                                        form_name.set(String::new());
                                        form_email.set(String::new());
                                        form_password.set(String::new());
                                        form_password_confirmation.set(String::new());
                                        *flash.write() =
                                            Some(Flash::success("User created successfully."));
                                        view.set(View::Index);
                                        let user_query = query().to_query(debounce().applied());
                                        reload_users(
                                            &query_service_for_create,
                                            &user_query,
                                            query,
                                            page_data,
                                            page_revision,
                                            selection,
                                            flash,
                                        );
                                    }
                                    Err(CreateUserError::Validation(errors)) => {
                                        form_errors.set(errors);
                                    }
                                    Err(CreateUserError::Repo(err)) => {
                                        *flash.write() = Some(Flash::error(format!(
                                            "Failed to create user: {err}"
                                        )));
                                    }
                                }
                                form_processing.set(false);
                            },
                            if form_processing() { "Creating..." } else { "Create User" }
                        }
                    }
                }
            }

            if view_snapshot == View::Show {
                div {
                    style: "background: #fff; border: 1px solid #e2e8f0; border-radius: 8px; \
                            padding: 20px; max-width: 640px;",
                    if let Some(user) = shown_user_snapshot.clone() {
                        div {
                            style: "display: grid; grid-template-columns: 1fr 1fr; gap: 18px;",
                            div {
                                label { style: "display: block; font-size: 13px; color: #64748b;", "Name" }
                                p { style: "margin: 4px 0 0; font-size: 16px; font-weight: 500;", "{user.name}" }
                            }
                            div {
                                label { style: "display: block; font-size: 13px; color: #64748b;", "Email" }
                                p { style: "margin: 4px 0 0; font-size: 16px; font-weight: 500;", "{user.email}" }
                            }
                            div {
                                label { style: "display: block; font-size: 13px; color: #64748b;", "Joined Date" }
                                p {
                                    style: "margin: 4px 0 0; font-size: 16px; font-weight: 500;",
                                    "{format_joined_date(&user.created_at)}"
                                }
                            }
                            div {
                                label { style: "display: block; font-size: 13px; color: #64748b;", "User ID" }
                                p { style: "margin: 4px 0 0; font-size: 16px; font-weight: 500;", "#{user.id}" }
                            }
                        }
                    } else {
                        p { "No user loaded." }
                    }
                    div {
                        style: "display: flex; justify-content: flex-end; margin-top: 18px;",
                        button {
                            style: "{button_style()}",
                            onclick: move |_| {
                                shown_user.set(None);
                                view.set(View::Index);
                            },
                            "Back to List"
                        }
                    }
                }
            }

            if let Some(pending) = pending_delete_snapshot.clone() {
                div {
                    style: "position: fixed; inset: 0; background: rgba(0,0,0,0.35); display: flex; \
                            align-items: center; justify-content: center; z-index: 1100;",
                    div {
                        style: "background: #fff; padding: 16px; border: 1px solid #999; \
                                border-radius: 8px; min-width: 320px;",
                        div { style: "margin-bottom: 8px; font-weight: 600;", "Confirm Delete" }
                        p { style: "margin: 0 0 14px; font-size: 14px;", "{pending.message()}" }
                        div {
                            style: "display: flex; gap: 8px; justify-content: flex-end;",
                            button {
                                style: "{button_style()}",
                                onclick: move |_| pending_delete.set(None),
                                "Cancel"
                            }
                            button {
                                style: "{danger_button_style()}",
                                disabled: busy(),
                                onclick: move |_| {
                                    let Some(pending) = pending_delete() else {
                                        return;
                                    };
                                    let admin_service = admin_service_for_confirm.clone();
                                    *busy.write() = true;
                                    let result = run_blocking(|| match &pending {
                                        PendingDelete::One { id, .. } => {
                                            admin_service.delete_user(*id)
                                        }
                                        PendingDelete::Bulk { ids } => {
                                            admin_service.delete_users(ids)
                                        }
                                    });
                                    match result {
                                        Ok(()) => {
                                            pending_delete.set(None);
                                            *flash.write() = Some(Flash::success(match &pending {
                                                PendingDelete::One { .. } => {
                                                    "User deleted successfully.".to_string()
                                                }
                                                PendingDelete::Bulk { ids } if ids.len() == 1 => {
                                                    "Deleted 1 user.".to_string()
                                                }
                                                PendingDelete::Bulk { ids } => {
                                                    format!("Deleted {} users.", ids.len())
                                                }
                                            }));
                                            let user_query =
                                                query().to_query(debounce().applied());
                                            reload_users(
                                                &query_service_for_confirm,
                                                &user_query,
                                                query,
                                                page_data,
                                                page_revision,
                                                selection,
                                                flash,
                                            );
                                        }
                                        Err(err) => {
                                            // the delete did not happen, so the user's
                                            // selection is still meaningful; keep it
                                            pending_delete.set(None);
                                            *flash.write() = Some(Flash::error(format!(
                                                "Delete failed: {err}"
                                            )));
                                        }
                                    }
                                    *busy.write() = false;
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }

            if let Some(menu) = row_menu_snapshot.clone() {
                div {
                    style: "position: fixed; inset: 0; background: transparent; z-index: 1190;",
                    onclick: move |_| row_menu.set(None),
                    onwheel: move |_| row_menu.set(None),
                }
                div {
                    style: "position: fixed; {menu.placement.style()} min-width: 160px; background: #fff; \
                            border: 1px solid #bbb; border-radius: 8px; \
                            box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200; padding: 4px 0;",
                    onclick: move |event| event.stop_propagation(),
                    div {
                        style: "{menu_item_style()}",
                        onclick: {
                            let query_service = query_service_for_show.clone();
                            let menu_user_id = menu.user_id;
                            move |_| {
                                row_menu.set(None);
                                let query_service = query_service.clone();
                                *busy.write() = true;
                                match run_blocking(|| query_service.find_user(menu_user_id)) {
                                    Ok(Some(user)) => {
                                        shown_user.set(Some(user));
                                        view.set(View::Show);
                                    }
                                    Ok(None) => {
                                        *flash.write() =
                                            Some(Flash::error("User not found.".to_string()));
                                    }
                                    Err(err) => {
                                        *flash.write() = Some(Flash::error(format!(
                                            "Failed to load user: {err}"
                                        )));
                                    }
                                }
                                *busy.write() = false;
                            }
                        },
                        "View"
                    }
                    div {
                        style: "{menu_item_style()} color: #dc2626;",
                        onclick: {
                            let menu_user_id = menu.user_id;
                            let menu_label = menu.label.clone();
                            move |_| {
                                row_menu.set(None);
                                pending_delete
                                    .set(Some(PendingDelete::one(menu_user_id, &menu_label)));
                            }
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}
