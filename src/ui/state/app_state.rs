use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::query::UserPage;
use crate::domain::entities::user::{User, UserId};
use crate::ui::controller::confirm::PendingDelete;
use crate::ui::controller::menu::MenuPlacement;
use crate::ui::controller::query_state::{QueryState, SearchDebounce};
use crate::ui::controller::selection::Selection;
use crate::usecase::services::admin_service::FieldErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Index,
    Create,
    Show,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

/// One-shot notification banner, replaced by the next message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

/// The open per-row actions menu, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct RowMenu {
    pub user_id: UserId,
    pub label: String,
    pub placement: MenuPlacement,
}

pub struct AppState {
    pub view: Signal<View>,
    pub page_data: Signal<Option<UserPage>>,
    pub page_revision: Signal<u64>,
    pub search_input: Signal<String>,
    pub debounce: Signal<SearchDebounce>,
    pub query: Signal<QueryState>,
    pub selection: Signal<Selection>,
    pub pending_delete: Signal<Option<PendingDelete>>,
    pub row_menu: Signal<Option<RowMenu>>,
    pub flash: Signal<Option<Flash>>,
    pub busy: Signal<bool>,
    pub shown_user: Signal<Option<User>>,
    pub form_name: Signal<String>,
    pub form_email: Signal<String>,
    pub form_password: Signal<String>,
    pub form_password_confirmation: Signal<String>,
    pub form_errors: Signal<FieldErrors>,
    pub form_processing: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            view: use_signal(|| View::Index),
            page_data: use_signal(|| None::<UserPage>),
            page_revision: use_signal(|| 0_u64),
            search_input: use_signal(String::new),
            debounce: use_signal(SearchDebounce::default),
            query: use_signal(QueryState::default),
            selection: use_signal(Selection::default),
            pending_delete: use_signal(|| None::<PendingDelete>),
            row_menu: use_signal(|| None::<RowMenu>),
            flash: use_signal(|| None::<Flash>),
            busy: use_signal(|| false),
            shown_user: use_signal(|| None::<User>),
            form_name: use_signal(String::new),
            form_email: use_signal(String::new),
            form_password: use_signal(String::new),
            form_password_confirmation: use_signal(String::new),
            form_errors: use_signal(FieldErrors::new),
            form_processing: use_signal(|| false),
        }
    }
}
