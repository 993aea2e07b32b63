use crate::domain::entities::user::UserId;
use crate::ui::controller::selection::Selection;

/// A delete awaiting confirmation. Both variants snapshot their target
/// at open time: whatever the selection does while the modal is up, the
/// confirmed request carries exactly what the user saw when it opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDelete {
    One { id: UserId, label: String },
    Bulk { ids: Vec<UserId> },
}

impl PendingDelete {
    pub fn one(id: UserId, label: &str) -> Self {
        PendingDelete::One {
            id,
            label: label.to_string(),
        }
    }

    /// Snapshots the current selection; `None` keeps the request a
    /// no-op when nothing is selected.
    pub fn bulk(selection: &Selection) -> Option<Self> {
        if selection.is_empty() {
            return None;
        }
        Some(PendingDelete::Bulk {
            ids: selection.ids(),
        })
    }

    pub fn count(&self) -> usize {
        match self {
            PendingDelete::One { .. } => 1,
            PendingDelete::Bulk { ids } => ids.len(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            PendingDelete::One { label, .. } => {
                format!("Are you sure you want to delete this user? ({label})")
            }
            PendingDelete::Bulk { ids } if ids.len() == 1 => {
                "Delete 1 selected user?".to_string()
            }
            PendingDelete::Bulk { ids } => format!("Delete {} selected users?", ids.len()),
        }
    }
}
