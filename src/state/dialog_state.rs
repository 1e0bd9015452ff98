// ============================================================================
// DIALOG STATE - The single product dialog: Closed | Open(mode, draft)
// ============================================================================

use crate::models::draft::{merge_into_template, DraftProduct};
use crate::models::product::Product;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DialogMode {
    Create,
    Edit,
    Delete,
}

impl DialogMode {
    pub fn title(self) -> &'static str {
        match self {
            DialogMode::Create => "New product",
            DialogMode::Edit => "Edit product",
            DialogMode::Delete => "Delete product",
        }
    }

    pub fn confirm_label(self) -> &'static str {
        match self {
            DialogMode::Create | DialogMode::Edit => "Save",
            DialogMode::Delete => "Delete",
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open {
        mode: DialogMode,
        draft: DraftProduct,
        /// A confirm request is in flight
        submitting: bool,
    },
}

impl DialogState {
    /// Open in `mode`, replacing whatever was open before.
    /// Create always starts from the empty template; edit/delete merge the product over it.
    pub fn open(&mut self, mode: DialogMode, product: Option<&Product>) {
        let draft = match (mode, product) {
            (DialogMode::Create, _) | (_, None) => DraftProduct::default(),
            (_, Some(product)) => merge_into_template(product),
        };
        *self = DialogState::Open {
            mode,
            draft,
            submitting: false,
        };
    }

    /// Close without any network call. Ignored while a confirm is in flight.
    pub fn close(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = DialogState::Closed;
        true
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DialogState::Open { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, DialogState::Open { submitting: true, .. })
    }

    pub fn mode(&self) -> Option<DialogMode> {
        match self {
            DialogState::Open { mode, .. } => Some(*mode),
            DialogState::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&DraftProduct> {
        match self {
            DialogState::Open { draft, .. } => Some(draft),
            DialogState::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut DraftProduct> {
        match self {
            DialogState::Open { draft, .. } => Some(draft),
            DialogState::Closed => None,
        }
    }

    /// Mark a confirm as started and hand back what to send.
    /// `None` when closed or when a confirm is already running.
    pub fn begin_submit(&mut self) -> Option<(DialogMode, DraftProduct)> {
        match self {
            DialogState::Open {
                mode,
                draft,
                submitting,
            } if !*submitting => {
                *submitting = true;
                Some((*mode, draft.clone()))
            }
            _ => None,
        }
    }

    /// Close on success; on failure reopen for editing with the draft untouched
    pub fn finish_submit(&mut self, succeeded: bool) {
        if succeeded {
            *self = DialogState::Closed;
        } else if let DialogState::Open { submitting, .. } = self {
            *submitting = false;
        }
    }
}
