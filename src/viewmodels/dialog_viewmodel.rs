// ============================================================================
// DIALOG VIEWMODEL - Create / edit / delete dialog and its draft
// ============================================================================
// The dialog closes only after the server accepted the change and the list
// was reloaded. A failed confirm leaves mode and draft as they were.
// ============================================================================

use std::rc::Rc;

use crate::config::CONFIG;
use crate::error::AdminError;
use crate::models::draft::{to_wire_format, DraftField, DraftProduct, FieldInput};
use crate::models::product::Product;
use crate::services::catalog_api::{CatalogApi, UpsertMode};
use crate::state::{AdminState, DialogMode, Notice};
use crate::viewmodels::product_list_viewmodel::ProductListViewModel;

pub struct DialogViewModel<A: CatalogApi> {
    api: Rc<A>,
    state: AdminState,
    products: ProductListViewModel<A>,
    max_image_slots: usize,
}

impl<A: CatalogApi> Clone for DialogViewModel<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state.clone(),
            products: self.products.clone(),
            max_image_slots: self.max_image_slots,
        }
    }
}

impl<A: CatalogApi> DialogViewModel<A> {
    pub fn new(api: Rc<A>, state: AdminState, products: ProductListViewModel<A>) -> Self {
        Self {
            api,
            state,
            products,
            max_image_slots: CONFIG.max_image_slots,
        }
    }

    pub fn with_max_image_slots(mut self, max_image_slots: usize) -> Self {
        self.max_image_slots = max_image_slots;
        self
    }

    pub fn max_image_slots(&self) -> usize {
        self.max_image_slots
    }

    // ========================================================================
    // OPEN / CLOSE
    // ========================================================================

    pub fn open_create(&self) {
        self.open(DialogMode::Create, None);
    }

    /// Returns false when `id` is not in the current list
    pub fn open_edit(&self, id: &str) -> bool {
        self.open_for(DialogMode::Edit, id)
    }

    pub fn open_delete(&self, id: &str) -> bool {
        self.open_for(DialogMode::Delete, id)
    }

    /// Close without a request; the draft is dropped. Ignored while a confirm is running.
    pub fn close(&self) -> bool {
        let closed = self.state.dialog.borrow_mut().close();
        if closed {
            self.state.notify_subscribers();
        }
        closed
    }

    fn open_for(&self, mode: DialogMode, id: &str) -> bool {
        match self.state.find_product(id) {
            Some(product) => {
                self.open(mode, Some(&product));
                true
            }
            None => {
                log::warn!("⚠️ [DIALOG] Product {} not in list", id);
                false
            }
        }
    }

    fn open(&self, mode: DialogMode, product: Option<&Product>) {
        if self.state.get_dialog().is_submitting() {
            log::warn!("⏳ [DIALOG] Confirm in flight, not reopening");
            return;
        }
        log::debug!("📝 [DIALOG] Open {:?}", mode);
        self.state.dialog.borrow_mut().open(mode, product);
        self.state.notify_subscribers();
    }

    // ========================================================================
    // DRAFT EDITS
    // ========================================================================
    // Typing does not notify: the input already shows the new value and a
    // re-render would steal focus.

    pub fn set_field(&self, field: DraftField, input: FieldInput) {
        if let Some(draft) = self.state.dialog.borrow_mut().draft_mut() {
            draft.set_field(field, input);
        }
    }

    pub fn set_image_at(&self, index: usize, value: String) -> bool {
        self.state
            .dialog
            .borrow_mut()
            .draft_mut()
            .map(|draft| draft.set_image_at(index, value))
            .unwrap_or(false)
    }

    pub fn append_image_slot(&self) -> bool {
        let max = self.max_image_slots;
        self.edit_slots(|draft| draft.append_image_slot(max))
    }

    pub fn remove_last_image_slot(&self) -> bool {
        self.edit_slots(|draft| draft.remove_last_image_slot())
    }

    fn edit_slots(&self, edit: impl FnOnce(&mut DraftProduct) -> bool) -> bool {
        let changed = self.state.dialog.borrow_mut().draft_mut().map(edit).unwrap_or(false);
        if changed {
            self.state.notify_subscribers();
        }
        changed
    }

    // ========================================================================
    // CONFIRM
    // ========================================================================

    /// Run the request for the open mode, reload the list, then close.
    ///
    /// `Ok(false)` when nothing is open or a confirm is already running.
    pub async fn confirm(&self) -> Result<bool, AdminError> {
        let started = self.state.dialog.borrow_mut().begin_submit();
        let Some((mode, draft)) = started else {
            return Ok(false);
        };
        self.state.notify_subscribers();

        let outcome = match mode {
            DialogMode::Create | DialogMode::Edit => self.save(mode, &draft).await,
            DialogMode::Delete => self.api.delete_product(&draft.id).await,
        };

        match outcome {
            Ok(()) => {
                log::info!("✅ [DIALOG] {:?} '{}' done", mode, draft.title);
                self.state.show_notice(Notice::info(mode.title(), done_message(mode, &draft.title)));
                // A failed reload replaces the notice above with its own error
                if let Err(e) = self.products.refresh().await {
                    log::warn!("⚠️ [DIALOG] Reload after {:?} failed: {}", mode, e);
                }
                self.state.dialog.borrow_mut().finish_submit(true);
                self.state.notify_subscribers();
                Ok(true)
            }
            Err(e) => {
                log::error!("❌ [DIALOG] {:?} failed: {}", mode, e);
                self.state.dialog.borrow_mut().finish_submit(false);
                self.state.show_error(&e);
                self.state.notify_subscribers();
                Err(e)
            }
        }
    }

    async fn save(&self, mode: DialogMode, draft: &DraftProduct) -> Result<(), AdminError> {
        let payload = to_wire_format(draft)?;
        let upsert_mode = if mode == DialogMode::Create {
            UpsertMode::Create
        } else {
            UpsertMode::Edit
        };
        self.api.upsert_product(upsert_mode, &payload).await
    }
}

fn done_message(mode: DialogMode, title: &str) -> String {
    let verb = match mode {
        DialogMode::Create => "created",
        DialogMode::Edit => "updated",
        DialogMode::Delete => "deleted",
    };
    format!("\"{}\" {}", title, verb)
}
