// ============================================================================
// ADMIN STATE - Shared state of the panel (Rc<RefCell> + subscribers)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::AdminError;
use crate::models::auth::Credentials;
use crate::models::product::Product;
use crate::state::auth_state::AuthState;
use crate::state::dialog_state::DialogState;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Message shown in the notification banner
#[derive(Clone, PartialEq, Debug)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            text: text.into(),
        }
    }
}

impl From<&AdminError> for Notice {
    fn from(error: &AdminError) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: error.title().to_string(),
            text: error.to_string(),
        }
    }
}

#[derive(Clone, Default)]
pub struct AdminState {
    pub auth: AuthState,
    /// Product list as last returned by the server
    pub products: Rc<RefCell<Vec<Product>>>,
    pub dialog: Rc<RefCell<DialogState>>,
    pub login_form: Rc<RefCell<Credentials>>,
    pub notice: Rc<RefCell<Option<Notice>>>,

    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AdminState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list
    pub fn set_products(&self, products: Vec<Product>) {
        *self.products.borrow_mut() = products;
    }

    pub fn get_products(&self) -> Vec<Product> {
        self.products.borrow().clone()
    }

    pub fn find_product(&self, id: &str) -> Option<Product> {
        self.products.borrow().iter().find(|p| p.id == id).cloned()
    }

    pub fn get_dialog(&self) -> DialogState {
        self.dialog.borrow().clone()
    }

    pub fn credentials(&self) -> Credentials {
        self.login_form.borrow().clone()
    }

    pub fn show_notice(&self, notice: Notice) {
        *self.notice.borrow_mut() = Some(notice);
    }

    pub fn show_error(&self, error: &AdminError) {
        self.show_notice(Notice::from(error));
    }

    pub fn dismiss_notice(&self) {
        *self.notice.borrow_mut() = None;
    }

    pub fn get_notice(&self) -> Option<Notice> {
        self.notice.borrow().clone()
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Ask every subscriber to re-render
    pub fn notify_subscribers(&self) {
        // Snapshot so a callback may subscribe without a double borrow
        let subscribers: Vec<_> = self.change_subscribers.borrow().iter().cloned().collect();
        for callback in subscribers {
            callback();
        }
    }
}
