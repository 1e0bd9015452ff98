pub mod admin_viewmodel;
pub mod dialog_viewmodel;
pub mod product_list_viewmodel;
pub mod session_viewmodel;

pub use admin_viewmodel::AdminViewModel;
pub use dialog_viewmodel::DialogViewModel;
pub use product_list_viewmodel::ProductListViewModel;
pub use session_viewmodel::SessionViewModel;
