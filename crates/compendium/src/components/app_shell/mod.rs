//! App shell components: AppBar, StatusFooter, Toast
//!
//! These components form the persistent UI framework around the catalog.

mod appbar;
mod footer;
mod toast;

pub use appbar::AppBar;
pub use footer::StatusFooter;
pub use toast::{acknowledge, Acknowledgement, Toast, ToastState};
