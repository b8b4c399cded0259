pub mod app;
pub mod selector;
pub mod notification_modal;

pub use app::render_app;
pub use selector::render_selector;
pub use notification_modal::render_notification_modal;
