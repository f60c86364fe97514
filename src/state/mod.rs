pub mod filter;
pub mod flask;
pub mod tab;
pub mod toast;

pub use filter::{categories_present, DiscoveryFilter};
pub use flask::{Flask, FlaskAction};
pub use tab::Tab;
pub use toast::{flask_full_toast, toasts_for_report, Toast, ToastAction, ToastKind, ToastQueue};
