// Presentation builders: badges and toasts

pub mod badge;
pub mod toast;

pub use badge::*;
pub use toast::*;
