// Core data models: locales, execution labels and job records

pub mod job;
pub mod locale;
pub mod status;

pub use job::*;
pub use locale::*;
pub use status::*;
