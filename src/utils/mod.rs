// Utils compartidos

pub mod constants;
pub mod error_format;

pub use constants::*;
pub use error_format::format_error_detail;
