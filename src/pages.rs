//! Page composition for section documents and the outline preview.

pub mod outline;
pub mod section;
