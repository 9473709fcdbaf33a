//! analytics : reconstructs readable timelines from the register change log


// crate-specific lint exceptions:
#![allow(clippy::missing_errors_doc)]


pub mod hidden_keys;
pub mod query_changes;
pub mod render;
pub mod timeline;
