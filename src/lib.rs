//! Console frame (workspace facade crate).
//!
//! Exposes `console_frame::{term, types}` while the implementation lives in
//! dedicated crates under `crates/`.

pub use console_frame_term as term;
pub use console_frame_types as types;
