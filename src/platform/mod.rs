//! Platform abstraction layer
//!
//! Maps browser/native input onto engine commands. Rendering and timing
//! stay with the host page.

pub mod input;

pub use input::{InputAction, action_for_key};
