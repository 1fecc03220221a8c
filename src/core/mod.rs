//! Core browsing logic.
//!
//! This module contains:
//! - Debouncer: collapses bursts of keystrokes
//! - Browser: filter/search coordinator
//! - Init: page initialization from a URL

pub mod browser;
pub mod debounce;
pub mod init;

// Re-export commonly used types
pub use browser::{Browser, RenderNotice, RenderTrigger, UiEvent};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use init::{initialize, open_page, resolve_detail, DetailView, PageError, PageRequest};
