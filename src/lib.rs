//! # gurumi
//!
//! Crochet-pattern interpretation and layout: turns a structured pattern
//! record into an interactive checklist with round counters, or into a
//! printable PDF with a cover page.
//!
//! The engine lives in the workspace crates and is re-exported here; this
//! crate adds the application layer around it:
//! - [`GurumiConfig`]: save directory, logo and page setup
//! - [`PatternStore`]: the on-disk inventory of saved projects
//! - [`Session`]: the pattern being worked on and its progress
//! - [`TerminalChecklist`]: a [`ChecklistHost`] that prints to a terminal

pub use gurumi_core::*;
pub use gurumi_render_lopdf::LopdfCanvas;
pub use gurumi_resource::FilesystemResourceProvider;

pub mod config;
pub mod error;
pub mod session;
pub mod store;
pub mod terminal;

pub use config::{GurumiConfig, GurumiConfigBuilder};
pub use error::AppError;
pub use session::Session;
pub use store::{PatternStore, SavedPattern, StoreError, safe_name};
pub use terminal::TerminalChecklist;
