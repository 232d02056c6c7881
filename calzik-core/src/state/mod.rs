//! In-memory stores, one per domain.
//!
//! Stores only mutate themselves; persisting them is the job of
//! [`crate::workspace::Workspace`].

mod app;
mod documents;
mod events;
mod ideas;
mod invoices;
mod notifications;

pub use app::{AppAction, AppState};
pub use documents::DocumentShelf;
pub use events::EventStore;
pub use ideas::IdeaBoard;
pub use invoices::InvoiceBook;
pub use notifications::NotificationCenter;
