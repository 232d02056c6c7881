//! Entity records owned by the calzik stores.
//!
//! Every entity serializes to camelCase JSON, which is the layout stored by
//! the repository.

mod availability;
mod concert;
mod contact;
mod document;
mod idea;
mod invoice;
mod notification;
mod time_format;
mod user;

pub use availability::{Availability, TimeSlot};
pub use concert::{Concert, ConcertDraft, EventKind, EventStatus};
pub use contact::{Contact, ContactFilter, ContactKind};
pub use document::StoredDocument;
pub use idea::{Idea, IdeaStatus};
pub use invoice::{Invoice, InvoiceNumber, Party};
pub use notification::Notification;
pub use user::{Role, User};

use uuid::Uuid;

/// Short random identifier for new records.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}
