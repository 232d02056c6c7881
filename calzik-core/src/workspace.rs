//! The band's data, loaded from a repository and saved after every change.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::auth;
use crate::error::{CalzikError, CalzikResult};
use crate::invoice::{self, InvoiceDraft};
use crate::model::{
    Availability, Concert, ConcertDraft, Contact, EventStatus, Idea, IdeaStatus, Invoice,
    StoredDocument, TimeSlot, User, new_id,
};
use crate::overdue::{ReconcileReport, reconcile_overdue};
use crate::seed::DemoData;
use crate::state::{
    AppAction, AppState, DocumentShelf, EventStore, IdeaBoard, InvoiceBook, NotificationCenter,
};
use crate::store::{self, Repository, keys};

#[derive(Debug, Clone)]
pub struct WorkspaceSettings {
    pub overdue_days: i64,
    pub document_quota: u64,
    /// Where uploaded files are copied.
    pub documents_dir: PathBuf,
}

pub struct Workspace {
    repo: Box<dyn Repository>,
    settings: WorkspaceSettings,
    app: AppState,
    events: EventStore,
    invoices: InvoiceBook,
    notifications: NotificationCenter,
    ideas: IdeaBoard,
    documents: DocumentShelf,
}

impl Workspace {
    /// Load every store. Unreadable documents load empty.
    ///
    /// Overdue invoices are reconciled against `today` right away.
    pub fn open(
        repo: Box<dyn Repository>,
        settings: WorkspaceSettings,
        today: NaiveDate,
    ) -> CalzikResult<Self> {
        let r = repo.as_ref();
        let app = AppState::new(
            store::load_collection(r, keys::USERS),
            store::load_collection(r, keys::AVAILABILITIES),
            store::load_collection(r, keys::CONTACTS),
            store::load_value(r, keys::SESSION),
        );
        let events = EventStore::new(store::load_collection(r, keys::CONCERTS));
        let invoices = InvoiceBook::new(store::load_collection(r, keys::INVOICES));
        let notifications = NotificationCenter::new(store::load_collection(r, keys::NOTIFICATIONS));
        let ideas = IdeaBoard::new(store::load_collection(r, keys::IDEAS));
        let documents = DocumentShelf::new(
            store::load_collection(r, keys::DOCUMENTS),
            settings.document_quota,
        );

        let mut workspace = Workspace {
            repo,
            settings,
            app,
            events,
            invoices,
            notifications,
            ideas,
            documents,
        };
        log::info!(
            "Opened workspace: {} member(s), {} event(s), {} invoice(s)",
            workspace.app.users.len(),
            workspace.events.all().len(),
            workspace.invoices.all().len()
        );

        workspace.reconcile(today)?;
        Ok(workspace)
    }

    pub fn settings(&self) -> &WorkspaceSettings {
        &self.settings
    }

    pub fn app(&self) -> &AppState {
        &self.app
    }

    pub fn events(&self) -> &EventStore {
        &self.events
    }

    pub fn invoices(&self) -> &InvoiceBook {
        &self.invoices
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn ideas(&self) -> &IdeaBoard {
        &self.ideas
    }

    pub fn documents(&self) -> &DocumentShelf {
        &self.documents
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> CalzikResult<()> {
        store::save_value(self.repo.as_ref(), key, value)
    }

    /// Replace everything with the demo band.
    ///
    /// Stores the demo has no data for are emptied, stored files included,
    /// and the invoice counter starts over.
    pub fn seed(&mut self, data: DemoData) -> CalzikResult<()> {
        let stale_documents = self.documents.all().to_vec();

        self.app = AppState::new(data.users, data.availabilities, data.contacts, None);
        self.events = EventStore::new(data.concerts);
        self.invoices = InvoiceBook::default();
        self.notifications = NotificationCenter::default();
        self.ideas = IdeaBoard::default();
        self.documents = DocumentShelf::new(Vec::new(), self.settings.document_quota);

        self.save(keys::USERS, &self.app.users)?;
        self.save(keys::AVAILABILITIES, &self.app.availabilities)?;
        self.save(keys::CONTACTS, &self.app.contacts)?;
        self.save(keys::CONCERTS, self.events.all())?;
        self.save(keys::INVOICES, self.invoices.all())?;
        self.save(keys::NOTIFICATIONS, self.notifications.all())?;
        self.save(keys::IDEAS, self.ideas.all())?;
        self.save(keys::DOCUMENTS, self.documents.all())?;
        self.repo.delete(keys::INVOICE_SEQ)?;
        self.repo.delete(keys::SESSION)?;

        self.remove_files(&stale_documents);
        Ok(())
    }

    // SESSION:

    pub fn current_user(&self) -> CalzikResult<&User> {
        self.app.current_user().ok_or(CalzikError::NotLoggedIn)
    }

    fn require_admin(&self) -> CalzikResult<&User> {
        let user = self.current_user()?;
        auth::require_admin(user)?;
        Ok(user)
    }

    pub fn login(&mut self, email: &str, password: &str) -> CalzikResult<User> {
        let user = auth::login(&self.app.users, email, password)?.clone();
        self.app.dispatch(AppAction::Login(user.clone()));
        self.save(keys::SESSION, &user.id)?;
        log::info!("Logged in as {}", user.email);
        Ok(user)
    }

    pub fn logout(&mut self) -> CalzikResult<()> {
        self.app.dispatch(AppAction::Logout);
        self.repo.delete(keys::SESSION)
    }

    // AVAILABILITY:

    pub fn toggle_availability(&mut self, date: NaiveDate, slot: TimeSlot) -> CalzikResult<Availability> {
        let user_id = self.current_user()?.id.clone();
        let availability = self.app.toggle_availability(&user_id, date, slot);
        self.save(keys::AVAILABILITIES, &self.app.availabilities)?;
        Ok(availability)
    }

    pub fn declare_availability(&mut self, date: NaiveDate, slot: TimeSlot) -> CalzikResult<Availability> {
        let user_id = self.current_user()?.id.clone();
        let availability = self.app.declare_availability(&user_id, date, slot);
        self.save(keys::AVAILABILITIES, &self.app.availabilities)?;
        Ok(availability)
    }

    // EVENTS:

    /// Create an event. The current member is recorded as its author.
    pub fn add_event(&mut self, mut draft: ConcertDraft) -> CalzikResult<Concert> {
        draft.created_by = self.current_user()?.id.clone();
        let concert = self.events.create(draft).clone();
        self.save(keys::CONCERTS, self.events.all())?;
        Ok(concert)
    }

    /// Replace an event's details. The author stays whoever created it.
    pub fn update_event(&mut self, mut concert: Concert) -> CalzikResult<Concert> {
        self.current_user()?;
        let existing = self
            .events
            .get(&concert.id)
            .ok_or_else(|| CalzikError::not_found("Event", &concert.id))?;
        concert.created_by = existing.created_by.clone();

        self.events.update(concert.clone())?;
        self.save(keys::CONCERTS, self.events.all())?;
        Ok(concert)
    }

    pub fn set_event_status(&mut self, id: &str, status: EventStatus) -> CalzikResult<Concert> {
        self.current_user()?;
        let concert = self.events.set_status(id, status)?.clone();
        self.save(keys::CONCERTS, self.events.all())?;
        Ok(concert)
    }

    pub fn delete_event(&mut self, id: &str) -> CalzikResult<Concert> {
        self.require_admin()?;
        let concert = self.events.delete(id)?;
        self.save(keys::CONCERTS, self.events.all())?;
        Ok(concert)
    }

    // CONTACTS:

    pub fn add_contact(&mut self, contact: Contact) -> CalzikResult<()> {
        self.current_user()?;
        if contact.name.trim().is_empty() {
            return Err(CalzikError::Validation("a contact needs a name".into()));
        }
        self.app.dispatch(AppAction::AddContact(contact));
        self.save(keys::CONTACTS, &self.app.contacts)
    }

    pub fn update_contact(&mut self, contact: Contact) -> CalzikResult<()> {
        self.current_user()?;
        if contact.name.trim().is_empty() {
            return Err(CalzikError::Validation("a contact needs a name".into()));
        }
        if self.app.contact(&contact.id).is_none() {
            return Err(CalzikError::not_found("Contact", &contact.id));
        }
        self.app.dispatch(AppAction::UpdateContact(contact));
        self.save(keys::CONTACTS, &self.app.contacts)
    }

    pub fn delete_contact(&mut self, id: &str) -> CalzikResult<Contact> {
        self.require_admin()?;
        let contact = self
            .app
            .contact(id)
            .cloned()
            .ok_or_else(|| CalzikError::not_found("Contact", id))?;
        self.app.dispatch(AppAction::DeleteContact(id.to_string()));
        self.save(keys::CONTACTS, &self.app.contacts)?;
        Ok(contact)
    }

    // INVOICES:

    /// Number, record and save a new invoice.
    pub fn create_invoice(&mut self, draft: InvoiceDraft, today: NaiveDate) -> CalzikResult<Invoice> {
        self.require_admin()?;
        draft.validate()?;

        let number = invoice::next_number(self.repo.as_ref(), today.year(), self.invoices.max_seq())?;
        let created = self.invoices.create(draft, number)?.clone();
        self.save(keys::INVOICES, self.invoices.all())?;
        self.reconcile(today)?;
        Ok(created)
    }

    pub fn toggle_invoice_paid(&mut self, id: &str, today: NaiveDate) -> CalzikResult<Invoice> {
        self.require_admin()?;
        let invoice = self.invoices.toggle_paid(id)?.clone();
        self.save(keys::INVOICES, self.invoices.all())?;
        self.reconcile(today)?;
        Ok(invoice)
    }

    /// Re-run the overdue rule and save notifications if anything changed.
    pub fn reconcile(&mut self, today: NaiveDate) -> CalzikResult<ReconcileReport> {
        let report = reconcile_overdue(
            self.invoices.all(),
            &mut self.notifications,
            today,
            self.settings.overdue_days,
            Utc::now(),
        );
        if !report.is_empty() {
            self.save(keys::NOTIFICATIONS, self.notifications.all())?;
        }
        Ok(report)
    }

    // NOTIFICATIONS:

    pub fn mark_notifications_read(&mut self) -> CalzikResult<usize> {
        let changed = self.notifications.mark_all_read();
        if changed > 0 {
            self.save(keys::NOTIFICATIONS, self.notifications.all())?;
        }
        Ok(changed)
    }

    // USERS:

    /// Add a member, or replace the one with the same id.
    pub fn upsert_user(&mut self, user: User) -> CalzikResult<()> {
        self.require_admin()?;
        if user.email.trim().is_empty() || user.name.trim().is_empty() {
            return Err(CalzikError::Validation("a member needs an email and a name".into()));
        }
        let email = user.email.trim().to_lowercase();
        if self
            .app
            .users
            .iter()
            .any(|u| u.id != user.id && u.email.trim().to_lowercase() == email)
        {
            return Err(CalzikError::Validation(format!("{} is already a member", user.email)));
        }
        self.app.dispatch(AppAction::UpsertUser(user));
        self.save(keys::USERS, &self.app.users)
    }

    pub fn toggle_user_active(&mut self, id: &str) -> CalzikResult<User> {
        self.require_admin()?;
        let user = self.app.toggle_user_active(id)?;
        self.save(keys::USERS, &self.app.users)?;
        Ok(user)
    }

    pub fn toggle_user_role(&mut self, id: &str) -> CalzikResult<User> {
        self.require_admin()?;
        let user = self.app.toggle_user_role(id)?;
        self.save(keys::USERS, &self.app.users)?;
        Ok(user)
    }

    // IDEAS:

    pub fn add_idea(&mut self, text: &str, today: NaiveDate) -> CalzikResult<Idea> {
        let author = self.current_user()?.name.clone();
        let idea = self.ideas.add(text, &author, today)?.clone();
        self.save(keys::IDEAS, self.ideas.all())?;
        Ok(idea)
    }

    pub fn set_idea_status(&mut self, id: &str, status: IdeaStatus) -> CalzikResult<Idea> {
        self.current_user()?;
        let idea = self.ideas.set_status(id, status)?.clone();
        self.save(keys::IDEAS, self.ideas.all())?;
        Ok(idea)
    }

    pub fn edit_idea(&mut self, id: &str, text: &str) -> CalzikResult<Idea> {
        self.current_user()?;
        let idea = self.ideas.edit(id, text)?.clone();
        self.save(keys::IDEAS, self.ideas.all())?;
        Ok(idea)
    }

    /// Authors may delete their own ideas; leaders may delete any.
    pub fn delete_idea(&mut self, id: &str) -> CalzikResult<Idea> {
        let user = self.current_user()?;
        let idea = self
            .ideas
            .all()
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| CalzikError::not_found("Idea", id))?;
        if idea.author != user.name {
            auth::require_admin(user)?;
        }

        let idea = self.ideas.delete(id)?;
        self.save(keys::IDEAS, self.ideas.all())?;
        Ok(idea)
    }

    // DOCUMENTS:

    /// Copy files into the documents directory and record them.
    ///
    /// The whole batch is refused if it would go over the quota. If a copy
    /// or the save fails, the files already copied for this batch are removed.
    pub fn add_documents(&mut self, paths: &[PathBuf]) -> CalzikResult<Vec<StoredDocument>> {
        let uploader = self.current_user()?.id.clone();

        let mut sizes = Vec::with_capacity(paths.len());
        for path in paths {
            let metadata = std::fs::metadata(path)?;
            if !metadata.is_file() {
                return Err(CalzikError::Validation(format!("{} is not a file", path.display())));
            }
            sizes.push(metadata.len());
        }
        self.documents.check_room(sizes.iter().sum())?;

        std::fs::create_dir_all(&self.settings.documents_dir)?;

        let mut batch: Vec<StoredDocument> = Vec::with_capacity(paths.len());
        for (path, size) in paths.iter().zip(sizes) {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "document".to_string());
            let id = new_id();
            let stored_as = stored_name(&id, path);

            if let Err(e) = std::fs::copy(path, self.settings.documents_dir.join(&stored_as)) {
                self.remove_files(&batch);
                return Err(e.into());
            }

            batch.push(StoredDocument {
                id,
                name,
                size,
                stored_as,
                added: Utc::now(),
                uploaded_by: uploader.clone(),
            });
        }

        let previous = self.documents.clone();
        let recorded = self
            .documents
            .add_all(batch.clone())
            .and_then(|()| self.save(keys::DOCUMENTS, self.documents.all()));
        if let Err(e) = recorded {
            self.documents = previous;
            self.remove_files(&batch);
            return Err(e);
        }

        log::info!("Stored {} document(s)", batch.len());
        Ok(batch)
    }

    /// Delete the stored files of `documents`. Failures are logged, not returned.
    fn remove_files(&self, documents: &[StoredDocument]) {
        for document in documents {
            let path = self.document_path(document);
            match std::fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => log::warn!("Could not remove {}: {}", path.display(), e),
            }
        }
    }

    pub fn document_path(&self, document: &StoredDocument) -> PathBuf {
        self.settings.documents_dir.join(&document.stored_as)
    }

    pub fn delete_document(&mut self, id: &str) -> CalzikResult<StoredDocument> {
        self.require_admin()?;
        let document = self.documents.remove(id)?;
        self.save(keys::DOCUMENTS, self.documents.all())?;

        let path = self.document_path(&document);
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(document)
    }
}

/// `<id>-<slugified stem>.<ext>`, so two uploads never collide.
fn stored_name(id: &str, path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| slug::slugify(s.to_string_lossy()))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "document".to_string());

    match path.extension() {
        Some(ext) => format!("{}-{}.{}", id, stem, ext.to_string_lossy().to_lowercase()),
        None => format!("{}-{}", id, stem),
    }
}
