//! Members, availabilities, contacts and the login session.

use chrono::NaiveDate;

use crate::error::{CalzikError, CalzikResult};
use crate::model::{Availability, Contact, ContactFilter, TimeSlot, User};

/// Mutations of [`AppState`]. Applied with [`AppState::dispatch`].
#[derive(Debug, Clone)]
pub enum AppAction {
    Login(User),
    Logout,
    AddAvailability(Availability),
    UpdateAvailability(Availability),
    AddContact(Contact),
    UpdateContact(Contact),
    DeleteContact(String),
    /// Replaces the user with the same id, or adds it.
    UpsertUser(User),
}

impl AppAction {
    fn name(&self) -> &'static str {
        match self {
            AppAction::Login(_) => "login",
            AppAction::Logout => "logout",
            AppAction::AddAvailability(_) => "add_availability",
            AppAction::UpdateAvailability(_) => "update_availability",
            AppAction::AddContact(_) => "add_contact",
            AppAction::UpdateContact(_) => "update_contact",
            AppAction::DeleteContact(_) => "delete_contact",
            AppAction::UpsertUser(_) => "upsert_user",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub users: Vec<User>,
    pub availabilities: Vec<Availability>,
    pub contacts: Vec<Contact>,
    session: Option<String>,
}

impl AppState {
    pub fn new(
        users: Vec<User>,
        availabilities: Vec<Availability>,
        contacts: Vec<Contact>,
        session: Option<String>,
    ) -> Self {
        AppState {
            users,
            availabilities,
            contacts,
            session,
        }
    }

    /// Apply an action. Updates and deletes of unknown ids are no-ops.
    pub fn dispatch(&mut self, action: AppAction) {
        log::debug!("dispatch {}", action.name());

        match action {
            AppAction::Login(user) => self.session = Some(user.id),
            AppAction::Logout => self.session = None,
            AppAction::AddAvailability(availability) => self.availabilities.push(availability),
            AppAction::UpdateAvailability(availability) => {
                if let Some(existing) = self
                    .availabilities
                    .iter_mut()
                    .find(|a| a.id == availability.id)
                {
                    *existing = availability;
                }
            }
            AppAction::AddContact(contact) => self.contacts.push(contact),
            AppAction::UpdateContact(contact) => {
                if let Some(existing) = self.contacts.iter_mut().find(|c| c.id == contact.id) {
                    *existing = contact;
                }
            }
            AppAction::DeleteContact(id) => self.contacts.retain(|c| c.id != id),
            AppAction::UpsertUser(user) => {
                match self.users.iter_mut().find(|u| u.id == user.id) {
                    Some(existing) => *existing = user,
                    None => self.users.push(user),
                }
            }
        }
    }

    // SESSION + USERS:

    pub fn session_user_id(&self) -> Option<&str> {
        self.session.as_deref()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_deref().and_then(|id| self.user(id))
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn toggle_user_active(&mut self, id: &str) -> CalzikResult<User> {
        let mut user = self
            .user(id)
            .cloned()
            .ok_or_else(|| CalzikError::not_found("User", id))?;
        user.is_active = !user.is_active;
        self.dispatch(AppAction::UpsertUser(user.clone()));
        Ok(user)
    }

    pub fn toggle_user_role(&mut self, id: &str) -> CalzikResult<User> {
        let mut user = self
            .user(id)
            .cloned()
            .ok_or_else(|| CalzikError::not_found("User", id))?;
        user.role = user.role.toggled();
        self.dispatch(AppAction::UpsertUser(user.clone()));
        Ok(user)
    }

    // AVAILABILITY:

    pub fn find_availability(
        &self,
        user_id: &str,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Option<&Availability> {
        self.availabilities
            .iter()
            .find(|a| a.is_for(user_id, date, slot))
    }

    /// Flip the user's answer for a slot, or record "available" if they
    /// haven't answered yet.
    ///
    /// Starting from no record, repeated calls go available, unavailable,
    /// available, and so on.
    pub fn toggle_availability(
        &mut self,
        user_id: &str,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Availability {
        match self.find_availability(user_id, date, slot) {
            Some(existing) => {
                let mut updated = existing.clone();
                updated.is_available = !existing.is_available;
                self.dispatch(AppAction::UpdateAvailability(updated.clone()));
                updated
            }
            None => {
                let created = Availability::new(user_id, date, slot, true);
                self.dispatch(AppAction::AddAvailability(created.clone()));
                created
            }
        }
    }

    /// Record the user as available for a slot, reusing their existing record.
    pub fn declare_availability(
        &mut self,
        user_id: &str,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Availability {
        match self.find_availability(user_id, date, slot) {
            Some(existing) => {
                let mut updated = existing.clone();
                updated.is_available = true;
                self.dispatch(AppAction::UpdateAvailability(updated.clone()));
                updated
            }
            None => {
                let created = Availability::new(user_id, date, slot, true);
                self.dispatch(AppAction::AddAvailability(created.clone()));
                created
            }
        }
    }

    /// The user's own records, by date then slot.
    pub fn user_slots(&self, user_id: &str) -> Vec<&Availability> {
        let mut slots: Vec<&Availability> = self
            .availabilities
            .iter()
            .filter(|a| a.user_id == user_id)
            .collect();
        slots.sort_by_key(|a| (a.date, a.time_slot));
        slots
    }

    // CONTACTS:

    pub fn contact(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn filter_contacts(&self, filter: &ContactFilter) -> Vec<&Contact> {
        self.contacts.iter().filter(|c| filter.matches(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactKind, Role};

    fn make_state() -> AppState {
        let users = vec![
            User {
                id: "1".to_string(),
                email: "admin@calzik.fr".to_string(),
                name: "Marie Dupont".to_string(),
                instrument: "Guitare".to_string(),
                role: Role::Admin,
                is_active: true,
            },
            User {
                id: "2".to_string(),
                email: "pierre@calzik.fr".to_string(),
                name: "Pierre Martin".to_string(),
                instrument: "Batterie".to_string(),
                role: Role::Member,
                is_active: true,
            },
        ];
        AppState::new(users, vec![], vec![], None)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 12).unwrap()
    }

    fn slot() -> TimeSlot {
        TimeSlot::parse("19:00-22:00").unwrap()
    }

    // --- toggle_availability ---

    #[test]
    fn first_toggle_creates_available() {
        let mut state = make_state();
        let record = state.toggle_availability("2", date(), slot());
        assert!(record.is_available);
        assert_eq!(state.availabilities.len(), 1);
    }

    #[test]
    fn toggle_cycles_available_unavailable_available() {
        let mut state = make_state();
        let first = state.toggle_availability("2", date(), slot());
        let second = state.toggle_availability("2", date(), slot());
        let third = state.toggle_availability("2", date(), slot());

        assert!(first.is_available);
        assert!(!second.is_available);
        assert!(third.is_available);
        assert_eq!(first.id, third.id);
        assert_eq!(state.availabilities.len(), 1);
    }

    #[test]
    fn toggle_matches_differently_spelled_slot() {
        let mut state = make_state();
        state.toggle_availability("2", date(), slot());
        let spelled = TimeSlot::parse("19:00 - 22:00").unwrap();
        let record = state.toggle_availability("2", date(), spelled);

        assert!(!record.is_available);
        assert_eq!(state.availabilities.len(), 1);
    }

    #[test]
    fn declare_never_duplicates() {
        let mut state = make_state();
        state.toggle_availability("2", date(), slot());
        state.toggle_availability("2", date(), slot());

        let record = state.declare_availability("2", date(), slot());
        assert!(record.is_available);
        assert_eq!(state.availabilities.len(), 1);
    }

    #[test]
    fn user_slots_are_sorted() {
        let mut state = make_state();
        let later = date().succ_opt().unwrap();
        state.toggle_availability("2", later, slot());
        state.toggle_availability("2", date(), TimeSlot::parse("20:00-23:00").unwrap());
        state.toggle_availability("2", date(), TimeSlot::parse("14:00-17:00").unwrap());
        state.toggle_availability("1", date(), slot());

        let slots = state.user_slots("2");
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0].time_slot.to_string(), "14:00-17:00");
        assert_eq!(slots[1].time_slot.to_string(), "20:00-23:00");
        assert_eq!(slots[2].date, later);
    }

    // --- session + users ---

    #[test]
    fn login_and_logout() {
        let mut state = make_state();
        let user = state.user("1").cloned().unwrap();
        state.dispatch(AppAction::Login(user));
        assert_eq!(state.current_user().unwrap().name, "Marie Dupont");

        state.dispatch(AppAction::Logout);
        assert!(state.current_user().is_none());
    }

    #[test]
    fn upsert_adds_then_replaces() {
        let mut state = make_state();
        let mut thomas = User::new("thomas@calzik.fr", "Thomas Petit", "Clavier", Role::Member);
        state.dispatch(AppAction::UpsertUser(thomas.clone()));
        assert_eq!(state.users.len(), 3);

        thomas.instrument = "Piano".to_string();
        state.dispatch(AppAction::UpsertUser(thomas.clone()));
        assert_eq!(state.users.len(), 3);
        assert_eq!(state.user(&thomas.id).unwrap().instrument, "Piano");
    }

    #[test]
    fn toggles_on_users() {
        let mut state = make_state();
        let user = state.toggle_user_active("2").unwrap();
        assert!(!user.is_active);
        assert_eq!(state.users.iter().filter(|u| u.is_active).count(), 1);

        let user = state.toggle_user_role("2").unwrap();
        assert_eq!(user.role, Role::Admin);

        assert!(matches!(
            state.toggle_user_role("99"),
            Err(CalzikError::NotFound { .. })
        ));
    }

    // --- contacts ---

    #[test]
    fn contact_crud() {
        let mut state = make_state();
        let mut contact = Contact {
            id: "c1".to_string(),
            name: "Salle des Fêtes".to_string(),
            kind: ContactKind::Salle,
            email: "contact@salledesfetes.fr".to_string(),
            phone: None,
            address: "12 Place de la Mairie".to_string(),
            city: "Lyon".to_string(),
            postal_code: "69000".to_string(),
            notes: None,
        };
        state.dispatch(AppAction::AddContact(contact.clone()));

        contact.notes = Some("Capacité 200 personnes".to_string());
        state.dispatch(AppAction::UpdateContact(contact));
        assert!(state.contact("c1").unwrap().notes.is_some());

        state.dispatch(AppAction::DeleteContact("c1".to_string()));
        assert!(state.contacts.is_empty());
    }
}
