//! The band calendar: concerts, rehearsals and auditions.

use crate::error::{CalzikError, CalzikResult};
use crate::model::{Concert, ConcertDraft, EventStatus};

#[derive(Debug, Clone, Default)]
pub struct EventStore {
    concerts: Vec<Concert>,
}

impl EventStore {
    pub fn new(concerts: Vec<Concert>) -> Self {
        EventStore { concerts }
    }

    pub fn all(&self) -> &[Concert] {
        &self.concerts
    }

    pub fn get(&self, id: &str) -> Option<&Concert> {
        self.concerts.iter().find(|c| c.id == id)
    }

    pub fn create(&mut self, draft: ConcertDraft) -> &Concert {
        let concert = Concert::from_draft(draft);
        log::debug!("Created event {} ({})", concert.id, concert.title);
        self.concerts.push(concert);
        &self.concerts[self.concerts.len() - 1]
    }

    /// Replace the stored concert that has the same id.
    pub fn update(&mut self, concert: Concert) -> CalzikResult<()> {
        let existing = self
            .concerts
            .iter_mut()
            .find(|c| c.id == concert.id)
            .ok_or_else(|| CalzikError::not_found("Event", &concert.id))?;
        *existing = concert;
        Ok(())
    }

    pub fn set_status(&mut self, id: &str, status: EventStatus) -> CalzikResult<&Concert> {
        let concert = self
            .concerts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CalzikError::not_found("Event", id))?;
        concert.status = status;
        Ok(concert)
    }

    pub fn delete(&mut self, id: &str) -> CalzikResult<Concert> {
        let index = self
            .concerts
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CalzikError::not_found("Event", id))?;
        Ok(self.concerts.remove(index))
    }

    /// All events, earliest first.
    pub fn sorted(&self) -> Vec<&Concert> {
        let mut sorted: Vec<&Concert> = self.concerts.iter().collect();
        sorted.sort_by_key(|c| (c.date, c.time));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventKind;
    use chrono::{NaiveDate, NaiveTime};

    fn make_draft(title: &str, day: u32, hour: u32) -> ConcertDraft {
        ConcertDraft {
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 12, day).unwrap(),
            time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            end_time: None,
            venue: "Salle des Fêtes".to_string(),
            kind: EventKind::Concert,
            status: EventStatus::Pending,
            contact_id: None,
            description: None,
            created_by: "1".to_string(),
        }
    }

    #[test]
    fn create_assigns_distinct_ids() {
        let mut store = EventStore::default();
        let a = store.create(make_draft("Noël", 15, 20)).id.clone();
        let b = store.create(make_draft("Répétition", 12, 19)).id.clone();
        assert_ne!(a, b);
        assert_eq!(store.all().len(), 2);
    }

    #[test]
    fn sorted_by_date_then_time() {
        let mut store = EventStore::default();
        store.create(make_draft("late", 15, 21));
        store.create(make_draft("early", 15, 18));
        store.create(make_draft("before", 12, 22));

        let titles: Vec<&str> = store.sorted().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["before", "early", "late"]);
    }

    #[test]
    fn update_status_and_delete() {
        let mut store = EventStore::default();
        let id = store.create(make_draft("Noël", 15, 20)).id.clone();

        let concert = store.set_status(&id, EventStatus::Confirmed).unwrap();
        assert_eq!(concert.status, EventStatus::Confirmed);

        let mut edited = store.get(&id).unwrap().clone();
        edited.venue = "Théâtre".to_string();
        store.update(edited).unwrap();
        assert_eq!(store.get(&id).unwrap().venue, "Théâtre");

        store.delete(&id).unwrap();
        assert!(store.get(&id).is_none());
        assert!(matches!(store.delete(&id), Err(CalzikError::NotFound { .. })));
    }
}
