use crate::model::Notification;

#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(items: Vec<Notification>) -> Self {
        NotificationCenter { items }
    }

    pub fn all(&self) -> &[Notification] {
        &self.items
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|n| n.id == id)
    }

    /// Add unless a notification with the same id exists. New entries are unread.
    pub fn add(&mut self, mut notification: Notification) -> bool {
        if self.contains(&notification.id) {
            return false;
        }
        notification.read = false;
        self.items.push(notification);
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Returns how many notifications were unread.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for notification in self.items.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed += 1;
        }
        changed
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Newest first.
    pub fn sorted(&self) -> Vec<&Notification> {
        let mut sorted: Vec<&Notification> = self.items.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_notification(id: &str, day: u32) -> Notification {
        Notification::new(id, id, Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap())
    }

    #[test]
    fn add_is_idempotent_per_id() {
        let mut center = NotificationCenter::default();
        assert!(center.add(make_notification("invoice-1", 1)));
        assert!(!center.add(make_notification("invoice-1", 2)));
        assert_eq!(center.all().len(), 1);
    }

    #[test]
    fn read_state() {
        let mut center = NotificationCenter::default();
        center.add(make_notification("a", 1));
        center.add(make_notification("b", 2));
        assert_eq!(center.unread_count(), 2);

        assert_eq!(center.mark_all_read(), 2);
        assert_eq!(center.unread_count(), 0);
        assert_eq!(center.mark_all_read(), 0);
    }

    #[test]
    fn remove_and_sort() {
        let mut center = NotificationCenter::default();
        center.add(make_notification("old", 1));
        center.add(make_notification("new", 9));
        center.add(make_notification("mid", 5));

        let ids: Vec<&str> = center.sorted().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);

        assert!(center.remove("mid"));
        assert!(!center.remove("mid"));
        assert_eq!(center.all().len(), 2);
    }
}
