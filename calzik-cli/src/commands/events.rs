use anyhow::Result;
use calzik_core::model::{Concert, ConcertDraft, EventKind, EventStatus};
use calzik_core::workspace::Workspace;
use chrono::{NaiveDate, NaiveTime};
use clap::Args;
use owo_colors::OwoColorize;

use super::{confirm, non_blank};
use crate::render::{Render, format_date_label};

/// Fields of `events edit`. Only the flags given are changed.
#[derive(Args)]
pub struct EventChanges {
    #[arg(long)]
    title: Option<String>,

    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Start time (HH:MM)
    #[arg(short, long, value_parser = crate::parse_time)]
    time: Option<NaiveTime>,

    /// End time (HH:MM)
    #[arg(long, value_parser = crate::parse_time)]
    end: Option<NaiveTime>,

    #[arg(long)]
    venue: Option<String>,

    /// concert, rehearsal or audition
    #[arg(long)]
    kind: Option<EventKind>,

    #[arg(long)]
    status: Option<EventStatus>,

    /// Contact id, empty to unlink
    #[arg(long)]
    contact: Option<String>,

    /// Empty to remove
    #[arg(long)]
    description: Option<String>,
}

impl EventChanges {
    fn apply(self, concert: &mut Concert) {
        if let Some(title) = self.title {
            concert.title = title;
        }
        if let Some(date) = self.date {
            concert.date = date;
        }
        if let Some(time) = self.time {
            concert.time = time;
        }
        if let Some(end) = self.end {
            concert.end_time = Some(end);
        }
        if let Some(venue) = self.venue {
            concert.venue = venue;
        }
        if let Some(kind) = self.kind {
            concert.kind = kind;
        }
        if let Some(status) = self.status {
            concert.status = status;
        }
        if let Some(contact) = self.contact {
            concert.contact_id = non_blank(contact);
        }
        if let Some(description) = self.description {
            concert.description = non_blank(description);
        }
    }
}

pub fn list(workspace: &Workspace, all: bool, today: NaiveDate) -> Result<()> {
    let events: Vec<_> = workspace
        .events()
        .sorted()
        .into_iter()
        .filter(|c| all || c.is_upcoming(today))
        .collect();

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Group events by day and print
    let mut current_date: Option<NaiveDate> = None;

    for concert in events {
        if current_date != Some(concert.date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", format_date_label(concert.date, today).bold());
            current_date = Some(concert.date);
        }
        println!("  {} {}", concert.render(), format!("[{}]", concert.id).dimmed());
    }

    Ok(())
}

pub fn add(workspace: &mut Workspace, draft: ConcertDraft) -> Result<()> {
    let concert = workspace.add_event(draft)?;
    println!(
        "{}",
        format!("Created: {} on {} ({})", concert.title, concert.date, concert.id).green()
    );
    Ok(())
}

pub fn edit(workspace: &mut Workspace, id: &str, changes: EventChanges) -> Result<()> {
    let Some(concert) = workspace.events().get(id) else {
        anyhow::bail!("Event '{}' not found", id);
    };

    let mut concert = concert.clone();
    changes.apply(&mut concert);
    let concert = workspace.update_event(concert)?;
    println!(
        "{}",
        format!("Updated: {} on {} at {}", concert.title, concert.date, concert.venue).green()
    );
    Ok(())
}

pub fn set_status(workspace: &mut Workspace, id: &str, status: EventStatus) -> Result<()> {
    let concert = workspace.set_event_status(id, status)?;
    println!("{} is now {}", concert.title, concert.status.render());
    Ok(())
}

pub fn delete(workspace: &mut Workspace, id: &str, yes: bool) -> Result<()> {
    let Some(concert) = workspace.events().get(id) else {
        anyhow::bail!("Event '{}' not found", id);
    };

    if !confirm(&format!("Delete {} on {}?", concert.title, concert.date), yes)? {
        return Ok(());
    }

    let concert = workspace.delete_event(id)?;
    println!("Deleted: {}", concert.title);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_concert() -> Concert {
        Concert::from_draft(ConcertDraft {
            title: "Fête de la Musique".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 21).unwrap(),
            time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            end_time: None,
            venue: "Place Bellecour".to_string(),
            kind: EventKind::Concert,
            status: EventStatus::Pending,
            contact_id: Some("1".to_string()),
            description: Some("Plein air".to_string()),
            created_by: "1".to_string(),
        })
    }

    fn no_changes() -> EventChanges {
        EventChanges {
            title: None,
            date: None,
            time: None,
            end: None,
            venue: None,
            kind: None,
            status: None,
            contact: None,
            description: None,
        }
    }

    #[test]
    fn only_given_fields_change() {
        let mut concert = make_test_concert();
        let original = concert.clone();

        EventChanges {
            venue: Some("Le Sucre".to_string()),
            status: Some(EventStatus::Confirmed),
            ..no_changes()
        }
        .apply(&mut concert);

        assert_eq!(concert.venue, "Le Sucre");
        assert_eq!(concert.status, EventStatus::Confirmed);
        assert_eq!(concert.title, original.title);
        assert_eq!(concert.date, original.date);
        assert_eq!(concert.contact_id, original.contact_id);
        assert_eq!(concert.id, original.id);
    }

    #[test]
    fn blank_values_clear_optional_fields() {
        let mut concert = make_test_concert();

        EventChanges {
            contact: Some(String::new()),
            description: Some("  ".to_string()),
            ..no_changes()
        }
        .apply(&mut concert);

        assert_eq!(concert.contact_id, None);
        assert_eq!(concert.description, None);
    }
}
