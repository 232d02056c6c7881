//! TUI rendering traits for calzik types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to calzik-core types using owo_colors.

use calzik_core::availability::{FillTier, SlotSummary};
use calzik_core::model::{
    Concert, Contact, EventStatus, Idea, IdeaStatus, Invoice, Notification, StoredDocument, User,
};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventStatus {
    fn render(&self) -> String {
        let label = self.to_string();
        match self {
            EventStatus::Confirmed => label.green().to_string(),
            EventStatus::Pending => label.yellow().to_string(),
            EventStatus::Cancelled => label.red().to_string(),
        }
    }
}

impl Render for Concert {
    fn render(&self) -> String {
        let time = match self.end_time {
            Some(end) => format!("{}-{}", self.time.format("%H:%M"), end.format("%H:%M")),
            None => self.time.format("%H:%M").to_string(),
        };
        format!(
            "{:>11} {} {} {} {}",
            time,
            self.title,
            format!("@ {}", self.venue).dimmed(),
            format!("[{}]", self.kind.label()).cyan(),
            self.status.render()
        )
    }
}

impl Render for SlotSummary {
    fn render(&self) -> String {
        let count = format!("{}/{}", self.available, self.total);
        let tier = self.tier();
        let label = format!("{} {:>5}", tier.letter(), count);
        match tier {
            FillTier::Full => label.green().bold().to_string(),
            FillTier::High => label.green().to_string(),
            FillTier::Medium => label.yellow().to_string(),
            FillTier::Low => label.red().to_string(),
            FillTier::Empty => label.dimmed().to_string(),
        }
    }
}

impl Render for Contact {
    fn render(&self) -> String {
        let mut line = format!(
            "{} {} {}",
            self.name.bold(),
            format!("[{}]", self.kind.label()).cyan(),
            self.city.dimmed()
        );
        if !self.email.is_empty() {
            line.push_str(&format!("  {}", self.email));
        }
        if let Some(phone) = &self.phone {
            line.push_str(&format!("  {}", phone));
        }
        line
    }
}

impl Render for Invoice {
    fn render(&self) -> String {
        let state = if self.is_paid {
            "payée".green().to_string()
        } else {
            "à payer".yellow().to_string()
        };
        format!(
            "{} {} {} {:>10.2} € TTC {}",
            self.number.to_string().bold(),
            self.service_date,
            self.client.name,
            self.amount_ttc,
            state
        )
    }
}

impl Render for User {
    fn render(&self) -> String {
        let mut line = format!("{} {} {}", self.name, self.instrument.dimmed(), self.email.dimmed());
        if self.is_admin() {
            line.push_str(&format!(" {}", "leader".magenta()));
        }
        if !self.is_active {
            line.push_str(&format!(" {}", "inactive".red()));
        }
        line
    }
}

impl Render for Idea {
    fn render(&self) -> String {
        let mark = match self.status {
            IdeaStatus::Done => "✓".green().to_string(),
            IdeaStatus::Todo => "•".yellow().to_string(),
        };
        format!(
            "{} {} {}",
            mark,
            self.text,
            format!("({}, {})", self.author, self.date).dimmed()
        )
    }
}

impl Render for StoredDocument {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.name,
            format_size(self.size).dimmed(),
            self.added.format("%Y-%m-%d").to_string().dimmed()
        )
    }
}

impl Render for Notification {
    fn render(&self) -> String {
        let date = self
            .date
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M")
            .to_string();
        if self.read {
            format!("{} {}", date.dimmed(), self.message)
        } else {
            format!("{} {} {}", date.dimmed(), self.message.bold(), "new".blue())
        }
    }
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
pub fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// Human-readable byte count (e.g. "1.5 MB").
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_labels() {
        let today = NaiveDate::from_ymd_opt(2025, 2, 24).unwrap();
        assert_eq!(format_date_label(today, today), "Today");
        assert_eq!(format_date_label(today.succ_opt().unwrap(), today), "Tomorrow");
        assert_eq!(
            format_date_label(NaiveDate::from_ymd_opt(2025, 2, 26).unwrap(), today),
            "Wed Feb 26"
        );
    }

    #[test]
    fn sizes() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.0 GB");
    }

    #[test]
    fn plurals() {
        assert_eq!(pluralize("invoice", 1), "invoice");
        assert_eq!(pluralize("invoice", 2), "invoices");
    }
}
