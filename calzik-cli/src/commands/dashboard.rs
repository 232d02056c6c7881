use anyhow::Result;
use calzik_core::dashboard::{AdminStats, DashboardSummary};
use calzik_core::workspace::Workspace;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::render::{Render, format_date_label, pluralize};

pub fn run(workspace: &Workspace, today: NaiveDate) -> Result<()> {
    let user = workspace.current_user()?;
    let app = workspace.app();
    let summary = DashboardSummary::compute(
        workspace.events().all(),
        &app.availabilities,
        &app.users,
        today,
    );

    println!("{}", format!("Bonjour {} !", user.name).bold());
    println!();
    println!("  Active members:     {}", summary.active_members);
    println!("  Confirmed concerts: {}", summary.confirmed_concerts);
    println!("  Availability:       {}%", summary.availability_percentage);

    let unread = workspace.notifications().unread_count();
    if unread > 0 {
        println!(
            "  {}",
            format!("{} unread {}", unread, pluralize("notification", unread)).yellow()
        );
    }

    println!();
    println!("{}", "Upcoming".bold());
    if summary.upcoming.is_empty() {
        println!("  {}", "Nothing planned".dimmed());
    }
    for concert in &summary.upcoming {
        println!("  {} {}", format_date_label(concert.date, today), concert.render());
    }

    println!();
    match summary.next_rehearsal {
        Some(rehearsal) => println!(
            "{} {} {}",
            "Next rehearsal:".bold(),
            format_date_label(rehearsal.date, today),
            rehearsal.render()
        ),
        None => println!("{} {}", "Next rehearsal:".bold(), "none scheduled".dimmed()),
    }

    if user.is_admin() {
        let stats = AdminStats::compute(
            &app.users,
            workspace.events().all(),
            &app.availabilities,
            today,
        );
        println!();
        println!("{}", "Admin".bold());
        println!(
            "  {} active, {} {}, {} upcoming {}, {} availability {}",
            stats.active_users,
            stats.admins,
            pluralize("leader", stats.admins),
            stats.upcoming_concerts,
            pluralize("event", stats.upcoming_concerts),
            stats.availability_records,
            pluralize("record", stats.availability_records)
        );
    }

    Ok(())
}
