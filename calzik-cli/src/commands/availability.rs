use anyhow::Result;
use calzik_core::availability::day_grid;
use calzik_core::date_range::DayRange;
use calzik_core::model::TimeSlot;
use calzik_core::workspace::Workspace;
use chrono::{NaiveDate, NaiveTime};
use owo_colors::OwoColorize;

use crate::render::{Render, format_date_label};

pub fn grid(
    workspace: &Workspace,
    slots: &[TimeSlot],
    from: Option<&str>,
    days: Option<i64>,
    today: NaiveDate,
) -> Result<()> {
    let range = DayRange::from_args(from, days, today)?;
    let app = workspace.app();
    let viewer = app.session_user_id();

    let cells = day_grid(&app.availabilities, &app.users, viewer, &range, slots);

    let header: Vec<String> = slots.iter().map(|s| format!("{:<13}", s)).collect();
    println!("{:<12} {}", "", header.join(" ").bold());

    for day in cells.chunks(slots.len().max(1)) {
        let Some(first) = day.first() else {
            continue;
        };
        let row: Vec<String> = day
            .iter()
            .map(|cell| format!("{} {}", cell.summary.render(), own_mark(cell.mine)))
            .collect();
        println!("{:<12} {}", format_date_label(first.date, today), row.join("   "));
    }

    if viewer.is_some() {
        println!();
        println!(
            "{}",
            "✓ you're available, ✗ you're not, · no answer yet".dimmed()
        );
    }

    Ok(())
}

fn own_mark(mine: Option<bool>) -> String {
    match mine {
        Some(true) => "✓".green().to_string(),
        Some(false) => "✗".red().to_string(),
        None => "·".dimmed().to_string(),
    }
}

pub fn toggle(workspace: &mut Workspace, date: NaiveDate, slot: TimeSlot) -> Result<()> {
    let availability = workspace.toggle_availability(date, slot)?;
    print_answer(date, slot, availability.is_available);
    Ok(())
}

pub fn add(workspace: &mut Workspace, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Result<()> {
    let slot = TimeSlot::new(start, end)?;
    let availability = workspace.declare_availability(date, slot)?;
    print_answer(date, slot, availability.is_available);
    Ok(())
}

fn print_answer(date: NaiveDate, slot: TimeSlot, available: bool) {
    if available {
        println!("{}", format!("Available on {} {}", date, slot).green());
    } else {
        println!("{}", format!("Unavailable on {} {}", date, slot).red());
    }
}

pub fn mine(workspace: &Workspace, today: NaiveDate) -> Result<()> {
    let user = workspace.current_user()?;
    let slots: Vec<_> = workspace
        .app()
        .user_slots(&user.id)
        .into_iter()
        .filter(|a| a.date >= today)
        .collect();

    if slots.is_empty() {
        println!("{}", "No answers yet".dimmed());
        return Ok(());
    }

    let mut current_date: Option<NaiveDate> = None;
    for availability in slots {
        if current_date != Some(availability.date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", format_date_label(availability.date, today).bold());
            current_date = Some(availability.date);
        }
        println!("  {} {}", own_mark(Some(availability.is_available)), availability.time_slot);
    }

    Ok(())
}
