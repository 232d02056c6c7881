use anyhow::Result;
use calzik_core::dashboard::AdminStats;
use calzik_core::model::{Role, User};
use calzik_core::workspace::Workspace;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn list(workspace: &Workspace, today: NaiveDate) -> Result<()> {
    let app = workspace.app();

    for user in &app.users {
        println!("{} {}", user.render(), format!("[{}]", user.id).dimmed());
    }

    let stats = AdminStats::compute(&app.users, workspace.events().all(), &app.availabilities, today);
    println!();
    println!(
        "{}",
        format!(
            "{} active, {} admin(s), {} upcoming event(s), {} availability record(s)",
            stats.active_users, stats.admins, stats.upcoming_concerts, stats.availability_records
        )
        .dimmed()
    );

    Ok(())
}

pub fn add(workspace: &mut Workspace, email: &str, name: &str, instrument: &str, role: Role) -> Result<()> {
    let user = User::new(email, name, instrument, role);
    let message = format!("Added {} ({})", user.name, user.id);
    workspace.upsert_user(user)?;
    println!("{}", message.green());
    Ok(())
}

pub fn toggle_active(workspace: &mut Workspace, id: &str) -> Result<()> {
    let user = workspace.toggle_user_active(id)?;
    let state = if user.is_active { "active" } else { "inactive" };
    println!("{} is now {}", user.name, state);
    Ok(())
}

pub fn toggle_role(workspace: &mut Workspace, id: &str) -> Result<()> {
    let user = workspace.toggle_user_role(id)?;
    println!("{} is now {}", user.name, user.role);
    Ok(())
}
