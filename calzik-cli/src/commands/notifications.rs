use anyhow::Result;
use calzik_core::workspace::Workspace;
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize};

pub fn run(workspace: &mut Workspace, mark_read: bool) -> Result<()> {
    let notifications = workspace.notifications().sorted();

    if notifications.is_empty() {
        println!("{}", "No notifications".dimmed());
        return Ok(());
    }

    for notification in notifications {
        println!("{}", notification.render());
    }

    if mark_read {
        let changed = workspace.mark_notifications_read()?;
        if changed > 0 {
            println!();
            println!(
                "{}",
                format!("Marked {} {} as read", changed, pluralize("notification", changed)).dimmed()
            );
        }
    }

    Ok(())
}
