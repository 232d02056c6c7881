pub mod availability;
pub mod config;
pub mod contacts;
pub mod dashboard;
pub mod docs;
pub mod events;
pub mod ideas;
pub mod init;
pub mod invoices;
pub mod notifications;
pub mod session;
pub mod users;

use anyhow::Result;
use dialoguer::Confirm;

/// `None` for a blank value, so an empty flag clears an optional field.
pub fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Ask before a destructive action, unless --yes was given.
pub fn confirm(prompt: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
