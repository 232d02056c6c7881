use std::path::PathBuf;

use anyhow::Result;
use calzik_core::workspace::Workspace;
use owo_colors::OwoColorize;

use super::confirm;
use crate::render::{Render, format_size};

pub fn list(workspace: &Workspace) -> Result<()> {
    let shelf = workspace.documents();

    for document in shelf.all() {
        println!("{} {}", document.render(), format!("[{}]", document.id).dimmed());
    }
    if shelf.all().is_empty() {
        println!("{}", "No documents".dimmed());
    }

    println!();
    println!(
        "{}",
        format!("{} of {} used", format_size(shelf.used()), format_size(shelf.quota())).dimmed()
    );
    Ok(())
}

pub fn add(workspace: &mut Workspace, paths: &[PathBuf]) -> Result<()> {
    for document in workspace.add_documents(paths)? {
        println!("{}", format!("Stored {} ({})", document.name, format_size(document.size)).green());
    }
    Ok(())
}

pub fn delete(workspace: &mut Workspace, id: &str, yes: bool) -> Result<()> {
    let Some(document) = workspace.documents().get(id) else {
        anyhow::bail!("Document '{}' not found", id);
    };

    if !confirm(&format!("Delete {}?", document.name), yes)? {
        return Ok(());
    }

    let document = workspace.delete_document(id)?;
    println!("Deleted: {}", document.name);
    Ok(())
}
