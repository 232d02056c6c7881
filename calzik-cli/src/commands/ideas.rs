use anyhow::Result;
use calzik_core::model::IdeaStatus;
use calzik_core::workspace::Workspace;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use super::confirm;
use crate::render::Render;

pub fn list(workspace: &Workspace) -> Result<()> {
    let board = workspace.ideas();

    if board.all().is_empty() {
        println!("{}", "The idea board is empty".dimmed());
        return Ok(());
    }

    for (title, ideas) in [("To do", board.pending()), ("Done", board.done())] {
        if ideas.is_empty() {
            continue;
        }
        println!("{}", title.bold());
        for idea in ideas {
            println!("  {} {}", idea.render(), format!("[{}]", idea.id).dimmed());
        }
        println!();
    }

    Ok(())
}

pub fn add(workspace: &mut Workspace, text: &str, today: NaiveDate) -> Result<()> {
    let idea = workspace.add_idea(text, today)?;
    println!("{}", format!("Added idea {}", idea.id).green());
    Ok(())
}

pub fn done(workspace: &mut Workspace, id: &str) -> Result<()> {
    let idea = workspace.set_idea_status(id, IdeaStatus::Done)?;
    println!("{}", idea.render());
    Ok(())
}

pub fn reopen(workspace: &mut Workspace, id: &str) -> Result<()> {
    let idea = workspace.set_idea_status(id, IdeaStatus::Todo)?;
    println!("{}", idea.render());
    Ok(())
}

pub fn edit(workspace: &mut Workspace, id: &str, text: &str) -> Result<()> {
    let idea = workspace.edit_idea(id, text)?;
    println!("{}", idea.render());
    Ok(())
}

pub fn delete(workspace: &mut Workspace, id: &str, yes: bool) -> Result<()> {
    let Some(idea) = workspace.ideas().all().iter().find(|i| i.id == id) else {
        anyhow::bail!("Idea '{}' not found", id);
    };

    if !confirm(&format!("Delete \"{}\"?", idea.text), yes)? {
        return Ok(());
    }

    workspace.delete_idea(id)?;
    println!("Deleted idea {}", id);
    Ok(())
}
