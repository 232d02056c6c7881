use anyhow::Result;
use calzik_core::workspace::Workspace;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn login(workspace: &mut Workspace, email: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => rpassword::prompt_password("Password: ")?,
    };

    let user = workspace.login(email, &password)?;
    println!("{}", format!("Logged in as {}", user.name).green());
    Ok(())
}

pub fn logout(workspace: &mut Workspace) -> Result<()> {
    workspace.logout()?;
    println!("Logged out");
    Ok(())
}

pub fn whoami(workspace: &Workspace) -> Result<()> {
    match workspace.app().current_user() {
        Some(user) => println!("{}", user.render()),
        None => println!("{}", "Not logged in".dimmed()),
    }
    Ok(())
}
