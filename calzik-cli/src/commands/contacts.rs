use anyhow::Result;
use calzik_core::model::{Contact, ContactFilter, ContactKind};
use calzik_core::workspace::Workspace;
use clap::Args;
use owo_colors::OwoColorize;

use super::{confirm, non_blank};
use crate::render::Render;

/// Fields of `contacts edit`. Only the flags given are changed.
#[derive(Args)]
pub struct ContactChanges {
    #[arg(long)]
    name: Option<String>,

    /// salle, association, festival or autre
    #[arg(long)]
    kind: Option<ContactKind>,

    #[arg(long)]
    email: Option<String>,

    /// Empty to remove
    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    address: Option<String>,

    #[arg(long)]
    city: Option<String>,

    #[arg(long)]
    postal_code: Option<String>,

    /// Empty to remove
    #[arg(long)]
    notes: Option<String>,
}

impl ContactChanges {
    fn apply(self, contact: &mut Contact) {
        if let Some(name) = self.name {
            contact.name = name;
        }
        if let Some(kind) = self.kind {
            contact.kind = kind;
        }
        if let Some(email) = self.email {
            contact.email = email;
        }
        if let Some(phone) = self.phone {
            contact.phone = non_blank(phone);
        }
        if let Some(address) = self.address {
            contact.address = address;
        }
        if let Some(city) = self.city {
            contact.city = city;
        }
        if let Some(postal_code) = self.postal_code {
            contact.postal_code = postal_code;
        }
        if let Some(notes) = self.notes {
            contact.notes = non_blank(notes);
        }
    }
}

pub fn list(workspace: &Workspace, filter: ContactFilter) -> Result<()> {
    let contacts = workspace.app().filter_contacts(&filter);

    if contacts.is_empty() {
        println!("{}", "No contacts found".dimmed());
        return Ok(());
    }

    for contact in contacts {
        println!("{} {}", contact.render(), format!("[{}]", contact.id).dimmed());
        if let Some(notes) = &contact.notes {
            println!("    {}", notes.dimmed());
        }
    }

    Ok(())
}

pub fn add(workspace: &mut Workspace, contact: Contact) -> Result<()> {
    let message = format!("Added: {} ({})", contact.name, contact.id);
    workspace.add_contact(contact)?;
    println!("{}", message.green());
    Ok(())
}

pub fn edit(workspace: &mut Workspace, id: &str, changes: ContactChanges) -> Result<()> {
    let Some(contact) = workspace.app().contact(id) else {
        anyhow::bail!("Contact '{}' not found", id);
    };

    let mut contact = contact.clone();
    changes.apply(&mut contact);
    let message = format!("Updated: {}", contact.name);
    workspace.update_contact(contact)?;
    println!("{}", message.green());
    Ok(())
}

pub fn delete(workspace: &mut Workspace, id: &str, yes: bool) -> Result<()> {
    let Some(contact) = workspace.app().contact(id) else {
        anyhow::bail!("Contact '{}' not found", id);
    };

    let used_by = workspace
        .events()
        .all()
        .iter()
        .filter(|c| c.contact_id.as_deref() == Some(id))
        .count();
    let prompt = if used_by > 0 {
        format!("Delete {}? {} event(s) still refer to it.", contact.name, used_by)
    } else {
        format!("Delete {}?", contact.name)
    };

    if !confirm(&prompt, yes)? {
        return Ok(());
    }

    let contact = workspace.delete_contact(id)?;
    println!("Deleted: {}", contact.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_contact() -> Contact {
        Contact {
            id: "1".to_string(),
            name: "Le Sucre".to_string(),
            kind: ContactKind::Salle,
            email: "prog@lesucre.fr".to_string(),
            phone: Some("04 00 00 00 00".to_string()),
            address: "50 quai Rambaud".to_string(),
            city: "Lyon".to_string(),
            postal_code: "69002".to_string(),
            notes: None,
        }
    }

    #[test]
    fn changes_merge_onto_the_stored_contact() {
        let mut contact = make_test_contact();

        ContactChanges {
            name: None,
            kind: None,
            email: None,
            phone: Some(String::new()),
            address: None,
            city: Some("Villeurbanne".to_string()),
            postal_code: None,
            notes: Some("Jauge 1200".to_string()),
        }
        .apply(&mut contact);

        assert_eq!(contact.name, "Le Sucre");
        assert_eq!(contact.city, "Villeurbanne");
        assert_eq!(contact.postal_code, "69002");
        assert_eq!(contact.phone, None);
        assert_eq!(contact.notes.as_deref(), Some("Jauge 1200"));
    }
}
