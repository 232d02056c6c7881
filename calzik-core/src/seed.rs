//! Demo band used by `calzik init --demo`.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::error::CalzikResult;
use crate::model::{
    Availability, Concert, Contact, ContactKind, EventKind, EventStatus, Role, TimeSlot, User,
};

pub struct DemoData {
    pub users: Vec<User>,
    pub contacts: Vec<Contact>,
    pub concerts: Vec<Concert>,
    pub availabilities: Vec<Availability>,
}

fn member(id: &str, email: &str, name: &str, instrument: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        instrument: instrument.to_string(),
        role,
        is_active: true,
    }
}

fn at(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Four members, two contacts, a rehearsal a week from `today` and a
/// concert three days later.
pub fn demo(today: NaiveDate) -> CalzikResult<DemoData> {
    let rehearsal_day = today + Duration::days(7);
    let concert_day = today + Duration::days(10);

    let users = vec![
        member("1", "admin@calzik.fr", "Marie Dupont", "Guitare", Role::Admin),
        member("2", "pierre@calzik.fr", "Pierre Martin", "Batterie", Role::Member),
        member("3", "sophie@calzik.fr", "Sophie Bernard", "Basse", Role::Member),
        member("4", "thomas@calzik.fr", "Thomas Petit", "Clavier", Role::Member),
    ];

    let contacts = vec![
        Contact {
            id: "1".to_string(),
            name: "Salle des Fêtes".to_string(),
            kind: ContactKind::Salle,
            email: "contact@salledesfetes.fr".to_string(),
            phone: Some("01 23 45 67 89".to_string()),
            address: "12 Place de la Mairie".to_string(),
            city: "Lyon".to_string(),
            postal_code: "69000".to_string(),
            notes: Some("Capacité 200 personnes, sono incluse".to_string()),
        },
        Contact {
            id: "2".to_string(),
            name: "Festival Rock en Stock".to_string(),
            kind: ContactKind::Festival,
            email: "programmation@rockenstock.fr".to_string(),
            phone: Some("04 56 78 90 12".to_string()),
            address: "45 Avenue de la Musique".to_string(),
            city: "Marseille".to_string(),
            postal_code: "13000".to_string(),
            notes: Some("Festival annuel, programmation mars-avril".to_string()),
        },
    ];

    let concerts = vec![
        Concert {
            id: "1".to_string(),
            title: "Concert de Noël".to_string(),
            date: concert_day,
            time: at(20),
            end_time: None,
            venue: "Salle des Fêtes".to_string(),
            kind: EventKind::Concert,
            status: EventStatus::Confirmed,
            contact_id: Some("1".to_string()),
            description: Some("Concert de fin d'année".to_string()),
            created_by: "1".to_string(),
        },
        Concert {
            id: "2".to_string(),
            title: "Répétition générale".to_string(),
            date: rehearsal_day,
            time: at(19),
            end_time: None,
            venue: "Local de répétition".to_string(),
            kind: EventKind::Rehearsal,
            status: EventStatus::Confirmed,
            contact_id: None,
            description: Some("Dernière répétition avant le concert".to_string()),
            created_by: "1".to_string(),
        },
    ];

    let slot = TimeSlot::new(at(19), at(22))?;
    let availabilities = [("1", true), ("2", true), ("3", false), ("4", true)]
        .iter()
        .enumerate()
        .map(|(i, (user_id, available))| Availability {
            id: (i + 1).to_string(),
            user_id: user_id.to_string(),
            date: rehearsal_day,
            time_slot: slot,
            is_available: *available,
        })
        .collect();

    Ok(DemoData {
        users,
        contacts,
        concerts,
        availabilities,
    })
}
