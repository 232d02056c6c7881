//! Login stub.
//!
//! Members are looked up by email and any non-empty password is accepted.
//! This only selects who is using the tool; it protects nothing.

use crate::error::{CalzikError, CalzikResult};
use crate::model::User;

pub fn login<'a>(users: &'a [User], email: &str, password: &str) -> CalzikResult<&'a User> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || password.is_empty() {
        return Err(CalzikError::InvalidCredentials);
    }

    let user = users
        .iter()
        .find(|u| u.email.trim().to_lowercase() == email)
        .ok_or(CalzikError::InvalidCredentials)?;

    if !user.is_active {
        log::warn!("Refused login for deactivated member '{}'", user.email);
        return Err(CalzikError::InvalidCredentials);
    }

    Ok(user)
}

pub fn require_admin(user: &User) -> CalzikResult<()> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(CalzikError::Forbidden(format!("{} is not a band leader", user.name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn make_test_users() -> Vec<User> {
        let mut inactive = User::new("old@calzik.fr", "Ancien", "Chant", Role::Member);
        inactive.is_active = false;
        vec![
            User::new("admin@calzik.fr", "Marie Dupont", "Guitare", Role::Admin),
            inactive,
        ]
    }

    #[test]
    fn email_is_trimmed_and_case_insensitive() {
        let users = make_test_users();
        let user = login(&users, "  Admin@CalZik.fr ", "x").unwrap();
        assert_eq!(user.name, "Marie Dupont");
    }

    #[test]
    fn rejects_empty_password_unknown_and_inactive() {
        let users = make_test_users();
        assert!(matches!(
            login(&users, "admin@calzik.fr", ""),
            Err(CalzikError::InvalidCredentials)
        ));
        assert!(login(&users, "nobody@calzik.fr", "x").is_err());
        assert!(login(&users, "old@calzik.fr", "x").is_err());
    }

    #[test]
    fn admin_gate() {
        let users = make_test_users();
        assert!(require_admin(&users[0]).is_ok());
        assert!(matches!(
            require_admin(&users[1]),
            Err(CalzikError::Forbidden(_))
        ));
    }
}
