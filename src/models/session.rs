use serde::{Deserialize, Serialize};

/// Account status shown as a badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub const ALL: [UserStatus; 2] = [UserStatus::Active, UserStatus::Inactive];

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == label)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

/// Signed-in user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

impl User {
    /// Synthesize the prototype administrator for a submitted email.
    ///
    /// No credential is checked; only the email is carried over.
    pub fn from_email(email: &str) -> Self {
        Self {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: email.to_string(),
            role: "Administrator".to_string(),
            status: UserStatus::Active,
        }
    }

    /// First character of the name, upper-cased, for avatar fallbacks.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string())
    }

    /// Merge the fields set in `patch`.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Partial update for [`User`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub status: Option<UserStatus>,
}

/// Authentication session.
///
/// The user record only exists in the `Authenticated` variant, so the flag
/// and the record always change together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Guest,
    Authenticated { user: User },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn current_user(&self) -> Option<&User> {
        match self {
            Session::Authenticated { user } => Some(user),
            Session::Guest => None,
        }
    }

    /// Name shown in the sidebar footer.
    pub fn display_name(&self) -> String {
        self.current_user()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "Guest".to_string())
    }

    /// Email shown in the sidebar footer.
    pub fn display_email(&self) -> String {
        self.current_user()
            .map(|u| u.email.clone())
            .unwrap_or_else(|| "guest@example.com".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_session() {
        let session = Session::Guest;
        assert!(!session.is_authenticated());
        assert_eq!(session.current_user(), None);
        assert_eq!(session.display_name(), "Guest");
        assert_eq!(session.display_email(), "guest@example.com");
    }

    #[test]
    fn test_authenticated_session() {
        let session = Session::Authenticated {
            user: User::from_email("ops@acme.io"),
        };
        assert!(session.is_authenticated());
        let user = session.current_user().unwrap();
        assert_eq!(user.email, "ops@acme.io");
        assert_eq!(user.role, "Administrator");
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(session.display_name(), "Admin User");
    }

    #[test]
    fn test_apply_patch() {
        let mut user = User::from_email("a@b.c");
        user.apply(UserPatch {
            name: Some("Grace".to_string()),
            status: Some(UserStatus::Inactive),
            ..Default::default()
        });
        assert_eq!(user.name, "Grace");
        assert_eq!(user.email, "a@b.c");
        assert_eq!(user.status, UserStatus::Inactive);
    }

    #[test]
    fn test_initial() {
        let mut user = User::from_email("a@b.c");
        assert_eq!(user.initial(), "A");
        user.name = "élodie".to_string();
        assert_eq!(user.initial(), "É");
        user.name.clear();
        assert_eq!(user.initial(), "U");
    }

    #[test]
    fn test_default() {
        assert_eq!(Session::default(), Session::Guest);
    }
}
