//! Records shown on the directory list pages.

use serde::{Deserialize, Serialize};

use super::session::UserStatus;

/// Row on the user list page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

/// Organization category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrgType {
    University,
    Hospital,
    Corporate,
    Government,
    #[serde(rename = "Public Service")]
    PublicService,
}

impl OrgType {
    pub const ALL: [OrgType; 5] = [
        OrgType::University,
        OrgType::Hospital,
        OrgType::Corporate,
        OrgType::Government,
        OrgType::PublicService,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::University => "University",
            Self::Hospital => "Hospital",
            Self::Corporate => "Corporate",
            Self::Government => "Government",
            Self::PublicService => "Public Service",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

/// Row on the organization list page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgRecord {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub org_type: OrgType,
    pub location: String,
    pub status: UserStatus,
    pub head: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_type_labels() {
        for t in OrgType::ALL {
            assert_eq!(OrgType::from_label(t.label()), Some(t));
        }
        assert_eq!(OrgType::from_label("All"), None);
    }

    #[test]
    fn test_org_record_json() {
        let json = r#"{"id":5,"name":"Heritage Museum","type":"Public Service",
            "location":"Chicago, IL","status":"Active","head":"Arthur Dent"}"#;
        let org: OrgRecord = serde_json::from_str(json).unwrap();
        assert_eq!(org.org_type, OrgType::PublicService);
        assert_eq!(org.status, UserStatus::Active);
    }
}
