//! List-page filters.
//!
//! Each list page keeps a filter value plus a [`Pagination`]. Filtering is a
//! pure predicate conjunction evaluated on every render; any filter change
//! sends the pager back to page 1.

use crate::core::error::PageError;
use crate::core::pagination::Pagination;
use crate::models::{OrgRecord, OrgType, UserRecord, UserStatus};

/// Predicate over the rows of one list page.
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;

    /// Rows passing the filter, in input order.
    fn apply<'a>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Case-insensitive substring test; an empty needle always matches.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Free-text search on the user list (name or email).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub search: String,
}

impl RecordFilter<UserRecord> for UserFilter {
    fn matches(&self, user: &UserRecord) -> bool {
        contains_ci(&user.name, &self.search) || contains_ci(&user.email, &self.search)
    }
}

/// Quick search plus advanced filters on the organization list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrgFilter {
    /// Matches the organization name or its head.
    pub search: String,
    /// `None` means all types.
    pub org_type: Option<OrgType>,
    /// `None` means any status.
    pub status: Option<UserStatus>,
    /// Substring of the location.
    pub location: String,
}

impl OrgFilter {
    /// Clear the search and every advanced filter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl RecordFilter<OrgRecord> for OrgFilter {
    fn matches(&self, org: &OrgRecord) -> bool {
        let matches_search =
            contains_ci(&org.name, &self.search) || contains_ci(&org.head, &self.search);
        let matches_type = self.org_type.is_none_or(|t| t == org.org_type);
        let matches_status = self.status.is_none_or(|s| s == org.status);
        let matches_location = contains_ci(&org.location, &self.location);

        matches_search && matches_type && matches_status && matches_location
    }
}

/// Filter and pagination state of a list page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState<F> {
    filter: F,
    pager: Pagination,
}

impl<F> ListState<F> {
    pub fn new(filter: F, page_size: usize) -> Self {
        Self {
            filter,
            pager: Pagination::new(page_size),
        }
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn pager(&self) -> &Pagination {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Pagination {
        &mut self.pager
    }

    /// Change the filter and return to page 1.
    pub fn update_filter(&mut self, f: impl FnOnce(&mut F)) {
        f(&mut self.filter);
        self.pager.reset();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pager.set_page_size(page_size);
    }

    /// Jump to `page` of the filtered rows.
    pub fn go_to<T>(&mut self, page: usize, records: &[T]) -> Result<(), PageError>
    where
        F: RecordFilter<T>,
    {
        let total = self.filter.apply(records).len();
        self.pager.go_to(page, total)
    }

    /// Filtered rows and the slice for the current page.
    pub fn view<'a, T>(&self, records: &'a [T]) -> ListView<'a, T>
    where
        F: RecordFilter<T>,
    {
        let filtered = self.filter.apply(records);
        let range = self.pager.range(filtered.len());
        ListView {
            page_rows: filtered[range].to_vec(),
            total: filtered.len(),
        }
    }
}

/// Rows to render for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<'a, T> {
    pub page_rows: Vec<&'a T>,
    /// Number of rows passing the filter.
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u32, name: &str, email: &str) -> UserRecord {
        UserRecord {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: "Viewer".to_string(),
            status: UserStatus::Active,
        }
    }

    fn org(id: u32, name: &str, org_type: OrgType, location: &str) -> OrgRecord {
        OrgRecord {
            id,
            name: name.to_string(),
            org_type,
            location: location.to_string(),
            status: UserStatus::Active,
            head: format!("Head {}", id),
        }
    }

    fn orgs() -> Vec<OrgRecord> {
        let mut orgs = vec![
            org(1, "Global Tech", OrgType::University, "Boston, MA"),
            org(2, "City Hospital", OrgType::Hospital, "New York, NY"),
            org(3, "HealthPlus Clinic", OrgType::Hospital, "Miami, FL"),
            org(4, "Innovate Corp", OrgType::Corporate, "Austin, TX"),
        ];
        orgs[2].status = UserStatus::Inactive;
        orgs
    }

    #[test]
    fn test_user_filter_name_or_email() {
        let users = vec![
            user(1, "Alice Johnson", "alice@example.com"),
            user(2, "Bob Smith", "bob@corp.io"),
        ];
        let by_name = UserFilter {
            search: "ALICE".to_string(),
        };
        assert_eq!(by_name.apply(&users).len(), 1);

        let by_email = UserFilter {
            search: "corp.io".to_string(),
        };
        assert_eq!(by_email.apply(&users)[0].id, 2);

        assert_eq!(UserFilter::default().apply(&users).len(), 2);
    }

    #[test]
    fn test_org_filter_conjunction() {
        let orgs = orgs();
        let filter = OrgFilter {
            org_type: Some(OrgType::Hospital),
            status: Some(UserStatus::Active),
            ..Default::default()
        };
        let ids: Vec<u32> = filter.apply(&orgs).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2]);

        let filter = OrgFilter {
            location: "fl".to_string(),
            ..Default::default()
        };
        let ids: Vec<u32> = filter.apply(&orgs).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![3]);

        let filter = OrgFilter {
            search: "head 4".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&orgs)[0].name, "Innovate Corp");

        let mut filter = OrgFilter {
            search: "clinic".to_string(),
            org_type: Some(OrgType::Hospital),
            status: Some(UserStatus::Inactive),
            location: "miami".to_string(),
        };
        assert_eq!(filter.apply(&orgs).len(), 1);
        filter.reset();
        assert!(filter.is_default());
        assert_eq!(filter.apply(&orgs).len(), 4);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let users: Vec<UserRecord> = (1..=12)
            .map(|i| user(i, &format!("User {}", i), &format!("u{}@example.com", i)))
            .collect();
        let mut list = ListState::new(UserFilter::default(), 5);
        list.pager_mut().go_to(3, users.len()).unwrap();
        let view = list.view(&users);
        assert_eq!(view.total, 12);
        assert_eq!(view.page_rows.len(), 2);

        list.update_filter(|f| f.search = "user 1".to_string());
        assert_eq!(list.pager().page(), 1);
        let view = list.view(&users);
        // "User 1", "User 10", "User 11", "User 12"
        assert_eq!(view.total, 4);
        assert_eq!(view.page_rows.len(), 4);
    }

    #[test]
    fn test_go_to_counts_filtered_rows() {
        let orgs = orgs();
        let mut list = ListState::new(OrgFilter::default(), 2);
        assert!(list.go_to(2, &orgs).is_ok());

        list.update_filter(|f| f.org_type = Some(OrgType::Hospital));
        assert_eq!(
            list.go_to(2, &orgs),
            Err(PageError::OutOfRange {
                page: 2,
                total_pages: 1,
            })
        );
        assert_eq!(list.pager().page(), 1);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut list = ListState::new(OrgFilter::default(), 2);
        list.pager_mut().go_to(2, 4).unwrap();
        list.set_page_size(25);
        assert_eq!(list.pager().page(), 1);
        assert_eq!(list.view(&orgs()).page_rows.len(), 4);
    }
}
