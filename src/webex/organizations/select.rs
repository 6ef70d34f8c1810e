//! Organization selection for a report run

use super::models::Organization;

/// Organization count shown to the user
///
/// One is subtracted whenever more than one organization is listed, on the
/// assumption that the partner organization is among them. Which org is
/// actually skipped is decided by name during processing.
pub fn displayed_org_count(listed: usize) -> usize {
    if listed > 1 {
        listed - 1
    } else {
        listed
    }
}

/// Narrow the listing to an allow-list of display names (empty list keeps everything)
pub fn select_organizations(orgs: Vec<Organization>, allow_list: &[String]) -> Vec<Organization> {
    if allow_list.is_empty() {
        return orgs;
    }
    orgs.into_iter()
        .filter(|org| allow_list.iter().any(|name| name == &org.display_name))
        .collect()
}
