//! Phone number data models

use serde::Deserialize;

/// Owner type for numbers assigned to a person
pub const OWNER_TYPE_PEOPLE: &str = "PEOPLE";

/// Number state reported for active numbers
pub const STATE_ACTIVE: &str = "ACTIVE";

/// Response wrapper for the numbers list
#[derive(Deserialize, Debug)]
pub struct PhoneNumbersResponse {
    #[serde(rename = "phoneNumbers", default)]
    pub phone_numbers: Vec<PhoneNumber>,
}

/// A number (or extension-only entry) configured in an organization
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PhoneNumber {
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    pub extension: Option<String>,
    #[serde(rename = "mainNumber")]
    pub main_number: Option<bool>,
    pub state: Option<String>,
    pub location: Option<NumberLocation>,
    pub owner: Option<NumberOwner>,
}

/// Location a number belongs to
#[derive(Deserialize, Debug, Clone, Default)]
pub struct NumberLocation {
    #[serde(default)]
    pub name: String,
}

/// Entity a number is assigned to (person, place, hunt group, ...)
#[derive(Deserialize, Debug, Clone, Default)]
pub struct NumberOwner {
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub owner_type: String,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
}

impl PhoneNumber {
    /// Owner, only when the number is assigned to a person
    pub fn person_owner(&self) -> Option<&NumberOwner> {
        self.owner
            .as_ref()
            .filter(|o| o.owner_type == OWNER_TYPE_PEOPLE)
    }

    /// Whether the number is in the ACTIVE state
    pub fn is_active(&self) -> bool {
        self.state.as_deref() == Some(STATE_ACTIVE)
    }
}

impl NumberOwner {
    /// "First Last" display name
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_number_parsing() {
        let number: PhoneNumber = serde_json::from_value(serde_json::json!({
            "phoneNumber": "+15551234567",
            "extension": "4567",
            "mainNumber": true,
            "state": "ACTIVE",
            "location": {"id": "loc-1", "name": "HQ"},
            "owner": {"id": "person-1", "type": "PEOPLE", "firstName": "Ada", "lastName": "Lovelace"}
        }))
        .unwrap();

        assert!(number.is_active());
        assert_eq!(number.location.as_ref().unwrap().name, "HQ");
        let owner = number.person_owner().unwrap();
        assert_eq!(owner.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_place_owner_is_not_a_person() {
        let number: PhoneNumber = serde_json::from_value(serde_json::json!({
            "phoneNumber": "+15550000000",
            "owner": {"id": "place-1", "type": "PLACE"}
        }))
        .unwrap();
        assert!(number.owner.is_some());
        assert!(number.person_owner().is_none());
    }

    #[test]
    fn test_minimal_entry() {
        let number: PhoneNumber = serde_json::from_str("{}").unwrap();
        assert!(!number.is_active());
        assert!(number.person_owner().is_none());
        assert!(number.phone_number.is_none());
    }
}
