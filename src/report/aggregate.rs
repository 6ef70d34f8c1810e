//! Per-organization aggregate built up by the collectors

use std::collections::HashMap;

use crate::commerce::SubscriptionTerm;
use crate::config::{commerce, licenses};
use crate::error::Result;
use crate::webex::{InterceptSettings, License, Organization, OutgoingPermission, PhoneNumber};

/// Booked and provisioned units of one license kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LicenseCount {
    pub booked: i64,
    pub provisioned: i64,
}

impl LicenseCount {
    fn add(&mut self, license: &License) {
        self.booked += license.total_units;
        self.provisioned += license.consumed_units;
    }
}

/// One number of the organization, flattened for reporting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneNumberRecord {
    pub number: String,
    /// "Main" for the location main number, empty otherwise
    pub main_flag: String,
    pub extension: String,
    pub location_name: String,
    /// Set only for numbers owned by a person
    pub owner_name: String,
    pub owner_id: String,
    /// "Active" or "Not Applicable"
    pub status: String,
}

impl From<&PhoneNumber> for PhoneNumberRecord {
    fn from(number: &PhoneNumber) -> Self {
        let mut record = Self {
            number: number
                .phone_number
                .as_deref()
                .map(|n| n.replace('+', ""))
                .unwrap_or_default(),
            extension: number.extension.clone().unwrap_or_default(),
            location_name: number
                .location
                .as_ref()
                .map(|l| l.name.clone())
                .unwrap_or_default(),
            ..Default::default()
        };

        if number.main_number == Some(true) {
            record.main_flag = "Main".to_string();
        }

        if let Some(owner) = number.person_owner() {
            record.owner_name = owner.full_name();
            record.owner_id = owner.id.clone().unwrap_or_default();
        }

        if number.state.is_some() {
            record.status = if number.is_active() {
                "Active".to_string()
            } else {
                "Not Applicable".to_string()
            };
        }

        record
    }
}

/// Whether a person uses custom outgoing permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionMode {
    Custom,
    Default,
}

impl PermissionMode {
    pub fn label(&self) -> &'static str {
        match self {
            PermissionMode::Custom => "Custom Settings",
            PermissionMode::Default => "Default Settings",
        }
    }
}

/// Title-cased action per outgoing call type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallTypeActions {
    pub internal: String,
    pub toll_free: String,
    pub national: String,
    pub international: String,
    pub operator_assistance: String,
    pub chargeable_directory_assistance: String,
    pub special_services_1: String,
    pub special_services_2: String,
    pub premium_services_1: String,
    pub premium_services_2: String,
}

impl CallTypeActions {
    fn slot(&mut self, call_type: &str) -> Option<&mut String> {
        let slot = match call_type {
            "INTERNAL_CALL" => &mut self.internal,
            "TOLL_FREE" => &mut self.toll_free,
            "NATIONAL" => &mut self.national,
            "INTERNATIONAL" => &mut self.international,
            "OPERATOR_ASSISTED" => &mut self.operator_assistance,
            "CHARGEABLE_DIRECTORY_ASSISTED" => &mut self.chargeable_directory_assistance,
            "SPECIAL_SERVICES_I" => &mut self.special_services_1,
            "SPECIAL_SERVICES_II" => &mut self.special_services_2,
            "PREMIUM_SERVICES_I" => &mut self.premium_services_1,
            "PREMIUM_SERVICES_II" => &mut self.premium_services_2,
            _ => return None,
        };
        Some(slot)
    }
}

/// Outgoing permission settings of one person
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionRecord {
    pub mode: PermissionMode,
    /// Always empty in default mode
    pub actions: CallTypeActions,
}

impl From<&OutgoingPermission> for PermissionRecord {
    fn from(permission: &OutgoingPermission) -> Self {
        if !permission.use_custom_enabled {
            return Self {
                mode: PermissionMode::Default,
                actions: CallTypeActions::default(),
            };
        }

        let mut actions = CallTypeActions::default();
        for entry in &permission.calling_permissions {
            if let Some(slot) = actions.slot(&entry.call_type) {
                *slot = title_case(&entry.action);
            }
        }
        Self {
            mode: PermissionMode::Custom,
            actions,
        }
    }
}

/// Call intercept settings of one person
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterceptRecord {
    /// "Enable" or "Disable"
    pub call_intercept: String,
    pub outgoing_permissions: String,
}

impl From<&InterceptSettings> for InterceptRecord {
    fn from(settings: &InterceptSettings) -> Self {
        if !settings.enabled {
            return Self {
                call_intercept: "Disable".to_string(),
                outgoing_permissions: String::new(),
            };
        }

        let description = match settings.outgoing_type() {
            "INTERCEPT_ALL" => "Intercept All Outgoing Calls",
            "ALLOW_LOCAL_ONLY" => "Allow Only National Outgoing Calls",
            _ => "",
        };
        Self {
            call_intercept: "Enable".to_string(),
            outgoing_permissions: description.to_string(),
        }
    }
}

/// Trunk that is used by at least one route group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrunkRecord {
    pub name: String,
    pub id: String,
    pub route_group_names: Vec<String>,
}

/// Everything collected about one customer organization
#[derive(Debug, Clone)]
pub struct OrgAggregate {
    /// Opaque API id
    pub api_id: String,
    /// Numeric Control Hub id decoded from `api_id`
    pub org_id: String,
    pub display_name: String,
    pub professional: Option<LicenseCount>,
    pub workspace: Option<LicenseCount>,
    pub subscription_ids: Vec<String>,
    pub subscription_start_dates: Vec<String>,
    pub subscription_end_dates: Vec<String>,
    pub phone_numbers: Vec<PhoneNumberRecord>,
    pub outgoing_permissions: HashMap<String, PermissionRecord>,
    pub intercept_settings: HashMap<String, InterceptRecord>,
    pub trunks: Vec<TrunkRecord>,
    pub error: bool,
}

impl OrgAggregate {
    /// Start an aggregate for a listed organization; the org id is decoded here, once
    pub fn new(org: &Organization) -> Result<Self> {
        Ok(Self {
            api_id: org.id.clone(),
            org_id: org.decoded_id()?,
            display_name: org.display_name.clone(),
            professional: None,
            workspace: None,
            subscription_ids: Vec::new(),
            subscription_start_dates: Vec::new(),
            subscription_end_dates: Vec::new(),
            phone_numbers: Vec::new(),
            outgoing_permissions: HashMap::new(),
            intercept_settings: HashMap::new(),
            trunks: Vec::new(),
            error: false,
        })
    }

    /// Accumulate calling license lines; other licenses are ignored
    pub fn add_licenses(&mut self, lines: &[License]) {
        for license in lines {
            let count = match license.name.as_str() {
                licenses::PROFESSIONAL => self.professional.get_or_insert_with(Default::default),
                licenses::WORKSPACES => self.workspace.get_or_insert_with(Default::default),
                _ => continue,
            };
            count.add(license);

            if let Some(sub_id) = license.subscription() {
                if !self.subscription_ids.iter().any(|s| s == sub_id) {
                    self.subscription_ids.push(sub_id.to_string());
                }
            }
        }
    }

    /// Whether any calling license was found
    pub fn has_licenses(&self) -> bool {
        self.professional.is_some() || self.workspace.is_some()
    }

    /// Record the term of the next subscription id
    pub fn push_subscription_term(&mut self, term: SubscriptionTerm) {
        self.subscription_start_dates.push(term.start);
        self.subscription_end_dates.push(term.end);
    }

    /// Fill dates for subscriptions that were never looked up with "Unknown"
    pub fn pad_unknown_terms(&mut self) {
        while self.subscription_start_dates.len() < self.subscription_ids.len() {
            self.subscription_start_dates
                .push(commerce::UNKNOWN_DATE.to_string());
        }
        while self.subscription_end_dates.len() < self.subscription_ids.len() {
            self.subscription_end_dates
                .push(commerce::UNKNOWN_DATE.to_string());
        }
    }

    /// Whether at least one subscription term was confirmed
    pub fn has_known_terms(&self) -> bool {
        self.subscription_start_dates
            .iter()
            .chain(self.subscription_end_dates.iter())
            .any(|d| d != commerce::UNKNOWN_DATE)
    }

    /// Owner ids in number order, one per person-owned number (repeats kept)
    pub fn owner_ids(&self) -> Vec<String> {
        self.phone_numbers
            .iter()
            .filter(|n| !n.owner_id.is_empty())
            .map(|n| n.owner_id.clone())
            .collect()
    }
}

/// Title-case an upstream action ("ALLOW" -> "Allow", "AUTH_CODE" -> "Auth_Code")
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for c in value.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
