//! Row projection of an organization aggregate into the three report tables

use serde::Serialize;

use super::aggregate::{LicenseCount, OrgAggregate, PermissionMode, PhoneNumberRecord};

/// A row with a fixed column set
pub trait ReportRow {
    /// Column headers, in cell order
    const HEADERS: &'static [&'static str];

    /// Cell values, in header order
    fn cells(&self) -> Vec<String>;
}

/// Report 1: one row per organization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LicenseSummaryRow {
    #[serde(rename = "Customer Name")]
    pub customer_name: String,
    #[serde(rename = "Customer Org ID")]
    pub customer_org_id: String,
    #[serde(rename = "Sub-Ref Id(s)")]
    pub subscription_ids: String,
    #[serde(rename = "Recent Subscription Start Date")]
    pub start_dates: String,
    #[serde(rename = "Recent Subscription End Date")]
    pub end_dates: String,
    #[serde(rename = "Booked (TOTAL)")]
    pub booked_total: i64,
    #[serde(rename = "Booked Professional Licenses")]
    pub booked_professional: String,
    #[serde(rename = "Booked Workspaces")]
    pub booked_workspaces: String,
    #[serde(rename = "Provisioned (TOTAL)")]
    pub provisioned_total: i64,
    #[serde(rename = "Provisioned Professional Licenses")]
    pub provisioned_professional: String,
    #[serde(rename = "Provisioned Workspaces")]
    pub provisioned_workspaces: String,
}

impl ReportRow for LicenseSummaryRow {
    const HEADERS: &'static [&'static str] = &[
        "Customer Name",
        "Customer Org ID",
        "Sub-Ref Id(s)",
        "Recent Subscription Start Date",
        "Recent Subscription End Date",
        "Booked (TOTAL)",
        "Booked Professional Licenses",
        "Booked Workspaces",
        "Provisioned (TOTAL)",
        "Provisioned Professional Licenses",
        "Provisioned Workspaces",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.customer_name.clone(),
            self.customer_org_id.clone(),
            self.subscription_ids.clone(),
            self.start_dates.clone(),
            self.end_dates.clone(),
            self.booked_total.to_string(),
            self.booked_professional.clone(),
            self.booked_workspaces.clone(),
            self.provisioned_total.to_string(),
            self.provisioned_professional.clone(),
            self.provisioned_workspaces.clone(),
        ]
    }
}

/// Report 2: one row per phone number
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NumberDetailRow {
    #[serde(rename = "Customer Name")]
    pub customer_name: String,
    #[serde(rename = "Customer Org ID")]
    pub customer_org_id: String,
    #[serde(rename = "Phone Number")]
    pub phone_number: String,
    #[serde(rename = "Main Number")]
    pub main_number: String,
    #[serde(rename = "Extension")]
    pub extension: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Assigned to")]
    pub assigned_to: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Outgoing Call Permissions")]
    pub outgoing_call_permissions: String,
    #[serde(rename = "Internal")]
    pub internal: String,
    #[serde(rename = "Toll-free")]
    pub toll_free: String,
    #[serde(rename = "National")]
    pub national: String,
    #[serde(rename = "International")]
    pub international: String,
    #[serde(rename = "Operator Assistance")]
    pub operator_assistance: String,
    #[serde(rename = "Chargeable Directory Assistance")]
    pub chargeable_directory_assistance: String,
    #[serde(rename = "Special Services I")]
    pub special_services_1: String,
    #[serde(rename = "Special Services II")]
    pub special_services_2: String,
    #[serde(rename = "Premium Services I")]
    pub premium_services_1: String,
    #[serde(rename = "Premium Services II")]
    pub premium_services_2: String,
    #[serde(rename = "Call Intercept")]
    pub call_intercept: String,
    #[serde(rename = "Outgoing Intercept Permissions")]
    pub outgoing_intercept_permissions: String,
}

impl ReportRow for NumberDetailRow {
    const HEADERS: &'static [&'static str] = &[
        "Customer Name",
        "Customer Org ID",
        "Phone Number",
        "Main Number",
        "Extension",
        "Location",
        "Assigned to",
        "Status",
        "Outgoing Call Permissions",
        "Internal",
        "Toll-free",
        "National",
        "International",
        "Operator Assistance",
        "Chargeable Directory Assistance",
        "Special Services I",
        "Special Services II",
        "Premium Services I",
        "Premium Services II",
        "Call Intercept",
        "Outgoing Intercept Permissions",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.customer_name.clone(),
            self.customer_org_id.clone(),
            self.phone_number.clone(),
            self.main_number.clone(),
            self.extension.clone(),
            self.location.clone(),
            self.assigned_to.clone(),
            self.status.clone(),
            self.outgoing_call_permissions.clone(),
            self.internal.clone(),
            self.toll_free.clone(),
            self.national.clone(),
            self.international.clone(),
            self.operator_assistance.clone(),
            self.chargeable_directory_assistance.clone(),
            self.special_services_1.clone(),
            self.special_services_2.clone(),
            self.premium_services_1.clone(),
            self.premium_services_2.clone(),
            self.call_intercept.clone(),
            self.outgoing_intercept_permissions.clone(),
        ]
    }
}

/// Report 3: one row per trunk
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrunkDetailRow {
    #[serde(rename = "Customer Name")]
    pub customer_name: String,
    #[serde(rename = "Customer Org ID")]
    pub customer_org_id: String,
    #[serde(rename = "TRUNK")]
    pub trunk: String,
    #[serde(rename = "ROUTE GROUP NAME")]
    pub route_group_names: String,
}

impl ReportRow for TrunkDetailRow {
    const HEADERS: &'static [&'static str] =
        &["Customer Name", "Customer Org ID", "TRUNK", "ROUTE GROUP NAME"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.customer_name.clone(),
            self.customer_org_id.clone(),
            self.trunk.clone(),
            self.route_group_names.clone(),
        ]
    }
}

/// The three report tables, grown in organization processing order
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportTables {
    pub license_summary: Vec<LicenseSummaryRow>,
    pub number_detail: Vec<NumberDetailRow>,
    pub trunk_detail: Vec<TrunkDetailRow>,
}

impl ReportTables {
    pub fn is_empty(&self) -> bool {
        self.license_summary.is_empty()
            && self.number_detail.is_empty()
            && self.trunk_detail.is_empty()
    }
}

fn count_cell(count: Option<LicenseCount>, pick: fn(&LicenseCount) -> i64) -> String {
    count.map(|c| pick(&c).to_string()).unwrap_or_default()
}

fn count_value(count: Option<LicenseCount>, pick: fn(&LicenseCount) -> i64) -> i64 {
    count.map(|c| pick(&c)).unwrap_or(0)
}

/// Report 1 row; always exactly one per organization
pub fn license_summary_row(aggregate: &OrgAggregate) -> LicenseSummaryRow {
    let booked = |c: &LicenseCount| c.booked;
    let provisioned = |c: &LicenseCount| c.provisioned;
    let professional = aggregate.professional;
    let workspace = aggregate.workspace;

    LicenseSummaryRow {
        customer_name: aggregate.display_name.clone(),
        customer_org_id: aggregate.org_id.clone(),
        subscription_ids: aggregate.subscription_ids.join(", "),
        start_dates: aggregate.subscription_start_dates.join(", "),
        end_dates: aggregate.subscription_end_dates.join(", "),
        booked_total: count_value(professional, booked) + count_value(workspace, booked),
        booked_professional: count_cell(professional, booked),
        booked_workspaces: count_cell(workspace, booked),
        provisioned_total: count_value(professional, provisioned)
            + count_value(workspace, provisioned),
        provisioned_professional: count_cell(professional, provisioned),
        provisioned_workspaces: count_cell(workspace, provisioned),
    }
}

/// Report 2 rows; a placeholder row when the organization has no numbers
pub fn number_detail_rows(aggregate: &OrgAggregate) -> Vec<NumberDetailRow> {
    if aggregate.phone_numbers.is_empty() {
        return vec![NumberDetailRow {
            customer_name: aggregate.display_name.clone(),
            customer_org_id: aggregate.org_id.clone(),
            ..Default::default()
        }];
    }

    aggregate
        .phone_numbers
        .iter()
        .map(|number| number_detail_row(aggregate, number))
        .collect()
}

fn number_detail_row(aggregate: &OrgAggregate, number: &PhoneNumberRecord) -> NumberDetailRow {
    let mut row = NumberDetailRow {
        customer_name: aggregate.display_name.clone(),
        customer_org_id: aggregate.org_id.clone(),
        phone_number: number.number.clone(),
        main_number: number.main_flag.clone(),
        extension: number.extension.clone(),
        location: number.location_name.clone(),
        assigned_to: number.owner_name.clone(),
        status: number.status.clone(),
        ..Default::default()
    };

    if number.owner_id.is_empty() {
        return row;
    }

    if let Some(permission) = aggregate.outgoing_permissions.get(&number.owner_id) {
        row.outgoing_call_permissions = permission.mode.label().to_string();
        if permission.mode == PermissionMode::Custom {
            let actions = &permission.actions;
            row.internal = actions.internal.clone();
            row.toll_free = actions.toll_free.clone();
            row.national = actions.national.clone();
            row.international = actions.international.clone();
            row.operator_assistance = actions.operator_assistance.clone();
            row.chargeable_directory_assistance = actions.chargeable_directory_assistance.clone();
            row.special_services_1 = actions.special_services_1.clone();
            row.special_services_2 = actions.special_services_2.clone();
            row.premium_services_1 = actions.premium_services_1.clone();
            row.premium_services_2 = actions.premium_services_2.clone();
        }
    }

    if let Some(intercept) = aggregate.intercept_settings.get(&number.owner_id) {
        row.call_intercept = intercept.call_intercept.clone();
        row.outgoing_intercept_permissions = intercept.outgoing_permissions.clone();
    }

    row
}

/// Report 3 rows; a placeholder row when the organization has no used trunks
pub fn trunk_detail_rows(aggregate: &OrgAggregate) -> Vec<TrunkDetailRow> {
    if aggregate.trunks.is_empty() {
        return vec![TrunkDetailRow {
            customer_name: aggregate.display_name.clone(),
            customer_org_id: aggregate.org_id.clone(),
            ..Default::default()
        }];
    }

    aggregate
        .trunks
        .iter()
        .map(|trunk| TrunkDetailRow {
            customer_name: aggregate.display_name.clone(),
            customer_org_id: aggregate.org_id.clone(),
            trunk: trunk.name.clone(),
            route_group_names: trunk.route_group_names.join(","),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::aggregate::{CallTypeActions, InterceptRecord, PermissionRecord, TrunkRecord};
    use crate::webex::Organization;

    fn aggregate() -> OrgAggregate {
        OrgAggregate::new(&Organization {
            id: "Y2lzY29zcGFyazovL3VzL09SR0FOSVpBVElPTi8xMjM0".to_string(),
            display_name: "Acme".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_headers_match_cell_counts() {
        let agg = aggregate();
        assert_eq!(
            license_summary_row(&agg).cells().len(),
            LicenseSummaryRow::HEADERS.len()
        );
        assert_eq!(
            number_detail_rows(&agg)[0].cells().len(),
            NumberDetailRow::HEADERS.len()
        );
        assert_eq!(
            trunk_detail_rows(&agg)[0].cells().len(),
            TrunkDetailRow::HEADERS.len()
        );
    }

    #[test]
    fn test_license_summary_without_licenses() {
        let row = license_summary_row(&aggregate());
        assert_eq!(row.customer_org_id, "1234");
        assert_eq!(row.booked_professional, "");
        assert_eq!(row.provisioned_workspaces, "");
        assert_eq!(row.booked_total, 0);
        assert_eq!(row.provisioned_total, 0);
    }

    #[test]
    fn test_license_summary_totals_treat_missing_as_zero() {
        let mut agg = aggregate();
        agg.professional = Some(LicenseCount {
            booked: 10,
            provisioned: 7,
        });
        agg.subscription_ids = vec!["Sub1".into(), "Sub2".into()];
        agg.subscription_start_dates = vec!["01/01/2023".into(), "Unknown".into()];
        agg.subscription_end_dates = vec!["01/01/2026".into(), "Unknown".into()];

        let row = license_summary_row(&agg);
        assert_eq!(row.booked_total, 10);
        assert_eq!(row.booked_professional, "10");
        assert_eq!(row.booked_workspaces, "");
        assert_eq!(row.provisioned_total, 7);
        assert_eq!(row.subscription_ids, "Sub1, Sub2");
        assert_eq!(row.start_dates, "01/01/2023, Unknown");
        assert_eq!(row.end_dates, "01/01/2026, Unknown");
    }

    #[test]
    fn test_number_detail_placeholder_row() {
        let rows = number_detail_rows(&aggregate());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].customer_name, "Acme");
        assert_eq!(rows[0].phone_number, "");
        assert_eq!(rows[0].status, "");
    }

    #[test]
    fn test_number_detail_merges_custom_permissions_and_intercept() {
        let mut agg = aggregate();
        agg.phone_numbers = vec![
            PhoneNumberRecord {
                number: "15551230001".into(),
                owner_name: "Ada Lovelace".into(),
                owner_id: "p1".into(),
                status: "Active".into(),
                ..Default::default()
            },
            PhoneNumberRecord {
                number: "15551230002".into(),
                status: "Not Applicable".into(),
                ..Default::default()
            },
        ];
        agg.outgoing_permissions.insert(
            "p1".into(),
            PermissionRecord {
                mode: PermissionMode::Custom,
                actions: CallTypeActions {
                    internal: "Allow".into(),
                    international: "Block".into(),
                    ..Default::default()
                },
            },
        );
        agg.intercept_settings.insert(
            "p1".into(),
            InterceptRecord {
                call_intercept: "Enable".into(),
                outgoing_permissions: "Intercept All Outgoing Calls".into(),
            },
        );

        let rows = number_detail_rows(&agg);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].outgoing_call_permissions, "Custom Settings");
        assert_eq!(rows[0].internal, "Allow");
        assert_eq!(rows[0].international, "Block");
        assert_eq!(rows[0].call_intercept, "Enable");
        assert_eq!(rows[1].outgoing_call_permissions, "");
        assert_eq!(rows[1].call_intercept, "");
    }

    #[test]
    fn test_number_detail_default_permissions_leave_columns_empty() {
        let mut agg = aggregate();
        agg.phone_numbers = vec![PhoneNumberRecord {
            owner_id: "p1".into(),
            ..Default::default()
        }];
        agg.outgoing_permissions.insert(
            "p1".into(),
            PermissionRecord {
                mode: PermissionMode::Default,
                actions: CallTypeActions {
                    internal: "Block".into(),
                    ..Default::default()
                },
            },
        );

        let row = &number_detail_rows(&agg)[0];
        assert_eq!(row.outgoing_call_permissions, "Default Settings");
        assert_eq!(row.internal, "");
    }

    #[test]
    fn test_trunk_detail_rows() {
        let mut agg = aggregate();
        assert_eq!(trunk_detail_rows(&agg)[0].trunk, "");

        agg.trunks = vec![TrunkRecord {
            name: "SBC-East".into(),
            id: "t1".into(),
            route_group_names: vec!["RG-A".into(), "RG-B".into()],
        }];
        let rows = trunk_detail_rows(&agg);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].trunk, "SBC-East");
        assert_eq!(rows[0].route_group_names, "RG-A,RG-B");
    }

    #[test]
    fn test_serialized_keys_are_column_headers() {
        let value = serde_json::to_value(trunk_detail_rows(&aggregate())).unwrap();
        let keys: Vec<&String> = value[0].as_object().unwrap().keys().collect();
        for header in TrunkDetailRow::HEADERS {
            assert!(keys.iter().any(|k| k.as_str() == *header));
        }
    }
}
