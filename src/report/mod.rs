//! Calling report pipeline
//!
//! Per organization: collectors fill an [`OrgAggregate`], the row projector
//! flattens it into the three report tables, and the [`ReportDriver`] runs
//! this for every customer organization in turn.

mod aggregate;
mod collectors;
mod driver;
mod rows;

pub use aggregate::{
    title_case, CallTypeActions, InterceptRecord, LicenseCount, OrgAggregate, PermissionMode,
    PermissionRecord, PhoneNumberRecord, TrunkRecord,
};
pub use collectors::Collectors;
pub use driver::{ReportDriver, ReportRun, RunSettings};
pub use rows::{
    license_summary_row, number_detail_rows, trunk_detail_rows, LicenseSummaryRow,
    NumberDetailRow, ReportRow, ReportTables, TrunkDetailRow,
};
