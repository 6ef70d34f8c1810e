//! webex-calling-report - Partner-level Webex Calling reporting
//!
//! Walks every customer organization visible to a partner administrator
//! and builds three reports:
//!
//! 1. License summary: booked/provisioned Professional and Workspace
//!    licenses, with subscription ids and (optionally) subscription dates
//! 2. Number detail: every phone number with its owner, outgoing call
//!    permissions and call intercept settings
//! 3. Trunk detail: premise PSTN trunks and the route groups using them
//!
//! # Example
//!
//! ```bash
//! # CSV reports for every customer organization
//! webex-calling-report --partner-org "My Partner Org"
//!
//! # Two organizations only, with subscription dates, as JSON
//! webex-calling-report -p "My Partner Org" --org Acme --org "Beta Corp" \
//!     --subscription-dates -f json
//! ```

pub mod cli;
pub mod commerce;
pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod tokens;
pub mod ui;
pub mod webex;

pub use cli::{Cli, OutputFormat};
pub use commerce::CommerceClient;
pub use error::{ReportError, Result};
pub use output::{write_report, Destination};
pub use report::{ReportDriver, ReportRun, ReportTables, RunSettings};
pub use tokens::{TokenResolver, TokenStore};
pub use ui::{ConsoleReporter, NoopReporter, Reporter, RunLog};
pub use webex::WebexClient;
