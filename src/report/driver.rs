//! Sequential report run across customer organizations

use log::{debug, info};

use crate::commerce::CommerceClient;
use crate::error::Result;
use crate::ui::Reporter;
use crate::webex::{displayed_org_count, select_organizations, Organization, WebexClient};

use super::aggregate::{LicenseCount, OrgAggregate};
use super::collectors::Collectors;
use super::rows::{license_summary_row, number_detail_rows, trunk_detail_rows, ReportTables};

const SEPARATOR: &str =
    "\n--------------------------------------------------------------------------------";

/// Which organizations a run covers
#[derive(Debug, Clone, Default)]
pub struct RunSettings {
    /// Display name of the partner organization, never processed
    pub partner_org: String,
    /// Display names to process; empty processes everything
    pub allow_list: Vec<String>,
}

/// Outcome of a report run
#[derive(Debug, Default)]
pub struct ReportRun {
    pub tables: ReportTables,
    /// True when any organization hit a terminal request failure
    pub had_errors: bool,
    /// Organizations returned by the listing
    pub listed: usize,
    /// Organizations actually processed
    pub processed: usize,
}

impl ReportRun {
    /// Whether the run has tables to write; only an empty listing has none
    pub fn has_report(&self) -> bool {
        self.listed > 0
    }
}

/// Drives collectors and projections for every customer organization
pub struct ReportDriver<'a> {
    client: &'a WebexClient,
    collectors: Collectors<'a>,
    reporter: &'a dyn Reporter,
    settings: RunSettings,
}

impl<'a> ReportDriver<'a> {
    pub fn new(
        client: &'a WebexClient,
        commerce: Option<&'a CommerceClient>,
        reporter: &'a dyn Reporter,
        settings: RunSettings,
    ) -> Self {
        Self {
            client,
            collectors: Collectors::new(client, commerce, reporter),
            reporter,
            settings,
        }
    }

    /// Run the report; only listing and org-id decoding failures abort it
    pub async fn run(&self) -> Result<ReportRun> {
        let orgs = self.client.list_organizations().await?;
        let mut run = ReportRun {
            listed: orgs.len(),
            ..Default::default()
        };

        if orgs.is_empty() {
            self.reporter.error("No customer orgs found, exiting...");
            return Ok(run);
        }
        self.reporter
            .info(&format!("Found {} org(s)!", displayed_org_count(orgs.len())));

        let orgs = select_organizations(orgs, &self.settings.allow_list);
        let total = displayed_org_count(orgs.len());
        self.reporter.begin_run(total);

        for org in &orgs {
            if org.display_name == self.settings.partner_org {
                debug!("Skipping partner organization '{}'", org.display_name);
                continue;
            }

            run.processed += 1;
            self.reporter.info(SEPARATOR);
            let aggregate = self
                .process_org(org, run.processed, total, &mut run.tables)
                .await?;
            run.had_errors |= aggregate.error;
            self.reporter.org_finished();
        }

        self.reporter.finish_run();
        info!(
            "Processed {} organization(s), errors: {}",
            run.processed, run.had_errors
        );
        Ok(run)
    }

    async fn process_org(
        &self,
        org: &Organization,
        index: usize,
        total: usize,
        tables: &mut ReportTables,
    ) -> Result<OrgAggregate> {
        let aggregate = OrgAggregate::new(org)?;
        let aggregate = self.collectors.organization_details(aggregate).await;

        self.reporter.info(&format!(
            "\nProcessing Org: '{}' ({} of {})",
            org.display_name, index, total
        ));

        self.reporter.info("\n- Generating Report 1:");
        let aggregate = self.collectors.licenses(aggregate).await;
        self.report_licenses(&aggregate);

        let aggregate = if self.collectors.subscription_dates_enabled() {
            let aggregate = self.collectors.subscription_dates(aggregate).await;
            self.report_subscription_dates(&aggregate);
            aggregate
        } else {
            aggregate
        };
        tables.license_summary.push(license_summary_row(&aggregate));

        self.reporter.info("\n- Generating Report 2:");
        let mut aggregate = self.collectors.phone_numbers(aggregate).await;
        if aggregate.phone_numbers.is_empty() {
            self.reporter
                .error("-- No Webex Calling Phone Numbers provisioned.");
        } else {
            let numbers: Vec<&str> = aggregate
                .phone_numbers
                .iter()
                .map(|n| n.number.as_str())
                .filter(|n| !n.is_empty())
                .collect();
            self.reporter
                .info(&format!("-- Found Webex Phone Numbers: {}", numbers.join(", ")));

            aggregate = self.collectors.outbound_permissions(aggregate).await;
            self.reporter
                .info("--- Found Outbound Permissions for each number");

            aggregate = self.collectors.intercept_settings(aggregate).await;
            self.reporter
                .info("--- Found Outbound Intercept Settings for each number");
        }
        tables.number_detail.extend(number_detail_rows(&aggregate));

        self.reporter.info("\n- Generating Report 3:");
        let aggregate = self.collectors.trunks(aggregate).await;
        if aggregate.trunks.is_empty() {
            self.reporter.error("-- No Webex Calling Trunks found.");
        } else {
            let names: Vec<&str> = aggregate.trunks.iter().map(|t| t.name.as_str()).collect();
            self.reporter
                .info(&format!("-- Found Webex Calling Trunks: {}", names.join(", ")));
        }
        tables.trunk_detail.extend(trunk_detail_rows(&aggregate));

        Ok(aggregate)
    }

    fn report_licenses(&self, aggregate: &OrgAggregate) {
        if !aggregate.has_licenses() {
            self.reporter
                .error("-- No Webex Calling License information found.");
            return;
        }

        let sub_ids = aggregate.subscription_ids.join(", ");
        let kinds = [
            ("Professional", aggregate.professional),
            ("Workspace", aggregate.workspace),
        ];
        for (kind, count) in kinds {
            if let Some(count) = count {
                self.reporter.info(&format!(
                    "-- Found Webex Calling {} Licenses: {} (Sub-Ref ID(s): {})",
                    kind,
                    describe_count(&count),
                    sub_ids
                ));
            }
        }
    }

    fn report_subscription_dates(&self, aggregate: &OrgAggregate) {
        if !aggregate.has_known_terms() {
            self.reporter
                .error("-- Unable to obtain data from CCW API. Skipping...");
            return;
        }
        self.reporter.info(&format!(
            "-- Found the following License Start and License End dates: {}, {}",
            aggregate.subscription_start_dates.join(", "),
            aggregate.subscription_end_dates.join(", ")
        ));
    }
}

fn describe_count(count: &LicenseCount) -> String {
    format!("booked={}, provisioned={}", count.booked, count.provisioned)
}
