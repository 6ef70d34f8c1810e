//! Resource collectors
//!
//! Each collector takes the aggregate built so far and hands it back with
//! its part filled in. Per-call failures are reported and flip the
//! aggregate's error flag; they never abort the organization.

use log::{debug, info, warn};

use crate::commerce::{subscription_term, CommerceClient, SubscriptionTerm};
use crate::error::ReportError;
use crate::ui::Reporter;
use crate::webex::WebexClient;

use super::aggregate::{InterceptRecord, OrgAggregate, PermissionRecord, PhoneNumberRecord, TrunkRecord};

/// Collectors sharing one client set and one reporter
pub struct Collectors<'a> {
    client: &'a WebexClient,
    commerce: Option<&'a CommerceClient>,
    reporter: &'a dyn Reporter,
}

impl<'a> Collectors<'a> {
    /// `commerce` is `None` when the subscription-date integration is off
    pub fn new(
        client: &'a WebexClient,
        commerce: Option<&'a CommerceClient>,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            client,
            commerce,
            reporter,
        }
    }

    /// Whether the subscription-date collector will run
    pub fn subscription_dates_enabled(&self) -> bool {
        self.commerce.is_some()
    }

    fn fail(&self, aggregate: &mut OrgAggregate, err: ReportError) {
        warn!("{}: {}", aggregate.display_name, err);
        self.reporter.error(&err.to_string());
        aggregate.error = true;
    }

    /// Refresh the display name from the organization details endpoint
    pub async fn organization_details(&self, mut aggregate: OrgAggregate) -> OrgAggregate {
        match self.client.get_organization(&aggregate.api_id).await {
            Ok(org) => {
                if !org.display_name.is_empty() {
                    aggregate.display_name = org.display_name;
                }
            }
            Err(e) => self.fail(&mut aggregate, e),
        }
        aggregate
    }

    /// Calling license counts and the subscription ids behind them
    pub async fn licenses(&self, mut aggregate: OrgAggregate) -> OrgAggregate {
        match self.client.get_licenses(&aggregate.api_id).await {
            Ok(lines) => {
                debug!("{} license lines for {}", lines.len(), aggregate.org_id);
                aggregate.add_licenses(&lines);
            }
            Err(e) => self.fail(&mut aggregate, e),
        }
        aggregate
    }

    /// Subscription start/end dates, one pair per subscription id
    ///
    /// A failed token exchange or a failed lookup stops further lookups;
    /// the remaining ids get "Unknown" dates so the lists stay aligned.
    pub async fn subscription_dates(&self, mut aggregate: OrgAggregate) -> OrgAggregate {
        let Some(commerce) = self.commerce else {
            return aggregate;
        };

        let token = match commerce.fetch_access_token().await {
            Ok(token) => token,
            Err(e) => {
                self.fail(&mut aggregate, e);
                aggregate.pad_unknown_terms();
                return aggregate;
            }
        };

        for sub_id in aggregate.subscription_ids.clone() {
            match commerce.get_subscription(&token, &sub_id).await {
                Ok(document) => {
                    let term = subscription_term(&document).unwrap_or_else(|| {
                        info!("Subscription {} lookup did not confirm success", sub_id);
                        SubscriptionTerm::unknown()
                    });
                    aggregate.push_subscription_term(term);
                }
                Err(e) => {
                    self.fail(&mut aggregate, e);
                    break;
                }
            }
        }

        aggregate.pad_unknown_terms();
        aggregate
    }

    /// Every number of the organization
    pub async fn phone_numbers(&self, mut aggregate: OrgAggregate) -> OrgAggregate {
        match self.client.get_phone_numbers(&aggregate.api_id).await {
            Ok(numbers) => {
                aggregate.phone_numbers = numbers.iter().map(PhoneNumberRecord::from).collect();
            }
            Err(e) => self.fail(&mut aggregate, e),
        }
        aggregate
    }

    /// Outgoing permissions, looked up once per person-owned number
    pub async fn outbound_permissions(&self, mut aggregate: OrgAggregate) -> OrgAggregate {
        let owners = aggregate.owner_ids();
        self.reporter
            .begin_task("Find Outbound Calling Permissions", owners.len());

        for owner_id in owners {
            match self
                .client
                .get_outgoing_permission(&aggregate.api_id, &owner_id)
                .await
            {
                Ok(permission) => {
                    aggregate
                        .outgoing_permissions
                        .insert(owner_id, PermissionRecord::from(&permission));
                }
                Err(e) => self.fail(&mut aggregate, e),
            }
            self.reporter.advance_task();
        }
        aggregate
    }

    /// Call intercept settings, looked up once per person-owned number
    pub async fn intercept_settings(&self, mut aggregate: OrgAggregate) -> OrgAggregate {
        let owners = aggregate.owner_ids();
        self.reporter
            .begin_task("Find Call Intercept Settings", owners.len());

        for owner_id in owners {
            match self.client.get_intercept(&aggregate.api_id, &owner_id).await {
                Ok(settings) => {
                    aggregate
                        .intercept_settings
                        .insert(owner_id, InterceptRecord::from(&settings));
                }
                Err(e) => self.fail(&mut aggregate, e),
            }
            self.reporter.advance_task();
        }
        aggregate
    }

    /// Premise trunks that are used by at least one route group
    pub async fn trunks(&self, mut aggregate: OrgAggregate) -> OrgAggregate {
        let trunks = match self.client.get_trunks(&aggregate.api_id).await {
            Ok(trunks) => trunks,
            Err(e) => {
                self.fail(&mut aggregate, e);
                return aggregate;
            }
        };

        self.reporter
            .begin_task("Find Trunks (and Route Groups)", trunks.len());

        for trunk in trunks {
            match self
                .client
                .get_trunk_route_groups(&aggregate.api_id, &trunk.id)
                .await
            {
                Ok(groups) if !groups.is_empty() => aggregate.trunks.push(TrunkRecord {
                    name: trunk.name,
                    id: trunk.id,
                    route_group_names: groups.into_iter().map(|g| g.name).collect(),
                }),
                Ok(_) => debug!("Trunk {} has no route groups, skipping", trunk.name),
                Err(e) => self.fail(&mut aggregate, e),
            }
            self.reporter.advance_task();
        }
        aggregate
    }
}
