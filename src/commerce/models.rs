//! Purchase-order document navigation
//!
//! The subscription lookup returns a deeply nested document; only two
//! leaves matter, so it is walked with JSON pointers instead of typed
//! structs.

use chrono::DateTime;
use serde_json::Value;

use crate::config::commerce;

const DATA_AREA: &str = "/ShowPurchaseOrder/value/dataArea";
const RESPONSE_EXPRESSION: &str =
    "/show/value/responseCriteria/0/value/responseExpression/value/value";
const DURATION_AND_TERM: &str = "/purchaseOrder/0/value/purchaseOrderHeader/value/extension/0/ciscoExtensionArea/subscriptionDetail/value/durationAndTerm/value";

/// Subscription start and end dates, rendered MM/DD/YYYY
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionTerm {
    pub start: String,
    pub end: String,
}

impl SubscriptionTerm {
    /// Term used when the lookup cannot confirm success
    pub fn unknown() -> Self {
        Self {
            start: commerce::UNKNOWN_DATE.to_string(),
            end: commerce::UNKNOWN_DATE.to_string(),
        }
    }
}

/// Extract the term from a purchase-order document
///
/// Returns `None` unless the response expression contains the success marker.
/// A confirmed lookup whose timestamps are missing or unparseable yields
/// "Unknown" for the affected date.
pub fn subscription_term(document: &Value) -> Option<SubscriptionTerm> {
    let data_area = document.pointer(DATA_AREA)?;
    let expression = data_area.pointer(RESPONSE_EXPRESSION)?.as_str()?;
    if !expression.contains(commerce::SUCCESS_MARKER) {
        return None;
    }

    let term = data_area.pointer(DURATION_AND_TERM);
    let date_at = |field: &str| {
        term.and_then(|t| t.pointer(field))
            .and_then(Value::as_str)
            .and_then(format_subscription_date)
            .unwrap_or_else(|| commerce::UNKNOWN_DATE.to_string())
    };

    Some(SubscriptionTerm {
        start: date_at("/startDateTime/value"),
        end: date_at("/endDateTime/value"),
    })
}

/// Reformat an ISO-8601 timestamp with fractional seconds and offset as MM/DD/YYYY
pub fn format_subscription_date(raw: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .ok()
        .map(|dt| dt.format("%m/%d/%Y").to_string())
}

#[cfg(test)]
pub(crate) fn purchase_order_json(expression: &str, start: &str, end: &str) -> Value {
    serde_json::json!({
        "ShowPurchaseOrder": {"value": {"dataArea": {
            "show": {"value": {"responseCriteria": [
                {"value": {"responseExpression": {"value": {"value": expression}}}}
            ]}},
            "purchaseOrder": [{"value": {"purchaseOrderHeader": {"value": {"extension": [
                {"ciscoExtensionArea": {"subscriptionDetail": {"value": {"durationAndTerm": {"value": {
                    "startDateTime": {"value": start},
                    "endDateTime": {"value": end}
                }}}}}}
            ]}}}}]
        }}}
    })
}
