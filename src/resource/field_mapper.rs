//! Request body assembly
//!
//! Turns an operation id plus the values of its parameter collection into
//! the flat JSON body posted to the API.

use super::dispatch::{requires_session, Operation};
use super::fields::{is_truthy, FieldBag};
use super::params::{OperationParams, Payload};
use crate::linkup::credentials::{LinkupCredentials, DEFAULT_COUNTRY};
use serde_json::Value;
use tracing::trace;

/// Pick the collection an operation reads from.
///
/// Operations with several candidate collections take the first one that
/// holds at least one value.
pub fn select_fields<F>(operation: &str, mut lookup: F) -> FieldBag
where
    F: FnMut(&str) -> Option<Value>,
{
    let Ok(op) = operation.parse::<Operation>() else {
        return FieldBag::default();
    };

    for name in op.collections() {
        let fields = lookup(name)
            .map(|v| FieldBag::from_value(&v))
            .unwrap_or_default();
        if !fields.is_empty() {
            return fields;
        }
    }
    FieldBag::default()
}

/// Build the request body for one item.
///
/// Never fails: missing inputs are left out, unknown operations produce a
/// body with only the session token and the country.
pub fn build_request_body(
    operation: &str,
    fields: &FieldBag,
    credentials: &LinkupCredentials,
) -> Payload {
    let mut body = Payload::new();
    let op = operation.parse::<Operation>().ok();

    if requires_session(operation) && !credentials.login_token.is_empty() {
        body.insert(
            "login_token".to_string(),
            Value::String(credentials.login_token.clone()),
        );
    }

    match op {
        Some(op) => OperationParams::from_fields(op, fields, credentials).write_into(&mut body),
        None => trace!("No field mapping for operation '{}'", operation),
    }

    let has_country = body.get("country").map(is_truthy).unwrap_or(false);
    if !has_country {
        body.insert(
            "country".to_string(),
            Value::String(DEFAULT_COUNTRY.to_string()),
        );
    }

    body
}
