pub mod dispatch;
pub mod field_mapper;
pub mod fields;
pub mod params;
mod registry;
pub mod schema;

pub use dispatch::{endpoint_for, requires_session, Operation, Resource, UNKNOWN_ENDPOINT};
pub use field_mapper::{build_request_body, select_fields};
pub use fields::FieldBag;
pub use params::{AdvancedOptions, JsonOrRaw, OperationParams, Payload};
pub use registry::*;
