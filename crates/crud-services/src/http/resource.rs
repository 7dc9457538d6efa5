use crate::validation::{JsonObject, ValidationError};
use crud_framework::ActorEntity;

/// What the HTTP layer needs to know about a resource on top of [`ActorEntity`].
pub trait RestResource: ActorEntity {
    /// Singular name used in response messages (`"Usuario"`, `"Pedido"`, ...).
    const LABEL: &'static str;

    /// Path keywords that select a filter, as in `<base>/<keyword>/<value>`.
    const FILTERS: &'static [&'static str];

    /// Validates a create body. Every offending field is reported.
    fn create_from_json(body: &JsonObject) -> Result<Self::Create, ValidationError>;

    /// Validates a merge-patch body.
    fn update_from_json(body: &JsonObject) -> Result<Self::Update, ValidationError>;

    /// Builds the filter for `keyword`, or `None` if `value` does not fit it.
    fn filter_for(keyword: &str, value: &str) -> Option<Self::Filter>;

    /// Name reported by the health endpoint.
    fn service_name() -> String {
        format!("{}-api", Self::RESOURCE)
    }

    /// Body served on `GET /` when the resource is mounted below the root. `None` leaves `/`
    /// unrouted.
    fn banner() -> Option<serde_json::Value> {
        None
    }
}
