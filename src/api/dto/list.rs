use serde::Deserialize;
use serde_json::Value;

/// Envelope of a cluster `List` response. Items are kept raw so that a
/// single odd object cannot fail the whole listing.
#[derive(Deserialize, Debug, Clone)]
pub(crate) struct ResourceList {
    #[serde(default)]
    pub(crate) kind: Option<String>,
    #[serde(default)]
    pub(crate) items: Vec<Value>,
}
