use japi_domain::resource::{IdKind, RelationshipField};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// A type exposed as a JSON:API resource.
///
/// The serialized form must be a JSON object holding the id under
/// [`Resource::ID_FIELD`]. Relationship fields hold the target id (to-one,
/// `null` when absent) or an array of ids (to-many).
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + 'static {
    type Id: Serialize + DeserializeOwned + Debug + Send + Sync;

    /// JSON:API `type` member and first path segment.
    const TYPE: &'static str;
    const ID_FIELD: &'static str = "id";
    const ID_KIND: IdKind = IdKind::Text;

    fn relationships() -> Vec<RelationshipField> {
        Vec::new()
    }
}
