use serde::{
    Deserialize,
    Serialize,
};

use crate::util::null_as_default;

/// The identity of the bio owner, as returned by `GET /api/profile`.
///
/// Fields the server leaves out or sends as `null` are empty strings. A
/// missing `profile_image` will fail to load in the browser and be replaced by
/// a placeholder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_image: String,
}
