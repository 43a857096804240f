// Data-model records passed between pipeline stages.
// Profile records are immutable once extracted; job/gap records are created
// once per request; CV and cover-letter models are what rendering consumes.

pub mod cv;
pub mod job;
pub mod profile;

use serde::{Deserialize, Deserializer};

/// Accepts an explicit JSON `null` where a string is expected.
///
/// The extraction prompt tells the model to null absent scalars, and the
/// generation models null fields freely; a nulled string must decode as the
/// empty default instead of aborting deserialization of the whole record.
pub(crate) fn null_to_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
