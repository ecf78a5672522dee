use serde::Serialize;

/// Length of the `SaveType_` prefix the API puts on favourite types.
const FAVOURITE_TYPE_PREFIX_LEN: usize = 9;

/// A user's like of a track or playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Favourite {
    /// ID of the favourited item
    pub id: String,
    /// Item type with the API prefix removed (`track`, `playlist`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// ID of the user who made the favourite
    pub user_id: String,
}

impl Favourite {
    /// Build a favourite from the raw API type string, dropping its fixed-length prefix.
    pub fn from_raw_type(id: String, raw_type: &str, user_id: String) -> Self {
        Self {
            id,
            kind: strip_type_prefix(raw_type),
            user_id,
        }
    }
}

/// Drop the first nine characters, whatever they are.
fn strip_type_prefix(raw: &str) -> String {
    raw.chars().skip(FAVOURITE_TYPE_PREFIX_LEN).collect()
}
