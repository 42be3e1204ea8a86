use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One keyset page of a listing, as served for a video's comment thread.
/// `next_cursor` is an opaque token addressing the page after this one;
/// clients must not parse it, only echo it back.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct CursorPage<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl<T> CursorPage<T> {
    /// `has_more` is derived rather than stored, so a page without a
    /// follow-up cursor can never claim more data exists.
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        let has_more = next_cursor.is_some();
        Self {
            items,
            next_cursor,
            has_more,
        }
    }
}
