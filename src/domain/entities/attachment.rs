//! Attachment entities (images and files embedded in notes).

use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};

/// Attachment metadata from `GET /etapi/attachments/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttachmentMeta {
    pub owner_id: String,
    pub mime: String,
}

/// Attachment payload ready to be served.
///
/// Serialized with base64 content so it can be cached as JSON.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde_as(as = "Base64")]
    pub content: Vec<u8>,
    pub mime: String,
}
