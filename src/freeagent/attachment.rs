/*!
File attachments on bills, expenses and bank transaction explanations.
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/**
Structure representing a FreeAgent Attachment.

See https://dev.freeagent.com/docs/attachments

On responses `content_src*` are temporary download links valid until `expires_at`. On
requests the file is sent inline as base64 in `data`.
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_src_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_src_small: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// e.g. "image/png", "application/pdf"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// In bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Base64 encoded file content, request only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}
