//! User record as resolved from the user directory.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User record owned by the directory. Read-only to this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Login email, also the authenticated principal
    #[validate(email)]
    pub email: String,
    /// Display name
    #[validate(length(min = 1))]
    pub nickname: String,
    /// Avatar URL
    #[serde(rename = "profileImgURL")]
    pub profile_img_url: String,
}
