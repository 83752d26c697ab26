use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{ItemError, ItemResult};

/// Item entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Assigned by the store on creation
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Widget")]
    pub name: String,
}

/// DTO for creating an item
///
/// Unknown fields (including any client-supplied `id`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[serde(default)]
    #[validate(
        required(message = "Item name is required"),
        length(min = 1, message = "Item name is required")
    )]
    #[schema(example = "Widget")]
    pub name: Option<String>,
}

/// DTO for replacing an item's name
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    #[serde(default)]
    #[validate(
        required(message = "Item name is required"),
        length(min = 1, message = "Item name is required")
    )]
    #[schema(example = "Gadget")]
    pub name: Option<String>,
}

impl CreateItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// The validated name; missing, `null` and `""` are rejected.
    pub fn into_name(self) -> ItemResult<String> {
        self.validate().map_err(|_| ItemError::NameRequired)?;
        self.name.ok_or(ItemError::NameRequired)
    }
}

impl UpdateItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// The validated name; missing, `null` and `""` are rejected.
    pub fn into_name(self) -> ItemResult<String> {
        self.validate().map_err(|_| ItemError::NameRequired)?;
        self.name.ok_or(ItemError::NameRequired)
    }
}

/// Parse an item id from a path segment.
///
/// Reads the leading integer: optional leading ASCII whitespace, an optional
/// sign, then decimal digits. Anything after the digits is ignored, so
/// `"12abc"` is `12`. No digits, or a value outside `i32`, is
/// [`ItemError::InvalidId`].
pub fn parse_item_id(raw: &str) -> ItemResult<i32> {
    let trimmed = raw.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return Err(ItemError::InvalidId(raw.to_string()));
    }

    trimmed[..sign_len + digits_len]
        .parse()
        .map_err(|_| ItemError::InvalidId(raw.to_string()))
}
