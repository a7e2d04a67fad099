//! Employee directory record (`phone_book` table). Read-mostly: owned by an
//! external directory source, this system only searches it.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub room: Option<String>,
    pub internal_phone: Option<String>,
    pub email: Option<String>,
}

/// Fixed whitelist of searchable columns. Only these names are ever
/// interpolated into SQL, so a raw user-supplied field can never reach the
/// query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    FullName,
    Position,
    Department,
    Room,
    InternalPhone,
    Email,
}

impl SearchField {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "full_name" => Some(Self::FullName),
            "position" => Some(Self::Position),
            "department" => Some(Self::Department),
            "room" => Some(Self::Room),
            "internal_phone" => Some(Self::InternalPhone),
            "email" => Some(Self::Email),
            _ => None,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Position => "position",
            Self::Department => "department",
            Self::Room => "room",
            Self::InternalPhone => "internal_phone",
            Self::Email => "email",
        }
    }
}
