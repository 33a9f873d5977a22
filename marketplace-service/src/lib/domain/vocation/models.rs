use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::account::models::AccountId;
use crate::domain::vocation::errors::VocationIdError;
use crate::domain::vocation::errors::VocationNameError;

/// A marketplace listing owned by one account.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocation {
    pub id: VocationId,
    pub owner_id: AccountId,
    pub name: VocationName,
    pub details: VocationDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VocationId(pub Uuid);

impl VocationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a vocation ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, VocationIdError> {
        Uuid::parse_str(s)
            .map(VocationId)
            .map_err(|e| VocationIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for VocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Listing name; the only field whose presence is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocationName(String);

impl VocationName {
    const MAX_LENGTH: usize = 255;

    /// # Errors
    /// * `Empty` - Name is blank
    /// * `TooLong` - Name longer than 255 characters
    pub fn new(name: String) -> Result<Self, VocationNameError> {
        let name = name.trim().to_string();
        let length = name.chars().count();
        if length == 0 {
            Err(VocationNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(VocationNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-form listing attributes, stored as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocationDetails {
    pub description: String,
    pub comment: String,
    pub rating: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub image: String,
    pub price: String,
}

/// Command to create a listing. The owner is supplied separately by the
/// caller from the authenticated request, never from the payload.
#[derive(Debug)]
pub struct CreateVocationCommand {
    pub name: VocationName,
    pub details: VocationDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        let name = VocationName::new("  Halal Grill  ".to_string()).unwrap();
        assert_eq!(name.as_str(), "Halal Grill");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(
            VocationName::new("   ".to_string()).unwrap_err(),
            VocationNameError::Empty
        );
    }

    #[test]
    fn test_long_name_rejected() {
        assert!(matches!(
            VocationName::new("x".repeat(256)),
            Err(VocationNameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_vocation_id_parse() {
        assert!(VocationId::from_string("not-a-uuid").is_err());
        let id = VocationId::new();
        assert_eq!(VocationId::from_string(&id.to_string()).unwrap(), id);
    }
}
