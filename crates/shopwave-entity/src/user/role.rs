//! Marketplace roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use shopwave_core::AppError;

/// Privilege tiers, declared in ascending order so the derived `Ord`
/// matches marketplace privilege: every seller can do what a buyer can,
/// and every admin can do what a seller can.
///
/// The wire form is uppercase in JSON, in the database enum, and in the
/// forwarded `x-user-role` header.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Regular shopper. Every account starts here.
    Buyer,
    /// Has opened a shop and may use the seller dashboard.
    Seller,
    /// Full marketplace administrator.
    Admin,
}

impl UserRole {
    /// Whether this role meets or exceeds `required`.
    pub fn has_at_least(self, required: UserRole) -> bool {
        self >= required
    }

    /// The uppercase wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buyer => "BUYER",
            Self::Seller => "SELLER",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BUYER" => Ok(Self::Buyer),
            "SELLER" => Ok(Self::Seller),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(AppError::validation(format!(
                "Unknown role '{s}', expected BUYER, SELLER or ADMIN"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privilege_is_ordered() {
        assert!(UserRole::Admin > UserRole::Seller);
        assert!(UserRole::Seller > UserRole::Buyer);
        assert!(UserRole::Seller.has_at_least(UserRole::Seller));
        assert!(!UserRole::Buyer.has_at_least(UserRole::Seller));
    }

    #[test]
    fn test_parse_accepts_any_case() {
        assert_eq!("SELLER".parse::<UserRole>().unwrap(), UserRole::Seller);
        assert_eq!("buyer".parse::<UserRole>().unwrap(), UserRole::Buyer);
        assert!("manager".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_wire_form_is_uppercase() {
        assert_eq!(serde_json::to_string(&UserRole::Buyer).unwrap(), "\"BUYER\"");
        let back: UserRole = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(back, UserRole::Admin);
        assert_eq!(UserRole::Seller.to_string(), "SELLER");
    }
}
