//! Waitlist record types.
//!
//! Each record kind comes in two shapes:
//!
//! - a *candidate* (`NewUserWaitlistEntry`, `NewVendorWaitlistEntry`) that has
//!   passed the schema but has no identity yet, and
//! - a persisted *entry* (`UserWaitlistEntry`, `VendorWaitlistEntry`) carrying
//!   the identity token and creation timestamp assigned by the store.
//!
//! Entries are immutable once created.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::ids::{UserWaitlistId, VendorWaitlistId};

// ============================================================================
// Enumerations
// ============================================================================

/// Plans a prospective user can express interest in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredPlan {
    /// Basic plan.
    Basic,
    /// Premium plan.
    Premium,
    /// Enterprise plan.
    Enterprise,
}

impl PreferredPlan {
    /// Every plan, in display order.
    pub const ALL: [Self; 3] = [Self::Basic, Self::Premium, Self::Enterprise];

    /// Wire values accepted by the schema.
    pub const VALUES: &'static [&'static str] = &["basic", "premium", "enterprise"];

    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Premium => "premium",
            Self::Enterprise => "enterprise",
        }
    }

    /// Display text shown in the plan picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Premium => "Premium",
            Self::Enterprise => "Enterprise",
        }
    }
}

impl FromStr for PreferredPlan {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseError::UnknownVariant {
                kind: "plan",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for PreferredPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Professional categories a vendor can join as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorRole {
    /// Vastu consultant.
    Vastu,
    /// Interior consultant.
    Interior,
    /// Business consultant.
    Business,
    /// Carpenter or furniture maker.
    Carpenter,
}

impl VendorRole {
    /// Every role, in display order.
    pub const ALL: [Self; 4] = [Self::Vastu, Self::Interior, Self::Business, Self::Carpenter];

    /// Wire values accepted by the schema.
    pub const VALUES: &'static [&'static str] = &["vastu", "interior", "business", "carpenter"];

    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vastu => "vastu",
            Self::Interior => "interior",
            Self::Business => "business",
            Self::Carpenter => "carpenter",
        }
    }

    /// Display text shown in the role picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vastu => "Vastu Consultant",
            Self::Interior => "Interior Consultant",
            Self::Business => "Business Consultant",
            Self::Carpenter => "Carpenter/Furniture Maker",
        }
    }
}

impl FromStr for VendorRole {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ParseError::UnknownVariant {
                kind: "role",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for VendorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// User Waitlist
// ============================================================================

/// A user waitlist candidate that passed the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserWaitlistEntry {
    /// Full name.
    pub name: String,
    /// Email address.
    pub contact: String,
    /// Plan of interest.
    pub preferred_plan: PreferredPlan,
    /// Free-form location.
    pub location: String,
    /// Why the user wants the platform.
    pub reason: String,
}

/// A persisted user waitlist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWaitlistEntry {
    /// Identity token.
    pub id: UserWaitlistId,
    /// Full name.
    pub name: String,
    /// Email address.
    pub contact: String,
    /// Plan of interest.
    pub preferred_plan: PreferredPlan,
    /// Free-form location.
    pub location: String,
    /// Why the user wants the platform.
    pub reason: String,
    /// When the store accepted the entry.
    pub created_at: DateTime<Utc>,
}

impl UserWaitlistEntry {
    /// Attach identity and creation time to an accepted candidate.
    #[must_use]
    pub fn new(id: UserWaitlistId, candidate: NewUserWaitlistEntry, created_at: DateTime<Utc>) -> Self {
        let NewUserWaitlistEntry {
            name,
            contact,
            preferred_plan,
            location,
            reason,
        } = candidate;

        Self {
            id,
            name,
            contact,
            preferred_plan,
            location,
            reason,
            created_at,
        }
    }
}

// ============================================================================
// Vendor Waitlist
// ============================================================================

/// A vendor waitlist candidate that passed the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVendorWaitlistEntry {
    /// Full name.
    pub name: String,
    /// Email address.
    pub contact: String,
    /// Professional category.
    pub role: VendorRole,
    /// Link to past work, `None` when not provided.
    pub portfolio_link: Option<String>,
    /// Background and experience.
    pub experience: String,
    /// Free-form location.
    pub location: String,
}

/// A persisted vendor waitlist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorWaitlistEntry {
    /// Identity token.
    pub id: VendorWaitlistId,
    /// Full name.
    pub name: String,
    /// Email address.
    pub contact: String,
    /// Professional category.
    pub role: VendorRole,
    /// Link to past work; serialized as `null` when not provided.
    pub portfolio_link: Option<String>,
    /// Background and experience.
    pub experience: String,
    /// Free-form location.
    pub location: String,
    /// When the store accepted the entry.
    pub created_at: DateTime<Utc>,
}

impl VendorWaitlistEntry {
    /// Attach identity and creation time to an accepted candidate.
    #[must_use]
    pub fn new(
        id: VendorWaitlistId,
        candidate: NewVendorWaitlistEntry,
        created_at: DateTime<Utc>,
    ) -> Self {
        let NewVendorWaitlistEntry {
            name,
            contact,
            role,
            portfolio_link,
            experience,
            location,
        } = candidate;

        Self {
            id,
            name,
            contact,
            role,
            portfolio_link,
            experience,
            location,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_values_match_variants() {
        let plans: Vec<_> = PreferredPlan::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(plans, PreferredPlan::VALUES);

        let roles: Vec<_> = VendorRole::ALL.iter().map(|r| r.as_str()).collect();
        assert_eq!(roles, VendorRole::VALUES);
    }

    #[test]
    fn role_parses_and_labels() {
        let role: VendorRole = "carpenter".parse().unwrap();
        assert_eq!(role, VendorRole::Carpenter);
        assert_eq!(role.label(), "Carpenter/Furniture Maker");
        assert!("plumber".parse::<VendorRole>().is_err());
    }

    #[test]
    fn entry_serializes_camel_case() {
        let candidate = NewUserWaitlistEntry {
            name: "Asha".into(),
            contact: "asha@example.com".into(),
            preferred_plan: PreferredPlan::Premium,
            location: "Pune".into(),
            reason: "Looking for a smarter way to manage my apartment.".into(),
        };
        let entry = UserWaitlistEntry::new(UserWaitlistId::generate(), candidate, Utc::now());
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["preferredPlan"], "premium");
        assert!(json["createdAt"].is_string());
        assert_eq!(json["id"], entry.id.to_string());
    }

    #[test]
    fn vendor_without_link_serializes_null() {
        let candidate = NewVendorWaitlistEntry {
            name: "Ravi".into(),
            contact: "ravi@example.com".into(),
            role: VendorRole::Interior,
            portfolio_link: None,
            experience: "Twelve years designing compact homes.".into(),
            location: "Mumbai".into(),
        };
        let entry = VendorWaitlistEntry::new(VendorWaitlistId::generate(), candidate, Utc::now());
        let json = serde_json::to_value(&entry).unwrap();

        assert!(json["portfolioLink"].is_null());
        assert_eq!(json["role"], "interior");
    }
}
