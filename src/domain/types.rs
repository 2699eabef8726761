//! Strongly-typed value objects used by domain records.
//!
//! These wrappers enforce basic invariants (positive identifiers, trimmed
//! non-empty names) so that once a snapshot is deserialized into the domain
//! layer its values can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(PersonId, "Unique identifier for a unit member.");
id_newtype!(UnitId, "Unique identifier for an organisational unit.");
id_newtype!(ReassignmentId, "Unique identifier for a reassignment event.");
id_newtype!(DocumentId, "Unique identifier for a stored document.");
id_newtype!(UserId, "Unique identifier for a dashboard user account.");
id_newtype!(LeaveId, "Unique identifier for a leave of absence.");

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(
    PersonName,
    "Full name of a unit member enforcing non-empty values."
);

non_empty_string_newtype!(
    IdCardNumber,
    "National identity card number enforcing trimmed, non-empty values."
);

non_empty_string_newtype!(
    UnitName,
    "Organisational unit name enforcing non-empty values."
);

non_empty_string_newtype!(
    DocumentTitle,
    "Document title enforcing trimmed, non-empty values."
);

non_empty_string_newtype!(Username, "Login name of a dashboard user.");

/// Generates a closed enum with string conversions.
///
/// The string form is what query parameters and snapshots carry; for
/// category values it is also what category filters compare against.
macro_rules! closed_enum {
    ($name:ident, $doc:expr, { $($variant:ident => $value:literal),+ $(,)? }) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant in declaration order.
            #[cfg(test)]
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable string form used by filters and the API.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($value => Ok($name::$variant),)+
                    other => Err(TypeConstraintError::InvalidValue(other.to_string())),
                }
            }
        }
    };
}

closed_enum!(PersonStatus, "Service status of a unit member.", {
    Active => "active",
    OnLeave => "on_leave",
    Suspended => "suspended",
    Retired => "retired",
});

closed_enum!(AreaType, "Kind of area a unit or posting belongs to.", {
    Operational => "operational",
    Administrative => "administrative",
});

closed_enum!(DocumentKind, "Classification of an uploaded document.", {
    Resolution => "resolution",
    Memo => "memo",
    Certificate => "certificate",
    Report => "report",
    Other => "other",
});

closed_enum!(UserRole, "Access role of a dashboard user.", {
    Admin => "admin",
    Operator => "operator",
    Viewer => "viewer",
});

closed_enum!(LeaveKind, "Reason class for a leave of absence.", {
    Annual => "annual",
    Medical => "medical",
    Personal => "personal",
    Other => "other",
});

closed_enum!(PersonCategory, "Category dimensions of the personnel table.", {
    Status => "status",
    Area => "area",
});

closed_enum!(ReassignmentCategory, "Category dimensions of the reassignments table.", {
    Area => "area",
});

closed_enum!(DocumentCategory, "Category dimensions of the documents table.", {
    Kind => "kind",
});

closed_enum!(UserCategory, "Category dimensions of the users table.", {
    Role => "role",
});

closed_enum!(LeaveCategory, "Category dimensions of the leaves table.", {
    Kind => "kind",
});

closed_enum!(PersonSortField, "Sortable columns of the personnel table.", {
    Name => "name",
    HiredAt => "hired_at",
    CreatedAt => "created_at",
});

closed_enum!(ReassignmentSortField, "Sortable columns of the reassignments table.", {
    EffectiveDate => "effective_date",
    Person => "person",
});

closed_enum!(DocumentSortField, "Sortable columns of the documents table.", {
    UploadedAt => "uploaded_at",
    Title => "title",
});

closed_enum!(UserSortField, "Sortable columns of the users table.", {
    Username => "username",
    CreatedAt => "created_at",
});

closed_enum!(LeaveSortField, "Sortable columns of the leaves table.", {
    StartDate => "start_date",
    Person => "person",
    Duration => "duration",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_rejects_non_positive_values() {
        assert_eq!(PersonId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(PersonId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(PersonId::new(7).map(PersonId::get), Ok(7));
    }

    #[test]
    fn names_are_trimmed_and_non_empty() {
        assert_eq!(PersonName::new("  Ana Lopez ").unwrap().as_str(), "Ana Lopez");
        assert_eq!(PersonName::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn ids_are_validated_when_deserialized() {
        assert!(serde_json::from_str::<UserId>("5").is_ok());
        assert!(serde_json::from_str::<UserId>("0").is_err());
        assert!(serde_json::from_str::<Username>("\"  \"").is_err());
    }

    #[test]
    fn categories_round_trip_through_strings() {
        for status in PersonStatus::ALL {
            assert_eq!(status.as_str().parse::<PersonStatus>(), Ok(*status));
        }
        assert_eq!(
            "retired ".parse::<PersonStatus>(),
            Ok(PersonStatus::Retired)
        );
        assert!(matches!(
            "unknown".parse::<DocumentKind>(),
            Err(TypeConstraintError::InvalidValue(_))
        ));
        assert_eq!(
            serde_json::to_string(&PersonStatus::OnLeave).unwrap(),
            "\"on_leave\""
        );
    }
}
