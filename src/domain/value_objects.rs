//! Self-validating wrappers around the primitive fields of boards, lists and cards.
//!
//! Every constructor either returns a valid value or a [`ValidationError`];
//! once built, a value object never changes.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SubsecRound, Utc};
use uuid::Uuid;

use super::ValidationError;

// =============================================================================
// Identifiers
// =============================================================================

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident => $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing id. Empty or whitespace-only ids are rejected.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(ValidationError::Required { field: $field });
                }
                Ok(Self(value))
            }

            /// Generate a fresh random id.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

entity_id!(
    /// Identity of a board.
    BoardId => "Board id"
);
entity_id!(
    /// Identity of a list.
    ListId => "List id"
);
entity_id!(
    /// Identity of a card.
    CardId => "Card id"
);

// =============================================================================
// Titles and descriptions
// =============================================================================

macro_rules! title {
    ($(#[$meta:meta])* $name:ident => $field:literal, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub const MAX_LEN: usize = $max;

            /// Trim and validate a title.
            pub fn new(value: &str) -> Result<Self, ValidationError> {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::Required { field: $field });
                }
                if trimmed.chars().count() > Self::MAX_LEN {
                    return Err(ValidationError::TooLong {
                        field: $field,
                        max: Self::MAX_LEN,
                    });
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

macro_rules! description {
    ($(#[$meta:meta])* $name:ident => $field:literal, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Default)]
        pub struct $name(String);

        impl $name {
            pub const MAX_LEN: usize = $max;

            /// Validate a description. The length limit applies to the raw
            /// input; the stored value is trimmed and absent input is empty.
            pub fn new(value: Option<&str>) -> Result<Self, ValidationError> {
                let raw = value.unwrap_or_default();
                if raw.chars().count() > Self::MAX_LEN {
                    return Err(ValidationError::TooLong {
                        field: $field,
                        max: Self::MAX_LEN,
                    });
                }
                Ok(Self(raw.trim().to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

title!(
    /// Board title: 1 to 100 characters after trimming.
    BoardTitle => "Board title", 100
);
title!(
    /// List title: 1 to 100 characters after trimming.
    ListTitle => "List title", 100
);
title!(
    /// Card title: 1 to 200 characters after trimming.
    CardTitle => "Card title", 200
);
description!(
    /// Board description, at most 500 characters.
    BoardDescription => "Board description", 500
);
description!(
    /// Card description, at most 2000 characters.
    CardDescription => "Card description", 2000
);

// =============================================================================
// Positions
// =============================================================================

macro_rules! position {
    ($(#[$meta:meta])* $name:ident => $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(i64);

        impl $name {
            pub fn new(value: i64) -> Result<Self, ValidationError> {
                if value < 0 {
                    return Err(ValidationError::Negative {
                        field: $field,
                        value,
                    });
                }
                Ok(Self(value))
            }

            pub const fn zero() -> Self {
                Self(0)
            }

            pub const fn value(&self) -> i64 {
                self.0
            }

            pub const fn next(&self) -> Self {
                Self(self.0 + 1)
            }

            /// The preceding position, clamped at zero.
            pub const fn previous(&self) -> Self {
                Self(if self.0 > 0 { self.0 - 1 } else { 0 })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

position!(
    /// Ordering key of a list within its board.
    ListPosition => "List position"
);
position!(
    /// Ordering key of a card within its list.
    CardPosition => "Card position"
);

// =============================================================================
// Board background color
// =============================================================================

/// Hex color code (`#RRGGBB`) painted behind a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardBackgroundColor(String);

impl BoardBackgroundColor {
    pub const DEFAULT: &'static str = "#0079bf";

    /// Validate a color. Absent or empty input yields [`Self::DEFAULT`].
    pub fn new(value: Option<&str>) -> Result<Self, ValidationError> {
        let color = value.filter(|v| !v.is_empty()).unwrap_or(Self::DEFAULT);
        if !is_hex_color(color) {
            return Err(ValidationError::InvalidColor {
                value: color.to_string(),
            });
        }
        Ok(Self(color.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BoardBackgroundColor {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for BoardBackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

// =============================================================================
// Card due date
// =============================================================================

/// Optional deadline of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardDueDate(Option<DateTime<Utc>>);

impl CardDueDate {
    pub const fn none() -> Self {
        Self(None)
    }

    pub const fn from_datetime(value: Option<DateTime<Utc>>) -> Self {
        Self(value)
    }

    /// Parse an RFC 3339 date-time, a zone-less `YYYY-MM-DDTHH:MM:SS` (read
    /// as UTC) or a plain `YYYY-MM-DD` date (midnight UTC).
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let value = value.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self(Some(dt.with_timezone(&Utc).trunc_subsecs(6))));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Self(Some(naive.and_utc().trunc_subsecs(6))));
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self(Some(naive.and_utc())))
            .ok_or_else(|| ValidationError::InvalidDate {
                value: value.to_string(),
            })
    }

    pub const fn value(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    pub const fn has_value(&self) -> bool {
        self.0.is_some()
    }

    /// True when a due date is set and lies strictly before `now`.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.0.is_some_and(|due| due < now)
    }
}

impl fmt::Display for CardDueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(due) => f.write_str(&due.to_rfc3339()),
            None => Ok(()),
        }
    }
}
