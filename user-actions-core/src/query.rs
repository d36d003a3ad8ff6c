//! Typed query parameters for `LOAD_USERS` requests
//!
//! A listing can be sorted by one field. The sort is written as the field
//! name, with a single leading `-` for descending order:
//!
//! ```
//! use user_actions_core::query::{UserSort, UserSortField};
//!
//! let sort: UserSort = "-created".parse().unwrap();
//! assert_eq!(sort.field, UserSortField::Created);
//! assert!(sort.descending);
//! assert_eq!(sort.to_string(), "-created");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::record::UserRecord;

/// Fields a users listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserSortField {
    Created,
    Email,
    LastLogin,
    Name,
    Username,
}

impl UserSortField {
    pub fn all() -> &'static [Self] {
        &[
            Self::Created,
            Self::Email,
            Self::LastLogin,
            Self::Name,
            Self::Username,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Email => "email",
            Self::LastLogin => "last_login",
            Self::Name => "name",
            Self::Username => "username",
        }
    }

    fn key<'a>(&self, record: &'a UserRecord) -> &'a str {
        match self {
            Self::Created => &record.creation_date,
            Self::Email => &record.email,
            Self::LastLogin => &record.last_login,
            Self::Name => &record.name,
            Self::Username => &record.username,
        }
    }
}

impl FromStr for UserSortField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(QueryError::EmptySortField);
        }
        Self::all()
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| QueryError::UnknownSortField(s.to_string()))
    }
}

/// Sort order of a users listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserSort {
    pub field: UserSortField,
    pub descending: bool,
}

impl UserSort {
    pub fn ascending(field: UserSortField) -> Self {
        Self {
            field,
            descending: false,
        }
    }

    pub fn descending(field: UserSortField) -> Self {
        Self {
            field,
            descending: true,
        }
    }

    /// Compare two records under this sort order
    pub fn compare(&self, a: &UserRecord, b: &UserRecord) -> Ordering {
        let ordering = self.field.key(a).cmp(self.field.key(b));
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

impl FromStr for UserSort {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('-') {
            Some(field) => Ok(Self::descending(field.parse()?)),
            None => Ok(Self::ascending(s.parse()?)),
        }
    }
}

impl fmt::Display for UserSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            f.write_str("-")?;
        }
        f.write_str(self.field.as_str())
    }
}

impl TryFrom<String> for UserSort {
    type Error = QueryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UserSort> for String {
    fn from(sort: UserSort) -> Self {
        sort.to_string()
    }
}

/// Sort records in place. Records with equal keys keep their relative order.
pub fn sort_users(users: &mut [UserRecord], sort: &UserSort) {
    users.sort_by(|a, b| sort.compare(a, b));
}

/// Parameters of a users listing request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<UserSort>,
}

impl UserListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sorted_by(mut self, sort: UserSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Build from decoded query-string pairs. Only `sort` is recognized;
    /// other keys are ignored.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut query = Self::new();
        for (key, value) in pairs {
            if key == "sort" {
                query.sort = Some(value.parse()?);
            }
        }
        Ok(query)
    }
}
