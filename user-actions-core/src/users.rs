//! Action descriptors for loading the users list
//!
//! Loading users follows the two-phase action pattern:
//!
//! 1. **Intent**: [`request_load`] asks for a users listing with some query
//!    parameters (`LOAD_USERS`).
//! 2. **Result**: [`report_load_success`] or [`report_load_error`] carries the
//!    outcome back (`LOAD_USERS_SUCCESS` / `LOAD_USERS_ERROR`).
//!
//! On the wire every descriptor is a two-field object: the `type` identifier
//! plus exactly one payload field.
//!
//! ```
//! use serde_json::json;
//! use user_actions_core::users::{request_load, UsersAction};
//!
//! let action: UsersAction = request_load(json!({ "page": 2 }));
//! assert_eq!(
//!     serde_json::to_value(&action).unwrap(),
//!     json!({ "type": "LOAD_USERS", "params": { "page": 2 } })
//! );
//! ```

use std::fmt::{self, Debug};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::action::{Action, ActionCategory, ActionSummary};
use crate::error::UnknownActionType;

/// Type identifier of the load request
pub const LOAD_USERS: &str = "LOAD_USERS";
/// Type identifier of a successful load
pub const LOAD_USERS_SUCCESS: &str = "LOAD_USERS_SUCCESS";
/// Type identifier of a failed load
pub const LOAD_USERS_ERROR: &str = "LOAD_USERS_ERROR";

/// Category shared by all users loading actions
pub const LOAD_USERS_CATEGORY: &str = "load_users";

const SUMMARY_PAYLOAD_MAX: usize = 60;

/// The closed set of users action type identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UsersActionType {
    #[serde(rename = "LOAD_USERS")]
    LoadUsers,
    #[serde(rename = "LOAD_USERS_SUCCESS")]
    LoadUsersSuccess,
    #[serde(rename = "LOAD_USERS_ERROR")]
    LoadUsersError,
}

impl UsersActionType {
    /// Get all type identifiers
    pub fn all() -> &'static [Self] {
        &[Self::LoadUsers, Self::LoadUsersSuccess, Self::LoadUsersError]
    }

    /// The identifier string consumers dispatch on
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoadUsers => LOAD_USERS,
            Self::LoadUsersSuccess => LOAD_USERS_SUCCESS,
            Self::LoadUsersError => LOAD_USERS_ERROR,
        }
    }
}

impl fmt::Display for UsersActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UsersActionType {
    type Err = UnknownActionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| UnknownActionType(s.to_string()))
    }
}

/// Categories of [`UsersAction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsersActionCategory {
    LoadUsers,
}

impl UsersActionCategory {
    /// Get category name as string
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadUsers => LOAD_USERS_CATEGORY,
        }
    }
}

/// A users loading action descriptor
///
/// The variant is the `type` tag and fixes which payload field is present.
/// Payloads default to [`serde_json::Value`] so any caller-defined shape
/// passes through untouched; plug in typed payloads such as
/// [`UserListQuery`](crate::query::UserListQuery) and
/// [`UserRecord`](crate::record::UserRecord) when the shapes are known.
///
/// Deserialization rejects any field besides `type` and the variant's
/// payload field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", deny_unknown_fields)]
pub enum UsersAction<P = Value, U = Value, E = Value> {
    /// Intent: load users matching `params`
    #[serde(rename = "LOAD_USERS")]
    LoadUsers { params: P },

    /// Result: users loaded
    #[serde(rename = "LOAD_USERS_SUCCESS")]
    LoadUsersSuccess { users: U },

    /// Result: loading failed with `error`
    #[serde(rename = "LOAD_USERS_ERROR")]
    LoadUsersError { error: E },
}

/// Create a `LOAD_USERS` descriptor carrying `params` unchanged.
pub fn request_load<P, U, E>(params: P) -> UsersAction<P, U, E> {
    tracing::trace!(action = LOAD_USERS, "created action");
    UsersAction::LoadUsers { params }
}

/// Create a `LOAD_USERS_SUCCESS` descriptor carrying `users` unchanged.
pub fn report_load_success<P, U, E>(users: U) -> UsersAction<P, U, E> {
    tracing::trace!(action = LOAD_USERS_SUCCESS, "created action");
    UsersAction::LoadUsersSuccess { users }
}

/// Create a `LOAD_USERS_ERROR` descriptor carrying `error` unchanged.
///
/// The error is a failure reported by whoever attempted the load; creating
/// the descriptor itself cannot fail.
pub fn report_load_error<P, U, E>(error: E) -> UsersAction<P, U, E> {
    tracing::trace!(action = LOAD_USERS_ERROR, "created action");
    UsersAction::LoadUsersError { error }
}

impl<P, U, E> UsersAction<P, U, E> {
    /// The `type` identifier of this descriptor
    pub fn action_type(&self) -> UsersActionType {
        match self {
            Self::LoadUsers { .. } => UsersActionType::LoadUsers,
            Self::LoadUsersSuccess { .. } => UsersActionType::LoadUsersSuccess,
            Self::LoadUsersError { .. } => UsersActionType::LoadUsersError,
        }
    }

    /// Query parameters of a `LOAD_USERS` request
    pub fn params(&self) -> Option<&P> {
        match self {
            Self::LoadUsers { params } => Some(params),
            _ => None,
        }
    }

    /// Users carried by a `LOAD_USERS_SUCCESS` report
    pub fn users(&self) -> Option<&U> {
        match self {
            Self::LoadUsersSuccess { users } => Some(users),
            _ => None,
        }
    }

    /// Failure carried by a `LOAD_USERS_ERROR` report
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::LoadUsersError { error } => Some(error),
            _ => None,
        }
    }

    /// Whether this is the load request
    pub fn is_request(&self) -> bool {
        matches!(self, Self::LoadUsers { .. })
    }

    /// Whether this reports a successful load
    pub fn is_success(&self) -> bool {
        matches!(self, Self::LoadUsersSuccess { .. })
    }

    /// Whether this reports a failed load
    pub fn is_error(&self) -> bool {
        matches!(self, Self::LoadUsersError { .. })
    }
}

impl<P, U, E> Action for UsersAction<P, U, E>
where
    P: Clone + Debug + Send + 'static,
    U: Clone + Debug + Send + 'static,
    E: Clone + Debug + Send + 'static,
{
    fn name(&self) -> &'static str {
        self.action_type().as_str()
    }
}

impl<P, U, E> ActionCategory for UsersAction<P, U, E>
where
    P: Clone + Debug + Send + 'static,
    U: Clone + Debug + Send + 'static,
    E: Clone + Debug + Send + 'static,
{
    type Category = UsersActionCategory;

    fn category(&self) -> Option<&'static str> {
        Some(LOAD_USERS_CATEGORY)
    }

    fn category_enum(&self) -> Self::Category {
        UsersActionCategory::LoadUsers
    }

    fn is_async_result(&self) -> bool {
        !self.is_request()
    }
}

/// Shows the type identifier with a truncated payload instead of the full
/// `Debug` output, since users listings can be large.
impl<P, U, E> ActionSummary for UsersAction<P, U, E>
where
    P: Clone + Debug + Send + 'static,
    U: Clone + Debug + Send + 'static,
    E: Clone + Debug + Send + 'static,
{
    fn summary(&self) -> String {
        let (field, payload) = match self {
            Self::LoadUsers { params } => ("params", format!("{:?}", params)),
            Self::LoadUsersSuccess { users } => ("users", format!("{:?}", users)),
            Self::LoadUsersError { error } => ("error", format!("{:?}", error)),
        };
        format!("{} {{ {}: {} }}", self.name(), field, truncate(&payload))
    }
}

fn truncate(s: &str) -> String {
    if s.chars().count() > SUMMARY_PAYLOAD_MAX {
        let head: String = s.chars().take(SUMMARY_PAYLOAD_MAX - 3).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_identifiers_distinct() {
        let all = UsersActionType::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn test_type_identifier_parse() {
        assert_eq!(
            "LOAD_USERS_ERROR".parse::<UsersActionType>(),
            Ok(UsersActionType::LoadUsersError)
        );
        assert_eq!(
            "load_users".parse::<UsersActionType>(),
            Err(UnknownActionType("load_users".to_string()))
        );
        assert_eq!(UsersActionType::LoadUsersSuccess.to_string(), LOAD_USERS_SUCCESS);
    }

    #[test]
    fn test_type_identifier_serde_matches_constants() {
        for ty in UsersActionType::all() {
            assert_eq!(serde_json::to_value(ty).unwrap(), json!(ty.as_str()));
        }
    }

    #[test]
    fn test_type_identifier_from_json() {
        let parsed: Vec<UsersActionType> =
            serde_json::from_value(json!(["LOAD_USERS", "LOAD_USERS_SUCCESS", "LOAD_USERS_ERROR"]))
                .unwrap();
        assert_eq!(parsed, UsersActionType::all());

        assert!(serde_json::from_value::<UsersActionType>(json!("LOAD_USER")).is_err());
    }

    #[test]
    fn test_payload_fields_do_not_mix() {
        let action = serde_json::from_value::<UsersAction>(
            json!({ "type": "LOAD_USERS_SUCCESS", "users": [], "params": {} }),
        );
        assert!(action.is_err());
    }

    #[test]
    fn test_factories_pick_variant() {
        let action: UsersAction = request_load(json!({ "page": 2 }));
        assert_eq!(action.action_type(), UsersActionType::LoadUsers);
        assert_eq!(action.params(), Some(&json!({ "page": 2 })));
        assert_eq!(action.users(), None);

        let action: UsersAction = report_load_success(json!([]));
        assert!(action.is_success());
        assert_eq!(action.users(), Some(&json!([])));

        let action: UsersAction = report_load_error(json!("boom"));
        assert!(action.is_error());
        assert_eq!(action.error(), Some(&json!("boom")));
        assert_eq!(action.params(), None);
    }

    #[test]
    fn test_name_is_type_identifier() {
        let action: UsersAction = report_load_error(json!("boom"));
        assert_eq!(action.name(), LOAD_USERS_ERROR);
    }

    #[test]
    fn test_category() {
        let request: UsersAction = request_load(Value::Null);
        let failed: UsersAction = report_load_error(Value::Null);

        assert_eq!(request.category(), Some("load_users"));
        assert_eq!(failed.category_enum(), UsersActionCategory::LoadUsers);
        assert!(!request.is_async_result());
        assert!(failed.is_async_result());
        assert_eq!(UsersActionCategory::LoadUsers.name(), LOAD_USERS_CATEGORY);
    }

    #[test]
    fn test_summary_truncates_large_payloads() {
        let action: UsersAction<(), Vec<u32>, ()> = report_load_success((0..100).collect());
        let summary = action.summary();
        assert!(summary.starts_with("LOAD_USERS_SUCCESS { users: [0, 1, 2"));
        assert!(summary.ends_with("... }"));

        let action: UsersAction<(), (), &'static str> = report_load_error("timeout");
        assert_eq!(action.summary(), "LOAD_USERS_ERROR { error: \"timeout\" }");
    }
}
