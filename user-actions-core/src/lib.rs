//! Core traits and action descriptors for user-actions
//!
//! This crate provides the action descriptors used to load a users listing
//! into a Redux-style store, together with the traits and tooling shared by
//! all descriptor types.
//!
//! # Core Concepts
//!
//! - **Action**: Plain values that describe a state transition
//! - **UsersAction**: The `LOAD_USERS` request and its success/error results
//! - **ActionLog**: Filtered, bounded record of recent actions
//!
//! # Async Handler Pattern
//!
//! Loading users is a two-phase exchange:
//!
//! 1. The intent action [`request_load`] triggers async work in a handler
//! 2. The handler reports back with [`report_load_success`] or [`report_load_error`]
//!
//! ```ignore
//! use tokio::sync::mpsc;
//! use user_actions_core::prelude::*;
//!
//! fn handle_async(action: &UsersAction, tx: mpsc::UnboundedSender<UsersAction>) {
//!     if let Some(params) = action.params() {
//!         let params = params.clone();
//!         tokio::spawn(async move {
//!             let _ = match fetch_users(&params).await {
//!                 Ok(users) => tx.send(report_load_success(users)),
//!                 Err(e) => tx.send(report_load_error(e.to_string().into())),
//!             };
//!         });
//!     }
//! }
//! ```
//!
//! Reducers match on the variants (or on the `type` identifier of the
//! serialized form); the descriptors themselves carry no behavior.

pub mod action;
pub mod error;
pub mod log;
pub mod query;
pub mod record;
pub mod testing;
pub mod users;

// Core trait exports
pub use action::{Action, ActionCategory, ActionSummary};

// Error exports
pub use error::{QueryError, UnknownActionType};

// Users action exports
pub use users::{
    report_load_error, report_load_success, request_load, UsersAction, UsersActionCategory,
    UsersActionType, LOAD_USERS, LOAD_USERS_CATEGORY, LOAD_USERS_ERROR, LOAD_USERS_SUCCESS,
};

// Typed payload exports
pub use query::{sort_users, UserListQuery, UserSort, UserSortField};
pub use record::{SpaceUtilization, UserRecord};

// Logging exports
pub use log::{glob_match, ActionLog, ActionLogConfig, ActionLogEntry, ActionLoggerConfig};

// Testing exports
pub use testing::ActionRecorder;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionCategory, ActionSummary};
    pub use crate::log::{ActionLog, ActionLogConfig, ActionLoggerConfig};
    pub use crate::query::{UserListQuery, UserSort, UserSortField};
    pub use crate::record::{SpaceUtilization, UserRecord};
    pub use crate::users::{
        report_load_error, report_load_success, request_load, UsersAction, UsersActionType,
    };
}
