//! user-actions: action descriptors for loading users into a reducer-driven store
//!
//! Each factory returns a fresh two-field descriptor: the `type` identifier
//! and one payload. Reducers and stores live elsewhere and consume these.
//!
//! # Example
//! ```
//! use user_actions::prelude::*;
//!
//! let query = UserListQuery::new().sorted_by("-last_login".parse().unwrap());
//! let action: UsersAction<UserListQuery, Vec<UserRecord>, String> = request_load(query);
//!
//! assert_eq!(action.name(), "LOAD_USERS");
//! assert!(action.params().unwrap().sort.unwrap().descending);
//! ```

// Re-export everything from core
pub use user_actions_core::*;

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use user_actions_core::{Action, ActionCategory, ActionSummary};

    // Descriptors and factories
    pub use user_actions_core::{
        report_load_error, report_load_success, request_load, UsersAction, UsersActionType,
    };

    // Typed payloads
    pub use user_actions_core::{
        sort_users, SpaceUtilization, UserListQuery, UserRecord, UserSort, UserSortField,
    };

    // Logging
    pub use user_actions_core::{ActionLog, ActionLogConfig, ActionLoggerConfig};
}
