//! Action traits shared by every descriptor type

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to a store
///
/// Actions describe intended or completed state transitions. They should be:
/// - Clone: Actions may be logged, replayed, or sent to multiple handlers
/// - Debug: For debugging and logging
/// - Send + 'static: For async dispatch across threads
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}

/// Grouping of related actions
///
/// Intent actions and the result actions they produce share a category,
/// so consumers can route a whole request/response family at once.
pub trait ActionCategory: Action {
    /// Enum listing every category of this action type
    type Category: Copy + Eq + Debug;

    /// Category name, or `None` for uncategorized actions
    fn category(&self) -> Option<&'static str>;

    /// Category as an enum value
    fn category_enum(&self) -> Self::Category;

    /// Whether this action carries the outcome of async work
    fn is_async_result(&self) -> bool {
        false
    }
}

/// Human-readable summary used by the action log
///
/// The default is the `Debug` output. Override it for actions with large
/// payloads so log lines stay short.
pub trait ActionSummary: Action {
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    enum Ping {
        Sent(u32),
    }

    impl Action for Ping {
        fn name(&self) -> &'static str {
            "Ping"
        }
    }

    impl ActionSummary for Ping {}

    #[test]
    fn test_default_summary_is_debug() {
        assert_eq!(Ping::Sent(3).summary(), "Sent(3)");
        assert_eq!(Ping::Sent(3).name(), "Ping");
    }
}
