//! Test utilities for code that emits actions
//!
//! - [`ActionRecorder`]: captures actions sent by handlers under test
//! - [`assert_emitted!`](crate::assert_emitted), [`find_emitted!`](crate::find_emitted)
//!   and [`assert_category_emitted!`](crate::assert_category_emitted) for
//!   checking what was captured
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use user_actions_core::testing::ActionRecorder;
//! use user_actions_core::users::{report_load_success, request_load, UsersAction};
//! use user_actions_core::assert_emitted;
//!
//! let mut recorder = ActionRecorder::<UsersAction>::new();
//!
//! // A handler would normally hold a clone of the sender
//! let tx = recorder.sender();
//! tx.send(request_load(json!({ "sort": "email" }))).unwrap();
//! tx.send(report_load_success(json!([]))).unwrap();
//!
//! let results = recorder.drain_results();
//! assert_emitted!(results, UsersAction::LoadUsersSuccess { .. });
//!
//! // The request is still queued
//! assert_eq!(recorder.drain_emitted().len(), 1);
//! ```

use tokio::sync::mpsc;

use crate::{Action, ActionCategory};

/// Captures actions emitted through an unbounded channel.
///
/// Hand [`sender`](Self::sender) to the code under test, then drain and
/// assert on what it sent.
pub struct ActionRecorder<A: Action> {
    tx: mpsc::UnboundedSender<A>,
    rx: mpsc::UnboundedReceiver<A>,
}

impl<A: Action> ActionRecorder<A> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    /// Get a clone of the action sender for passing to handlers.
    pub fn sender(&self) -> mpsc::UnboundedSender<A> {
        self.tx.clone()
    }

    /// Emit an action (simulates what a handler would do).
    pub fn emit(&self, action: A) {
        // The recorder owns the receiver, so the channel is never closed here
        let _ = self.tx.send(action);
    }

    /// Drain all emitted actions from the channel.
    pub fn drain_emitted(&mut self) -> Vec<A> {
        let mut actions = Vec::new();
        while let Ok(action) = self.rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// Check if any actions were emitted. Drains the channel.
    pub fn has_emitted(&mut self) -> bool {
        !self.drain_emitted().is_empty()
    }

    /// Drain the actions matching `keep`; the rest stay queued in order.
    fn drain_where(&mut self, keep: impl Fn(&A) -> bool) -> Vec<A> {
        let (matching, rest): (Vec<A>, Vec<A>) =
            self.drain_emitted().into_iter().partition(|action| keep(action));

        for action in rest {
            self.emit(action);
        }

        matching
    }
}

impl<A: Action> Default for ActionRecorder<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ActionCategory> ActionRecorder<A> {
    /// Drain the actions of one category, leaving the others queued.
    pub fn drain_category(&mut self, category: &str) -> Vec<A> {
        self.drain_where(|action| action.category() == Some(category))
    }

    /// Check if any action of the given category was emitted.
    ///
    /// This drains only the matching category.
    pub fn has_category(&mut self, category: &str) -> bool {
        !self.drain_category(category).is_empty()
    }

    /// Drain the result actions (success/error reports), leaving intents queued.
    ///
    /// Handlers under test usually emit results only; a leftover intent in
    /// the queue means the handler re-requested.
    pub fn drain_results(&mut self) -> Vec<A> {
        self.drain_where(|action| action.is_async_result())
    }
}

/// Names of captured actions, used in assertion failure messages.
#[doc(hidden)]
pub fn emitted_names<A: Action>(actions: &[A]) -> Vec<&'static str> {
    actions.iter().map(Action::name).collect()
}

/// Find the first captured action matching a pattern.
///
/// ```ignore
/// if let Some(UsersAction::LoadUsersError { error }) =
///     find_emitted!(actions, UsersAction::LoadUsersError { .. })
/// {
///     assert_eq!(*error, "network timeout");
/// }
/// ```
#[macro_export]
macro_rules! find_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().find(|a| matches!(a, $pattern $(if $guard)?))
    };
}

/// Assert that a captured action matches a pattern.
///
/// On failure the message lists the names (type identifiers) of everything
/// captured rather than full payloads, which can be large users listings.
///
/// ```ignore
/// assert_emitted!(actions, UsersAction::LoadUsersSuccess { users } if users.len() == 2);
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        if $crate::find_emitted!($actions, $pattern $(if $guard)?).is_none() {
            panic!(
                "no emitted action matches `{}`; emitted: {:?}",
                stringify!($pattern),
                $crate::testing::emitted_names(&$actions)
            );
        }
    };
}

/// Assert that a captured action belongs to a category.
///
/// This requires the action type to implement [`ActionCategory`].
#[macro_export]
macro_rules! assert_category_emitted {
    ($actions:expr, $category:expr) => {
        if !$actions
            .iter()
            .any(|a| $crate::ActionCategory::category(a) == Some($category))
        {
            panic!(
                "no emitted action in category `{}`; emitted: {:?}",
                $category,
                $crate::testing::emitted_names(&$actions)
            );
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::{report_load_error, report_load_success, request_load, UsersAction};
    use serde_json::{json, Value};

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Refresh,
        Select(usize),
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum TestCategory {
        View,
        Uncategorized,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Refresh => "Refresh",
                TestAction::Select(_) => "Select",
            }
        }
    }

    impl ActionCategory for TestAction {
        type Category = TestCategory;

        fn category(&self) -> Option<&'static str> {
            match self {
                TestAction::Select(_) => Some("view"),
                TestAction::Refresh => None,
            }
        }

        fn category_enum(&self) -> Self::Category {
            match self {
                TestAction::Select(_) => TestCategory::View,
                TestAction::Refresh => TestCategory::Uncategorized,
            }
        }
    }

    #[test]
    fn test_recorder_drain() {
        let mut recorder = ActionRecorder::<TestAction>::new();
        recorder.emit(TestAction::Refresh);
        recorder.sender().send(TestAction::Select(2)).unwrap();

        let actions = recorder.drain_emitted();
        assert_eq!(actions, vec![TestAction::Refresh, TestAction::Select(2)]);
        assert!(!recorder.has_emitted());
    }

    #[test]
    fn test_drain_category_keeps_others() {
        let mut recorder = ActionRecorder::<TestAction>::default();
        recorder.emit(TestAction::Select(1));
        recorder.emit(TestAction::Refresh);
        recorder.emit(TestAction::Select(2));

        let view = recorder.drain_category("view");
        assert_eq!(view, vec![TestAction::Select(1), TestAction::Select(2)]);
        assert_eq!(recorder.drain_emitted(), vec![TestAction::Refresh]);
    }

    #[test]
    fn test_drain_results_keeps_requests() {
        let mut recorder = ActionRecorder::<UsersAction>::new();
        recorder.emit(request_load(Value::Null));
        recorder.emit(report_load_error(json!("timeout")));
        recorder.emit(report_load_success(json!([])));

        let results = recorder.drain_results();
        assert_eq!(
            emitted_names(&results),
            ["LOAD_USERS_ERROR", "LOAD_USERS_SUCCESS"]
        );
        assert!(recorder.has_category("load_users"));
        assert!(!recorder.has_emitted());
    }

    #[test]
    fn test_macros() {
        let actions = vec![TestAction::Select(1), TestAction::Select(5), TestAction::Refresh];

        assert_emitted!(actions, TestAction::Select(n) if *n > 3);
        assert_eq!(
            find_emitted!(actions, TestAction::Select(_)),
            Some(&TestAction::Select(1))
        );
        assert_eq!(find_emitted!(actions, TestAction::Select(9)), None);
        assert_category_emitted!(actions, "view");
    }

    #[test]
    #[should_panic(expected = "emitted: [\"LOAD_USERS\"]")]
    fn test_assert_emitted_reports_names() {
        let actions: Vec<UsersAction> = vec![request_load(json!({ "page": 2 }))];
        assert_emitted!(actions, UsersAction::LoadUsersError { .. });
    }

    #[test]
    #[should_panic(expected = "no emitted action in category `search`")]
    fn test_assert_category_emitted_fails() {
        let actions = vec![TestAction::Refresh];
        assert_category_emitted!(actions, "search");
    }
}
