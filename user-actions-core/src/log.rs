//! Filtered, bounded log of recently created actions
//!
//! Actions that pass the name filter are emitted through `tracing` and kept
//! in a ring buffer. Each entry remembers whether it was a request or a
//! result, so the latest load outcome can be looked up while debugging.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use user_actions_core::log::{ActionLog, ActionLogConfig, ActionLoggerConfig};
//! use user_actions_core::users::{report_load_error, request_load, UsersAction};
//!
//! // Only keep the result actions
//! let filter = ActionLoggerConfig::new(Some("LOAD_USERS_*"), None);
//! let mut log = ActionLog::new(ActionLogConfig::new(10, filter));
//!
//! let request: UsersAction = request_load(json!({ "sort": "-created" }));
//! let failed: UsersAction = report_load_error(json!("network timeout"));
//! log.log(&request);
//! log.log(&failed);
//!
//! assert_eq!(log.len(), 1);
//! assert_eq!(log.last_result().unwrap().name, "LOAD_USERS_ERROR");
//! ```

use std::collections::VecDeque;

use crate::action::{ActionCategory, ActionSummary};

/// Name filter for the action log.
///
/// Patterns are matched against [`Action::name`](crate::Action::name), which
/// for users actions is the wire identifier. `*` matches any run of
/// characters and `?` exactly one:
///
/// - `LOAD_USERS*` matches every users loading action
/// - `*_ERROR` matches any failure report
#[derive(Debug, Clone, Default)]
pub struct ActionLoggerConfig {
    /// If non-empty, only log actions matching one of these
    pub include_patterns: Vec<String>,
    /// Never log actions matching these (applied after include)
    pub exclude_patterns: Vec<String>,
}

impl ActionLoggerConfig {
    /// Build from comma-separated pattern lists, as passed on a command line
    ///
    /// ```
    /// use user_actions_core::log::ActionLoggerConfig;
    ///
    /// let config = ActionLoggerConfig::new(Some("LOAD_USERS*"), Some("*_SUCCESS"));
    /// assert!(config.should_log("LOAD_USERS"));
    /// assert!(config.should_log("LOAD_USERS_ERROR"));
    /// assert!(!config.should_log("LOAD_USERS_SUCCESS"));
    /// ```
    pub fn new(include: Option<&str>, exclude: Option<&str>) -> Self {
        Self {
            include_patterns: include.map(split_patterns).unwrap_or_default(),
            exclude_patterns: exclude.map(split_patterns).unwrap_or_default(),
        }
    }

    pub fn should_log(&self, action_name: &str) -> bool {
        let included = self.include_patterns.is_empty()
            || self
                .include_patterns
                .iter()
                .any(|p| glob_match(p, action_name));

        included
            && !self
                .exclude_patterns
                .iter()
                .any(|p| glob_match(p, action_name))
    }
}

fn split_patterns(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// One logged action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLogEntry {
    pub name: &'static str,
    pub summary: String,
    /// Whether the action reports the outcome of a request
    pub is_result: bool,
    /// Position in the log, counting evicted entries
    pub sequence: u64,
}

#[derive(Debug, Clone)]
pub struct ActionLogConfig {
    /// Maximum number of entries kept; 0 disables storage but still traces
    pub capacity: usize,
    pub filter: ActionLoggerConfig,
}

impl Default for ActionLogConfig {
    fn default() -> Self {
        Self::new(100, ActionLoggerConfig::default())
    }
}

impl ActionLogConfig {
    pub fn new(capacity: usize, filter: ActionLoggerConfig) -> Self {
        Self { capacity, filter }
    }
}

/// Ring buffer of recent actions, oldest evicted first
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    entries: VecDeque<ActionLogEntry>,
    config: ActionLogConfig,
    next_sequence: u64,
}

impl ActionLog {
    pub fn new(config: ActionLogConfig) -> Self {
        Self {
            entries: VecDeque::with_capacity(config.capacity),
            config,
            next_sequence: 0,
        }
    }

    /// Trace the action and store it, unless the filter rejects its name.
    ///
    /// Returns the stored entry.
    pub fn log<A>(&mut self, action: &A) -> Option<&ActionLogEntry>
    where
        A: ActionSummary + ActionCategory,
    {
        let name = action.name();
        if !self.config.filter.should_log(name) {
            return None;
        }

        let summary = action.summary();
        let is_result = action.is_async_result();
        tracing::debug!(
            action = %name,
            category = action.category().unwrap_or("uncategorized"),
            is_result,
            summary = %summary,
            "action"
        );

        if self.config.capacity == 0 {
            return None;
        }
        if self.entries.len() == self.config.capacity {
            self.entries.pop_front();
        }

        self.entries.push_back(ActionLogEntry {
            name,
            summary,
            is_result,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
        self.entries.back()
    }

    /// All entries, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &ActionLogEntry> {
        self.entries.iter()
    }

    /// The most recent `count` entries, newest first
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &ActionLogEntry> {
        self.entries.iter().rev().take(count)
    }

    /// The newest stored result, i.e. the latest known load outcome
    pub fn last_result(&self) -> Option<&ActionLogEntry> {
        self.entries.iter().rev().find(|entry| entry.is_result)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Glob match supporting `*` (any run, including empty) and `?` (one character).
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    matches_from(&pattern, &text)
}

fn matches_from(pattern: &[char], text: &[char]) -> bool {
    match pattern.split_first() {
        None => text.is_empty(),
        Some((&'*', rest)) => (0..=text.len()).any(|skip| matches_from(rest, &text[skip..])),
        Some((&'?', rest)) => match text.split_first() {
            Some((_, tail)) => matches_from(rest, tail),
            None => false,
        },
        Some((c, rest)) => match text.split_first() {
            Some((t, tail)) => t == c && matches_from(rest, tail),
            None => false,
        },
    }
}
