//! Typed user records for `LOAD_USERS_SUCCESS` payloads

use serde::{Deserialize, Serialize};

/// Storage quota of a user, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpaceUtilization {
    pub total: u64,
    pub used: u64,
    pub available: u64,
}

impl SpaceUtilization {
    /// Build from the allotment and current usage. `available` never underflows.
    pub fn new(total: u64, used: u64) -> Self {
        Self {
            total,
            used,
            available: total.saturating_sub(used),
        }
    }
}

/// One entry of a users listing
///
/// Dates are kept as the listing's `YYYY-MM-DD HH:MM:SS.ffffff` strings,
/// which order correctly as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    #[serde(rename = "email_addr")]
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub name: String,
    pub creation_date: String,
    pub last_login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_utilization: Option<SpaceUtilization>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_space_utilization() {
        assert_eq!(SpaceUtilization::new(10, 3).available, 7);
        assert_eq!(SpaceUtilization::new(3, 10).available, 0);
    }

    #[test]
    fn test_record_from_listing_json() {
        let record: UserRecord = serde_json::from_value(json!({
            "username": "alice",
            "email_addr": "alice@example.com",
            "role": "admin",
            "creation_date": "2018-01-02 03:04:05.000006",
            "last_login": "2018-02-01 00:00:00.000000",
            "space_utilization": { "total": 100, "used": 40, "available": 60 }
        }))
        .unwrap();

        assert_eq!(record.email, "alice@example.com");
        assert_eq!(record.name, "");
        assert_eq!(record.space_utilization, Some(SpaceUtilization::new(100, 40)));
    }
}
