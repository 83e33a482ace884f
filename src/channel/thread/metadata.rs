use super::AutoArchiveDuration;
use crate::util::Timestamp;
use serde::{Deserialize, Serialize};

/// The thread metadata object contains a number of thread-specific channel
/// fields that are not needed by other channel types.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ThreadMetadata {
    pub archived: bool,
    pub auto_archive_duration: AutoArchiveDuration,
    /// Timestamp when the thread's archive status was last changed.
    pub archive_timestamp: Timestamp,
    /// Only present for threads created after 2022-01-09. `null` is sent by
    /// some older gateway payloads, so the field is tri-state.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::util::double_option"
    )]
    pub create_timestamp: Option<Option<Timestamp>>,
    /// Whether non-moderators can add other non-moderators. Only present on
    /// private threads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invitable: Option<bool>,
    pub locked: bool,
}

#[cfg(test)]
mod tests {
    use super::{AutoArchiveDuration, ThreadMetadata};
    use crate::util::Timestamp;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn thread_metadata() {
        let value = ThreadMetadata {
            archived: true,
            auto_archive_duration: AutoArchiveDuration::Day,
            archive_timestamp: Timestamp::from_str("2021-09-19T14:17:32.000000+00:00").unwrap(),
            create_timestamp: Some(None),
            invitable: Some(false),
            locked: false,
        };

        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(
            json,
            json!({
                "archived": true,
                "auto_archive_duration": 1440,
                "archive_timestamp": "2021-09-19T14:17:32.000000+00:00",
                "create_timestamp": null,
                "invitable": false,
                "locked": false,
            })
        );
        assert_eq!(serde_json::from_value::<ThreadMetadata>(json).unwrap(), value);
    }

    #[test]
    fn absent_create_timestamp() {
        let value: ThreadMetadata = serde_json::from_value(json!({
            "archived": false,
            "auto_archive_duration": 60,
            "archive_timestamp": "2021-09-19T14:17:32+00:00",
            "locked": true,
        }))
        .unwrap();

        assert!(value.create_timestamp.is_none());
        assert!(value.invitable.is_none());
    }
}
