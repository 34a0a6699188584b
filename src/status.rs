//! Status interpretation
//!
//! Maps a homework record's status code to the human-readable verdict sent
//! to the chat. The verdict set is closed: anything outside it is an error,
//! never a silently-skipped record.

use serde_json::Value;

use crate::error::{Result, WatchError};

/// Review states the API is known to report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Parse an API status code, `None` for anything outside the known set
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Verdict sentence shown to the recipient
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// An interpreted record: which homework changed and the message to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub name: String,
    pub message: String,
}

/// Interpret a single homework record
///
/// A record must carry a string `status` in the known set and a string
/// `homework_name`. The message wording is fixed; the recipient side
/// depends on it.
pub fn parse_status(homework: &Value) -> Result<StatusUpdate> {
    let code = homework
        .get("status")
        .and_then(Value::as_str)
        .ok_or(WatchError::MissingField("status"))?;
    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(WatchError::MissingField("homework_name"))?;
    let status = HomeworkStatus::parse(code)
        .ok_or_else(|| WatchError::UnknownStatus(code.to_string()))?;

    Ok(StatusUpdate {
        name: name.to_string(),
        message: format!(
            "Изменился статус проверки работы \"{name}\". {}",
            status.verdict()
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(HomeworkStatus::parse("approved"), Some(HomeworkStatus::Approved));
        assert_eq!(HomeworkStatus::parse("reviewing"), Some(HomeworkStatus::Reviewing));
        assert_eq!(HomeworkStatus::parse("rejected"), Some(HomeworkStatus::Rejected));
    }

    #[test]
    fn test_parse_unknown_status() {
        assert_eq!(HomeworkStatus::parse("done"), None);
        assert_eq!(HomeworkStatus::parse(""), None);
        assert_eq!(HomeworkStatus::parse("Approved"), None); // Case matters
    }

    #[test]
    fn test_parse_status_message_format() {
        let record = json!({
            "homework_name": "hw03_final",
            "status": "reviewing"
        });

        let update = parse_status(&record).unwrap();
        assert_eq!(update.name, "hw03_final");
        assert_eq!(
            update.message,
            "Изменился статус проверки работы \"hw03_final\". \
             Работа взята на проверку ревьюером."
        );
    }

    #[test]
    fn test_parse_status_all_verdicts() {
        for (code, verdict) in [
            ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
            ("reviewing", "Работа взята на проверку ревьюером."),
            ("rejected", "Работа проверена: у ревьюера есть замечания."),
        ] {
            let record = json!({ "homework_name": "hw", "status": code });
            let update = parse_status(&record).unwrap();
            assert!(update.message.ends_with(verdict));
        }
    }

    #[test]
    fn test_parse_status_missing_status() {
        let record = json!({ "homework_name": "hw" });
        let err = parse_status(&record).unwrap_err();
        assert!(matches!(err, WatchError::MissingField("status")));
    }

    #[test]
    fn test_parse_status_missing_name() {
        let record = json!({ "status": "approved" });
        let err = parse_status(&record).unwrap_err();
        assert!(matches!(err, WatchError::MissingField("homework_name")));
    }

    #[test]
    fn test_parse_status_non_string_status() {
        let record = json!({ "homework_name": "hw", "status": 42 });
        let err = parse_status(&record).unwrap_err();
        assert!(matches!(err, WatchError::MissingField("status")));
    }

    #[test]
    fn test_parse_status_unknown_code() {
        let record = json!({ "homework_name": "hw", "status": "archived" });
        let err = parse_status(&record).unwrap_err();
        match err {
            WatchError::UnknownStatus(code) => assert_eq!(code, "archived"),
            other => panic!("expected UnknownStatus, got {other:?}"),
        }
    }
}
