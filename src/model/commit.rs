//! Commit data model

use crate::jj::template::FIELD_SEPARATOR;

/// One revision from the repository log
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Commit {
    /// Short change ID (at least 4 characters)
    pub id: String,

    /// Author email (may be empty)
    pub author: String,

    /// Committer date, display-only (may be empty)
    pub date: String,

    /// Description (may be empty)
    pub message: String,

    /// Is this the current working-copy revision?
    pub is_working: bool,

    /// Is this revision immutable?
    pub is_immutable: bool,

    /// Bookmark names pointing at this revision, in log order
    pub branches: Vec<String>,
}

/// Placeholder shown for commits without a description
pub const NO_DESCRIPTION: &str = "(no description)";

/// Placeholder for empty author/date in the detail panel
pub const UNKNOWN: &str = "Unknown";

impl Commit {
    /// Get a display string for the description
    pub fn display_message(&self) -> &str {
        if self.message.is_empty() {
            NO_DESCRIPTION
        } else {
            &self.message
        }
    }

    /// Author as shown in the detail panel
    pub fn detail_author(&self) -> &str {
        if self.author.is_empty() {
            UNKNOWN
        } else {
            &self.author
        }
    }

    /// Date as shown in the detail panel
    pub fn detail_date(&self) -> &str {
        if self.date.is_empty() { UNKNOWN } else { &self.date }
    }

    /// Serialize back into a single log line
    ///
    /// Format: `CHANGE_ID|BOOKMARKS|AUTHOR|DATE|DESCRIPTION|IS_WORKING|IS_IMMUTABLE`
    pub fn to_log_line(&self) -> String {
        let sep = FIELD_SEPARATOR.to_string();
        [
            self.id.as_str(),
            &self.branches.join(" "),
            &self.author,
            &self.date,
            &self.message,
            if self.is_working { "working" } else { "" },
            if self.is_immutable { "immutable" } else { "" },
        ]
        .join(&sep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_commit() -> Commit {
        Commit {
            id: "qpvuntsm".to_string(),
            author: "user@example.com".to_string(),
            date: "2025-01-30".to_string(),
            message: "Initial commit".to_string(),
            is_working: true,
            is_immutable: false,
            branches: vec!["main".to_string(), "feature-test".to_string()],
        }
    }

    #[test]
    fn test_display_message() {
        let commit = sample_commit();
        assert_eq!(commit.display_message(), "Initial commit");

        let empty = Commit {
            message: String::new(),
            ..sample_commit()
        };
        assert_eq!(empty.display_message(), "(no description)");
    }

    #[test]
    fn test_detail_fields_substitute_unknown() {
        let commit = Commit {
            author: String::new(),
            date: String::new(),
            ..sample_commit()
        };
        assert_eq!(commit.detail_author(), "Unknown");
        assert_eq!(commit.detail_date(), "Unknown");
        // List display keeps the raw values
        assert_eq!(commit.author, "");
    }

    #[test]
    fn test_to_log_line() {
        assert_eq!(
            sample_commit().to_log_line(),
            "qpvuntsm|main feature-test|user@example.com|2025-01-30|Initial commit|working|"
        );
    }

    #[test]
    fn test_to_log_line_immutable_without_branches() {
        let commit = Commit {
            id: "zzzzzzzz".to_string(),
            message: "Root commit".to_string(),
            is_working: false,
            is_immutable: true,
            branches: vec![],
            ..sample_commit()
        };
        assert_eq!(
            commit.to_log_line(),
            "zzzzzzzz||user@example.com|2025-01-30|Root commit||immutable"
        );
    }
}
