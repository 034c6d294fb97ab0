//! Log output parser (jj log)

use tracing::trace;

use super::super::template::FIELD_SEPARATOR;
use crate::model::Commit;

use super::Parser;

/// Number of positional fields in a log line
const LOG_FIELD_COUNT: usize = 7;

/// Shortest change ID accepted as a record
const MIN_ID_LEN: usize = 4;

/// Flag literal marking the working-copy revision
const WORKING_FLAG: &str = "working";

/// Flag literal marking an immutable revision
const IMMUTABLE_FLAG: &str = "immutable";

impl Parser {
    /// Parse `jj log` output into a list of Commits
    ///
    /// Lines that are blank or carry no `|` are not candidates. Candidate
    /// lines that fail validation are dropped: partial output is expected
    /// and never an error.
    pub fn parse_log(output: &str) -> Vec<Commit> {
        output
            .lines()
            .filter(|line| !line.trim().is_empty() && line.contains(FIELD_SEPARATOR))
            .filter_map(Self::parse_log_line)
            .collect()
    }

    /// Parse a single log line
    ///
    /// Format: `CHANGE_ID|BOOKMARKS|AUTHOR|DATE|DESCRIPTION|IS_WORKING|IS_IMMUTABLE`
    pub fn parse_log_line(line: &str) -> Option<Commit> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

        if fields.len() < LOG_FIELD_COUNT {
            trace!(fields = fields.len(), line, "dropping short log line");
            return None;
        }

        let id = fields[0].trim();
        if id.chars().count() < MIN_ID_LEN {
            trace!(line, "dropping log line with invalid change id");
            return None;
        }

        Some(Commit {
            id: id.to_string(),
            branches: Self::parse_branches(fields[1]),
            author: fields[2].trim().to_string(),
            date: fields[3].trim().to_string(),
            message: fields[4].trim().to_string(),
            is_working: fields[5].trim() == WORKING_FLAG,
            is_immutable: fields[6].trim() == IMMUTABLE_FLAG,
        })
    }

    /// Split the space-separated bookmark field
    pub(super) fn parse_branches(field: &str) -> Vec<String> {
        field
            .trim()
            .split(' ')
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}
