//! jj template definitions for stable output parsing
//!
//! These templates ensure consistent, parseable output from jj commands
//! regardless of user configuration.

/// Separator used between fields in template output
pub const FIELD_SEPARATOR: char = '|';

/// Templates for jj commands
pub struct Templates;

impl Templates {
    /// Template for `jj log` output
    ///
    /// Fields (separated by `|`):
    /// 1. change_id (shortest unique prefix, at least 8 chars)
    /// 2. bookmarks (space-separated)
    /// 3. author email
    /// 4. committer date (`%Y-%m-%d`)
    /// 5. description (first line)
    /// 6. "working" for the working-copy revision, empty otherwise
    /// 7. "immutable" for immutable revisions, empty otherwise
    pub fn log() -> &'static str {
        concat!(
            "concat(",
            "change_id.shortest(8), \"|\", ",
            "bookmarks.map(|b| b.name()).join(\" \"), \"|\", ",
            "author.email(), \"|\", ",
            "committer.timestamp().format(\"%Y-%m-%d\"), \"|\", ",
            "description.first_line(), \"|\", ",
            "if(self.current_working_copy(), \"working\", \"\"), \"|\", ",
            "if(immutable, \"immutable\", \"\"), ",
            "\"\\n\"",
            ")"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_template_is_valid() {
        let template = Templates::log();
        assert!(template.starts_with("concat("));
        assert!(template.ends_with(')'));
        assert!(template.contains("change_id.shortest(8)"));
        assert!(template.contains("\\n"));
    }

    #[test]
    fn test_log_template_has_seven_fields() {
        let separators = Templates::log().matches("\"|\"").count();
        assert_eq!(separators, 6);
    }

    #[test]
    fn test_log_template_flag_literals() {
        let template = Templates::log();
        assert!(template.contains("\"working\""));
        assert!(template.contains("\"immutable\""));
    }
}
