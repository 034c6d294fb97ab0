//! Commit row markup

use super::escape_html;
use crate::model::Commit;

const GRAPH_LINE_TOP: &str = r#"<div class="graph-line top"></div>"#;
const GRAPH_LINE_BOTTOM: &str = r#"<div class="graph-line bottom"></div>"#;

/// Node style; working takes precedence over immutable
fn node_class(commit: &Commit) -> &'static str {
    if commit.is_working {
        "node working"
    } else if commit.is_immutable {
        "node immutable"
    } else {
        "node"
    }
}

fn message_class(commit: &Commit) -> &'static str {
    if commit.message.is_empty() {
        "commit-message empty"
    } else {
        "commit-message"
    }
}

/// One tagged element per bookmark, joined by a single space
pub fn build_branch_tags(branches: &[String]) -> String {
    branches
        .iter()
        .map(|b| format!(r#"<span class="commit-branch">{}</span>"#, escape_html(b)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the row for `commit` at `index` of `total` displayed rows
pub fn build_commit_html(commit: &Commit, index: usize, total: usize) -> String {
    build_commit_row(commit, index, total, false)
}

/// Build a row, optionally carrying the selection mark
///
/// Connectors only reflect the row's position in the rendered list: the
/// first row has no upward line and the last row no downward line.
pub fn build_commit_row(commit: &Commit, index: usize, total: usize, selected: bool) -> String {
    let is_first = index == 0;
    let is_last = index + 1 == total;
    let row_class = if selected {
        "commit-row selected"
    } else {
        "commit-row"
    };
    let id = escape_html(&commit.id);

    format!(
        concat!(
            r#"<div class="{row_class}" data-id="{id}">"#,
            r#"<div class="graph-cell">{top}<div class="{node}"></div>{bottom}</div>"#,
            r#"<span class="commit-id">{id}</span>"#,
            r#"<span class="commit-branches">{branches}</span>"#,
            r#"<span class="{message_class}">{message}</span>"#,
            r#"<span class="commit-author">{author}</span>"#,
            r#"<span class="commit-date">{date}</span>"#,
            "</div>"
        ),
        row_class = row_class,
        id = id,
        top = if is_first { "" } else { GRAPH_LINE_TOP },
        node = node_class(commit),
        bottom = if is_last { "" } else { GRAPH_LINE_BOTTOM },
        branches = build_branch_tags(&commit.branches),
        message_class = message_class(commit),
        message = escape_html(commit.display_message()),
        author = escape_html(&commit.author),
        date = escape_html(&commit.date),
    )
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    fn commit(id: &str, message: &str, branches: &[&str]) -> Commit {
        Commit {
            id: id.to_string(),
            author: "user@example.com".to_string(),
            date: "2025-01-30".to_string(),
            message: message.to_string(),
            branches: branches.iter().map(|b| b.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_single_row_has_no_connectors() {
        let html = build_commit_html(&commit("qpvuntsm", "Initial commit", &[]), 0, 1);
        assert_snapshot!(html, @r#"<div class="commit-row" data-id="qpvuntsm"><div class="graph-cell"><div class="node"></div></div><span class="commit-id">qpvuntsm</span><span class="commit-branches"></span><span class="commit-message">Initial commit</span><span class="commit-author">user@example.com</span><span class="commit-date">2025-01-30</span></div>"#);
    }

    #[test]
    fn test_middle_row_has_both_connectors() {
        let html = build_commit_html(&commit("qpvuntsm", "msg", &[]), 1, 3);
        assert!(html.contains(GRAPH_LINE_TOP));
        assert!(html.contains(GRAPH_LINE_BOTTOM));
    }

    #[test]
    fn test_first_and_last_rows() {
        let c = commit("qpvuntsm", "msg", &[]);
        let first = build_commit_html(&c, 0, 3);
        assert!(!first.contains(GRAPH_LINE_TOP));
        assert!(first.contains(GRAPH_LINE_BOTTOM));

        let last = build_commit_html(&c, 2, 3);
        assert!(last.contains(GRAPH_LINE_TOP));
        assert!(!last.contains(GRAPH_LINE_BOTTOM));
    }

    #[test]
    fn test_working_overrides_immutable() {
        let c = Commit {
            is_working: true,
            is_immutable: true,
            ..commit("qpvuntsm", "msg", &[])
        };
        let html = build_commit_html(&c, 0, 1);
        assert!(html.contains(r#"<div class="node working">"#));
        assert!(!html.contains("immutable"));
    }

    #[test]
    fn test_immutable_node_class() {
        let c = Commit {
            is_immutable: true,
            ..commit("zzzzzzzz", "Root commit", &[])
        };
        assert!(build_commit_html(&c, 0, 1).contains(r#"<div class="node immutable">"#));
    }

    #[test]
    fn test_empty_message_placeholder() {
        let html = build_commit_html(&commit("kkmpptxz", "", &[]), 0, 1);
        assert!(html.contains(r#"<span class="commit-message empty">(no description)</span>"#));
    }

    #[test]
    fn test_branches_are_escaped_and_space_joined() {
        let html = build_branch_tags(&["main".to_string(), "a<b>".to_string()]);
        assert_snapshot!(html, @r#"<span class="commit-branch">main</span> <span class="commit-branch">a&lt;b&gt;</span>"#);
    }

    #[test]
    fn test_no_branches_renders_empty() {
        assert_eq!(build_branch_tags(&[]), "");
    }

    #[test]
    fn test_message_and_author_are_escaped() {
        let c = Commit {
            author: "<script>".to_string(),
            ..commit("qpvuntsm", "Fix a && b <tag>", &[])
        };
        let html = build_commit_html(&c, 0, 1);
        assert!(html.contains("Fix a &amp;&amp; b &lt;tag&gt;"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_selected_row_class() {
        let html = build_commit_row(&commit("qpvuntsm", "msg", &[]), 0, 1, true);
        assert!(html.starts_with(r#"<div class="commit-row selected" data-id="qpvuntsm">"#));
    }
}
