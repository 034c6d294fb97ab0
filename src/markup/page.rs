//! Standalone page assembly
//!
//! Wraps the controller's fragments into a complete document, used by
//! `jj-gui --html`.

use super::escape_html;

/// Detail panel contents as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFields<'a> {
    pub id: &'a str,
    pub author: &'a str,
    pub date: &'a str,
    pub message: &'a str,
}

/// Fragments making up a page
#[derive(Debug, Clone)]
pub struct Page<'a> {
    pub repo_name: Option<&'a str>,
    pub repo_title: Option<&'a str>,
    pub branches_html: &'a str,
    pub log_html: &'a str,
    pub layout_vars: &'a [(&'static str, String)],
    pub detail: Option<DetailFields<'a>>,
}

const STYLE: &str = concat!(
    "body{font-family:system-ui,sans-serif;margin:0;display:flex}",
    "#sidebar{width:200px;padding:8px}",
    "#main{flex:1}",
    ".commit-row{display:grid;grid-template-columns:24px var(--col-change) var(--col-branches) var(--col-description) var(--col-author) auto}",
    ".commit-row.selected{background:#e8f0fe}",
    ".node{width:8px;height:8px;border-radius:50%;border:2px solid #888}",
    ".node.working{background:#2da44e;border-color:#2da44e}",
    ".node.immutable{border-radius:0}",
    ".commit-branch{background:#ddf4ff;border-radius:4px;padding:0 4px}",
    ".commit-message.empty{color:#888;font-style:italic}",
    ".error{color:#cf222e;padding:16px}",
    ".empty,.loading{color:#888;padding:16px}"
);

/// Assemble a standalone HTML page
pub fn build_page(page: &Page<'_>) -> String {
    let vars: String = page
        .layout_vars
        .iter()
        .map(|(name, value)| format!("{name}:{value};"))
        .collect();

    let repo = match (page.repo_name, page.repo_title) {
        (Some(name), Some(title)) => format!(
            r#"<div id="repo-name" title="{}">{}</div>"#,
            escape_html(title),
            escape_html(name)
        ),
        (Some(name), None) => format!(r#"<div id="repo-name">{}</div>"#, escape_html(name)),
        _ => r#"<div id="repo-name"></div>"#.to_string(),
    };

    let detail = page
        .detail
        .as_ref()
        .map(|d| {
            format!(
                concat!(
                    r#"<aside id="detail-panel">"#,
                    r#"<div id="detail-id">{}</div>"#,
                    r#"<div id="detail-author">{}</div>"#,
                    r#"<div id="detail-date">{}</div>"#,
                    r#"<textarea id="detail-message">{}</textarea>"#,
                    "</aside>"
                ),
                escape_html(d.id),
                escape_html(d.author),
                escape_html(d.date),
                escape_html(d.message),
            )
        })
        .unwrap_or_default();

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html><head><meta charset=\"utf-8\"><title>jj-gui</title>",
            "<style>{style}</style></head>\n",
            "<body><nav id=\"sidebar\">{repo}<div id=\"branches\">{branches}</div></nav>\n",
            "<main id=\"main\" style=\"{vars}\"><div id=\"log\">{log}</div></main>\n",
            "{detail}</body></html>\n"
        ),
        style = STYLE,
        repo = repo,
        branches = page.branches_html,
        vars = vars,
        log = page.log_html,
        detail = detail,
    )
}
