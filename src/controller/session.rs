//! Repository session: open, fetch, render

use std::collections::HashSet;

use tracing::{debug, info, warn};

use super::document::repo_display_name;
use super::{Controller, Effect, LogStatus};
use crate::jj::Parser;
use crate::markup;

impl Controller {
    /// Switch to `path`, forgetting the previous repository's state
    pub(crate) fn open_repository(&mut self, path: String) -> Vec<Effect> {
        info!(%path, "opening repository");
        self.session.repository_path = Some(path.clone());
        self.session.commits.clear();
        self.close_detail();
        self.abandon_pending_save();
        self.clear_branches();

        let mut effects = vec![Effect::PersistLastRepo(path)];
        effects.extend(self.display_log());
        effects
    }

    /// Show the empty state, or start loading the open repository
    pub(crate) fn display_log(&mut self) -> Vec<Effect> {
        if self.session.repository_path.is_none() {
            self.log_status = LogStatus::NoRepository;
            self.document.log_html = markup::build_empty_state_html();
            return Vec::new();
        }
        self.update_repo_name();
        self.reload_log()
    }

    /// Request a fresh log; responses to earlier requests become stale
    pub(crate) fn reload_log(&mut self) -> Vec<Effect> {
        let Some(repo_path) = self.session.repository_path.clone() else {
            return Vec::new();
        };

        self.generation += 1;
        self.log_status = LogStatus::Loading;
        if self.session.commits.is_empty() {
            self.document.log_html = markup::build_loading_html();
        }

        vec![Effect::FetchLog {
            generation: self.generation,
            repo_path,
        }]
    }

    pub(crate) fn on_log_loaded(&mut self, generation: u64, result: Result<String, String>) {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "discarding stale log response"
            );
            return;
        }

        match result {
            Ok(raw) => {
                self.session.commits = Parser::parse_log(&raw);
                self.log_status = LogStatus::Displayed;
                debug!(count = self.session.commits.len(), "log loaded");

                if let Some(id) = self.session.selected_commit_id.as_deref()
                    && self.session.find_commit(id).is_none()
                {
                    debug!(%id, "selected commit no longer in log");
                    self.close_detail();
                }

                self.render_commits();
                self.render_branches();
            }
            Err(error) => {
                warn!(%error, "failed to load log");
                self.session.commits.clear();
                self.close_detail();
                self.render_branches();
                self.document.log_html = markup::build_error_html(&error);
                self.log_status = LogStatus::Error(error);
            }
        }
    }

    /// Regenerate the log list from the session
    pub(crate) fn render_commits(&mut self) {
        let commits = &self.session.commits;
        if commits.is_empty() {
            self.document.log_html = markup::build_no_commits_html();
            return;
        }

        let selected = self.session.selected_commit_id.as_deref();
        let total = commits.len();
        self.document.log_html = commits
            .iter()
            .enumerate()
            .map(|(index, commit)| {
                markup::build_commit_row(commit, index, total, selected == Some(commit.id.as_str()))
            })
            .collect();
    }

    /// Rebuild the sidebar from the bookmarks of all loaded commits
    ///
    /// Labels keep first-seen order down the log, without duplicates.
    pub(crate) fn render_branches(&mut self) {
        let mut seen = HashSet::new();
        let mut branches: Vec<String> = self
            .session
            .commits
            .iter()
            .flat_map(|c| c.branches.iter())
            .filter(|b| seen.insert(b.as_str()))
            .cloned()
            .collect();

        if branches.is_empty() {
            branches.push(markup::FALLBACK_BRANCH.to_string());
        }

        self.document.branches_html = branches
            .iter()
            .map(|b| markup::build_branch_html(b))
            .collect();
        self.branches = branches;
    }

    /// Empty sidebar until the new repository's log arrives
    fn clear_branches(&mut self) {
        self.branches.clear();
        self.document.branches_html.clear();
    }

    fn update_repo_name(&mut self) {
        let Some(path) = self.session.repository_path.as_deref() else {
            return;
        };
        self.document.repo_name = Some(repo_display_name(path).to_string());
        self.document.repo_title = Some(path.to_string());
    }
}
