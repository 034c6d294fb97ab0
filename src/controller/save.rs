//! Description save flow
//!
//! `Idle -> Saving -> Saved -(1500 ms)-> Idle`, or `Saving -> Idle` on
//! failure. Every save takes a new token; completions and reset timers
//! carrying an older token no longer drive the button. Opening a
//! repository retires the current token, and a completion for another
//! repository never touches the loaded commits.

use tracing::{debug, info, warn};

use super::{Controller, Effect, SAVE_RESET_DELAY, SaveState};

impl Controller {
    pub(crate) fn save_description(&mut self, message: String) -> Vec<Effect> {
        let (Some(repo_path), Some(commit_id)) = (
            self.session.repository_path.clone(),
            self.session.selected_commit_id.clone(),
        ) else {
            debug!("save ignored: no repository or no selection");
            return Vec::new();
        };

        self.save_token += 1;
        self.set_save_state(SaveState::Saving);

        vec![Effect::Describe {
            token: self.save_token,
            repo_path,
            commit_id,
            message,
        }]
    }

    pub(crate) fn on_describe_finished(
        &mut self,
        token: u64,
        repo_path: &str,
        commit_id: String,
        message: String,
        result: Result<(), String>,
    ) -> Vec<Effect> {
        if self.session.repository_path.as_deref() != Some(repo_path) {
            return self.on_describe_finished_elsewhere(repo_path, &commit_id, result);
        }
        let is_current = token == self.save_token;

        match result {
            Ok(()) => {
                info!(%commit_id, "description saved");
                self.update_local_message(&commit_id, message);
                self.render_commits();

                if !is_current {
                    debug!(token, current = self.save_token, "stale save completed");
                    return Vec::new();
                }
                self.set_save_state(SaveState::Saved);
                vec![Effect::ScheduleSaveReset {
                    token,
                    delay: SAVE_RESET_DELAY,
                }]
            }
            Err(error) => {
                warn!(%commit_id, %error, "failed to save description");
                self.document.alert(format!("Failed to save: {error}"));
                if is_current {
                    self.set_save_state(SaveState::Idle);
                }
                Vec::new()
            }
        }
    }

    /// Completion of a save issued against a repository that is no longer open
    fn on_describe_finished_elsewhere(
        &mut self,
        repo_path: &str,
        commit_id: &str,
        result: Result<(), String>,
    ) -> Vec<Effect> {
        match result {
            Ok(()) => info!(%repo_path, %commit_id, "description saved in previous repository"),
            Err(error) => {
                warn!(%repo_path, %commit_id, %error, "failed to save description");
                self.document.alert(format!("Failed to save: {error}"));
            }
        }
        Vec::new()
    }

    /// Detach any in-flight save from the button
    pub(crate) fn abandon_pending_save(&mut self) {
        self.save_token += 1;
        self.set_save_state(SaveState::Idle);
    }

    pub(crate) fn on_save_reset(&mut self, token: u64) {
        if token == self.save_token && self.save == SaveState::Saved {
            self.set_save_state(SaveState::Idle);
        }
    }

    /// Apply a saved description without re-fetching the log
    fn update_local_message(&mut self, commit_id: &str, message: String) {
        if let Some(detail) = self.document.detail.as_mut()
            && detail.id == commit_id
        {
            detail.message = message.clone();
        }
        if let Some(commit) = self.session.find_commit_mut(commit_id) {
            commit.message = message;
        }
    }

    fn set_save_state(&mut self, state: SaveState) {
        self.save = state;
        self.document.save_button = state.label().to_string();
    }
}
