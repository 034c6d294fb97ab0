//! Selection and the detail panel

use tracing::debug;

use super::{Controller, DetailPanel};

impl Controller {
    /// Select a row and open its detail panel
    ///
    /// An id that is not in the current log is ignored.
    pub(crate) fn select_commit(&mut self, id: &str) {
        let Some(commit) = self.session.find_commit(id) else {
            debug!(%id, "select ignored: commit not in log");
            return;
        };

        let panel = DetailPanel::from_commit(commit);
        self.session.selected_commit_id = Some(panel.id.clone());
        self.document.detail = Some(panel);
        self.render_commits();
    }

    /// Hide the detail panel; edits not yet saved are left to the editor
    pub(crate) fn close_detail(&mut self) {
        self.session.selected_commit_id = None;
        self.document.detail = None;
        self.render_commits();
    }
}
