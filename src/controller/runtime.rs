//! Effect execution
//!
//! Host requests run on worker threads so the event loop never waits on a
//! child process. Their outcomes come back as [`Msg`] values through a
//! channel that the event loop drains between frames.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use super::{CommandHost, Effect, Msg};
use crate::prefs::{self, PreferenceStore};

pub struct Runtime {
    host: Arc<dyn CommandHost>,
    prefs: Box<dyn PreferenceStore>,
    tx: Sender<Msg>,
    rx: Receiver<Msg>,
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime").finish_non_exhaustive()
    }
}

impl Runtime {
    pub fn new(host: Arc<dyn CommandHost>, prefs: Box<dyn PreferenceStore>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            host,
            prefs,
            tx,
            rx,
        }
    }

    pub fn prefs(&self) -> &dyn PreferenceStore {
        self.prefs.as_ref()
    }

    /// Run one effect
    ///
    /// Preference writes happen inline and never fail the caller. The
    /// directory picker belongs to the front-end and is ignored here.
    pub fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::PickDirectory => {
                debug!("directory picker requested outside a front-end");
            }
            Effect::FetchLog {
                generation,
                repo_path,
            } => self.spawn(move |host| Msg::LogLoaded {
                generation,
                result: host.get_log(&repo_path).map_err(|e| e.to_string()),
            }),
            Effect::Describe {
                token,
                repo_path,
                commit_id,
                message,
            } => self.spawn(move |host| {
                let result = host
                    .describe(&repo_path, &commit_id, &message)
                    .map_err(|e| e.to_string());
                Msg::DescribeFinished {
                    token,
                    repo_path,
                    commit_id,
                    message,
                    result,
                }
            }),
            Effect::TakeScreenshot => self.spawn(|host| {
                Msg::ScreenshotFinished(host.take_screenshot().map_err(|e| e.to_string()))
            }),
            Effect::ScheduleSaveReset { token, delay } => {
                let tx = self.tx.clone();
                thread::spawn(move || {
                    thread::sleep(delay);
                    // Receiver is gone once the app has quit
                    let _ = tx.send(Msg::SaveResetElapsed { token });
                });
            }
            Effect::PersistLastRepo(path) => {
                if let Err(e) = prefs::save_last_repo(self.prefs.as_mut(), &path) {
                    warn!(error = %e, "failed to persist last repository");
                }
            }
            Effect::PersistColumnWidths(widths) => {
                if let Err(e) = prefs::save_column_widths(self.prefs.as_mut(), &widths) {
                    warn!(error = %e, "failed to persist column widths");
                }
            }
        }
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce(&dyn CommandHost) -> Msg + Send + 'static,
    {
        let host = Arc::clone(&self.host);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let msg = job(host.as_ref());
            let _ = tx.send(msg);
        });
    }

    /// Next finished request, if any
    pub fn try_recv(&self) -> Option<Msg> {
        self.rx.try_recv().ok()
    }

    /// Wait up to `timeout` for a finished request
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Msg> {
        match self.rx.recv_timeout(timeout) {
            Ok(msg) => Some(msg),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}
