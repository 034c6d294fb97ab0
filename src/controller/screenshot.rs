//! Debug screenshot capture

use tracing::{info, warn};

use super::document::{SCREENSHOT_BUSY_LABEL, SCREENSHOT_IDLE_LABEL};
use super::{Controller, Effect, ScreenshotState};

impl Controller {
    pub(crate) fn take_screenshot(&mut self) -> Vec<Effect> {
        self.screenshot = ScreenshotState::Capturing;
        self.document.screenshot_button = SCREENSHOT_BUSY_LABEL.to_string();
        vec![Effect::TakeScreenshot]
    }

    pub(crate) fn on_screenshot_finished(&mut self, result: Result<String, String>) {
        self.screenshot = ScreenshotState::Idle;
        match result {
            Ok(path) => {
                info!(%path, "screenshot saved");
                self.document.screenshot_button = format!("📸 {path}");
                self.document.alert(format!("Screenshot saved: {path}"));
            }
            Err(error) => {
                warn!(%error, "screenshot failed");
                self.document.alert(format!("Screenshot failed: {error}"));
                self.document.screenshot_button = SCREENSHOT_IDLE_LABEL.to_string();
            }
        }
    }
}
