//! Opening chat links in the system browser.

use crate::error::{ArgstoneError, Result};
use tracing::debug;

/// Something that can open a URL.
pub trait BrowserLauncher: Send + Sync {
    fn open_url(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the platform's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open_url(&self, url: &str) -> Result<()> {
        open::that(url).map_err(|e| ArgstoneError::BrowserError(e.to_string()))
    }
}

/// Open `url` `count` times, one tab per call.
///
/// Stops at the first failure. Returns the number of tabs opened.
pub fn open_tabs(launcher: &dyn BrowserLauncher, url: &str, count: u32) -> Result<u32> {
    for n in 1..=count {
        launcher.open_url(url)?;
        debug!(tab = n, of = count, "opened tab");
    }
    Ok(count)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Records every URL it is asked to open. Fails after `fail_after` calls if set.
    #[derive(Default)]
    pub(crate) struct RecordingBrowser {
        pub opened: Mutex<Vec<String>>,
        pub fail_after: Option<usize>,
    }

    impl RecordingBrowser {
        pub(crate) fn failing_after(n: usize) -> Self {
            Self {
                opened: Mutex::new(Vec::new()),
                fail_after: Some(n),
            }
        }

        pub(crate) fn opened(&self) -> Vec<String> {
            self.opened.lock().unwrap().clone()
        }
    }

    impl BrowserLauncher for RecordingBrowser {
        fn open_url(&self, url: &str) -> Result<()> {
            let mut opened = self.opened.lock().unwrap();
            if self.fail_after.is_some_and(|n| opened.len() >= n) {
                return Err(ArgstoneError::BrowserError("no display".to_string()));
            }
            opened.push(url.to_string());
            Ok(())
        }
    }
}
