//! Text surface
//!
//! Writes alerts as plain text. By default each alert is dismissed as soon
//! as it is written; a holding surface keeps alerts open until
//! [`ConsoleSurface::dismiss_held`] is called.

use std::io::Write;

use parking_lot::Mutex;
use tracing::warn;

use super::PresentationSurface;
use crate::manager::DismissHandle;
use crate::types::AlertContent;

/// Surface that prints alerts to a writer
pub struct ConsoleSurface {
    writer: Mutex<Box<dyn Write + Send>>,
    auto_dismiss: bool,
    held: Mutex<Vec<DismissHandle>>,
}

impl std::fmt::Debug for ConsoleSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSurface")
            .field("auto_dismiss", &self.auto_dismiss)
            .field("held", &self.held.lock().len())
            .finish_non_exhaustive()
    }
}

impl ConsoleSurface {
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
            auto_dismiss: true,
            held: Mutex::new(Vec::new()),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    /// Keep alerts open instead of dismissing them after writing
    pub fn holding(mut self) -> Self {
        self.auto_dismiss = false;
        self
    }

    /// Dismiss every alert kept open so far; returns how many there were
    pub fn dismiss_held(&self) -> usize {
        let held = std::mem::take(&mut *self.held.lock());
        let count = held.len();
        for handle in held {
            handle.dismiss();
        }
        count
    }

    /// Render an alert the way [`show`](PresentationSurface::show) prints it
    pub fn render(alert: &AlertContent) -> String {
        let mut text = format!("== {} ==\n", alert.title);
        if let Some(message) = &alert.message {
            text.push_str(message);
            text.push('\n');
        }
        text.push_str(&format!("[ {} ]\n", alert.button_text));
        text
    }
}

impl PresentationSurface for ConsoleSurface {
    fn show(&self, alert: AlertContent, on_dismiss: DismissHandle) {
        let text = Self::render(&alert);
        {
            let mut writer = self.writer.lock();
            if let Err(e) = writer
                .write_all(text.as_bytes())
                .and_then(|_| writer.flush())
            {
                warn!("Failed to write alert: {}", e);
            }
        }

        if self.auto_dismiss {
            on_dismiss.dismiss();
        } else {
            self.held.lock().push(on_dismiss);
        }
    }
}
