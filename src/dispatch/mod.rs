//! Single logical UI thread
//!
//! Presentation state is only touched on one thread. [`UiThread`] owns that
//! thread and lets other threads forward work to it, either fire-and-forget
//! or blocking until the work has run.

pub mod ui_thread;

pub use ui_thread::UiThread;
