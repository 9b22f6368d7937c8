//! UI thread command queue
//!
//! A dedicated thread processes commands from an unbounded channel in order.
//! Callers on other threads submit closures and, for [`UiThread::run_blocking`],
//! wait on a oneshot reply. Calls made on the UI thread itself run inline so
//! work submitted from inside a job cannot deadlock.
//!
//! Inside a multi-threaded tokio runtime the wait is moved off the worker
//! with `block_in_place`. A current-thread runtime cannot block at all, so
//! blocking submission from one fails with [`Error::UiThread`]. A job that
//! panics is logged and the thread keeps serving later commands.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::thread::{JoinHandle, ThreadId};

use parking_lot::Mutex;
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::{Error, Result};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Commands that can be sent to the UI thread
enum UiCommand {
    Run(Job),
    Shutdown,
}

/// Handle to a UI thread; clones share the same thread
#[derive(Clone)]
pub struct UiThread {
    shared: Arc<UiShared>,
}

struct UiShared {
    name: String,
    thread_id: ThreadId,
    command_tx: mpsc::UnboundedSender<UiCommand>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl std::fmt::Debug for UiThread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiThread")
            .field("name", &self.shared.name)
            .field("thread_id", &self.shared.thread_id)
            .field("running", &!self.shared.command_tx.is_closed())
            .finish()
    }
}

impl UiThread {
    /// Spawn a named UI thread
    pub fn spawn(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let (command_tx, mut command_rx) = mpsc::unbounded_channel::<UiCommand>();

        let thread_name = name.clone();
        let handle = std::thread::Builder::new()
            .name(name.clone())
            .spawn(move || {
                debug!("UI thread '{}' started", thread_name);
                while let Some(command) = command_rx.blocking_recv() {
                    match command {
                        UiCommand::Run(job) => {
                            if catch_unwind(AssertUnwindSafe(job)).is_err() {
                                warn!("Job on UI thread '{}' panicked", thread_name);
                            }
                        }
                        UiCommand::Shutdown => break,
                    }
                }
                debug!("UI thread '{}' stopped", thread_name);
            })?;

        Ok(Self {
            shared: Arc::new(UiShared {
                name,
                thread_id: handle.thread().id(),
                command_tx,
                handle: Mutex::new(Some(handle)),
            }),
        })
    }

    pub fn name(&self) -> &str {
        &self.shared.name
    }

    /// Whether the calling thread is this UI thread
    pub fn is_current(&self) -> bool {
        std::thread::current().id() == self.shared.thread_id
    }

    /// Queue `job` without waiting for it
    pub fn post<F>(&self, job: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        self.shared
            .command_tx
            .send(UiCommand::Run(Box::new(job)))
            .map_err(|_| Error::ui_thread(format!("UI thread '{}' is not running", self.name())))
    }

    /// Run `job` on the UI thread and wait for its result.
    ///
    /// Runs inline when already on the UI thread. Fails without queueing
    /// anything when called from a current-thread tokio runtime.
    pub fn run_blocking<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        if self.is_current() {
            return Ok(job());
        }

        let in_runtime = match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::CurrentThread => {
                return Err(Error::ui_thread(format!(
                    "cannot wait for UI thread '{}' from a current-thread runtime",
                    self.name()
                )));
            }
            Ok(_) => true,
            Err(_) => false,
        };

        let (response_tx, response_rx) = oneshot::channel();
        self.post(move || {
            let _ = response_tx.send(job());
        })?;

        let response = if in_runtime {
            tokio::task::block_in_place(|| response_rx.blocking_recv())
        } else {
            response_rx.blocking_recv()
        };

        response.map_err(|_| {
            Error::ui_thread(format!(
                "UI thread '{}' dropped the job before it completed",
                self.name()
            ))
        })
    }

    /// Stop the UI thread after the jobs already queued.
    ///
    /// Waits for the thread to exit unless called from the UI thread itself.
    pub fn shutdown(&self) {
        self.shared.stop();
    }
}

impl UiShared {
    fn stop(&self) {
        if self.command_tx.send(UiCommand::Shutdown).is_err() {
            return;
        }

        if std::thread::current().id() == self.thread_id {
            return;
        }

        if let Some(handle) = self.handle.lock().take()
            && handle.join().is_err()
        {
            warn!("UI thread '{}' panicked", self.name);
        }
    }
}

impl Drop for UiShared {
    fn drop(&mut self) {
        self.stop();
    }
}
