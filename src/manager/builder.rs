//! Error manager construction

use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{ErrorDelegate, ErrorManager, ManagerInner};
use crate::config::Settings;
use crate::dispatch::UiThread;
use crate::localization::{LocalizationResolver, LookupScope, LookupService, StringTables};
use crate::surface::{PresentationSurface, SurfaceLocator, SurfaceNode, SurfaceRoot};
use crate::Result;

/// Name given to the UI thread a builder spawns
pub const DEFAULT_UI_THREAD_NAME: &str = "error-presenter-ui";

/// Fixed configuration of an error manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerConfig {
    /// Where lookups happen; `None` uses the lookup service's default scope
    pub lookup_scope: Option<LookupScope>,
    /// Name of the UI thread spawned when none is supplied
    pub ui_thread_name: String,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            lookup_scope: None,
            ui_thread_name: DEFAULT_UI_THREAD_NAME.to_string(),
        }
    }
}

/// Builder for [`ErrorManager`]
#[derive(Default)]
pub struct ErrorManagerBuilder {
    config: ManagerConfig,
    lookup: Option<Arc<dyn LookupService>>,
    locator: Option<Arc<dyn SurfaceLocator>>,
    delegate: Option<Weak<dyn ErrorDelegate>>,
    ui: Option<UiThread>,
}

impl ErrorManagerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder configured from settings, with string tables loaded from
    /// `lookup.resources_dir` when it is set
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut builder = Self::new().with_config(ManagerConfig {
            lookup_scope: settings.lookup_scope(),
            ui_thread_name: settings.ui.thread_name.clone(),
        });

        if let Some(dir) = &settings.lookup.resources_dir {
            builder = builder.with_string_tables(StringTables::load_dir(dir)?);
        } else {
            debug!("No resources directory configured, lookups will miss");
        }

        Ok(builder)
    }

    pub fn with_config(mut self, config: ManagerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_lookup_scope(mut self, scope: LookupScope) -> Self {
        self.config.lookup_scope = Some(scope);
        self
    }

    pub fn with_lookup_service(mut self, service: Arc<dyn LookupService>) -> Self {
        self.lookup = Some(service);
        self
    }

    pub fn with_string_tables(self, tables: StringTables) -> Self {
        self.with_lookup_service(Arc::new(tables))
    }

    /// Present every error on one fixed surface
    pub fn with_surface(self, surface: Arc<dyn PresentationSurface>) -> Self {
        self.with_surface_locator(Arc::new(SurfaceRoot::with_root(SurfaceNode::Surface(
            surface,
        ))))
    }

    pub fn with_surface_locator(mut self, locator: Arc<dyn SurfaceLocator>) -> Self {
        self.locator = Some(locator);
        self
    }

    /// Attach a delegate without taking ownership of it
    pub fn with_delegate<D: ErrorDelegate + 'static>(mut self, delegate: &Arc<D>) -> Self {
        let weak: Weak<D> = Arc::downgrade(delegate);
        let weak: Weak<dyn ErrorDelegate> = weak;
        self.delegate = Some(weak);
        self
    }

    /// Share an existing UI thread instead of spawning one
    pub fn with_ui_thread(mut self, ui: UiThread) -> Self {
        self.ui = Some(ui);
        self
    }

    pub fn build(self) -> Result<ErrorManager> {
        let ui = match self.ui {
            Some(ui) => ui,
            None => UiThread::spawn(self.config.ui_thread_name.clone())?,
        };
        let lookup = self
            .lookup
            .unwrap_or_else(|| Arc::new(StringTables::new()));
        let resolver = LocalizationResolver::new(lookup, self.config.lookup_scope.clone());

        info!(
            "Error manager ready (scope: {:?}, UI thread: {})",
            self.config.lookup_scope,
            ui.name()
        );

        Ok(ErrorManager {
            inner: Arc::new(ManagerInner {
                config: self.config,
                resolver,
                delegate: RwLock::new(self.delegate),
                locator: self.locator,
                ui,
                showing_error: AtomicBool::new(false),
            }),
        })
    }
}
