//! Explicit dependency bundle handed to core components.
//!
//! # Responsibility
//! - Carry the event logger, analytics sink and feature flags.
//! - Replace implicit shared-container lookup with constructor injection.
//!
//! # Invariants
//! - A context is built once by the host and cloned cheaply (`Arc` handles).
//! - Sinks are advisory: nothing in core depends on their side effects.

use crate::config::CoreConfig;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Category-tagged message sink used for user-visible event breadcrumbs.
pub trait EventLogger: Send + Sync {
    fn log(&self, message: &str, category: &str);
}

/// Product analytics sink.
pub trait Analytics: Send + Sync {
    fn track(&self, event: &str, params: &BTreeMap<String, String>);
}

/// Forwards breadcrumbs to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacadeLogger;

impl EventLogger for LogFacadeLogger {
    fn log(&self, message: &str, category: &str) {
        info!("event=app_log module={category} message={message}");
    }
}

/// Forwards analytics events to the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAnalytics;

impl Analytics for LogAnalytics {
    fn track(&self, event: &str, params: &BTreeMap<String, String>) {
        debug!("event=analytics module=context name={event} params={params:?}");
    }
}

/// Runtime feature switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    pub enable_experimental: bool,
}

/// Shared dependency bundle.
#[derive(Clone)]
pub struct AppContext {
    logger: Arc<dyn EventLogger>,
    analytics: Arc<dyn Analytics>,
    flags: FeatureFlags,
}

impl AppContext {
    pub fn new(
        logger: Arc<dyn EventLogger>,
        analytics: Arc<dyn Analytics>,
        flags: FeatureFlags,
    ) -> Self {
        Self {
            logger,
            analytics,
            flags,
        }
    }

    /// Builds a context with `log`-backed sinks and flags from config.
    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(
            Arc::new(LogFacadeLogger),
            Arc::new(LogAnalytics),
            config.feature_flags,
        )
    }

    pub fn logger(&self) -> &dyn EventLogger {
        self.logger.as_ref()
    }

    pub fn analytics(&self) -> &dyn Analytics {
        self.analytics.as_ref()
    }

    pub fn flags(&self) -> FeatureFlags {
        self.flags
    }

    /// Toggles the experimental flag and leaves a breadcrumb.
    pub fn set_experimental(&mut self, enabled: bool) {
        self.flags.enable_experimental = enabled;
        self.logger.log(
            &format!("enable_experimental = {enabled}"),
            "devmenu",
        );
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::from_config(&CoreConfig::default())
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}
