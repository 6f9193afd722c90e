//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! # Design Principles
//!
//! 1. **Cheap cloning**: All fields use Arc or are already Clone-cheap
//! 2. **Immutable after creation**: State is read-only during request handling

use crate::config::AppConfig;
use std::sync::Arc;

/// Shared application state
///
/// The calculator has no database or external services; the only shared
/// resource is the immutable configuration.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
