//! Builds the content and config bundle used by front-ends.
use anyhow::Result;

use crate::config::SessionConfig;
use crate::content::{BuiltinContent, ContentBundle, ContentSource, DirectoryContent};

/// Builder that assembles content and configuration for clients.
pub struct SessionBuilder {
    config: SessionConfig,
    content_source: Box<dyn ContentSource>,
}

impl SessionBuilder {
    /// Uses the configured data directory, or built-in content when none is set.
    pub fn new(config: SessionConfig) -> Self {
        let content_source: Box<dyn ContentSource> = match &config.data_dir {
            Some(dir) => Box::new(DirectoryContent::new(dir)),
            None => Box::new(BuiltinContent),
        };
        Self {
            config,
            content_source,
        }
    }

    /// Provide a custom content source.
    pub fn content_source(mut self, source: impl ContentSource + 'static) -> Self {
        self.content_source = Box::new(source);
        self
    }

    pub fn build(self) -> Result<SessionSetup> {
        let content = self.content_source.load()?;
        let session_id = self.config.resolved_session_id();
        tracing::debug!(%session_id, data_dir = ?self.config.data_dir, "session setup ready");

        Ok(SessionSetup {
            config: self.config,
            session_id,
            content,
        })
    }
}

pub struct SessionSetup {
    pub config: SessionConfig,
    pub session_id: String,
    pub content: ContentBundle,
}
