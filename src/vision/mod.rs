// src/vision/mod.rs
// Optional photo description step run before avatar generation

pub mod anthropic;

use async_trait::async_trait;

use crate::error::Result;
use crate::photo::PhotoUpload;

pub use anthropic::AnthropicVision;

/// What a vision model saw in the uploaded photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoDescription {
    /// Left as None when the model could not tell; never guessed
    pub gender: Option<String>,
    pub description: String,
}

#[async_trait]
pub trait PhotoAnalyzer: Send + Sync {
    fn name(&self) -> &str;

    async fn describe(&self, photo: &PhotoUpload) -> Result<PhotoDescription>;
}
