// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent resolution: mapping free-text messages to tool/action pairs.
//!
//! Two interchangeable strategies behind one trait: a zero-cost keyword
//! decision table and a model-assisted resolver that degrades to the keyword
//! fallback on any malformed output. Also hosts the contact-field extractor
//! used by the create-contact path.

pub mod extract;
pub mod fences;
pub mod keyword;
pub mod model;

use async_trait::async_trait;
use squatch_core::Intent;

pub use extract::{ContactExtractor, ContactFields, Extraction};
pub use keyword::KeywordResolver;
pub use model::ModelResolver;

/// A strategy mapping a free-text message to an [`Intent`].
///
/// Resolution is infallible by contract: malformed model output or provider
/// failures degrade to a fallback or the null intent inside the strategy.
#[async_trait]
pub trait IntentResolver: Send + Sync {
    async fn resolve(&self, message: &str) -> Intent;
}

#[async_trait]
impl IntentResolver for KeywordResolver {
    async fn resolve(&self, message: &str) -> Intent {
        KeywordResolver::resolve_text(message)
    }
}

#[async_trait]
impl IntentResolver for ModelResolver {
    async fn resolve(&self, message: &str) -> Intent {
        self.resolve_message(message).await
    }
}
