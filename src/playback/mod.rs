// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hands the final episode URL to something that can play it.
//!
//! Which variant is used is decided once, when the session is built: the
//! host's audio service if it offers one, a local player process otherwise.

mod local;
mod service;

use async_trait::async_trait;
use url::Url;

use crate::error::PlaybackError;

pub use local::{DEFAULT_PLAYER, LocalPlayback};
pub use service::{AudioService, ServicePlayback};

/// Starts and stops playback of episode URLs
#[async_trait]
pub trait PlaybackDispatcher: Send + Sync {
    /// Start playing `url`. `utterance` is the request that led here, for
    /// services that want the context.
    async fn play(&mut self, url: &Url, utterance: &str) -> Result<(), PlaybackError>;

    /// Stop whatever is playing; does nothing when idle
    async fn stop(&mut self) -> Result<(), PlaybackError>;

    /// Wait until the current playback ends on its own.
    ///
    /// Returns immediately when nothing is playing or when playback is owned
    /// by someone else.
    async fn wait(&mut self) -> Result<(), PlaybackError>;
}

/// Pick the dispatcher once, at startup: the host's audio service when there
/// is one, the local player otherwise.
pub fn select_playback(
    service: Option<Box<dyn AudioService>>,
    fallback: LocalPlayback,
) -> Box<dyn PlaybackDispatcher> {
    match service {
        Some(service) => {
            log::debug!("Using the host audio service for playback");
            Box::new(ServicePlayback::new(service))
        }
        None => {
            log::debug!("No audio service available, using a local player");
            Box::new(fallback)
        }
    }
}
