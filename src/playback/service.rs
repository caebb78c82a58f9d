use async_trait::async_trait;
use url::Url;

use crate::error::PlaybackError;

use super::PlaybackDispatcher;

/// Audio service offered by the host runtime; it owns streaming and formats
#[async_trait]
pub trait AudioService: Send + Sync {
    async fn play(&self, url: &Url, utterance: &str) -> Result<(), PlaybackError>;
    async fn stop(&self) -> Result<(), PlaybackError>;
}

#[async_trait]
impl<T: AudioService + ?Sized> AudioService for Box<T> {
    async fn play(&self, url: &Url, utterance: &str) -> Result<(), PlaybackError> {
        (**self).play(url, utterance).await
    }

    async fn stop(&self) -> Result<(), PlaybackError> {
        (**self).stop().await
    }
}

/// Playback delegated entirely to the host's audio service
pub struct ServicePlayback<S> {
    service: S,
}

impl<S: AudioService> ServicePlayback<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<S: AudioService> PlaybackDispatcher for ServicePlayback<S> {
    async fn play(&mut self, url: &Url, utterance: &str) -> Result<(), PlaybackError> {
        log::info!("Sending {url} to the audio service");
        self.service.play(url, utterance).await
    }

    async fn stop(&mut self) -> Result<(), PlaybackError> {
        log::info!("Stopping the audio service");
        self.service.stop().await
    }

    async fn wait(&mut self) -> Result<(), PlaybackError> {
        Ok(())
    }
}
