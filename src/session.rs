// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use async_trait::async_trait;
use url::Url;

use crate::config::{FeedConfig, FeedSlot};
use crate::dialog::{Dialog, DialogData};
use crate::enclosure::resolve_enclosure;
use crate::error::{FeedError, PlaybackError};
use crate::feed::load_feed;
use crate::host::Host;
use crate::http::HttpClient;
use crate::navigator::choose_episode;
use crate::playback::PlaybackDispatcher;
use crate::resolver::{match_slot, resolve_slot};

/// Spoken once an episode has been picked, before playback starts
pub const PLAYING_SPEECH: &str = "Playing podcast.";

/// A voice command routed to the skill by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Pick an episode of a named podcast and play it
    PlayPodcast { utterance: String },
    /// Say the title of the newest episode of one or all podcasts
    LatestEpisode { utterance: String },
    /// Stop playback
    Stop,
}

impl Intent {
    /// Route a raw utterance to an intent by keyword, the way the host's
    /// intent parser would. Returns `None` for anything else.
    pub fn recognize(utterance: &str) -> Option<Self> {
        let lowered = utterance.to_lowercase();
        let utterance = utterance.to_string();

        if lowered.contains("latest") || lowered.contains("new episode") {
            Some(Intent::LatestEpisode { utterance })
        } else if lowered.contains("stop") {
            Some(Intent::Stop)
        } else if lowered.contains("podcast") || lowered.contains("play") {
            Some(Intent::PlayPodcast { utterance })
        } else {
            None
        }
    }
}

/// How a command ended. Everything the user needs to know has already been
/// spoken by the time this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Playing {
        podcast_title: String,
        episode_title: String,
        url: Url,
    },
    Announced(String),
    Stopped,
    /// The user stopped browsing or stopped answering
    Cancelled,
    /// No configured podcast matched the request
    NotFound,
    /// A feed could not be fetched or parsed, or the episode had no media
    BadFeed,
    PlaybackFailed,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Outcome::Playing { .. } | Outcome::Announced(_) | Outcome::Stopped
        )
    }
}

/// Capability the host invokes for every recognised command
#[async_trait]
pub trait Skill {
    async fn handle(&mut self, intent: Intent) -> Outcome;
}

/// The podcast skill.
///
/// Holds nothing between commands except the playback dispatcher, so a
/// failed command cannot affect the next one.
pub struct PodcastSession<C, H> {
    config: FeedConfig,
    client: C,
    host: H,
    playback: Box<dyn PlaybackDispatcher>,
}

impl<C: HttpClient, H: Host> PodcastSession<C, H> {
    pub fn new(
        config: FeedConfig,
        client: C,
        host: H,
        playback: Box<dyn PlaybackDispatcher>,
    ) -> Self {
        Self {
            config,
            client,
            host,
            playback,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Let the user pick an episode and play it
    pub async fn play_podcast(&mut self, utterance: &str) -> Outcome {
        self.host.show_thinking();
        let slots = self.config.slots();

        let slot = match resolve_slot(&self.host, utterance, &slots).await {
            Ok(slot) => slot,
            Err(e) => {
                log::warn!("{e}");
                self.host
                    .speak_dialog(Dialog::NotFound, &DialogData::new())
                    .await;
                return Outcome::NotFound;
            }
        };

        let feed = match load_feed(&self.client, &slot.url).await {
            Ok(feed) => feed,
            Err(e) => return self.bad_feed(&slot, e).await,
        };

        let Some(index) = choose_episode(&self.host, &feed).await else {
            return Outcome::Cancelled;
        };

        self.host.speak(PLAYING_SPEECH).await;
        self.host.wait_while_speaking().await;

        let episode = &feed.episodes[index];
        let url = match resolve_enclosure(&self.client, episode).await {
            Ok(url) => url,
            Err(e) => {
                log::warn!("Cannot play '{}' of '{}': {e}", episode.title, slot.name);
                self.host
                    .speak_dialog(Dialog::BadRss, &DialogData::new())
                    .await;
                return Outcome::BadFeed;
            }
        };

        if let Err(e) = self.playback.play(&url, utterance).await {
            return self.playback_failed(e).await;
        }

        self.host.show_text(&episode.title);
        Outcome::Playing {
            podcast_title: feed.title.clone(),
            episode_title: episode.title.clone(),
            url,
        }
    }

    /// Say the newest episode title of the named podcast, or of every
    /// configured podcast when none is named
    pub async fn latest_episode(&mut self, utterance: &str) -> Outcome {
        self.host.show_thinking();
        let slots = self.config.slots();

        if slots.is_empty() {
            log::warn!("No podcasts configured");
            self.host
                .speak_dialog(Dialog::NotFound, &DialogData::new())
                .await;
            return Outcome::NotFound;
        }

        let speech = if let Some(slot) = match_slot(utterance, &slots) {
            let title = match self.latest_title(slot).await {
                Ok(title) => title,
                Err(e) => return self.bad_feed(slot, e).await,
            };
            format!("The latest episode of {} is {}", slot.name, title)
        } else {
            let mut entries = Vec::with_capacity(slots.len());
            for slot in &slots {
                match self.latest_title(slot).await {
                    Ok(title) => entries.push(format!("{}: {}", slot.name, title)),
                    Err(e) => return self.bad_feed(slot, e).await,
                }
            }
            format!(
                "The latest episodes are the following: {}",
                join_spoken_list(&entries)
            )
        };

        self.host.speak(&speech).await;
        Outcome::Announced(speech)
    }

    /// Stop playback, if any
    pub async fn stop(&mut self) -> Outcome {
        match self.playback.stop().await {
            Ok(()) => Outcome::Stopped,
            Err(e) => {
                log::warn!("{e}");
                Outcome::PlaybackFailed
            }
        }
    }

    /// Block until the current playback finishes by itself
    pub async fn wait_for_playback(&mut self) -> Result<(), PlaybackError> {
        self.playback.wait().await
    }

    async fn latest_title(&self, slot: &FeedSlot) -> Result<String, FeedError> {
        let feed = load_feed(&self.client, &slot.url).await?;
        // load_feed rejects feeds without episodes
        Ok(feed
            .latest()
            .map(|episode| episode.title.clone())
            .unwrap_or_default())
    }

    async fn bad_feed(&self, slot: &FeedSlot, error: FeedError) -> Outcome {
        log::warn!("Bad feed for '{}' ({}): {error}", slot.name, slot.url);
        self.host
            .speak_dialog(Dialog::BadRss, &DialogData::new())
            .await;
        Outcome::BadFeed
    }

    async fn playback_failed(&self, error: PlaybackError) -> Outcome {
        log::warn!("{error}");
        self.host
            .speak_dialog(Dialog::PlayerUnavailable, &DialogData::new())
            .await;
        Outcome::PlaybackFailed
    }
}

#[async_trait]
impl<C, H> Skill for PodcastSession<C, H>
where
    C: HttpClient,
    H: Host,
{
    async fn handle(&mut self, intent: Intent) -> Outcome {
        log::debug!("Handling {intent:?}");
        match intent {
            Intent::PlayPodcast { utterance } => self.play_podcast(&utterance).await,
            Intent::LatestEpisode { utterance } => self.latest_episode(&utterance).await,
            Intent::Stop => self.stop().await,
        }
    }
}

/// Join items the way they are read out: "a, b and c"
pub fn join_spoken_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}
