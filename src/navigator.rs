// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interactive episode selection.
//!
//! The user starts at the newest episode and moves through the feed with
//! "previous" (older) and "next" (newer) until they say "play" or "stop".

use crate::dialog::{Dialog, episode_data};
use crate::feed::ParsedFeed;
use crate::host::{Prompter, Speech};

/// Spoken when the user stops browsing
pub const CANCELLED_SPEECH: &str = "Operation cancelled.";

/// A browsing command recognised in a free-text answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Stop,
    Play,
    Previous,
    Next,
    Unrecognized,
}

impl Command {
    /// Map an answer to a command by substring.
    ///
    /// Checked in priority order, so "stop playing" is a stop.
    pub fn from_response(response: &str) -> Self {
        let response = response.to_lowercase();
        if response.contains("stop") {
            Command::Stop
        } else if response.contains("play") {
            Command::Play
        } else if response.contains("previous") {
            Command::Previous
        } else if response.contains("next") {
            Command::Next
        } else {
            Command::Unrecognized
        }
    }
}

/// Where browsing stands after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Browsing(usize),
    Selected(usize),
    Cancelled,
}

/// Browsing position over a feed of `episode_count` episodes.
///
/// Index 0 is the newest episode. The index never drops below 0 and never
/// passes the oldest episode; moves past either end are ignored.
#[derive(Debug, Clone)]
pub struct Navigator {
    index: usize,
    episode_count: usize,
}

impl Navigator {
    pub fn new(episode_count: usize) -> Self {
        Self {
            index: 0,
            episode_count,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn apply(&mut self, command: Command) -> NavState {
        match command {
            Command::Stop => NavState::Cancelled,
            Command::Play => NavState::Selected(self.index),
            Command::Previous => {
                if self.index + 1 < self.episode_count {
                    self.index += 1;
                }
                NavState::Browsing(self.index)
            }
            Command::Next => {
                self.index = self.index.saturating_sub(1);
                NavState::Browsing(self.index)
            }
            Command::Unrecognized => NavState::Browsing(self.index),
        }
    }

    /// Prompt shown at the current position
    pub fn prompt(&self) -> Dialog {
        if self.index == 0 {
            Dialog::PlayPrevious
        } else {
            Dialog::PlayNextPrevious
        }
    }
}

/// Walk the user through the feed until an episode is picked.
///
/// Returns the chosen episode index, or `None` when the user stopped (which
/// is announced) or stopped answering (which is not).
pub async fn choose_episode<H>(host: &H, feed: &ParsedFeed) -> Option<usize>
where
    H: Prompter + Speech + ?Sized,
{
    if feed.episodes.is_empty() {
        return None;
    }
    let mut navigator = Navigator::new(feed.episodes.len());

    loop {
        let episode = &feed.episodes[navigator.index()];
        let data = episode_data(&feed.title, &episode.title);

        let Some(response) = host
            .get_response(navigator.prompt(), &data, Dialog::PleaseRepeat)
            .await
        else {
            log::debug!("No answer while browsing, giving up");
            return None;
        };

        let command = Command::from_response(&response);
        match navigator.apply(command) {
            NavState::Browsing(index) => {
                log::debug!("{command:?} -> browsing episode {index}");
            }
            NavState::Selected(index) => {
                log::debug!("Selected episode {index}: {}", feed.episodes[index].title);
                return Some(index);
            }
            NavState::Cancelled => {
                host.speak(CANCELLED_SPEECH).await;
                return None;
            }
        }
    }
}
