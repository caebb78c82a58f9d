// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::{Child, Command};
use url::Url;

use crate::error::PlaybackError;

use super::PlaybackDispatcher;

/// Player used when the host has no audio service
pub const DEFAULT_PLAYER: &str = "mpg123";

/// Plays episodes by spawning a command-line player with the URL as its
/// last argument. At most one player process is kept.
pub struct LocalPlayback {
    program: String,
    args: Vec<String>,
    child: Option<Child>,
}

impl LocalPlayback {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            child: None,
        }
    }

    /// Whether the player process is still running
    pub fn is_playing(&mut self) -> bool {
        self.child
            .as_mut()
            .is_some_and(|child| matches!(child.try_wait(), Ok(None)))
    }

    /// OS id of the player process, while it runs
    pub fn pid(&self) -> Option<u32> {
        self.child.as_ref().and_then(Child::id)
    }
}

impl Default for LocalPlayback {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER, Vec::new())
    }
}

#[async_trait]
impl PlaybackDispatcher for LocalPlayback {
    async fn play(&mut self, url: &Url, _utterance: &str) -> Result<(), PlaybackError> {
        // Never leave an orphaned player behind
        self.stop().await?;

        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(url.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| PlaybackError::SpawnFailed {
                program: self.program.clone(),
                source: e,
            })?;

        log::info!("Started {} (pid {:?}) for {url}", self.program, child.id());
        self.child = Some(child);
        Ok(())
    }

    async fn stop(&mut self) -> Result<(), PlaybackError> {
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };

        match child.try_wait() {
            Ok(Some(status)) => {
                log::debug!("Player already exited with {status}");
                Ok(())
            }
            Ok(None) => {
                log::info!("Stopping {} (pid {:?})", self.program, child.id());
                // Kills the process and reaps it
                child.kill().await.map_err(PlaybackError::StopFailed)
            }
            Err(e) => Err(PlaybackError::StopFailed(e)),
        }
    }

    async fn wait(&mut self) -> Result<(), PlaybackError> {
        if let Some(child) = self.child.as_mut() {
            let status = child.wait().await.map_err(PlaybackError::StopFailed)?;
            log::debug!("Player exited with {status}");
            self.child = None;
        }
        Ok(())
    }
}
