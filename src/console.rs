// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Terminal stand-in for the voice runtime: speech is printed, answers are
//! typed.

use std::time::Duration;

use async_trait::async_trait;
use colored::Colorize;
use console::Emoji;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use crate::dialog::{Dialog, DialogData};
use crate::host::{Display, Prompter, Speech};

static SPEAKER: Emoji<'_, '_> = Emoji("🔊 ", "> ");
static THINKING: Emoji<'_, '_> = Emoji("💭 ", "... ");
static SCREEN: Emoji<'_, '_> = Emoji("📺 ", "[ ");

/// How often an unintelligible (empty) answer is asked for again
const ANSWER_RETRIES: usize = 1;

/// Host adapter reading answers from a line-based input
pub struct ConsoleHost<R> {
    lines: Mutex<Lines<R>>,
    prompt_timeout: Duration,
}

impl ConsoleHost<BufReader<Stdin>> {
    /// Host reading from the process's standard input
    pub fn stdin(prompt_timeout: Duration) -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), prompt_timeout)
    }
}

impl<R: AsyncBufRead + Unpin + Send> ConsoleHost<R> {
    pub fn new(reader: R, prompt_timeout: Duration) -> Self {
        Self {
            lines: Mutex::new(reader.lines()),
            prompt_timeout,
        }
    }

    /// Wait, without a time limit, for the next command. `None` at end of input.
    pub async fn read_utterance(&self) -> Option<String> {
        loop {
            let line = self.lines.lock().await.next_line().await.ok().flatten()?;
            let line = line.trim();
            if !line.is_empty() {
                return Some(line.to_string());
            }
        }
    }

    async fn read_answer(&self) -> Option<String> {
        let mut lines = self.lines.lock().await;
        match tokio::time::timeout(self.prompt_timeout, lines.next_line()).await {
            Ok(Ok(line)) => line.map(|l| l.trim().to_string()),
            Ok(Err(e)) => {
                log::warn!("Failed to read answer: {e}");
                None
            }
            Err(_) => {
                log::debug!("No answer within {:?}", self.prompt_timeout);
                None
            }
        }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> Speech for ConsoleHost<R> {
    async fn speak(&self, text: &str) {
        println!("{SPEAKER}{}", text.bold());
    }

    async fn wait_while_speaking(&self) {
        // Printing is synchronous; nothing is ever queued
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> Prompter for ConsoleHost<R> {
    async fn get_response(
        &self,
        dialog: Dialog,
        data: &DialogData,
        on_fail: Dialog,
    ) -> Option<String> {
        self.speak_dialog(dialog, data).await;

        for attempt in 0..=ANSWER_RETRIES {
            let answer = self.read_answer().await?;
            if !answer.is_empty() {
                return Some(answer);
            }
            if attempt < ANSWER_RETRIES {
                self.speak_dialog(on_fail, data).await;
            }
        }
        None
    }
}

impl<R: Send> Display for ConsoleHost<R> {
    fn show_thinking(&self) {
        println!("{THINKING}{}", "thinking".dimmed());
    }

    fn show_text(&self, text: &str) {
        println!("{SCREEN}{}", text.cyan());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::episode_data;

    fn host(input: &'static str) -> ConsoleHost<&'static [u8]> {
        ConsoleHost::new(input.as_bytes(), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn answers_are_trimmed() {
        let host = host("  play  \n");
        let answer = host
            .get_response(
                Dialog::PlayPrevious,
                &episode_data("Rust Radio", "Lifetimes"),
                Dialog::PleaseRepeat,
            )
            .await;
        assert_eq!(answer.as_deref(), Some("play"));
    }

    #[tokio::test]
    async fn empty_answer_is_asked_again_once() {
        let answer = host("\nprevious\n")
            .get_response(Dialog::NoMatch, &DialogData::new(), Dialog::PleaseRepeat)
            .await;
        assert_eq!(answer.as_deref(), Some("previous"));

        let answer = host("\n\nplay\n")
            .get_response(Dialog::NoMatch, &DialogData::new(), Dialog::PleaseRepeat)
            .await;
        assert_eq!(answer, None);
    }

    #[tokio::test]
    async fn end_of_input_means_no_answer() {
        let answer = host("")
            .get_response(Dialog::NoMatch, &DialogData::new(), Dialog::PleaseRepeat)
            .await;
        assert_eq!(answer, None);
    }

    #[tokio::test]
    async fn read_utterance_skips_blank_lines() {
        let host = host("\n   \nplay rust radio\n");
        assert_eq!(host.read_utterance().await.as_deref(), Some("play rust radio"));
        assert_eq!(host.read_utterance().await, None);
    }
}
