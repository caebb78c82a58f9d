// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Collaborators supplied by the voice-assistant runtime hosting the skill.

use async_trait::async_trait;

use crate::dialog::{Dialog, DialogData};

/// Text-to-speech output
#[async_trait]
pub trait Speech: Send + Sync {
    /// Speak a literal sentence
    async fn speak(&self, text: &str);

    /// Speak a dialog rendered with `data`
    async fn speak_dialog(&self, dialog: Dialog, data: &DialogData) {
        self.speak(&dialog.render(data)).await;
    }

    /// Block until everything queued for speech has been said
    async fn wait_while_speaking(&self);
}

/// Asks the user something and captures the spoken answer
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Speak `dialog` and return the transcribed answer.
    ///
    /// `on_fail` is spoken when the answer could not be understood. `None`
    /// means the user gave no answer before the host gave up.
    async fn get_response(
        &self,
        dialog: Dialog,
        data: &DialogData,
        on_fail: Dialog,
    ) -> Option<String>;
}

/// Visual feedback on the device, if it has a display
pub trait Display: Send + Sync {
    fn show_thinking(&self);
    fn show_text(&self, text: &str);
}

/// Everything a podcast session needs from its host
pub trait Host: Speech + Prompter + Display {}

impl<T: Speech + Prompter + Display> Host for T {}
