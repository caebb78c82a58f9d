// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::FeedSlot;
use crate::dialog::{Dialog, DialogData};
use crate::error::ResolveError;
use crate::host::Prompter;

/// How many utterances are tried before giving up, the first one included
pub const MATCH_ATTEMPTS: usize = 2;

/// Find the slot whose name appears anywhere in the utterance, ignoring case.
///
/// Slots are checked in settings order and the first hit wins.
pub fn match_slot<'a>(utterance: &str, slots: &'a [FeedSlot]) -> Option<&'a FeedSlot> {
    let utterance = utterance.to_lowercase();
    slots
        .iter()
        .filter(|slot| !slot.name.is_empty())
        .find(|slot| utterance.contains(&slot.name.to_lowercase()))
}

/// Match the utterance against the slots, asking the user again once if
/// nothing matched.
pub async fn resolve_slot<P: Prompter + ?Sized>(
    prompter: &P,
    utterance: &str,
    slots: &[FeedSlot],
) -> Result<FeedSlot, ResolveError> {
    let mut utterance = utterance.to_string();

    for attempt in 1..=MATCH_ATTEMPTS {
        if let Some(slot) = match_slot(&utterance, slots) {
            log::debug!("'{utterance}' matched podcast '{}'", slot.name);
            return Ok(slot.clone());
        }
        log::debug!("Attempt {attempt}: no podcast matches '{utterance}'");

        if attempt == MATCH_ATTEMPTS {
            break;
        }

        utterance = match prompter
            .get_response(Dialog::NoMatch, &DialogData::new(), Dialog::PleaseRepeat)
            .await
        {
            Some(answer) => answer,
            None => break,
        };
    }

    Err(ResolveError::NoMatch)
}
