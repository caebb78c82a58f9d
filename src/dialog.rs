use std::collections::BTreeMap;

/// Values substituted into a dialog template, keyed by placeholder name
pub type DialogData = BTreeMap<&'static str, String>;

/// Everything the skill can say through the host's dialog mechanism
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialog {
    /// Asked when no configured podcast matched the utterance
    NoMatch,
    /// Spoken when the podcast still could not be matched
    NotFound,
    /// Browsing prompt while the newest episode is selected
    PlayPrevious,
    /// Browsing prompt for any older episode
    PlayNextPrevious,
    /// Re-prompt when the user's answer could not be heard
    PleaseRepeat,
    /// The feed could not be fetched or has nothing playable
    BadRss,
    /// The player refused to start
    PlayerUnavailable,
}

impl Dialog {
    /// Key the host uses to look the dialog up in its locale files
    pub fn key(self) -> &'static str {
        match self {
            Dialog::NoMatch => "nomatch",
            Dialog::NotFound => "not.found",
            Dialog::PlayPrevious => "play.previous",
            Dialog::PlayNextPrevious => "play.next.previous",
            Dialog::PleaseRepeat => "please.repeat",
            Dialog::BadRss => "badrss",
            Dialog::PlayerUnavailable => "player.unavailable",
        }
    }

    /// English template with `{name}` placeholders
    pub fn template(self) -> &'static str {
        match self {
            Dialog::NoMatch => "I couldn't find that podcast. Which podcast would you like?",
            Dialog::NotFound => "Sorry, that podcast isn't in your list of podcasts.",
            Dialog::PlayPrevious => {
                "The latest episode of {podcast_title} is {episode_title}. \
                 Say play to listen, or previous for an older episode."
            }
            Dialog::PlayNextPrevious => {
                "The episode of {podcast_title} before that is {episode_title}. \
                 Say play to listen, next for a newer episode, or previous for an older one."
            }
            Dialog::PleaseRepeat => "Sorry, I didn't catch that. Please repeat.",
            Dialog::BadRss => "Sorry, I wasn't able to read that podcast feed.",
            Dialog::PlayerUnavailable => "Sorry, I couldn't start playing that episode.",
        }
    }

    /// Fill the template in one pass; placeholders without a value are left
    /// as they are, and inserted values are never scanned again
    pub fn render(self, data: &DialogData) -> String {
        let mut rendered = String::new();
        let mut rest = self.template();

        while let Some(open) = rest.find('{') {
            rendered.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let name = &after[..close];
                    match data.get(name) {
                        Some(value) => rendered.push_str(value),
                        None => rendered.push_str(&rest[open..open + close + 2]),
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    rendered.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        rendered.push_str(rest);
        rendered
    }
}

/// Data for the episode browsing prompts
pub fn episode_data(podcast_title: &str, episode_title: &str) -> DialogData {
    DialogData::from([
        ("podcast_title", podcast_title.to_string()),
        ("episode_title", episode_title.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_placeholders() {
        let text = Dialog::PlayPrevious.render(&episode_data("Rust Radio", "Lifetimes"));
        assert!(text.starts_with("The latest episode of Rust Radio is Lifetimes."));
        assert!(!text.contains('{'));
    }

    #[test]
    fn render_does_not_expand_inserted_values() {
        let data = episode_data("Rust Radio", "Why {podcast_title}?");
        let text = Dialog::PlayNextPrevious.render(&data);
        assert!(text.starts_with("The episode of Rust Radio before that is Why {podcast_title}?."));
    }

    #[test]
    fn render_keeps_unknown_placeholders() {
        let data = DialogData::from([("podcast_title", "Rust Radio".to_string())]);
        let text = Dialog::PlayPrevious.render(&data);
        assert!(text.starts_with("The latest episode of Rust Radio is {episode_title}."));
    }

    #[test]
    fn render_without_data_returns_template() {
        assert_eq!(
            Dialog::BadRss.render(&DialogData::new()),
            Dialog::BadRss.template()
        );
    }

    #[test]
    fn keys_match_host_locale_names() {
        assert_eq!(Dialog::NotFound.key(), "not.found");
        assert_eq!(Dialog::PlayNextPrevious.key(), "play.next.previous");
    }
}
