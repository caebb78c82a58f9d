pub mod config;
pub mod console;
pub mod dialog;
pub mod enclosure;
pub mod error;
pub mod feed;
pub mod host;
pub mod http;
pub mod navigator;
pub mod playback;
pub mod resolver;
pub mod session;

// Re-export main types for convenience
pub use config::{FeedConfig, FeedSlot};
pub use console::ConsoleHost;
pub use dialog::{Dialog, DialogData};
pub use enclosure::{downgrade_scheme, resolve_enclosure};
pub use error::{ConfigError, EnclosureError, FeedError, HttpError, PlaybackError, ResolveError};
pub use feed::{Episode, ParsedFeed, load_feed, normalize_feed_url, parse_feed};
pub use host::{Display, Host, Prompter, Speech};
pub use http::{HttpClient, ReqwestClient};
pub use navigator::{Command, NavState, Navigator, choose_episode};
pub use playback::{
    AudioService, DEFAULT_PLAYER, LocalPlayback, PlaybackDispatcher, ServicePlayback,
    select_playback,
};
pub use resolver::{match_slot, resolve_slot};
pub use session::{Intent, Outcome, PodcastSession, Skill};
