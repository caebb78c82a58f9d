mod fetch;
mod normalize;
mod parse;

pub use fetch::{fetch_feed, load_feed};
pub use normalize::normalize_feed_url;
pub use parse::{Episode, ParsedFeed, parse_feed};
