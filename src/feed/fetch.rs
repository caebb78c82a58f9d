// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use url::Url;

use crate::error::FeedError;
use crate::http::HttpClient;

use super::normalize::normalize_feed_url;
use super::parse::{ParsedFeed, parse_feed};

/// Fetch and parse a feed from an already canonical URL
pub async fn fetch_feed<C: HttpClient + ?Sized>(
    client: &C,
    url: &Url,
) -> Result<ParsedFeed, FeedError> {
    log::debug!("Fetching feed {url}");
    let bytes = client.get_bytes(url.as_str()).await?;
    parse_feed(&bytes)
}

/// Normalize a configured feed address, fetch it and parse it.
///
/// A feed without a single episode is rejected, since there is nothing
/// to announce or play.
pub async fn load_feed<C: HttpClient + ?Sized>(
    client: &C,
    raw_url: &str,
) -> Result<ParsedFeed, FeedError> {
    let url = normalize_feed_url(raw_url)?;
    let feed = fetch_feed(client, &url).await?;

    if feed.episodes.is_empty() {
        return Err(FeedError::NoEpisodes { title: feed.title });
    }

    log::debug!("Loaded '{}' with {} episodes", feed.title, feed.episodes.len());
    Ok(feed)
}
