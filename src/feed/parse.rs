// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};
use url::Url;

use crate::error::FeedError;

/// A parsed podcast feed with its episodes ordered newest first
#[derive(Debug, Clone)]
pub struct ParsedFeed {
    pub title: String,
    pub episodes: Vec<Episode>,
}

/// A single episode of a feed
#[derive(Debug, Clone)]
pub struct Episode {
    pub title: String,
    pub pub_date: Option<DateTime<FixedOffset>>,
    /// Media URLs attached to the item, possibly none
    pub enclosures: Vec<Url>,
}

impl ParsedFeed {
    /// The most recent episode, if the feed has any
    pub fn latest(&self) -> Option<&Episode> {
        self.episodes.first()
    }
}

/// Parse RSS feed XML bytes into a ParsedFeed
pub fn parse_feed(xml_bytes: &[u8]) -> Result<ParsedFeed, FeedError> {
    let channel = rss::Channel::read_from(xml_bytes)?;

    let mut episodes: Vec<Episode> = channel.items().iter().map(parse_episode).collect();
    // Stable, so items sharing a date (or lacking one) keep their feed order
    episodes.sort_by(|a, b| newest_first(a.pub_date, b.pub_date));

    Ok(ParsedFeed {
        title: channel.title().to_string(),
        episodes,
    })
}

fn parse_episode(item: &rss::Item) -> Episode {
    let title = item
        .title()
        .map(String::from)
        .unwrap_or_else(|| "Untitled Episode".to_string());

    let enclosures = enclosure_urls(item)
        .filter_map(|raw| match Url::parse(raw) {
            Ok(url) => Some(url),
            Err(e) => {
                log::debug!("Ignoring enclosure '{raw}' of '{title}': {e}");
                None
            }
        })
        .fold(Vec::new(), |mut urls: Vec<Url>, url| {
            if !urls.contains(&url) {
                urls.push(url);
            }
            urls
        });

    let pub_date = item.pub_date().and_then(|date_str| {
        DateTime::parse_from_rfc2822(date_str)
            .ok()
            .or_else(|| parse_relaxed_date(date_str))
    });

    Episode {
        title,
        pub_date,
        enclosures,
    }
}

/// Raw media URLs of an item: the RSS `<enclosure>` first, then any Media RSS
/// `<media:content url=..>` elements in document order
fn enclosure_urls(item: &rss::Item) -> impl Iterator<Item = &str> {
    let media = item
        .extensions()
        .get("media")
        .and_then(|elements| elements.get("content"))
        .into_iter()
        .flatten()
        .filter_map(|content| content.attrs().get("url").map(String::as_str));

    item.enclosure().map(|enclosure| enclosure.url()).into_iter().chain(media)
}

fn newest_first(a: Option<DateTime<FixedOffset>>, b: Option<DateTime<FixedOffset>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Try to parse dates that don't strictly conform to RFC 2822
fn parse_relaxed_date(date_str: &str) -> Option<DateTime<FixedOffset>> {
    let formats = [
        "%a, %d %b %Y %H:%M:%S %z",
        "%d %b %Y %H:%M:%S %z",
        "%Y-%m-%dT%H:%M:%S%:z",
        "%Y-%m-%d %H:%M:%S %z",
    ];

    formats
        .iter()
        .find_map(|format| DateTime::parse_from_str(date_str.trim(), format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Test Podcast</title>
    <description>A test podcast for unit testing</description>
    <link>https://example.com</link>
    <item>
      <title>Older Episode</title>
      <pubDate>Mon, 01 Jan 2024 12:00:00 +0000</pubDate>
      <enclosure url="https://example.com/ep1.mp3" length="1234567" type="audio/mpeg"/>
    </item>
    <item>
      <title>Newest Episode</title>
      <pubDate>Thu, 01 Feb 2024 12:00:00 +0000</pubDate>
      <enclosure url="https://example.com/ep2.mp3" type="audio/mpeg"/>
    </item>
    <item>
      <title>Undated Episode</title>
      <enclosure url="https://example.com/ep0.mp3" type="audio/mpeg"/>
    </item>
    <item>
      <title>Text Only</title>
      <pubDate>Mon, 15 Jan 2024 12:00:00 +0000</pubDate>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn parse_feed_extracts_title() {
        let feed = parse_feed(SAMPLE_FEED.as_bytes()).unwrap();
        assert_eq!(feed.title, "Test Podcast");
    }

    #[test]
    fn parse_feed_orders_newest_first_with_undated_last() {
        let feed = parse_feed(SAMPLE_FEED.as_bytes()).unwrap();
        let titles: Vec<_> = feed.episodes.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Newest Episode", "Text Only", "Older Episode", "Undated Episode"]
        );
        assert_eq!(feed.latest().unwrap().title, "Newest Episode");
    }

    #[test]
    fn parse_feed_keeps_items_without_enclosure() {
        let feed = parse_feed(SAMPLE_FEED.as_bytes()).unwrap();
        let text_only = feed.episodes.iter().find(|e| e.title == "Text Only").unwrap();
        assert!(text_only.enclosures.is_empty());

        let newest = &feed.episodes[0];
        assert_eq!(newest.enclosures[0].as_str(), "https://example.com/ep2.mp3");
    }

    #[test]
    fn parse_feed_collects_media_content_urls() {
        let feed_xml = r#"<?xml version="1.0"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
  <channel>
    <title>Media Only</title>
    <item>
      <title>Media Episode</title>
      <media:content url="https://example.com/ep.mp3" type="audio/mpeg"/>
    </item>
    <item>
      <title>Both</title>
      <enclosure url="https://example.com/main.mp3" type="audio/mpeg"/>
      <media:content url="https://example.com/main.mp3" type="audio/mpeg"/>
      <media:content url="https://example.com/alt.ogg" type="audio/ogg"/>
    </item>
  </channel>
</rss>"#;

        let feed = parse_feed(feed_xml.as_bytes()).unwrap();

        let media_only: Vec<_> = feed.episodes[0].enclosures.iter().map(Url::as_str).collect();
        assert_eq!(media_only, vec!["https://example.com/ep.mp3"]);

        let both: Vec<_> = feed.episodes[1].enclosures.iter().map(Url::as_str).collect();
        assert_eq!(
            both,
            vec!["https://example.com/main.mp3", "https://example.com/alt.ogg"]
        );
    }

    #[test]
    fn parse_feed_defaults_missing_title() {
        let feed_xml = r#"<?xml version="1.0"?>
<rss version="2.0">
  <channel>
    <title>Test</title>
    <item>
      <enclosure url="https://example.com/a.mp3" type="audio/mpeg"/>
    </item>
  </channel>
</rss>"#;

        let feed = parse_feed(feed_xml.as_bytes()).unwrap();
        assert_eq!(feed.episodes[0].title, "Untitled Episode");
    }

    #[test]
    fn parse_feed_rejects_non_rss() {
        let result = parse_feed(b"<html><body>Not a feed</body></html>");
        assert!(matches!(result, Err(FeedError::ParseFailed(_))));
    }

    #[test]
    fn relaxed_dates_are_accepted() {
        assert!(parse_relaxed_date("2024-01-01T10:00:00+01:00").is_some());
        assert!(parse_relaxed_date("yesterday").is_none());
    }
}
