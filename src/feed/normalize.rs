// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use url::Url;

use crate::error::FeedError;

/// Shortest input that can still be a usable feed address
const MIN_URL_LENGTH: usize = 8;

/// Schemes that podcast directories use as aliases for plain HTTP
const HTTP_ALIASES: [&str; 3] = ["feed", "itpc", "itms"];

const SUPPORTED_SCHEMES: [&str; 4] = ["http", "https", "ftp", "file"];

/// Bring a user-supplied feed address into canonical form.
///
/// Adds `http://` when no scheme is given, lowercases scheme and host,
/// maps `feed://`, `itpc://` and `itms://` to `http://`, and rejects anything
/// that is not http, https, ftp or file.
pub fn normalize_feed_url(raw: &str) -> Result<Url, FeedError> {
    let trimmed = raw.trim();
    if trimmed.len() < MIN_URL_LENGTH {
        return Err(FeedError::InvalidUrl(raw.to_string()));
    }

    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    let (scheme, rest) = with_scheme
        .split_once("://")
        .ok_or_else(|| FeedError::InvalidUrl(raw.to_string()))?;

    let mut scheme = scheme.to_ascii_lowercase();
    if HTTP_ALIASES.contains(&scheme.as_str()) {
        scheme = "http".to_string();
    }
    if !SUPPORTED_SCHEMES.contains(&scheme.as_str()) {
        return Err(FeedError::InvalidUrl(raw.to_string()));
    }

    // The url crate lowercases the host and turns an empty path into "/"
    Url::parse(&format!("{scheme}://{rest}")).map_err(|_| FeedError::InvalidUrl(raw.to_string()))
}
