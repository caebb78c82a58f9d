// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use url::Url;

use crate::error::EnclosureError;
use crate::feed::Episode;
use crate::http::HttpClient;

/// Turn the selected episode into the URL handed to the player.
///
/// Takes the first enclosure, follows any redirects to the real media file
/// and downgrades https to http, which the fallback player needs.
pub async fn resolve_enclosure<C: HttpClient + ?Sized>(
    client: &C,
    episode: &Episode,
) -> Result<Url, EnclosureError> {
    let enclosure = episode
        .enclosures
        .first()
        .ok_or_else(|| EnclosureError::MissingEnclosure {
            title: episode.title.clone(),
        })?;

    let resolved = client.resolve_url(enclosure.as_str()).await?;
    let resolved = Url::parse(&resolved)?;

    Ok(downgrade_scheme(resolved))
}

/// Rewrite an https URL to http; other schemes pass through untouched
pub fn downgrade_scheme(mut url: Url) -> Url {
    if url.scheme() == "https" {
        // Both schemes are "special" in the URL standard, so this cannot fail
        let _ = url.set_scheme("http");
    }
    url
}
