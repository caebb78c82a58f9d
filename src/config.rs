// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// One configured podcast: the name the user says and the feed it maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSlot {
    /// 1-based slot position in the settings
    pub position: usize,
    pub name: String,
    pub url: String,
}

/// The three podcast slots of the skill settings.
///
/// Field names follow the keys the host stores in its settings file. A slot
/// with an empty (or missing) name or feed is unused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedConfig {
    #[serde(default)]
    pub nameone: String,
    #[serde(default)]
    pub feedone: String,
    #[serde(default)]
    pub nametwo: String,
    #[serde(default)]
    pub feedtwo: String,
    #[serde(default)]
    pub namethree: String,
    #[serde(default)]
    pub feedthree: String,
}

impl FeedConfig {
    /// Build a config from up to three (name, url) pairs; extra pairs are ignored
    pub fn from_pairs<N, U>(pairs: impl IntoIterator<Item = (N, U)>) -> Self
    where
        N: Into<String>,
        U: Into<String>,
    {
        let mut config = Self::default();
        let mut fields = [
            (&mut config.nameone, &mut config.feedone),
            (&mut config.nametwo, &mut config.feedtwo),
            (&mut config.namethree, &mut config.feedthree),
        ];
        for ((name, url), (name_field, url_field)) in pairs.into_iter().zip(fields.iter_mut()) {
            **name_field = name.into();
            **url_field = url.into();
        }
        config
    }

    /// Read the settings JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::JsonParseFailed {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// All configured slots in settings order, skipping unused ones
    pub fn slots(&self) -> Vec<FeedSlot> {
        [
            (&self.nameone, &self.feedone),
            (&self.nametwo, &self.feedtwo),
            (&self.namethree, &self.feedthree),
        ]
        .into_iter()
        .enumerate()
        .filter(|(_, (name, url))| !name.trim().is_empty() && !url.trim().is_empty())
        .map(|(index, (name, url))| FeedSlot {
            position: index + 1,
            name: name.trim().to_string(),
            url: url.trim().to_string(),
        })
        .collect()
    }
}
