//! User profiles
//!
//! Profiles live independently of presence: logging out (or being swept)
//! does not delete the profile, it only hides it from the online listing.

use std::collections::HashMap;

use parking_lot::RwLock;
use rand::Rng;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::Profile;

const DEFAULT_DESCRIPTION: &str = "No description yet.";

/// Fields accepted by a profile update
///
/// Missing description/avatar are overwritten with the empty string, not
/// preserved; only the display name falls back to the stored value.
#[derive(Debug, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Default)]
pub struct ProfileStore {
    profiles: RwLock<HashMap<String, Profile>>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a default profile on first login; returns the stored profile
    /// either way. The random color is assigned once and survives updates.
    pub fn ensure_default(&self, username: &str) -> Profile {
        self.profiles
            .write()
            .entry(username.to_string())
            .or_insert_with(|| {
                info!("Creating default profile for {}", username);
                Profile {
                    name: username.to_string(),
                    description: DEFAULT_DESCRIPTION.to_string(),
                    avatar: String::new(),
                    color: random_color(),
                }
            })
            .clone()
    }

    /// Merge an update into the stored profile
    ///
    /// A non-empty `name` replaces the stored one; description and avatar
    /// take the supplied value or the empty string when omitted.
    pub fn update(&self, username: &str, update: ProfileUpdate) -> Result<()> {
        if username.is_empty() {
            return Err(Error::MissingField("username"));
        }

        let mut profiles = self.profiles.write();
        let current = profiles.get(username).cloned().unwrap_or_default();
        let name = match update.name {
            Some(name) if !name.is_empty() => name,
            _ => current.name,
        };
        profiles.insert(
            username.to_string(),
            Profile {
                name,
                description: update.description.unwrap_or_default(),
                avatar: update.avatar.unwrap_or_default(),
                color: current.color,
            },
        );
        Ok(())
    }

    pub fn get(&self, username: &str) -> Option<Profile> {
        self.profiles.read().get(username).cloned()
    }

    /// Look up profiles for a set of usernames; unknown names are omitted
    pub fn get_all_for(&self, usernames: &[String]) -> HashMap<String, Profile> {
        let profiles = self.profiles.read();
        usernames
            .iter()
            .filter_map(|username| {
                profiles
                    .get(username)
                    .map(|profile| (username.clone(), profile.clone()))
            })
            .collect()
    }
}

/// Random 24-bit color, `#rrggbb`
fn random_color() -> String {
    format!("#{:06x}", rand::thread_rng().gen_range(0..0x100_0000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_default_fills_every_field() {
        let store = ProfileStore::new();
        let profile = store.ensure_default("frodo");

        assert_eq!(profile.name, "frodo");
        assert_eq!(profile.description, DEFAULT_DESCRIPTION);
        assert_eq!(profile.avatar, "");
        assert_eq!(profile.color.len(), 7);
        assert!(profile.color.starts_with('#'));
        assert!(profile.color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn ensure_default_keeps_existing_profile() {
        let store = ProfileStore::new();
        let first = store.ensure_default("frodo");
        let second = store.ensure_default("frodo");
        assert_eq!(first.color, second.color);
    }

    #[test]
    fn empty_update_resets_description_and_avatar() {
        let store = ProfileStore::new();
        store.ensure_default("frodo");
        store
            .update(
                "frodo",
                ProfileUpdate {
                    name: None,
                    description: Some("Ring bearer".to_string()),
                    avatar: Some("frodo.png".to_string()),
                },
            )
            .unwrap();

        // Omitted fields are overwritten with defaults, not preserved.
        // Intentional lenient-mode behavior inherited from the wire
        // contract; see DESIGN.md.
        store.update("frodo", ProfileUpdate::default()).unwrap();

        let profile = store.get("frodo").unwrap();
        assert_eq!(profile.name, "frodo");
        assert_eq!(profile.description, "");
        assert_eq!(profile.avatar, "");
    }

    #[test]
    fn empty_name_falls_back_to_stored_name() {
        let store = ProfileStore::new();
        store.ensure_default("frodo");
        store
            .update(
                "frodo",
                ProfileUpdate {
                    name: Some(String::new()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(store.get("frodo").unwrap().name, "frodo");
    }

    #[test]
    fn update_preserves_color() {
        let store = ProfileStore::new();
        let before = store.ensure_default("frodo");
        store
            .update(
                "frodo",
                ProfileUpdate {
                    name: Some("Mr. Underhill".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        let after = store.get("frodo").unwrap();
        assert_eq!(after.name, "Mr. Underhill");
        assert_eq!(after.color, before.color);
    }

    #[test]
    fn update_requires_username() {
        let store = ProfileStore::new();
        assert!(store.update("", ProfileUpdate::default()).is_err());
    }

    #[test]
    fn bulk_lookup_omits_unknown_names() {
        let store = ProfileStore::new();
        store.ensure_default("frodo");
        let found =
            store.get_all_for(&["frodo".to_string(), "gandalf".to_string()]);
        assert_eq!(found.len(), 1);
        assert!(found.contains_key("frodo"));
    }
}
