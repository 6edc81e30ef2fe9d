//! Bundled demo batch: eight character profiles over five traits.

use crate::loader::{profiles_from_json, Result};
use traitsim_core::Profile;

/// The embedded demo batch definition.
pub const DEMO_PROFILES_JSON: &str = include_str!("demo_profiles.json");

/// The five trait dimensions used by the demo batch.
pub const DEMO_TRAITS: [&str; 5] = ["trust", "lawfulness", "pace", "extraversion", "idealism"];

/// Parse the bundled demo batch.
///
/// The embedded definition is covered by tests, so this only fails if the
/// build itself shipped a broken asset.
pub fn demo_profiles() -> Result<Vec<Profile>> {
    profiles_from_json(DEMO_PROFILES_JSON)
}
