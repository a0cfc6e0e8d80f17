//! # a3sm Mod Reference Resolver
//!
//! File: cli/src/core/modref.rs
//!
//! ## Overview
//!
//! Users refer to workshop mods either by raw numeric ID or by pasting the
//! workshop page URL (which carries the ID in its `id` query parameter).
//! This module normalizes both forms into the canonical ID string.
//!
//! ## Behavior
//!
//! The two entry points encode an asymmetry the commands depend on:
//! - [`resolve`] (the "add" path): a token already present in the known
//!   set is returned unchanged; otherwise the URL form is parsed. The
//!   extracted ID is *not* checked against the known set, because a mod
//!   being added is expected to be absent from it.
//! - [`resolve_installed`] (the enable/disable/delete paths): same
//!   resolution, but the result must additionally be a member of the known
//!   set, since these operations only make sense for mods that are
//!   actually installed.
//!
use crate::core::error::{A3smError, Result};
use std::collections::BTreeSet;
use tracing::debug;
use url::Url;

/// Resolves a user-supplied mod token into a canonical workshop ID.
///
/// A token that is already a member of `known` resolves to itself.
/// Otherwise the token is parsed as a URL and the first `id` query
/// parameter is the resolved ID. Anything else fails with
/// [`A3smError::UnresolvableReference`].
pub fn resolve(token: &str, known: &BTreeSet<String>) -> Result<String> {
    if known.contains(token) {
        return Ok(token.to_string());
    }
    if let Some(id) = extract_id_from_url(token) {
        debug!("Resolved mod URL '{}' to id {}", token, id);
        return Ok(id);
    }
    Err(A3smError::UnresolvableReference {
        token: token.to_string(),
    }
    .into())
}

/// Resolves a token and requires the result to be present in `known`.
pub fn resolve_installed(token: &str, known: &BTreeSet<String>) -> Result<String> {
    let id = resolve(token, known)?;
    if !known.contains(&id) {
        return Err(A3smError::UnresolvableReference {
            token: token.to_string(),
        }
        .into());
    }
    Ok(id)
}

/// Pulls the `id` query parameter out of a workshop URL, if the token
/// parses as a URL at all.
fn extract_id_from_url(token: &str) -> Option<String> {
    let url = Url::parse(token).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn known(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_known_id_resolves_to_itself() {
        let ids = known(&["450814997"]);
        assert_eq!(resolve("450814997", &ids).unwrap(), "450814997");
    }

    #[test]
    fn test_url_id_extraction() {
        let ids = known(&[]);
        let resolved = resolve(
            "https://steamcommunity.com/sharedfiles/filedetails/?id=12345",
            &ids,
        )
        .unwrap();
        assert_eq!(resolved, "12345");
    }

    #[test]
    fn test_url_id_extraction_ignores_other_parameters() {
        let ids = known(&[]);
        let resolved = resolve(
            "https://steamcommunity.com/sharedfiles/filedetails/?searchtext=ace&id=12345&insideModal=1",
            &ids,
        )
        .unwrap();
        assert_eq!(resolved, "12345");
    }

    #[test]
    fn test_add_path_does_not_require_membership() {
        // A freshly added mod is expected to be absent from the set.
        let ids = known(&["111"]);
        let resolved = resolve("https://example.com/?id=999", &ids).unwrap();
        assert_eq!(resolved, "999");
    }

    #[test]
    fn test_plain_token_without_membership_fails() {
        let ids = known(&["111"]);
        let err = resolve("999", &ids).unwrap_err();
        assert!(err.to_string().contains("'999'"));
    }

    #[test]
    fn test_url_without_id_parameter_fails() {
        let ids = known(&[]);
        assert!(resolve("https://example.com/?foo=bar", &ids).is_err());
    }

    #[test]
    fn test_resolve_installed_requires_membership() {
        let ids = known(&["111"]);
        // Member: fine, whether given raw or as a URL.
        assert_eq!(resolve_installed("111", &ids).unwrap(), "111");
        assert_eq!(
            resolve_installed("https://example.com/?id=111", &ids).unwrap(),
            "111"
        );
        // Resolvable but not installed: rejected.
        assert!(resolve_installed("https://example.com/?id=999", &ids).is_err());
    }
}
