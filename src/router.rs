//! Route table loading.
//!
//! Builds a [`RouteTrie`] from the routes declared in the configuration,
//! with each route's target name as payload.

use tracing::info;

use crate::config::AlaConfig;
use crate::data_structures::route_trie::RouteTrie;
use crate::error::AlaResult;

/// Builds a trie containing every configured route.
///
/// # Errors
///
/// Fails on the first route the trie rejects, e.g. a duplicate or a
/// malformed pattern.
pub fn build_trie(config: &AlaConfig) -> AlaResult<RouteTrie<String>> {
    let mut trie = RouteTrie::with_config(config.trie.to_trie_config()?)?;
    for entry in &config.routes {
        trie.insert_route(&entry.path, entry.target.clone())?;
    }
    info!(routes = trie.len(), "route table loaded");
    Ok(trie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RouteEntry;
    use crate::error::AlaError;
    use crate::data_structures::route_trie::RouteTrieError;

    fn entry(path: &str, target: &str) -> RouteEntry {
        RouteEntry {
            path: path.to_string(),
            target: target.to_string(),
        }
    }

    #[test]
    fn test_build_trie_from_config() {
        let config = AlaConfig {
            routes: vec![entry("/user/:id", "user"), entry("/static/*", "static")],
            ..AlaConfig::default()
        };
        let mut trie = build_trie(&config).unwrap();
        assert_eq!(trie.len(), 2);
        assert!(trie.matches("/static/css/site.css"));
        assert_eq!(trie.hit_data().map(String::as_str), Some("static"));
    }

    #[test]
    fn test_duplicate_route_fails() {
        let config = AlaConfig {
            routes: vec![entry("/a", "one"), entry("/a/", "two")],
            ..AlaConfig::default()
        };
        let err = build_trie(&config).unwrap_err();
        assert!(matches!(
            err,
            AlaError::Trie(RouteTrieError::RouteAlreadyExists(_))
        ));
    }

    #[test]
    fn test_custom_syntax_from_settings() {
        let mut config = AlaConfig {
            routes: vec![entry("sensors.{room.temp", "temp")],
            ..AlaConfig::default()
        };
        config.trie.delimiter = ".".to_string();
        config.trie.parameter_marker = "{".to_string();

        let mut trie = build_trie(&config).unwrap();
        assert!(trie.matches("sensors.lab.temp"));
        assert_eq!(trie.hit_parameters().get("room").map(String::as_str), Some("lab"));
    }
}
