use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{Level, debug, instrument};

use crate::menu::{MenuError, MenuTree, NavEntry};

// the configuration that ships with the site
pub const EMBEDDED_SITE_CONFIG: &str = include_str!("../site.toml");

// site configuration
//
// the navigation tree is configuration, not code, so it is validated here once before the ui
// mounts.  a broken menu is a startup failure and never something discovered mid-interaction
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub site: SiteMeta,
    pub menu: Arc<MenuTree>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteMeta {
    // short brand name shown in the header
    pub name: String,

    // used as the title suffix and og:site_name
    pub legal_name: String,

    pub tagline: String,

    // search-engine defaults for pages that do not override them
    pub default_title: String,
    pub description: String,
    pub keywords: String,
    pub image: String,

    // primary call to action in the header and drawer
    #[serde(default = "default_contact_path")]
    pub contact_path: String,
}

fn default_contact_path() -> String {
    String::from("/contact")
}

// the menu lives in the [[nav]] array of tables, next to the [site] table
#[derive(Debug, Deserialize, Serialize)]
struct TomlSiteFile {
    site: SiteMeta,
    nav: Vec<NavEntry>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid navigation menu: {0}")]
    Menu(#[from] MenuError),
}

impl SiteConfig {
    #[instrument(level = Level::DEBUG, skip(doc))]
    pub fn from_toml(doc: &str) -> Result<Self, ConfigError> {
        debug!("parsing site config");

        let data: TomlSiteFile = toml::from_str(doc)?;
        let menu = MenuTree::new(data.nav)?;

        debug!({ entries = menu.entries().len() }, "successfully parsed site config");
        Ok(SiteConfig {
            site: data.site,
            menu: Arc::new(menu),
        })
    }

    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml(EMBEDDED_SITE_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = r#"
[site]
name = "Acme"
legal_name = "Acme Ltd"
tagline = "things"
default_title = "Acme"
description = "d"
keywords = "k"
image = "/og.jpg"
"#;

    #[test]
    fn shipped_config_is_valid() {
        let config = SiteConfig::embedded().expect("embedded site config");

        assert_eq!(config.site.contact_path, "/contact");
        let products = config.menu.mega_entry().expect("an expandable entry");
        assert_eq!(products.name, "Products");
        assert_eq!(products.categories()[0].name, "Featured Products");
        assert!(products.find_category("Databases").is_some());
        assert!(products.find_category("Compute").is_some());
    }

    #[test]
    fn parses_links_and_nested_categories() {
        let doc = format!(
            r#"{SITE}
[[nav]]
name = "About"
path = "/about"

[[nav]]
name = "Products"
path = "/products"

[[nav.categories]]
name = "Compute"
description = "servers"

[[nav.categories.items]]
name = "EC2"
path = "/products/compute/ec2"
"#
        );

        let config = SiteConfig::from_toml(&doc).unwrap();
        assert!(!config.menu.find_entry("About").unwrap().is_expandable());

        let compute = config
            .menu
            .find_entry("Products")
            .and_then(|e| e.find_category("Compute"))
            .unwrap();
        assert_eq!(compute.description.as_deref(), Some("servers"));
        assert_eq!(compute.items[0].path, "/products/compute/ec2");
    }

    #[test]
    fn empty_categories_fail_at_load() {
        let doc = format!(
            r#"{SITE}
[[nav]]
name = "Products"
path = "/products"
categories = []
"#
        );

        let err = SiteConfig::from_toml(&doc).unwrap_err();
        assert!(matches!(err, ConfigError::Menu(MenuError::EmptyCategories { .. })));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = SiteConfig::from_toml("[site").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        // missing the [[nav]] table entirely
        let err = SiteConfig::from_toml(SITE).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
