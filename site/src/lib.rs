pub mod config;
pub mod content;
pub mod effects;
pub mod menu;
pub mod nav;
pub mod seo;
pub mod theme;

pub use config::{ConfigError, SiteConfig, SiteMeta};
pub use menu::{MenuCategory, MenuError, MenuItem, MenuTree, NavEntry};
pub use nav::{ClickRegion, DeviceClass, NavController, NavigationLevel, NavigationState};
