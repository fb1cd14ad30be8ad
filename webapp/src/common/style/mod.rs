use constcat::concat;

mod components;
mod layout;
mod pages;
mod variables;

pub use components::BASE_COMPONENTS;
pub use layout::LAYOUT_STYLES;
pub use pages::PAGE_STYLES;
pub use variables::CSS_VARIABLES;

pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  color-scheme: light dark;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

:focus-visible {
  outline: 2px solid var(--primary-light);
  outline-offset: 2px;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    LAYOUT_STYLES,
    PAGE_STYLES,
);
