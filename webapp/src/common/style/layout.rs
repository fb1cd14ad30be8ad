pub const LAYOUT_STYLES: &str = r#"
/* Skip link */
.skip-link {
  position: absolute;
  left: var(--space-4);
  top: -100px;
  z-index: 100;
  background: var(--primary);
  color: white;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
}

.skip-link:focus {
  top: var(--space-2);
}

/* Header */
.site-header {
  position: sticky;
  top: 0;
  z-index: 40;
  background-color: var(--surface);
  border-bottom: 1px solid var(--border);
}

.header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-4);
  height: var(--header-height);
  max-width: var(--content-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.brand {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--text-primary);
}

.desktop-nav {
  display: flex;
  align-items: center;
  gap: var(--space-1);
}

.nav-link,
.nav-trigger {
  display: inline-flex;
  align-items: center;
  gap: var(--space-1);
  padding: var(--space-2) var(--space-3);
  border: none;
  border-radius: var(--radius-md);
  background: transparent;
  color: var(--text-secondary);
  font: inherit;
  font-weight: 500;
  cursor: pointer;
}

.nav-link:hover,
.nav-trigger:hover {
  color: var(--text-primary);
  background-color: var(--surface-muted);
  text-decoration: none;
}

.nav-link.active,
.nav-trigger.active {
  color: var(--primary);
}

.header-actions {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

/* Backdrop behind any open menu */
.menu-backdrop {
  position: fixed;
  inset: var(--header-height) 0 0 0;
  z-index: 30;
  background-color: var(--backdrop);
}

.menu-backdrop.full {
  inset: 0;
}

/* Mega menu */
.mega-menu {
  position: absolute;
  left: 0;
  right: 0;
  top: var(--header-height);
  z-index: 45;
  background-color: var(--surface);
  border-bottom: 1px solid var(--border);
  box-shadow: var(--shadow-lg);
}

.mega-inner {
  display: grid;
  grid-template-columns: 280px 1fr;
  max-width: var(--content-width);
  margin: 0 auto;
  min-height: 360px;
}

.mega-categories {
  list-style: none;
  border-right: 1px solid var(--border);
  padding: var(--space-4) 0;
  background-color: var(--surface-muted);
}

.mega-category {
  display: flex;
  width: 100%;
  justify-content: space-between;
  align-items: center;
  padding: var(--space-2) var(--space-4);
  border: none;
  background: transparent;
  color: var(--text-secondary);
  font: inherit;
  text-align: left;
  cursor: pointer;
}

.mega-category.active {
  color: var(--primary);
  background-color: var(--surface);
  font-weight: 600;
}

.mega-panel {
  position: relative;
  padding: var(--space-6) var(--space-8);
}

.mega-panel-title {
  font-size: 1.25rem;
  font-weight: 600;
}

.mega-panel-description {
  color: var(--text-secondary);
  margin-top: var(--space-1);
}

.mega-browse {
  display: inline-block;
  margin-top: var(--space-1);
  font-size: 0.875rem;
  font-weight: 600;
}

.mega-items {
  list-style: none;
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: var(--space-4);
  margin-top: var(--space-6);
}

.mega-item {
  display: block;
  padding: var(--space-3);
  border-radius: var(--radius-md);
  color: var(--text-primary);
}

.mega-item:hover {
  background-color: var(--surface-muted);
  text-decoration: none;
}

.mega-item-description {
  display: block;
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.mega-close {
  position: absolute;
  top: var(--space-4);
  right: var(--space-4);
}

/* Mobile drawer */
.drawer {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  z-index: 50;
  width: var(--drawer-width);
  display: flex;
  flex-direction: column;
  background-color: var(--surface);
  box-shadow: var(--shadow-lg);
}

.drawer-header {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  height: var(--header-height);
  padding: 0 var(--space-2);
  border-bottom: 1px solid var(--border);
}

.drawer-title {
  flex: 1;
  font-weight: 600;
}

.drawer-list {
  list-style: none;
  flex: 1;
  overflow-y: auto;
  padding: var(--space-2) 0;
}

.drawer-row {
  display: flex;
  width: 100%;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-3) var(--space-4);
  border: none;
  background: transparent;
  color: var(--text-primary);
  font: inherit;
  text-align: left;
  cursor: pointer;
}

.drawer-row:hover {
  background-color: var(--surface-muted);
  text-decoration: none;
}

.drawer-row.active {
  color: var(--primary);
  font-weight: 600;
}

.drawer-row-description {
  display: block;
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.drawer-footer {
  padding: var(--space-4);
  border-top: 1px solid var(--border);
}

/* Main content */
.site-main {
  min-height: calc(100vh - var(--header-height));
}

.container {
  max-width: var(--content-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

/* Footer */
.site-footer {
  border-top: 1px solid var(--border);
  background-color: var(--surface-muted);
  padding: var(--space-12) 0 var(--space-8);
  color: var(--text-secondary);
}

.footer-grid {
  display: grid;
  grid-template-columns: 2fr repeat(auto-fit, minmax(160px, 1fr));
  gap: var(--space-8);
}

.footer-heading {
  color: var(--text-primary);
  font-weight: 600;
  margin-bottom: var(--space-3);
}

.footer-links {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.footer-links a {
  color: var(--text-secondary);
}

.footer-bottom {
  margin-top: var(--space-8);
  padding-top: var(--space-4);
  border-top: 1px solid var(--border);
  font-size: 0.875rem;
}

@media (max-width: 1023px) {
  .footer-grid {
    grid-template-columns: 1fr 1fr;
  }
}
"#;
