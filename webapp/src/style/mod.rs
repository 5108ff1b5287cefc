use constcat::concat;

mod components;
mod pages;
mod variables;

use components::BASE_COMPONENTS;
use pages::{GALLERY_STYLES, HOME_STYLES};
use variables::CSS_VARIABLES;

pub const APP_STYLES: &str = concat!(
    r#"
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  min-height: 100vh;
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    HOME_STYLES,
    GALLERY_STYLES,
    r#"
.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.app-header {
  position: sticky;
  top: 0;
  z-index: 10;
  background-color: var(--surface);
  border-bottom: 1px solid var(--border);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.logo a {
  color: var(--text-primary);
  font-weight: 600;
  font-size: 1.125rem;
}

.nav-links {
  display: flex;
  gap: var(--space-4);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
}

.nav-link:hover {
  color: var(--text-primary);
  background-color: var(--surface-raised);
  text-decoration: none;
}

.nav-link.active {
  color: var(--primary-light);
  background-color: rgba(59, 130, 246, 0.1);
}

.page-content {
  padding-top: var(--space-10);
  padding-bottom: var(--space-10);
}
"#
);
