//! Nested navigation menu builder and renderer.
//!
//! Builds a tree of labeled links and renders it as a nested HTML unordered
//! list. Each list carries a `level-N` class encoding its nesting depth, and
//! each item is tagged `parent` and/or with an active-state class derived
//! from the current request path.
//!
//! ```
//! use std::sync::Arc;
//! use elenco_menu::{Menu, SiteBase};
//!
//! let site = Arc::new(SiteBase::new("https://example.com/")?);
//! let menu = Menu::new(site, "/blog/posts/5")?
//!     .add("Home", "/")
//!     .add("Blog", "/blog")
//!     .with_attr("class", "nav");
//! let markup = menu.render()?;
//! assert!(markup.starts_with("<ul class=\"nav level-1\">"));
//! assert!(markup.contains("<li class=\"active\"><a href=\"/blog\">Blog</a></li>"));
//! # Ok::<(), elenco_menu::MenuError>(())
//! ```

pub mod active;
pub mod error;
pub mod html;
pub mod item;
pub mod menu;
pub mod site;

pub use active::ActiveState;
pub use error::{MenuError, MenuResult};
pub use item::MenuItem;
pub use menu::Menu;
pub use site::{SiteBase, SiteUrlResolver};
