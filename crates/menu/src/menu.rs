//! Menu tree builder and renderer.
//!
//! A [`Menu`] accumulates a tree of labeled links, compares each link's
//! normalized site path against the current request path, and serializes the
//! tree as nested `<ul>`/`<li>` markup. Each list carries a `level-N` class
//! encoding its nesting depth; each item carries `parent` and active-state
//! classes where applicable.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::active;
use crate::error::MenuError;
use crate::html;
use crate::item::MenuItem;
use crate::site::SiteUrlResolver;

/// A nested navigation menu bound to the current request path.
///
/// The current path is resolved and normalized once at construction; item
/// urls are resolved lazily while rendering. Blank items (empty title or
/// url) never enter the tree: the fluent `add` operations skip them with a
/// warning, and [`MenuItem::new`] rejects them outright.
pub struct Menu {
    items: Vec<MenuItem>,
    attrs: Vec<(String, String)>,
    current: String,
    resolver: Arc<dyn SiteUrlResolver>,
}

impl Menu {
    /// Create an empty menu for the request currently being rendered.
    pub fn new(resolver: Arc<dyn SiteUrlResolver>, request_path: &str) -> Result<Self, MenuError> {
        let current = active::normalize(&resolver.resolve(request_path)?);
        Ok(Self {
            items: Vec::new(),
            attrs: Vec::new(),
            current,
            resolver,
        })
    }

    /// Create a menu pre-populated from an existing item array.
    ///
    /// Blank items anywhere in the tree are dropped with a warning.
    pub fn from_items(
        resolver: Arc<dyn SiteUrlResolver>,
        request_path: &str,
        mut items: Vec<MenuItem>,
    ) -> Result<Self, MenuError> {
        retain_valid(&mut items);
        let mut menu = Self::new(resolver, request_path)?;
        menu.items = items;
        Ok(menu)
    }

    /// Create a menu from a JSON array of item definitions.
    ///
    /// A malformed document is a [`MenuError::Parse`]; well-formed entries
    /// with a blank title or url are skipped, not fatal.
    pub fn from_json(
        resolver: Arc<dyn SiteUrlResolver>,
        request_path: &str,
        json: &str,
    ) -> Result<Self, MenuError> {
        let items: Vec<MenuItem> = serde_json::from_str(json)?;
        debug!(items = items.len(), "loaded menu definitions");
        Self::from_items(resolver, request_path, items)
    }

    /// Append a leaf item.
    pub fn add(mut self, title: &str, url: &str) -> Self {
        match MenuItem::new(title, url) {
            Ok(item) => self.items.push(item),
            Err(e) => warn!(error = %e, "skipping menu item"),
        }
        self
    }

    /// Append an item whose children are the supplied submenu's items.
    ///
    /// An empty submenu produces a leaf; the submenu's attributes are
    /// discarded, as only the outermost list carries attributes.
    pub fn add_submenu(mut self, title: &str, url: &str, children: Menu) -> Self {
        match MenuItem::new(title, url) {
            Ok(item) => self.items.push(item.with_children(children.items)),
            Err(e) => warn!(error = %e, "skipping menu item"),
        }
        self
    }

    /// Append an already-constructed item.
    pub fn add_item(mut self, item: MenuItem) -> Self {
        if item.title.trim().is_empty() || item.url.trim().is_empty() {
            warn!(title = %item.title, url = %item.url, "skipping blank menu item");
            return self;
        }
        self.items.push(item);
        self
    }

    /// Set a rendering attribute for the outer list, replacing any existing
    /// value for the key. First-set order is preserved.
    pub fn set_attr(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.attrs.iter_mut().find(|entry| entry.0 == key) {
            entry.1 = value.to_string();
        } else {
            self.attrs.push((key.to_string(), value.to_string()));
        }
    }

    /// Fluent form of [`Menu::set_attr`].
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Get a rendering attribute, if set.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|entry| entry.0 == key)
            .map(|entry| entry.1.as_str())
    }

    /// Items at the top level of the menu.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Number of top-level items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the menu has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Normalized current request path the menu was constructed with.
    pub fn current_path(&self) -> &str {
        &self.current
    }

    /// Stable-sort items and their descendants by weight, lower first.
    ///
    /// Insertion order is preserved among equal weights, and is never
    /// reordered unless this is called.
    pub fn sort_by_weight(&mut self) {
        sort_items(&mut self.items);
    }

    /// Render the menu with its configured attributes.
    pub fn render(&self) -> Result<String, MenuError> {
        self.render_level(&self.items, Some(&self.attrs), 1)
    }

    /// Render the menu with explicit attributes for the outer list.
    ///
    /// Attributes apply to the outermost list only; nested lists always
    /// carry just their computed `level-N` class.
    pub fn render_with(&self, attrs: &[(String, String)]) -> Result<String, MenuError> {
        self.render_level(&self.items, Some(attrs), 1)
    }

    /// Render one list of items at the given depth (root is 1).
    fn render_level(
        &self,
        items: &[MenuItem],
        attrs: Option<&[(String, String)]>,
        depth: usize,
    ) -> Result<String, MenuError> {
        let mut out = String::new();
        out.push_str(&format!(
            "<ul{}>",
            html::attributes(&level_attrs(attrs, depth))
        ));

        for item in items {
            if item.hidden {
                continue;
            }
            let resolved = self.resolver.resolve(&item.url)?;
            let link = active::normalize(&resolved);

            let mut classes: Vec<&str> = Vec::new();
            if item.has_children() {
                classes.push("parent");
            }
            if let Some(state) = active::classify(&self.current, &link) {
                classes.push(state.css_class());
            }

            if classes.is_empty() {
                out.push_str("<li>");
            } else {
                out.push_str(&format!("<li class=\"{}\">", classes.join(" ")));
            }
            out.push_str(&html::anchor(&resolved, &item.title));
            if item.has_children() {
                out.push_str(&self.render_level(&item.children, None, depth + 1)?);
            }
            out.push_str("</li>");
        }

        out.push_str("</ul>");
        Ok(out)
    }
}

impl fmt::Display for Menu {
    /// The default textual representation is [`Menu::render`]. A render
    /// failure cannot propagate through `Display`, so it is logged and
    /// replaced with an HTML comment placeholder; fallible callers should
    /// use [`Menu::render`] directly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Ok(markup) => f.write_str(&markup),
            Err(e) => {
                error!(error = %e, "menu render failed");
                f.write_str("<!-- menu unavailable -->")
            }
        }
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("items", &self.items)
            .field("attrs", &self.attrs)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

/// Merge the computed level class into the attribute list for one `<ul>`.
///
/// An existing `class` value keeps its position and gains the level class;
/// otherwise `class` is appended after the other attributes.
fn level_attrs(attrs: Option<&[(String, String)]>, depth: usize) -> Vec<(String, String)> {
    let level = format!("level-{depth}");
    let mut merged: Vec<(String, String)> = attrs.map(<[_]>::to_vec).unwrap_or_default();
    match merged.iter_mut().find(|entry| entry.0 == "class") {
        Some(entry) if entry.1.is_empty() => entry.1 = level,
        Some(entry) => {
            entry.1.push(' ');
            entry.1.push_str(&level);
        }
        None => merged.push(("class".to_string(), level)),
    }
    merged
}

/// Drop blank items anywhere in the tree, with a warning per item.
fn retain_valid(items: &mut Vec<MenuItem>) {
    items.retain(|item| {
        let valid = !item.title.trim().is_empty() && !item.url.trim().is_empty();
        if !valid {
            warn!(title = %item.title, url = %item.url, "skipping blank menu item");
        }
        valid
    });
    for item in items {
        retain_valid(&mut item.children);
    }
}

/// Recursive stable sort by weight.
fn sort_items(items: &mut [MenuItem]) {
    items.sort_by_key(|item| item.weight);
    for item in items {
        sort_items(&mut item.children);
    }
}
