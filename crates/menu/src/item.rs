//! Menu item model.

use serde::{Deserialize, Serialize};

use crate::error::MenuError;

/// A single labeled link in a menu tree.
///
/// `weight` orders siblings when a caller opts into weight sorting, and
/// `hidden` excludes the item from rendering without removing it from the
/// tree. An empty `children` list means the item is a leaf; a non-empty list
/// is rendered as a nested sublist inside the item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// Display title.
    pub title: String,

    /// Link destination path.
    pub url: String,

    /// Child items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,

    /// Sort weight (lower = higher priority).
    #[serde(default)]
    pub weight: i32,

    /// Whether the item is excluded from rendering.
    #[serde(default)]
    pub hidden: bool,
}

impl MenuItem {
    /// Create a leaf item, rejecting blank titles or urls.
    pub fn new(title: &str, url: &str) -> Result<Self, MenuError> {
        if title.trim().is_empty() {
            return Err(MenuError::InvalidItem(format!("blank title for url `{url}`")));
        }
        if url.trim().is_empty() {
            return Err(MenuError::InvalidItem(format!(
                "blank url for title `{title}`"
            )));
        }
        Ok(Self {
            title: title.to_string(),
            url: url.to_string(),
            children: Vec::new(),
            weight: 0,
            hidden: false,
        })
    }

    /// Attach a child list.
    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }

    /// Set the sort weight.
    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Exclude the item from rendering.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Whether this item has a child list.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
