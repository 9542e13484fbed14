//! Active-trail classification for menu links.
//!
//! Paths are compared in normalized form: absolute site paths with leading
//! and trailing separators removed. The first segment of a path is a
//! category discriminator and is excluded from prefix comparison.

use std::sync::LazyLock;

use regex::Regex;

/// Trailing default `index` segment, optionally wrapped in separators.
///
/// # Panics
///
/// Panics if the hard-coded regex literal is invalid (impossible in practice).
#[allow(clippy::expect_used)]
static INDEX_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/?index/?$").expect("valid regex literal"));

/// How a menu link relates to the current request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveState {
    /// The link is the page being viewed.
    Current,
    /// The link is an ancestor of the page being viewed.
    Trail,
}

impl ActiveState {
    /// CSS class emitted on the `<li>` for this state.
    pub fn css_class(self) -> &'static str {
        match self {
            ActiveState::Current => "active current",
            ActiveState::Trail => "active",
        }
    }
}

/// Strip leading and trailing path separators.
pub fn normalize(path: &str) -> String {
    path.trim_matches('/').to_string()
}

/// Classify `link` against `current`; both must be normalized paths.
///
/// The exact rule fires when the paths are equal, or when removing a
/// trailing default `index` segment from `current` makes them equal. The
/// prefix rule walks the link's segments past the leading discriminator and
/// requires each to be matched by the corresponding current segment. A link
/// with no segments past the discriminator matches as [`ActiveState::Trail`]
/// only when the discriminators themselves agree, so a bare top-level link
/// is never vacuously active everywhere.
pub fn classify(current: &str, link: &str) -> Option<ActiveState> {
    if current == link || INDEX_SUFFIX.replace(current, "") == link {
        return Some(ActiveState::Current);
    }

    let mut current_segments = current.split('/');
    let mut link_segments = link.split('/');
    let current_head = current_segments.next();
    let link_head = link_segments.next();

    let link_rest: Vec<&str> = link_segments.collect();
    if link_rest.is_empty() {
        if !link.is_empty() && link_head == current_head {
            return Some(ActiveState::Trail);
        }
        return None;
    }

    let current_rest: Vec<&str> = current_segments.collect();
    for (i, segment) in link_rest.iter().enumerate() {
        match current_rest.get(i) {
            Some(cur) if !cur.is_empty() && cur == segment => {}
            _ => return None,
        }
    }

    Some(ActiveState::Trail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_exact_match() {
        assert_eq!(classify("blog", "blog"), Some(ActiveState::Current));
        assert_eq!(classify("", ""), Some(ActiveState::Current));
    }

    #[test]
    fn test_classify_strips_trailing_index() {
        assert_eq!(classify("blog/index", "blog"), Some(ActiveState::Current));
        assert_eq!(classify("index", ""), Some(ActiveState::Current));
    }

    #[test]
    fn test_classify_prefix_path() {
        assert_eq!(
            classify("blog/posts/5", "blog/posts"),
            Some(ActiveState::Trail)
        );
        assert_eq!(
            classify("admin/content/types/article", "admin/content"),
            Some(ActiveState::Trail)
        );
    }

    #[test]
    fn test_classify_shorter_current_no_match() {
        assert_eq!(classify("blog", "blog/posts"), None);
    }

    #[test]
    fn test_classify_unrelated_no_match() {
        assert_eq!(classify("blog/posts/5", "shop"), None);
        assert_eq!(classify("blog/posts/5", "shop/cart"), None);
    }

    #[test]
    fn test_classify_bare_link_matches_own_discriminator() {
        assert_eq!(classify("blog/posts/5", "blog"), Some(ActiveState::Trail));
    }

    #[test]
    fn test_classify_empty_link_only_matches_empty_current() {
        assert_eq!(classify("blog", ""), None);
        assert_eq!(classify("", "blog"), None);
    }

    #[test]
    fn test_normalize_trims_separators() {
        assert_eq!(normalize("/blog/posts/"), "blog/posts");
        assert_eq!(normalize("blog"), "blog");
        assert_eq!(normalize("/"), "");
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(ActiveState::Current.css_class(), "active current");
        assert_eq!(ActiveState::Trail.css_class(), "active");
    }
}
