//! Site URL resolution.
//!
//! The menu never reads framework globals: the resolver and the current
//! request path are both injected at construction time.

use url::Url;

use crate::error::MenuError;

/// Resolves relative or site-absolute paths to canonical absolute site paths.
pub trait SiteUrlResolver: Send + Sync {
    /// Canonical absolute site path for `path` (e.g. `blog` → `/blog`).
    fn resolve(&self, path: &str) -> Result<String, MenuError>;
}

/// Resolver anchored on a site base URL.
///
/// Every path is treated as site-relative (a leading separator is ignored)
/// and joined against the base, so a base of `https://example.com/app/`
/// resolves both `blog/posts` and `/blog/posts` to `/app/blog/posts`. Only
/// the path and query portions of the joined URL are returned.
#[derive(Debug, Clone)]
pub struct SiteBase {
    base: Url,
}

impl SiteBase {
    /// Create a resolver from an absolute base URL.
    pub fn new(base: &str) -> Result<Self, MenuError> {
        let mut base = Url::parse(base).map_err(|e| MenuError::Unresolvable {
            path: base.to_string(),
            reason: e.to_string(),
        })?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }
}

impl SiteUrlResolver for SiteBase {
    fn resolve(&self, path: &str) -> Result<String, MenuError> {
        let joined = self
            .base
            .join(path.trim_start_matches('/'))
            .map_err(|e| MenuError::Unresolvable {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        let mut resolved = joined.path().to_string();
        if let Some(query) = joined.query() {
            resolved.push('?');
            resolved.push_str(query);
        }
        Ok(resolved)
    }
}
