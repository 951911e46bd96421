//! Canonical vocus.cc URL templates.

pub const DEFAULT_SITE_BASE: &str = "https://vocus.cc";

/// Builds public URLs from a fixed site origin. Pure string interpolation;
/// identifiers and tags are inserted as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLinks {
    base: String,
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_BASE)
    }
}

impl SiteLinks {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self { base: base.trim_end_matches('/').to_string() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `{base}/{type}/{id}`, e.g. `https://vocus.cc/article/123`.
    pub fn content_url(&self, kind: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base, kind, id)
    }

    pub fn user_url(&self, id: &str) -> String {
        format!("{}/user/{}", self.base, id)
    }

    pub fn salon_url(&self, id: &str) -> String {
        format!("{}/salon/{}", self.base, id)
    }

    pub fn tag_url(&self, tag: &str) -> String {
        format!("{}/tags/{}", self.base, tag)
    }
}
