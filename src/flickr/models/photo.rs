use serde::Deserialize;

/// One element of a gallery's photo array. The endpoint sends many more
/// fields; only the ones this crate reads are decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoRecord {
    title: Option<String>,
    url_m: Option<String>,
}

impl PhotoRecord {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Medium-size rendition URL. Only present when the listing was
    /// requested with `extras=url_m`.
    pub fn medium_url(&self) -> Option<&str> {
        self.url_m.as_deref()
    }
}

/// The photo chosen from a listing, resolved into displayable parts.
/// Owned by the caller that requested it; nothing is retained between
/// grabs.
#[derive(Debug, Clone)]
pub struct PhotoSelection {
    title: String,
    medium_url: String,
}

impl PhotoSelection {
    pub(crate) fn new(title: String, medium_url: String) -> Self {
        Self { title, medium_url }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn medium_url(&self) -> &str {
        &self.medium_url
    }
}
