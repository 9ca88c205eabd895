use super::photo::PhotoRecord;

/// A validated gallery listing: the reported status token plus the decoded
/// photo records.
#[derive(Debug, Clone)]
pub struct GalleryResponse {
    stat: String,
    photos: Vec<PhotoRecord>,
}

impl GalleryResponse {
    pub(crate) fn new(stat: String, photos: Vec<PhotoRecord>) -> Self {
        Self { stat, photos }
    }

    pub fn stat(&self) -> &str {
        &self.stat
    }

    pub fn photos(&self) -> &[PhotoRecord] {
        &self.photos
    }
}
