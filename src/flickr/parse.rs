use rand::Rng;
use serde_json::Value;

use super::error::Error;
use super::models::{GalleryResponse, PhotoRecord, PhotoSelection};
use super::result::Result;

/// Response field names, as spelled by the endpoint.
pub mod key {
    pub const STAT: &str = "stat";
    pub const PHOTOS: &str = "photos";
    pub const PHOTO: &str = "photo";
    pub const MEDIUM_URL: &str = "url_m";
}

const OK_STATUS: &str = "ok";
const NO_TITLE: &str = "No title";

/// Validates a raw listing body into a [`GalleryResponse`].
///
/// Bytes that do not decode as JSON classify as [`Error::MalformedJson`]. A
/// `stat` field that is absent or not a string classifies as
/// [`Error::MissingField`], a status token other than `"ok"` as
/// [`Error::UnexpectedStatus`]. The `photos` container and its `photo` array
/// each classify as [`Error::MissingField`] when absent or of the wrong
/// shape.
pub fn parse_gallery_response(body: &[u8]) -> Result<GalleryResponse> {
    let value: Value = serde_json::from_slice(body).map_err(Error::MalformedJson)?;

    let stat = value
        .get(key::STAT)
        .ok_or(Error::MissingField(key::STAT))?
        .as_str()
        .ok_or(Error::MissingField(key::STAT))?;

    if stat != OK_STATUS {
        return Err(Error::UnexpectedStatus(stat.to_owned()));
    }

    let photos = value
        .get(key::PHOTOS)
        .and_then(Value::as_object)
        .ok_or(Error::MissingField(key::PHOTOS))?;

    let records = photos
        .get(key::PHOTO)
        .and_then(Value::as_array)
        .ok_or(Error::MissingField(key::PHOTO))?
        .iter()
        .map(|record| {
            serde_json::from_value(record.clone()).map_err(|_| Error::MissingField(key::PHOTO))
        })
        .collect::<Result<Vec<PhotoRecord>>>()?;

    Ok(GalleryResponse::new(stat.to_owned(), records))
}

/// Draws one photo uniformly at random from a validated listing.
pub fn select_random_photo(gallery: &GalleryResponse) -> Result<PhotoSelection> {
    select_random_photo_with(gallery, &mut rand::rng())
}

/// [`select_random_photo`] with a caller-supplied RNG.
///
/// The emptiness check happens before any index is drawn, so no gallery
/// size can cause an out-of-range draw. A chosen record without a medium
/// URL classifies as [`Error::MissingField`]; a missing title is not an
/// error and falls back to a placeholder.
pub fn select_random_photo_with<R: Rng>(
    gallery: &GalleryResponse,
    rng: &mut R,
) -> Result<PhotoSelection> {
    let photos = gallery.photos();
    if photos.is_empty() {
        return Err(Error::EmptyGallery);
    }

    let record = &photos[rng.random_range(0..photos.len())];

    let medium_url = record
        .medium_url()
        .ok_or(Error::MissingField(key::MEDIUM_URL))?;
    let title = record.title().unwrap_or(NO_TITLE);

    Ok(PhotoSelection::new(title.to_owned(), medium_url.to_owned()))
}

/// Both stages in one call, for callers that do not need the intermediate
/// listing.
pub fn pick_random_photo(body: &[u8]) -> Result<PhotoSelection> {
    let gallery = parse_gallery_response(body)?;

    select_random_photo(&gallery)
}
