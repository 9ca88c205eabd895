use bytes::Bytes;
use reqwest::{Client as HttpClient, RequestBuilder, Response};

pub mod error;
pub mod grabber;
pub mod models;
pub mod parse;
pub mod query;
pub mod result;

pub use error::Error;
pub use grabber::Grabber;
pub use models::{GalleryResponse, PhotoRecord, PhotoSelection};
pub use result::Result;

/// REST endpoint shared by every API method.
const API_BASE_URL: &str = "https://api.flickr.com/services/rest/";

const GALLERY_PHOTOS_METHOD: &str = "flickr.galleries.getPhotos";

/// Request parameter names recognized by the endpoint.
mod param {
    pub const METHOD: &str = "method";
    pub const API_KEY: &str = "api_key";
    pub const GALLERY_ID: &str = "gallery_id";
    pub const EXTRAS: &str = "extras";
    pub const FORMAT: &str = "format";
    pub const NO_JSON_CALLBACK: &str = "nojsoncallback";
}

macro_rules! params {
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::flickr::query::ParamMap::new();
        $(
            map.push($key, $value);
        )+
        map
    }};
}

#[derive(Clone)]
pub struct Client {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl Client {
    pub fn new<T: AsRef<str>>(api_key: T) -> Result<Self> {
        Self::with_base_url(api_key, API_BASE_URL)
    }

    /// Points the client at a different REST endpoint, e.g. a local server.
    pub fn with_base_url<T: AsRef<str>, U: Into<String>>(api_key: T, base_url: U) -> Result<Self> {
        let api_key = api_key.as_ref();
        if api_key.is_empty() || !api_key.is_ascii() {
            return Err(Error::InvalidApiKey);
        }

        Ok(Self {
            http: HttpClient::new(),
            base_url: base_url.into(),
            api_key: api_key.to_owned(),
        })
    }

    /// Reads the API key from `FLICKR_API_KEY`.
    pub fn new_from_env() -> Result<Self> {
        let api_key = std::env::var("FLICKR_API_KEY").map_err(|_| Error::InvalidApiKey)?;

        Self::new(api_key)
    }

    /// Fetches and validates the gallery's photo listing.
    pub async fn fetch_gallery<T: AsRef<str>>(&self, gallery_id: T) -> Result<GalleryResponse> {
        let query = params!(
            param::METHOD => GALLERY_PHOTOS_METHOD,
            param::API_KEY => &self.api_key,
            param::GALLERY_ID => gallery_id.as_ref(),
            param::EXTRAS => parse::key::MEDIUM_URL,
            param::FORMAT => "json",
            param::NO_JSON_CALLBACK => 1,
        );

        let url = format!("{}{}", self.base_url, query.to_query_string());
        tracing::debug!(gallery_id = gallery_id.as_ref(), "fetching gallery listing");

        let response = Self::send_request(self.http.get(&url)).await?;
        let body = response.bytes().await.map_err(Error::Transport)?;

        parse::parse_gallery_response(&body)
    }

    /// Fetches the listing and draws one photo uniformly at random.
    pub async fn pick_random_photo<T: AsRef<str>>(&self, gallery_id: T) -> Result<PhotoSelection> {
        let gallery = self.fetch_gallery(gallery_id).await?;

        parse::select_random_photo(&gallery)
    }

    /// Downloads the selected photo's medium-size rendition.
    pub async fn download_photo(&self, photo: &PhotoSelection) -> Result<Bytes> {
        tracing::debug!(url = photo.medium_url(), "downloading photo");

        let response = Self::send_request(self.http.get(photo.medium_url())).await?;
        let data = response.bytes().await.map_err(Error::Transport)?;

        Ok(data)
    }

    /// Fetches one random photo: the selection plus its image bytes.
    pub async fn grab_photo<T: AsRef<str>>(
        &self,
        gallery_id: T,
    ) -> Result<(PhotoSelection, Bytes)> {
        let photo = self.pick_random_photo(gallery_id).await?;
        let data = self.download_photo(&photo).await?;

        Ok((photo, data))
    }

    async fn send_request(request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(Error::Transport)?;

        if !response.status().is_success() {
            return Err(Error::Status(response.status()));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_is_rejected() {
        assert!(matches!(Client::new(""), Err(Error::InvalidApiKey)));
    }

    #[test]
    fn non_ascii_api_key_is_rejected() {
        assert!(matches!(Client::new("clé"), Err(Error::InvalidApiKey)));
    }

    #[test]
    fn gallery_request_parameters_render_in_order() {
        let query = params!(
            param::METHOD => GALLERY_PHOTOS_METHOD,
            param::API_KEY => "key",
            param::GALLERY_ID => "5704-72157622566655097",
            param::EXTRAS => parse::key::MEDIUM_URL,
            param::FORMAT => "json",
            param::NO_JSON_CALLBACK => 1,
        );

        assert_eq!(
            query.to_query_string(),
            "?method=flickr.galleries.getPhotos&api_key=key\
             &gallery_id=5704-72157622566655097&extras=url_m\
             &format=json&nojsoncallback=1"
        );
    }
}
