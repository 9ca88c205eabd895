pub mod flickr;

pub use flickr::{Client, Error, GalleryResponse, Grabber, PhotoRecord, PhotoSelection, Result};
