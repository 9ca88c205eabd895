pub mod gallery;
pub mod photo;

pub use gallery::GalleryResponse;
pub use photo::{PhotoRecord, PhotoSelection};
