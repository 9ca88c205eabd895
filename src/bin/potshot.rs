use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use potshot::{Client, flickr};

#[derive(Debug, Error)]
enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Flickr(#[from] flickr::Error),

    #[error("A default configuration file has been created, please review it before proceeding")]
    RequiresConfigure,
}

type Result<T> = core::result::Result<T, Error>;

/// Public gallery grabbed when the config does not name another one.
const DEFAULT_GALLERY_ID: &str = "5704-72157622566655097";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Config {
    folder: PathBuf,
    gallery: String,
}

impl Default for Config {
    fn default() -> Self {
        let folder = dirs::picture_dir().unwrap().join("Potshot");

        Self {
            folder,
            gallery: DEFAULT_GALLERY_ID.to_owned(),
        }
    }
}

/// Last path segment of the image URL, e.g. `1234_5678_m.jpg`.
fn file_name(url: &str) -> &str {
    url.rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or("photo.jpg")
}

async fn grab_photo(config: &Config) -> Result<()> {
    let client = Client::new_from_env()?;

    let (photo, data) = client.grab_photo(&config.gallery).await?;

    fs::create_dir_all(&config.folder)?;

    let path = config.folder.join(file_name(photo.medium_url()));
    fs::write(&path, &data)?;

    println!("{}", photo.title());
    println!("saved to {}", path.display());

    Ok(())
}

fn configure<P: AsRef<Path>>(config_folder: P) -> Result<Config> {
    let config_folder = config_folder.as_ref();

    if !config_folder.exists() {
        fs::create_dir_all(config_folder)?;
    }

    let env_path = config_folder.join(".env");
    let config_path = config_folder.join("config.json");
    let requires_config = !env_path.exists() || !config_path.exists();

    if requires_config {
        if !env_path.exists() {
            fs::copy(".env.example", &env_path)?;
        }

        if !config_path.exists() {
            let config = Config::default();
            let content = serde_json::to_string_pretty(&config).map_err(io::Error::from)?;

            fs::write(&config_path, &content)?;
        }

        return Err(Error::RequiresConfigure);
    }

    dotenvy::from_path(env_path).map_err(|err| match err {
        dotenvy::Error::Io(err) => err,

        err => io::Error::new(io::ErrorKind::InvalidData, err),
    })?;

    let config = {
        let content = fs::read_to_string(&config_path)?;

        serde_json::from_str(&content).map_err(io::Error::from)?
    };

    Ok(config)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    async fn run() -> Result<()> {
        let path = dirs::config_dir().unwrap().join("Potshot");

        let config = configure(&path)?;

        grab_photo(&config).await?;

        Ok(())
    }

    if let Err(e) = run().await {
        eprintln!("{}", e);
    }
}
