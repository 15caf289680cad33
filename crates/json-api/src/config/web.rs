//! Web Config

use std::path::PathBuf;

use clap::Args;

/// CORS, static file, and public address settings.
#[derive(Debug, Args)]
pub struct WebConfig {
    /// Origin allowed by CORS, or `*` for any
    #[arg(long, env = "CORS_ALLOWED_ORIGIN", default_value = "*")]
    pub cors_allowed_origin: String,

    /// Directory served under `/product-images`
    #[arg(long, env = "PRODUCT_IMAGES_DIR", default_value = "product-images")]
    pub product_images_dir: PathBuf,

    /// Public origin of this server, used to build absolute image URLs
    #[arg(long, env = "PUBLIC_BASE_URL", default_value = "http://localhost:4000")]
    pub public_base_url: String,
}
