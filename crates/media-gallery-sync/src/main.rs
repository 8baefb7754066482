//! Loads every gallery of the configured user, then the images of each
//! gallery, and prints a summary of the resulting store state.

use anyhow::{Context, Result};
use media_gallery_client::ReqwestCommunicator;
use media_gallery_config::AppConfig;
use media_gallery_store::selectors::{
    select_galleries, select_gallery_list_error, select_image_infos, select_image_infos_error,
};
use media_gallery_store::{Dispatcher, GalleryOperations, LoggingMiddleware, Store};
use std::sync::Arc;

const AUTH_TOKEN_ENV: &str = "MEDIA_GALLERY_AUTH_TOKEN";

#[tokio::main]
async fn main() -> Result<()> {
    // .env may set RUST_LOG, so load it before the logger
    let dotenv = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    match dotenv {
        Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
        Err(_) => log::debug!(".env file not found, will rely on environment variables"),
    }

    let config = AppConfig::load().with_auth_token_override(std::env::var(AUTH_TOKEN_ENV).ok());
    let auth_token = config.auth_token.clone().with_context(|| {
        format!("No auth token configured. Set {AUTH_TOKEN_ENV} or auth_token in .media-gallery.toml")
    })?;

    log::info!("Syncing galleries from {}", config.api_base_url);

    let communicator = ReqwestCommunicator::new(&config.api_base_url, config.request_timeout())
        .context("Failed to create HTTP client")?;
    let operations = GalleryOperations::new(Arc::new(communicator));

    let (dispatcher, mut rx) = Dispatcher::channel();
    let mut store = Store::default();
    store.add_middleware(LoggingMiddleware::new());

    operations.get_image_galleries(&dispatcher, &auth_token).await;
    store.process_pending(&mut rx, &dispatcher).await;

    if let Some(error) = select_gallery_list_error(&store.state().galleries) {
        anyhow::bail!("Failed to load galleries: {}", error);
    }

    let gallery_ids: Vec<_> = select_galleries(&store.state().galleries)
        .iter()
        .map(|gallery| gallery.id)
        .collect();

    for gallery_id in &gallery_ids {
        operations
            .get_image_infos(&dispatcher, &auth_token, *gallery_id)
            .await;
    }
    store.process_pending(&mut rx, &dispatcher).await;

    let state = store.state();
    for gallery in select_galleries(&state.galleries) {
        match select_image_infos_error(&state.image_infos, gallery.id) {
            Some(error) => log::warn!(
                "{} ({}): failed to load images: {}",
                gallery.name,
                gallery.id,
                error
            ),
            None => log::info!(
                "{} ({}): {} images",
                gallery.name,
                gallery.id,
                select_image_infos(&state.image_infos, gallery.id).len()
            ),
        }
    }
    log::info!("Synced {} galleries", gallery_ids.len());

    Ok(())
}
