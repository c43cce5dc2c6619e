//! Cover image loading
//!
//! Covers are fetched once into the disk cache and decoded into textures on
//! first use. Downloads share a semaphore so a full grid page does not open
//! two dozen connections at once.

use super::App;
use eframe::egui;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const COVER_MAX_SIZE: (u32, u32) = (480, 680);

/// Cache file for a cover URL, named by the SHA-256 of the URL
pub(crate) fn cover_path(cache_dir: &Path, url: &str) -> PathBuf {
    let digest = Sha256::digest(url.as_bytes());
    cache_dir
        .join("covers")
        .join(format!("{}.img", hex::encode(digest)))
}

fn decode_cover(path: &Path) -> Option<egui::ColorImage> {
    let bytes = std::fs::read(path).ok()?;
    let img = match image::load_from_memory(&bytes) {
        Ok(img) => img.thumbnail(COVER_MAX_SIZE.0, COVER_MAX_SIZE.1),
        Err(e) => {
            warn!(error = %e, path = %path.display(), "Failed to decode cover");
            return None;
        }
    };
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

async fn download_cover(client: &reqwest::Client, url: &str, dest: &Path) -> Result<(), String> {
    let response = client.get(url).send().await.map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("HTTP {}", response.status()));
    }
    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    let partial = dest.with_extension("part");
    tokio::fs::write(&partial, &bytes)
        .await
        .map_err(|e| e.to_string())?;
    tokio::fs::rename(&partial, dest)
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

impl App {
    /// Texture for a cover URL. Returns `None` while the image is still being
    /// fetched or if it could not be loaded.
    pub(crate) fn cover_texture(
        &mut self,
        ctx: &egui::Context,
        url: &str,
    ) -> Option<egui::TextureHandle> {
        if let Some(cached) = self.cover_cache.get(url) {
            return cached.clone();
        }

        let path = cover_path(&self.cache_dir, url);
        if path.exists() {
            let texture = decode_cover(&path).map(|image| {
                ctx.load_texture(format!("cover:{url}"), image, egui::TextureOptions::LINEAR)
            });
            self.cover_cache.insert(url.to_string(), texture.clone());
            return texture;
        }

        if self.covers_requested.insert(url.to_string()) {
            self.fetch_cover(ctx, url.to_string(), path);
        }
        None
    }

    /// Whether a cover download is still outstanding
    pub(crate) fn cover_pending(&self, url: &str) -> bool {
        self.covers_requested.contains(url)
            && !self.cover_cache.contains_key(url)
            && !self
                .cover_failures
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .contains(url)
    }

    fn fetch_cover(&self, ctx: &egui::Context, url: String, dest: PathBuf) {
        let client = self.http.clone();
        let semaphore = self.cover_semaphore.clone();
        let failures = self.cover_failures.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let _permit = semaphore.acquire().await.ok();
            let result = download_cover(&client, &url, &dest).await;

            match result {
                Ok(()) => debug!(url = %url, "Cover cached"),
                Err(e) => {
                    warn!(url = %url, error = %e, "Failed to fetch cover");
                    failures.lock().unwrap_or_else(|e| e.into_inner()).insert(url);
                }
            }
            ctx.request_repaint();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_paths_are_stable_per_url() {
        let dir = Path::new("/tmp/zines");
        let a = cover_path(dir, "https://example.org/a.png");
        assert_eq!(a, cover_path(dir, "https://example.org/a.png"));
        assert_ne!(a, cover_path(dir, "https://example.org/b.png"));
        assert!(a.starts_with(dir.join("covers")));
    }

    #[test]
    fn cover_names_do_not_depend_on_the_build() {
        let path = cover_path(Path::new("/tmp/zines"), "abc");
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad.img")
        );
    }

    #[test]
    fn undecodable_cover_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.img");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(decode_cover(&path).is_none());
    }
}
