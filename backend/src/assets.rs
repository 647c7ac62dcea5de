//! Serves the frontend bundle embedded at build time.
//!
//! Paths that match no embedded file get `index.html`, so client-side routes
//! survive a page reload. Only a bundle without `index.html` produces a 404.

use actix_web::{web, HttpRequest, HttpResponse};
use include_dir::Dir;
use mime_guess::from_path;

pub const INDEX: &str = "index.html";

/// Embedded directory the handler reads from, registered as app data.
pub type Bundle = &'static Dir<'static>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub path: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

/// Finds the file for a request path, falling back to `index.html`.
pub fn lookup(bundle: &Dir<'_>, request_path: &str) -> Option<Asset> {
    let path = request_path.trim_start_matches('/');
    let path = if path.is_empty() { INDEX } else { path };

    let file = bundle.get_file(path).or_else(|| bundle.get_file(INDEX))?;
    let served = file.path().to_string_lossy().into_owned();
    let content_type = if served == INDEX {
        "text/html; charset=utf-8".to_string()
    } else {
        from_path(&served).first_or_octet_stream().to_string()
    };

    Some(Asset {
        path: served,
        content_type,
        body: file.contents().to_vec(),
    })
}

pub async fn serve_embedded(req: HttpRequest, bundle: web::Data<Bundle>) -> HttpResponse {
    match lookup(bundle.get_ref(), req.path()) {
        Some(asset) => {
            log::debug!("{} -> {}", req.path(), asset.path);
            HttpResponse::Ok().content_type(asset.content_type).body(asset.body)
        }
        None => {
            log::warn!("{} requested but the bundle has no {}", req.path(), INDEX);
            HttpResponse::NotFound().body("Not Found")
        }
    }
}
