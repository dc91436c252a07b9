//! In-process HTTP server standing in for vendor sites and archive hosts.

use axum::Router;
use axum::body::{Body, Bytes};
use axum::routing::get;
use futures::stream::{self, StreamExt};
use std::time::Duration;
use tokio::net::TcpListener;

/// Serve `body` at each path on an ephemeral localhost port; anything else is 404.
///
/// Returns the base URL, e.g. `http://127.0.0.1:41234`.
pub async fn serve(routes: Vec<(&'static str, Vec<u8>)>) -> String {
    let mut app = Router::new();
    for (path, body) in routes {
        app = app.route(
            path,
            get(move || {
                let body = body.clone();
                async move { body }
            }),
        );
    }
    spawn(app).await
}

/// Serve `chunks` blocks of `chunk_len` bytes at `path`, waiting `gap` before each.
///
/// Models a slow but live archive host: the body never stalls for longer than
/// `gap`, yet the whole transfer takes `chunks * gap`.
pub async fn serve_trickle(path: &'static str, chunks: usize, chunk_len: usize, gap: Duration) -> String {
    let app = Router::new().route(
        path,
        get(move || async move {
            let body = stream::iter(0..chunks).then(move |_| async move {
                tokio::time::sleep(gap).await;
                Ok::<_, std::io::Error>(Bytes::from(vec![b'z'; chunk_len]))
            });
            Body::from_stream(body)
        }),
    );
    spawn(app).await
}

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A URL on a port nothing listens on.
pub async fn dead_url(path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, path)
}

pub fn html(body: &str) -> Vec<u8> {
    body.as_bytes().to_vec()
}
