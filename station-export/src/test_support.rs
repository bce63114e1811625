//! Helpers shared by the crate's tests.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;

/// Serve `body` with `status` at `/stations` on a loopback port.
///
/// Returns the base URL, ending in `/`.
pub(crate) async fn serve(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route("/stations", get(move || async move { (status, body) }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}
