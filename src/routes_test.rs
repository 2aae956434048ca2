use super::*;

use std::path::PathBuf;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::{Duration, timeout};

/// Site root under the temp dir holding one asset at `pkg/dishcovery.css`.
fn site_root_with_asset(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("dishcovery-routes-{name}-{}", std::process::id()));
    let pkg = root.join("pkg");
    std::fs::create_dir_all(&pkg).expect("create pkg dir");
    std::fs::write(pkg.join("dishcovery.css"), ".search-card{}").expect("write asset");
    root
}

async fn serve(site_root: &std::path::Path) -> std::net::SocketAddr {
    let options = LeptosOptions::builder()
        .output_name("dishcovery")
        .site_root(site_root.to_string_lossy().to_string())
        .site_pkg_dir("pkg")
        .build();
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    let router = app(options);
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server failed");
    });
    addr
}

async fn get(addr: std::net::SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.expect("write request");
    let mut response = String::new();
    timeout(Duration::from_secs(5), stream.read_to_string(&mut response))
        .await
        .expect("response timed out")
        .expect("read response");
    response
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn router_serves_healthz() {
    let root = site_root_with_asset("healthz");
    let addr = serve(&root).await;
    let response = get(addr, "/healthz").await;
    assert!(response.starts_with("HTTP/1.1 200"), "unexpected response: {response}");
}

#[tokio::test]
async fn router_serves_pkg_assets() {
    let root = site_root_with_asset("pkg");
    let addr = serve(&root).await;
    let response = get(addr, "/pkg/dishcovery.css").await;
    assert!(response.starts_with("HTTP/1.1 200"), "unexpected response: {response}");
    assert!(response.ends_with(".search-card{}"));
}

#[tokio::test]
async fn router_missing_asset_is_not_ok() {
    let root = site_root_with_asset("missing");
    let addr = serve(&root).await;
    let response = get(addr, "/pkg/absent.wasm").await;
    assert!(response.starts_with("HTTP/1.1 404"), "unexpected response: {response}");
}

#[test]
fn pkg_dir_joins_site_root() {
    assert_eq!(pkg_dir("target/site", "pkg"), PathBuf::from("target/site/pkg"));
}

#[test]
fn pkg_dir_accepts_absolute_root() {
    assert_eq!(pkg_dir("/srv/dishcovery", "assets"), PathBuf::from("/srv/dishcovery/assets"));
}
