//! Shared harness for the route-api integration tests
//!
//! Serves the router on an ephemeral loopback port and hands out both the
//! typed `RouteClient` and a raw `reqwest::Client` for malformed requests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use route_api::{create_router, AppState};
use route_client::RouteClient;
use route_core::{JsonFileStore, Place, PlaceStore, RouteBatchProcessor};
use serde_json::Value;
use tempfile::TempDir;
use tokio::task::JoinHandle;

/// A running route server bound to 127.0.0.1
pub struct TestApp {
    pub client: RouteClient,
    http: reqwest::Client,
    addr: SocketAddr,
    handle: JoinHandle<()>,
    /// Artifact location when backed by a `JsonFileStore`
    artifact: Option<(TempDir, PathBuf)>,
}

impl TestApp {
    /// Serve `state` as-is
    pub async fn spawn(state: AppState) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");

        let router = create_router(state);
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        let client = RouteClient::new(&format!("http://{}", addr)).expect("route client");

        Self {
            client,
            http: reqwest::Client::new(),
            addr,
            handle,
            artifact: None,
        }
    }

    /// Default pipeline writing through `store`
    pub async fn with_store(store: Arc<dyn PlaceStore>) -> Self {
        Self::spawn(AppState::new(RouteBatchProcessor::default(), store)).await
    }

    /// Default pipeline writing `output.json` in a fresh temp directory
    pub async fn with_file_store() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("output.json");

        let mut app = Self::with_store(Arc::new(JsonFileStore::new(&path))).await;
        app.artifact = Some((dir, path));
        app
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn artifact_path(&self) -> &Path {
        &self.artifact.as_ref().expect("app has no file store").1
    }

    /// Raw text of the artifact
    pub fn artifact_text(&self) -> String {
        std::fs::read_to_string(self.artifact_path()).expect("read artifact")
    }

    /// Places currently persisted in the artifact
    pub fn artifact_places(&self) -> Vec<Place> {
        serde_json::from_str(&self.artifact_text()).expect("parse artifact")
    }

    /// POST a JSON body to `/places`, bypassing the typed client
    pub async fn post_places_raw(&self, body: &Value) -> reqwest::Response {
        self.http
            .post(self.url("/places"))
            .json(body)
            .send()
            .await
            .expect("POST /places")
    }

    /// POST a literal body labelled as JSON
    pub async fn post_places_text(&self, body: &'static str) -> reqwest::Response {
        self.http
            .post(self.url("/places"))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("POST /places")
    }

    /// GET `path`, optionally with an `Origin` header
    pub async fn get(&self, path: &str, origin: Option<&str>) -> reqwest::Response {
        let mut request = self.http.get(self.url(path));
        if let Some(origin) = origin {
            request = request.header("origin", origin);
        }
        request.send().await.expect("GET request")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
