use axum::Router;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::get;
use df_catalog::{CatalogSource, CatalogStore, HttpCatalogSource, PageContext};
use df_domain::tool::ToolStatus;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

const CATALOG: &str = r#"[
  { "slug": "sync-kit", "name": "Sync Kit", "status": "Premium", "tags": ["sync"] },
  { "slug": "pdf-tools", "name": "PDF Tools", "status": "Beta" }
]"#;

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server");
    });
    addr
}

#[tokio::test]
async fn fetches_once_and_bypasses_caches() {
    let hits = Arc::new(AtomicUsize::new(0));
    let cache_control = Arc::new(Mutex::new(None::<String>));

    let app = Router::new().route(
        "/data/tools.json",
        get({
            let hits = Arc::clone(&hits);
            let cache_control = Arc::clone(&cache_control);
            move |headers: HeaderMap| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                *cache_control.lock().expect("lock") = headers
                    .get(header::CACHE_CONTROL)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_owned);
                ([(header::CONTENT_TYPE, "application/json")], CATALOG)
            }
        }),
    );
    let addr = serve(app).await;

    let page = PageContext::parse(&format!("http://{addr}/tools/sync-kit/")).expect("page");
    let url = page.data_url("data/tools.json").expect("data url");
    assert_eq!(url.path(), "/data/tools.json");

    let store = CatalogStore::new(HttpCatalogSource::new(url));
    let tools = store.load().await;
    let again = store.load().await;

    assert_eq!(tools.len(), 2);
    assert_eq!(tools[0].status, ToolStatus::Premium);
    assert_eq!(tools[1].status, ToolStatus::Wip);
    assert!(Arc::ptr_eq(&tools, &again));
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    let sent = cache_control.lock().expect("lock").clone().unwrap_or_default();
    assert!(sent.contains("no-store"), "cache bypass header missing: {sent:?}");
}

#[tokio::test]
async fn server_error_degrades_to_empty() {
    let app = Router::new()
        .route("/data/tools.json", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }));
    let addr = serve(app).await;

    let source = HttpCatalogSource::new(
        format!("http://{addr}/data/tools.json").parse().expect("url"),
    );
    assert!(matches!(source.fetch().await, Err(df_catalog::CatalogError::Status { code: 500 })));

    let store = CatalogStore::new(source);
    assert!(store.load().await.is_empty());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let app = Router::new().route("/data/tools.json", get(|| async { "{ not json" }));
    let addr = serve(app).await;

    let source = HttpCatalogSource::new(
        format!("http://{addr}/data/tools.json").parse().expect("url"),
    );
    assert!(matches!(source.fetch().await, Err(df_catalog::CatalogError::Decode { .. })));
}

#[tokio::test]
async fn unreachable_host_degrades_to_empty() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let store = CatalogStore::new(HttpCatalogSource::new(
        format!("http://{addr}/data/tools.json").parse().expect("url"),
    ));
    assert!(store.load().await.is_empty());
}
