use axum::Router;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::post;
use df_domain::config::LeadConfig;
use df_leads::{
    HttpLeadTransport, LeadForm, LeadPipeline, LeadVariant, SubmissionOutcome, TransportError,
};
use parking_lot::Mutex;
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Received {
    content_type: Option<String>,
    body: Option<serde_json::Value>,
}

async fn serve(status: StatusCode, received: Arc<Mutex<Received>>) -> SocketAddr {
    let app = Router::new().route(
        "/prod/contact",
        post(move |headers: HeaderMap, body: String| async move {
            let mut seen = received.lock();
            seen.content_type =
                headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()).map(str::to_owned);
            seen.body = serde_json::from_str(&body).ok();
            status
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server");
    });
    addr
}

fn config(addr: SocketAddr) -> LeadConfig {
    LeadConfig { endpoint: format!("http://{addr}/prod/contact"), ..LeadConfig::default() }
}

fn ana() -> LeadForm {
    LeadForm {
        name: "Ana".into(),
        email: "ana@example.com".into(),
        message: "Necesito una herramienta de X".into(),
        ..LeadForm::default()
    }
}

#[tokio::test]
async fn posts_json_payload() {
    let received = Arc::new(Mutex::new(Received::default()));
    let addr = serve(StatusCode::OK, Arc::clone(&received)).await;
    let config = config(addr);

    let transport = HttpLeadTransport::new(&config.endpoint).expect("endpoint");
    let pipeline = LeadPipeline::new(transport, LeadVariant::contact(), &config);
    let mut form = ana();

    let outcome = pipeline.submit(&mut form).await;
    assert!(matches!(outcome, SubmissionOutcome::Delivered), "{outcome:?}");
    assert!(form.name.is_empty());

    let seen = received.lock();
    assert_eq!(seen.content_type.as_deref(), Some("application/json"));
    let body = seen.body.as_ref().expect("json body");
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["email"], "ana@example.com");
    assert_eq!(body["message"], "Necesito una herramienta de X");
    assert_eq!(body["lang"], "es");
    assert_eq!(body["topic"], "general");
    assert_eq!(body["company"], "");
}

#[tokio::test]
async fn any_2xx_counts_as_delivered() {
    let received = Arc::new(Mutex::new(Received::default()));
    let addr = serve(StatusCode::NO_CONTENT, Arc::clone(&received)).await;
    let config = config(addr);

    let transport = HttpLeadTransport::new(&config.endpoint).expect("endpoint");
    let pipeline = LeadPipeline::new(transport, LeadVariant::ideas(), &config);
    let mut form = ana();

    let outcome = pipeline.submit(&mut form).await;
    assert!(matches!(outcome, SubmissionOutcome::Delivered), "{outcome:?}");
    assert!(form.message.is_empty());
    assert!(received.lock().body.is_some());
}

#[tokio::test]
async fn non_success_status_fails() {
    let received = Arc::new(Mutex::new(Received::default()));
    let addr = serve(StatusCode::BAD_GATEWAY, received).await;
    let config = config(addr);

    let transport = HttpLeadTransport::new(&config.endpoint).expect("endpoint");
    let pipeline = LeadPipeline::new(transport, LeadVariant::ideas(), &config);

    let outcome = pipeline.submit(&mut ana()).await;
    assert!(matches!(outcome, SubmissionOutcome::Failed(TransportError::Status { code: 502 })));
    assert!(pipeline.snapshot().submit.enabled);
}

#[tokio::test]
async fn connection_refused_is_a_network_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let config = config(addr);

    let transport = HttpLeadTransport::new(&config.endpoint).expect("endpoint");
    let pipeline = LeadPipeline::new(transport, LeadVariant::ideas(), &config);

    let outcome = pipeline.submit(&mut ana()).await;
    assert!(matches!(outcome, SubmissionOutcome::Failed(TransportError::Network { .. })));
}

#[test]
fn invalid_endpoint_is_rejected() {
    assert!(matches!(
        HttpLeadTransport::new("not a url"),
        Err(TransportError::Internal { .. })
    ));
}
