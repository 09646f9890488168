use df_domain::config::{CatalogConfig, LeadConfig, SiteConfig};
use df_domain::constants::{DEFAULT_CONTACT_ENDPOINT, REQUEST_TIMEOUT};
use serde_json::json;

#[test]
fn config_defaults_match_constants() {
    let lead = LeadConfig::default();
    assert_eq!(lead.endpoint, DEFAULT_CONTACT_ENDPOINT);
    assert_eq!(lead.max_message_length, 1200);
    assert_eq!(lead.request_timeout(), REQUEST_TIMEOUT);

    let catalog = CatalogConfig::default();
    assert_eq!(catalog.data_file, "data/tools.json");
    assert_eq!(catalog.featured_limit, 6);
}

#[test]
fn partial_config_keeps_defaults() {
    let raw = json!({ "lead": { "request_timeout_ms": 5000 } });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.lead.request_timeout_ms, 5000);
    assert_eq!(cfg.lead.max_message_length, 1200);
    assert_eq!(cfg.catalog.featured_limit, 6);
}

#[test]
fn deref_mut_copies_on_write() {
    let shared = SiteConfig::default();
    let mut local = shared.clone();
    local.catalog.featured_limit = 3;

    assert_eq!(shared.catalog.featured_limit, 6);
    assert_eq!(local.catalog.featured_limit, 3);
}
