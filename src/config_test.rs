use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_nothing_set() {
    let cfg = ClientConfig::from_lookup(|_| None);
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.weight_placeholder, "peso");
    assert_eq!(cfg.default_table_key, "Tabela");
    assert_eq!(cfg.api_base, "");
}

#[test]
fn from_lookup_applies_overrides_and_trims_base_slash() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("CROSSTAB_API_BASE", "https://stats.example.test/"),
        ("CROSSTAB_WEIGHT_PLACEHOLDER", "wgt"),
        ("CROSSTAB_DEFAULT_TABLE_KEY", "Table"),
    ]));
    assert_eq!(cfg.api_base, "https://stats.example.test");
    assert_eq!(cfg.weight_placeholder, "wgt");
    assert_eq!(cfg.default_table_key, "Table");
    assert_eq!(cfg.residual_prefix, DEFAULT_RESIDUAL_PREFIX);
}

#[test]
fn from_lookup_treats_blank_values_as_unset() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[("CROSSTAB_WEIGHT_PLACEHOLDER", "   ")]));
    assert_eq!(cfg.weight_placeholder, DEFAULT_WEIGHT_PLACEHOLDER);
}

#[test]
fn endpoint_urls_use_same_origin_by_default() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.upload_url(), "/upload");
    assert_eq!(cfg.close_url(), "/close");
    assert_eq!(cfg.crosstab_url(), "/crosstab");
    assert_eq!(cfg.export_url(), "/export_excel");
}

#[test]
fn endpoint_urls_prefix_api_base() {
    let cfg = ClientConfig { api_base: "/app".to_owned(), ..ClientConfig::default() };
    assert_eq!(cfg.crosstab_url(), "/app/crosstab");
    assert_eq!(cfg.export_url(), "/app/export_excel");
}
