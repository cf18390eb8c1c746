use super::*;

#[test]
fn defaults_match_the_reference_agent() {
    let config = SearchConfig::default();
    assert_eq!(config.search_depth, 3);
    assert!(config.iterative);
    assert_eq!(config.method, "minimax");
    assert_eq!(config.timeout_ms, 10.0);
}

#[test]
fn deserializes_from_toml() {
    let config: SearchConfig = toml::from_str(
        r#"
        search_depth = 5
        iterative = false
        method = "alphabeta"
        timeout_ms = 25.0
        "#,
    )
    .unwrap();
    assert_eq!(config.search_depth, 5);
    assert!(!config.iterative);
    assert_eq!(config.method, "alphabeta");
    assert_eq!(config.timeout_ms, 25.0);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config: SearchConfig = toml::from_str("method = \"alphabeta\"").unwrap();
    assert_eq!(config.method, "alphabeta");
    assert_eq!(config.search_depth, 3);
    assert!(config.iterative);
}
