use super::*;

#[test]
fn normalize_base_adds_scheme_and_strips_trailing_slash() {
    assert_eq!(normalize_base("api.example.com/"), "https://api.example.com");
}

#[test]
fn normalize_base_keeps_explicit_http_scheme() {
    assert_eq!(normalize_base("http://localhost:8002"), "http://localhost:8002");
}

#[test]
fn normalize_base_keeps_explicit_https_scheme() {
    assert_eq!(normalize_base("https://api.example.com"), "https://api.example.com");
}

#[test]
fn normalize_base_strips_repeated_trailing_slashes() {
    assert_eq!(normalize_base("https://api.example.com///"), "https://api.example.com");
}

#[test]
fn normalize_base_is_idempotent() {
    let once = normalize_base("api.example.com/");
    assert_eq!(normalize_base(&once), once);
}

#[test]
fn preview_url_has_no_double_slash() {
    let base = normalize_base("api.example.com/");
    assert_eq!(preview_url(&base), "https://api.example.com/preview/csv");
}

#[test]
fn analyze_and_health_urls_append_fixed_paths() {
    let base = normalize_base("http://localhost:8002");
    assert_eq!(analyze_url(&base), "http://localhost:8002/analyze/csv");
    assert_eq!(health_url(&base), "http://localhost:8002/health");
}

#[test]
fn is_csv_name_accepts_suffix_only() {
    assert!(is_csv_name("data.csv"));
    assert!(is_csv_name("ventas.2024.csv"));
    assert!(!is_csv_name("data.txt"));
    assert!(!is_csv_name("data.CSV"));
    assert!(!is_csv_name("csv"));
}
