pub fn default_version() -> u32 {
    1
}

pub fn default_store_args() -> Vec<String> {
    vec![
        "list".to_string(),
        "{document_id}".to_string(),
        "--fields".to_string(),
        "{fields}".to_string(),
    ]
}

pub fn default_page_token_flag() -> String {
    "--page-token".to_string()
}

pub fn default_include_deleted_flag() -> Option<String> {
    Some("--include-deleted".to_string())
}

pub fn default_anchor() -> String {
    "#insertDocReviewTable".to_string()
}

pub fn default_header() -> String {
    "#DocReview".to_string()
}
