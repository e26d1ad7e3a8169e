use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub geocoder_url: String,
    pub overpass_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub inter_request_delay_ms: u64,
    /// Half-width of the search bounding box, in degrees.
    pub search_radius_deg: f64,
    /// Maximum elements requested per category query.
    pub result_limit: u32,
    pub category_keys: Vec<String>,
    pub sample_count: usize,
    pub default_location: String,
    /// Year business ages are measured against.
    pub reference_year: i32,
    pub vocabulary_path: Option<PathBuf>,
}
