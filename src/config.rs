// src/config.rs

#[derive(Debug, Clone)]
pub struct Settings {
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: Option<String>,
    pub gemini_model: Option<String>,
    pub gemini_timeout_secs: Option<u64>,
    pub data_dir_override: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|s| !s.is_empty()),
            gemini_base_url: std::env::var("GEMINI_BASE_URL").ok(),
            gemini_model: std::env::var("GEMINI_MODEL").ok(),
            gemini_timeout_secs: std::env::var("GEMINI_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok()),
            data_dir_override: std::env::var("IRLETTER_DATA_DIR").ok(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}
