use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

/// Host-supplied configuration: where the external collections live and
/// which language the site opens in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the Supabase project (e.g., "https://xyz.supabase.co")
    pub project_url: String,

    /// Public anon key sent with every request. Row-level security on the
    /// remote tables is what protects writes, not this key.
    pub anon_key: String,

    /// Table holding the GVV chart series
    #[serde(default = "default_chart_table")]
    pub chart_table: String,

    /// Table holding monthly-letter records
    #[serde(default = "default_documents_table")]
    pub documents_table: String,

    /// Storage bucket holding the letter files
    #[serde(default = "default_bucket")]
    pub documents_bucket: String,

    /// Language the site opens in
    #[serde(default)]
    pub default_locale: Locale,
}

fn default_chart_table() -> String {
    "gvv_chart_data".to_string()
}

fn default_documents_table() -> String {
    "gvv_documents".to_string()
}

fn default_bucket() -> String {
    "gvv-documents".to_string()
}

impl SiteConfig {
    /// Config for a given project with the standard table and bucket names.
    pub fn new(project_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            project_url: project_url.into(),
            anon_key: anon_key.into(),
            chart_table: default_chart_table(),
            documents_table: default_documents_table(),
            documents_bucket: default_bucket(),
            default_locale: Locale::default(),
        }
    }
}
