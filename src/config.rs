//! Endpoint settings for the hosted review table.
//!
//! The browser bundle has no runtime environment, so the values are baked in
//! at build time from `SUPABASE_URL` and `SUPABASE_ANON_KEY`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    url: String,
    anon_key: String,
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    pub fn from_build_env() -> Option<Self> {
        Self::from_values(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Option<Self> {
        match (url.map(str::trim), anon_key.map(str::trim)) {
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => Some(Self::new(url, key)),
            _ => None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path)
    }

    /// First label of the host, `abcd` for `https://abcd.supabase.co`.
    pub fn project_ref(&self) -> &str {
        let host = self
            .url
            .split_once("://")
            .map_or(self.url.as_str(), |(_, rest)| rest);
        let host = host.split(['/', ':']).next().unwrap_or(host);
        host.split('.').next().unwrap_or(host)
    }

    /// `localStorage` key holding the persisted session.
    pub fn session_storage_key(&self) -> String {
        format!("sb-{}-auth-token", self.project_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_without_double_slash() {
        let config = SupabaseConfig::new("https://abcd.supabase.co/", "anon");
        assert_eq!(config.url(), "https://abcd.supabase.co");
        assert_eq!(config.rest_url("client_reviews"), "https://abcd.supabase.co/rest/v1/client_reviews");
        assert_eq!(config.auth_url("logout"), "https://abcd.supabase.co/auth/v1/logout");
    }

    #[test]
    fn storage_key_uses_project_ref() {
        let config = SupabaseConfig::new("https://abcd.supabase.co", "anon");
        assert_eq!(config.session_storage_key(), "sb-abcd-auth-token");

        let local = SupabaseConfig::new("http://localhost:54321", "anon");
        assert_eq!(local.project_ref(), "localhost");
    }

    #[test]
    fn blank_build_values_mean_unconfigured() {
        assert_eq!(SupabaseConfig::from_values(Some(" "), Some("key")), None);
        assert_eq!(SupabaseConfig::from_values(Some("https://x.supabase.co"), None), None);
        assert!(SupabaseConfig::from_values(Some("https://x.supabase.co"), Some("key")).is_some());
    }
}
