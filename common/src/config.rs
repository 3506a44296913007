//! Where the storefront API lives.
//!
//! The base URL defaults to a local backend and can be overridden at build
//! time with the `STOREFRONT_API_URL` environment variable.

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self {
            base_url: trimmed.to_string(),
        }
    }

    /// Resolves the configuration from a build-time override, falling back
    /// to [`DEFAULT_API_URL`].
    pub fn from_override(value: Option<&str>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }

    pub fn product_url(&self, id: i64) -> String {
        format!("{}/api/products/{}", self.base_url, id)
    }

    pub fn upload_url(&self, reference: &str) -> String {
        format!("{}/uploads/{}", self.base_url, reference)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_urls() {
        let config = ApiConfig::default();
        assert_eq!(config.products_url(), "http://localhost:8080/api/products");
        assert_eq!(config.product_url(7), "http://localhost:8080/api/products/7");
        assert_eq!(config.upload_url("x.png"), "http://localhost:8080/uploads/x.png");
    }

    #[test]
    fn override_is_trimmed() {
        let config = ApiConfig::from_override(Some("https://shop.example.com/ "));
        assert_eq!(config.base_url(), "https://shop.example.com");
    }

    #[test]
    fn blank_override_uses_default() {
        assert_eq!(ApiConfig::from_override(Some("  ")), ApiConfig::default());
        assert_eq!(ApiConfig::from_override(None), ApiConfig::default());
    }
}
