use std::path::PathBuf;

/// Runtime configuration for the hygiene collector.
///
/// Every knob has a default so an empty environment yields a working config
/// pointed at the live page-fetch API.
#[derive(Clone)]
pub struct AppConfig {
    /// Scheme + host of the page-rendering API.
    pub api_base: String,
    /// Directory holding one raw payload file per (FSN, pincode) pair.
    pub output_dir: PathBuf,
    pub log_level: String,
    /// Per-attempt ceiling for the page-fetch request.
    pub request_timeout_secs: u64,
    /// Delay applied before the single 520 retry when the upstream sends no
    /// `Retry-After` header.
    pub retry_after_default_secs: u64,
    /// Forward proxy applied to all schemes. The URL may embed credentials.
    pub proxy_url: Option<String>,
    /// Accept the proxy's TLS-interception certificate. Off unless the
    /// configured proxy re-signs upstream traffic with its own CA.
    pub accept_invalid_certs: bool,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_base", &self.api_base)
            .field("output_dir", &self.output_dir)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("retry_after_default_secs", &self.retry_after_default_secs)
            .field("proxy_url", &self.proxy_url.as_ref().map(|_| "[redacted]"))
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}
