use tamil_core::reverse::{parse_response, query_pairs, InputTool, ReverseError};
use tamil_core::settings::ReverseSettings;
use tracing::debug_span;

/// [`InputTool`] backed by the hosted input-tool HTTP endpoint.
pub struct HttpInputTool {
    agent: ureq::Agent,
    settings: ReverseSettings,
}

impl HttpInputTool {
    pub fn new(settings: ReverseSettings) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(settings.timeout()))
            .build()
            .into();
        Self { agent, settings }
    }

    /// Build from the process-wide settings.
    pub fn from_global() -> Self {
        Self::new(tamil_core::settings::settings().reverse.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.settings.endpoint
    }

    fn fetch(&self, text: &str) -> Result<String, ReverseError> {
        let url = &self.settings.endpoint;
        let pairs = query_pairs(&self.settings, text);
        self.agent
            .get(url.as_str())
            .query_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .call()
            .map_err(|e| ReverseError::Http(format!("{url}: {e}")))?
            .into_body()
            .read_to_string()
            .map_err(|e| ReverseError::Http(format!("{url}: {e}")))
    }
}

impl InputTool for HttpInputTool {
    fn suggest(&self, text: &str) -> Result<String, ReverseError> {
        let _span = debug_span!("input_tool_request", len = text.len()).entered();
        let body = self.fetch(text)?;
        parse_response(&body)
    }
}
