//! Widget Configuration

use chat_client::ClientConfig;

/// Settings for one mounted widget
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Origin the page was served from; the answer endpoint lives there too
    pub origin: String,

    /// Path of the answer endpoint
    pub endpoint_path: String,

    /// Avatar image for assistant messages
    pub avatar_src: String,

    /// Placeholder text of the query box
    pub input_placeholder: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:8080".into(),
            endpoint_path: chat_core::ANSWER_PATH.into(),
            avatar_src: chat_core::AVATAR_PATH.into(),
            input_placeholder: "Type your question...".into(),
        }
    }
}

impl WidgetConfig {
    /// Configuration for the page currently loaded in the browser
    pub fn from_window() -> Self {
        match web_sys::window().and_then(|w| w.location().origin().ok()) {
            Some(origin) => Self {
                origin,
                ..Default::default()
            },
            None => {
                tracing::warn!("Window origin unavailable, using default answer service origin");
                Self::default()
            }
        }
    }

    /// HTTP client settings derived from this widget
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.origin.clone()).with_endpoint_path(self.endpoint_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_targets_origin() {
        let config = WidgetConfig {
            origin: "https://clinic.example.org".into(),
            ..Default::default()
        };
        assert_eq!(
            config.client_config().endpoint(),
            "https://clinic.example.org/get"
        );
        assert_eq!(config.avatar_src, "/images/avatar.png");
    }
}
