use serde::Deserialize;

pub(crate) const DEFAULT_GROUP: &str = "platform.io";
pub(crate) const DEFAULT_VERSION: &str = "v1";

fn default_group() -> String {
    DEFAULT_GROUP.to_string()
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct Api {
    pub(crate) port: u16,
    pub(crate) scheme: String,
    /// API group the platform resources are served under.
    #[serde(default = "default_group")]
    pub(crate) group: String,
    #[serde(default = "default_version")]
    pub(crate) version: String,
}

impl Default for Api {
    fn default() -> Self {
        Api {
            port: 8080,
            scheme: "http".to_string(),
            group: default_group(),
            version: default_version(),
        }
    }
}
