use std::fmt;

#[derive(Debug)]
pub(crate) enum ClientError {
    MalformedTimestamp(String),
    Api { status: u16, message: String },
    Transport(String),
    Config(String),
    Auth(String),
    Serialization(String),
    FileSystem(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::MalformedTimestamp(value) => write!(f, "Malformed timestamp: {:?}", value),
            ClientError::Api { status, message } => write!(f, "API error ({}): {}", status, message),
            ClientError::Transport(msg) => write!(f, "Unable to reach the platform API: {}", msg),
            ClientError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ClientError::Auth(msg) => write!(f, "Authentication error: {}", msg),
            ClientError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            ClientError::FileSystem(msg) => write!(f, "File system error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::FileSystem(format!("{}", err))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for ClientError {
    fn from(err: serde_yaml::Error) -> Self {
        ClientError::Serialization(format!("YAML error: {}", err))
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::Config(format!("Error while deserializing the TOML file: {}", err))
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::Config(format!("Invalid API url: {}", err))
    }
}

impl From<ureq::Error> for ClientError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "<unreadable body>".to_string());

                ClientError::Api { status, message }
            }
            ureq::Error::Transport(transport) => ClientError::Transport(transport.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_malformed_timestamp() {
        let err = ClientError::MalformedTimestamp("not-a-date".to_string());
        assert_eq!(err.to_string(), "Malformed timestamp: \"not-a-date\"");
    }

    #[test]
    fn test_from_json_error() {
        let err: ClientError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, ClientError::Serialization(_)));
    }

    #[test]
    fn test_from_url_error() {
        let err: ClientError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
