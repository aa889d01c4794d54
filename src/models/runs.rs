use serde_json::Value;
use std::fmt;
use crate::models::users::SENTINEL;
use crate::utils::json::lookup_string;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunStatus {
    Queued,
    Running,
    Complete,
    Cancelled,
    Failed,
    Creating,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queued => write!(f, "QUEUED"),
            Self::Running => write!(f, "RUNNING"),
            Self::Complete => write!(f, "COMPLETE"),
            Self::Cancelled => write!(f, "CANCELLED"),
            Self::Failed => write!(f, "FAILED"),
            Self::Creating => write!(f, "CREATING"),
        }
    }
}

impl std::str::FromStr for RunStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "QUEUED" => Ok(Self::Queued),
            "RUNNING" => Ok(Self::Running),
            "COMPLETE" => Ok(Self::Complete),
            "CANCELLED" => Ok(Self::Cancelled),
            "FAILED" => Ok(Self::Failed),
            "CREATING" => Ok(Self::Creating),
            other => Err(format!("Unknown run status: {}", other)),
        }
    }
}

/// A job run as seen from its owner's point of view.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RunRef {
    pub(crate) name: String,
    /// Runs live in their owner's namespace, so this is the user name.
    pub(crate) namespace: String,
    pub(crate) creation_timestamp: String,
    pub(crate) state: Option<RunStatus>,
}

impl RunRef {
    #[cfg(test)]
    pub(crate) fn new(creation_timestamp: &str, state: Option<RunStatus>) -> RunRef {
        RunRef {
            name: SENTINEL.to_string(),
            namespace: SENTINEL.to_string(),
            creation_timestamp: creation_timestamp.to_string(),
            state,
        }
    }

    pub(crate) fn from_k8s_response(object: &Value) -> RunRef {
        let state = lookup_string(object, &["spec", "state"])
            .and_then(|raw| match raw.parse::<RunStatus>() {
                Ok(state) => Some(state),
                Err(err) => {
                    debug!("{}", err);
                    None
                }
            });

        RunRef {
            name: lookup_string(object, &["metadata", "name"]).unwrap_or_else(|| SENTINEL.to_string()),
            namespace: lookup_string(object, &["metadata", "namespace"]).unwrap_or_else(|| SENTINEL.to_string()),
            creation_timestamp: lookup_string(object, &["metadata", "creationTimestamp"])
                .unwrap_or_else(|| SENTINEL.to_string()),
            state,
        }
    }
}
