use std::time::Duration;
use serde::de::DeserializeOwned;
use url::Url;
use crate::api::dto::list::ResourceList;
use crate::config::config::Config;
use crate::error::ClientError;
use crate::models::runs::RunRef;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the platform resources API.
pub(crate) struct PlatformClient {
    agent: ureq::Agent,
    base_url: Url,
    token: String,
}

impl PlatformClient {
    pub(crate) fn new(configuration: &Config, token: String) -> Result<PlatformClient, ClientError> {
        let base_url = Url::parse(&configuration.get_api_url())?
            .join(&format!("apis/{}/{}/", configuration.api.group, configuration.api.version))?;

        Ok(PlatformClient {
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
            base_url,
            token,
        })
    }

    pub(crate) fn resource_url(&self, resource: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(resource)?)
    }

    fn get<T: DeserializeOwned>(&self, resource: &str) -> Result<T, ClientError> {
        let url = self.resource_url(resource)?;
        debug!("GET {}", url);

        let response = self.agent
            .get(url.as_str())
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Content-Type", "application/json")
            .call()?;

        let value = response.into_json::<T>()
            .map_err(|err| ClientError::Serialization(format!("invalid {} payload: {}", resource, err)))?;

        Ok(value)
    }

    /// Raw `users` objects, parsed later by `User::from_k8s_response`.
    pub(crate) fn list_users(&self) -> Result<Vec<serde_json::Value>, ClientError> {
        let list: ResourceList = self.get("users")?;
        debug!("fetched {} users ({:?})", list.items.len(), list.kind);

        Ok(list.items)
    }

    /// Runs across every namespace.
    pub(crate) fn list_runs(&self) -> Result<Vec<RunRef>, ClientError> {
        let list: ResourceList = self.get("runs")?;
        debug!("fetched {} runs ({:?})", list.items.len(), list.kind);

        Ok(list.items.iter().map(RunRef::from_k8s_response).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::api::Api;

    fn configuration(group: &str, version: &str) -> Config {
        Config {
            current: true,
            name: "test".to_string(),
            host: "10.0.0.1".to_string(),
            api: Api {
                port: 8443,
                scheme: "https".to_string(),
                group: group.to_string(),
                version: version.to_string(),
            },
        }
    }

    #[test]
    fn test_resource_url() {
        let client = PlatformClient::new(&configuration("platform.io", "v1"), "token".to_string()).unwrap();

        assert_eq!(client.resource_url("users").unwrap().as_str(), "https://10.0.0.1:8443/apis/platform.io/v1/users");
        assert_eq!(client.resource_url("runs").unwrap().as_str(), "https://10.0.0.1:8443/apis/platform.io/v1/runs");
    }

    #[test]
    fn test_invalid_host() {
        let mut config = configuration("platform.io", "v1");
        config.host = "bad host".to_string();

        assert!(matches!(PlatformClient::new(&config, "token".to_string()), Err(ClientError::Config(_))));
    }
}
