use serde::{Deserialize, Serialize};
///scales the service to the requested replcia count.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ScaleServiceRequest<'s> {
    #[serde(rename = "serviceName")]
    pub service_name: &'s str, // `json:"serviceName"`
    pub replicas: u64, //`json:"replicas"`
}

/// ProviderInfo provides information about the configured provider
#[derive(Serialize, Deserialize, PartialEq, Clone, Default, Debug)]
pub struct ProviderInfo {
    #[serde(rename = "provider")]
    #[serde(default)]
    pub name: String, //       `json:"provider"`
    #[serde(default)]
    pub version: VersionInfo, //`json:"version"`
    #[serde(default)]
    pub orchestration: String, //       `json:"orchestration"`
}

/// VersionInfo provides the commit message, sha and release version number
#[derive(Serialize, Deserialize, PartialEq, Clone, Default, Debug)]
pub struct VersionInfo {
    #[serde(default)]
    pub commit_message: String, // `json:"commit_message,omitempty"`
    #[serde(default)]
    pub sha: String, // `json:"sha"`
    #[serde(default)]
    pub release: String, // `json:"release"`
}

#[cfg(test)]
mod tests {
    use super::ScaleServiceRequest;

    #[test]
    fn test_scale_request_wire_format() {
        let req = ScaleServiceRequest {
            service_name: "hello",
            replicas: 0,
        };
        let body = serde_json::to_string(&req).unwrap();
        assert_eq!(body, r#"{"serviceName":"hello","replicas":0}"#);
    }
}
