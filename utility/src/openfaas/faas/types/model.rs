use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// FunctionStatus exported for system/functions endpoint
#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct FunctionStatus {
    // Name is the name of the function deployment
    #[serde(default)]
    pub name: String, //`json:"name"`

    // Image is a fully-qualified container image
    #[serde(default)]
    pub image: String, //`json:"image"`

    // Namespace for the function, if supported by the faas_provider
    #[serde(default)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String, //`json:"namespace,omitempty"`

    // Labels are metadata for functions which may be used by the
    // faas_provider or the gateway. None when the provider sent no label map.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>, //`json:"labels,omitempty"`

    // Annotations are metadata for functions which may be used by the
    // faas_provider or the gateway
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<HashMap<String, String>>, //`json:"annotations,omitempty"`

    // ================
    // Fields for status
    // ================

    // InvocationCount count of invocations
    #[serde(rename = "invocationCount")]
    #[serde(default)]
    pub invocation_count: f64, //`json:"invocationCount,omitempty"`

    // Replicas desired within the cluster
    #[serde(default)]
    pub replicas: u64, //`json:"replicas,omitempty"`

    // AvailableReplicas is the count of replicas ready to receive
    // invocations as reported by the faas_provider
    #[serde(rename = "availableReplicas")]
    #[serde(default)]
    pub available_replicas: u64, //`json:"availableReplicas,omitempty"`

    // CreatedAt is the time read back from the faas backend's
    // data store for when the function or its container was created.
    //rfc3339
    #[serde(rename = "createdAt")]
    #[serde(default)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_at: String, //`json:"createdAt,omitempty"`
}

impl FunctionStatus {
    /// value of the given label, None if the function has no such label
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels
            .as_ref()
            .and_then(|labels| labels.get(key))
            .map(|v| v.as_str())
    }
}
