/// response shapes of the prometheus instant query API as read by the idler
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// VectorQueryResponse is the body of `GET /api/v1/query` for a vector result
#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct VectorQueryResponse {
    #[serde(default)]
    pub status: String, //`json:"status"`
    #[serde(default)]
    pub data: VectorQueryData, //`json:"data"`
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct VectorQueryData {
    #[serde(rename = "resultType")]
    #[serde(default)]
    pub result_type: String, //`json:"resultType"`
    #[serde(default)]
    pub result: Vec<VectorSample>, //`json:"result"`
}

/// one series of the result vector
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct VectorSample {
    #[serde(default)]
    pub metric: SampleLabels, //`json:"metric"`
    /// unix timestamp and the sample value, which prometheus sends as a string
    pub value: (f64, String), //`json:"value"`
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct SampleLabels {
    #[serde(default)]
    pub code: String, //`json:"code"`
    #[serde(rename = "function_name")]
    #[serde(default)]
    pub function_name: String, //`json:"function_name"`
}

impl VectorSample {
    /// parsed sample value
    pub fn value(&self) -> Result<f64> {
        self.value.1.trim().parse::<f64>().map_err(|e| {
            Error::Custom(format!(
                "unable to convert value {:?} for metric: {}",
                self.value.1, e
            ))
        })
    }
}
