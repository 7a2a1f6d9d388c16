use crate::client::unexpected_status;
use crate::utils::QUERY_PATH;
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::debug;
use utility::faas::metrics::VectorQueryResponse;
use utility::{Error, Result};

/// PrometheusQuery runs instant queries against a prometheus server
pub struct PrometheusQuery {
    http_client: reqwest::Client,
    endpoint: Url,
}

impl PrometheusQuery {
    /// a client for `http://host:port/api/v1/query`
    pub fn new(host: &str, port: u16, timeout: Duration) -> Result<PrometheusQuery> {
        let endpoint = Url::parse(format!("http://{}:{}{}", host, port, QUERY_PATH).as_str())?;
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(PrometheusQuery {
            http_client,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// runs `query` and decodes the vector result
    pub async fn fetch(&self, query: &str) -> Result<VectorQueryResponse> {
        debug!(query, "prometheus query");

        let res = self
            .http_client
            .get(self.endpoint.clone())
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|e| {
                Error::Custom(format!(
                    "can't query prometheus on URL {}\nand debug reason {:?}",
                    self.endpoint.as_str(),
                    e
                ))
            })?;

        match res.status() {
            StatusCode::OK => {
                let body = res.text().await?;
                let out: VectorQueryResponse = serde_json::from_str(body.as_str()).map_err(|e| {
                    Error::Custom(format!(
                        "can't decode prometheus response from URL {}\nand debug reason {:?}",
                        self.endpoint.as_str(),
                        e
                    ))
                })?;
                Ok(out)
            }
            _ => Err(unexpected_status(res).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PrometheusQuery;
    use std::time::Duration;

    #[test]
    fn test_endpoint() {
        let query = PrometheusQuery::new("prometheus", 9090, Duration::from_secs(3)).unwrap();
        assert_eq!(
            query.endpoint().as_str(),
            "http://prometheus:9090/api/v1/query"
        );
    }
}
