use crate::metrics::invocation_rate_query;
use async_trait::async_trait;
use proxy::client::Client;
use proxy::prometheus::PrometheusQuery;
use std::time::Duration;
use tracing::warn;
use utility::faas::types::model::FunctionStatus;
use utility::Result;

/// the part of the gateway API the reconciler drives
#[async_trait]
pub trait FunctionGateway: Send + Sync {
    /// namespaces the provider knows about, empty when it has none
    async fn list_namespaces(&self) -> Result<Vec<String>>;
    async fn list_functions(&self, namespace: &str) -> Result<Vec<FunctionStatus>>;
    /// live status of a single function
    async fn get_function_status(&self, name: &str, namespace: &str) -> Result<FunctionStatus>;
    async fn scale_function(&self, name: &str, namespace: &str, replicas: u64) -> Result<()>;
}

/// one series of an invocation rate query
#[derive(Debug, Clone, PartialEq)]
pub struct RateSample {
    pub code: String,
    pub function_name: String,
    pub value: f64,
}

/// where invocation rates come from
#[async_trait]
pub trait RateSource: Send + Sync {
    /// per status code invocation rate of `function_name` over `window`
    async fn fetch_rate(&self, function_name: &str, window: Duration) -> Result<Vec<RateSample>>;
}

#[async_trait]
impl<'s> FunctionGateway for Client<'s> {
    async fn list_namespaces(&self) -> Result<Vec<String>> {
        Client::list_namespaces(self).await
    }

    async fn list_functions(&self, namespace: &str) -> Result<Vec<FunctionStatus>> {
        Client::list_functions(self, namespace).await
    }

    async fn get_function_status(&self, name: &str, namespace: &str) -> Result<FunctionStatus> {
        self.get_function_info(name, namespace).await
    }

    async fn scale_function(&self, name: &str, namespace: &str, replicas: u64) -> Result<()> {
        Client::scale_function(self, name, namespace, replicas).await
    }
}

#[async_trait]
impl RateSource for PrometheusQuery {
    async fn fetch_rate(&self, function_name: &str, window: Duration) -> Result<Vec<RateSample>> {
        let query = invocation_rate_query(function_name, window);
        let res = self.fetch(query.as_str()).await?;

        // one unreadable series makes the whole sum meaningless
        let mut samples = Vec::with_capacity(res.data.result.len());
        for series in res.data.result {
            let value = series.value().map_err(|e| {
                warn!(function = function_name, code = %series.metric.code, error = %e, "malformed sample");
                e
            })?;
            samples.push(RateSample {
                code: series.metric.code,
                function_name: series.metric.function_name,
                value,
            });
        }
        Ok(samples)
    }
}
