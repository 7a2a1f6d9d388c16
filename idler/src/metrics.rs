use crate::source::{RateSample, RateSource};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};
use utility::faas::types::model::FunctionStatus;

/// counter the gateway increments for every function invocation
pub const INVOCATION_METRIC: &str = "gateway_function_invocation_total";

/// name the gateway reports a function's metrics under, `name.namespace`
/// or just `name` in the default namespace
pub fn qualified_name(name: &str, namespace: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", name, namespace)
    }
}

/// the window as a prometheus range in whole minutes, e.g. `5m`
pub fn range_window(window: Duration) -> String {
    format!("{}m", window.as_secs() / 60)
}

/// summed per status code rate of invocations of `function_name` over `window`
pub fn invocation_rate_query(function_name: &str, window: Duration) -> String {
    format!(
        r#"sum(rate({}{{function_name="{}", code=~".*"}}[{}])) by (code, function_name)"#,
        INVOCATION_METRIC,
        function_name,
        range_window(window)
    )
}

/// summed invocation rate per qualified function name for one pass.
/// a function missing from the map had no usable data
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MetricsMap {
    rates: HashMap<String, f64>,
}

impl MetricsMap {
    pub fn new() -> MetricsMap {
        MetricsMap::default()
    }

    pub fn insert(&mut self, qualified_name: String, rate: f64) {
        self.rates.insert(qualified_name, rate);
    }

    pub fn rate(&self, qualified_name: &str) -> Option<f64> {
        self.rates.get(qualified_name).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// rate of `qualified_name` from one query result, or None when the result
/// says nothing about the function.
///
/// no series at all counts as a zero rate only for a function that has never
/// been invoked, otherwise the series may just be missing from prometheus
pub fn summed_rate(
    qualified_name: &str,
    invocation_count: f64,
    samples: &[RateSample],
) -> Option<f64> {
    if samples.is_empty() && invocation_count != 0.0 {
        return None;
    }
    let rate: f64 = samples
        .iter()
        .filter(|sample| sample.function_name == qualified_name)
        .map(|sample| sample.value)
        .sum();
    Some(rate)
}

/// queries the rate of every function of `namespace`, one at a time.
/// a failed query leaves that function out of the map
pub async fn build_metrics_map<R>(
    source: &R,
    functions: &[FunctionStatus],
    namespace: &str,
    window: Duration,
) -> MetricsMap
where
    R: RateSource + ?Sized,
{
    let mut map = MetricsMap::new();

    for function in functions {
        let name = qualified_name(function.name.as_str(), namespace);

        let samples = match source.fetch_rate(name.as_str(), window).await {
            Ok(samples) => samples,
            Err(e) => {
                warn!(function = %name, error = %e, "unable to query invocation rate");
                continue;
            }
        };

        for sample in &samples {
            debug!(function = %name, code = %sample.code, rate = sample.value, "sample");
        }

        match summed_rate(name.as_str(), function.invocation_count, &samples) {
            Some(rate) => map.insert(name, rate),
            None => {
                debug!(function = %name, "no series for a function with invocations");
            }
        }
    }

    map
}
