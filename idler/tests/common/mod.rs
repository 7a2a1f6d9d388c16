#![allow(dead_code)]

use async_trait::async_trait;
use idler::{FunctionGateway, RateSample, RateSource};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use utility::faas::types::model::FunctionStatus;
use utility::{Error, Result, SCALE_ZERO_LABEL};

#[derive(Debug, Clone, PartialEq)]
pub struct ScaleCall {
    pub name: String,
    pub namespace: String,
    pub replicas: u64,
}

/// in-memory gateway. namespaces without an entry in `functions` fail to
/// list, functions without an entry in `live` fail their status refresh
#[derive(Default)]
pub struct FakeGateway {
    pub namespaces: Option<Vec<String>>,
    pub functions: HashMap<String, Vec<FunctionStatus>>,
    /// (namespace, name) -> live status
    pub live: HashMap<(String, String), FunctionStatus>,
    pub failing_scales: HashSet<String>,
    pub scale_calls: Mutex<Vec<ScaleCall>>,
    pub list_calls: AtomicUsize,
}

impl FakeGateway {
    pub fn new() -> FakeGateway {
        FakeGateway {
            namespaces: Some(vec![]),
            ..Default::default()
        }
    }

    /// adds `function` to the listing of `namespace` with `available` live replicas
    pub fn with_function(
        mut self,
        namespace: &str,
        function: FunctionStatus,
        available: u64,
    ) -> Self {
        let live = FunctionStatus {
            available_replicas: available,
            replicas: available,
            ..function.clone()
        };
        self.live
            .insert((namespace.to_string(), function.name.clone()), live);
        self.functions
            .entry(namespace.to_string())
            .or_insert_with(Vec::new)
            .push(function);
        self
    }

    pub fn scale_calls(&self) -> Vec<ScaleCall> {
        self.scale_calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FunctionGateway for FakeGateway {
    async fn list_namespaces(&self) -> Result<Vec<String>> {
        self.namespaces
            .clone()
            .ok_or_else(|| Error::Custom("namespaces unavailable".into()))
    }

    async fn list_functions(&self, namespace: &str) -> Result<Vec<FunctionStatus>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.functions
            .get(namespace)
            .cloned()
            .ok_or_else(|| Error::Custom(format!("can't list namespace {:?}", namespace)))
    }

    async fn get_function_status(&self, name: &str, namespace: &str) -> Result<FunctionStatus> {
        self.live
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| Error::Custom(format!("No such function: {}", name)))
    }

    async fn scale_function(&self, name: &str, namespace: &str, replicas: u64) -> Result<()> {
        if self.failing_scales.contains(name) {
            return Err(Error::Custom("Server returned unexpected status code 500".into()));
        }
        self.scale_calls.lock().unwrap().push(ScaleCall {
            name: name.to_string(),
            namespace: namespace.to_string(),
            replicas,
        });
        Ok(())
    }
}

/// in-memory prometheus keyed by qualified function name. unknown names
/// return no series, names in `failing` return an error
#[derive(Default)]
pub struct FakeRates {
    pub series: HashMap<String, Vec<RateSample>>,
    pub failing: HashSet<String>,
    pub queries: Mutex<Vec<(String, Duration)>>,
}

impl FakeRates {
    pub fn new() -> FakeRates {
        FakeRates::default()
    }

    /// a single 200 series for `qualified_name` at `rate`
    pub fn with_rate(mut self, qualified_name: &str, rate: f64) -> Self {
        self.series
            .entry(qualified_name.to_string())
            .or_insert_with(Vec::new)
            .push(RateSample {
                code: "200".into(),
                function_name: qualified_name.to_string(),
                value: rate,
            });
        self
    }

    pub fn failing(mut self, qualified_name: &str) -> Self {
        self.failing.insert(qualified_name.to_string());
        self
    }

    pub fn queries(&self) -> Vec<(String, Duration)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl RateSource for FakeRates {
    async fn fetch_rate(&self, function_name: &str, window: Duration) -> Result<Vec<RateSample>> {
        self.queries
            .lock()
            .unwrap()
            .push((function_name.to_string(), window));
        if self.failing.contains(function_name) {
            return Err(Error::Custom("can't query prometheus".into()));
        }
        Ok(self.series.get(function_name).cloned().unwrap_or_default())
    }
}

/// a function as listed by the gateway
pub fn function(name: &str, label: Option<&str>, invocation_count: f64) -> FunctionStatus {
    FunctionStatus {
        name: name.to_string(),
        image: format!("functions/{}:latest", name),
        labels: label.map(|value| {
            [(SCALE_ZERO_LABEL.to_string(), value.to_string())]
                .iter()
                .cloned()
                .collect()
        }),
        invocation_count,
        ..Default::default()
    }
}
