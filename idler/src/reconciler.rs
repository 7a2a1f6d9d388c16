use crate::classifier::{classify, Classification};
use crate::metrics::{build_metrics_map, qualified_name};
use crate::source::{FunctionGateway, RateSource};
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info, warn};
use utility::faas::types::model::FunctionStatus;

/// whether idle functions are actually scaled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Live,
    /// log the scale requests that would be sent and leave replicas alone.
    /// covers both `--dry-run` and `--read-only`
    DryRun,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReconcilerConfig {
    /// window a function must see no invocations in to be idle
    pub inactivity_duration: Duration,
    pub mode: Mode,
}

/// what happened to one function during a pass
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// not opted in
    Skipped,
    /// no usable rate this pass, decided again next pass
    NoData,
    Active(f64),
    /// idle, but no replica is available
    AlreadyZero,
    /// idle and would have been scaled
    DryRun,
    /// idle, a scale request was already issued for it earlier in this pass
    Duplicate,
    /// idle and a scale to zero request was accepted
    Scaled,
    /// idle, but refreshing its status or scaling it failed
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionReport {
    pub namespace: String,
    /// qualified name, see `metrics::qualified_name`
    pub function: String,
    pub outcome: Outcome,
}

/// work a pass had to abandon
#[derive(Debug, Clone, PartialEq)]
pub enum PassError {
    /// the namespace listing failed, only the default namespace was reconciled
    ListNamespaces(String),
    /// the functions of `namespace` could not be listed
    ListFunctions { namespace: String, error: String },
}

/// everything a pass did, nothing of it outlives the pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassReport {
    pub functions: Vec<FunctionReport>,
    pub errors: Vec<PassError>,
}

impl PassReport {
    pub fn outcome(&self, qualified_name: &str) -> Option<&Outcome> {
        self.functions
            .iter()
            .find(|report| report.function == qualified_name)
            .map(|report| &report.outcome)
    }

    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Outcome) -> bool,
    {
        self.functions
            .iter()
            .filter(|report| predicate(&report.outcome))
            .count()
    }

    pub fn scaled(&self) -> usize {
        self.count(|outcome| *outcome == Outcome::Scaled)
    }

    pub fn idle(&self) -> usize {
        self.count(|outcome| {
            matches!(
                outcome,
                Outcome::AlreadyZero
                    | Outcome::DryRun
                    | Outcome::Duplicate
                    | Outcome::Scaled
                    | Outcome::Failed(_)
            )
        })
    }
}

/// Reconciler scales idle, opted in functions to zero
pub struct Reconciler<G, M> {
    gateway: G,
    metrics: M,
    config: ReconcilerConfig,
}

impl<G, M> Reconciler<G, M>
where
    G: FunctionGateway,
    M: RateSource,
{
    pub fn new(gateway: G, metrics: M, config: ReconcilerConfig) -> Reconciler<G, M> {
        Reconciler {
            gateway,
            metrics,
            config,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    /// one pass over the default namespace and then every namespace the
    /// gateway lists
    pub async fn reconcile(&self) -> PassReport {
        let mut pass = Pass::default();

        // providers without namespaces only have the default one
        self.reconcile_namespace("", &mut pass).await;

        match self.gateway.list_namespaces().await {
            Ok(namespaces) => {
                for namespace in namespaces.iter().filter(|ns| !ns.is_empty()) {
                    self.reconcile_namespace(namespace, &mut pass).await;
                }
            }
            Err(e) => {
                warn!(error = %e, "unable to list namespaces");
                pass.report
                    .errors
                    .push(PassError::ListNamespaces(e.to_string()));
            }
        }

        pass.report
    }

    async fn reconcile_namespace(&self, namespace: &str, pass: &mut Pass) {
        let functions = match self.gateway.list_functions(namespace).await {
            Ok(functions) => functions,
            Err(e) => {
                warn!(namespace, error = %e, "unable to list functions");
                pass.report.errors.push(PassError::ListFunctions {
                    namespace: namespace.to_string(),
                    error: e.to_string(),
                });
                return;
            }
        };

        let metrics = build_metrics_map(
            &self.metrics,
            &functions,
            namespace,
            self.config.inactivity_duration,
        )
        .await;

        for function in &functions {
            let name = qualified_name(function.name.as_str(), namespace);

            let outcome = match classify(function, metrics.rate(name.as_str())) {
                Classification::Ineligible => {
                    debug!(function = %name, "skip: missing scale to zero label");
                    Outcome::Skipped
                }
                Classification::NoData => {
                    debug!(function = %name, "skip: no invocation data");
                    Outcome::NoData
                }
                Classification::Active(rate) => {
                    debug!(function = %name, rate, "active");
                    Outcome::Active(rate)
                }
                Classification::Idle => {
                    info!(function = %name, "idle");
                    self.scale_down(function, namespace, pass).await
                }
            };

            pass.report.functions.push(FunctionReport {
                namespace: namespace.to_string(),
                function: name,
                outcome,
            });
        }
    }

    /// scales an idle function to zero once its live status confirms it
    /// still has replicas available
    async fn scale_down(
        &self,
        function: &FunctionStatus,
        namespace: &str,
        pass: &mut Pass,
    ) -> Outcome {
        let name = function.name.as_str();

        let status = match self.gateway.get_function_status(name, namespace).await {
            Ok(status) => status,
            Err(e) => {
                warn!(function = name, namespace, error = %e, "unable to read function status");
                return Outcome::Failed(e.to_string());
            }
        };

        if status.available_replicas == 0 {
            debug!(function = name, namespace, "already scaled to zero");
            return Outcome::AlreadyZero;
        }

        // an unscoped listing can return the functions of a named namespace again
        let identity = (
            if status.namespace.is_empty() {
                namespace.to_string()
            } else {
                status.namespace.clone()
            },
            name.to_string(),
        );
        if !pass.scaled.insert(identity) {
            debug!(function = name, namespace, "scale request already issued this pass");
            return Outcome::Duplicate;
        }

        if self.config.mode == Mode::DryRun {
            info!(function = name, namespace, replicas = 0, "dry-run: scaling");
            return Outcome::DryRun;
        }

        match self.gateway.scale_function(name, namespace, 0).await {
            Ok(()) => {
                info!(function = name, namespace, replicas = 0, "scaled");
                Outcome::Scaled
            }
            Err(e) => {
                warn!(function = name, namespace, error = %e, "unable to scale function");
                Outcome::Failed(e.to_string())
            }
        }
    }
}

#[derive(Default)]
struct Pass {
    report: PassReport,
    /// (namespace, name) of every function a scale request went out for
    scaled: HashSet<(String, String)>,
}
