//! Scale-to-zero for idle OpenFaaS functions.
//!
//! Every pass lists the functions of each namespace, asks prometheus for
//! their invocation rate over the inactivity window and scales the opted in
//! functions that saw no traffic down to zero replicas.

pub mod classifier;
pub mod driver;
pub mod metrics;
pub mod reconciler;
pub mod source;

pub use classifier::{classify, is_eligible, Classification};
pub use metrics::{qualified_name, MetricsMap};
pub use reconciler::{Mode, Outcome, PassError, PassReport, Reconciler, ReconcilerConfig};
pub use source::{FunctionGateway, RateSample, RateSource};
