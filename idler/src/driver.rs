use crate::reconciler::{Outcome, PassReport, Reconciler};
use crate::source::{FunctionGateway, RateSource};
use std::time::Duration;
use tracing::info;

/// runs a pass every `interval` until the process is stopped
pub async fn run<G, M>(reconciler: &Reconciler<G, M>, interval: Duration)
where
    G: FunctionGateway,
    M: RateSource,
{
    info!(interval_secs = interval.as_secs(), "idler started");

    loop {
        tick(reconciler).await;
        tokio::time::sleep(interval).await;
    }
}

/// one pass, followed by a summary line
pub async fn tick<G, M>(reconciler: &Reconciler<G, M>) -> PassReport
where
    G: FunctionGateway,
    M: RateSource,
{
    let report = reconciler.reconcile().await;
    info!(
        functions = report.functions.len(),
        skipped = report.count(|o| *o == Outcome::Skipped),
        active = report.count(|o| matches!(o, Outcome::Active(_))),
        idle = report.idle(),
        scaled = report.scaled(),
        errors = report.errors.len(),
        "reconciled"
    );
    report
}
