mod common;

use common::{function, FakeGateway, FakeRates};
use idler::driver::{run, tick};
use idler::{Mode, Reconciler, ReconcilerConfig};
use std::time::Duration;

fn reconciler() -> Reconciler<FakeGateway, FakeRates> {
    let gateway = FakeGateway::new().with_function("", function("hello", Some("true"), 3.0), 1);
    let rates = FakeRates::new().with_rate("hello", 0.2);
    Reconciler::new(
        gateway,
        rates,
        ReconcilerConfig {
            inactivity_duration: Duration::from_secs(5 * 60),
            mode: Mode::Live,
        },
    )
}

#[tokio::test]
async fn test_tick_runs_one_pass() {
    let reconciler = reconciler();
    let report = tick(&reconciler).await;
    assert_eq!(report.functions.len(), 1);
    assert_eq!(reconciler.gateway().list_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_run_sleeps_between_passes() {
    let reconciler = reconciler();
    let interval = Duration::from_secs(30);

    // passes at 0s, 30s, 60s and 90s
    let res = tokio::time::timeout(Duration::from_secs(95), run(&reconciler, interval)).await;

    assert!(res.is_err());
    assert_eq!(reconciler.gateway().list_calls(), 4);
}
