use config::environment::Config;
use config::secrets::Credentials;
use idler::driver;
use idler::{Mode, Reconciler, ReconcilerConfig};
use proxy::auth::BasicAuth;
use proxy::client::Client;
use proxy::prometheus::PrometheusQuery;
use tracing::{info, warn};
use utility::{Error, Result};

/// connects to the gateway and prometheus, then reconciles forever.
/// only returns when startup fails
pub async fn start(config: Config, dry_run: bool) -> Result<()> {
    if config.gateway_url.is_empty() {
        return Err(Error::Custom(
            "gateway_url (faas-netes/faas-swarm) is required".to_string(),
        ));
    }

    let credentials = Credentials::read(&config.secret_mount_path);
    if credentials.is_empty() {
        warn!(
            path = %config.secret_mount_path.display(),
            "no basic auth credentials found, calling the gateway without them"
        );
    }
    let auth = BasicAuth::new(&credentials.username, &credentials.password);
    let client = Client::with_timeout(Box::new(&auth), &config.gateway_url, config.http_timeout)?;

    let info = client.get_system_info().await.map_err(|e| {
        Error::Custom(format!(
            "can't reach the OpenFaaS gateway on URL {}\nand debug reason {}",
            config.gateway_url, e
        ))
    })?;
    info!(
        version = %info.version.release,
        sha = %info.version.sha,
        provider = %info.provider.name,
        "gateway"
    );

    let prometheus = PrometheusQuery::new(
        &config.prometheus_host,
        config.prometheus_port,
        config.http_timeout,
    )?;

    let mode = if dry_run { Mode::DryRun } else { Mode::Live };
    info!(
        gateway_url = %config.gateway_url,
        prometheus = %prometheus.endpoint(),
        inactivity_minutes = config.inactivity_minutes(),
        reconcile_interval = ?config.reconcile_interval,
        dry_run,
        "config"
    );

    let reconciler = Reconciler::new(
        client,
        prometheus,
        ReconcilerConfig {
            inactivity_duration: config.inactivity_duration,
            mode,
        },
    );
    driver::run(&reconciler, config.reconcile_interval).await;

    Ok(())
}
