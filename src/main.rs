// Copyright 2026, The Samba Operator Authors
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use samba_testkit::config::{Config, WaitFor};
use samba_testkit::kubernetes::{TestClient, WaitContext};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        "Waiting for pod '{}' in namespace {} to be {:?} (timeout {:?})",
        config.label_selector, config.namespace, config.wait_for, config.timeout
    );

    let client = TestClient::new(&config.kubeconfig_path)
        .await
        .context("failed to create Kubernetes client")?;

    let ctx = WaitContext::new().with_timeout(config.timeout);
    let result = match config.wait_for {
        WaitFor::Ready => {
            client
                .wait_for_pod_ready_by_label(&ctx, &config.label_selector, &config.namespace)
                .await
        }
        WaitFor::Exists => {
            client
                .wait_for_pod_exists_by_label(&ctx, &config.label_selector, &config.namespace)
                .await
        }
    };

    if let Err(e) = &result {
        warn!("Wait failed: {}", e);
    }
    result.context("pod wait did not succeed")?;

    info!("Pod '{}' is {:?}", config.label_selector, config.wait_for);
    Ok(())
}
