// Copyright 2026, The Samba Operator Authors
// SPDX-License-Identifier: Apache-2.0

//! Test client creation and pod lookup by label selector

use crate::error::{Result, TestkitError};
use crate::kubernetes::pods::PodFetchOptions;
use k8s_openapi::api::core::v1::Pod;
use kube::{
    api::ListParams,
    config::{KubeConfigOptions, Kubeconfig},
    Api, Client, Config as KConfig,
};
use tracing::{debug, info, instrument};

/// Helper for doing common things against a cluster from integration tests.
#[derive(Clone)]
pub struct TestClient {
    client: Client,
}

impl TestClient {
    /// Create a test client from a kubeconfig file.
    ///
    /// An empty path falls back to the usual discovery rules: the `KUBECONFIG`
    /// env var, `~/.kube/config`, then the in-cluster service account.
    #[instrument]
    pub async fn new(kubeconfig: &str) -> Result<Self> {
        let config = if kubeconfig.is_empty() {
            KConfig::infer()
                .await
                .map_err(|e| TestkitError::KubeconfigError(format!("Failed to infer config: {}", e)))?
        } else {
            let contents = tokio::fs::read_to_string(kubeconfig).await.map_err(|e| {
                TestkitError::KubeconfigError(format!("Failed to read {}: {}", kubeconfig, e))
            })?;
            config_from_kubeconfig(&contents).await?
        };

        info!("Using cluster at {}", config.cluster_url);

        let client = Client::try_from(config)
            .map_err(|e| TestkitError::KubeconfigError(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an already configured client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// The underlying client, for API calls this helper does not cover
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Returns all pods matching the fetch options, in the order the API lists them.
    #[instrument(skip(self, opts), fields(namespace = %opts.namespace, selector = %opts.label_selector))]
    pub async fn fetch_pods(&self, opts: &PodFetchOptions) -> Result<Vec<Pod>> {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), &opts.namespace);
        let lp = ListParams::default().labels(&opts.label_selector);

        let items = pods.list(&lp).await?.items;
        debug!("Selector matched {} pods", items.len());

        if items.len() > opts.max() {
            return Err(TestkitError::TooManyMatchingPods {
                namespace: opts.namespace.clone(),
                selector: opts.label_selector.clone(),
                found: items.len(),
                max: opts.max(),
            });
        }
        if items.is_empty() {
            return Err(TestkitError::NoMatchingPods {
                namespace: opts.namespace.clone(),
                selector: opts.label_selector.clone(),
            });
        }

        Ok(items)
    }

    /// Gets the single pod matching a label selector in a namespace.
    pub async fn get_pod_by_label(&self, label_selector: &str, namespace: &str) -> Result<Pod> {
        let opts = PodFetchOptions::new(namespace, label_selector);
        let mut pods = self.fetch_pods(&opts).await?;
        // fetch_pods guarantees exactly one entry for the default bound
        Ok(pods.swap_remove(0))
    }
}

/// Build a client config from kubeconfig file contents
async fn config_from_kubeconfig(kubeconfig: &str) -> Result<KConfig> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| TestkitError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))?;

    KConfig::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
        .await
        .map_err(|e| TestkitError::KubeconfigError(format!("Failed to create config: {}", e)))
}
