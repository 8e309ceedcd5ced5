// Copyright 2026, The Samba Operator Authors
// SPDX-License-Identifier: Apache-2.0
use crate::constants::wait::DEFAULT_TIMEOUT_SECS;
use anyhow::{bail, Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// What the command-line waiter blocks on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitFor {
    /// The selected pod is running with all containers ready
    Ready,
    /// The selector matches a pod at all
    Exists,
}

impl FromStr for WaitFor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ready" => Ok(WaitFor::Ready),
            "exists" => Ok(WaitFor::Exists),
            other => bail!("unknown wait target '{}', expected 'ready' or 'exists'", other),
        }
    }
}

/// Waiter configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to a kubeconfig file; empty means the usual discovery rules apply
    pub kubeconfig_path: String,
    pub namespace: String,
    pub label_selector: String,
    pub wait_for: WaitFor,
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let kubeconfig_path = env::var("KUBECONFIG_PATH").unwrap_or_default();
        let namespace =
            env::var("WAIT_NAMESPACE").context("WAIT_NAMESPACE environment variable not set")?;
        let label_selector = env::var("WAIT_LABEL_SELECTOR")
            .context("WAIT_LABEL_SELECTOR environment variable not set")?;

        let wait_for = match env::var("WAIT_FOR") {
            Ok(v) => v.parse::<WaitFor>().context("invalid WAIT_FOR")?,
            Err(_) => WaitFor::Ready,
        };

        let timeout_secs = match env::var("WAIT_TIMEOUT_SECS") {
            Ok(v) => v
                .parse::<u64>()
                .with_context(|| format!("invalid WAIT_TIMEOUT_SECS '{}'", v))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            kubeconfig_path,
            namespace,
            label_selector,
            wait_for,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
