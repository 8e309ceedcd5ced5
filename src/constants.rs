// Copyright 2026, The Samba Operator Authors
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

/// Pod status values consulted by the readiness check
pub mod pod {
    pub const PHASE_PENDING: &str = "Pending";
    /// Phase a pod must be in before its conditions are considered
    pub const PHASE_RUNNING: &str = "Running";
    pub const PHASE_SUCCEEDED: &str = "Succeeded";
    pub const PHASE_FAILED: &str = "Failed";
    /// Pod-level readiness condition
    pub const CONDITION_READY: &str = "Ready";
    /// All containers in the pod report ready
    pub const CONDITION_CONTAINERS_READY: &str = "ContainersReady";
    pub const CONDITION_TRUE: &str = "True";
}

/// Pod polling configuration
pub mod wait {
    use super::Duration;

    /// Fixed delay between two list calls while waiting on a pod
    pub const POLL_INTERVAL: Duration = Duration::from_millis(200);
    /// Match bound used when fetch options leave it unset
    pub const DEFAULT_MAX_FOUND: usize = 1;
    /// Timeout used by the command-line waiter when none is configured
    pub const DEFAULT_TIMEOUT_SECS: u64 = 300;
}
