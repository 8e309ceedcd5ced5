// Copyright 2026, The Samba Operator Authors
// SPDX-License-Identifier: Apache-2.0

//! Pod status inspection and fetch options

use crate::constants::pod::{
    CONDITION_CONTAINERS_READY, CONDITION_READY, CONDITION_TRUE, PHASE_FAILED, PHASE_PENDING,
    PHASE_RUNNING, PHASE_SUCCEEDED,
};
use crate::constants::wait::DEFAULT_MAX_FOUND;
use k8s_openapi::api::core::v1::Pod;
use kube::runtime::wait::Condition;

/// Lifecycle phase reported in a pod's status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PodPhase {
    Pending,
    Running,
    Succeeded,
    Failed,
    Unknown,
}

impl PodPhase {
    /// Phase of the pod; a missing or unrecognized phase is `Unknown`
    pub fn of(pod: &Pod) -> Self {
        match pod.status.as_ref().and_then(|s| s.phase.as_deref()) {
            Some(PHASE_PENDING) => PodPhase::Pending,
            Some(PHASE_RUNNING) => PodPhase::Running,
            Some(PHASE_SUCCEEDED) => PodPhase::Succeeded,
            Some(PHASE_FAILED) => PodPhase::Failed,
            _ => PodPhase::Unknown,
        }
    }
}

/// Controls what set of pods will be fetched
#[derive(Debug, Clone, Default)]
pub struct PodFetchOptions {
    pub namespace: String,
    pub label_selector: String,
    /// Largest number of matches accepted; 0 means the default of 1
    pub max_found: usize,
}

impl PodFetchOptions {
    pub fn new(namespace: impl Into<String>, label_selector: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            label_selector: label_selector.into(),
            max_found: 0,
        }
    }

    pub fn with_max_found(mut self, max_found: usize) -> Self {
        self.max_found = max_found;
        self
    }

    pub fn max(&self) -> usize {
        if self.max_found == 0 {
            DEFAULT_MAX_FOUND
        } else {
            self.max_found
        }
    }
}

/// Whether the named condition is present and "True".
/// If the type is listed more than once, the last entry counts.
fn condition_is_true(pod: &Pod, condition_type: &str) -> bool {
    pod.status
        .as_ref()
        .and_then(|s| s.conditions.as_ref())
        .and_then(|conditions| conditions.iter().rev().find(|c| c.type_ == condition_type))
        .is_some_and(|c| c.status == CONDITION_TRUE)
}

/// Returns true if a pod is running and its containers are ready
pub fn is_pod_ready(pod: &Pod) -> bool {
    PodPhase::of(pod) == PodPhase::Running
        && condition_is_true(pod, CONDITION_READY)
        && condition_is_true(pod, CONDITION_CONTAINERS_READY)
}

/// Pod conditions usable with the wait loop and `kube::runtime::wait`
pub mod conditions {
    use super::*;

    /// Matches a pod that is running with all containers ready
    pub fn pod_ready() -> impl Condition<Pod> {
        |obj: Option<&Pod>| obj.is_some_and(is_pod_ready)
    }

    /// Matches any pod at all
    pub fn pod_exists() -> impl Condition<Pod> {
        |obj: Option<&Pod>| obj.is_some()
    }
}
