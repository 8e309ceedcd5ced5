// Copyright 2026, The Samba Operator Authors
// SPDX-License-Identifier: Apache-2.0
use std::fmt;
use thiserror::Error;

/// Why a wait stopped before its condition was met
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Cancelled,
    DeadlineExceeded,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Cancelled => f.write_str("wait cancelled"),
            StopReason::DeadlineExceeded => f.write_str("deadline exceeded"),
        }
    }
}

#[derive(Error, Debug)]
pub enum TestkitError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("no pods match selector '{selector}' in namespace {namespace}")]
    NoMatchingPods { namespace: String, selector: String },

    #[error("too many pods match selector '{selector}' in namespace {namespace}: found {found}, expected at most {max}")]
    TooManyMatchingPods {
        namespace: String,
        selector: String,
        found: usize,
        max: usize,
    },

    #[error("Stopped waiting: {0}")]
    CancelledOrTimedOut(StopReason),
}

impl TestkitError {
    pub fn is_no_match(&self) -> bool {
        matches!(self, TestkitError::NoMatchingPods { .. })
    }

    pub fn is_too_many_matches(&self) -> bool {
        matches!(self, TestkitError::TooManyMatchingPods { .. })
    }

    pub fn is_cancelled_or_timed_out(&self) -> bool {
        matches!(self, TestkitError::CancelledOrTimedOut(_))
    }
}

pub type Result<T> = std::result::Result<T, TestkitError>;
