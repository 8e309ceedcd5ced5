// Copyright 2026, The Samba Operator Authors
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for pod lookup, readiness checks, and polling.

pub mod client;
pub mod pods;
pub mod wait;

pub use client::TestClient;
pub use pods::{conditions, is_pod_ready, PodFetchOptions, PodPhase};
pub use wait::WaitContext;
