// Copyright 2026, The Samba Operator Authors
// SPDX-License-Identifier: Apache-2.0

//! Polling helpers that block until a pod exists or is ready

use crate::constants::wait::POLL_INTERVAL;
use crate::error::{Result, StopReason, TestkitError};
use crate::kubernetes::client::TestClient;
use crate::kubernetes::pods::{conditions, PodPhase};
use k8s_openapi::api::core::v1::Pod;
use kube::runtime::wait::Condition;
use kube::ResourceExt;
use std::time::Duration;
use tokio::time::{sleep, sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

/// Cancellation and deadline signal handed to every wait call.
///
/// A context with neither a deadline nor a cancelled token never fires, so a
/// wait using it blocks until its condition holds or a fatal error occurs.
#[derive(Debug, Clone, Default)]
pub struct WaitContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl WaitContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Set a deadline; an earlier existing deadline is kept
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        });
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.token = token;
        self
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Err if the context was cancelled or its deadline has passed.
    /// Cancellation is reported ahead of an expired deadline.
    pub fn check(&self) -> Result<()> {
        if self.token.is_cancelled() {
            return Err(TestkitError::CancelledOrTimedOut(StopReason::Cancelled));
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(
                TestkitError::CancelledOrTimedOut(StopReason::DeadlineExceeded),
            ),
            _ => Ok(()),
        }
    }

    /// Resolves once the context is cancelled or its deadline passes
    pub async fn done(&self) -> StopReason {
        match self.deadline {
            Some(deadline) => tokio::select! {
                biased;
                _ = self.token.cancelled() => StopReason::Cancelled,
                _ = sleep_until(deadline) => StopReason::DeadlineExceeded,
            },
            None => {
                self.token.cancelled().await;
                StopReason::Cancelled
            }
        }
    }
}

impl TestClient {
    /// Poll the single pod matching a label until `condition` holds.
    ///
    /// Fetch errors for which `keep_waiting` returns true count as "not yet";
    /// any other fetch error ends the wait immediately. The context is checked
    /// before every fetch and while sleeping between attempts, so a fired
    /// context wins over whatever the next fetch would have returned.
    #[instrument(skip(self, ctx, condition, keep_waiting))]
    pub async fn poll_pod_by_label<C, P>(
        &self,
        ctx: &WaitContext,
        label_selector: &str,
        namespace: &str,
        condition: C,
        keep_waiting: P,
    ) -> Result<()>
    where
        C: Condition<Pod>,
        P: Fn(&TestkitError) -> bool,
    {
        let mut attempt: u32 = 0;

        loop {
            ctx.check()?;
            attempt += 1;

            match self.get_pod_by_label(label_selector, namespace).await {
                Ok(pod) if condition.matches_object(Some(&pod)) => {
                    info!("Pod {} matched after {} attempts", pod.name_any(), attempt);
                    return Ok(());
                }
                Ok(pod) => {
                    debug!(
                        "Pod {} not there yet (phase {:?}), attempt {}",
                        pod.name_any(),
                        PodPhase::of(&pod),
                        attempt
                    );
                }
                Err(e) if keep_waiting(&e) => {
                    debug!("Still waiting: {}, attempt {}", e, attempt);
                }
                Err(e) => return Err(e),
            }

            tokio::select! {
                _ = sleep(POLL_INTERVAL) => {}
                reason = ctx.done() => return Err(TestkitError::CancelledOrTimedOut(reason)),
            }
        }
    }

    /// Wait for the pod matching a label to be ready, up to the context's
    /// deadline. The label must match exactly one pod; no match or several
    /// matches fail right away.
    pub async fn wait_for_pod_ready_by_label(
        &self,
        ctx: &WaitContext,
        label_selector: &str,
        namespace: &str,
    ) -> Result<()> {
        self.poll_pod_by_label(
            ctx,
            label_selector,
            namespace,
            conditions::pod_ready(),
            |_| false,
        )
        .await
    }

    /// Wait for a pod matching a label to exist, up to the context's deadline.
    /// The label must not match more than one pod.
    pub async fn wait_for_pod_exists_by_label(
        &self,
        ctx: &WaitContext,
        label_selector: &str,
        namespace: &str,
    ) -> Result<()> {
        self.poll_pod_by_label(
            ctx,
            label_selector,
            namespace,
            conditions::pod_exists(),
            TestkitError::is_no_match,
        )
        .await
    }
}
