// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Dialog policy - single-slot accept/dismiss decision for native dialogs
//
// One listener is installed per page (see PageDriver::new). The listener
// reads the slot below on every dialog, so replacing the policy never adds a
// second listener. An empty slot dismisses the dialog, the same outcome as a
// page with no handler at all.

use parking_lot::Mutex;
use playwright_rs::protocol::Dialog;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Notify;

/// What to do with the next native dialog(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPolicy {
    Accept,
    Dismiss,
}

impl DialogPolicy {
    pub fn from_accept(accept: bool) -> Self {
        if accept {
            DialogPolicy::Accept
        } else {
            DialogPolicy::Dismiss
        }
    }
}

#[derive(Default)]
struct SlotInner {
    // (policy, generation that armed it)
    policy: Mutex<Option<(DialogPolicy, u64)>>,
    generation: AtomicU64,
    handled: AtomicU64,
    notify: Notify,
}

/// Shared single-slot holder for the active [`DialogPolicy`].
#[derive(Clone, Default)]
pub struct DialogSlot {
    inner: Arc<SlotInner>,
}

impl DialogSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms `policy`, replacing any previously armed one.
    ///
    /// Returns the replaced policy.
    pub fn arm(&self, policy: DialogPolicy) -> Option<DialogPolicy> {
        self.arm_generation(policy).1
    }

    fn arm_generation(&self, policy: DialogPolicy) -> (u64, Option<DialogPolicy>) {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let previous = self.inner.policy.lock().replace((policy, generation));
        tracing::debug!(?policy, replaced = ?previous.map(|(p, _)| p), "Armed dialog policy");
        (generation, previous.map(|(p, _)| p))
    }

    /// Empties the slot. Returns the policy that was armed.
    pub fn disarm(&self) -> Option<DialogPolicy> {
        self.inner.policy.lock().take().map(|(p, _)| p)
    }

    /// Arms `policy` until the returned guard is dropped.
    pub fn scoped(&self, policy: DialogPolicy) -> DialogGuard {
        let (generation, _) = self.arm_generation(policy);
        DialogGuard {
            slot: self.clone(),
            generation,
        }
    }

    /// The currently armed policy, if any.
    pub fn policy(&self) -> Option<DialogPolicy> {
        let armed = *self.inner.policy.lock();
        armed.map(|(p, _)| p)
    }

    /// Number of dialogs handled on this page so far.
    pub fn handled_count(&self) -> u64 {
        self.inner.handled.load(Ordering::SeqCst)
    }

    /// Waits until more than `seen` dialogs have been handled.
    ///
    /// Returns false if none arrived within `timeout`.
    pub async fn wait_for_dialog(&self, seen: u64, timeout: Duration) -> bool {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let notified = self.inner.notify.notified();
            tokio::pin!(notified);
            // Register before checking the count so a concurrent notify is not lost
            notified.as_mut().enable();

            if self.handled_count() > seen {
                return true;
            }
            if tokio::time::timeout_at(deadline, notified).await.is_err() {
                return self.handled_count() > seen;
            }
        }
    }

    /// Applies the armed policy to `dialog`.
    pub(crate) async fn handle(&self, dialog: Dialog) -> playwright_rs::Result<()> {
        let policy = self.policy();
        let result = match policy {
            Some(DialogPolicy::Accept) => {
                tracing::debug!(kind = dialog.type_(), message = dialog.message(), "Accepting dialog");
                dialog.accept(None).await
            }
            Some(DialogPolicy::Dismiss) => {
                tracing::debug!(kind = dialog.type_(), message = dialog.message(), "Dismissing dialog");
                dialog.dismiss().await
            }
            None => {
                tracing::warn!(
                    kind = dialog.type_(),
                    message = dialog.message(),
                    "Dialog opened with no policy armed; dismissing"
                );
                dialog.dismiss().await
            }
        };
        self.mark_handled();
        result
    }

    fn mark_handled(&self) {
        self.inner.handled.fetch_add(1, Ordering::SeqCst);
        self.inner.notify.notify_waiters();
    }
}

/// Disarms the policy it armed when dropped.
///
/// A guard whose policy has since been replaced leaves the newer policy alone.
pub struct DialogGuard {
    slot: DialogSlot,
    generation: u64,
}

impl DialogGuard {
    /// The slot this guard belongs to.
    pub fn slot(&self) -> &DialogSlot {
        &self.slot
    }
}

impl Drop for DialogGuard {
    fn drop(&mut self) {
        let mut policy = self.slot.inner.policy.lock();
        if matches!(*policy, Some((_, generation)) if generation == self.generation) {
            *policy = None;
        }
    }
}
