// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Page driver - shared capabilities over one browser page
//
// Concrete page objects hold an Arc<PageDriver> and call into it; nothing
// inherits from it. The driver owns the page handle, the base origin that
// relative paths resolve against, and the page's single dialog slot.
//
// Locators returned here are lazy. Page objects keep selectors, not
// locators, and resolve a fresh handle for every action.

use crate::config::DEFAULT_CLICK_TIMEOUT;
use crate::dialog::{DialogPolicy, DialogSlot};
use crate::error::{Error, Result};
use playwright_rs::{ClickOptions, Locator, Page, expect};
use std::future::Future;
use std::time::{Duration, Instant};
use url::Url;

/// Default timeout for checks `expect` has no assertion for (URL, counts)
pub const DEFAULT_ASSERTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Polling interval for `verify_eventually`
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How long a dialog-triggering action may take to surface its dialog
const DIALOG_SETTLE_TIMEOUT: Duration = Duration::from_secs(2);

/// Options for [`PageDriver::click_with`].
#[derive(Debug, Clone, Copy)]
pub struct ClickArgs {
    /// Bypass actionability checks (e.g. when an overlay intercepts the click)
    pub force: bool,
    /// Maximum wait for the element to become visible
    pub timeout: Duration,
}

impl Default for ClickArgs {
    fn default() -> Self {
        Self {
            force: false,
            timeout: DEFAULT_CLICK_TIMEOUT,
        }
    }
}

impl ClickArgs {
    /// Default timeout, forced click.
    pub fn forced() -> Self {
        Self {
            force: true,
            ..Self::default()
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Shared page capability used by every page object.
pub struct PageDriver {
    page: Page,
    base_url: Url,
    dialogs: DialogSlot,
    click_timeout: Duration,
}

impl PageDriver {
    /// Wraps `page` and installs its one dialog listener.
    pub async fn new(page: Page, base_url: Url) -> Result<Self> {
        let dialogs = DialogSlot::new();
        let slot = dialogs.clone();
        page.on_dialog(move |dialog| {
            let slot = slot.clone();
            async move { slot.handle(dialog).await }
        })
        .await?;

        Ok(Self {
            page,
            base_url,
            dialogs,
            click_timeout: DEFAULT_CLICK_TIMEOUT,
        })
    }

    /// Sets the visibility wait used by [`click`](Self::click).
    pub fn with_click_timeout(mut self, timeout: Duration) -> Self {
        self.click_timeout = timeout;
        self
    }

    pub fn click_timeout(&self) -> Duration {
        self.click_timeout
    }

    /// The underlying page handle.
    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The page's dialog slot.
    pub fn dialogs(&self) -> &DialogSlot {
        &self.dialogs
    }

    /// Current page URL, including hash fragments.
    pub fn url(&self) -> String {
        self.page.url()
    }

    /// Navigates to `path` relative to the base origin.
    ///
    /// Returns once the page fires its load event.
    pub async fn navigate(&self, path: &str) -> Result<()> {
        let url = self.base_url.join(path).map_err(|source| Error::InvalidUrl {
            url: format!("{}{}", self.base_url, path),
            source,
        })?;
        tracing::debug!(url = %url, "Navigating");
        self.page.goto(url.as_str(), None).await?;
        Ok(())
    }

    /// Returns a lazy locator for `selector`; it may match any number of elements.
    pub async fn locator(&self, selector: &str) -> Locator {
        self.page.locator(selector).await
    }

    /// Text content of the first element `locator` resolves to.
    pub async fn read_text(&self, locator: &Locator) -> Result<String> {
        Ok(locator.text_content().await?.unwrap_or_default())
    }

    /// Text of the page header element matched by `selector`.
    pub async fn header_text(&self, selector: &str) -> Result<String> {
        let header = self.locator(selector).await;
        self.read_text(&header).await
    }

    /// Waits until `locator` is visible.
    ///
    /// Fails with [`Error::Timeout`] naming the selector if it is still hidden
    /// after `timeout`.
    pub async fn wait_for_visible(&self, locator: &Locator, timeout: Duration) -> Result<()> {
        expect(locator.clone())
            .with_timeout(timeout)
            .to_be_visible()
            .await
            .map_err(|e| match e {
                playwright_rs::Error::AssertionTimeout(_) => Error::Timeout {
                    selector: locator.selector().to_string(),
                    timeout_ms: timeout.as_millis() as u64,
                },
                other => other.into(),
            })
    }

    /// Waits until the text of `locator` contains `expected`.
    pub async fn verify_text_contains(&self, locator: &Locator, expected: &str) -> Result<()> {
        expect(locator.clone())
            .to_contain_text(expected)
            .await
            .map_err(assertion_error)
    }

    /// Waits for visibility with the driver's click timeout, then clicks.
    pub async fn click(&self, locator: &Locator) -> Result<()> {
        self.click_with(locator, ClickArgs::default().timeout(self.click_timeout))
            .await
    }

    /// Waits for visibility, then clicks with `args.force`.
    pub async fn click_with(&self, locator: &Locator, args: ClickArgs) -> Result<()> {
        self.wait_for_visible(locator, args.timeout).await?;
        tracing::debug!(selector = locator.selector(), force = args.force, "Clicking");
        let options = ClickOptions::builder().force(args.force).build();
        locator.click(Some(options)).await?;
        Ok(())
    }

    /// Arms the dialog policy: accept when `accept`, dismiss otherwise.
    ///
    /// Replaces any previously armed policy; the page never has more than one.
    pub fn set_dialog_policy(&self, accept: bool) -> Option<DialogPolicy> {
        self.set_dialog_policy_to(DialogPolicy::from_accept(accept))
    }

    pub fn set_dialog_policy_to(&self, policy: DialogPolicy) -> Option<DialogPolicy> {
        self.dialogs.arm(policy)
    }

    /// Empties the dialog slot; later dialogs are dismissed.
    pub fn reset_dialog_policy(&self) -> Option<DialogPolicy> {
        self.dialogs.disarm()
    }

    /// Currently armed policy.
    pub fn dialog_policy(&self) -> Option<DialogPolicy> {
        self.dialogs.policy()
    }

    /// Runs a dialog-triggering `action` with `policy` armed.
    ///
    /// After the action completes, waits briefly for the dialog to be handled,
    /// then disarms. The policy is also disarmed if the action fails.
    pub async fn with_dialog_policy<F, Fut, T>(&self, policy: DialogPolicy, action: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let seen = self.dialogs.handled_count();
        let _guard = self.dialogs.scoped(policy);

        let value = action().await?;

        if !self.dialogs.wait_for_dialog(seen, DIALOG_SETTLE_TIMEOUT).await {
            tracing::warn!(?policy, "No dialog appeared for a dialog-triggering action");
        }
        Ok(value)
    }

    /// Checks that the current URL contains `fragment`.
    pub fn assert_url_contains(&self, fragment: &str) -> Result<()> {
        let url = self.page.url();
        if url.contains(fragment) {
            Ok(())
        } else {
            Err(Error::Assertion(format!(
                "Expected URL '{}' to contain '{}'",
                url, fragment
            )))
        }
    }

    /// Waits until the current URL contains `fragment`.
    ///
    /// Hash navigation is reported asynchronously, so this polls where
    /// [`assert_url_contains`](Self::assert_url_contains) checks once.
    pub async fn verify_url_contains(&self, fragment: &str) -> Result<()> {
        self.verify_eventually(DEFAULT_ASSERTION_TIMEOUT, || async move {
            let url = self.url();
            Ok(if url.contains(fragment) {
                Ok(())
            } else {
                Err(format!("Expected URL '{}' to contain '{}'", url, fragment))
            })
        })
        .await
    }

    /// Re-runs `check` until it passes or `timeout` elapses.
    ///
    /// `check` returns `Ok(Err(message))` for a failed verification; the last
    /// message becomes the [`Error::Assertion`]. Errors from the page abort
    /// immediately.
    pub async fn verify_eventually<F, Fut>(&self, timeout: Duration, mut check: F) -> Result<()>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<std::result::Result<(), String>>>,
    {
        let start = Instant::now();
        loop {
            let message = match check().await? {
                Ok(()) => return Ok(()),
                Err(message) => message,
            };

            if start.elapsed() >= timeout {
                return Err(Error::Assertion(format!("{} (after {:?})", message, timeout)));
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

/// Converts an `expect` timeout into this crate's assertion failure.
fn assertion_error(e: playwright_rs::Error) -> Error {
    match e {
        playwright_rs::Error::AssertionTimeout(message) => Error::Assertion(message),
        other => other.into(),
    }
}

/// Locator for the `index`-th match of `locator`.
pub(crate) fn nth(locator: &Locator, index: usize) -> Locator {
    // Indices past i32::MAX match nothing, same as any other missing index
    locator.nth(i32::try_from(index).unwrap_or(i32::MAX))
}

/// True when the space-separated `class` attribute contains `class_name`.
pub(crate) fn has_class(class: Option<&str>, class_name: &str) -> bool {
    class.is_some_and(|c| c.split_whitespace().any(|token| token == class_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_args_defaults() {
        let args = ClickArgs::default();
        assert!(!args.force);
        assert_eq!(args.timeout, Duration::from_millis(3000));

        let forced = ClickArgs::forced().timeout(Duration::from_millis(500));
        assert!(forced.force);
        assert_eq!(forced.timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_has_class_matches_whole_tokens() {
        let checked = Some("ant-radio-button-wrapper ant-radio-button-wrapper-checked");
        assert!(has_class(checked, "ant-radio-button-wrapper-checked"));
        assert!(has_class(checked, "ant-radio-button-wrapper"));

        let unchecked = Some("ant-radio-button-wrapper");
        assert!(!has_class(unchecked, "ant-radio-button-wrapper-checked"));
        assert!(!has_class(None, "ant-radio-button-wrapper-checked"));
    }
}
