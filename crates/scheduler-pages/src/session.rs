// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Browser session - one Playwright server, one Chromium instance, one page

use crate::config::GuiConfig;
use crate::driver::PageDriver;
use crate::error::{Error, Result};
use crate::pages::{InfiniteScrollPage, SchedulerHomePage};
use playwright_rs::{
    Browser, BrowserContext, BrowserContextOptions, LaunchOptions, Playwright, Viewport,
};
use std::sync::Arc;

/// A launched browser with a single configured page.
///
/// Every page object created from a session shares the same [`PageDriver`],
/// so dialog policy and navigation state carry across page transitions.
pub struct BrowserSession {
    playwright: Playwright,
    browser: Browser,
    context: BrowserContext,
    driver: Arc<PageDriver>,
}

impl BrowserSession {
    /// Launches Chromium with `config`'s viewport, locale and headless mode.
    pub async fn launch(config: &GuiConfig) -> Result<Self> {
        tracing::info!(
            base_url = %config.base_url,
            headless = config.headless,
            "Launching browser session"
        );

        let playwright = Playwright::launch()
            .await
            .map_err(|e| Error::from(e).context("Starting Playwright"))?;
        let browser = playwright
            .chromium()
            .launch_with_options(LaunchOptions::new().headless(config.headless))
            .await?;

        let (width, height) = config.viewport;
        let options = BrowserContextOptions::builder()
            .viewport(Viewport { width, height })
            .locale(config.locale.clone())
            .build();
        let context = browser.new_context_with_options(options).await?;
        let page = context.new_page().await?;

        let driver = PageDriver::new(page, config.base_url.clone())
            .await?
            .with_click_timeout(config.click_timeout);

        Ok(Self {
            playwright,
            browser,
            context,
            driver: Arc::new(driver),
        })
    }

    pub fn driver(&self) -> Arc<PageDriver> {
        Arc::clone(&self.driver)
    }

    pub fn context(&self) -> &BrowserContext {
        &self.context
    }

    pub fn home_page(&self) -> SchedulerHomePage {
        SchedulerHomePage::new(self.driver())
    }

    pub fn infinite_scroll_page(&self) -> InfiniteScrollPage {
        InfiniteScrollPage::new(self.driver())
    }

    /// Closes the browser and stops the Playwright server.
    pub async fn close(self) -> Result<()> {
        self.browser.close().await?;
        self.playwright.shutdown().await?;
        Ok(())
    }
}
