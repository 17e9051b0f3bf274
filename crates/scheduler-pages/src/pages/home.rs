// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Scheduler home page

use crate::driver::PageDriver;
use crate::error::Result;
use crate::pages::InfiniteScrollPage;
use std::sync::Arc;

const PATH: &str = "/scheduler/#/";
const HEADER: &str = "h3";
const INFINITE_SCROLL_LINK: &str = r##"a[href="#/infinitescroll"]"##;

/// Landing page of the scheduler demo.
pub struct SchedulerHomePage {
    driver: Arc<PageDriver>,
}

impl SchedulerHomePage {
    pub fn new(driver: Arc<PageDriver>) -> Self {
        Self { driver }
    }

    pub fn driver(&self) -> &PageDriver {
        &self.driver
    }

    pub async fn navigate_page(&self) -> Result<()> {
        self.driver.navigate(PATH).await
    }

    /// Follows the infinite-scroll link; the returned page shares this driver.
    pub async fn switch_to_infinite_scroll(&self) -> Result<InfiniteScrollPage> {
        let link = self.driver.locator(INFINITE_SCROLL_LINK).await;
        self.driver.click(&link).await?;
        Ok(InfiniteScrollPage::new(Arc::clone(&self.driver)))
    }

    /// Checks that the page header contains `expected`.
    pub async fn verify_header_text_contains(&self, expected: &str) -> Result<()> {
        let header = self.driver.locator(HEADER).await;
        self.driver.verify_text_contains(&header, expected).await
    }

    pub async fn verify_url_contains(&self, fragment: &str) -> Result<()> {
        self.driver.verify_url_contains(fragment).await
    }

    /// Current header text.
    pub async fn header_text(&self) -> Result<String> {
        self.driver
            .header_text(HEADER)
            .await
            .map_err(|e| e.context("Reading home page header"))
    }
}
