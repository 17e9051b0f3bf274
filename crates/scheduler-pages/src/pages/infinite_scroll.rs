// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Infinite-scroll scheduler page
//
// View toggles are an ordered set of radio-button wrappers; the active one
// carries VIEW_BUTTON_CHECKED. Clicking a grid cell opens a native confirm
// dialog that creates an event when accepted.

use crate::dialog::DialogPolicy;
use crate::driver::{ClickArgs, DEFAULT_ASSERTION_TIMEOUT, PageDriver, has_class, nth};
use crate::error::{Error, Result};
use crate::view::{Direction, SchedulerView, expected_date_label};
use std::sync::Arc;

const PATH: &str = "/scheduler/#/infinitescroll";
const VIEW_BUTTONS: &str = ".ant-radio-button-wrapper";
const VIEW_BUTTON_CHECKED: &str = "ant-radio-button-wrapper-checked";
const DATE_LABEL: &str = ".header2-text-label";
const EVENTS: &str = "a.timeline-event";
const RESOURCE_ROWS: &str = r#".scheduler-bg > table > tbody > tr[style*="height"]"#;
const RESOURCE_CELLS: &str = r#"td[style*="width"]"#;
const FORWARD_BUTTON: &str = r#"svg[data-icon="right"]"#;
const BACKWARD_BUTTON: &str = r#"svg[data-icon="left"]"#;

/// Scheduler in infinite-scroll mode.
pub struct InfiniteScrollPage {
    driver: Arc<PageDriver>,
}

impl InfiniteScrollPage {
    pub fn new(driver: Arc<PageDriver>) -> Self {
        Self { driver }
    }

    pub fn driver(&self) -> &PageDriver {
        &self.driver
    }

    pub async fn navigate_page(&self) -> Result<()> {
        self.driver.navigate(PATH).await
    }

    /// Clicks the toggle control for `view`.
    pub async fn switch_to_view(&self, view: SchedulerView) -> Result<()> {
        let buttons = self.driver.locator(VIEW_BUTTONS).await;
        self.driver
            .click(&nth(&buttons, view.index()))
            .await
            .map_err(|e| e.context(format!("Switching to {} view", view)))
    }

    /// Creates an event by clicking cell `cell_index` of resource row `resource_index`.
    ///
    /// The click opens a confirm dialog, so the accept policy is armed for the
    /// duration of the click. Forced because rendered events can overlay cells.
    pub async fn add_new_event(&self, resource_index: usize, cell_index: usize) -> Result<()> {
        let rows = self.driver.locator(RESOURCE_ROWS).await;
        let cell = nth(&nth(&rows, resource_index).locator(RESOURCE_CELLS), cell_index);
        let driver = self.driver.as_ref();

        driver
            .with_dialog_policy(DialogPolicy::Accept, || {
                driver.click_with(&cell, ClickArgs::forced().timeout(driver.click_timeout()))
            })
            .await
            .map_err(|e| e.context(format!("Adding event at row {} cell {}", resource_index, cell_index)))
    }

    /// Clicks the navigation control `count` times, one discrete click per step.
    pub async fn move_month(&self, direction: Direction, count: usize) -> Result<()> {
        let selector = match direction {
            Direction::Forward => FORWARD_BUTTON,
            Direction::Backward => BACKWARD_BUTTON,
        };
        for step in 0..count {
            tracing::debug!(?direction, step, "Moving scheduler window");
            let button = self.driver.locator(selector).await;
            self.driver.click(&button).await?;
        }
        Ok(())
    }

    /// Number of rendered events.
    pub async fn visible_event_count(&self) -> Result<usize> {
        let events = self.driver.locator(EVENTS).await;
        Ok(events.count().await?)
    }

    /// Waits until exactly `expected` events are rendered.
    pub async fn verify_event_count(&self, expected: usize) -> Result<()> {
        let events = &self.driver.locator(EVENTS).await;
        self.driver
            .verify_eventually(DEFAULT_ASSERTION_TIMEOUT, || async move {
                events.count().await.map_err(Error::from).map(|actual| {
                    if actual == expected {
                        Ok(())
                    } else {
                        Err(format!("Expected {} events, found {}", expected, actual))
                    }
                })
            })
            .await
    }

    /// The view whose toggle is currently selected.
    pub async fn current_view(&self) -> Result<Option<SchedulerView>> {
        Ok(self
            .selected_toggles()
            .await?
            .first()
            .copied()
            .and_then(SchedulerView::from_index))
    }

    /// Checks that `view`'s toggle is selected and every other toggle is not.
    pub async fn verify_view_button_is_selected(&self, view: SchedulerView) -> Result<()> {
        let expected = view.index();
        self.driver
            .verify_eventually(DEFAULT_ASSERTION_TIMEOUT, || async move {
                self.selected_toggles().await.map(|selected| {
                    if selected == [expected] {
                        Ok(())
                    } else {
                        Err(format!(
                            "Expected only the {} toggle (index {}) to be selected, selected indices: {:?}",
                            view, expected, selected
                        ))
                    }
                })
            })
            .await
    }

    /// Current date label text.
    pub async fn date_label(&self) -> Result<String> {
        let label = self.driver.locator(DATE_LABEL).await;
        Ok(self.driver.read_text(&label).await?.trim().to_string())
    }

    /// Checks that the date label is formatted for `view`.
    pub async fn verify_date_label_format(&self, view: SchedulerView) -> Result<()> {
        self.driver
            .verify_eventually(DEFAULT_ASSERTION_TIMEOUT, || async move {
                self.date_label().await.map(|text| match expected_date_label(&text, view) {
                    Ok(expected) if expected == text => Ok(()),
                    Ok(expected) => Err(format!(
                        "Expected {} date label '{}', found '{}'",
                        view, expected, text
                    )),
                    Err(e) => Err(e.to_string()),
                })
            })
            .await
    }

    /// Indices of the view toggles carrying the selected class.
    async fn selected_toggles(&self) -> Result<Vec<usize>> {
        let buttons = self.driver.locator(VIEW_BUTTONS).await;
        let count = buttons.count().await?;

        let mut selected = Vec::new();
        for index in 0..count {
            let class = nth(&buttons, index).get_attribute("class").await?;
            if has_class(class.as_deref(), VIEW_BUTTON_CHECKED) {
                selected.push(index);
            }
        }
        Ok(selected)
    }
}
