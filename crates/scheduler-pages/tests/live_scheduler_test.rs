// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// End-to-end run against the public scheduler demo
//
// Needs PROTOCOL and GUI_BASE_URL, e.g.
//   PROTOCOL=https:// GUI_BASE_URL=stephenchou1017.github.io \
//     cargo test -p scheduler-pages --test live_scheduler_test -- --ignored

use scheduler_pages::{BrowserSession, Direction, GuiConfig, SchedulerView};

mod common;

#[tokio::test]
#[ignore = "requires PROTOCOL and GUI_BASE_URL"]
async fn test_live_scheduler_flow() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let config = GuiConfig::from_env()?;
    let session = BrowserSession::launch(&config).await?;

    let home = session.home_page();
    home.navigate_page().await?;
    let scheduler = home.switch_to_infinite_scroll().await?;
    home.verify_header_text_contains("Infinite scroll(</>View example source code)")
        .await?;
    home.verify_url_contains("/infinitescroll").await?;

    scheduler.switch_to_view(SchedulerView::Month).await?;
    scheduler
        .verify_view_button_is_selected(SchedulerView::Month)
        .await?;
    scheduler.verify_date_label_format(SchedulerView::Month).await?;

    let before = scheduler.visible_event_count().await?;
    for cell in [20, 21, 22] {
        scheduler.add_new_event(6, cell).await?;
    }
    scheduler.verify_event_count(before + 3).await?;

    scheduler.move_month(Direction::Forward, 1).await?;
    assert!(scheduler.visible_event_count().await? < before + 3);
    scheduler.move_month(Direction::Backward, 1).await?;
    scheduler.verify_event_count(before + 3).await?;

    session.close().await?;
    Ok(())
}
