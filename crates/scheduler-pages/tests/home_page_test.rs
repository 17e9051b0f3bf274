// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Integration tests for the scheduler home page

use scheduler_pages::{Error, SchedulerView};

mod common;

#[tokio::test]
async fn test_switch_to_infinite_scroll() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let server = test_server::TestServer::start().await;
    let session = common::launch_session(&server.url()).await?;

    let home = session.home_page();
    home.navigate_page().await?;
    home.verify_header_text_contains("Basic example").await?;

    let scheduler = home.switch_to_infinite_scroll().await?;
    home.verify_header_text_contains("Infinite scroll(</>View example source code)")
        .await?;
    home.verify_url_contains("/infinitescroll").await?;

    // The returned page drives the same browser page
    assert_eq!(scheduler.current_view().await?, Some(SchedulerView::Day));

    session.close().await?;
    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn test_header_mismatch_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let server = test_server::TestServer::start().await;
    let session = common::launch_session(&server.url()).await?;

    let home = session.home_page();
    home.navigate_page().await?;
    assert!(home.header_text().await?.contains("Basic example"));

    let result = home.verify_header_text_contains("Infinite scroll").await;
    assert!(matches!(result, Err(Error::Assertion(ref msg)) if msg.contains("Basic example")));

    let result = home.verify_url_contains("/infinitescroll").await;
    assert!(matches!(result, Err(Error::Assertion(_))));

    session.close().await?;
    server.shutdown();
    Ok(())
}
