//! scheduler-pages: Playwright page objects for a scheduler demo application
//!
//! Page objects are plain structs sharing one [`PageDriver`] through an `Arc`.
//! The driver owns the page handle, resolves paths against the configured
//! origin, guards clicks with a visibility wait, and keeps the page's single
//! dialog policy slot.
//!
//! # Examples
//!
//! ```ignore
//! use scheduler_pages::{BrowserSession, Direction, GuiConfig, SchedulerView};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads PROTOCOL and GUI_BASE_URL
//!     let config = GuiConfig::from_env()?;
//!     let session = BrowserSession::launch(&config).await?;
//!
//!     let home = session.home_page();
//!     home.navigate_page().await?;
//!     let scheduler = home.switch_to_infinite_scroll().await?;
//!
//!     scheduler.switch_to_view(SchedulerView::Month).await?;
//!     scheduler.verify_view_button_is_selected(SchedulerView::Month).await?;
//!
//!     let before = scheduler.visible_event_count().await?;
//!     scheduler.add_new_event(6, 20).await?;
//!     scheduler.verify_event_count(before + 1).await?;
//!
//!     scheduler.move_month(Direction::Forward, 1).await?;
//!
//!     session.close().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dialog;
pub mod driver;
mod error;
pub mod pages;
pub mod session;
pub mod view;

pub use config::GuiConfig;
pub use dialog::{DialogGuard, DialogPolicy, DialogSlot};
pub use driver::{ClickArgs, DEFAULT_ASSERTION_TIMEOUT, PageDriver};
pub use error::{Error, Result};
pub use pages::{InfiniteScrollPage, SchedulerHomePage};
pub use session::BrowserSession;
pub use view::{Direction, SchedulerView, expected_date_label, parse_date_label};
