// Concrete page objects for the scheduler demo

pub mod home;
pub mod infinite_scroll;

pub use home::SchedulerHomePage;
pub use infinite_scroll::InfiniteScrollPage;
