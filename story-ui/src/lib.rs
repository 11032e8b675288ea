pub mod api;
pub mod dashboard;
pub mod read_story;
pub mod route;
pub mod session;

pub use dashboard::DashboardPage;
pub use read_story::ReadStoryPage;
pub use route::Route;
