mod dashboard;
pub use dashboard::Dashboard;

mod readings;
pub use readings::Readings;
