pub mod app_navbar;
pub use app_navbar::register_nav;
pub use app_navbar::AppNavbar;
pub use app_navbar::NavBuilder;

pub mod session;
pub use session::{MetaboSession, Session};
