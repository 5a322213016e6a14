pub mod link;
pub mod menu;
pub mod routes;

pub use link::NavLink;
pub use menu::{menu_items, MenuItem};
