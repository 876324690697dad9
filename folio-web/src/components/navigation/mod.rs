pub mod main_nav;

pub use main_nav::MainNav;
