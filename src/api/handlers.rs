pub mod disease;
pub mod layout;
pub mod site;
pub mod timeline;
pub mod weather;
