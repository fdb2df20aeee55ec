pub mod activities;
pub mod layout;
pub mod recommendations;
pub mod suitability;
pub mod timeline;
