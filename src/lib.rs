pub mod catalog;
pub mod console;
pub mod error;
pub mod identity;
pub mod policy;
pub mod router;
pub mod views;
