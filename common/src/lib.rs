pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod model;
pub mod preview;
pub mod requests;
