pub mod catalog;
pub mod config;
pub mod i18n;
pub mod sections;
pub mod storage;
pub mod store;
