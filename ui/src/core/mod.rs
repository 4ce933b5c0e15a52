//! Platform-agnostic state behind the viewer: polling, tab selection and page layout.

pub mod config;
pub mod format;
pub mod page;
pub mod platform;
pub mod poll;
pub mod profile;
pub mod tabs;
pub mod timing;
