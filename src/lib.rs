pub mod api;
pub mod config;
pub mod entities;
pub mod error;
pub mod external;
pub mod map;
pub mod navigator;
pub mod render;
pub mod style;
pub mod ui;

#[cfg(test)]
mod test_utils;
