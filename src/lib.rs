#[macro_use]
pub mod macros;

pub mod api;
pub mod chart;
pub mod config;
pub mod enrich;
pub mod fs_json_util;
pub mod youtube;
