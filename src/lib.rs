//! Fetch the JMA public forecast for one region and print its
//! date/weather-condition series.

pub mod app;
pub mod fetch;
pub mod parse;
pub mod present;
pub mod regions;
