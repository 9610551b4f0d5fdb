// src/lib.rs

//! maxcine: JSON API over a scraped movie-listing website

pub mod error;
pub mod models;
pub mod server;
pub mod services;
pub mod utils;
