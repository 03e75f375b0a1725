pub mod batch;
pub mod config;
pub mod db;
pub mod errors;
pub mod hackathon;
pub mod info;
pub mod io;
pub mod log;
pub mod normalization;
pub mod validation;
