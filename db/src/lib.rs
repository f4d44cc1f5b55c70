// Data-access library for the LightBnB property-rental application

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod telemetry;
