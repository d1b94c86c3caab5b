mod data_store;

pub mod cli;
pub mod cli_error;
mod reports;
mod setup;
pub mod web;
