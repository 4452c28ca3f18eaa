pub mod api;
pub mod cli;
pub mod core;
pub mod notify;
pub mod profiles;
pub mod web;
