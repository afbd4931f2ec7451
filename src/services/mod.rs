// Service module exports

pub mod animation;
pub mod config;
pub mod database;
pub mod fetcher;
pub mod loader;
pub mod month_grid;
pub mod preferences;
pub mod theme_controller;
