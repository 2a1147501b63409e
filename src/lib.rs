pub mod api;
pub mod app;
pub mod app_assets;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod notice;
pub mod pages;
pub mod speech;
pub mod state;
pub mod view;

pub use app::App;
pub use error::{ClientError, Result};
