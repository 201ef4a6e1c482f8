//! # Controllers Module
//!
//! Contains the controller that orchestrates the MVVM pattern.

pub mod app_controller;

pub use app_controller::AppController;
