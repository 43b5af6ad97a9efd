#![allow(dead_code)]

pub mod game_setup;

pub use app_builder::create_test_app;
