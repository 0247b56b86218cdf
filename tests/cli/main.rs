//! Integration tests driving the relnotes binary

mod common;
mod config;
mod fetch;
