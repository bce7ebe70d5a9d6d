//! Integration tests for the campus subcommands

mod config;
mod data;
mod navigation;
mod routes;
mod support;
