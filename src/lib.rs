//! School asset registry
//!
//! HTTP service that manages school IT assets and their service tickets,
//! recording every change in an append-only update log.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
