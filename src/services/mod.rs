//! Domain services shared by the controllers

pub mod audit_log_service;
