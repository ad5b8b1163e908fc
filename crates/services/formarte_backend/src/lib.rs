// File: services/formarte_backend/src/lib.rs
pub mod app;
