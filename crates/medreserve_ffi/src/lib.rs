//! FFI surface for the MedReserve UI shell.

pub mod api;
