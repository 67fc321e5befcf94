//! folio: render one markdown page into an HTML template, print it, or serve it
//! with live reload.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
