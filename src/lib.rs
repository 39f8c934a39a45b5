//! Canvass: a server-rendered survey application.
//!
//! Respondents pick a survey from a catalog, answer its questions strictly
//! one at a time, and get a completion summary. Progress lives in a
//! per-client server-side session; a short-lived cookie marks completion so
//! a finished survey cannot immediately be taken again.

pub mod catalog;
pub mod models;
pub mod progress;
pub mod web;
