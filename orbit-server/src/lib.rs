//! Orbit route-and-vehicle planner server.
//!
//! A web application that answers: "Given today's weather, which orbits and
//! which vehicle get me across Lengaburu fastest?"

pub mod catalog;
pub mod domain;
pub mod format;
pub mod planner;
pub mod settings;
pub mod web;
