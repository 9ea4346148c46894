//! Demo-data seeding for the ticket table.

pub mod catalog;
pub mod runner;
pub mod store;
