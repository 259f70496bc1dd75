//! sea-orm entities for the resource API tables.
//!
//! Foreign keys exist only as entity relations; the tables carry no DDL
//! constraints, so dangling references are stored as given.

pub mod offers;
pub mod orders;
pub mod users;
