//! Parties domain module (clients).
//!
//! Client records, the "New Client" form rules and the clients list screen,
//! implemented purely as deterministic domain logic (no IO, no UI, no storage).

pub mod client;

pub use client::{
    Client, ClientDirectory, ClientFilter, ClientForm, ClientStatus, ClientSummary,
};
