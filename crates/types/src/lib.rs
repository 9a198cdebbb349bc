//! Core types for modnet simulator tooling.
//!
//! This crate provides the foundational types shared by the packet
//! inspection hook and its hosts:
//!
//! - **[`Addr`]**: the 16-byte network-layer destination address
//! - **[`ModuleId`] / [`EndpointRef`]**: identification of the module and
//!   connector on each side of a link traversal
//!
//! # Design Philosophy
//!
//! This crate is self-contained with minimal dependencies. It does not depend
//! on any other workspace crates, making it the foundation layer.

mod addr;
mod endpoint;

pub use addr::{Addr, AddrParseError};
pub use endpoint::{EndpointRef, ModuleId};
