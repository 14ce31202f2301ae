//! Ports (Hexagonal Architecture)

pub mod inbound;
