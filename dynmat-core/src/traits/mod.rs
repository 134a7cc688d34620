//! Capability traits for dynmat element types
//!
//! Traits are pure interfaces; the containers themselves live in
//! [`sequence`](crate::sequence) and [`grid`](crate::grid).

pub mod element;
pub mod text;

pub use element::Element;
pub use text::ReadTokens;
