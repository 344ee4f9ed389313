//! Lectern Client Library
//!
//! Typed access to the book-reading service. The client owns all knowledge
//! of the wire shape (paths, envelope keys) and validates responses strictly
//! at the boundary, so the rest of the system only ever sees
//! [`lectern_core`] domain values or a [`ClientError`].

pub mod client;
pub mod error;

pub use client::ContentClient;
pub use error::{ClientError, Result};
