//! Domain Services
//!
//! Stateless logic applied to every webhook delivery.

mod filter;
mod signature;

pub use filter::*;
pub use signature::*;
