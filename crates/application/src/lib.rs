//! Rootwalk Application Layer
//!
//! Ports (the seams the infrastructure adapters plug into) and the use
//! cases that drive a resolution attempt.
pub mod ports;
pub mod use_cases;
