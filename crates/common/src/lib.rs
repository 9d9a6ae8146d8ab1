//! Shared building blocks for the car service crates.

pub mod types;

pub mod utils {
    pub mod logging;
}
