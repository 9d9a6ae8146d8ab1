//! Storage layer: sea-orm entities for drivers, car types and cars, plus the
//! record-level operations the service layer builds on.

pub mod errors;
pub mod db;
pub mod driver;
pub mod car_type;
pub mod car;

#[cfg(test)]
mod tests;
