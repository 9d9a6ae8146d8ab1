//! Service layer providing the fleet operations (drivers, cars, car types) on top of models.
//! - Separates business logic from data access through repository traits.
//! - Reuses validation and entity definitions in `models` crate.
//! - Produces the response views handed to the HTTP layer.

pub mod errors;
pub mod fleet;
#[cfg(test)]
pub mod test_support;
