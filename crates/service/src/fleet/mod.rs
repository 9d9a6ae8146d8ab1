//! Fleet module: three-layer architecture (domain, repository, service).
//!
//! Drivers, cars and car types live here, together with the cross-entity
//! operations that wire a driver onto a car.

pub mod domain;
pub mod views;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::FleetService;
