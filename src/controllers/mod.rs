//! Lógica de casos de uso de cada servicio
//!
//! Los controllers reciben los DTOs ya deserializados, aplican la puerta
//! de validación y los checks contra servicios hermanos, y hablan con su
//! repositorio. Los handlers de axum solo extraen y delegan.

pub mod booking_controller;
pub mod route_controller;
pub mod trip_controller;
