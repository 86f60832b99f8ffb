//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema SQLite de cada servicio.

pub mod booking;
pub mod route;
pub mod trip;
