//! Routers de los tres servicios
//!
//! Las rutas conservan la forma original con barra final; cualquier otro
//! método sobre una ruta definida responde 405 sin cuerpo (default del
//! framework).

pub mod booking_routes;
pub mod route_routes;
pub mod trip_routes;
