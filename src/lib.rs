//! Trip Booking - tres servicios CRUD cooperantes
//!
//! Route, Trip y Booking exponen endpoints HTTP/JSON sobre su propio
//! almacenamiento SQLite. Las referencias entre entidades son strings de
//! identificador resueltos bajo demanda contra el servicio dueño, nunca
//! foreign keys: crear un Trip confirma su Route contra el servicio de
//! rutas, crear un Booking confirma su Trip contra el servicio de viajes,
//! y las lecturas compuestas adjuntan lo que los peers contesten,
//! degradando a objetos vacíos cuando no contestan.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod server;
pub mod state;
pub mod utils;
