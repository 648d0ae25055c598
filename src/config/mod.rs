//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno del servidor.

pub mod environment;

pub use environment::*;
