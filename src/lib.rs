// Public API exports (session controllers, gateway and domain models)
pub mod config;
pub mod domain;
pub mod shared;

// Dioxus application (routes, pages, components)
pub mod app;
