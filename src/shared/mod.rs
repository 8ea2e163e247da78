pub mod constants;
pub mod errors;
pub mod logging;
pub mod services;

// Custom Dioxus hooks (one per session controller)
pub mod hooks;
