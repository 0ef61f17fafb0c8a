/// Application layer - Use cases, state and DTOs
///
/// This layer contains the application logic that orchestrates
/// catalog services and coordinates with infrastructure through ports.
pub mod app_shell;
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod state;
pub mod use_cases;

pub use app_shell::AppShell;
