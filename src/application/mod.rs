/// Application layer - Use cases, DTOs, session state and read models
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod session;
pub mod use_cases;
