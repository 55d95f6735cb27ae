/// Quoting domain - catalog model, filtering and price computation
///
/// Pure business logic with no I/O; everything here is usable from any
/// front end.
pub mod domain;
pub mod policies;
pub mod services;
