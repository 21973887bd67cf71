/// Analysis relay request and response bodies.
pub mod analysis;
pub mod extract;
pub mod health;
/// Scoreboard mutation request and response bodies.
pub mod scoreboard;
pub mod validation;
