pub mod flags_steps;
pub mod resolver_steps;
pub mod session_steps;
