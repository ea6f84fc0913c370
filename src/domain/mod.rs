pub mod command;
pub mod pendulum;
