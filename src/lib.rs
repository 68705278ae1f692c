pub mod controllers;
pub mod domain;
pub mod infrastructure;
