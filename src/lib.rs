pub mod config;
pub mod error;
pub mod events;
pub mod input;
pub mod model;
pub mod view;
pub mod tasks {
    pub mod autoplay;
    pub mod controller;
    pub mod terminal;
}
