pub mod carousel;
pub mod config;
pub mod counter;
pub mod error;
pub mod events;
pub mod tasks {
    pub mod counters;
    pub mod session;
    pub mod slideshow;
    pub mod surface;
}
