pub mod climate;
pub mod window;
