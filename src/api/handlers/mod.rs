pub mod health;
pub mod index;
pub mod me;
pub mod tracks;
