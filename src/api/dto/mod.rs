pub mod index;
pub mod me;
pub mod tracks;
