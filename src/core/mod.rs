pub mod clock;
pub mod display;
pub mod input;
pub mod song_loading;
pub mod space;
