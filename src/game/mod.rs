pub mod feedback;
pub mod judgment;
pub mod note;
pub mod song;
