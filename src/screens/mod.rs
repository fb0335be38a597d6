pub mod gameplay;
pub mod instructions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Instructions,
    Gameplay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    None,
    Navigate(Screen),
    /// The current song is fully resolved; the app moves on.
    Finished,
}
