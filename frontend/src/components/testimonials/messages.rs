use common::model::review::Review;

pub enum Msg {
    Loaded(Vec<Review>),
    LoadFailed(String),
    Next,
    Previous,
    GoTo(usize),
    /// The scheduled wake-up fired.
    Tick,
    Pause,
    Resume,
    TogglePause,
    TouchStart(f64),
    TouchMove(f64),
    TouchEnd,
    Key(String),
    /// At least half of the carousel entered or left the viewport.
    VisibilityChanged(bool),
}
