//! Plain data row types written by output backends.

/// Progress of the search after one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationRow {
    pub generation:   u64,
    pub fitness:      f64,
    /// The best candidate survived unchanged from the previous generation.
    pub elite:        bool,
    pub final_tick:   u64,
    pub unfulfilled:  u64,
    pub used_actions: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Release,
    Board,
    Alight,
    Dispatch,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Release  => "release",
            EventKind::Board    => "board",
            EventKind::Alight   => "alight",
            EventKind::Dispatch => "dispatch",
        }
    }
}

/// One simulation event.  `rider` is `None` for dispatches, `car` is `None`
/// for releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRow {
    pub tick:  u64,
    pub kind:  EventKind,
    pub rider: Option<u32>,
    pub car:   Option<u32>,
    pub floor: i32,
}
