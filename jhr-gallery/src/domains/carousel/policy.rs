//! Playback policy: which signals currently suppress autoplay

/// Independent suppression signals plus the fixed `can_advance` fact.
///
/// Setters return whether the signal actually changed so callers can
/// re-evaluate the autoplay timer only when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackPolicy {
    can_advance: bool,
    paused: bool,
    tab_hidden: bool,
    reduce_motion: bool,
    fullscreen_open: bool,
}

impl PlaybackPolicy {
    pub fn new(can_advance: bool, tab_hidden: bool, reduce_motion: bool) -> Self {
        Self {
            can_advance,
            tab_hidden,
            reduce_motion,
            ..Default::default()
        }
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.can_advance
            && !self.reduce_motion
            && !self.paused
            && !self.tab_hidden
            && !self.fullscreen_open
    }

    pub fn can_advance(&self) -> bool {
        self.can_advance
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_tab_hidden(&self) -> bool {
        self.tab_hidden
    }

    pub fn reduce_motion(&self) -> bool {
        self.reduce_motion
    }

    pub fn is_fullscreen_open(&self) -> bool {
        self.fullscreen_open
    }

    pub fn set_paused(&mut self, paused: bool) -> bool {
        replace_flag(&mut self.paused, paused)
    }

    pub fn set_tab_hidden(&mut self, hidden: bool) -> bool {
        replace_flag(&mut self.tab_hidden, hidden)
    }

    pub fn set_reduce_motion(&mut self, reduce: bool) -> bool {
        replace_flag(&mut self.reduce_motion, reduce)
    }

    pub fn set_fullscreen_open(&mut self, open: bool) -> bool {
        replace_flag(&mut self.fullscreen_open, open)
    }
}

fn replace_flag(slot: &mut bool, value: bool) -> bool {
    let changed = *slot != value;
    *slot = value;
    changed
}
