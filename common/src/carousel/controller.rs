use super::{CarouselConfig, Millis, Navigation};
use crate::model::review::Review;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselState {
    Idle,
    /// An index change happened less than `transition_lock_ms` ago. Navigation
    /// requests are dropped in this state, not queued.
    Transitioning,
}

/// State of one carousel instance.
///
/// Created from an ordered list of reviews with unique ids; the list is not
/// deduplicated. An empty list is valid: there is no active review and every
/// navigation request is a no-op.
///
/// The controller owns two deadlines, the end of the transition lock and the
/// next auto-advance. The host asks for [`next_deadline`](Self::next_deadline),
/// waits until then and calls [`tick`](Self::tick). Dropping the host timer and
/// calling [`dispose`](Self::dispose) on teardown guarantees that no callback
/// mutates a controller nobody renders anymore.
#[derive(Debug, Clone)]
pub struct CarouselController {
    reviews: Vec<Review>,
    config: CarouselConfig,
    current_index: usize,
    paused: bool,
    visible: bool,
    lock_until: Option<Millis>,
    advance_at: Option<Millis>,
    countdown_started_at: Option<Millis>,
    disposed: bool,
}

impl CarouselController {
    pub fn new(reviews: Vec<Review>, config: CarouselConfig, now: Millis) -> Self {
        let mut controller = Self {
            reviews,
            config,
            current_index: 0,
            paused: false,
            visible: true,
            lock_until: None,
            advance_at: None,
            countdown_started_at: None,
            disposed: false,
        };
        controller.arm_countdown(now);
        controller
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn state(&self) -> CarouselState {
        if self.lock_until.is_some() {
            CarouselState::Transitioning
        } else {
            CarouselState::Idle
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.state() == CarouselState::Transitioning
    }

    /// The highlighted review, `None` only when the list is empty.
    pub fn active(&self) -> Option<&Review> {
        self.reviews.get(self.current_index)
    }

    /// Indices of the next `count` reviews after the active one, in forward
    /// cyclic order. Never longer than `len - 1`, so no review appears twice.
    pub fn preview_positions(&self, count: usize) -> Vec<usize> {
        let len = self.reviews.len();
        let count = count.min(len.saturating_sub(1));
        (1..=count)
            .map(|offset| (self.current_index + offset) % len)
            .collect()
    }

    pub fn previews(&self, count: usize) -> Vec<&Review> {
        self.preview_positions(count)
            .into_iter()
            .map(|i| &self.reviews[i])
            .collect()
    }

    pub fn next(&mut self, now: Millis) -> bool {
        self.navigate(Navigation::Next, now)
    }

    pub fn previous(&mut self, now: Millis) -> bool {
        self.navigate(Navigation::Previous, now)
    }

    pub fn go_to(&mut self, index: usize, now: Millis) -> bool {
        self.navigate(Navigation::GoTo(index), now)
    }

    /// Applies a navigation request and returns whether the index changed.
    ///
    /// Ignored while locked, after `dispose`, when the target is the current
    /// index and when a `GoTo` index is out of range. An accepted request takes
    /// the lock and restarts the auto-advance countdown from `now`.
    pub fn navigate(&mut self, navigation: Navigation, now: Millis) -> bool {
        if self.disposed || self.reviews.is_empty() {
            return false;
        }
        self.release_expired_lock(now);
        if self.lock_until.is_some() {
            return false;
        }
        match self.target_of(navigation) {
            Some(target) if target != self.current_index => {
                self.change_to(target, now);
                true
            }
            _ => false,
        }
    }

    /// Stops auto-advance. Only honoured with `pause_on_hover`.
    pub fn pause(&mut self) -> bool {
        if self.disposed || !self.config.pause_on_hover || self.paused {
            return false;
        }
        self.paused = true;
        self.advance_at = None;
        self.countdown_started_at = None;
        true
    }

    /// Restarts auto-advance with a full interval. Only honoured with
    /// `pause_on_hover`.
    pub fn resume(&mut self, now: Millis) -> bool {
        if self.disposed || !self.config.pause_on_hover || !self.paused {
            return false;
        }
        self.paused = false;
        self.arm_countdown(now);
        true
    }

    /// Tells the controller whether the host view is on screen. Auto-advance
    /// only runs while visible; becoming visible again restarts the countdown
    /// with a full interval. Independent of `pause` and `pause_on_hover`.
    /// Returns whether the visibility changed.
    pub fn set_visible(&mut self, visible: bool, now: Millis) -> bool {
        if self.disposed || self.visible == visible {
            return false;
        }
        self.visible = visible;
        self.arm_countdown(now);
        true
    }

    pub fn toggle_pause(&mut self, now: Millis) -> bool {
        if self.paused {
            self.resume(now)
        } else {
            self.pause()
        }
    }

    /// Fires everything that is due at `now`.
    ///
    /// Each elapsed auto-advance deadline produces one `next`, evaluated at the
    /// deadline itself so late ticks do not drift the schedule. A deadline that
    /// falls inside the transition lock is dropped and the countdown restarts.
    /// Returns whether the index changed.
    pub fn tick(&mut self, now: Millis) -> bool {
        if self.disposed {
            return false;
        }
        let mut changed = false;
        while let Some(due) = self.advance_at.filter(|&due| due <= now) {
            self.release_expired_lock(due);
            if self.lock_until.is_some() {
                self.arm_countdown(due);
                continue;
            }
            let target = (self.current_index + 1) % self.reviews.len();
            self.change_to(target, due);
            changed = true;
        }
        self.release_expired_lock(now);
        changed
    }

    /// Earliest moment `tick` has work to do.
    pub fn next_deadline(&self) -> Option<Millis> {
        [self.lock_until, self.advance_at].into_iter().flatten().min()
    }

    pub fn countdown_started_at(&self) -> Option<Millis> {
        self.countdown_started_at
    }

    /// Fraction of the current auto-advance countdown that has elapsed, in
    /// `0.0..=1.0`. Zero while paused or when auto-advance is not running.
    pub fn progress(&self, now: Millis) -> f64 {
        match (self.countdown_started_at, self.advance_at) {
            (Some(start), Some(due)) if due > start => {
                (now.saturating_sub(start) as f64 / (due - start) as f64).min(1.0)
            }
            _ => 0.0,
        }
    }

    /// Swaps in a new list. The index goes back to 0, the lock is released and
    /// the countdown restarts; the paused flag is kept.
    pub fn replace_reviews(&mut self, reviews: Vec<Review>, now: Millis) {
        if self.disposed {
            return;
        }
        self.reviews = reviews;
        self.current_index = 0;
        self.lock_until = None;
        self.arm_countdown(now);
    }

    /// Cancels both deadlines. Every later call is a no-op.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.lock_until = None;
        self.advance_at = None;
        self.countdown_started_at = None;
    }

    fn target_of(&self, navigation: Navigation) -> Option<usize> {
        let len = self.reviews.len();
        match navigation {
            Navigation::Next => Some((self.current_index + 1) % len),
            Navigation::Previous => Some((self.current_index + len - 1) % len),
            Navigation::GoTo(index) => (index < len).then_some(index),
        }
    }

    fn change_to(&mut self, index: usize, at: Millis) {
        self.current_index = index;
        self.lock_until =
            (self.config.transition_lock_ms > 0).then(|| at.saturating_add(self.config.transition_lock_ms));
        self.arm_countdown(at);
    }

    // A zero interval disables auto-advance.
    fn arm_countdown(&mut self, at: Millis) {
        let interval = self.config.auto_advance_interval_ms;
        if self.disposed
            || self.paused
            || !self.visible
            || self.reviews.len() < 2
            || interval == 0
        {
            self.advance_at = None;
            self.countdown_started_at = None;
            return;
        }
        self.countdown_started_at = Some(at);
        self.advance_at = Some(at.saturating_add(interval));
    }

    fn release_expired_lock(&mut self, now: Millis) {
        if self.lock_until.is_some_and(|until| now >= until) {
            self.lock_until = None;
        }
    }
}
