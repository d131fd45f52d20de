use super::Navigation;

/// Horizontal swipe recognizer.
///
/// Feed it the touch start and move positions, then call `finish` when the
/// touch ends. Dragging left past the threshold means `Next`, dragging right
/// means `Previous`. Tracking is cleared after every gesture, recognized or not.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: Option<f64>,
    end_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: None,
            end_x: None,
        }
    }

    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
        self.end_x = None;
    }

    pub fn move_to(&mut self, x: f64) {
        if self.start_x.is_some() {
            self.end_x = Some(x);
        }
    }

    pub fn finish(&mut self) -> Option<Navigation> {
        let start = self.start_x.take();
        let end = self.end_x.take();
        let distance = start? - end?;
        if distance > self.threshold {
            Some(Navigation::Next)
        } else if distance < -self.threshold {
            Some(Navigation::Previous)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
        self.end_x = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}
