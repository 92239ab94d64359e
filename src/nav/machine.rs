use crate::foundation::core::Direction;

/// The (slide, step) navigation position: the single source of truth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    /// Deck not yet started; the intro overlay owns the transition out.
    NotStarted,
    /// Positioned on a slide with a revealed step.
    At {
        /// Current slide index.
        slide: usize,
        /// Current step index within that slide.
        step: usize,
    },
}

impl Cursor {
    /// Slide index, if started.
    pub fn slide(self) -> Option<usize> {
        match self {
            Cursor::NotStarted => None,
            Cursor::At { slide, .. } => Some(slide),
        }
    }

    /// Step index, if started.
    pub fn step(self) -> Option<usize> {
        match self {
            Cursor::NotStarted => None,
            Cursor::At { step, .. } => Some(step),
        }
    }

    /// `true` once the deck has started.
    pub fn is_started(self) -> bool {
        matches!(self, Cursor::At { .. })
    }
}

/// Where a slide transition lands inside the target slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideEntry {
    /// Enter at step 0 (advancing or jumping).
    AtStart,
    /// Enter at the last step (retreating), preserving the illusion of
    /// continuous backward scrubbing.
    AtEnd,
}

/// Result of a navigation operation, to be applied by the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Nothing happened (boundary no-op or out-of-range request).
    None,
    /// Intra-slide step change.
    Step {
        /// Slide the change happened on.
        slide: usize,
        /// Step index before the change.
        from: usize,
        /// Step index after the change.
        to: usize,
    },
    /// Slide change (including the initial entry and dot jumps).
    Slide {
        /// Slide exited, or `None` for the initial entry.
        from: Option<usize>,
        /// Slide entered.
        to: usize,
        /// Entry point within the target slide.
        entry: SlideEntry,
    },
}

impl Transition {
    /// `true` for [`Transition::None`].
    pub fn is_none(self) -> bool {
        matches!(self, Transition::None)
    }

    /// Derived direction of the movement, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Transition::None => None,
            Transition::Step { from, to, .. } => Some(if to > from {
                Direction::Forward
            } else {
                Direction::Backward
            }),
            Transition::Slide { entry, .. } => Some(match entry {
                SlideEntry::AtStart => Direction::Forward,
                SlideEntry::AtEnd => Direction::Backward,
            }),
        }
    }
}

/// The navigation state machine.
///
/// Pure: no platform dependency, single writer of the cursor. Out-of-range
/// requests and boundary over-runs are silently ignored; they are routine UI
/// races (rapid double-clicks), not errors.
#[derive(Clone, Debug)]
pub struct Navigator {
    cursor: Cursor,
    step_counts: Vec<usize>,
}

impl Navigator {
    /// A navigator over a deck described by its per-slide step counts.
    pub fn new(step_counts: Vec<usize>) -> Self {
        Self {
            cursor: Cursor::NotStarted,
            step_counts,
        }
    }

    /// Read-only snapshot of the cursor at call time.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.step_counts.len()
    }

    /// Number of steps of slide `index` (zero when out of range).
    pub fn step_count(&self, index: usize) -> usize {
        self.step_counts.get(index).copied().unwrap_or(0)
    }

    /// `true` exactly at (first slide, first step).
    pub fn at_origin(&self) -> bool {
        self.cursor == Cursor::At { slide: 0, step: 0 }
    }

    /// `true` exactly at (last slide, last step of that slide).
    pub fn at_terminal(&self) -> bool {
        let Cursor::At { slide, step } = self.cursor else {
            return false;
        };
        slide + 1 == self.step_counts.len() && step + 1 >= self.step_count(slide).max(1)
    }

    /// Leave [`Cursor::NotStarted`] by entering slide 0. No-op once started.
    pub fn start(&mut self) -> Transition {
        if self.cursor.is_started() || self.step_counts.is_empty() {
            return Transition::None;
        }
        self.cursor = Cursor::At { slide: 0, step: 0 };
        Transition::Slide {
            from: None,
            to: 0,
            entry: SlideEntry::AtStart,
        }
    }

    /// Move one step forward, rolling into the next slide at step boundaries.
    /// Idempotent at the terminal position.
    pub fn advance(&mut self) -> Transition {
        let Cursor::At { slide, step } = self.cursor else {
            return Transition::None;
        };
        if step + 1 < self.step_count(slide) {
            self.cursor = Cursor::At {
                slide,
                step: step + 1,
            };
            Transition::Step {
                slide,
                from: step,
                to: step + 1,
            }
        } else if slide + 1 < self.step_counts.len() {
            self.cursor = Cursor::At {
                slide: slide + 1,
                step: 0,
            };
            Transition::Slide {
                from: Some(slide),
                to: slide + 1,
                entry: SlideEntry::AtStart,
            }
        } else {
            Transition::None
        }
    }

    /// Move one step backward, re-entering the previous slide at its *last*
    /// step at slide boundaries. No-op at the origin.
    pub fn retreat(&mut self) -> Transition {
        let Cursor::At { slide, step } = self.cursor else {
            return Transition::None;
        };
        if step > 0 {
            self.cursor = Cursor::At {
                slide,
                step: step - 1,
            };
            Transition::Step {
                slide,
                from: step,
                to: step - 1,
            }
        } else if slide > 0 {
            let to = slide - 1;
            self.cursor = Cursor::At {
                slide: to,
                step: self.step_count(to).saturating_sub(1),
            };
            Transition::Slide {
                from: Some(slide),
                to,
                entry: SlideEntry::AtEnd,
            }
        } else {
            Transition::None
        }
    }

    /// Jump directly to slide `target`, step 0. Out-of-range targets are
    /// silently ignored; jumping to the current slide re-enters it.
    pub fn go_to_slide(&mut self, target: usize) -> Transition {
        if target >= self.step_counts.len() {
            return Transition::None;
        }
        let from = self.cursor.slide();
        self.cursor = Cursor::At {
            slide: target,
            step: 0,
        };
        Transition::Slide {
            from,
            to: target,
            entry: SlideEntry::AtStart,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/nav/machine.rs"]
mod tests;
