// Swipe-to-reveal gesture state for a single list row.
use std::rc::Rc;
use yew::Reducible;

/// Furthest the foreground may be dragged left (fully revealed actions).
pub const MAX_DRAG: f64 = -160.0;
/// A released drag further left than this snaps open.
pub const OPEN_THRESHOLD: f64 = -72.0;
/// Resting offset of an open row. Deliberately short of `MAX_DRAG`.
pub const OPEN_REST: f64 = -128.0;
pub const CLOSED_REST: f64 = 0.0;
pub const SNAP_TRANSITION: &str = "transform 160ms ease";

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct SwipeState {
    /// Pointer x at gesture start; `Some` exactly while a touch is active.
    pub origin_x: Option<f64>,
    /// Offset captured at gesture start so consecutive drags compose.
    pub base_offset: f64,
    /// Current horizontal translation, always within `[MAX_DRAG, 0]`.
    pub offset: f64,
    pub is_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeAction {
    Begin(f64),
    Update(f64),
    End,
    /// Platform interrupted the touch; resolves exactly like `End`.
    Cancel,
    Close,
}

impl SwipeState {
    pub fn is_dragging(&self) -> bool {
        self.origin_x.is_some()
    }

    pub fn begin(mut self, pointer_x: f64) -> Self {
        if !pointer_x.is_finite() {
            return self;
        }
        self.origin_x = Some(pointer_x);
        self.base_offset = self.offset;
        self
    }

    pub fn update(mut self, pointer_x: f64) -> Self {
        let Some(origin) = self.origin_x else {
            return self;
        };
        if !pointer_x.is_finite() {
            return self;
        }
        let next = self.base_offset + (pointer_x - origin);
        self.offset = next.clamp(MAX_DRAG, CLOSED_REST);
        self
    }

    pub fn end(mut self) -> Self {
        self.is_open = self.offset < OPEN_THRESHOLD;
        self.offset = if self.is_open { OPEN_REST } else { CLOSED_REST };
        self.origin_x = None;
        self
    }

    /// Snap closed from any state, abandoning an in-flight drag.
    pub fn close(mut self) -> Self {
        self.is_open = false;
        self.offset = CLOSED_REST;
        self.origin_x = None;
        self
    }

    pub fn apply(self, action: SwipeAction) -> Self {
        match action {
            SwipeAction::Begin(x) => self.begin(x),
            SwipeAction::Update(x) => self.update(x),
            SwipeAction::End | SwipeAction::Cancel => self.end(),
            SwipeAction::Close => self.close(),
        }
    }

    /// Live drags track the finger; everything else animates to rest.
    pub fn transition(&self) -> &'static str {
        if self.is_dragging() { "none" } else { SNAP_TRANSITION }
    }

    pub fn foreground_style(&self) -> String {
        format!(
            "background:#fff; position:relative; transform:translateX({}px); transition:{};",
            self.offset,
            self.transition()
        )
    }
}

impl Reducible for SwipeState {
    type Action = SwipeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let new = (*self).apply(action);
        if new == *self {
            return self;
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(start: f64, to: f64) -> SwipeState {
        SwipeState::default().begin(start).update(to)
    }

    #[test]
    fn starts_closed_and_idle() {
        let s = SwipeState::default();
        assert_eq!(s.origin_x, None);
        assert_eq!(s.offset, 0.0);
        assert!(!s.is_open);
        assert_eq!(s.transition(), SNAP_TRANSITION);
    }

    #[test]
    fn tap_without_movement_stays_closed() {
        let s = SwipeState::default().begin(100.0).end();
        assert_eq!(s.offset, 0.0);
        assert!(!s.is_open);
        assert!(!s.is_dragging());
    }

    #[test]
    fn threshold_is_exclusive() {
        let at_threshold = drag(100.0, 28.0);
        assert_eq!(at_threshold.offset, -72.0);
        let s = at_threshold.end();
        assert!(!s.is_open);
        assert_eq!(s.offset, 0.0);

        let s = drag(100.0, 27.0).end();
        assert!(s.is_open);
        assert_eq!(s.offset, OPEN_REST);
    }

    #[test]
    fn long_drag_clamps_then_snaps_to_rest() {
        let s = drag(100.0, -100.0);
        assert_eq!(s.offset, MAX_DRAG);
        let s = s.end();
        assert!(s.is_open);
        assert_eq!(s.offset, -128.0);
    }

    #[test]
    fn rightward_drag_is_absorbed() {
        let s = drag(100.0, 300.0);
        assert_eq!(s.offset, 0.0);
    }

    #[test]
    fn dragging_disables_transition() {
        let s = drag(100.0, 90.0);
        assert!(s.is_dragging());
        assert_eq!(s.transition(), "none");
        assert!(s.foreground_style().contains("translateX(-10px)"));
    }

    #[test]
    fn update_without_gesture_is_noop() {
        let s = SwipeState::default().update(20.0);
        assert_eq!(s, SwipeState::default());
    }

    #[test]
    fn drag_back_from_open_closes() {
        let open = drag(200.0, 100.0).end();
        assert!(open.is_open);
        let s = open.begin(50.0);
        assert_eq!(s.base_offset, OPEN_REST);
        let s = s.update(178.0);
        assert_eq!(s.offset, 0.0);
        let s = s.end();
        assert!(!s.is_open);
        assert_eq!(s.offset, 0.0);
    }

    #[test]
    fn drag_further_left_from_open_hits_limit() {
        let s = drag(200.0, 100.0).end().begin(100.0).update(0.0);
        assert_eq!(s.offset, MAX_DRAG);
        assert!(s.end().is_open);
    }

    #[test]
    fn close_abandons_active_drag() {
        let s = drag(100.0, 0.0).close();
        assert!(!s.is_open);
        assert_eq!(s.offset, 0.0);
        assert!(!s.is_dragging());
        let s = s.update(-50.0);
        assert_eq!(s.offset, 0.0);
    }

    #[test]
    fn close_from_open() {
        let s = drag(200.0, 0.0).end().close();
        assert_eq!((s.offset, s.is_open), (0.0, false));
    }

    #[test]
    fn cancel_resolves_like_end() {
        let moved = drag(100.0, 0.0);
        assert_eq!(
            moved.apply(SwipeAction::Cancel),
            moved.apply(SwipeAction::End)
        );
        assert!(!moved.apply(SwipeAction::Cancel).is_dragging());
    }

    #[test]
    fn second_begin_overwrites_first() {
        let s = SwipeState::default()
            .begin(100.0)
            .update(60.0)
            .begin(300.0);
        assert_eq!(s.origin_x, Some(300.0));
        assert_eq!(s.base_offset, -40.0);
        assert_eq!(s.update(290.0).offset, -50.0);
    }

    #[test]
    fn non_finite_pointer_is_ignored() {
        let s = SwipeState::default().begin(f64::NAN);
        assert!(!s.is_dragging());
        let s = SwipeState::default().begin(10.0).update(f64::INFINITY);
        assert_eq!(s.offset, 0.0);
    }

    #[test]
    fn reducer_keeps_rc_on_noop() {
        let state = Rc::new(SwipeState::default());
        let next = state.clone().reduce(SwipeAction::Update(5.0));
        assert!(Rc::ptr_eq(&state, &next));
        let next = state.clone().reduce(SwipeAction::Begin(5.0));
        assert!(!Rc::ptr_eq(&state, &next));
    }
}
