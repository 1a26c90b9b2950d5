//! Draggable desk papers
//!
//! Papers can be dragged anywhere on the desk surface. A press that never
//! travels past [`DRAG_THRESHOLD_PX`] is a click and follows the paper's
//! link instead.

/// Combined |dx| + |dy| beyond which a press becomes a drag
pub const DRAG_THRESHOLD_PX: f64 = 6.0;

/// Papers stay this far inside every edge of the desk
pub const DESK_INSET_PX: f64 = 10.0;

/// First value handed out by [`StackOrder`]
pub const BASE_Z_INDEX: i32 = 10;

/// Z-index counter shared by all papers on one desk.
///
/// Every call to [`StackOrder::raise`] returns a value above all previous
/// ones, so the last paper touched is always on top.
#[derive(Debug, Clone)]
pub struct StackOrder {
    top: i32,
}

impl Default for StackOrder {
    fn default() -> Self {
        Self { top: BASE_Z_INDEX }
    }
}

impl StackOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&mut self) -> i32 {
        self.top += 1;
        self.top
    }

    pub fn top(&self) -> i32 {
        self.top
    }
}

/// Size of a rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Point in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Clamp a paper's top-left corner so the whole paper stays on the desk
pub fn clamp_to_desk(position: Point, paper: Size, desk: Size) -> Point {
    let max_x = desk.width - paper.width - DESK_INSET_PX;
    let max_y = desk.height - paper.height - DESK_INSET_PX;

    // min first, then max: an oversized paper pins to the inset
    Point {
        x: position.x.min(max_x).max(DESK_INSET_PX),
        y: position.y.min(max_y).max(DESK_INSET_PX),
    }
}

/// How a press ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Never crossed the threshold
    Click,
    Drag,
}

/// An active pointer press on one paper
#[derive(Debug, Clone)]
pub struct DragSession {
    pointer_id: i32,
    origin: Point,
    start: Point,
    moved: bool,
}

impl DragSession {
    /// `pointer` is in viewport coordinates; `paper_origin` is the paper's
    /// top-left relative to the desk at press time.
    pub fn begin(pointer_id: i32, pointer: Point, paper_origin: Point) -> Self {
        Self {
            pointer_id,
            origin: pointer,
            start: paper_origin,
            moved: false,
        }
    }

    pub fn pointer_id(&self) -> i32 {
        self.pointer_id
    }

    pub fn moved(&self) -> bool {
        self.moved
    }

    /// New clamped position for the paper after the pointer reached `pointer`
    pub fn drag_to(&mut self, pointer: Point, paper: Size, desk: Size) -> Point {
        let dx = pointer.x - self.origin.x;
        let dy = pointer.y - self.origin.y;

        if dx.abs() + dy.abs() > DRAG_THRESHOLD_PX {
            self.moved = true;
        }

        clamp_to_desk(
            Point::new(self.start.x + dx, self.start.y + dy),
            paper,
            desk,
        )
    }

    pub fn release(self) -> Release {
        if self.moved {
            Release::Drag
        } else {
            Release::Click
        }
    }
}

/// Per-paper interaction state.
///
/// Wraps the optional [`DragSession`] and decides where a click leads.
#[derive(Debug, Clone, Default)]
pub struct Paper {
    link: Option<String>,
    session: Option<DragSession>,
}

impl Paper {
    pub fn new(link: Option<String>) -> Self {
        Self {
            link,
            session: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Start a press and bring the paper to the front. Returns the new z-index.
    pub fn pointer_down(
        &mut self,
        stack: &mut StackOrder,
        pointer_id: i32,
        pointer: Point,
        paper_origin: Point,
    ) -> i32 {
        self.session = Some(DragSession::begin(pointer_id, pointer, paper_origin));
        stack.raise()
    }

    /// Position update while pressed; `None` when not pressed
    pub fn pointer_move(&mut self, pointer: Point, paper: Size, desk: Size) -> Option<Point> {
        let session = self.session.as_mut()?;
        Some(session.drag_to(pointer, paper, desk))
    }

    /// End the press. Returns the link to follow if it was a click.
    pub fn pointer_up(&mut self) -> Option<&str> {
        match self.session.take()?.release() {
            Release::Click => self.link.as_deref(),
            Release::Drag => None,
        }
    }

    /// Abort the press without navigating
    pub fn pointer_cancel(&mut self) {
        self.session = None;
    }

    /// Keyboard activation
    pub fn key_down(&self, key: &str) -> Option<&str> {
        if key == "Enter" { self.link.as_deref() } else { None }
    }
}
