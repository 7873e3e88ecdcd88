#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    GoTo(usize),
    PointerEnter,
    PointerLeave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideShown {
    pub index: usize,
    pub previous: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct VisibilitySample {
    pub id: String,
    pub fraction: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub id: String,
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone)]
pub enum SurfaceUpdate {
    Slide(SlideShown),
    Counter(CounterFrame),
}
