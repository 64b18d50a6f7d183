/// Events emitted during generation that renderers can handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    /// A fresh attempt started on an empty grid
    Started { attempt: usize },

    /// The cell at (x, y) was just collapsed
    Collapsed { x: usize, y: usize },

    /// The attempt hit a contradiction and was discarded
    Aborted,

    /// Every cell holds a value
    Completed,
}
