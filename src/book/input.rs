/// Discrete requests coming from pointer, keyboard or UI buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    NextPage,
    PrevPage,
    PageIndex(i64),
    PointerEnter(usize),
    PointerLeave(usize),
    /// Click on a page: turns it back if already opened, forward otherwise.
    ClickPage(usize),
    ToggleAutoAdvance,
}
