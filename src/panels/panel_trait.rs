#[derive(Debug, Clone, Copy, Default)]
pub struct PanelState {
    pub visible: bool,
}

/// Common open/close bookkeeping for the modal panels.
pub trait Panel {
    fn name(&self) -> &'static str;
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    // Optional hook with default empty impl
    fn on_open(&mut self) {}

    fn is_open(&self) -> bool {
        self.state().visible
    }

    fn open(&mut self) {
        self.on_open();
        self.state_mut().visible = true;
    }

    fn close(&mut self) {
        self.state_mut().visible = false;
    }
}
