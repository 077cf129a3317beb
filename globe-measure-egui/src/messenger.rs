use globe_measure::Messenger;

/// Requests a repaint of the egui context when the viewer changes in the background.
#[derive(Clone)]
pub struct EguiMessenger {
    context: egui::Context,
}

impl EguiMessenger {
    /// Creates a messenger for the given context.
    pub fn new(context: egui::Context) -> Self {
        Self { context }
    }
}

impl Messenger for EguiMessenger {
    fn request_redraw(&self) {
        self.context.request_repaint();
    }
}
