use crate::options::MeasureOptions;
use crate::tool::{MeasureTool, ToolFactory, ToolKind};
use crate::viewer::ViewerSlot;

/// Tool selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// No tool is selected.
    Idle,
    /// A tool of the given kind is selected and armed.
    ToolActive(ToolKind),
}

struct ActiveTool {
    kind: ToolKind,
    tool: Box<dyn MeasureTool>,
}

/// Keeps track of the selected measurement tool.
///
/// At most one tool instance is alive at any time. Selecting a tool destroys the previous
/// instance before the new one is created, and selecting the active tool again deselects it.
pub struct ToolController<V> {
    viewer: ViewerSlot<V>,
    factory: Box<dyn ToolFactory<V>>,
    options: MeasureOptions,
    active: Option<ActiveTool>,
}

impl<V> ToolController<V> {
    /// Creates a new controller with no tool selected.
    pub fn new(
        viewer: ViewerSlot<V>,
        factory: impl ToolFactory<V> + 'static,
        options: MeasureOptions,
    ) -> Self {
        Self {
            viewer,
            factory: Box::new(factory),
            options,
            active: None,
        }
    }

    /// Configuration given to the created tools.
    pub fn options(&self) -> &MeasureOptions {
        &self.options
    }

    /// Kind of the currently selected tool.
    pub fn active_tool(&self) -> Option<ToolKind> {
        self.active.as_ref().map(|active| active.kind)
    }

    /// Current selection state.
    pub fn state(&self) -> SelectionState {
        match self.active_tool() {
            Some(kind) => SelectionState::ToolActive(kind),
            None => SelectionState::Idle,
        }
    }

    /// Changes the selected tool.
    ///
    /// Does nothing if the viewer does not exist. Otherwise the current tool (if any) is
    /// destroyed, and if `kind` differs from the current selection a new tool of that kind is
    /// created and started. Selecting the current tool again leaves no tool selected.
    pub fn select_tool(&mut self, kind: Option<ToolKind>) {
        if !self.viewer.is_alive() {
            log::debug!("Tool selection ignored: viewer is not available");
            return;
        }

        let current = self.active_tool();
        self.destroy_active();

        let next = if kind == current { None } else { kind };
        let Some(kind) = next else {
            log::debug!("Measurement tool deselected");
            return;
        };

        let factory = &self.factory;
        let options = &self.options;
        let Some(mut tool) = self
            .viewer
            .with(|viewer| factory.create(kind, viewer, options))
        else {
            return;
        };

        tool.start();
        log::debug!("Measurement tool {kind} started");
        self.active = Some(ActiveTool { kind, tool });
    }

    /// Handles activation of a tool button.
    pub fn toggle(&mut self, kind: ToolKind) {
        self.select_tool(Some(kind));
    }

    /// Finishes the current measurement of the active tool. The tool stays selected and armed.
    pub fn clear(&mut self) {
        if let Some(active) = &mut self.active {
            active.tool.end();
        }
    }

    /// Destroys the active tool instance, leaving no tool selected.
    pub fn destroy_active(&mut self) {
        if let Some(mut active) = self.active.take() {
            active.tool.destroy();
            log::debug!("Measurement tool {} destroyed", active.kind);
        }
    }
}

impl<V> Drop for ToolController<V> {
    fn drop(&mut self) {
        self.destroy_active();
    }
}
