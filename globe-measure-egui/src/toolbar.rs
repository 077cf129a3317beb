use egui::{Align2, Area, Context, Id, Ui};
use globe_measure::{MeasureMap, ToolKind, Viewer, TOOL_DESCRIPTORS};

const DEFAULT_CANCEL_LABEL: &str = "Cancel";

/// Action triggered by a toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    /// A tool button was activated.
    Toggle(ToolKind),
    /// The cancel button was activated.
    Cancel,
}

impl ToolbarAction {
    /// Applies the action to the map.
    pub fn apply<V: Viewer>(self, map: &mut MeasureMap<V>) {
        match self {
            ToolbarAction::Toggle(kind) => map.toggle_tool(kind),
            ToolbarAction::Cancel => map.clear(),
        }
    }
}

/// Button bar with one button per measurement tool and a cancel button.
///
/// The button of the selected tool is highlighted. Clicking it again deselects the tool.
pub struct MeasureToolbar<'a, V: Viewer> {
    map: &'a mut MeasureMap<V>,
    cancel_label: String,
}

impl<'a, V: Viewer> MeasureToolbar<'a, V> {
    /// Creates a toolbar controlling the given map.
    pub fn new(map: &'a mut MeasureMap<V>) -> Self {
        Self {
            map,
            cancel_label: DEFAULT_CANCEL_LABEL.to_string(),
        }
    }

    /// Sets the text of the cancel button.
    pub fn with_cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = label.into();
        self
    }

    /// Shows the toolbar and applies the clicked action to the map.
    pub fn show(self, ui: &mut Ui) -> Option<ToolbarAction> {
        let active = self.map.active_tool();
        let mut action = None;

        ui.horizontal(|ui| {
            let mut measures_area = false;
            for descriptor in TOOL_DESCRIPTORS {
                let kind = descriptor.kind;
                if kind.is_area() && !measures_area {
                    ui.separator();
                }
                measures_area = kind.is_area();

                let selected = active == Some(kind);
                let hint = if kind.is_surface() {
                    "Follows the terrain surface"
                } else {
                    "Ignores the terrain"
                };
                if ui
                    .selectable_label(selected, descriptor.label)
                    .on_hover_text(hint)
                    .clicked()
                {
                    action = Some(ToolbarAction::Toggle(descriptor.kind));
                }
            }

            if ui.button(self.cancel_label.as_str()).clicked() {
                action = Some(ToolbarAction::Cancel);
            }
        });

        if let Some(action) = action {
            log::debug!("Toolbar action: {action:?}");
            action.apply(self.map);
        }

        action
    }

    /// Shows the toolbar floating over the top-left corner of the screen.
    pub fn show_overlay(self, ctx: &Context) -> Option<ToolbarAction> {
        Area::new(Id::new("globe_measure_toolbar"))
            .anchor(Align2::LEFT_TOP, [8.0, 8.0])
            .show(ctx, |ui| self.show(ui))
            .inner
    }
}
