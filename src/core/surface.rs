//! Open/closed and expanded/collapsed state of the two chat skins.

/// Below this window width a submission expands the panel to full size.
pub const EXPAND_ON_SUBMIT_BELOW: f32 = 1024.0;

/// Floating widget in the corner of the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetSurface {
    open: bool,
}

impl WidgetSurface {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// Docked panel that can take over the whole window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelSurface {
    expanded: bool,
}

impl PanelSurface {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn expand(&mut self) {
        self.expanded = true;
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Called on every accepted submission.
    pub fn on_submit(&mut self, viewport_width: f32) {
        if viewport_width < EXPAND_ON_SUBMIT_BELOW {
            self.expand();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_toggles() {
        let mut widget = WidgetSurface::default();
        assert!(!widget.is_open());
        widget.toggle();
        assert!(widget.is_open());
        widget.open();
        assert!(widget.is_open());
        widget.close();
        assert!(!widget.is_open());
    }

    #[test]
    fn narrow_windows_expand_on_submit() {
        let mut panel = PanelSurface::default();
        panel.on_submit(1280.0);
        assert!(!panel.is_expanded());
        panel.on_submit(800.0);
        assert!(panel.is_expanded());
        panel.toggle();
        assert!(!panel.is_expanded());
    }
}
