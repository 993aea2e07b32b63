/// Rendered size of the per-row actions trigger. Keep in sync with the
/// button style in the index view.
pub const MENU_TRIGGER_WIDTH: f64 = 72.0;
pub const MENU_TRIGGER_HEIGHT: f64 = 24.0;

/// On-screen rectangle of the element that opened the menu, in viewport
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl TriggerBounds {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAlign {
    Left,
    Right,
}

/// Placement of the floating menu layer. Exactly one horizontal anchor
/// is set depending on the alignment variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuPlacement {
    pub top: f64,
    pub left: Option<f64>,
    pub right: Option<f64>,
}

impl MenuPlacement {
    /// Inline-style fragment for the fixed-position menu container.
    pub fn style(&self) -> String {
        let mut style = format!("top: {}px;", self.top);
        if let Some(left) = self.left {
            style.push_str(&format!(" left: {left}px;"));
        }
        if let Some(right) = self.right {
            style.push_str(&format!(" right: {right}px;"));
        }
        style
    }
}

/// Computes where the floating row menu goes. The menu hangs off the
/// trigger's bottom edge; left-aligned menus share the trigger's left
/// edge, right-aligned ones anchor to the trigger's right edge measured
/// from the viewport's right side. Called fresh on every open, since
/// the trigger moves whenever the list re-sorts or re-pages.
pub fn place_menu(
    trigger: TriggerBounds,
    scroll_y: f64,
    viewport_width: f64,
    align: MenuAlign,
) -> MenuPlacement {
    let top = trigger.bottom() + scroll_y;
    match align {
        MenuAlign::Left => MenuPlacement {
            top,
            left: Some(trigger.left),
            right: None,
        },
        MenuAlign::Right => MenuPlacement {
            top,
            left: None,
            right: Some(viewport_width - trigger.right()),
        },
    }
}
