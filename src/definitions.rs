use ratatui::layout::Rect;

/// Which header the terminal is wide enough for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    Desktop,
    Mobile,
}

impl LayoutMode {
    pub fn for_width(width: u16, mobile_breakpoint: u16) -> Self {
        if width >= mobile_breakpoint {
            LayoutMode::Desktop
        } else {
            LayoutMode::Mobile
        }
    }
}

/// Something on screen that reacts to Enter or a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Link(&'static str),
    LocaleSwitch,
    MenuButton,
}

/// Interactive regions drawn in the last frame, in visual order. Keyboard
/// focus is an index into this list.
#[derive(Debug, Default, Clone)]
pub struct TargetRegistry {
    entries: Vec<(Rect, Target)>,
}

impl TargetRegistry {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn register(&mut self, area: Rect, target: Target) {
        self.entries.push((area, target));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Target> {
        self.entries.get(index).map(|(_, target)| *target)
    }

    pub fn area(&self, index: usize) -> Option<Rect> {
        self.entries.get(index).map(|(area, _)| *area)
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<(usize, Target)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, (rect, _))| rect_contains(rect, column, row))
            .map(|(idx, (_, target))| (idx, *target))
    }

    pub fn targets(&self) -> impl Iterator<Item = Target> + '_ {
        self.entries.iter().map(|(_, target)| *target)
    }
}

pub fn rect_contains(rect: &Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
