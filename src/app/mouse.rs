use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::App;

impl App {
    /// Left clicks activate whatever was drawn under the cursor in the last
    /// frame and move keyboard focus there.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some((index, target)) = self.targets.hit_test(event.column, event.row) {
            self.focus = Some(index);
            self.activate(target);
            self.settle_navigation();
            self.request_redraw();
        }
    }
}
