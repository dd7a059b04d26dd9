use crate::domain::entities::Message;

/// Presentation seam - invoked once for every message appended to the panel
pub trait Renderer: Send {
    fn show(&mut self, message: &Message);
}
