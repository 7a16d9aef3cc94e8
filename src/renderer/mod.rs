//! Presentation seam
//!
//! The simulation never draws. After each tick the host hands a
//! [`RenderSnapshot`] to a [`Presenter`]; a GPU presenter uploads the meshes
//! from [`shapes`] once and issues the [`shapes::draw_list`] every frame.

pub mod shapes;
pub mod vertex;

pub use shapes::{DrawCommand, Mesh, draw_list};
pub use vertex::Vertex;

use crate::sim::RenderSnapshot;

/// Something that shows a frame
pub trait Presenter {
    fn present(&mut self, frame: &RenderSnapshot);
}

/// Headless presenter: traces every draw through `log`
#[derive(Debug, Default)]
pub struct LogPresenter {
    pub frames: u64,
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &RenderSnapshot) {
        self.frames += 1;
        for draw in draw_list(frame) {
            log::trace!(
                "frame {} {:?} at ({:.3}, {:.3})",
                self.frames,
                draw.mesh,
                draw.offset.x,
                draw.offset.y
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[test]
    fn test_log_presenter_counts_frames() {
        let state = GameState::new();
        let mut presenter = LogPresenter::default();
        presenter.present(&RenderSnapshot::from(&state));
        presenter.present(&RenderSnapshot::from(&state));
        assert_eq!(presenter.frames, 2);
    }
}
