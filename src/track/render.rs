//! Plain-text rendering of a loop, for the demo binary and debugging.

use glam::IVec2;

use crate::track::path::TrackPath;

/// Renders `path` on its minimal bounding grid.
///
/// `S` marks the start, `-` and `|` straights, `+` curves, `.` empty cells.
pub fn render_ascii(path: &TrackPath) -> String {
    let nodes = path.nodes();
    let (min, max) = nodes
        .iter()
        .fold((IVec2::MAX, IVec2::MIN), |(min, max), node| (min.min(node.position), max.max(node.position)));
    let size = (max - min + IVec2::ONE).as_uvec2();

    let mut canvas = vec![vec!['.'; size.x as usize]; size.y as usize];
    for pair in nodes.windows(2) {
        let (node, next) = (pair[0], pair[1]);
        let glyph = if node.direction != next.direction {
            '+'
        } else if node.direction.is_horizontal() {
            '-'
        } else {
            '|'
        };
        let offset = (node.position - min).as_uvec2();
        canvas[offset.y as usize][offset.x as usize] = glyph;
    }

    let start = (path.start() - min).as_uvec2();
    canvas[start.y as usize][start.x as usize] = 'S';

    canvas
        .into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
