//! Text rendering of solved boards

use crate::algorithm::solver::Solution;
use crate::spatial::lock::{Lock, ShapeVocabulary};
use crate::spatial::tile::Edge;

/// One line per tile in row-major order with its final orientation
///
/// `(x,y) id=<id> rot=<r> W=M:heart N=… E=… S=…`
pub fn render_solution(solution: &Solution, vocabulary: &ShapeVocabulary) -> String {
    solution
        .placements()
        .map(|(cursor, tile)| {
            let locks = Edge::ALL
                .iter()
                .map(|&edge| {
                    let lock = render_lock(tile.lock(edge), vocabulary);
                    format!("{}={lock}", edge.tag())
                })
                .collect::<Vec<_>>()
                .join(" ");
            format!("{cursor} id={} rot={} {locks}\n", tile.id(), tile.rotation())
        })
        .collect()
}

/// Compact matrix of tile ids, one board row per line
pub fn render_grid(solution: &Solution) -> String {
    let width = solution
        .placements()
        .map(|(_, tile)| tile.id().to_string().len())
        .max()
        .unwrap_or(1);

    solution
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|tile| format!("{:>width$}", tile.id()))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `M:heart` style lock label; unknown shapes fall back to their index
pub fn render_lock(lock: Lock, vocabulary: &ShapeVocabulary) -> String {
    let polarity = lock.polarity().tag();
    vocabulary.name(lock.shape()).map_or_else(
        || format!("{polarity}:#{}", lock.shape().index()),
        |name| format!("{polarity}:{name}"),
    )
}
