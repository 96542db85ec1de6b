//! Perft node counting.
//!
//! Perft walks the legal move tree to a fixed depth and counts leaves. The
//! totals for well-known positions are published, which makes perft the
//! standard check that move generation and make/unmake agree with the rules.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{FenError, Move, Position};

/// Leaf count plus a breakdown of the moves played at the last ply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerftStats {
    pub nodes: u64,
    /// Includes en passant and capturing promotions.
    pub captures: u64,
    pub en_passants: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftStats {
    fn record(&mut self, mv: Move) {
        self.nodes += 1;
        self.captures += u64::from(mv.is_capture());
        self.en_passants += u64::from(mv.is_en_passant());
        self.castles += u64::from(mv.is_castling());
        self.promotions += u64::from(mv.is_promotion());
        self.checks += u64::from(mv.gives_check());
        self.checkmates += u64::from(mv.gives_mate());
    }

    fn add(&mut self, other: &PerftStats) {
        self.nodes += other.nodes;
        self.captures += other.captures;
        self.en_passants += other.en_passants;
        self.castles += other.castles;
        self.promotions += other.promotions;
        self.checks += other.checks;
        self.checkmates += other.checkmates;
    }
}

impl Position {
    /// Number of leaf positions `depth` plies below this one.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            self.make_move(m);
            nodes += self.perft(depth - 1);
            self.unmake_move(m);
        }

        nodes
    }

    /// Perft split by root move.
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }

        let moves = self.generate_moves();
        let mut counts = Vec::with_capacity(moves.len());
        for m in moves {
            self.make_move(m);
            let nodes = self.perft(depth - 1);
            self.unmake_move(m);
            log::debug!("{m}: {nodes}");
            counts.push((m, nodes));
        }
        counts
    }

    /// Perft with the last ply's moves classified.
    ///
    /// At depth 0 the position itself is the single leaf and nothing is
    /// classified.
    pub fn perft_stats(&mut self, depth: usize) -> PerftStats {
        let mut stats = PerftStats::default();
        if depth == 0 {
            stats.nodes = 1;
            return stats;
        }

        if depth == 1 {
            for m in self.generate_annotated_moves() {
                stats.record(m);
            }
            return stats;
        }

        for m in self.generate_moves() {
            self.make_move(m);
            let sub = self.perft_stats(depth - 1);
            self.unmake_move(m);
            stats.add(&sub);
        }
        stats
    }
}

/// Perft of the position in `fen`, with the root moves shared across worker
/// threads.
///
/// Every worker parses its own `Position` and pulls root moves off a shared
/// cursor until none are left. `threads == 0` uses one worker per available
/// CPU.
pub fn parallel_perft(fen: &str, depth: usize, threads: usize) -> Result<u64, FenError> {
    let mut root = Position::from_fen(fen)?;
    if depth <= 1 {
        return Ok(root.perft(depth));
    }

    let root_moves = root.generate_moves();
    let threads = if threads == 0 {
        std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
    } else {
        threads
    }
    .clamp(1, root_moves.len().max(1));

    log::debug!(
        "parallel perft depth {depth}: {} root moves on {threads} threads",
        root_moves.len()
    );

    let cursor = AtomicUsize::new(0);
    let total = Mutex::new(0u64);

    std::thread::scope(|scope| {
        let workers: Vec<_> = (0..threads)
            .map(|_| {
                scope.spawn(|| -> Result<(), FenError> {
                    let mut pos = Position::from_fen(fen)?;
                    while let Some(m) = root_moves.get(cursor.fetch_add(1, Ordering::Relaxed)) {
                        pos.make_move(m);
                        let nodes = pos.perft(depth - 1);
                        pos.unmake_move(m);
                        log::trace!("{m}: {nodes}");
                        *total.lock() += nodes;
                    }
                    Ok(())
                })
            })
            .collect();

        workers.into_iter().try_for_each(|worker| {
            worker
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
        })
    })?;

    Ok(total.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::START_FEN;

    #[test]
    fn test_perft_depth_zero_is_one() {
        let mut pos = Position::new();
        assert_eq!(pos.perft(0), 1);
        assert_eq!(pos.perft_stats(0).nodes, 1);
        assert!(pos.perft_divide(0).is_empty());
    }

    #[test]
    fn test_divide_sums_to_perft() {
        let mut pos = Position::new();
        let divide = pos.perft_divide(3);
        assert_eq!(divide.len(), 20);
        let sum: u64 = divide.iter().map(|(_, n)| n).sum();
        assert_eq!(sum, 8902);
        assert_eq!(pos.get_fen(), START_FEN);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let kiwipete = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        assert_eq!(parallel_perft(START_FEN, 3, 4).unwrap(), 8902);
        assert_eq!(parallel_perft(kiwipete, 2, 0).unwrap(), 2039);
        assert_eq!(parallel_perft(kiwipete, 1, 3).unwrap(), 48);
    }

    #[test]
    fn test_parallel_rejects_bad_fen() {
        assert!(matches!(
            parallel_perft("not a fen", 2, 2),
            Err(FenError::TooFewParts { found: 3 })
        ));
    }

    #[test]
    fn test_stats_start_depth_two() {
        let mut pos = Position::new();
        let stats = pos.perft_stats(2);
        assert_eq!(
            stats,
            PerftStats {
                nodes: 400,
                ..PerftStats::default()
            }
        );
    }
}
