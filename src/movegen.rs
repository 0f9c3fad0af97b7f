//////////////////////////
// movegen.rs
//////////////////////////

// Pseudo-legal destination generation. Nothing here looks at whether the
// mover's own king is left capturable.

use crate::board::BoardState;
use crate::config::RuleConfig;
use crate::types::*;

const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Destinations for the piece of `color` standing on `from`.
///
/// The kind is read from the board; an empty `from` yields an empty set.
pub fn destinations(
    board: &BoardState,
    from: Square,
    color: Color,
    rules: &RuleConfig,
) -> SquareSet {
    let mut out = SquareSet::new();
    let Some(piece) = board.cell_at(from) else {
        return out;
    };
    match piece.piece_type {
        PieceType::Pawn => pawn_moves(board, from, color, rules, &mut out),
        PieceType::Knight => leaper_moves(board, from, color, &KNIGHT_OFFSETS, &mut out),
        PieceType::Bishop => slide_all(board, from, color, &DIAGONAL, &mut out),
        PieceType::Rook => slide_all(board, from, color, &ORTHOGONAL, &mut out),
        PieceType::Queen => {
            slide_all(board, from, color, &ORTHOGONAL, &mut out);
            slide_all(board, from, color, &DIAGONAL, &mut out);
        }
        PieceType::King => leaper_moves(board, from, color, &KING_OFFSETS, &mut out),
    }
    out
}

/// Union of destinations over every piece `color` still has on the board.
pub fn capturable_squares(board: &BoardState, color: Color, rules: &RuleConfig) -> SquareSet {
    let mut union = SquareSet::new();
    for (square, _) in board.pieces_of(color) {
        union.extend(destinations(board, square, color, rules));
    }
    union
}

fn slide_all(
    board: &BoardState,
    from: Square,
    color: Color,
    directions: &[(i32, i32)],
    out: &mut SquareSet,
) {
    for &(dr, dc) in directions {
        walk_ray(board, from, color, dr, dc, out);
    }
}

/// Steps from `from` along one direction until the edge or the first piece.
/// An enemy piece ends the ray and is included, a friendly one is not.
pub fn walk_ray(
    board: &BoardState,
    from: Square,
    color: Color,
    dr: i32,
    dc: i32,
    out: &mut SquareSet,
) {
    let mut current = from;
    while let Some(next) = current.offset(dr, dc) {
        match board.cell_at(next) {
            None => {
                out.insert(next);
                current = next;
            }
            Some(occupant) => {
                if occupant.color != color {
                    out.insert(next);
                }
                break;
            }
        }
    }
}

pub fn leaper_moves(
    board: &BoardState,
    from: Square,
    color: Color,
    offsets: &[(i32, i32)],
    out: &mut SquareSet,
) {
    for &(dr, dc) in offsets {
        if let Some(target) = from.offset(dr, dc) {
            match board.cell_at(target) {
                Some(occupant) if occupant.color == color => {}
                _ => {
                    out.insert(target);
                }
            }
        }
    }
}

fn pawn_moves(
    board: &BoardState,
    from: Square,
    color: Color,
    rules: &RuleConfig,
    out: &mut SquareSet,
) {
    let dir = color.pawn_direction();

    let one_ahead = from.offset(dir, 0);
    if let Some(target) = one_ahead {
        if board.is_empty(target) {
            out.insert(target);
        }
    }

    // The intermediate square is only checked in strict mode.
    if from.row() == color.pawn_start_row() {
        if let Some(target) = from.offset(2 * dir, 0) {
            let path_clear = !rules.strict_pawn_double_step
                || one_ahead.map_or(false, |sq| board.is_empty(sq));
            if path_clear && board.is_empty(target) {
                out.insert(target);
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(target) = from.offset(dir, dc) {
            if let Some(occupant) = board.cell_at(target) {
                if occupant.color != color {
                    out.insert(target);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        Square::from_algebraic(text).unwrap()
    }

    fn set(squares: &[&str]) -> SquareSet {
        squares.iter().map(|s| sq(s)).collect()
    }

    fn loose() -> RuleConfig {
        RuleConfig::default()
    }

    #[test]
    fn rook_stops_at_first_piece_on_each_ray() {
        let board = BoardState::from_diagram(&[
            "........",
            "...p....",
            "........",
            "........",
            ".P.R...n",
            "........",
            "........",
            "........",
        ])
        .unwrap();
        let got = destinations(&board, sq("d4"), Color::White, &loose());
        assert_eq!(
            got,
            set(&["d5", "d6", "d7", "c4", "e4", "f4", "g4", "h4", "d3", "d2", "d1"])
        );
    }

    #[test]
    fn blocked_direction_does_not_suppress_others() {
        // Own pawn right next to the bishop on one diagonal.
        let board = BoardState::from_diagram(&[
            "........",
            "........",
            "........",
            "........",
            "........",
            "..P.....",
            "...B....",
            "........",
        ])
        .unwrap();
        let got = destinations(&board, sq("d2"), Color::White, &loose());
        assert_eq!(got, set(&["e3", "f4", "g5", "h6", "c1", "e1"]));
    }

    #[test]
    fn queen_combines_rook_and_bishop_rays() {
        let board = BoardState::from_diagram(&[
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "Q.......",
        ])
        .unwrap();
        let got = destinations(&board, sq("a1"), Color::White, &loose());
        assert_eq!(got.len(), 21);
        assert!(got.contains(&sq("h8")));
        assert!(got.contains(&sq("a8")));
        assert!(got.contains(&sq("h1")));
        assert!(!got.contains(&sq("a1")));
    }

    #[test]
    fn knight_skips_friendly_squares() {
        let board = BoardState::standard_setup();
        let got = destinations(&board, sq("g1"), Color::White, &loose());
        assert_eq!(got, set(&["f3", "h3"]));
    }

    #[test]
    fn knight_in_corner() {
        let board = BoardState::from_diagram(&[
            "n.......",
            "..P.....",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ])
        .unwrap();
        let got = destinations(&board, sq("a8"), Color::Black, &loose());
        assert_eq!(got, set(&["b6", "c7"]));
    }

    #[test]
    fn king_single_steps() {
        let board = BoardState::from_diagram(&[
            "........",
            "........",
            "........",
            "...pP...",
            "...K....",
            "........",
            "........",
            "........",
        ])
        .unwrap();
        let got = destinations(&board, sq("d4"), Color::White, &loose());
        assert_eq!(got, set(&["c5", "d5", "c4", "e4", "c3", "d3", "e3"]));
    }

    #[test]
    fn pawn_single_and_double_advance_from_start() {
        let board = BoardState::standard_setup();
        assert_eq!(
            destinations(&board, sq("e2"), Color::White, &loose()),
            set(&["e3", "e4"])
        );
        assert_eq!(
            destinations(&board, sq("c7"), Color::Black, &loose()),
            set(&["c6", "c5"])
        );
    }

    #[test]
    fn pawn_diagonal_needs_an_enemy() {
        let board = BoardState::from_diagram(&[
            "........",
            "........",
            "........",
            "...p.P..",
            "....P...",
            "........",
            "........",
            "........",
        ])
        .unwrap();
        // Friendly f5 and empty squares are never diagonal targets.
        let got = destinations(&board, sq("e4"), Color::White, &loose());
        assert_eq!(got, set(&["e5", "d5"]));
    }

    #[test]
    fn pawn_blocked_straight_ahead_cannot_capture_forward() {
        let board = BoardState::from_diagram(&[
            "........",
            "........",
            "........",
            "....p...",
            "....P...",
            "........",
            "........",
            "........",
        ])
        .unwrap();
        assert!(destinations(&board, sq("e4"), Color::White, &loose()).is_empty());
    }

    #[test]
    fn double_step_jumps_intermediate_piece_by_default() {
        let board = BoardState::from_diagram(&[
            "........",
            "........",
            "........",
            "........",
            "........",
            "....n...",
            "....P...",
            "........",
        ])
        .unwrap();
        let got = destinations(&board, sq("e2"), Color::White, &loose());
        assert_eq!(got, set(&["e4"]));
    }

    #[test]
    fn black_double_step_also_jumps_by_default() {
        let board = BoardState::from_diagram(&[
            "........",
            "...p....",
            "...N....",
            "........",
            "........",
            "........",
            "........",
            "........",
        ])
        .unwrap();
        let got = destinations(&board, sq("d7"), Color::Black, &loose());
        assert_eq!(got, set(&["d5"]));

        let strict = RuleConfig {
            strict_pawn_double_step: true,
        };
        assert!(destinations(&board, sq("d7"), Color::Black, &strict).is_empty());
    }

    #[test]
    fn strict_mode_blocks_double_step_through_a_piece() {
        let board = BoardState::from_diagram(&[
            "........",
            "........",
            "........",
            "........",
            "........",
            "....n...",
            "....P...",
            "........",
        ])
        .unwrap();
        let strict = RuleConfig {
            strict_pawn_double_step: true,
        };
        assert!(destinations(&board, sq("e2"), Color::White, &strict).is_empty());
        let open = BoardState::standard_setup();
        assert_eq!(
            destinations(&open, sq("e2"), Color::White, &strict),
            set(&["e3", "e4"])
        );
    }

    #[test]
    fn pawn_off_start_rank_moves_one() {
        let board = BoardState::from_diagram(&[
            "........",
            "........",
            "........",
            "........",
            "........",
            "....P...",
            "........",
            "........",
        ])
        .unwrap();
        assert_eq!(
            destinations(&board, sq("e3"), Color::White, &loose()),
            set(&["e4"])
        );
    }

    #[test]
    fn pawn_on_last_rank_has_no_moves() {
        let board = BoardState::from_diagram(&[
            "P.......",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            ".......p",
        ])
        .unwrap();
        assert!(destinations(&board, sq("a8"), Color::White, &loose()).is_empty());
        assert!(destinations(&board, sq("h1"), Color::Black, &loose()).is_empty());
    }

    #[test]
    fn opening_capturable_union() {
        let board = BoardState::standard_setup();
        let white = capturable_squares(&board, Color::White, &loose());
        // Ranks 3 and 4; the knight jumps land on rank 3 too.
        assert_eq!(white.len(), 16);
        assert!(white.iter().all(|sq| board.is_empty(*sq)));
    }

    #[test]
    fn empty_source_has_no_destinations() {
        let board = BoardState::standard_setup();
        assert!(destinations(&board, sq("e4"), Color::White, &loose()).is_empty());
    }
}
