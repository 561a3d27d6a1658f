/* =======================================================================
Sable is a chess playing engine.
Copyright (C) 2024-2025, The Sable developers

Sable is written in the Rust programming language. It is an original
work, not derived from any engine that came before it. However, it does
use a lot of concepts which are well-known and are in use by most if not
all classical alpha/beta-based chess engines.

Sable is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License version 3 as published by
the Free Software Foundation.

Sable is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License
for more details.

You should have received a copy of the GNU General Public License along
with this program.  If not, see <http://www.gnu.org/licenses/>.
======================================================================= */

pub mod defs;
mod init;

use crate::{
    board::{
        defs::{Pieces, Squares, BB_SQUARES, PAWN_PROMOTION_RANKS, PAWN_START_RANKS},
        Board,
    },
    defs::{Bitboard, Castling, NrOf, Piece, Side, Sides, Square, EMPTY},
    misc::bits,
};
use defs::{Move, MoveList};

// Promotion piece types per side, in the order the moves are emitted.
const PROMOTION_PIECES: [[Piece; 4]; Sides::BOTH] = [
    [
        Pieces::WHITE_QUEEN,
        Pieces::WHITE_ROOK,
        Pieces::WHITE_BISHOP,
        Pieces::WHITE_KNIGHT,
    ],
    [
        Pieces::BLACK_QUEEN,
        Pieces::BLACK_ROOK,
        Pieces::BLACK_BISHOP,
        Pieces::BLACK_KNIGHT,
    ],
];

// Each slider table holds one attack set per square per six-bit line
// occupancy.
const SLIDER_OCCUPANCIES: usize = 64;
const SLIDER_TABLE_SIZE: usize = NrOf::SQUARES * SLIDER_OCCUPANCIES;

// The move generator struct holds the attack tables for each piece type.
// It is built once at startup and read-only afterwards, so it can be
// shared freely between threads.
pub struct MoveGenerator {
    king: [Bitboard; NrOf::SQUARES],
    knight: [Bitboard; NrOf::SQUARES],
    pawn_pushes: [[Bitboard; NrOf::SQUARES]; Sides::BOTH],
    pawn_captures: [[Bitboard; NrOf::SQUARES]; Sides::BOTH],
    horiz: Vec<Bitboard>,
    vert: Vec<Bitboard>,
    diag_a1h8: Vec<Bitboard>,
    diag_a8h1: Vec<Bitboard>,
    diag_masks_a1h8: [Bitboard; NrOf::SQUARES],
    diag_masks_a8h1: [Bitboard; NrOf::SQUARES],
}

impl MoveGenerator {
    // Creates a new move generator and initializes all the tables.
    pub fn new() -> Self {
        let mut mg = Self {
            king: [EMPTY; NrOf::SQUARES],
            knight: [EMPTY; NrOf::SQUARES],
            pawn_pushes: [[EMPTY; NrOf::SQUARES]; Sides::BOTH],
            pawn_captures: [[EMPTY; NrOf::SQUARES]; Sides::BOTH],
            horiz: vec![EMPTY; SLIDER_TABLE_SIZE],
            vert: vec![EMPTY; SLIDER_TABLE_SIZE],
            diag_a1h8: vec![EMPTY; SLIDER_TABLE_SIZE],
            diag_a8h1: vec![EMPTY; SLIDER_TABLE_SIZE],
            diag_masks_a1h8: [EMPTY; NrOf::SQUARES],
            diag_masks_a8h1: [EMPTY; NrOf::SQUARES],
        };
        mg.init_king();
        mg.init_knight();
        mg.init_pawns();
        mg.init_sliders();
        mg
    }

    fn slider_index(square: Square, occupancy: usize) -> usize {
        (square << 6) | occupancy
    }

    // Rank and file slider attack sets for the given board occupancy.
    pub fn orthogonal_moves(&self, square: Square, occupancy: Bitboard) -> Bitboard {
        let rank_occ = bits::rank_occupancy(occupancy, bits::square_rank(square));
        let file_occ = bits::file_occupancy(occupancy, bits::square_file(square));
        self.horiz[Self::slider_index(square, rank_occ)]
            | self.vert[Self::slider_index(square, file_occ)]
    }

    // Diagonal slider attack sets for the given board occupancy.
    pub fn diagonal_moves(&self, square: Square, occupancy: Bitboard) -> Bitboard {
        let a1h8_occ =
            bits::diag_occupancy_a1h8(occupancy, self.diag_masks_a1h8[square], square);
        let a8h1_occ =
            bits::diag_occupancy_a8h1(occupancy, self.diag_masks_a8h1[square], square);
        self.diag_a1h8[Self::slider_index(square, a1h8_occ)]
            | self.diag_a8h1[Self::slider_index(square, a8h1_occ)]
    }
}

// *** === Getting the actual pseudo-legal moves. === *** //

impl MoveGenerator {
    // Generates all pseudo-legal moves for the given side. The moves
    // respect the piece movement rules and never land on an own piece,
    // but they may still leave the mover's own king in check; that is
    // decided by make_move.
    pub fn all_moves(&self, board: &Board, side: Side, list: &mut MoveList) {
        self.pawns(board, side, list);
        self.queens(board, side, list);
        self.bishops(board, side, list);
        self.rooks(board, side, list);
        self.knights(board, side, list);
        self.kings(board, side, list);
    }

    pub fn kings(&self, board: &Board, side: Side, list: &mut MoveList) {
        let mut bb_king = board.bb_pieces[Pieces::KINGS[side]];
        if bb_king == EMPTY {
            return;
        }

        let from = bits::next(&mut bb_king);
        let mut template = Move::new(0);
        template.set_piece(Pieces::KINGS[side]);
        template.set_source(from);

        let destinations = self.king[from] & !board.bb_side[side];
        self.add_moves(board, template, destinations, list);

        // Castling: rights present, the squares between king and rook
        // empty, and the king on its home square. Whether the king is in
        // check or castles through an attacked square is re-tested (and
        // rejected) by make_move.
        if side == Sides::WHITE && from == Squares::E1 {
            if board.castling & Castling::WK > 0 {
                let bb_kingside_blockers = BB_SQUARES[Squares::F1] | BB_SQUARES[Squares::G1];
                if board.bb_all & bb_kingside_blockers == 0 {
                    let mut m = template;
                    m.set_destination(Squares::G1);
                    m.set_castling(Pieces::WHITE_KING);
                    list.push(m);
                }
            }
            if board.castling & Castling::WQ > 0 {
                let bb_queenside_blockers =
                    BB_SQUARES[Squares::B1] | BB_SQUARES[Squares::C1] | BB_SQUARES[Squares::D1];
                if board.bb_all & bb_queenside_blockers == 0 {
                    let mut m = template;
                    m.set_destination(Squares::C1);
                    m.set_castling(Pieces::WHITE_KING);
                    list.push(m);
                }
            }
        } else if side == Sides::BLACK && from == Squares::E8 {
            if board.castling & Castling::BK > 0 {
                let bb_kingside_blockers = BB_SQUARES[Squares::F8] | BB_SQUARES[Squares::G8];
                if board.bb_all & bb_kingside_blockers == 0 {
                    let mut m = template;
                    m.set_destination(Squares::G8);
                    m.set_castling(Pieces::BLACK_KING);
                    list.push(m);
                }
            }
            if board.castling & Castling::BQ > 0 {
                let bb_queenside_blockers =
                    BB_SQUARES[Squares::B8] | BB_SQUARES[Squares::C8] | BB_SQUARES[Squares::D8];
                if board.bb_all & bb_queenside_blockers == 0 {
                    let mut m = template;
                    m.set_destination(Squares::C8);
                    m.set_castling(Pieces::BLACK_KING);
                    list.push(m);
                }
            }
        }
    }

    pub fn knights(&self, board: &Board, side: Side, list: &mut MoveList) {
        let other = bits::swap_side(side);
        // Capturing the opposing king is never legal; pruning those
        // destinations here keeps them out of the search entirely.
        let not_other_king = !board.bb_pieces[Pieces::KINGS[other]];
        let not_my_side = !board.bb_side[side];
        let mut bb_knights = board.bb_pieces[Pieces::KNIGHTS[side]];

        while bb_knights > 0 {
            let from = bits::next(&mut bb_knights);
            let mut template = Move::new(0);
            template.set_piece(Pieces::KNIGHTS[side]);
            template.set_source(from);

            let destinations = self.knight[from] & not_my_side & not_other_king;
            self.add_moves(board, template, destinations, list);
        }
    }

    pub fn pawns(&self, board: &Board, side: Side, list: &mut MoveList) {
        let other = bits::swap_side(side);
        let bb_other_side = board.bb_side[other];
        // Capturing the opposing king is never legal; prune it here like
        // the other piece generators do.
        let not_other_king = !board.bb_pieces[Pieces::KINGS[other]];
        let mut bb_pawns = board.bb_pieces[Pieces::PAWNS[side]];

        while bb_pawns > 0 {
            let from = bits::next(&mut bb_pawns);
            let rank = bits::square_rank(from);
            let mut template = Move::new(0);
            template.set_piece(Pieces::PAWNS[side]);
            template.set_source(from);

            // A pawn on its starting rank must not jump over a blocker
            // right in front of it to reach the double-push square.
            let mut bb_blockers = board.bb_all;
            if rank == PAWN_START_RANKS[side] {
                bb_blockers = bits::block_double_push(bb_blockers, side);
            }

            let mut destinations = self.pawn_pushes[side][from] & !bb_blockers;
            destinations |= self.pawn_captures[side][from] & bb_other_side & not_other_king;
            destinations &= not_other_king;

            if rank == PAWN_PROMOTION_RANKS[side] {
                self.add_promotions(board, template, destinations, side, list);
            } else {
                self.add_moves(board, template, destinations, list);

                // En-passant: at most one capture target per pawn, and it
                // is never a promotion.
                if let Some(ep) = board.ep_square {
                    if self.pawn_captures[side][from] & BB_SQUARES[ep as usize] > 0 {
                        let mut m = template;
                        m.set_destination(ep as Square);
                        m.set_captured(Pieces::PAWNS[other]);
                        m.set_en_passant(Pieces::PAWNS[side]);
                        list.push(m);
                    }
                }
            }
        }
    }

    pub fn rooks(&self, board: &Board, side: Side, list: &mut MoveList) {
        let piece = Pieces::ROOKS[side];
        self.orthogonal_sliders(board, side, piece, board.bb_pieces[piece], list);
    }

    pub fn bishops(&self, board: &Board, side: Side, list: &mut MoveList) {
        let piece = Pieces::BISHOPS[side];
        self.diagonal_sliders(board, side, piece, board.bb_pieces[piece], list);
    }

    // Queen moves are the union of rook-style and bishop-style moves.
    pub fn queens(&self, board: &Board, side: Side, list: &mut MoveList) {
        let piece = Pieces::QUEENS[side];
        self.orthogonal_sliders(board, side, piece, board.bb_pieces[piece], list);
        self.diagonal_sliders(board, side, piece, board.bb_pieces[piece], list);
    }

    fn orthogonal_sliders(
        &self,
        board: &Board,
        side: Side,
        piece: Piece,
        bb_movers: Bitboard,
        list: &mut MoveList,
    ) {
        let other = bits::swap_side(side);
        let not_other_king = !board.bb_pieces[Pieces::KINGS[other]];
        let not_my_side = !board.bb_side[side];
        let mut bb_movers = bb_movers;

        while bb_movers > 0 {
            let from = bits::next(&mut bb_movers);
            let mut template = Move::new(0);
            template.set_piece(piece);
            template.set_source(from);

            let destinations =
                self.orthogonal_moves(from, board.bb_all) & not_my_side & not_other_king;
            self.add_moves(board, template, destinations, list);
        }
    }

    fn diagonal_sliders(
        &self,
        board: &Board,
        side: Side,
        piece: Piece,
        bb_movers: Bitboard,
        list: &mut MoveList,
    ) {
        let other = bits::swap_side(side);
        let not_other_king = !board.bb_pieces[Pieces::KINGS[other]];
        let not_my_side = !board.bb_side[side];
        let mut bb_movers = bb_movers;

        while bb_movers > 0 {
            let from = bits::next(&mut bb_movers);
            let mut template = Move::new(0);
            template.set_piece(piece);
            template.set_source(from);

            let destinations =
                self.diagonal_moves(from, board.bb_all) & not_my_side & not_other_king;
            self.add_moves(board, template, destinations, list);
        }
    }

    // Emit one move per destination bit, with the captured piece read
    // from the square the move lands on.
    fn add_moves(&self, board: &Board, template: Move, destinations: Bitboard, list: &mut MoveList) {
        let mut bb_to = destinations;

        while bb_to > 0 {
            let to = bits::next(&mut bb_to);
            let mut m = template;
            m.set_destination(to);
            m.set_captured(board.piece_list[to]);
            list.push(m);
        }
    }

    // Emit four moves per destination bit, one per promotion piece.
    fn add_promotions(
        &self,
        board: &Board,
        template: Move,
        destinations: Bitboard,
        side: Side,
        list: &mut MoveList,
    ) {
        let mut bb_to = destinations;

        while bb_to > 0 {
            let to = bits::next(&mut bb_to);
            let mut m = template;
            m.set_destination(to);
            m.set_captured(board.piece_list[to]);

            for promotion_piece in PROMOTION_PIECES[side] {
                let mut pm = m;
                pm.set_promotion(promotion_piece);
                list.push(pm);
            }
        }
    }
}

impl MoveGenerator {
    // Decides whether the side NOT holding the square attacks it. The
    // check places an imaginary piece of the holding side on the square
    // and asks, for every piece type, whether a piece of that type could
    // reach the square by its own movement rules. Sliders use the same
    // occupancy-indexed tables as move generation.
    pub fn square_attacked(&self, board: &Board, square: Square, side_on_square: Side) -> bool {
        let other = bits::swap_side(side_on_square);
        let occupancy = board.bb_all;

        if board.bb_pieces[Pieces::PAWNS[other]] & self.pawn_captures[side_on_square][square] > 0 {
            return true;
        }

        if board.bb_pieces[Pieces::KNIGHTS[other]] & self.knight[square] > 0 {
            return true;
        }

        if board.bb_pieces[Pieces::KINGS[other]] & self.king[square] > 0 {
            return true;
        }

        let orthogonal_attackers =
            board.bb_pieces[Pieces::QUEENS[other]] | board.bb_pieces[Pieces::ROOKS[other]];
        if orthogonal_attackers & self.orthogonal_moves(square, occupancy) > 0 {
            return true;
        }

        let diagonal_attackers =
            board.bb_pieces[Pieces::QUEENS[other]] | board.bb_pieces[Pieces::BISHOPS[other]];
        if diagonal_attackers & self.diagonal_moves(square, occupancy) > 0 {
            return true;
        }

        false
    }

    // Is the given side's king in check? A side without a king (bare
    // test positions) is never in check.
    pub fn detect_check(&self, board: &Board, side: Side) -> bool {
        if board.bb_pieces[Pieces::KINGS[side]] == EMPTY {
            return false;
        }

        self.square_attacked(board, board.king_square(side), side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::defs::SQUARE_NAME;

    fn sq(name: &str) -> Square {
        SQUARE_NAME.iter().position(|&n| n == name).unwrap()
    }

    fn board_with(pieces: &[(Piece, &str)]) -> Board {
        let mut board = Board::new();
        board.castling = 0;
        for &(piece, name) in pieces {
            board.place_piece(piece, sq(name));
        }
        board.update_sides();
        board
    }

    fn destinations(list: &MoveList) -> Vec<Square> {
        let mut to: Vec<Square> = (0..list.len()).map(|i| list.get_move(i).to()).collect();
        to.sort_unstable();
        to.dedup();
        to
    }

    fn named(squares: &[&str]) -> Vec<Square> {
        let mut v: Vec<Square> = squares.iter().map(|n| sq(n)).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn knight_in_the_corner_has_two_moves() {
        let board = board_with(&[(Pieces::WHITE_KNIGHT, "a8")]);
        let mg = MoveGenerator::new();
        let mut list = MoveList::new();
        mg.knights(&board, Sides::WHITE, &mut list);

        assert_eq!(list.len(), 2);
        assert_eq!(destinations(&list), named(&["c7", "b6"]));
    }

    #[test]
    fn knight_in_the_center_has_eight_moves() {
        let board = board_with(&[(Pieces::WHITE_KNIGHT, "e5")]);
        let mg = MoveGenerator::new();
        let mut list = MoveList::new();
        mg.knights(&board, Sides::WHITE, &mut list);

        assert_eq!(list.len(), 8);
    }

    #[test]
    fn king_in_the_center_has_eight_moves() {
        let board = board_with(&[(Pieces::BLACK_KING, "e5")]);
        let mg = MoveGenerator::new();
        let mut list = MoveList::new();
        mg.kings(&board, Sides::BLACK, &mut list);

        assert_eq!(list.len(), 8);
    }

    #[test]
    fn rook_on_empty_board_has_fourteen_moves() {
        let board = board_with(&[(Pieces::WHITE_ROOK, "a8")]);
        let mg = MoveGenerator::new();
        let mut list = MoveList::new();
        mg.rooks(&board, Sides::WHITE, &mut list);

        assert_eq!(list.len(), 14);
    }

    #[test]
    fn bishop_in_the_center_has_thirteen_moves() {
        let board = board_with(&[(Pieces::WHITE_BISHOP, "e5")]);
        let mg = MoveGenerator::new();
        let mut list = MoveList::new();
        mg.bishops(&board, Sides::WHITE, &mut list);

        assert_eq!(list.len(), 13);
    }

    #[test]
    fn sliders_stop_at_blockers() {
        // The rook can capture the black pawn on a4 but not pass it; the
        // own knight on d8 blocks the rank beyond c8.
        let board = board_with(&[
            (Pieces::WHITE_ROOK, "a8"),
            (Pieces::BLACK_PAWN, "a4"),
            (Pieces::WHITE_KNIGHT, "d8"),
        ]);
        let mg = MoveGenerator::new();
        let mut list = MoveList::new();
        mg.rooks(&board, Sides::WHITE, &mut list);

        assert_eq!(
            destinations(&list),
            named(&["a7", "a6", "a5", "a4", "b8", "c8"])
        );

        let capture = (0..list.len())
            .map(|i| list.get_move(i))
            .find(|m| m.to() == sq("a4"))
            .unwrap();
        assert_eq!(capture.captured(), Pieces::BLACK_PAWN);
    }

    #[test]
    fn pawn_on_starting_rank_can_double_push() {
        let board = board_with(&[(Pieces::WHITE_PAWN, "e2")]);
        let mg = MoveGenerator::new();
        let mut list = MoveList::new();
        mg.pawns(&board, Sides::WHITE, &mut list);

        assert_eq!(list.len(), 2);
        assert_eq!(destinations(&list), named(&["e3", "e4"]));
    }

    #[test]
    fn pawn_double_push_blocked_by_piece_in_front() {
        let board = board_with(&[(Pieces::WHITE_PAWN, "e2"), (Pieces::BLACK_KNIGHT, "e3")]);
        let mg = MoveGenerator::new();
        let mut list = MoveList::new();
        mg.pawns(&board, Sides::WHITE, &mut list);

        assert_eq!(list.len(), 0);
    }

    #[test]
    fn pawn_promotion_pushes() {
        let board = board_with(&[(Pieces::WHITE_PAWN, "c7")]);
        let mg = MoveGenerator::new();
        let mut list = MoveList::new();
        mg.pawns(&board, Sides::WHITE, &mut list);

        assert_eq!(list.len(), 4);

        let mut promotions: Vec<Piece> =
            (0..list.len()).map(|i| list.get_move(i).promoted()).collect();
        promotions.sort_unstable();
        assert_eq!(
            promotions,
            vec![
                Pieces::WHITE_ROOK,
                Pieces::WHITE_KNIGHT,
                Pieces::WHITE_BISHOP,
                Pieces::WHITE_QUEEN
            ]
        );
        assert!((0..list.len()).all(|i| list.get_move(i).to() == sq("c8")));
    }

    #[test]
    fn pawn_promotion_with_capture() {
        let board = board_with(&[(Pieces::WHITE_PAWN, "c7"), (Pieces::BLACK_BISHOP, "b8")]);
        let mg = MoveGenerator::new();
        let mut list = MoveList::new();
        mg.pawns(&board, Sides::WHITE, &mut list);

        // Four push promotions to c8, four capture promotions to b8.
        assert_eq!(list.len(), 8);

        let captures: Vec<Move> = (0..list.len())
            .map(|i| list.get_move(i))
            .filter(|m| m.to() == sq("b8"))
            .collect();
        assert_eq!(captures.len(), 4);
        assert!(captures.iter().all(|m| m.captured() == Pieces::BLACK_BISHOP));
        assert!(captures.iter().all(|m| m.promoted() != Pieces::NONE));
    }

    #[test]
    fn pawns_never_capture_the_king() {
        // A pawn diagonally adjacent to the enemy king: the "capture" of
        // the king itself must not be generated, only the push remains.
        let board = board_with(&[(Pieces::WHITE_PAWN, "d4"), (Pieces::BLACK_KING, "e5")]);
        let mg = MoveGenerator::new();
        let mut list = MoveList::new();
        mg.pawns(&board, Sides::WHITE, &mut list);

        assert_eq!(destinations(&list), named(&["d5"]));
    }

    #[test]
    fn en_passant_capture_is_emitted() {
        let mut board = board_with(&[(Pieces::BLACK_PAWN, "b4"), (Pieces::WHITE_PAWN, "a4")]);
        board.ep_square = Some(sq("a3") as u8);

        let mg = MoveGenerator::new();
        let mut list = MoveList::new();
        mg.pawns(&board, Sides::BLACK, &mut list);

        assert_eq!(list.len(), 2);
        let ep = (0..list.len())
            .map(|i| list.get_move(i))
            .find(|m| m.to() == sq("a3"))
            .unwrap();
        assert_eq!(ep.en_passant(), Pieces::BLACK_PAWN);
        assert_eq!(ep.captured(), Pieces::WHITE_PAWN);
    }

    #[test]
    fn castling_is_emitted_when_path_is_free() {
        let mut board = board_with(&[(Pieces::WHITE_KING, "e1"), (Pieces::WHITE_ROOK, "h1")]);
        board.castling = Castling::WK;

        let mg = MoveGenerator::new();
        let mut list = MoveList::new();
        mg.kings(&board, Sides::WHITE, &mut list);

        let castle = (0..list.len())
            .map(|i| list.get_move(i))
            .find(|m| m.castling() != Pieces::NONE);
        assert!(castle.is_some());
        assert_eq!(castle.unwrap().to(), Squares::G1);
    }

    #[test]
    fn castling_is_not_emitted_through_blockers() {
        let mut board = board_with(&[
            (Pieces::WHITE_KING, "e1"),
            (Pieces::WHITE_ROOK, "h1"),
            (Pieces::WHITE_BISHOP, "f1"),
        ]);
        board.castling = Castling::WK;

        let mg = MoveGenerator::new();
        let mut list = MoveList::new();
        mg.kings(&board, Sides::WHITE, &mut list);

        assert!((0..list.len()).all(|i| list.get_move(i).castling() == Pieces::NONE));
    }

    #[test]
    fn attack_detection_by_piece_type() {
        let mg = MoveGenerator::new();

        let board = board_with(&[(Pieces::BLACK_ROOK, "a8"), (Pieces::WHITE_KING, "a1")]);
        assert!(mg.square_attacked(&board, sq("a1"), Sides::WHITE));
        assert!(mg.detect_check(&board, Sides::WHITE));

        // A blocker on the file breaks the attack.
        let board = board_with(&[
            (Pieces::BLACK_ROOK, "a8"),
            (Pieces::WHITE_PAWN, "a2"),
            (Pieces::WHITE_KING, "a1"),
        ]);
        assert!(!mg.detect_check(&board, Sides::WHITE));

        // Pawns attack diagonally, and only forwards.
        let board = board_with(&[(Pieces::BLACK_PAWN, "d5"), (Pieces::WHITE_KING, "e4")]);
        assert!(mg.detect_check(&board, Sides::WHITE));
        let board = board_with(&[(Pieces::BLACK_PAWN, "d3"), (Pieces::WHITE_KING, "e4")]);
        assert!(!mg.detect_check(&board, Sides::WHITE));

        // Diagonal slider through a blocker.
        let board = board_with(&[(Pieces::BLACK_QUEEN, "h8"), (Pieces::WHITE_KING, "a1")]);
        assert!(mg.detect_check(&board, Sides::WHITE));
        let board = board_with(&[
            (Pieces::BLACK_QUEEN, "h8"),
            (Pieces::BLACK_KNIGHT, "d4"),
            (Pieces::WHITE_KING, "a1"),
        ]);
        assert!(!mg.detect_check(&board, Sides::WHITE));
    }
}
