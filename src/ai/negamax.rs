use log::debug;

use crate::game::Board;

use super::agent::Agent;

/// Position values from the side to move.
pub const LOSS: i8 = -1;
pub const DRAW: i8 = 0;
pub const WIN: i8 = 1;

/// Initial alpha-beta window, one wider than any reachable value.
const WINDOW: (i8, i8) = (-2, 2);

/// Value of a searched node. `best_column` is only filled in at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub value: i8,
    pub best_column: Option<usize>,
}

/// Exhaustive negamax with alpha-beta pruning.
///
/// There is no depth limit and no transposition table: the search walks the
/// whole remaining game tree, which is only practical late in the game.
#[derive(Debug, Default)]
pub struct Negamax {
    nodes: u64,
}

impl Negamax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Solve `board` from the side to move.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;
        let result = self.negamax(board, 0, WINDOW.0, WINDOW.1);
        debug!(
            "negamax: value {} column {:?} after {} nodes",
            result.value, result.best_column, self.nodes
        );
        result
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn negamax(&mut self, board: &Board, depth: usize, mut alpha: i8, beta: i8) -> SearchResult {
        self.nodes += 1;

        // The side that moved into this position won: a loss for the mover now.
        if board.just_won() {
            return SearchResult {
                value: LOSS,
                best_column: None,
            };
        }
        if board.is_full() {
            return SearchResult {
                value: DRAW,
                best_column: None,
            };
        }

        let mut best = SearchResult {
            value: WINDOW.0,
            best_column: None,
        };

        for col in board.legal_moves() {
            let mut child = board.clone();
            if child.apply_move(col).is_err() {
                continue;
            }
            let value = -self.negamax(&child, depth + 1, -beta, -alpha).value;

            if value > alpha {
                alpha = value;
            }
            if value > best.value {
                best.value = value;
                if depth == 0 {
                    best.best_column = Some(col);
                }
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }
}

/// Solve `board` with a fresh searcher.
pub fn search(board: &Board) -> SearchResult {
    Negamax::new().search(board)
}

/// Provably best column for the side to move, `None` on a finished game.
pub fn best_move(board: &Board) -> Option<usize> {
    search(board).best_column
}

/// Agent backed by the exhaustive search.
#[derive(Debug, Default)]
pub struct NegamaxAgent {
    search: Negamax,
}

impl NegamaxAgent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Agent for NegamaxAgent {
    fn select_action(&mut self, board: &Board) -> Option<usize> {
        self.search.search(board).best_column
    }

    fn name(&self) -> &str {
        "Negamax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomAgent;
    use crate::game::testing::{play, DRAWN_GAME};
    use crate::game::{GameOutcome, Player};

    /// X to move; X has three stacked in column 4.
    const X_WINS_IN_ONE: [usize; 26] = [
        6, 3, 6, 3, 0, 2, 4, 3, 3, 6, 6, 2, 3, 2, 4, 1, 4, 1, 2, 1, 6, 5, 6, 3, 0, 5,
    ];

    /// X to move; O threatens to complete a line in column 0.
    const O_THREATENS: [usize; 26] = [
        1, 3, 5, 3, 5, 2, 3, 6, 1, 6, 3, 6, 4, 1, 4, 4, 1, 0, 0, 2, 4, 3, 0, 1, 6, 6,
    ];

    /// Positions with nine empty cells, O to move.
    const NINE_EMPTY: [[usize; 33]; 4] = [
        [
            6, 3, 6, 3, 0, 2, 4, 3, 3, 6, 6, 2, 3, 2, 4, 1, 4, 1, 2, 1, 6, 5, 6, 3, 0, 5, 0, 2,
            2, 5, 5, 5, 1,
        ],
        [
            1, 4, 6, 6, 6, 0, 2, 0, 3, 6, 3, 3, 5, 3, 6, 1, 0, 3, 0, 6, 3, 4, 5, 0, 4, 2, 1, 5,
            0, 1, 1, 1, 2,
        ],
        [
            6, 6, 0, 0, 0, 2, 6, 1, 5, 6, 5, 6, 2, 2, 4, 1, 4, 0, 4, 5, 1, 3, 5, 3, 6, 5, 2, 4,
            5, 2, 0, 0, 2,
        ],
        [
            1, 4, 4, 1, 2, 4, 3, 5, 4, 0, 4, 0, 6, 3, 2, 4, 1, 1, 6, 3, 5, 5, 3, 3, 6, 1, 1, 6,
            0, 0, 2, 6, 0,
        ],
    ];

    /// Plain minimax without pruning, for cross-checking values.
    fn minimax(board: &Board, nodes: &mut u64) -> i8 {
        *nodes += 1;
        if board.just_won() {
            return LOSS;
        }
        if board.is_full() {
            return DRAW;
        }
        board
            .legal_moves()
            .into_iter()
            .map(|col| {
                let mut child = board.clone();
                child.apply_move(col).unwrap();
                -minimax(&child, nodes)
            })
            .max()
            .unwrap()
    }

    #[test]
    fn finished_games_have_no_move() {
        let drawn = play(&DRAWN_GAME);
        assert_eq!(
            search(&drawn),
            SearchResult {
                value: DRAW,
                best_column: None
            }
        );

        let won = play(&[0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(
            search(&won),
            SearchResult {
                value: LOSS,
                best_column: None
            }
        );
        assert_eq!(best_move(&won), None);
    }

    #[test]
    fn last_cell_is_a_draw() {
        let board = play(&DRAWN_GAME[..41]);
        assert_eq!(
            search(&board),
            SearchResult {
                value: DRAW,
                best_column: Some(6)
            }
        );
    }

    #[test]
    fn takes_winning_move() {
        let board = play(&X_WINS_IN_ONE);
        let result = search(&board);
        assert_eq!(result.value, WIN);
        assert_eq!(result.best_column, Some(4), "Should take winning move at col 4");
    }

    #[test]
    fn blocks_opponent_win() {
        let board = play(&O_THREATENS);
        assert_eq!(board.side_to_move(), Player::X);
        assert_eq!(best_move(&board), Some(0), "Should block in col 0");
    }

    #[test]
    fn agrees_with_plain_minimax() {
        for seq in &NINE_EMPTY {
            let board = play(seq);
            let mut full_nodes = 0;
            let expected = minimax(&board, &mut full_nodes);

            let mut negamax = Negamax::new();
            let result = negamax.search(&board);
            assert_eq!(result.value, expected, "position {seq:?}");
            assert!(negamax.nodes() <= full_nodes);

            // The chosen column keeps the solved value
            let mut child = board.clone();
            child.apply_move(result.best_column.unwrap()).unwrap();
            assert_eq!(-search(&child).value, expected, "position {seq:?}");
        }
    }

    #[test]
    fn does_not_touch_input_board() {
        let board = play(&O_THREATENS);
        let _ = search(&board);
        assert_eq!(board, play(&O_THREATENS));
    }

    #[test]
    fn never_loses_to_random_when_first() {
        let start = play(&O_THREATENS);
        assert_eq!(start.side_to_move(), Player::X);

        for seed in 0..30 {
            let mut negamax = NegamaxAgent::new();
            let mut random = RandomAgent::with_seed(seed);
            let mut board = start.clone();

            while !board.is_terminal() {
                let action = if board.side_to_move() == Player::X {
                    negamax.select_action(&board)
                } else {
                    random.select_action(&board)
                };
                board.apply_move(action.unwrap()).unwrap();
            }

            assert_ne!(
                board.outcome(),
                Some(GameOutcome::Winner(Player::O)),
                "negamax lost with seed {seed}"
            );
        }
    }

    #[test]
    fn name_is_negamax() {
        let agent = NegamaxAgent::new();
        assert_eq!(agent.name(), "Negamax");
    }
}
