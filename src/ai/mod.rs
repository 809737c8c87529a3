mod heuristic;
mod parallel;
mod scorer;
mod search;
mod strategy;
mod threat;

pub use heuristic::{Heuristic, WindowHeuristic, CENTER_COLUMN};
pub use parallel::{choose_hard, choose_hard_at_depth, SEARCH_DEPTH};
pub use scorer::{base_score, score_move, score_move_with};
pub use search::{minimax, MOVE_ORDER, WIN_SCORE};
pub use strategy::{choose_easy, choose_medium, decide, decide_at_depth, hint, Difficulty};
pub use threat::{
    immediate_win_columns, line_extension, open_three_count, self_win_in_one, would_win,
};
