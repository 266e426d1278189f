use crate::game::Board;

/// Strategy that picks the computer's column.
pub trait Mover {
    /// Select a column given the current board.
    /// Only called while at least one column is legal. Must return a legal
    /// column; the engine replaces anything else with the lowest legal one.
    fn choose_column(&mut self, board: &Board) -> usize;

    /// Return the strategy's display name.
    fn name(&self) -> &str;
}
