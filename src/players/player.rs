use super::action::Action;
use crate::gameplay::Table;

/// The side of the table that answers the round with a call or a fold.
///
/// Implementations only ever see the [`Table`], which keeps the
/// opponent's cards face down until the round resolves.
pub trait Player {
    fn decide(&mut self, table: &Table) -> anyhow::Result<Action>;
}
