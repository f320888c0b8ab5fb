use super::action::Action;
use super::player::Player;
use crate::gameplay::Table;
use dialoguer::Select;

/// A person at the terminal, choosing through a select prompt.
#[derive(Debug, Default)]
pub struct Human;

impl Player for Human {
    fn decide(&mut self, table: &Table) -> anyhow::Result<Action> {
        let actions = Action::all();
        let labels = actions.iter().map(Action::label).collect::<Vec<_>>();
        let choice = Select::new()
            .with_prompt(format!("Your hand: {}", table.player()))
            .report(false)
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(actions[choice])
    }
}
