use super::super::domain::{Friend, Trait};
use super::super::scoring::ScoringEngine;
use super::views::EnergyBalance;

pub fn energy_balance(friends: &[&Friend], traits: &[Trait], engine: &ScoringEngine) -> EnergyBalance {
    friends
        .iter()
        .map(|friend| engine.evaluate(friend, traits).category)
        .fold(EnergyBalance::default(), |mut balance, category| {
            if category.is_draining() {
                balance.draining += 1;
            } else if category.is_charging() {
                balance.charging += 1;
            } else {
                balance.neutral += 1;
            }
            balance.total += 1;
            balance
        })
}
