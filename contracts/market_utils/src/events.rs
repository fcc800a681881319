//! Event emission patterns and utilities

use soroban_sdk::{symbol_short, Address, Env, Symbol, Topics};

/// Event emission helper functions
pub struct Events;

impl Events {
    /// Emit a simple event with topic and data
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `topic` - The event topic (Symbol)
    /// * `data` - The event data (tuple)
    pub fn emit<T>(e: &Env, topic: Symbol, data: T)
    where
        T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        e.events().publish((topic,), data);
    }

    /// Emit an event with multiple topics
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `topics` - Tuple of topics (must implement Topics)
    /// * `data` - The event data (tuple)
    pub fn emit_with_topics<T, U>(e: &Env, topics: T, data: U)
    where
        T: Topics,
        U: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        e.events().publish(topics, data);
    }

    /// Emit a transfer event
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `from` - The sender address
    /// * `to` - The recipient address
    /// * `amount` - The transfer amount
    pub fn emit_transfer(e: &Env, from: &Address, to: &Address, amount: i128) {
        Self::emit_with_topics(
            e,
            (symbol_short!("Transfer"), from.clone(), to.clone()),
            (amount, e.ledger().timestamp()),
        );
    }
}
