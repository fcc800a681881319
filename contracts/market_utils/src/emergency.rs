//! Panic switch (emergency stop) utilities
use super::events::Events;
use soroban_sdk::{symbol_short, Env};

pub mod keys {
    use soroban_sdk::{symbol_short, Symbol};
    pub const PANIC_SWITCH: Symbol = symbol_short!("PANIC_SW");
}

pub struct PanicSwitch;

impl PanicSwitch {
    /// Check if the panic switch is on
    pub fn is_on(e: &Env) -> bool {
        e.storage()
            .instance()
            .get::<_, bool>(&keys::PANIC_SWITCH)
            .unwrap_or(false)
    }

    /// Require that the panic switch is off
    pub fn require_off(e: &Env) {
        if Self::is_on(e) {
            panic!("Something went wrong");
        }
    }

    /// Set panic switch status
    pub fn set(e: &Env, enabled: bool) {
        e.storage().instance().set(&keys::PANIC_SWITCH, &enabled);

        let event_type = if enabled {
            symbol_short!("PANIC_ON")
        } else {
            symbol_short!("PANIC_OFF")
        };
        Events::emit(
            e,
            symbol_short!("PanicSw"),
            (event_type, e.ledger().timestamp()),
        );
    }
}
