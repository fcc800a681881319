//! Revenue ledger: pull-payment accounting for sale proceeds, auction
//! refunds and accrued marketplace fees.
//!
//! Balances are zeroed before the token transfer leaves the contract.

use market_utils::{SafeMath, Validation};
use soroban_sdk::{symbol_short, Address, Env};

use crate::errors::{fail, require_enabled, MarketError};
use crate::storage;

/// Credit pending revenue to a principal. Internal to the books.
pub(crate) fn credit(e: &Env, principal: &Address, amount: i128) {
    Validation::require_non_negative(amount);
    if amount == 0 {
        return;
    }
    let pending = storage::get_pending(e, principal);
    storage::set_pending(e, principal, SafeMath::add(pending, amount));
}

/// Accrue a settled sale fee to the marketplace.
pub(crate) fn accrue_sales_fee(e: &Env, fee: i128) {
    if fee == 0 {
        return;
    }
    let fees = storage::get_sales_fees(e);
    storage::set_sales_fees(e, SafeMath::add(fees, fee));
}

/// Withdraw the caller's full pending balance.
pub fn withdraw(e: &Env, principal: Address) -> Result<i128, MarketError> {
    require_enabled(e)?;
    principal.require_auth();

    let amount = storage::get_pending(e, &principal);
    if amount == 0 {
        return Err(fail(e, MarketError::NothingToWithdraw));
    }

    // EFFECTS: zero the balance before the transfer
    storage::set_pending(e, &principal, 0);

    // INTERACTIONS
    storage::payment(e).transfer(&e.current_contract_address(), &principal, &amount);

    e.events()
        .publish((symbol_short!("Withdraw"), principal), amount);

    Ok(amount)
}

/// Withdraw all accrued sales fees to the admin.
pub fn withdraw_sales_fees(e: &Env, caller: Address) -> Result<i128, MarketError> {
    require_enabled(e)?;
    caller.require_auth();

    let admin = storage::get_admin(e).ok_or(MarketError::NotInitialized)?;
    if caller != admin {
        return Err(fail(e, MarketError::Unauthorized));
    }

    let amount = storage::get_sales_fees(e);
    if amount == 0 {
        return Err(fail(e, MarketError::NoSalesFees));
    }

    storage::set_sales_fees(e, 0);
    storage::payment(e).transfer(&e.current_contract_address(), &caller, &amount);

    e.events().publish((symbol_short!("FeesOut"), caller), amount);

    Ok(amount)
}

/// Pending revenue balance for a principal.
pub fn get_pending_revenue(e: &Env, principal: Address) -> i128 {
    storage::get_pending(e, &principal)
}

/// Accrued, unwithdrawn marketplace sales fees.
pub fn get_sales_fees(e: &Env) -> i128 {
    storage::get_sales_fees(e)
}
