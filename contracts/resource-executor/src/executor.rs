use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, log, token, Address, Bytes, Env,
    IntoVal, Symbol,
};

// ── Error type ────────────────────────────────────────────────────────────────

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ExecutorError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidAmount = 3,
    PayloadRejected = 4,
}

// ── Storage types ─────────────────────────────────────────────────────────────

#[contracttype]
pub enum DataKey {
    Wallet,
    Asset,
}

/// Name of the hook a target must expose to receive a non-empty payload:
/// `on_payload(wallet: Address, amount: i128, payload: Bytes) -> bool`.
pub const PAYLOAD_HOOK: &str = "on_payload";

/// Performs the transfers and payload calls a multisig wallet has approved.
///
/// Bound to one wallet and one asset. Only the bound wallet can drive it, and
/// it only ever spends the wallet's balance of the asset. Any failure aborts
/// the whole `execute` call, so the transfer and the payload call are applied
/// together or not at all.
#[contract]
pub struct ExecutorContract;

#[contractimpl]
impl ExecutorContract {
    pub fn initialize(env: Env, wallet: Address, asset: Address) -> Result<(), ExecutorError> {
        if env.storage().instance().has(&DataKey::Wallet) {
            return Err(ExecutorError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Wallet, &wallet);
        env.storage().instance().set(&DataKey::Asset, &asset);
        log!(&env, "initialize wallet={} asset={}", wallet, asset);
        Ok(())
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    fn load(env: &Env, key: DataKey) -> Result<Address, ExecutorError> {
        env.storage()
            .instance()
            .get(&key)
            .ok_or(ExecutorError::NotInitialized)
    }

    // ── execute ───────────────────────────────────────────────────────────────

    /// Wallet: transfer `amount` of the asset to `target` and deliver
    /// `payload` to its `on_payload` hook when non-empty.
    pub fn execute(
        env: Env,
        target: Address,
        amount: i128,
        payload: Bytes,
    ) -> Result<bool, ExecutorError> {
        let wallet = Self::load(&env, DataKey::Wallet)?;
        wallet.require_auth();

        if amount < 0 {
            return Err(ExecutorError::InvalidAmount);
        }

        if amount > 0 {
            let asset = Self::load(&env, DataKey::Asset)?;
            token::Client::new(&env, &asset).transfer(&wallet, &target, &amount);
        }

        if !payload.is_empty() {
            let accepted: bool = env.invoke_contract(
                &target,
                &Symbol::new(&env, PAYLOAD_HOOK),
                (wallet.clone(), amount, payload.clone()).into_val(&env),
            );
            if !accepted {
                return Err(ExecutorError::PayloadRejected);
            }
        }

        log!(
            &env,
            "execute -> {} amount={} payload_len={}",
            target,
            amount,
            payload.len()
        );
        Ok(true)
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn get_wallet(env: Env) -> Result<Address, ExecutorError> {
        Self::load(&env, DataKey::Wallet)
    }

    pub fn get_asset(env: Env) -> Result<Address, ExecutorError> {
        Self::load(&env, DataKey::Asset)
    }
}
