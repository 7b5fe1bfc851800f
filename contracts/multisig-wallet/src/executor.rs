//! # Resource Executor boundary
//!
//! The wallet never moves funds or calls targets itself. It hands the
//! confirmed `(target, amount, payload)` triple to a [`ResourceExecutor`] and
//! only learns whether the dispatch succeeded.
//!
//! [`ContractExecutor`] is the on-chain implementation: it forwards the call
//! to the executor contract configured at initialization. Whatever goes wrong
//! on the other side (an error code, a panic, a host error, a `false` result)
//! comes back as `false`, never as a failure of the wallet invocation.

use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    log, vec, Address, Bytes, Env, Error, IntoVal, Symbol,
};

/// Capability that performs the side-effecting part of a transaction.
pub trait ResourceExecutor {
    /// Dispatch `amount` and `payload` to `target`. Returns `true` on success.
    /// Implementations must report failure through the return value and
    /// must apply the transfer and the payload together or not at all.
    fn execute(&self, target: &Address, amount: i128, payload: &Bytes) -> bool;
}

/// Forwards dispatches to an executor contract.
pub struct ContractExecutor<'a> {
    env: &'a Env,
    executor: Address,
    asset: Address,
}

impl<'a> ContractExecutor<'a> {
    pub fn new(env: &'a Env, executor: Address, asset: Address) -> Self {
        Self {
            env,
            executor,
            asset,
        }
    }

    /// The executor contract moves the wallet's funds with
    /// `asset.transfer(wallet, target, amount)`. The wallet is not the direct
    /// invoker of that call, so it pre-authorizes exactly that transfer.
    fn authorize_transfer(&self, target: &Address, amount: i128) {
        let wallet = self.env.current_contract_address();
        self.env.authorize_as_current_contract(vec![
            self.env,
            InvokerContractAuthEntry::Contract(SubContractInvocation {
                context: ContractContext {
                    contract: self.asset.clone(),
                    fn_name: Symbol::new(self.env, "transfer"),
                    args: (wallet, target.clone(), amount).into_val(self.env),
                },
                sub_invocations: vec![self.env],
            }),
        ]);
    }
}

impl ResourceExecutor for ContractExecutor<'_> {
    fn execute(&self, target: &Address, amount: i128, payload: &Bytes) -> bool {
        if amount > 0 {
            self.authorize_transfer(target, amount);
        }

        let result = self.env.try_invoke_contract::<bool, Error>(
            &self.executor,
            &Symbol::new(self.env, "execute"),
            (target.clone(), amount, payload.clone()).into_val(self.env),
        );

        match result {
            Ok(Ok(success)) => success,
            Ok(Err(_)) => {
                log!(self.env, "executor returned a non-bool result");
                false
            }
            Err(_) => {
                log!(self.env, "executor call failed: {}", self.executor);
                false
            }
        }
    }
}
