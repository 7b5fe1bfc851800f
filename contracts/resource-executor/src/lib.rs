#![no_std]
#![allow(deprecated)]
mod executor;

pub use executor::{ExecutorContract, ExecutorContractClient, ExecutorError, PAYLOAD_HOOK};
