//! Requests consumed by the core and the results it produces: genesis
//! installation and sequential batch execution.

mod execute;
mod genesis;

pub use execute::{execute_operation, ExecuteRequest, ExecuteResult, OperationOutcome};
pub use genesis::{GenesisRequest, GenesisResult};
