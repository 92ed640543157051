use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    InvalidConfiguration = 1,
    InvalidQuantity = 2,
    NotAuthorized = 3,
    OperationPaused = 4,
    OperationNotPaused = 5,
    InsufficientFunds = 6,
    InsufficientAllowance = 7,
    MathError = 8,
}

pub type BasketResult<T> = Result<T, ErrorCode>;
