// Solotto Lottery Program - Errors
use solana_program::{
    decode_error::DecodeError, msg, program_error::PrintProgramError,
    program_error::ProgramError,
};
use thiserror::Error;

/// Errors that may be returned by the Lottery program
#[derive(Error, Debug, Copy, Clone)]
pub enum LotteryError {
    /// Invalid instruction data passed
    #[error("Invalid instruction data")]
    InvalidInstructionData,

    /// Lottery account already holds an initialized lottery
    #[error("Lottery already initialized")]
    AlreadyInitialized,

    /// Lottery account has not been initialized
    #[error("Lottery not initialized")]
    NotInitialized,

    /// Entry stake is below the minimum
    #[error("Entry stake below the minimum")]
    StakeTooLow,

    /// Only the lottery owner can pick a winner
    #[error("Only the lottery owner can pick a winner")]
    NotOwner,

    /// No entrants recorded for this round
    #[error("No entrants in the pool")]
    EmptyPool,

    /// Winner account does not match the drawn entrant
    #[error("Winner account does not match the drawn entrant")]
    WinnerMismatch,

    /// Entrant list has outgrown the lottery account allocation
    #[error("Entrant list has reached the account capacity")]
    PoolFull,

    /// Lottery account lamports do not cover the full prize
    #[error("Lottery account does not hold the full prize")]
    PoolDrained,

    /// Arithmetic overflow while updating the pool
    #[error("Arithmetic overflow")]
    Overflow,
}

impl From<LotteryError> for ProgramError {
    fn from(e: LotteryError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl<T> DecodeError<T> for LotteryError {
    fn type_of() -> &'static str {
        "Lottery Error"
    }
}

impl PrintProgramError for LotteryError {
    fn print<E>(&self) {
        msg!(&self.to_string());
    }
}
