// Solotto Lottery Program - Instructions
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program,
};

use crate::error::LotteryError;

#[derive(Clone, Debug, PartialEq)]
pub enum LotteryInstruction {
    /// Initialize a lottery and fix its owner
    ///
    /// Accounts expected:
    /// 0. `[signer, writable]` The owner of the lottery
    /// 1. `[writable]` The lottery account, pre-created with enough space
    ///    (see `Lottery::space_for`) and owned by this program
    /// 2. `[]` The system program
    InitializeLottery {},

    /// Enter the current round by staking lamports into the pool
    ///
    /// Accounts expected:
    /// 0. `[signer, writable]` The entering player (pays the stake)
    /// 1. `[writable]` The lottery account (receives the stake)
    /// 2. `[]` The system program
    Enter {
        /// Stake in lamports, must be at least the minimum stake
        amount: u64,
    },

    /// Pick a winner, pay out the whole pool, and reset the round
    ///
    /// Accounts expected:
    /// 0. `[signer]` The lottery owner
    /// 1. `[writable]` The lottery account
    /// 2. `[writable]` The winner, must match the entrant drawn by the seed
    PickWinner {
        /// Externally supplied entropy; the winner index is `seed % entrants`
        seed: u64,
    },
}

impl LotteryInstruction {
    /// Unpacks a byte buffer into a LotteryInstruction
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (tag, rest) = input
            .split_first()
            .ok_or(LotteryError::InvalidInstructionData)?;

        Ok(match tag {
            0 => Self::InitializeLottery {},
            1 => {
                let (amount, _) = Self::unpack_u64(rest)?;
                Self::Enter { amount }
            }
            2 => {
                let (seed, _) = Self::unpack_u64(rest)?;
                Self::PickWinner { seed }
            }
            _ => return Err(LotteryError::InvalidInstructionData.into()),
        })
    }

    /// Packs a LotteryInstruction into a byte buffer
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(9);
        match *self {
            Self::InitializeLottery {} => buf.push(0),
            Self::Enter { amount } => {
                buf.push(1);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            Self::PickWinner { seed } => {
                buf.push(2);
                buf.extend_from_slice(&seed.to_le_bytes());
            }
        }
        buf
    }

    fn unpack_u64(input: &[u8]) -> Result<(u64, &[u8]), ProgramError> {
        if input.len() < 8 {
            return Err(LotteryError::InvalidInstructionData.into());
        }
        let (bytes, rest) = input.split_at(8);
        let value = u64::from_le_bytes(
            bytes
                .try_into()
                .map_err(|_| LotteryError::InvalidInstructionData)?,
        );
        Ok((value, rest))
    }
}

/// Create initialize_lottery instruction
pub fn initialize_lottery(
    program_id: &Pubkey,
    owner: &Pubkey,
    lottery_account: &Pubkey,
) -> Result<Instruction, ProgramError> {
    let data = LotteryInstruction::InitializeLottery {}.pack();

    let accounts = vec![
        AccountMeta::new(*owner, true),
        AccountMeta::new(*lottery_account, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data,
    })
}

/// Create enter instruction
pub fn enter(
    program_id: &Pubkey,
    player: &Pubkey,
    lottery_account: &Pubkey,
    amount: u64,
) -> Result<Instruction, ProgramError> {
    let data = LotteryInstruction::Enter { amount }.pack();

    let accounts = vec![
        AccountMeta::new(*player, true),
        AccountMeta::new(*lottery_account, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data,
    })
}

/// Create pick_winner instruction
pub fn pick_winner(
    program_id: &Pubkey,
    owner: &Pubkey,
    lottery_account: &Pubkey,
    winner: &Pubkey,
    seed: u64,
) -> Result<Instruction, ProgramError> {
    let data = LotteryInstruction::PickWinner { seed }.pack();

    let accounts = vec![
        AccountMeta::new_readonly(*owner, true),
        AccountMeta::new(*lottery_account, false),
        AccountMeta::new(*winner, false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data,
    })
}
