// Solotto Lottery Program - Instruction Processor
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::invoke,
    program_error::ProgramError,
    pubkey::Pubkey,
    system_instruction,
};

use crate::{
    error::LotteryError,
    instruction::LotteryInstruction,
    state::{Entrant, Lottery, WinnerRecord},
    utils,
};

/// Minimum stake per entry: 0.01 SOL in lamports
pub const MIN_STAKE_LAMPORTS: u64 = 10_000_000;

/// Program state handler.
pub struct Processor;

impl Processor {
    /// Process a Lottery instruction
    pub fn process(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        instruction_data: &[u8],
    ) -> ProgramResult {
        let instruction = LotteryInstruction::unpack(instruction_data)?;

        match instruction {
            LotteryInstruction::InitializeLottery {} => {
                msg!("Instruction: Initialize Lottery");
                Self::process_initialize_lottery(accounts, program_id)
            }
            LotteryInstruction::Enter { amount } => {
                msg!("Instruction: Enter");
                Self::process_enter(accounts, amount, program_id)
            }
            LotteryInstruction::PickWinner { seed } => {
                msg!("Instruction: Pick Winner");
                Self::process_pick_winner(accounts, seed, program_id)
            }
        }
    }

    /// Process the InitializeLottery instruction
    ///
    /// Fixes the owner and starts the first round with an empty pool. The
    /// lottery account must already exist with enough space and be owned by
    /// this program.
    fn process_initialize_lottery(
        accounts: &[AccountInfo],
        program_id: &Pubkey,
    ) -> ProgramResult {
        let account_info_iter = &mut accounts.iter();
        let owner_info = next_account_info(account_info_iter)?;
        let lottery_info = next_account_info(account_info_iter)?;
        let _system_program_info = next_account_info(account_info_iter)?;

        // The owner identity is taken from the signature, never from data
        if !owner_info.is_signer {
            msg!("Owner must sign the transaction");
            return Err(ProgramError::MissingRequiredSignature);
        }

        if lottery_info.owner != program_id {
            msg!("Lottery account must be owned by this program");
            return Err(ProgramError::IncorrectProgramId);
        }

        if lottery_info.data_len() < Lottery::space_for(0) {
            msg!(
                "Lottery account too small, need at least {} bytes",
                Lottery::space_for(0)
            );
            return Err(ProgramError::AccountDataTooSmall);
        }

        let lottery = Lottery::unpack(&lottery_info.data.borrow())?;
        if lottery.is_initialized {
            msg!("Lottery account is already initialized");
            return Err(LotteryError::AlreadyInitialized.into());
        }

        let lottery = Lottery::new(*owner_info.key);
        lottery.pack(&mut lottery_info.data.borrow_mut())?;

        msg!("Lottery initialized: Owner={}", owner_info.key);
        Ok(())
    }

    /// Process the Enter instruction
    ///
    /// The stake moves into the lottery account in the same instruction that
    /// records the entrant, so a failed transfer leaves no entry behind.
    fn process_enter(
        accounts: &[AccountInfo],
        amount: u64,
        program_id: &Pubkey,
    ) -> ProgramResult {
        let account_info_iter = &mut accounts.iter();
        let player_info = next_account_info(account_info_iter)?;
        let lottery_info = next_account_info(account_info_iter)?;
        let system_program_info = next_account_info(account_info_iter)?;

        if !player_info.is_signer {
            msg!("Player must sign the transaction");
            return Err(ProgramError::MissingRequiredSignature);
        }

        if lottery_info.owner != program_id {
            msg!("Lottery account must be owned by this program");
            return Err(ProgramError::IncorrectProgramId);
        }

        let mut lottery = Lottery::unpack(&lottery_info.data.borrow())?;
        if !lottery.is_initialized {
            msg!("Lottery account must be initialized");
            return Err(LotteryError::NotInitialized.into());
        }

        if amount < MIN_STAKE_LAMPORTS {
            msg!(
                "Stake of {} lamports is below the minimum of {}",
                amount,
                MIN_STAKE_LAMPORTS
            );
            return Err(LotteryError::StakeTooLow.into());
        }

        // Physical capacity of the account, not a rule of the lottery
        let needed = Lottery::space_for(
            lottery
                .entrants
                .len()
                .checked_add(1)
                .ok_or(LotteryError::Overflow)?,
        );
        if needed > lottery_info.data_len() {
            msg!("Entrant list has reached the account capacity");
            return Err(LotteryError::PoolFull.into());
        }

        let new_total = lottery
            .total_pool
            .checked_add(amount)
            .ok_or(LotteryError::Overflow)?;

        // Move the stake into the pool
        invoke(
            &system_instruction::transfer(player_info.key, lottery_info.key, amount),
            &[
                player_info.clone(),
                lottery_info.clone(),
                system_program_info.clone(),
            ],
        )?;

        lottery.entrants.push(Entrant {
            player: *player_info.key,
            amount,
        });
        lottery.total_pool = new_total;
        lottery.pack(&mut lottery_info.data.borrow_mut())?;

        msg!(
            "Entry recorded: Player={}, Stake={} SOL, Pool={} SOL, Entrants={}",
            player_info.key,
            utils::lamports_to_sol(amount),
            utils::lamports_to_sol(lottery.total_pool),
            lottery.entrants.len()
        );
        Ok(())
    }

    /// Process the PickWinner instruction
    ///
    /// Owner only. Maps the supplied seed onto the entrant list, pays the
    /// whole pool to the drawn entrant and resets the round. Payout, reset
    /// and the WinnerPicked record are one instruction, so the runtime
    /// reverts all of them together on any failure.
    fn process_pick_winner(
        accounts: &[AccountInfo],
        seed: u64,
        program_id: &Pubkey,
    ) -> ProgramResult {
        let account_info_iter = &mut accounts.iter();
        let owner_info = next_account_info(account_info_iter)?;
        let lottery_info = next_account_info(account_info_iter)?;
        let winner_info = next_account_info(account_info_iter)?;

        if !owner_info.is_signer {
            msg!("Owner must sign the transaction");
            return Err(ProgramError::MissingRequiredSignature);
        }

        if lottery_info.owner != program_id {
            msg!("Lottery account must be owned by this program");
            return Err(ProgramError::IncorrectProgramId);
        }

        let mut lottery = Lottery::unpack(&lottery_info.data.borrow())?;
        if !lottery.is_initialized {
            msg!("Lottery account must be initialized");
            return Err(LotteryError::NotInitialized.into());
        }

        if lottery.owner != *owner_info.key {
            msg!("Only the lottery owner can pick a winner");
            return Err(LotteryError::NotOwner.into());
        }

        if lottery.entrants.is_empty() {
            msg!("Cannot pick a winner from an empty pool");
            return Err(LotteryError::EmptyPool.into());
        }

        let index = utils::winner_index(seed, lottery.entrants.len() as u64);
        let drawn = &lottery.entrants[index as usize];

        // Accounts are named up front on Solana, so the caller derives the
        // winner from the seed and the program re-checks the derivation
        if drawn.player != *winner_info.key {
            msg!(
                "Drawn entrant {} does not match winner account {}",
                drawn.player,
                winner_info.key
            );
            return Err(LotteryError::WinnerMismatch.into());
        }

        let prize = lottery.total_pool;

        // The rent-exempt reserve stays behind; only staked lamports move
        let remaining = lottery_info
            .lamports()
            .checked_sub(prize)
            .ok_or(LotteryError::PoolDrained)?;
        **lottery_info.lamports.borrow_mut() = remaining;
        **winner_info.lamports.borrow_mut() = winner_info
            .lamports()
            .checked_add(prize)
            .ok_or(LotteryError::Overflow)?;

        lottery.last_winner = Some(WinnerRecord {
            index,
            winner: *winner_info.key,
            prize,
        });
        lottery.entrants.clear();
        lottery.total_pool = 0;
        lottery.pack(&mut lottery_info.data.borrow_mut())?;

        msg!(
            "WinnerPicked: Index={}, Winner={}, Prize={} SOL",
            index,
            winner_info.key,
            utils::lamports_to_sol(prize)
        );
        Ok(())
    }
}
