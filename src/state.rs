// Solotto Lottery Program - State
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

/// A single recorded entry: who entered and how many lamports they staked.
///
/// Repeat entries by the same player are kept as distinct records, so entering
/// twice doubles that player's share of the index space.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct Entrant {
    /// The player's account
    pub player: Pubkey,
    /// Staked amount in lamports
    pub amount: u64,
}

/// Result of the most recent draw, kept so clients can read it back without
/// scraping transaction logs.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct WinnerRecord {
    /// Position of the winner in the pre-reset entrant order
    pub index: u64,
    /// The winning player's account
    pub winner: Pubkey,
    /// Prize paid out, in lamports
    pub prize: u64,
}

/// Lottery account data
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct Lottery {
    /// Is the account initialized
    pub is_initialized: bool,
    /// The only account allowed to pick a winner, fixed at initialization
    pub owner: Pubkey,
    /// Sum of all recorded stakes in lamports
    pub total_pool: u64,
    /// Entries for the current round, in insertion order
    pub entrants: Vec<Entrant>,
    /// Result of the last completed draw, overwritten by the next one
    pub last_winner: Option<WinnerRecord>,
}

impl Lottery {
    /// Fixed serialized size of everything except the entrant list:
    /// is_initialized + owner + total_pool + vec length prefix + last_winner
    /// at its widest (Some).
    pub const BASE_LEN: usize = 1 + 32 + 8 + 4 + 1 + (8 + 32 + 8);

    /// Serialized size of one entrant record
    pub const ENTRANT_LEN: usize = 32 + 8;

    /// Account space needed to hold up to `max_entrants` entries.
    pub fn space_for(max_entrants: usize) -> usize {
        Self::BASE_LEN + max_entrants * Self::ENTRANT_LEN
    }

    /// New empty lottery owned by `owner`.
    pub fn new(owner: Pubkey) -> Self {
        Lottery {
            is_initialized: true,
            owner,
            total_pool: 0,
            entrants: Vec::new(),
            last_winner: None,
        }
    }

    /// Entrant identities in insertion order.
    pub fn players(&self) -> Vec<Pubkey> {
        self.entrants.iter().map(|e| e.player).collect()
    }

    /// Deserialize from account data. The account is allocated at a fixed
    /// capacity, so the buffer may carry a zero tail past the live state.
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        let mut slice = data;
        Lottery::deserialize(&mut slice).map_err(|_| ProgramError::InvalidAccountData)
    }

    /// Serialize into account data, leaving any tail bytes untouched.
    pub fn pack(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        let bytes = self
            .try_to_vec()
            .map_err(|_| ProgramError::InvalidAccountData)?;
        if bytes.len() > dst.len() {
            return Err(ProgramError::AccountDataTooSmall);
        }
        dst[..bytes.len()].copy_from_slice(&bytes);
        Ok(())
    }
}
