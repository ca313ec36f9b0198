// Solotto Lottery Program - Utility Functions

/// Map an entropy seed onto an entrant index.
///
/// Callers must reject an empty pool before drawing; the zero guard here only
/// keeps the mapping total.
pub fn winner_index(seed: u64, entrant_count: u64) -> u64 {
    if entrant_count == 0 {
        return 0;
    }
    seed % entrant_count
}

/// Convert lamports to SOL (for display purposes)
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / 1_000_000_000.0
}

/// Convert SOL to lamports
pub fn sol_to_lamports(sol: f64) -> u64 {
    (sol * 1_000_000_000.0) as u64
}
