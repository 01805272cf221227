// ============================================================================
// INVARIANT TESTS
// ============================================================================
//
// Run with: cargo test --lib formal_verification
//
// Deterministic sweeps over the reward accumulator:
// 1. Conservation: paid + owed never exceeds what was funded
// 2. Stake round-trip: total_staked always equals the sum of balances
// 3. Monotonicity: reward_per_token and earned never go backwards
// ============================================================================
