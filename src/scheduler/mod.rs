//! Cron jobs for automated state upkeep.

pub mod auction_sweep;
