//! Reward wheel command

use anyhow::Result;
use purrse_core::{spin, Reward};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::Context;

/// Spin once, seeded when `seed` is given
pub fn spin_once(seed: Option<u64>) -> Reward {
    match seed {
        Some(seed) => spin(&mut StdRng::seed_from_u64(seed)),
        None => spin(&mut rand::thread_rng()),
    }
}

pub fn cmd_spin(ctx: &Context, seed: Option<u64>) -> Result<()> {
    let reward = spin_once(seed);

    if ctx.json {
        return ctx.print_json(&reward);
    }

    println!();
    println!("🎡 The wheel stops on {}!", reward.rarity.as_str().to_uppercase());
    println!(
        "   You won: {} (#{}, {})",
        reward.furniture.name, reward.furniture.id, reward.furniture.sprite
    );
    Ok(())
}
