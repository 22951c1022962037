//! When the dealer draws.
//!
//! The dealer normally stops at 17. If the player finished above 17, the
//! dealer keeps drawing until it matches or beats that total instead.

use super::hand::Hand;
use tracing::instrument;

/// The dealer's usual stopping value.
pub const DEALER_STANDS_ON: u32 = 17;

/// The total the dealer draws towards, given the player's final total.
pub fn dealer_target(player_value: u32) -> u32 {
    if player_value > DEALER_STANDS_ON {
        player_value
    } else {
        DEALER_STANDS_ON
    }
}

/// True while the dealer is below its target.
///
/// A busted dealer is above every reachable target, so it always stops.
#[instrument(skip_all, fields(dealer = dealer.value(), soft = dealer.is_soft(), player = player.value()))]
pub fn dealer_should_hit(dealer: &Hand, player: &Hand) -> bool {
    dealer.value() < dealer_target(player.value())
}
