//! Dice-roll command parsing (`/roll 2d6+3`, `/r 1d20`)

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

/// Abuse guard: absurd requests are treated as non-commands, not errors
const MAX_DICE: u32 = 100;
const MAX_SIDES: u32 = 1000;

static ROLL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:/roll|/r)\s+(\d+)d(\d+)(?:\+(\d+))?").unwrap());

/// Outcome of a parsed and executed dice command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRoll {
    pub total: u64,
    pub details: String,
}

/// Parse a chat message as a dice command and roll it
///
/// Matches `/roll` or `/r` at the start of the message, case-insensitive;
/// trailing text after the dice expression is ignored. Returns `None` for
/// non-commands and for requests over the guard limits.
pub fn parse_roll(message: &str) -> Option<DiceRoll> {
    let caps = ROLL_RE.captures(message)?;
    let count: u32 = caps[1].parse().ok()?;
    let sides: u32 = caps[2].parse().ok()?;
    let bonus: u32 = match caps.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    if count > MAX_DICE || sides > MAX_SIDES {
        return None;
    }

    let mut rng = rand::thread_rng();
    let mut total = 0u64;
    let mut rolls = Vec::with_capacity(count as usize);
    for _ in 0..count {
        // gen_range is uniform over 1..=sides; a zero-sided die rolls 1
        let roll = if sides == 0 { 1 } else { rng.gen_range(1..=sides) };
        rolls.push(roll.to_string());
        total += u64::from(roll);
    }
    total += u64::from(bonus);

    let mut details = format!("[ {} ]", rolls.join(", "));
    if bonus > 0 {
        details.push_str(&format!(" + {}", bonus));
    }

    Some(DiceRoll { total, details })
}
