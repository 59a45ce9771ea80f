use crate::domain::dice::DICE_COUNT;
use crate::domain::{Category, DieIndex, HoldPolicy, ScoreCard};
use crate::engine::errors::EngineError;
use crate::engine::game_loop::RoundState;

/// Можно ли бросать в текущем состоянии раунда.
pub fn validate_roll(state: RoundState, rolls_remaining: u8) -> Result<(), EngineError> {
    match state {
        RoundState::GameOver => Err(EngineError::GameOver),
        RoundState::MustClaim => Err(EngineError::NoRollsRemaining),
        RoundState::AwaitingRoll | RoundState::InPlay => {
            if rolls_remaining == 0 {
                Err(EngineError::NoRollsRemaining)
            } else {
                Ok(())
            }
        }
    }
}

/// Можно ли переключить удержание кости `index`.
pub fn validate_hold(
    state: RoundState,
    index: DieIndex,
    policy: HoldPolicy,
) -> Result<(), EngineError> {
    match state {
        RoundState::GameOver => return Err(EngineError::GameOver),
        RoundState::AwaitingRoll => return Err(EngineError::NoRollYet),
        RoundState::InPlay | RoundState::MustClaim => {}
    }

    if index >= DICE_COUNT {
        return Err(EngineError::IndexOutOfRange(index));
    }

    if state == RoundState::MustClaim && policy == HoldPolicy::FrozenAfterLastRoll {
        return Err(EngineError::HoldsFrozen);
    }

    Ok(())
}

/// Можно ли записать руку в категорию.
pub fn validate_claim(
    state: RoundState,
    card: &ScoreCard,
    category: Category,
) -> Result<(), EngineError> {
    match state {
        RoundState::GameOver => Err(EngineError::GameOver),
        RoundState::AwaitingRoll => Err(EngineError::NoRollYet),
        RoundState::InPlay | RoundState::MustClaim => {
            if card.is_claimed(category) {
                Err(EngineError::CategoryAlreadyClaimed(category))
            } else {
                Ok(())
            }
        }
    }
}
