//! Bounded random-move driver.

use flatcube_core::{CubeState, InvalidLayerError, Layers};
use flatcube_draw::{Net, NetLayout};
use log::warn;
use rand::Rng;

/// Hard cap on scramble macro-steps; longer requests are clamped.
pub const MAX_SCRAMBLE_STEPS: u32 = 10;

/// One logged snapshot: which call produced it, plus the net afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleEntry {
    /// `"<iteration>_<direction>: <index>"`, e.g. `"0_left: 2"` or
    /// `"3_up: all"`.
    pub descriptor: String,
    /// The unfolded cube right after the call.
    pub net: Net,
}

type TurnFn = fn(&mut CubeState, Layers) -> Result<(), InvalidLayerError>;

const TURNS: [(&str, TurnFn); 4] = [
    ("left", CubeState::rotate_left),
    ("right", CubeState::rotate_right),
    ("up", CubeState::rotate_up),
    ("down", CubeState::rotate_down),
];

/// Scrambles `cube` in place for up to [`MAX_SCRAMBLE_STEPS`] macro-steps
/// (longer requests are clamped, not rejected).
///
/// Each macro-step turns left, right, up, then down, each on an index
/// drawn uniformly from all-layers plus every single layer, and records a
/// snapshot after every call: `4 * steps` entries in call order. The RNG
/// is injected, so a seeded generator reproduces a scramble exactly.
pub fn scramble(
    cube: &mut CubeState,
    steps: u32,
    rng: &mut impl Rng,
) -> Result<Vec<ScrambleEntry>, InvalidLayerError> {
    let steps = if steps > MAX_SCRAMBLE_STEPS {
        warn!("clamping scramble from {steps} to {MAX_SCRAMBLE_STEPS} steps");
        MAX_SCRAMBLE_STEPS
    } else {
        steps
    };

    let layout = NetLayout::cross();
    let mut log = Vec::with_capacity(steps as usize * TURNS.len());
    for iteration in 0..steps {
        for (name, turn) in TURNS {
            let layers = random_layers(cube.size(), rng);
            turn(cube, layers)?;
            log.push(ScrambleEntry {
                descriptor: format!("{iteration}_{name}: {layers}"),
                net: Net::unfold(cube, &layout),
            });
        }
    }
    Ok(log)
}

/// Draws uniformly from all-layers plus each single layer.
fn random_layers(size: usize, rng: &mut impl Rng) -> Layers {
    match rng.random_range(0..=size) {
        0 => Layers::All,
        index => Layers::One(index),
    }
}

#[cfg(test)]
mod tests {
    use flatcube_core::{Face, Sticker};
    use flatcube_core::strum::IntoEnumIterator;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    use super::*;

    #[test]
    fn test_steps_are_clamped_to_ten() {
        let mut rng = ChaCha12Rng::seed_from_u64(7);
        let mut cube = CubeState::new(3);
        let log = scramble(&mut cube, 15, &mut rng).unwrap();
        assert_eq!(log.len(), 40);

        // A clamped run is exactly the 10-step run with the same seed.
        let mut rng = ChaCha12Rng::seed_from_u64(7);
        let mut cube10 = CubeState::new(3);
        let log10 = scramble(&mut cube10, 10, &mut rng).unwrap();
        assert_eq!(log, log10);
        assert_eq!(cube, cube10);
    }

    #[test]
    fn test_descriptors_follow_call_order() {
        let mut rng = ChaCha12Rng::seed_from_u64(0);
        let mut cube = CubeState::new(3);
        let log = scramble(&mut cube, 2, &mut rng).unwrap();
        assert_eq!(log.len(), 8);

        let prefixes: Vec<String> = log
            .iter()
            .map(|entry| {
                let (prefix, index) = entry.descriptor.split_once(": ").unwrap();
                assert!(
                    index == "all" || matches!(index.parse::<usize>(), Ok(1..=3)),
                    "bad index in {:?}",
                    entry.descriptor
                );
                prefix.to_string()
            })
            .collect();
        assert_eq!(
            prefixes,
            [
                "0_left", "0_right", "0_up", "0_down", "1_left", "1_right", "1_up", "1_down",
            ]
        );
    }

    #[test]
    fn test_same_seed_reproduces_scramble() {
        let run = |seed| {
            let mut rng = ChaCha12Rng::seed_from_u64(seed);
            let mut cube = CubeState::new(3);
            let log = scramble(&mut cube, 10, &mut rng).unwrap();
            (cube, log)
        };
        assert_eq!(run(123), run(123));
        assert_ne!(run(123).0, run(456).0);
    }

    #[test]
    fn test_scramble_conserves_stickers() {
        let mut rng = ChaCha12Rng::seed_from_u64(99);
        let mut cube = CubeState::new(3);
        scramble(&mut cube, 10, &mut rng).unwrap();
        for sticker in Sticker::iter() {
            let count: usize = Face::iter()
                .map(|face| cube.face(face).cells().filter(|&&s| s == sticker).count())
                .sum();
            assert_eq!(count, 9, "{sticker}");
        }
    }
}
