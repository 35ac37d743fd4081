//! FILENAME: engine/src/coord.rs
//! PURPOSE: Converts overworld coordinates to Nether coordinates.
//! CONTEXT: The Nether is a parallel dimension scaled 1:8 against the
//! overworld on the horizontal axes. The transform is pure and fails soft:
//! if either input coordinate is absent, the result is absent, never a pair
//! computed from a substituted zero.

use serde::{Deserialize, Serialize};

/// Horizontal scale ratio between the overworld and the Nether.
pub const NETHER_SCALE: f64 = 8.0;

/// A horizontal position in the Nether, in whole blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetherCoord {
    pub x: i64,
    pub z: i64,
}

/// Maps overworld (x, z) to the corresponding Nether position.
///
/// Each coordinate is divided by the scale ratio and rounded to the nearest
/// block, halves toward positive infinity.
pub fn to_nether(x: Option<f64>, z: Option<f64>) -> Option<NetherCoord> {
    let (x, z) = (x?, z?);
    Some(NetherCoord {
        x: round_half_up(x / NETHER_SCALE),
        z: round_half_up(z / NETHER_SCALE),
    })
}

/// Rounds to the nearest integer with halves toward positive infinity:
/// 2.5 -> 3, -2.5 -> -2.
fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.4), 2);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.6), 3);
        assert_eq!(round_half_up(-2.4), -2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(round_half_up(0.0), 0);
    }

    #[test]
    fn test_to_nether() {
        assert_eq!(
            to_nether(Some(100.0), Some(-200.0)),
            Some(NetherCoord { x: 13, z: -25 })
        );
        assert_eq!(
            to_nether(Some(0.0), Some(0.0)),
            Some(NetherCoord { x: 0, z: 0 })
        );
    }

    #[test]
    fn test_halves_round_up_in_both_signs() {
        // 20 / 8 = 2.5 and -20 / 8 = -2.5 are the exact half cases.
        assert_eq!(
            to_nether(Some(20.0), Some(-20.0)),
            Some(NetherCoord { x: 3, z: -2 })
        );
    }

    #[test]
    fn test_absent_input_yields_absent_output() {
        assert_eq!(to_nether(None, Some(5.0)), None);
        assert_eq!(to_nether(Some(5.0), None), None);
        assert_eq!(to_nether(None, None), None);
    }
}
