//! Quality ladders for the lossy encoders.
//!
//! Neither codec's output size is strictly monotone in its quality knob:
//! entropy coding can make a slightly coarser image a few bytes larger. So
//! a requested quality selects the lowest rung at or above it, every rung
//! from there upward is encoded, and the smallest output wins. The candidate
//! set only shrinks as quality rises, so output size is non-decreasing in
//! quality and fidelity is never below the requested quality.

use crate::error::RetouchError;

/// Encode at every rung in `rungs` and keep the smallest output.
///
/// Ties keep the earliest (lowest) rung.
pub(crate) fn smallest_over<R: Copy>(
    format: &'static str,
    rungs: &[R],
    mut encode_at: impl FnMut(R) -> Result<Vec<u8>, RetouchError>,
) -> Result<Vec<u8>, RetouchError> {
    let mut best: Option<Vec<u8>> = None;
    for &rung in rungs {
        let candidate = encode_at(rung)?;
        let smaller = match &best {
            Some(current) => candidate.len() < current.len(),
            None => true,
        };
        if smaller {
            best = Some(candidate);
        }
    }

    best.ok_or(RetouchError::EncodingFailed {
        format,
        message: "no quality rung to encode".to_string(),
    })
}

/// Index of the lowest rung at or above `quality`, or the top rung.
pub(crate) fn rung_index(rungs: &[u8], quality: u8) -> usize {
    rungs
        .iter()
        .position(|&rung| rung >= quality)
        .unwrap_or(rungs.len().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNGS: [u8; 4] = [1, 40, 70, 100];

    /// Raw sizes with a dip at rung 70.
    fn fake_size(quality: u8) -> usize {
        match quality {
            1 => 50,
            40 => 120,
            70 => 110,
            _ => 200,
        }
    }

    fn size_at(quality: u8) -> usize {
        let start = rung_index(&RUNGS, quality);
        smallest_over("test", &RUNGS[start..], |q| Ok(vec![q; fake_size(q)]))
            .unwrap()
            .len()
    }

    #[test]
    fn test_rung_index() {
        assert_eq!(rung_index(&RUNGS, 0), 0);
        assert_eq!(rung_index(&RUNGS, 1), 0);
        assert_eq!(rung_index(&RUNGS, 2), 1);
        assert_eq!(rung_index(&RUNGS, 40), 1);
        assert_eq!(rung_index(&RUNGS, 41), 2);
        assert_eq!(rung_index(&RUNGS, 99), 3);
        assert_eq!(rung_index(&RUNGS, 100), 3);
        assert_eq!(rung_index(&RUNGS, 255), 3);
        assert_eq!(rung_index(&[], 50), 0);
    }

    #[test]
    fn test_dip_is_smoothed_out() {
        // Rung 40 would emit 120 bytes; rung 70 is smaller at 110, so use it
        assert_eq!(size_at(40), 110);
        assert_eq!(size_at(70), 110);

        let mut previous = 0;
        for q in 1..=100u8 {
            let size = size_at(q);
            assert!(size >= previous, "size dropped at quality {}", q);
            previous = size;
        }
    }

    #[test]
    fn test_tie_keeps_lowest_rung() {
        let bytes = smallest_over("test", &[10u8, 20, 30], |q| Ok(vec![q; 5])).unwrap();
        assert_eq!(bytes[0], 10);
    }

    #[test]
    fn test_encoder_error_propagates() {
        let result = smallest_over("test", &[1u8, 2], |q| {
            if q == 2 {
                Err(RetouchError::EncodingFailed {
                    format: "test",
                    message: "boom".to_string(),
                })
            } else {
                Ok(vec![0; 3])
            }
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_ladder_is_an_error() {
        let result = smallest_over::<u8>("test", &[], |_| Ok(Vec::new()));
        assert!(matches!(result, Err(RetouchError::EncodingFailed { .. })));
    }
}
