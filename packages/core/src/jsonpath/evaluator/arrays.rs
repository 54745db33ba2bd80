//! Index normalization and slice expansion

/// Resolve a possibly negative index against an array of `len` elements
pub(super) fn normalize_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let resolved = if index < 0 { len + index } else { index };
    if (0..len).contains(&resolved) {
        usize::try_from(resolved).ok()
    } else {
        None
    }
}

/// Indices selected by `[start:end:step]`, in selection order
///
/// Bounds are clamped to the array, so out of range values never fail.
pub(super) fn slice_indices(
    start: Option<i64>,
    end: Option<i64>,
    step: Option<i64>,
    len: usize,
) -> Vec<usize> {
    let Ok(len) = i64::try_from(len) else {
        return Vec::new();
    };
    let step = step.unwrap_or(1);
    if step == 0 || len == 0 {
        return Vec::new();
    }

    let normalize = |i: i64| if i < 0 { len + i } else { i };
    let mut indices = Vec::new();

    if step > 0 {
        let lower = normalize(start.unwrap_or(0)).clamp(0, len);
        let upper = normalize(end.unwrap_or(len)).clamp(0, len);
        let mut i = lower;
        while i < upper {
            indices.extend(usize::try_from(i).ok());
            let Some(next) = i.checked_add(step) else {
                break;
            };
            i = next;
        }
    } else {
        let upper = start.map_or(len - 1, normalize).clamp(-1, len - 1);
        let lower = end.map_or(-1, normalize).clamp(-1, len - 1);
        let mut i = upper;
        while lower < i {
            indices.extend(usize::try_from(i).ok());
            let Some(next) = i.checked_add(step) else {
                break;
            };
            i = next;
        }
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_indices_count_from_the_end() {
        assert_eq!(normalize_index(-1, 3), Some(2));
        assert_eq!(normalize_index(-4, 3), None);
        assert_eq!(normalize_index(3, 3), None);
    }

    #[test]
    fn forward_slices() {
        assert_eq!(slice_indices(None, Some(2), None, 5), vec![0, 1]);
        assert_eq!(slice_indices(Some(-2), None, None, 5), vec![3, 4]);
        assert_eq!(slice_indices(Some(1), Some(100), Some(2), 5), vec![1, 3]);
        assert_eq!(slice_indices(Some(4), Some(1), None, 5), Vec::<usize>::new());
    }

    #[test]
    fn backward_slices() {
        assert_eq!(slice_indices(None, None, Some(-1), 3), vec![2, 1, 0]);
        assert_eq!(slice_indices(Some(3), Some(0), Some(-2), 5), vec![3, 1]);
    }

    #[test]
    fn extreme_steps_stop_without_overflow() {
        assert_eq!(slice_indices(Some(1), None, Some(i64::MAX), 3), vec![1]);
        assert_eq!(slice_indices(None, None, Some(i64::MIN), 3), vec![2]);
        assert_eq!(
            slice_indices(Some(i64::MIN), Some(i64::MAX), Some(i64::MAX), 3),
            vec![0]
        );
    }
}
