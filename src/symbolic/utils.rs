//! Small numeric helpers shared by the evaluation and plotting layers.

/// Evenly spaced grid of `num` points over [start, end], endpoints included.
pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    if num == 0 {
        return Vec::new();
    }
    if num == 1 {
        return vec![start];
    }
    let step = (end - start) / (num - 1) as f64;
    (0..num).map(|i| start + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_endpoints() {
        let grid = linspace(-10.0, 10.0, 400);
        assert_eq!(grid.len(), 400);
        assert_relative_eq!(grid[0], -10.0);
        assert_relative_eq!(grid[399], 10.0);
    }

    #[test]
    fn test_linspace_spacing() {
        let grid = linspace(0.0, 1.0, 5);
        assert_relative_eq!(grid[1] - grid[0], 0.25);
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
    }
}
