pub mod browse;
pub mod check;
pub mod config;
pub mod context;
pub mod day;
pub mod days;
pub mod guidance;
pub mod map;

pub use context::HandlerContext;

use anyhow::{Result, bail};

/// Turn a 1-based day number from the command line into an index.
pub(crate) fn day_index(number: usize, day_count: usize) -> Result<usize> {
    if number == 0 || number > day_count {
        bail!("Day {} is out of range (1-{})", number, day_count);
    }
    Ok(number - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_index_bounds() {
        assert_eq!(day_index(1, 12).unwrap(), 0);
        assert_eq!(day_index(12, 12).unwrap(), 11);
        assert_eq!(
            day_index(13, 12).unwrap_err().to_string(),
            "Day 13 is out of range (1-12)"
        );
        assert!(day_index(0, 12).is_err());
    }
}
