/// Turns a line of user input into a slot index 0-8. The prompt speaks in
/// squares 1-9, so the parsed number is shifted down by one.
pub fn parse_square(line: &str) -> Result<usize, String> {
    let trimmed = line.trim();

    let square: usize = trimmed
        .parse()
        .map_err(|_| format!("'{}' is not a number between 1 and 9", trimmed))?;

    if !(1..=9).contains(&square) {
        return Err(format!("{} is out of range, enter 1-9", square));
    }

    Ok(square - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_squares_map_to_slots() {
        assert_eq!(parse_square("1"), Ok(0));
        assert_eq!(parse_square("5"), Ok(4));
        assert_eq!(parse_square("9"), Ok(8));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse_square("  3\n"), Ok(2));
    }

    #[test]
    fn test_out_of_range_squares_are_rejected() {
        assert!(parse_square("0").is_err());
        assert!(parse_square("10").is_err());
    }

    #[test]
    fn test_non_numbers_are_rejected() {
        assert!(parse_square("").is_err());
        assert!(parse_square("center").is_err());
        assert!(parse_square("-1").is_err());
    }
}
