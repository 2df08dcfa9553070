//! Compact rendering of number lists for user-facing messages.

/// Formats numbers as sorted, de-duplicated ranges: `[1, 2, 3, 5, 7, 8, 9]` → `"1-3, 5, 7-9"`.
pub fn format_number_ranges(numbers: &[u32]) -> String {
    let mut sorted = numbers.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut parts = Vec::new();
    let mut iter = sorted.into_iter().peekable();
    while let Some(start) = iter.next() {
        let mut end = start;
        while let Some(&next) = iter.peek() {
            if next == end + 1 {
                end = next;
                iter.next();
            } else {
                break;
            }
        }
        if start == end {
            parts.push(start.to_string());
        } else {
            parts.push(format!("{}-{}", start, end));
        }
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_ranges() {
        assert_eq!(format_number_ranges(&[]), "");
        assert_eq!(format_number_ranges(&[4]), "4");
        assert_eq!(format_number_ranges(&(1..=50).collect::<Vec<_>>()), "1-50");
        assert_eq!(format_number_ranges(&[9, 1, 2, 3, 5, 7, 8, 2]), "1-3, 5, 7-9");
        assert_eq!(format_number_ranges(&[1, 3]), "1, 3");
    }
}
