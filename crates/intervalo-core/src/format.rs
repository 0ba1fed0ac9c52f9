/// Format whole seconds as `mm:ss`.
///
/// Minutes are zero-padded to two digits while below 100 and printed as-is
/// from there on, so long workouts read `120:00` rather than wrapping.
pub fn time_label(secs: u64) -> String {
    let min = secs / 60;
    let sec = secs % 60;
    format!("{:02}:{:02}", min, sec)
}

/// Format a picker value, optionally zero-padded to two digits.
pub fn value_label(value: i64, zero_padded: bool) -> String {
    if zero_padded {
        format!("{:02}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_label_cases() {
        let cases = [
            (0, "00:00"),
            (1, "00:01"),
            (59, "00:59"),
            (60, "01:00"),
            (61, "01:01"),
            (95, "01:35"),
            (681, "11:21"),
            (5999, "99:59"),
            (7200, "120:00"),
            (37180, "619:40"),
        ];
        for (secs, expected) in cases {
            assert_eq!(time_label(secs), expected, "time_label({secs})");
        }
    }

    #[test]
    fn value_label_padding() {
        assert_eq!(value_label(7, true), "07");
        assert_eq!(value_label(7, false), "7");
        assert_eq!(value_label(42, true), "42");
    }
}
