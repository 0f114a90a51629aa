//! Counter Animation
//!
//! Linear count-up from zero to a target in fixed frame steps.

/// Parse a `data-target` attribute; anything unparsable counts as zero
pub fn parse_target(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Stepper for one counter
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: f64, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = (f64::from(duration_ms) / f64::from(frame_ms.max(1))).max(1.0);
        Self {
            target,
            increment: target / frames,
            current: 0.0,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.target
    }

    /// Advance one frame and return the text to display
    pub fn tick(&mut self) -> String {
        self.current += self.increment;
        if self.current >= self.target {
            self.current = self.target;
        }
        format_count(self.current, self.target)
    }
}

/// Format a displayed value according to its target: one decimal for
/// fractional targets, floored integer otherwise, and thousands separators
/// on the integer part once the target reaches 1000.
pub fn format_count(value: f64, target: f64) -> String {
    let text = if target.fract() != 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.0}", value.floor())
    };
    if target.abs() < 1000.0 {
        return text;
    }
    match text.split_once('.') {
        Some((int, frac)) => format!("{}.{}", group_thousands(int), frac),
        None => group_thousands(&text),
    }
}

/// Insert a comma every three digits of an integer string
fn group_thousands(int: &str) -> String {
    let (sign, digits) = match int.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int),
    };
    let mut grouped = String::with_capacity(int.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(target: f64) -> (String, usize) {
        let mut anim = CounterAnimation::new(target, 2000, 16);
        let mut text = String::new();
        let mut frames = 0;
        while !anim.is_done() {
            text = anim.tick();
            frames += 1;
            assert!(frames < 1000, "animation never finished");
        }
        (text, frames)
    }

    #[test]
    fn test_final_text_with_separator() {
        let (text, frames) = run_to_end(1500.0);
        assert_eq!(text, "1,500");
        assert!((125..=126).contains(&frames));
    }

    #[test]
    fn test_final_text_fractional() {
        assert_eq!(run_to_end(4.5).0, "4.5");
    }

    #[test]
    fn test_small_integer() {
        assert_eq!(run_to_end(25.0).0, "25");
    }

    #[test]
    fn test_intermediate_values_are_floored() {
        let mut anim = CounterAnimation::new(1000.0, 2000, 16);
        assert_eq!(anim.tick(), "8");
        assert_eq!(anim.current(), 8.0);
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let anim = CounterAnimation::new(0.0, 2000, 16);
        assert!(anim.is_done());
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target(Some("1500")), 1500.0);
        assert_eq!(parse_target(Some(" 4.5 ")), 4.5);
        assert_eq!(parse_target(Some("lots")), 0.0);
        assert_eq!(parse_target(Some("NaN")), 0.0);
        assert_eq!(parse_target(None), 0.0);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("-12000"), "-12,000");
    }

    #[test]
    fn test_fractional_target_above_thousand_is_grouped() {
        assert_eq!(run_to_end(2500.5).0, "2,500.5");
        assert_eq!(format_count(1234.3, 2500.5), "1,234.3");
    }

    #[test]
    fn test_huge_target_keeps_every_digit() {
        assert_eq!(format_count(1e19, 1e19), "10,000,000,000,000,000,000");
        assert_eq!(format_count(0.0, 1e19), "0");
    }
}
