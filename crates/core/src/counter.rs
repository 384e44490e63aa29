//! Animated statistic counters.
//!
//! A stat such as `120+` counts up from zero in fixed ticks. Each tick adds
//! `target / (duration / tick)` and renders the floored value followed by
//! the suffix. The final frame always renders the exact target, so float
//! accumulation never shows a value past it.

use crate::config::StatsConfig;

/// Parses the animation target out of a stat's text.
///
/// Only text containing `suffix` is animatable. The target is the leading
/// integer: optional whitespace, an optional sign, then decimal digits.
/// `"1,200+"` therefore targets `1`. Digit runs too large for `i64`
/// saturate.
pub fn parse_stat_target(text: &str, suffix: &str) -> Option<i64> {
    if suffix.is_empty() || !text.contains(suffix) {
        return None;
    }
    parse_leading_int(text)
}

fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    // Every byte is a digit here, so parsing only fails on overflow.
    let value: i64 = rest[..digits_len].parse().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// One rendered counter frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    /// Set on the frame that renders the exact target; the timer driving
    /// the animation should be cancelled afterwards.
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    current: f64,
    suffix: String,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, config: &StatsConfig) -> Self {
        let steps = f64::from(config.duration_ms) / f64::from(config.tick_ms);
        Self {
            target,
            increment: target as f64 / steps,
            current: 0.0,
            suffix: config.suffix.clone(),
            finished: false,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances one tick and returns the text to display.
    ///
    /// Ticking a finished animation keeps returning the final frame.
    pub fn tick(&mut self) -> CounterFrame {
        if !self.finished {
            self.current += self.increment;
            if self.current >= self.target as f64 {
                self.finished = true;
            }
        }

        if self.finished {
            CounterFrame {
                text: format!("{}{}", self.target, self.suffix),
                finished: true,
            }
        } else {
            CounterFrame {
                text: format!("{}{}", self.current.floor() as i64, self.suffix),
                finished: false,
            }
        }
    }
}

impl Iterator for CounterAnimation {
    type Item = CounterFrame;

    /// Yields frames up to and including the final one.
    fn next(&mut self) -> Option<CounterFrame> {
        if self.finished {
            return None;
        }
        Some(self.tick())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_requires_suffix() {
        assert_eq!(parse_stat_target("120+", "+"), Some(120));
        assert_eq!(parse_stat_target("120", "+"), None);
        assert_eq!(parse_stat_target("24/7", "+"), None);
    }

    #[test]
    fn test_parse_leading_integer_rules() {
        assert_eq!(parse_stat_target("  15+ years", "+"), Some(15));
        assert_eq!(parse_stat_target("1,200+", "+"), Some(1));
        assert_eq!(parse_stat_target("-5+", "+"), Some(-5));
        assert_eq!(parse_stat_target("+", "+"), None);
        assert_eq!(parse_stat_target("many+", "+"), None);
    }

    #[test]
    fn test_oversized_target_saturates() {
        let target = parse_stat_target("99999999999999999999+", "+");
        assert_eq!(target, Some(i64::MAX));
        assert_eq!(parse_stat_target("-99999999999999999999+", "+"), Some(-i64::MAX));

        let last = CounterAnimation::new(i64::MAX, &StatsConfig::default())
            .last()
            .map(|frame| frame.text);
        assert_eq!(last, Some(format!("{}+", i64::MAX)));
    }

    #[test]
    fn test_first_frames() {
        let mut anim = CounterAnimation::new(120, &StatsConfig::default());
        // 120 / (1500 / 16) = 1.28 per tick
        assert_eq!(anim.tick().text, "1+");
        assert_eq!(anim.tick().text, "2+");
        assert_eq!(anim.tick().text, "3+");
        assert_eq!(anim.tick().text, "5+");
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let mut anim = CounterAnimation::new(0, &StatsConfig::default());
        let frame = anim.tick();
        assert_eq!(frame.text, "0+");
        assert!(frame.finished);
    }

    #[test]
    fn test_negative_target_finishes_on_first_tick() {
        let mut anim = CounterAnimation::new(-5, &StatsConfig::default());
        let frame = anim.tick();
        assert_eq!(frame.text, "-5+");
        assert!(frame.finished);
    }

    #[test]
    fn test_finished_animation_is_stable() {
        let mut anim = CounterAnimation::new(3, &StatsConfig::default());
        let frames: Vec<_> = anim.by_ref().collect();
        assert_eq!(frames.last().map(|f| f.text.as_str()), Some("3+"));
        assert!(anim.is_finished());
        assert_eq!(anim.tick().text, "3+");
        assert_eq!(anim.next(), None);
    }
}
