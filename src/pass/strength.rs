//! Password strength scoring against a fixed five-rule rubric.

pub const MAX_SCORE: u8 = 5;

/// One strength predicate. Evaluated in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    MinLength,
    Digit,
    Uppercase,
    Lowercase,
    Special,
}

impl Rule {
    pub const ALL: [Rule; 5] = [
        Rule::MinLength,
        Rule::Digit,
        Rule::Uppercase,
        Rule::Lowercase,
        Rule::Special,
    ];

    pub const MIN_LENGTH: usize = 8;

    pub fn is_satisfied(self, password: &str) -> bool {
        match self {
            Rule::MinLength => password.chars().count() >= Self::MIN_LENGTH,
            Rule::Digit => password.chars().any(char::is_numeric),
            Rule::Uppercase => password.chars().any(char::is_uppercase),
            Rule::Lowercase => password.chars().any(char::is_lowercase),
            // anything that is neither a letter nor a number, whitespace included
            Rule::Special => password.chars().any(|c| !c.is_alphanumeric()),
        }
    }

    pub fn tip(self) -> &'static str {
        match self {
            Rule::MinLength => "Try adding more characters to make it longer.",
            Rule::Digit => "Add numbers like 1, 2, 3, etc.",
            Rule::Uppercase => "Use capital letters like A, B, C, etc.",
            Rule::Lowercase => "Use small letters like a, b, c, etc.",
            Rule::Special => "Add symbols like @, #, $, etc.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Weak,
    Improvable,
    VeryStrong,
}

impl Verdict {
    pub fn from_score(score: u8) -> Self {
        match score {
            5.. => Verdict::VeryStrong,
            3..=4 => Verdict::Improvable,
            _ => Verdict::Weak,
        }
    }

    /// Short heading shown above the meter.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Weak => "Weak Password",
            Verdict::Improvable => "Medium Password",
            Verdict::VeryStrong => "Strong Password",
        }
    }

    /// The one-line remark that replaces the per-rule remarks.
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Weak => "Your password is weak. Please consider a stronger password.",
            Verdict::Improvable => "Your password is strong, but can be improved.",
            Verdict::VeryStrong => "Your password is very strong!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: u8,
    pub verdict: Verdict,
    pub remarks: Vec<String>,
    pub tips: Vec<String>,
}

impl StrengthReport {
    /// Score as a fraction of the maximum, for the strength meter.
    pub fn fraction(&self) -> f32 {
        self.score as f32 / MAX_SCORE as f32
    }
}

/// Score `password`. Pure; every input, including the empty string, yields a report.
pub fn evaluate(password: &str) -> StrengthReport {
    let mut score = 0;
    let mut failed = Vec::new();

    for rule in Rule::ALL {
        if rule.is_satisfied(password) {
            score += 1;
        } else {
            failed.push(rule);
        }
    }

    let verdict = Verdict::from_score(score);

    // Per-rule remarks collapse into the verdict line; tips stay itemized.
    let remarks = vec![verdict.message().to_string()];
    let tips = match verdict {
        Verdict::VeryStrong => Vec::new(),
        _ => failed.iter().map(|r| r.tip().to_string()).collect(),
    };

    StrengthReport {
        score,
        verdict,
        remarks,
        tips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_fails_everything() {
        let report = evaluate("");
        assert_eq!(report.score, 0);
        assert_eq!(report.verdict, Verdict::Weak);
        assert_eq!(report.tips.len(), 5);
        let all_tips: Vec<_> = Rule::ALL.iter().map(|r| r.tip()).collect();
        assert_eq!(report.tips, all_tips);
        assert_eq!(report.remarks, vec![Verdict::Weak.message()]);
    }

    #[test]
    fn all_rules_satisfied() {
        let report = evaluate("Abcdefg1!");
        assert_eq!(report.score, 5);
        assert_eq!(report.verdict, Verdict::VeryStrong);
        assert_eq!(report.remarks, vec!["Your password is very strong!"]);
        assert!(report.tips.is_empty());
        assert_eq!(report.fraction(), 1.0);
    }

    #[test]
    fn lowercase_only_is_weak_with_ordered_tips() {
        let report = evaluate("abcdefgh");
        assert_eq!(report.score, 2);
        assert_eq!(report.verdict, Verdict::Weak);
        assert_eq!(
            report.tips,
            vec![Rule::Digit.tip(), Rule::Uppercase.tip(), Rule::Special.tip()]
        );
    }

    #[test]
    fn missing_special_is_improvable() {
        let report = evaluate("Abcdefgh1");
        assert_eq!(report.score, 4);
        assert_eq!(report.verdict, Verdict::Improvable);
        assert_eq!(report.remarks, vec![Verdict::Improvable.message()]);
        assert_eq!(report.tips, vec![Rule::Special.tip()]);
    }

    #[test]
    fn three_rules_is_still_improvable() {
        let report = evaluate("abc1!");
        assert_eq!(report.score, 3);
        assert_eq!(report.verdict, Verdict::Improvable);
        assert_eq!(report.tips, vec![Rule::MinLength.tip(), Rule::Uppercase.tip()]);
    }

    #[test]
    fn whitespace_and_unicode_symbols_count_as_special() {
        assert!(Rule::Special.is_satisfied("abc def"));
        assert!(Rule::Special.is_satisfied("price€"));
        assert!(!Rule::Special.is_satisfied("Ünïcödé9"));
    }

    #[test]
    fn unicode_digits_count_as_numbers() {
        // ARABIC-INDIC DIGIT THREE
        assert!(Rule::Digit.is_satisfied("\u{0663}"));
        assert!(!Rule::Special.is_satisfied("\u{0663}"));

        let report = evaluate("Abcdefgh\u{0663}");
        assert_eq!(report.score, 4);
        assert_eq!(report.verdict, Verdict::Improvable);
        assert_eq!(report.tips, vec![Rule::Special.tip().to_string()]);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(!Rule::MinLength.is_satisfied("ééééééé"));
        assert!(Rule::MinLength.is_satisfied("éééééééé"));
    }

    #[test]
    fn evaluate_is_idempotent() {
        for input in ["", "abc", "Abcdefg1!", "  spaced out 42  "] {
            assert_eq!(evaluate(input), evaluate(input));
        }
    }

    #[test]
    fn verdict_thresholds() {
        let verdicts: Vec<_> = (0..=5).map(Verdict::from_score).collect();
        assert_eq!(
            verdicts,
            vec![
                Verdict::Weak,
                Verdict::Weak,
                Verdict::Weak,
                Verdict::Improvable,
                Verdict::Improvable,
                Verdict::VeryStrong,
            ]
        );
    }
}
