// Rule table — the data that drives the heuristic scorer.
//
// Weights are integer hundredths ("points") so that sums are exact:
// two keywords are exactly 0.30, which must not cross the strict 0.3
// spam threshold.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Points added for each distinct keyword phrase present.
pub const KEYWORD_POINTS: u32 = 15;

/// Phrases matched as substrings of the lowercased message.
pub const SPAM_KEYWORDS: [&str; 20] = [
    "free money",
    "click here",
    "urgent",
    "winner",
    "congratulations",
    "claim now",
    "limited time",
    "act now",
    "lottery",
    "prize",
    "inheritance",
    "bank account",
    "verify account",
    "suspended",
    "selected",
    "bitcoin",
    "risk free",
    "guaranteed",
    "million dollars",
    "wire transfer",
];

/// A regex detector in the static table: label, pattern source, points.
pub struct PatternSpec {
    pub label: &'static str,
    pub pattern: &'static str,
    pub points: u32,
}

/// Detectors run against the original (not lowercased) message.
pub const PATTERN_SPECS: [PatternSpec; 3] = [
    PatternSpec {
        label: "suspicious_link",
        pattern: r"https?://\S+|www\.\S+",
        points: 20,
    },
    PatternSpec {
        label: "email_address",
        pattern: r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}",
        points: 10,
    },
    PatternSpec {
        label: "phone_number",
        // Digit guards on both ends keep card numbers and order IDs out
        pattern: r"(?:^|\D)(\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}(?:$|\D)",
        points: 10,
    },
];

static BUILTIN: LazyLock<RuleSet> = LazyLock::new(|| {
    let keywords = SPAM_KEYWORDS
        .iter()
        .map(|phrase| Rule::keyword(phrase, KEYWORD_POINTS));
    let patterns = PATTERN_SPECS.iter().map(|spec| {
        // The table is fixed at compile time; a bad pattern is a programming error.
        let regex = Regex::new(spec.pattern).expect("built-in pattern must compile");
        Rule::pattern(spec.label, regex, spec.points)
    });
    RuleSet::new(keywords.chain(patterns).collect())
});

/// How a rule decides whether it fires.
#[derive(Debug, Clone)]
pub enum RuleKind {
    /// Lowercase substring match against the lowercased message.
    Keyword(String),
    /// Regex match against the original message.
    Pattern(Regex),
}

/// One entry of the rule table.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Reported in `detected_patterns` when the rule fires
    pub label: String,
    pub kind: RuleKind,
    /// Weight in hundredths (15 = 0.15)
    pub points: u32,
}

impl Rule {
    /// A keyword rule. The phrase doubles as the label.
    pub fn keyword(phrase: &str, points: u32) -> Self {
        let phrase = phrase.to_lowercase();
        Self {
            label: phrase.clone(),
            kind: RuleKind::Keyword(phrase),
            points,
        }
    }

    pub fn pattern(label: &str, regex: Regex, points: u32) -> Self {
        Self {
            label: label.to_string(),
            kind: RuleKind::Pattern(regex),
            points,
        }
    }

    /// Whether this rule fires. `lowered` must be `original.to_lowercase()`;
    /// the caller computes it once for the whole table.
    pub fn matches(&self, original: &str, lowered: &str) -> bool {
        match &self.kind {
            RuleKind::Keyword(phrase) => lowered.contains(phrase.as_str()),
            RuleKind::Pattern(regex) => regex.is_match(original),
        }
    }

    /// Weight as a score contribution (points / 100).
    pub fn weight(&self) -> f64 {
        points_to_score(self.points)
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            RuleKind::Keyword(_) => "keyword",
            RuleKind::Pattern(_) => "pattern",
        }
    }
}

/// An ordered collection of rules. Order decides the order of
/// `detected_patterns`: keywords first, then detectors.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The built-in table, compiled once per process.
    pub fn builtin() -> &'static RuleSet {
        &BUILTIN
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Convert integer points to a score. Exact for the thresholds we compare
/// against, since `n / 100.0` rounds to the same double as the literal.
pub fn points_to_score(points: u32) -> f64 {
    f64::from(points) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(label: &str) -> &'static Rule {
        RuleSet::builtin()
            .rules()
            .iter()
            .find(|r| r.label == label)
            .unwrap()
    }

    fn fires(label: &str, text: &str) -> bool {
        rule(label).matches(text, &text.to_lowercase())
    }

    #[test]
    fn test_builtin_table_size() {
        let set = RuleSet::builtin();
        assert_eq!(set.len(), SPAM_KEYWORDS.len() + PATTERN_SPECS.len());
        assert_eq!(set.rules()[0].label, "free money");
        assert_eq!(set.rules()[set.len() - 1].label, "phone_number");
    }

    #[test]
    fn test_every_keyword_matches_itself_case_insensitively() {
        for phrase in SPAM_KEYWORDS {
            let shouted = format!("Hey, {} today", phrase.to_uppercase());
            assert!(fires(phrase, &shouted), "{phrase} should match {shouted}");
        }
    }

    #[test]
    fn test_keyword_is_substring_match() {
        // Substring semantics: "selected" fires inside "preselected"
        assert!(fires("selected", "you were preselected"));
        assert!(!fires("claim now", "claim it now"));
    }

    #[test]
    fn test_link_detector() {
        assert!(fires("suspicious_link", "go to https://example.com/login"));
        assert!(fires("suspicious_link", "see http://x.io"));
        assert!(fires("suspicious_link", "visit www.example.com"));
        assert!(!fires("suspicious_link", "the world wide web"));
        assert!(!fires("suspicious_link", "https:// alone"));
    }

    #[test]
    fn test_email_detector() {
        assert!(fires("email_address", "write to support@example.com"));
        assert!(fires("email_address", "first.last+tag@mail.example.org"));
        assert!(!fires("email_address", "ping me @alice"));
        assert!(!fires("email_address", "user@localhost"));
    }

    #[test]
    fn test_phone_detector() {
        assert!(fires("phone_number", "call 555-123-4567"));
        assert!(fires("phone_number", "call (555) 123-4567"));
        assert!(fires("phone_number", "call +1 555.123.4567"));
        assert!(fires("phone_number", "call 5551234567"));
        assert!(!fires("phone_number", "room 101, floor 3"));
    }

    #[test]
    fn test_phone_detector_ignores_long_digit_runs() {
        assert!(!fires(
            "phone_number",
            "Your order 4111111111111111 shipped on 20241018"
        ));
        assert!(!fires("phone_number", "invoice 55512345678"));
        assert!(fires("phone_number", "5551234567"));
        assert!(fires("phone_number", "order 4111111111111111, call 555-123-4567."));
    }

    #[test]
    fn test_weights() {
        assert!((rule("urgent").weight() - 0.15).abs() < f64::EPSILON);
        assert!((rule("suspicious_link").weight() - 0.20).abs() < f64::EPSILON);
        assert!((rule("email_address").weight() - 0.10).abs() < f64::EPSILON);
        assert!((rule("phone_number").weight() - 0.10).abs() < f64::EPSILON);
    }

    #[test]
    fn test_points_to_score_hits_threshold_literals_exactly() {
        assert_eq!(points_to_score(30), 0.3);
        assert_eq!(points_to_score(60), 0.6);
    }

    #[test]
    fn test_custom_keyword_is_lowercased() {
        let r = Rule::keyword("Gift Card", 15);
        assert_eq!(r.label, "gift card");
        assert!(r.matches("Buy a GIFT CARD", "buy a gift card"));
        assert_eq!(r.kind_name(), "keyword");
    }
}
