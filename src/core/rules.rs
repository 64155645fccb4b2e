use crate::config::rules_file::{RuleSide, RulesFile};
use crate::domain::model::{LinePair, Verdict};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MergeError, Result};
use regex::Regex;

// Timecode shapes seen in subtitle corpora:
//   546 00:31:48,490 --> 00:31:49,865   (also "--" and "." milliseconds)
//   01:19:31,500...  01:19:32,832
//   [00:01:23.45]
//   546 00:31:48,490
//   546                                  (bare cue index)
const TIMECODE_PATTERNS: &[&str] = &[
    r"\d{2}:\d{2}:\d{2}[,.]\d{3}\s*-{1,2}>?\s*\d{2}:\d{2}:\d{2}[,.]\d{3}",
    r"\d{2}:\d{2}:\d{2}[,.]\d{3}\.{2,}\s*\d{2}:\d{2}:\d{2}[,.]\d{3}",
    r"\[\d{2}:\d{2}:\d{2}[.,]\d{2,3}\]",
    r"^\d+\s+\d{2}:\d{2}:\d{2}[,.]\d{3}",
    r"^\d+$",
];

const MARKUP_PATTERN: &str = r"<[^<>]+>";

// ASS styling tags: {\an8}, {\fs20}, {\fnArial} and friends.
const ASS_TAG_PATTERN: &str = r"\{[^{}]*\}";

#[derive(Debug)]
pub struct Rule {
    name: String,
    kind: RuleKind,
}

#[derive(Debug)]
enum RuleKind {
    Timecode(Vec<Regex>),
    Markup(Regex),
    Empty,
    AssTag(Regex),
    Duplicate,
    Bilingual,
    Pattern { regex: Regex, side: RuleSide },
}

impl Rule {
    pub fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, pair: &LinePair) -> bool {
        let source = pair.source.trim();
        let target = pair.target.trim();

        match &self.kind {
            RuleKind::Timecode(patterns) => patterns
                .iter()
                .any(|p| p.is_match(source) || p.is_match(target)),
            RuleKind::Markup(pattern) | RuleKind::AssTag(pattern) => {
                pattern.is_match(source) || pattern.is_match(target)
            }
            RuleKind::Empty => source.is_empty() || target.is_empty(),
            RuleKind::Duplicate => source == target,
            RuleKind::Bilingual => !source.is_empty() && target.ends_with(source),
            RuleKind::Pattern { regex, side } => match side {
                RuleSide::Source => regex.is_match(source),
                RuleSide::Target => regex.is_match(target),
                RuleSide::Both => regex.is_match(source) || regex.is_match(target),
            },
        }
    }
}

/// Process-scoped, explicitly constructed rule set. Patterns are compiled
/// once at startup and reused for the whole run; rules are evaluated in a
/// fixed order and the first match determines the verdict's reason.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let timecode = TIMECODE_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("built-in timecode pattern"))
            .collect();

        let mut rules = vec![
            Rule {
                name: "timecode".to_string(),
                kind: RuleKind::Timecode(timecode),
            },
            Rule {
                name: "markup".to_string(),
                kind: RuleKind::Markup(Regex::new(MARKUP_PATTERN).expect("built-in markup pattern")),
            },
            Rule {
                name: "empty".to_string(),
                kind: RuleKind::Empty,
            },
        ];

        if config.filter_ass_tags() {
            rules.push(Rule {
                name: "ass-tag".to_string(),
                kind: RuleKind::AssTag(
                    Regex::new(ASS_TAG_PATTERN).expect("built-in ass-tag pattern"),
                ),
            });
        }
        if config.filter_duplicates() {
            rules.push(Rule {
                name: "duplicate".to_string(),
                kind: RuleKind::Duplicate,
            });
        }
        if config.filter_bilingual() {
            rules.push(Rule {
                name: "bilingual".to_string(),
                kind: RuleKind::Bilingual,
            });
        }

        if let Some(path) = config.rules_path() {
            let file = RulesFile::load(path)?;
            for custom in file.rule {
                let regex = Regex::new(&custom.pattern).map_err(|e| {
                    MergeError::InvalidConfigValueError {
                        field: format!("rule.{}", custom.name),
                        value: custom.pattern.clone(),
                        reason: e.to_string(),
                    }
                })?;
                rules.push(Rule {
                    name: custom.name,
                    kind: RuleKind::Pattern {
                        regex,
                        side: custom.applies_to,
                    },
                });
            }
        }

        Ok(Self { rules })
    }

    /// First matching rule wins; no rule matching means the pair is clean.
    /// Pure: identical input always yields the identical verdict.
    pub fn classify(&self, pair: &LinePair) -> Verdict<'_> {
        for rule in &self.rules {
            if rule.matches(pair) {
                return Verdict::Dirty(rule.name());
            }
        }
        Verdict::Clean
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }
}
