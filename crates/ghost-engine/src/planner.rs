//! Micro-step planner.
//!
//! Turns a task's text into exactly three short, concrete next steps. Rules
//! are tried in order and the first match wins:
//!
//! 1. a leading verb from a fixed table (`start`, `setup`, `plan`, `research`,
//!    `read`, `find`, `write`, `fix`, `code`)
//! 2. a topic group matched anywhere in the text (food, search, writing,
//!    coding, studying, design)
//! 3. an art-reference rule for short texts (three words or fewer)
//! 4. a generic "break it down" fallback

use std::sync::LazyLock;

use regex::Regex;

static LEADING_VERB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s+(.*)$").expect("invalid leading verb regex"));

static FOOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(make|cook|brew|bake|prepare|mix|recipe|lemonade|sandwich|coffee|tea|smoothie|meal|drink)\b",
    )
    .expect("invalid food regex")
});

static SEARCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(find|search|research|look up)\b").expect("invalid search regex")
});

static WRITING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(write|draft|essay|email|message|post)\b").expect("invalid writing regex")
});

static CODING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(code|bug|debug|fix|implement|refactor|test)\b").expect("invalid coding regex")
});

static STUDYING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(study|studying|read|reading|review|reviewing|revise|revising|notes?|flashcards?|anki|practice|practicing|prep|learn|learning|hw|homework|chapters?|lectures?|quiz|quizzes|midterm|final)\b",
    )
    .expect("invalid studying regex")
});

static DESIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(design|ui|mock|sketch|figma|wireframe)\b").expect("invalid design regex")
});

static ART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(reference|pose|concept|style|inspiration|moodboard|draw|sketch|paint|illustrate|character|logo)\b",
    )
    .expect("invalid art regex")
});

/// Leading verbs with a dedicated template.
pub const KNOWN_VERBS: [&str; 9] = [
    "start", "setup", "plan", "research", "read", "find", "write", "fix", "code",
];

/// Topic groups, in match order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Food,
    Search,
    Writing,
    Coding,
    Studying,
    Design,
}

impl Topic {
    pub const ALL: [Self; 6] = [
        Self::Food,
        Self::Search,
        Self::Writing,
        Self::Coding,
        Self::Studying,
        Self::Design,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Food => &*FOOD,
            Self::Search => &*SEARCH,
            Self::Writing => &*WRITING,
            Self::Coding => &*CODING,
            Self::Studying => &*STUDYING,
            Self::Design => &*DESIGN,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Search => "search",
            Self::Writing => "writing",
            Self::Coding => "coding",
            Self::Studying => "studying",
            Self::Design => "design",
        }
    }
}

/// Which planner rule applies to a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanRule {
    Verb(&'static str),
    Topic(Topic),
    ArtReference,
    Generic,
}

impl PlanRule {
    /// Short label used by the CLI (`verb:fix`, `topic:food`, ...).
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Verb(verb) => format!("verb:{verb}"),
            Self::Topic(topic) => format!("topic:{}", topic.as_str()),
            Self::ArtReference => "art_reference".to_string(),
            Self::Generic => "generic".to_string(),
        }
    }
}

/// Split lowercased text into a leading verb and the remaining object.
/// A text with no whitespace has no verb and an empty object.
fn split_verb(lowered: &str) -> (Option<&str>, &str) {
    LEADING_VERB.captures(lowered).map_or((None, ""), |caps| {
        let verb = caps.get(1).map(|m| m.as_str());
        let object = caps.get(2).map_or("", |m| m.as_str());
        (verb, object)
    })
}

/// Decide which rule [`plan`] would use for `text`.
#[must_use]
pub fn classify_plan(text: &str) -> PlanRule {
    let lowered = text.trim().to_lowercase();

    if let (Some(verb), _) = split_verb(&lowered)
        && let Some(known) = KNOWN_VERBS.iter().find(|v| **v == verb)
    {
        return PlanRule::Verb(*known);
    }

    if let Some(topic) = Topic::ALL
        .into_iter()
        .find(|topic| topic.pattern().is_match(&lowered))
    {
        return PlanRule::Topic(topic);
    }

    if lowered.split_whitespace().count() <= 3 && ART.is_match(&lowered) {
        return PlanRule::ArtReference;
    }

    PlanRule::Generic
}

/// True when a verb, topic, or art-reference rule applies. The intent
/// classifier uses this to keep short imperatives out of the question route.
#[must_use]
pub fn has_specific_rule(text: &str) -> bool {
    classify_plan(text) != PlanRule::Generic
}

/// Produce exactly three next steps for `text`.
///
/// Templates interpolate either the trimmed text as typed or the lowercased
/// object after the leading verb.
#[must_use]
pub fn plan(text: &str) -> [String; 3] {
    let text = text.trim();
    let lowered = text.to_lowercase();
    let (_, object) = split_verb(&lowered);
    let object = object.trim();

    match classify_plan(text) {
        PlanRule::Verb(verb) => verb_steps(verb, object, text),
        PlanRule::Topic(topic) => topic_steps(topic, object, text),
        PlanRule::ArtReference => [
            format!("Search images for “{text} reference”."),
            "Pick ONE image that fits—don’t scroll forever.".to_string(),
            "Save it + write a 1-sentence note about why.".to_string(),
        ],
        PlanRule::Generic => [
            format!("Break “{text}” into 3 sub-steps in a bullet list."),
            "Do the first bullet without overthinking it.".to_string(),
            "Update the list after doing that one step.".to_string(),
        ],
    }
}

fn object_or<'a>(object: &'a str, fallback: &'a str) -> &'a str {
    if object.is_empty() { fallback } else { object }
}

fn verb_steps(verb: &str, object: &str, text: &str) -> [String; 3] {
    match verb {
        "start" => [
            format!(
                "Open the place you'll work on: {}.",
                object_or(object, "the task context")
            ),
            "Create a scratch note/todo for this task.".to_string(),
            "Do the first visible action and save/progress.".to_string(),
        ],
        "setup" => [
            "Open the repo/app where you’ll set this up.".to_string(),
            format!("Create/verify the config/file for “{}”.", object_or(object, text)),
            "Run once to confirm it boots without errors.".to_string(),
        ],
        "plan" => [
            format!("Open a note titled \"Plan: {}\".", object_or(object, "Task")),
            "List 3 bullets: Goal • First step • Blockers.".to_string(),
            "Turn the first bullet into a 10-minute action.".to_string(),
        ],
        "research" => [
            format!("Open one authoritative source on {}.", object_or(object, "the topic")),
            "Capture 3 key facts in your notes.".to_string(),
            "Write one follow-up question to investigate.".to_string(),
        ],
        "read" => [
            if object.is_empty() {
                "Open the document/source.".to_string()
            } else {
                format!("Open the document/source for “{object}”.")
            },
            "Skim headings and write a 2-line summary.".to_string(),
            "Flag one section to read deeply next.".to_string(),
        ],
        "find" => [
            format!("Search for “{}” in a new tab.", object_or(object, text)),
            "Open only the first relevant result.".to_string(),
            "Write 1 next step you can execute now.".to_string(),
        ],
        "write" => [
            "Make a 3-bullet outline.".to_string(),
            "Draft the first paragraph without editing.".to_string(),
            "Stop and note the next paragraph’s topic.".to_string(),
        ],
        "fix" => [
            "Reproduce the error and copy its message.".to_string(),
            "Add a log/print right before the failure.".to_string(),
            "Change one line, re-run, and compare output.".to_string(),
        ],
        _ => topic_steps(Topic::Coding, object, text),
    }
}

fn topic_steps(topic: Topic, object: &str, text: &str) -> [String; 3] {
    match topic {
        Topic::Food => [
            format!("Gather basics for “{text}” (ingredients + tools)."),
            format!(
                "Do step 1: {} (wash/slice/measure).",
                object_or(object, "prep ingredients")
            ),
            "Combine core parts, taste once, adjust one thing (sweet/sour/salt).".to_string(),
        ],
        Topic::Search => [
            format!("Open a new tab and search: “{text}”."),
            "Skim only the top 3 results; no scrolling.".to_string(),
            "Write 1 concrete next action in your notes.".to_string(),
        ],
        Topic::Writing => [
            "Make a 3-bullet outline (Intro • Body • Close).".to_string(),
            "Write one ugly paragraph without editing.".to_string(),
            "Do a 5-minute cleanup pass and stop.".to_string(),
        ],
        Topic::Coding => [
            "Reproduce the issue (copy the exact error/output).".to_string(),
            "Add a micro-test or log right before the failure.".to_string(),
            "Change ONE thing, re-run, and note the delta.".to_string(),
        ],
        Topic::Studying => [
            "Set a 25-minute timer (Pomodoro).".to_string(),
            "Skim once, then write a 3-line summary from memory.".to_string(),
            "Create 3 recall Qs (or 5 flashcards) and mark what to revisit.".to_string(),
        ],
        Topic::Design => [
            "List 3 constraints (screen • user • goal).".to_string(),
            "Sketch 2 tiny variations in 5 minutes.".to_string(),
            "Pick one and label the primary action.".to_string(),
        ],
    }
}
