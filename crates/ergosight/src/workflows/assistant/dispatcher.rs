use serde::Serialize;
use tracing::debug;

pub const FALLBACK_INTENT: &str = "fallback";

/// Substring predicate over a lowercased query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    Contains(&'static str),
    AnyOf(Vec<Matcher>),
    AllOf(Vec<Matcher>),
    Not(Box<Matcher>),
}

impl Matcher {
    /// True when the query contains at least one of `needles`.
    pub fn any(needles: &[&'static str]) -> Self {
        Self::AnyOf(needles.iter().copied().map(Self::Contains).collect())
    }

    pub fn all(matchers: Vec<Matcher>) -> Self {
        Self::AllOf(matchers)
    }

    pub fn not(matcher: Matcher) -> Self {
        Self::Not(Box::new(matcher))
    }

    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Self::Contains(needle) => lowered.contains(needle),
            Self::AnyOf(matchers) => matchers.iter().any(|m| m.matches(lowered)),
            Self::AllOf(matchers) => matchers.iter().all(|m| m.matches(lowered)),
            Self::Not(matcher) => !matcher.matches(lowered),
        }
    }
}

/// Pre-authored answer: markdown-lite text plus an optional structured payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssistantReply<P> {
    pub intent: &'static str,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<P>,
}

impl<P> AssistantReply<P> {
    pub fn text(intent: &'static str, content: impl Into<String>) -> Self {
        Self {
            intent,
            content: content.into(),
            payload: None,
        }
    }

    pub fn with_payload(intent: &'static str, content: impl Into<String>, payload: P) -> Self {
        Self {
            intent,
            content: content.into(),
            payload: Some(payload),
        }
    }
}

pub struct IntentRule<P> {
    pub intent: &'static str,
    pub matcher: Matcher,
    pub reply: fn() -> AssistantReply<P>,
}

impl<P> IntentRule<P> {
    pub fn new(intent: &'static str, matcher: Matcher, reply: fn() -> AssistantReply<P>) -> Self {
        Self {
            intent,
            matcher,
            reply,
        }
    }
}

/// Ordered first-match-wins keyword dispatcher with an echoing fallback.
pub struct Dispatcher<P> {
    rules: Vec<IntentRule<P>>,
    fallback: fn(&str) -> AssistantReply<P>,
}

impl<P> Dispatcher<P> {
    pub fn new(rules: Vec<IntentRule<P>>, fallback: fn(&str) -> AssistantReply<P>) -> Self {
        Self { rules, fallback }
    }

    pub fn intents(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.intent)
    }

    pub fn dispatch(&self, query: &str) -> AssistantReply<P> {
        let lowered = query.to_lowercase();
        match self.rules.iter().find(|rule| rule.matcher.matches(&lowered)) {
            Some(rule) => {
                debug!(intent = rule.intent, "matched assistant intent");
                (rule.reply)()
            }
            None => {
                debug!("no assistant intent matched; using fallback");
                (self.fallback)(query)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greeting() -> AssistantReply<()> {
        AssistantReply::text("greeting", "hi")
    }

    fn farewell() -> AssistantReply<()> {
        AssistantReply::text("farewell", "bye")
    }

    fn echo(query: &str) -> AssistantReply<()> {
        AssistantReply::text(FALLBACK_INTENT, format!("echo: {query}"))
    }

    fn dispatcher() -> Dispatcher<()> {
        Dispatcher::new(
            vec![
                IntentRule::new(
                    "greeting",
                    Matcher::all(vec![Matcher::any(&["hello"]), Matcher::not(Matcher::Contains("bye"))]),
                    greeting,
                ),
                IntentRule::new("farewell", Matcher::any(&["bye", "hello"]), farewell),
            ],
            echo,
        )
    }

    #[test]
    fn first_matching_rule_wins() {
        let dispatcher = dispatcher();
        assert_eq!(dispatcher.dispatch("HELLO there").intent, "greeting");
        assert_eq!(dispatcher.dispatch("hello and bye").intent, "farewell");
    }

    #[test]
    fn fallback_echoes_original_casing() {
        let reply = dispatcher().dispatch("What Now?");
        assert_eq!(reply.intent, FALLBACK_INTENT);
        assert_eq!(reply.content, "echo: What Now?");
    }

    #[test]
    fn matcher_combinators() {
        let matcher = Matcher::all(vec![
            Matcher::Contains("seat"),
            Matcher::not(Matcher::Contains("accuracy")),
        ]);
        assert!(matcher.matches("seat h-point"));
        assert!(!matcher.matches("seat accuracy"));
        assert!(!Matcher::any(&[]).matches("anything"));
        assert!(Matcher::all(vec![]).matches("anything"));
    }
}
