/// Built-in study tips and websites, used when no content file is configured.
///
/// Tip text uses the markup understood by `crate::markup`: `##` headings,
/// `-` bullets, `1.` numbered steps, `[text](url)` links, and an early
/// `Label:` that is shown in bold.
use super::model::{ContentLibrary, Tip, Website};

const POMODORO: &str = "
    ## The Pomodoro Technique

    The Pomodoro Technique is a time management method that uses a timer to break work into intervals, traditionally 25 minutes in length, separated by short breaks.

    Steps:
    1. Choose a task.
    2. Set a timer for 25 minutes.
    3. Work until the timer rings.
    4. Take a short 5-minute break.
    5. Every four \"pomodoros,\" take a longer break (15-30 minutes).

    This keeps your brain fresh and prevents burnout during long study sessions.
";

const ACTIVE_RECALL: &str = "
    ## Active Recall

    Active recall is a highly effective study strategy that involves stimulating your memory during the learning process. Instead of passively reading your notes, you challenge your brain to retrieve the information.

    How to do it:
    - Summarize: Close your book and try to summarize what you just read.
    - Flashcards: Use tools like [Anki](https://apps.ankiweb.net/) or [Quizlet](https://quizlet.com/).
    - Quizzing: Take practice tests or quizzes without looking at your notes.
    - Teaching: Teach the concept to someone else (or an imaginary audience).
";

const SPACED_REPETITION: &str = "
    ## Spaced Repetition

    Spaced repetition is a learning technique that involves reviewing information at increasing intervals over time.

    Why it works:
    It leverages the \"forgetting curve.\" By reviewing just before you're likely to forget, you strengthen the neural pathways associated with that information, moving it into long-term memory.

    Schedule Example:
    - Review 1: 1 day after learning.
    - Review 2: 3 days after learning.
    - Review 3: 1 week after learning.
    - Review 4: 1 month after learning.
";

const FEYNMAN: &str = "
    ## Feynman Technique

    Named after physicist Richard Feynman, this technique helps you identify gaps in your understanding.

    The Process:
    1. Concept: Write the name of a concept at the top of a blank page.
    2. Simplify: Explain the concept in simple terms, as if you were teaching it to a 6-year-old.
    3. Review: Identify areas where you struggle or can't explain simply.
    4. Refine: Go back to the source material to fill in those gaps.
    5. Analogies: Simplify your language further and use analogies.
";

const ENVIRONMENT: &str = "
    ## Setting Up Your Study Space

    Your environment significantly impacts your focus and productivity.

    Tips for a great space:
    - Lighting: Natural light is best for staying awake and alert.
    - Ergonomics: Use a chair that supports your back and keep your screen at eye level.
    - Distractions: Keep your phone in another room or use \"Focus Mode.\"
    - Supplies: Have everything you need (water, pens, chargers) before you start.
";

pub fn study_tips() -> Vec<Tip> {
    vec![
        Tip::new("1", "The Pomodoro Technique", POMODORO),
        Tip::new("2", "Active Recall", ACTIVE_RECALL),
        Tip::new("3", "Spaced Repetition", SPACED_REPETITION),
        Tip::new("4", "Feynman Technique", FEYNMAN),
        Tip::new("5", "Environment Matters", ENVIRONMENT),
    ]
}

pub fn study_websites() -> Vec<Website> {
    [
        ("1", "Google Docs", "https://docs.google.com", "📄"),
        ("2", "Word", "https://www.microsoft365.com/launch/word", "📝"),
        ("3", "PowerPoint", "https://www.microsoft365.com/launch/powerpoint", "📊"),
        ("4", "Gmail", "https://mail.google.com", "✉️"),
        ("16", "Classroom", "https://classroom.google.com", "🎒"),
        ("17", "Dictionary", "https://www.dictionary.com", "📚"),
        ("18", "Canva", "https://www.canva.com", "🎨"),
        ("23", "TypingClub", "https://www.edclub.com/sportal/program-3.game", "⌨️"),
        ("20", "Cool Math", "https://www.coolmathgames.com", "🎮"),
        ("21", "Prodigy", "https://www.prodigygame.com", "🧙"),
        ("22", "XtraMath", "https://xtramath.org", "➕"),
        ("24", "Wordle", "https://www.nytimes.com/games/wordle/index.html", "🟩"),
        ("19", "Contexto", "https://contexto.me", "🧩"),
        ("6", "Duolingo", "https://www.duolingo.com", "🦉"),
        ("11", "Quizlet", "https://quizlet.com", "💡"),
        ("12", "Khan Academy", "https://www.khanacademy.org", "🏫"),
        ("13", "Wolfram Alpha", "https://www.wolframalpha.com", "🧮"),
        ("14", "Pomofocus", "https://pomofocus.io", "⏱️"),
        ("10", "Notion", "https://www.notion.so", "📓"),
        ("9", "Free Rice", "https://play.freerice.com/categories/english-vocabulary", "🍚"),
        ("8", "Ai Tutor", "https://app.youlearn.ai/", "🤖"),
        ("5", "Outlook", "https://outlook.live.com", "📧"),
        ("15", "Coursera", "https://www.coursera.org", "🎓"),
    ]
    .into_iter()
    .map(|(id, title, url, icon)| Website::new(id, title, url, icon))
    .collect()
}

impl ContentLibrary {
    pub fn builtin() -> Self {
        Self::new(study_tips(), study_websites(), None)
            .expect("built-in content has tips and unique ids")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{InlineSegment, RenderedBlock};

    #[test]
    fn test_builtin_library_is_valid() {
        let library = ContentLibrary::builtin();
        assert_eq!(library.tips().len(), 5);
        assert_eq!(library.websites().len(), 23);
        assert_eq!(library.first_tip().title, "The Pomodoro Technique");
    }

    #[test]
    fn test_every_record_retrievable_by_id() {
        let library = ContentLibrary::builtin();
        for tip in study_tips() {
            assert_eq!(library.tip(&tip.id).map(|t| &t.title), Some(&tip.title));
        }
        for site in study_websites() {
            let found = library.website(&site.id).unwrap();
            assert_eq!(found.title, site.title);
            assert_eq!(found.url, site.url);
        }
    }

    #[test]
    fn test_spaced_repetition_schedule_renders_labels() {
        let library = ContentLibrary::builtin();
        let blocks = library.tip("3").unwrap().render();
        assert!(blocks.contains(&RenderedBlock::BulletItem(vec![
            InlineSegment::BoldLabel("Review 1:".to_string()),
            InlineSegment::PlainText(" 1 day after learning.".to_string()),
        ])));
    }

    #[test]
    fn test_builtin_tips_keep_vertical_spacing() {
        let library = ContentLibrary::builtin();
        for tip in library.tips() {
            let blocks = tip.render();
            assert_eq!(blocks.len(), tip.content.split('\n').count());
            assert!(blocks.first().is_some_and(RenderedBlock::is_blank));
            assert!(blocks.iter().any(|b| matches!(b, RenderedBlock::Heading(_))));
        }
    }
}
