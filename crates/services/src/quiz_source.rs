use async_trait::async_trait;

use quiz_core::model::{OptionId, Question, QuestionId, Quiz, QuizOption};

use crate::error::QuizSourceError;

/// Topic of the built-in quiz.
pub const DEFAULT_TOPIC: &str = "שועלים";

/// Supplies quiz content for a topic.
///
/// Callers treat every fetch as possibly slow and possibly failing, and never
/// retry on their own. A quiz with no questions counts as a failure.
#[async_trait]
pub trait QuizSource: Send + Sync {
    /// # Errors
    ///
    /// Returns `QuizSourceError` if no quiz can be produced for `topic`.
    async fn fetch(&self, topic: &str) -> Result<Quiz, QuizSourceError>;
}

/// Returns the same hardcoded five-question fox quiz for every topic.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticQuizSource;

impl StaticQuizSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl QuizSource for StaticQuizSource {
    async fn fetch(&self, _topic: &str) -> Result<Quiz, QuizSourceError> {
        fox_quiz()
    }
}

fn question(
    id: &str,
    text: &str,
    options: [&str; 4],
    correct: &str,
) -> Result<Question, QuizSourceError> {
    let options = options
        .iter()
        .enumerate()
        .map(|(index, text)| -> Result<QuizOption, QuizSourceError> {
            Ok(QuizOption::new(OptionId::new(format!("o{}", index + 1))?, *text))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Question::new(
        QuestionId::new(id)?,
        text,
        options,
        OptionId::new(correct)?,
    )?)
}

/// The built-in quiz content.
///
/// # Errors
///
/// Returns `QuizSourceError::Invalid` only if the hardcoded data breaks quiz invariants.
pub fn fox_quiz() -> Result<Quiz, QuizSourceError> {
    let questions = vec![
        question(
            "q1",
            "לאיזו משפחה ביולוגית משתייך השועל?",
            [
                "משפחת הכלביים",
                "משפחת החתוליים",
                "משפחת הסמוריים",
                "משפחת הדוביים",
            ],
            "o1",
        )?,
        question(
            "q2",
            "מהו מין השועל הנפוץ ביותר בעולם (וגם בישראל)?",
            ["שועל שלג", "שועל מצוי (אדום)", "שועל חולות", "שועל אפור"],
            "o2",
        )?,
        question(
            "q3",
            "למה משמש הזנב המפואר של השועל בעיקר?",
            [
                "לניקוי הגוף",
                "לשיווי משקל וחימום הגוף בחורף",
                "להרחקת זבובים בלבד",
                "לסימון טריטוריה בלבד",
            ],
            "o2",
        )?,
        question(
            "q4",
            "איזה מין של שועל ידוע באוזניו הגדולות במיוחד ביחס לגופו?",
            ["שועל קוטב", "שועל צוקים", "שועל הפנק", "שועל ערבות"],
            "o3",
        )?,
        question(
            "q5",
            "מהו המאכל העיקרי של השועלים?",
            [
                "הם צמחוניים בלבד",
                "הם אוכלי כל (טורפים וגם פירות/ירקות)",
                "רק בשר ציד גדול",
                "דגים בלבד",
            ],
            "o2",
        )?,
    ];

    Ok(Quiz::new(
        "חידון השועלים הגדול",
        "בחן את הידע שלך על החיה הערמומית והחכמה ביותר בטבע! האם תצליח לקבל 100?",
        questions,
    )?)
}
