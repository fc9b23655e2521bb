mod answers;
mod attempt;
mod identity;
mod ids;
mod quiz;

pub use ids::{IdError, OptionId, QuestionId};

pub use answers::AnswerSet;
pub use attempt::{AttemptError, AttemptRecord};
pub use identity::{IdentityError, UserIdentity};
pub use quiz::{Question, Quiz, QuizError, QuizOption};
