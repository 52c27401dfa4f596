pub mod config;
pub mod error;
pub mod model;
pub mod pagination;
pub mod picker;
pub mod search;

pub use config::{LogFormat, TriviaConfig};
pub use error::{Result, TriviaError};
pub use model::{
    parse_id, Category, CategoryId, LooseInt, NewQuestion, Question, QuestionId, QuizCategory,
    ALL_CATEGORIES,
};
pub use pagination::{paginate, PageParams, Pagination, QUESTIONS_PER_PAGE};
pub use picker::{pick_unserved, pick_with};
pub use search::{like_literal, search};
