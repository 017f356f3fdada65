#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod condition;
pub mod config;
pub mod error;
pub mod parser;
pub mod plugin;
pub mod request;
pub mod result;
pub mod service;
pub mod traits;
pub mod types;

pub use condition::SearchCondition;
pub use error::{Error, Result, ValidationError};
pub use parser::QueryParser;
pub use plugin::{AcceptedCond, AnswerAcceptedCond, QuestionAcceptedCond, SearchBasicCond, SearchOrderCond};
pub use request::{SearchRequest, ValidatedSearch};
pub use service::SearchService;
pub use types::{ObjectType, SearchOrder, SearchTarget};
