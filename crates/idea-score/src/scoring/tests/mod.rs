mod common;

mod insights;
mod rubric;
