mod cli;
mod infra;
mod render;

use idea_score::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
