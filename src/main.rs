use cowin_cli::errors::{AppError, AppResult};

fn main() -> AppResult<()> {
    let rt = tokio::runtime::Runtime::new().map_err(|e| AppError::Runtime(e.to_string()))?;

    rt.block_on(cowin_cli::cli::cli())?;
    Ok(())
}
