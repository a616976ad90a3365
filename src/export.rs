pub mod ascii;
pub mod csv;
pub mod pdf;

use std::path::{Path, PathBuf};

use crate::{core::comparison::Comparison, prelude::*, quantity::cost::Cost};

/// Amount without the currency sign, always with two decimal places.
fn plain(cost: Cost) -> String {
    format!("{:.2}", cost.0)
}

/// Write both reports into the directory and return their paths.
#[instrument(skip_all, fields(directory = %directory.display()))]
pub fn write_reports(comparison: &Comparison, directory: &Path) -> Result<[PathBuf; 2]> {
    std::fs::create_dir_all(directory)
        .with_context(|| format!("failed to create `{}`", directory.display()))?;
    let csv_path = directory.join(csv::FILE_NAME);
    write(&csv_path, &csv::to_csv(comparison)?)?;
    let pdf_path = directory.join(pdf::FILE_NAME);
    write(&pdf_path, &pdf::to_pdf(comparison)?)?;
    Ok([csv_path, pdf_path])
}

fn write(path: &Path, contents: &[u8]) -> Result {
    std::fs::write(path, contents).with_context(|| format!("failed to write `{}`", path.display()))?;
    info!(path = %path.display(), n_bytes = contents.len(), "exported");
    Ok(())
}
