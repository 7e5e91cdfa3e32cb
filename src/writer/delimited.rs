use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::generator::TransactionLine;
use crate::ui::{Phase, Ui};

/// Output columns, in file order
pub const CSV_HEADER: [&str; 14] = [
    "date",
    "branch_id",
    "category",
    "product_name",
    "unit_price",
    "quantity_sold",
    "total_amount",
    "day_of_week",
    "month",
    "promotion_active",
    "special_event",
    "average_temperature",
    "rain",
    "branch_zone",
];

/// Mode of the published file; temporary files start out owner-only
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o644;

/// Report progress every this many rows
const PROGRESS_INTERVAL: usize = 10_000;

/// Serialize lines as CSV with a header row into any writer
pub fn write_to<W: Write>(lines: &[TransactionLine], out: W) -> Result<u64> {
    write_rows(lines, out, &mut crate::ui::SilentUi::new())
}

fn write_rows<W: Write>(lines: &[TransactionLine], out: W, ui: &mut impl Ui) -> Result<u64> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    writer
        .write_record(CSV_HEADER)
        .context("Failed to write CSV header")?;

    let total = lines.len() as u64;
    for (idx, line) in lines.iter().enumerate() {
        writer
            .serialize(line)
            .with_context(|| format!("Failed to write row {}", idx + 1))?;

        if (idx + 1) % PROGRESS_INTERVAL == 0 {
            ui.set_progress(idx as u64 + 1, total, "rows");
        }
    }

    writer.flush().context("Failed to flush CSV output")?;
    ui.set_progress(total, total, "rows");
    Ok(total)
}

/// Write the table to `path`.
///
/// Rows go to a temporary file next to the destination, which replaces the
/// destination only once every row is flushed. On error the destination is
/// left untouched.
pub fn write_csv(lines: &[TransactionLine], path: &Path, ui: &mut impl Ui) -> Result<u64> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {:?}", dir))?;

    let temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {:?}", dir))?;

    ui.set_phase(Phase::Writing);
    let count = write_rows(lines, temp.as_file(), ui)?;

    temp.as_file()
        .sync_all()
        .context("Failed to sync CSV output")?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(temp.path(), fs::Permissions::from_mode(OUTPUT_MODE))
            .with_context(|| format!("Failed to set permissions on {:?}", temp.path()))?;
    }
    temp.persist(path)
        .with_context(|| format!("Failed to move output into place: {:?}", path))?;

    ui.log(format!("Wrote {} rows to {:?}", count, path));
    Ok(count)
}
