use std::path::Path;

use anyhow::Result;

use crate::models::ClassifiedSentence;

/// Write the corpus-wide dataset as a two-column CSV with a `Sentence,Label`
/// header. Quoting of embedded commas and quotes is handled by the writer.
pub fn write_csv(dataset: &[ClassifiedSentence], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Sentence", "Label"])?;

    for row in dataset {
        writer.write_record([row.text.as_str(), &row.category.to_string()])?;
    }

    writer.flush()?;
    Ok(())
}
