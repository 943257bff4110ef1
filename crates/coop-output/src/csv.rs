//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `entities.csv`: `index,name,kind`, one row per entity in matrix order
//! - `adjacency.csv`: `tick,entity,<name…>`, one dense row per entity per
//!   snapshot
//! - `final_needs.csv`: `agent,name,x,y,food,water,cleanliness`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::writer::OutputWriter;
use crate::{EntityRow, FinalNeedsRow, OutputError, OutputResult};

/// Writes run results to three CSV files.
pub struct CsvWriter {
    names:     Vec<String>,
    adjacency: Writer<File>,
    needs:     Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the files in `dir`, write `entities.csv` in full and the
    /// headers of the other two.
    pub fn new(dir: &Path, entity_names: &[String]) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut entities = Writer::from_path(dir.join("entities.csv"))?;
        entities.write_record(["index", "name", "kind"])?;
        for row in EntityRow::from_names(entity_names) {
            entities.write_record([row.index.to_string(), row.name, row.kind])?;
        }
        entities.flush()?;

        let mut adjacency = Writer::from_path(dir.join("adjacency.csv"))?;
        let header = ["tick", "entity"].into_iter().chain(entity_names.iter().map(String::as_str));
        adjacency.write_record(header)?;

        let mut needs = Writer::from_path(dir.join("final_needs.csv"))?;
        needs.write_record(["agent", "name", "x", "y", "food", "water", "cleanliness"])?;

        debug!(dir = %dir.display(), entities = entity_names.len(), "csv output opened");
        Ok(Self { names: entity_names.to_vec(), adjacency, needs, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshot(&mut self, snapshot: &coop_sim::Snapshot) -> OutputResult<()> {
        let size = snapshot.matrix.size();
        if size != self.names.len() {
            return Err(OutputError::SizeMismatch {
                tick:     snapshot.tick.0,
                got:      size,
                expected: self.names.len(),
            });
        }
        let tick = snapshot.tick.0.to_string();
        for (name, row) in self.names.iter().zip(snapshot.matrix.rows()) {
            let mut record = Vec::with_capacity(size + 2);
            record.push(tick.clone());
            record.push(name.clone());
            record.extend(row.iter().map(u8::to_string));
            self.adjacency.write_record(&record)?;
        }
        Ok(())
    }

    fn write_final_needs(&mut self, rows: &[FinalNeedsRow]) -> OutputResult<()> {
        for row in rows {
            self.needs.write_record(&[
                row.agent.to_string(),
                format!("chicken_{}", row.agent),
                row.x.to_string(),
                row.y.to_string(),
                row.food.to_string(),
                row.water.to_string(),
                row.cleanliness.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.adjacency.flush()?;
        self.needs.flush()?;
        Ok(())
    }
}
