// File: crates/explorer-core/src/table.rs
// Summary: Row/table model produced by ingestion, plus a reader for MESA history/profile text output.
// Notes:
// - Rows are read-only for the rest of the crate; all value access goes through accessors.
// - Unparseable cells are stored as NaN (the missing sentinel).

use std::collections::HashMap;
use std::rc::Rc;

use crate::error::TableError;

/// One bulk column and its ingestion-time hint.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnInfo {
    pub name: String,
    /// Column name suggests the values are already logarithmic.
    pub log_hint: bool,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let log_hint = likely_log(&name);
        Self { name, log_hint }
    }
}

/// `log*`, `lg*` or `*_log*` names are treated as log-valued.
pub fn likely_log(name: &str) -> bool {
    name.starts_with("log") || name.starts_with("lg") || name.contains("_log")
}

/// Column names with a lookup index, shared by every row of a table.
#[derive(Debug)]
pub struct Columns {
    infos: Vec<ColumnInfo>,
    index: HashMap<String, usize>,
}

impl Columns {
    fn new(infos: Vec<ColumnInfo>) -> Self {
        let mut index = HashMap::with_capacity(infos.len());
        for (i, c) in infos.iter().enumerate() {
            // first occurrence wins on duplicate names
            index.entry(c.name.clone()).or_insert(i);
        }
        Self { infos, index }
    }
    pub fn len(&self) -> usize { self.infos.len() }
    pub fn is_empty(&self) -> bool { self.infos.is_empty() }
    pub fn position(&self, name: &str) -> Option<usize> { self.index.get(name).copied() }
    pub fn iter(&self) -> impl Iterator<Item = &ColumnInfo> { self.infos.iter() }
}

/// One record: column name -> value.
#[derive(Clone, Debug)]
pub struct Row {
    columns: Rc<Columns>,
    values: Vec<f64>,
}

impl Row {
    /// `None` when the table has no such column; `Some(NaN)` for a missing cell.
    pub fn get(&self, column: &str) -> Option<f64> {
        let i = self.columns.position(column)?;
        Some(self.values.get(i).copied().unwrap_or(f64::NAN))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    History,
    Profile,
    Gyre,
    Unknown,
}

impl FileKind {
    /// Classify from raw lines (trailing whitespace already stripped).
    pub fn detect(lines: &[&str]) -> Self {
        if lines.len() < 7 { return FileKind::Unknown; }
        if lines[0].trim().is_empty() {
            let nums: Vec<&str> = lines[4].split_whitespace().collect();
            return if nums.first() == Some(&"1") && nums.get(1) == Some(&"2") { FileKind::Gyre } else { FileKind::Unknown };
        }
        FileKind::from_column_names(lines[5].split_whitespace())
    }

    pub fn from_column_names<'a>(mut names: impl Iterator<Item = &'a str> + Clone) -> Self {
        if names.clone().any(|n| n == "model_number") {
            FileKind::History
        } else if names.any(|n| n == "zone") {
            FileKind::Profile
        } else {
            FileKind::Unknown
        }
    }
}

const HEADER_NAMES_LINE: usize = 1;
const HEADER_VALUES_LINE: usize = 2;
const BULK_NAMES_LINE: usize = 5;

/// A loaded file: header metadata plus bulk rows.
#[derive(Clone, Debug)]
pub struct Table {
    pub name: String,
    pub kind: FileKind,
    pub header: Vec<(String, String)>,
    columns: Rc<Columns>,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from column names and row-major values.
    pub fn from_columns(name: impl Into<String>, names: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, TableError> {
        let name = name.into();
        if names.is_empty() { return Err(TableError::NoColumns { name }); }
        let kind = FileKind::from_column_names(names.iter().map(String::as_str));
        let columns = Rc::new(Columns::new(names.into_iter().map(ColumnInfo::new).collect()));
        let rows = rows.into_iter().map(|values| Row { columns: Rc::clone(&columns), values }).collect();
        Ok(Self { name, kind, header: Vec::new(), columns, rows })
    }

    /// Parse MESA history/profile output.
    pub fn parse_mesa(name: impl Into<String>, text: &str) -> Result<Self, TableError> {
        let name = name.into();
        let lines: Vec<&str> = text.trim_end().lines().collect();
        let kind = FileKind::detect(&lines);
        if kind == FileKind::Unknown {
            return Err(TableError::UnknownFormat { name });
        }
        let line = |i: usize| lines.get(i).copied().ok_or_else(|| TableError::MissingHeader { name: name.clone(), line: i + 1 });

        let header_values: Vec<&str> = line(HEADER_VALUES_LINE)?.split_whitespace().collect();
        let header = line(HEADER_NAMES_LINE)?
            .split_whitespace()
            .enumerate()
            .map(|(i, k)| (k.to_string(), header_values.get(i).map(|v| v.replace('"', "")).unwrap_or_default()))
            .collect();

        let infos: Vec<ColumnInfo> = line(BULK_NAMES_LINE)?.split_whitespace().map(ColumnInfo::new).collect();
        if infos.is_empty() { return Err(TableError::NoColumns { name }); }
        let columns = Rc::new(Columns::new(infos));

        let mut rows: Vec<Row> = lines[BULK_NAMES_LINE + 1..]
            .iter()
            .map(|l| {
                let values = l.split_whitespace().take(columns.len()).map(parse_cell).collect();
                Row { columns: Rc::clone(&columns), values }
            })
            .collect();
        if columns.position("model_number").is_some() {
            drop_backed_up_models(&mut rows);
        }
        log::debug!("parsed {} ({:?}): {} columns, {} rows", name, kind, columns.len(), rows.len());
        Ok(Self { name, kind, header, columns, rows })
    }

    pub fn rows(&self) -> &[Row] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn columns(&self) -> impl Iterator<Item = &ColumnInfo> { self.columns.iter() }
    pub fn column_names(&self) -> Vec<String> { self.columns.iter().map(|c| c.name.clone()).collect() }
    pub fn has_column(&self, name: &str) -> bool { self.columns.position(name).is_some() }

    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.position(name).and_then(|i| self.columns.infos.get(i))
    }

    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.header.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

fn parse_cell(s: &str) -> f64 {
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Walking backward from the last row, drop rows whose model number is not below
/// the last kept one (retries and backups in a MESA run).
fn drop_backed_up_models(rows: &mut Vec<Row>) {
    let Some(last_row) = rows.last() else { return };
    let mut last = last_row.get("model_number").unwrap_or(f64::NAN);
    let mut keep = vec![true; rows.len()];
    for i in (0..rows.len().saturating_sub(1)).rev() {
        let m = rows[i].get("model_number").unwrap_or(f64::NAN);
        if m >= last { keep[i] = false; } else { last = m; }
    }
    let mut flags = keep.into_iter();
    rows.retain(|_| flags.next().unwrap_or(true));
}

/// Column names present in every table, in the first table's order.
pub fn common_columns(tables: &[Rc<Table>]) -> Vec<String> {
    let Some(first) = tables.first() else { return Vec::new() };
    first
        .columns()
        .filter(|c| tables[1..].iter().all(|t| t.has_column(&c.name)))
        .map(|c| c.name.clone())
        .collect()
}
