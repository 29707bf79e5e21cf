use super::error::ExtractionError;
use calamine::{open_workbook_from_rs, Reader, Xlsx};
use std::io::Cursor;

/// Number of characters shown when previewing extracted text
pub const PREVIEW_CHARS: usize = 1000;

/// Document type, decided purely by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
    Csv,
    Spreadsheet,
    Unknown,
}

impl DocumentKind {
    pub fn from_file_name(file_name: &str) -> Self {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => DocumentKind::PlainText,
            "pdf" => DocumentKind::Pdf,
            "csv" => DocumentKind::Csv,
            "xlsx" => DocumentKind::Spreadsheet,
            _ => DocumentKind::Unknown,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, DocumentKind::Unknown)
    }
}

/// Converts uploaded documents to plain text
#[derive(Debug, Default, Clone)]
pub struct ExtractionService;

impl ExtractionService {
    pub fn new() -> Self {
        Self
    }

    /// Extract the text of an uploaded file.
    ///
    /// Unknown extensions yield empty text. Parsing runs on the blocking pool,
    /// and a parser panic is reported as an error of the document's format.
    pub async fn extract(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, ExtractionError> {
        let kind = DocumentKind::from_file_name(file_name);

        tracing::info!(
            file_name = file_name,
            kind = ?kind,
            size_bytes = bytes.len(),
            "Extracting document text"
        );

        let text = tokio::task::spawn_blocking(move || extract_sync(kind, bytes))
            .await
            .map_err(|e| parser_crashed(kind, e))??;

        tracing::info!(
            file_name = file_name,
            text_length = text.chars().count(),
            "Document text extracted"
        );

        Ok(text)
    }
}

fn parser_crashed(kind: DocumentKind, err: tokio::task::JoinError) -> ExtractionError {
    let msg = format!("parser aborted: {}", err);
    tracing::error!(kind = ?kind, error = %msg, "Document parser crashed");
    match kind {
        DocumentKind::Spreadsheet => ExtractionError::Spreadsheet(msg),
        _ => ExtractionError::Pdf(msg),
    }
}

fn extract_sync(kind: DocumentKind, bytes: Vec<u8>) -> Result<String, ExtractionError> {
    match kind {
        DocumentKind::PlainText => Ok(String::from_utf8(bytes)?),
        DocumentKind::Pdf => extract_pdf(&bytes),
        DocumentKind::Csv => extract_csv(&bytes),
        DocumentKind::Spreadsheet => extract_spreadsheet(bytes),
        DocumentKind::Unknown => Ok(String::new()),
    }
}

/// Pages are joined with no separator.
fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
    Ok(pages.concat())
}

/// Header row included; every cell space-joined in row-major order.
fn extract_csv(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut cells = Vec::new();
    for record in reader.records() {
        let record = record?;
        cells.extend(record.iter().map(str::to_string));
    }

    Ok(cells.join(" "))
}

/// First worksheet only; empty cells become empty strings.
fn extract_spreadsheet(bytes: Vec<u8>) -> Result<String, ExtractionError> {
    let mut workbook = open_workbook_from_rs::<Xlsx<_>, _>(Cursor::new(bytes))
        .map_err(|e| ExtractionError::Spreadsheet(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ExtractionError::Spreadsheet("workbook has no worksheets".to_string()))?
        .map_err(|e| ExtractionError::Spreadsheet(e.to_string()))?;

    let cells: Vec<String> = range
        .rows()
        .flat_map(|row| row.iter().map(|cell| cell.to_string()))
        .collect();

    Ok(cells.join(" "))
}

/// First `PREVIEW_CHARS` characters, with `...` appended when truncated
pub fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
