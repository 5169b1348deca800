//! Servicio de PDF
//!
//! El backend genera el PDF y lo devuelve en base64. Aquí solo se decodifica
//! y se guarda como archivo; no hay red ni recuperación de errores.

use std::io;
use std::path::{Path, PathBuf};

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use thiserror::Error;

use crate::models::PdfData;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
const DEFAULT_FILENAME: &str = "booking.pdf";

/// Base64 estándar, con o sin relleno
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("No PDF data received")]
    MissingPayload,

    #[error("Invalid PDF payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Failed to write PDF: {0}")]
    Io(#[from] io::Error),
}

/// PDF decodificado listo para guardar o servir
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl PdfFile {
    pub fn content_type(&self) -> &'static str {
        PDF_CONTENT_TYPE
    }

    /// Escribir el archivo en `dir` usando solo el último componente del nombre
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, PdfError> {
        let path = dir.join(safe_filename(&self.filename));
        std::fs::write(&path, &self.bytes)?;
        log::info!("📄 PDF guardado en {}", path.display());
        Ok(path)
    }
}

/// Decodificar un PDF en base64. Se ignoran espacios y un prefijo `data:`.
pub fn decode_pdf(base64_payload: &str, filename: &str) -> Result<PdfFile, PdfError> {
    let payload = match base64_payload.trim().split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => base64_payload,
    };
    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if compact.is_empty() {
        return Err(PdfError::MissingPayload);
    }

    let bytes = LENIENT_STANDARD.decode(compact.as_bytes()).map_err(|e| {
        log::error!("❌ Error downloading PDF: {}", e);
        PdfError::Decode(e)
    })?;

    Ok(PdfFile {
        filename: filename.to_string(),
        bytes,
    })
}

/// Decodificar la respuesta de `generatePDF`
pub fn decode_pdf_data(data: &PdfData) -> Result<PdfFile, PdfError> {
    decode_pdf(&data.base64, &data.filename)
}

fn safe_filename(filename: &str) -> String {
    Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string())
}
