//! Append-only operation log.
//!
//! Records are length-prefixed and bincode-encoded; document payloads travel
//! as raw BSON bytes so the log format stays independent of the in-memory
//! representation. The writer flushes after every record: once an operation
//! is acknowledged, a restarted process replays it.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::DocumentId;
use crate::error::StoreError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum WalOp {
    Insert,
    Update,
    Delete,
}

/// One logged operation. `data` holds BSON document bytes for inserts and
/// updates, and is absent for deletes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalRecord {
    pub op: WalOp,
    pub collection: String,
    pub id: DocumentId,
    pub data: Option<Vec<u8>>,
}

pub fn doc_to_bytes(doc: &bson::Document) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    doc.to_writer(&mut buf)?;
    Ok(buf)
}

pub fn doc_from_bytes(bytes: &[u8]) -> Result<bson::Document, StoreError> {
    bson::Document::from_reader(bytes).map_err(StoreError::from)
}

pub struct Wal {
    writer: BufWriter<File>,
}

impl Wal {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { writer: BufWriter::new(file) })
    }

    pub fn append(&mut self, record: &WalRecord) -> Result<(), StoreError> {
        let bytes = bincode::serde::encode_to_vec(record, bincode::config::standard())?;
        let len = u32::try_from(bytes.len())
            .map_err(|_| StoreError::Corrupt(format!("oversized record: {} bytes", bytes.len())))?;
        self.writer.write_all(&len.to_le_bytes())?;
        self.writer.write_all(&bytes)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Read every record from the log at `path`. A missing file is an empty log.
pub fn replay(path: &Path) -> Result<Vec<WalRecord>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let mut reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    while let Some(record) = read_record(&mut reader)? {
        records.push(record);
    }
    Ok(records)
}

fn read_record<R: Read>(reader: &mut R) -> Result<Option<WalRecord>, StoreError> {
    let mut len_buf = [0u8; 4];
    match reader.read_exact(&mut len_buf) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(StoreError::Io(e)),
    }
    let len = u32::from_le_bytes(len_buf) as usize;
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf).map_err(|e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            StoreError::Corrupt("truncated record".into())
        } else {
            StoreError::Io(e)
        }
    })?;
    let (record, _) = bincode::serde::decode_from_slice(&buf, bincode::config::standard())?;
    Ok(Some(record))
}
