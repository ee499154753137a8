//! CSV export of generated wallets.
//!
//! Files are UTF-8 with a byte-order mark so spreadsheet tools pick the
//! right encoding, one header row and one row per wallet.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use receipt_chain::Wallet;

/// Column headers: chain label, private key, address.
pub const HEADER: [&str; 3] = ["Chain", "Private Key (hex)", "Address"];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Quote a field if it contains a comma, quote, CR or LF, doubling quotes.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn write_row<W: Write>(writer: &mut W, fields: [&str; 3]) -> io::Result<()> {
    let [chain, private_key, address] = fields.map(escape_field);
    writeln!(writer, "{chain},{private_key},{address}")
}

/// Write the BOM, header and wallet rows.
pub fn write_csv<W: Write>(writer: &mut W, wallets: &[Wallet]) -> io::Result<()> {
    writer.write_all(UTF8_BOM)?;
    write_row(writer, HEADER)?;
    for wallet in wallets {
        write_row(writer, [wallet.chain(), wallet.private_key_hex(), wallet.address()])?;
    }
    Ok(())
}

/// Create (or truncate) `path` and write the wallets to it.
pub fn write_file(path: &Path, wallets: &[Wallet]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_csv(&mut writer, wallets)?;
    writer.flush()?;
    tracing::info!(path = %path.display(), rows = wallets.len(), "exported wallets");
    Ok(())
}

/// `wallets_YYYYMMDD_HHMMSS.csv` for the given local time.
pub fn default_file_name(now: NaiveDateTime) -> String {
    format!("wallets_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Use `path` as is, or a timestamped file inside it if it is a directory.
pub fn resolve_path(path: &Path, now: NaiveDateTime) -> PathBuf {
    if path.is_dir() {
        path.join(default_file_name(now))
    } else {
        path.to_path_buf()
    }
}
